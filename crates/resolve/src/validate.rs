use garden_store::DocId;

use crate::error::{ResolveError, Result};

/// Batch identifier validation. Runs, and must succeed, before any lookup.
///
/// An absent batch is vacuously valid and yields `None`; downstream
/// handlers treat that as a no-op. Otherwise every token must parse as a
/// document id. Fails closed: a single malformed token fails the entire
/// batch, with no partial report of which tokens failed.
pub fn validate_ids(ids: Option<&[String]>) -> Result<Option<Vec<DocId>>> {
    let Some(ids) = ids else {
        return Ok(None);
    };

    let mut parsed = Vec::with_capacity(ids.len());
    for raw in ids {
        match DocId::parse(raw) {
            Ok(id) => parsed.push(id),
            Err(_) => return Err(ResolveError::MalformedId),
        }
    }
    Ok(Some(parsed))
}
