use std::sync::Arc;

use garden_store::{DocId, Document, Populate, ResourceKind, StoreRegistry};

use crate::error::{ResolveError, Result};
use crate::fanout::fan_out;

/// Fan-out batch lookup: fetch a full record for every id, optionally
/// eagerly loading the named relations.
///
/// All-or-nothing: the call succeeds only when every requested id yields a
/// record, and the result order is the requested-id order. Any miss fails
/// the whole call with [`ResolveError::NotFound`] carrying the full missing
/// set, in requested order. An empty batch succeeds immediately with an
/// empty result.
pub async fn resolve(
    registry: &StoreRegistry,
    kind: ResourceKind,
    ids: &[DocId],
    populate: &Populate,
) -> Result<Vec<Document>> {
    if ids.is_empty() {
        return Ok(Vec::new());
    }
    let store = registry.get(kind)?;
    log::debug!("resolve: kind={kind}, batch={}", ids.len());

    let found = fan_out(ids, |id| {
        let store = Arc::clone(&store);
        let populate = populate.clone();
        async move { store.find_by_id(&id, &populate).await }
    })
    .await?;

    let mut records = Vec::with_capacity(ids.len());
    let mut missing = Vec::new();
    for (id, outcome) in ids.iter().zip(found) {
        match outcome {
            Some(doc) => records.push(doc),
            None => missing.push(id.clone()),
        }
    }

    if missing.is_empty() {
        Ok(records)
    } else {
        log::debug!("resolve: kind={kind}, {} of {} ids missing", missing.len(), ids.len());
        Err(ResolveError::NotFound { kind, missing })
    }
}
