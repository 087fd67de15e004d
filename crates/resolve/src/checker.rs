use std::sync::Arc;

use garden_store::{DocId, Filter, ResourceKind, StoreRegistry};

use crate::error::{ResolveError, Result};
use crate::fanout::fan_out;

/// Lighter sibling of [`crate::resolve`]: confirm every id exists without
/// materializing records, via a per-id count probe.
///
/// Same all-or-nothing contract: any missing id fails the call with the
/// full missing set in requested order; an empty batch succeeds
/// immediately.
pub async fn check_exists(
    registry: &StoreRegistry,
    kind: ResourceKind,
    ids: &[DocId],
) -> Result<()> {
    if ids.is_empty() {
        return Ok(());
    }
    let store = registry.get(kind)?;
    log::debug!("check_exists: kind={kind}, batch={}", ids.len());

    let present = fan_out(ids, |id| {
        let store = Arc::clone(&store);
        async move {
            let count = store.count(&Filter::ById(id)).await?;
            Ok(count > 0)
        }
    })
    .await?;

    let missing: Vec<DocId> = ids
        .iter()
        .zip(present)
        .filter_map(|(id, exists)| (!exists).then(|| id.clone()))
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(ResolveError::NotFound { kind, missing })
    }
}
