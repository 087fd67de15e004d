use std::future::Future;

use tokio::task::JoinSet;

use garden_store::DocId;

use crate::error::{ResolveError, Result};

/// Shared fan-out/fan-in machinery: one store task per id, issued
/// independently and concurrently, joined wait-group style.
///
/// Each task carries its request index; once every task has been joined the
/// outcomes are scanned in requested order, so the result sequence is
/// deterministic regardless of scheduling, and late-finishing siblings of a
/// failed lookup are consumed and discarded without a second completion
/// signal. An empty batch resolves immediately without spawning anything.
///
/// The first store error in requested order fails the call; misses are left
/// to the caller, which sees every per-id outcome.
pub(crate) async fn fan_out<T, F, Fut>(ids: &[DocId], op: F) -> Result<Vec<T>>
where
    T: Send + 'static,
    F: Fn(DocId) -> Fut,
    Fut: Future<Output = garden_store::Result<T>> + Send + 'static,
{
    if ids.is_empty() {
        return Ok(Vec::new());
    }

    let mut tasks = JoinSet::new();
    for (slot, id) in ids.iter().enumerate() {
        let fut = op(id.clone());
        tasks.spawn(async move { (slot, fut.await) });
    }

    let mut outcomes: Vec<Option<garden_store::Result<T>>> = Vec::with_capacity(ids.len());
    outcomes.resize_with(ids.len(), || None);
    while let Some(joined) = tasks.join_next().await {
        let (slot, outcome) = joined.map_err(|err| ResolveError::Join(err.to_string()))?;
        outcomes[slot] = Some(outcome);
    }

    let mut results = Vec::with_capacity(ids.len());
    for outcome in outcomes {
        match outcome {
            Some(Ok(value)) => results.push(value),
            Some(Err(err)) => return Err(err.into()),
            None => return Err(ResolveError::Join("a lookup never reported".to_string())),
        }
    }
    Ok(results)
}
