use garden_companion::{aggregate_scores, AggregateScoreMap, CompanionshipTable, ScoreProfile};
use garden_store::{DocId, Populate, ResourceKind, StoreRegistry, COMPANIONSHIPS_RELATION};

use crate::error::{ResolveError, Result};
use crate::resolver::resolve;

/// Bed-editing flow: score every candidate companion against the crops
/// already placed.
///
/// Resolves the query crops with their companionship edges populated,
/// builds the row-aligned table, and aggregates. Callers rank candidates by
/// score descending, treat `Incompatible` as exclusion, and may merge the
/// map with the already-placed crops for display.
pub async fn companion_scores(
    registry: &StoreRegistry,
    query_ids: &[DocId],
    profile: &ScoreProfile,
) -> Result<AggregateScoreMap> {
    let populate = Populate::with([COMPANIONSHIPS_RELATION]);
    let crops = resolve(registry, ResourceKind::Crop, query_ids, &populate).await?;

    let mut table: CompanionshipTable = Vec::with_capacity(crops.len());
    for doc in &crops {
        let Some(crop) = doc.as_crop() else {
            return Err(ResolveError::InternalFetch(format!(
                "expected a crop record for {}",
                doc.id()
            )));
        };
        let mut edges = Vec::with_capacity(crop.companionships.len());
        for link in &crop.companionships {
            match link.as_full() {
                Some(edge) => edges.push(edge.clone()),
                None => {
                    return Err(ResolveError::InternalFetch(format!(
                        "unpopulated companionship on crop {}",
                        crop.id
                    )));
                }
            }
        }
        table.push(edges);
    }

    log::debug!(
        "companion_scores: {} query crops, {} edges",
        query_ids.len(),
        table.iter().map(Vec::len).sum::<usize>()
    );
    Ok(aggregate_scores(&table, query_ids, profile.max_score))
}
