use std::collections::HashMap;

use serde::Serialize;

use garden_store::{Companionship, DocId};

/// Per-request table of companionship edges: row `i` holds every edge
/// incident to the query crop at index `i` of the id batch it was built
/// from. Built by the resolver layer, consumed here, discarded after the
/// response.
pub type CompanionshipTable = Vec<Vec<Companionship>>;

/// Aggregated result per candidate crop.
pub type AggregateScoreMap = HashMap<DocId, Compatibility>;

/// Outcome for one candidate crop. `Incompatible` is sticky: once any edge
/// marks a candidate incompatible, later edges never reverse it.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Compatibility {
    Incompatible,
    Score {
        /// Normalized score in `[0, 1]`.
        value: f64,
        /// Number of edges that contributed, so callers can tell partial
        /// coverage from full coverage with low scores.
        coverage: usize,
    },
}

impl Compatibility {
    #[must_use]
    pub fn value(&self) -> Option<f64> {
        match self {
            Self::Incompatible => None,
            Self::Score { value, .. } => Some(*value),
        }
    }

    #[must_use]
    pub fn is_incompatible(&self) -> bool {
        matches!(self, Self::Incompatible)
    }
}

/// Turn pairwise companionship edges into a compatibility score per
/// candidate crop.
///
/// `table` must be row-aligned with `query_ids`; `max_score` is the upper
/// bound of the stored compatibility scale and must be positive. Each
/// contribution is divided by `max_score * query_ids.len()`, so a candidate
/// related to every query crop at maximal score yields `1.0`. A candidate
/// related to only a subset of the query crops is under-weighted relative
/// to full coverage; rank accordingly, or consult `coverage`.
///
/// Pure and deterministic: identical inputs always produce an identical
/// map, and nothing is shared across invocations.
#[must_use]
pub fn aggregate_scores(
    table: &CompanionshipTable,
    query_ids: &[DocId],
    max_score: f64,
) -> AggregateScoreMap {
    let total = max_score * query_ids.len() as f64;
    let mut scores = AggregateScoreMap::new();

    for (query_id, edges) in query_ids.iter().zip(table) {
        for edge in edges {
            let candidate = edge.other_endpoint(query_id);
            if edge.is_incompatible() {
                scores.insert(candidate.clone(), Compatibility::Incompatible);
                continue;
            }
            match scores.get_mut(candidate) {
                Some(Compatibility::Incompatible) => {}
                Some(Compatibility::Score { value, coverage }) => {
                    *value += edge.compatibility / total;
                    *coverage += 1;
                }
                None => {
                    scores.insert(
                        candidate.clone(),
                        Compatibility::Score {
                            value: edge.compatibility / total,
                            coverage: 1,
                        },
                    );
                }
            }
        }
    }

    log::debug!(
        "aggregate: {} query crops -> {} candidates",
        query_ids.len(),
        scores.len()
    );
    scores
}
