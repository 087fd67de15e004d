use std::collections::BTreeMap;

use thiserror::Error;

use garden_store::{DocId, ResourceKind, StoreError};

pub type Result<T> = std::result::Result<T, ResolveError>;

/// Typed failures of the resolution pipeline. Nothing here is retried or
/// silently defaulted; transport status codes exist only at the outer
/// boundary (see [`crate::Fault`]).
#[derive(Error, Debug)]
pub enum ResolveError {
    /// At least one token in the batch is not a well-formed document id.
    /// Fails the whole batch; which tokens failed is not reported.
    #[error("Malformed document id in batch")]
    MalformedId,

    /// At least one requested id has no record. Carries every missing id,
    /// in requested order.
    #[error("No {kind} found for one or more requested ids")]
    NotFound {
        kind: ResourceKind,
        missing: Vec<DocId>,
    },

    /// Ownership mismatch, raised by the access-control collaborator
    /// through this taxonomy; never produced inside the pipeline.
    #[error("{message}")]
    Forbidden { message: String },

    /// Store-level write rejection, field name to message.
    #[error("Document failed validation")]
    Validation { fields: BTreeMap<String, String> },

    /// A fetch produced no record through an unexpected path.
    #[error("Fetch produced no record: {0}")]
    InternalFetch(String),

    #[error(transparent)]
    Store(StoreError),

    /// A lookup task failed to complete.
    #[error("Lookup task failed: {0}")]
    Join(String),
}

impl From<StoreError> for ResolveError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::MalformedId(_) => Self::MalformedId,
            StoreError::Validation { fields } => Self::Validation { fields },
            StoreError::InternalFetch(message) => Self::InternalFetch(message),
            other => Self::Store(other),
        }
    }
}
