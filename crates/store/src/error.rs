use std::collections::BTreeMap;

use thiserror::Error;

use crate::kind::ResourceKind;

pub type Result<T> = std::result::Result<T, StoreError>;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Malformed document id: {0:?}")]
    MalformedId(String),

    #[error("No store registered for kind '{0}'")]
    UnknownKind(ResourceKind),

    #[error("Document failed validation")]
    Validation { fields: BTreeMap<String, String> },

    #[error("Fetch produced no record: {0}")]
    InternalFetch(String),

    #[error("Invalid name pattern: {0}")]
    Pattern(#[from] regex::Error),
}

impl StoreError {
    /// Single-field validation failure.
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        let mut fields = BTreeMap::new();
        fields.insert(field.into(), message.into());
        Self::Validation { fields }
    }
}
