use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::StoreError;

/// Length of a well-formed document id, in hex digits.
pub const DOC_ID_LEN: usize = 24;

/// Opaque document-store identifier: a fixed-form token of exactly
/// [`DOC_ID_LEN`] ASCII hex digits. Stored as given (case is preserved),
/// compared byte-for-byte.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DocId(String);

impl DocId {
    /// Parse an externally supplied token, failing closed on anything that
    /// is not exactly [`DOC_ID_LEN`] hex digits.
    pub fn parse(raw: &str) -> Result<Self, StoreError> {
        if Self::is_valid(raw) {
            Ok(Self(raw.to_string()))
        } else {
            Err(StoreError::MalformedId(raw.to_string()))
        }
    }

    /// The same check as [`DocId::parse`], without allocating.
    #[must_use]
    pub fn is_valid(raw: &str) -> bool {
        raw.len() == DOC_ID_LEN && raw.bytes().all(|b| b.is_ascii_hexdigit())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DocId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for DocId {
    type Error = StoreError;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        Self::parse(&raw)
    }
}

impl From<DocId> for String {
    fn from(id: DocId) -> Self {
        id.0
    }
}
