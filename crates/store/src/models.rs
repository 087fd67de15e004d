use serde::{Deserialize, Serialize};

use crate::error::{Result, StoreError};
use crate::id::DocId;
use crate::kind::ResourceKind;

/// Sentinel compatibility value marking a strictly incompatible pair.
pub const INCOMPATIBLE: f64 = -1.0;

/// Upper bound of the stored compatibility scale. Any non-sentinel value
/// must lie in `[0, MAX_COMPATIBILITY]`.
pub const MAX_COMPATIBILITY: f64 = 3.0;

/// Relation name under which a crop's companionship edges are populated.
pub const COMPANIONSHIPS_RELATION: &str = "companionships";

/// A reference to a related document: either the bare id, or the full
/// record once the relation has been eagerly loaded.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Link<T> {
    Id(DocId),
    Full(Box<T>),
}

impl<T> Link<T> {
    #[must_use]
    pub fn as_id(&self) -> Option<&DocId> {
        match self {
            Self::Id(id) => Some(id),
            Self::Full(_) => None,
        }
    }

    #[must_use]
    pub fn as_full(&self) -> Option<&T> {
        match self {
            Self::Id(_) => None,
            Self::Full(record) => Some(record),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Crop {
    pub id: DocId,
    #[serde(default)]
    pub common_name: Option<String>,
    pub binomial_name: String,
    #[serde(default)]
    pub companionships: Vec<Link<Companionship>>,
}

impl Crop {
    /// Display name preference: the common name when present, otherwise the
    /// binomial name.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.common_name.as_deref().unwrap_or(&self.binomial_name)
    }

    pub fn validate(&self) -> Result<()> {
        if self.binomial_name.trim().is_empty() {
            return Err(StoreError::validation(
                "binomialName",
                "A binomial name is required",
            ));
        }
        Ok(())
    }
}

/// An undirected compatibility edge between exactly two crops, stored once.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Companionship {
    pub id: DocId,
    pub crop_a: DocId,
    pub crop_b: DocId,
    pub compatibility: f64,
}

impl Companionship {
    #[must_use]
    pub fn is_incompatible(&self) -> bool {
        self.compatibility == INCOMPATIBLE
    }

    /// The endpoint that is not `query`. When the second endpoint equals the
    /// query id the first is returned, otherwise the second.
    #[must_use]
    pub fn other_endpoint(&self, query: &DocId) -> &DocId {
        if self.crop_b == *query {
            &self.crop_a
        } else {
            &self.crop_b
        }
    }

    pub fn validate(&self) -> Result<()> {
        let value = self.compatibility;
        if value != INCOMPATIBLE && !(0.0..=MAX_COMPATIBILITY).contains(&value) {
            return Err(StoreError::validation(
                "compatibility",
                format!("Compatibility must be -1 or within [0, {MAX_COMPATIBILITY}], got {value}"),
            ));
        }
        Ok(())
    }
}

/// A planting bed: the set of crops already placed, the query set of the
/// companionship scoring flow. Ownership and location links live with the
/// collaborators that manage them.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bed {
    pub id: DocId,
    pub name: String,
    #[serde(default)]
    pub crops: Vec<DocId>,
}

/// A record of any kind, the currency of the registry-driven paths.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Document {
    Companionship(Companionship),
    Crop(Crop),
    Bed(Bed),
}

impl Document {
    #[must_use]
    pub fn kind(&self) -> ResourceKind {
        match self {
            Self::Crop(_) => ResourceKind::Crop,
            Self::Companionship(_) => ResourceKind::Companionship,
            Self::Bed(_) => ResourceKind::Bed,
        }
    }

    #[must_use]
    pub fn id(&self) -> &DocId {
        match self {
            Self::Crop(crop) => &crop.id,
            Self::Companionship(edge) => &edge.id,
            Self::Bed(bed) => &bed.id,
        }
    }

    pub fn validate(&self) -> Result<()> {
        match self {
            Self::Crop(crop) => crop.validate(),
            Self::Companionship(edge) => edge.validate(),
            Self::Bed(_) => Ok(()),
        }
    }

    #[must_use]
    pub fn as_crop(&self) -> Option<&Crop> {
        match self {
            Self::Crop(crop) => Some(crop),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_companionship(&self) -> Option<&Companionship> {
        match self {
            Self::Companionship(edge) => Some(edge),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_bed(&self) -> Option<&Bed> {
        match self {
            Self::Bed(bed) => Some(bed),
            _ => None,
        }
    }
}
