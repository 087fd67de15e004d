use std::fmt;

use serde::{Deserialize, Serialize};

/// Tag identifying which collection a document belongs to. Store access is
/// always routed through an explicit kind rather than a model value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    Crop,
    Companionship,
    Bed,
}

impl ResourceKind {
    pub const ALL: [ResourceKind; 3] = [Self::Crop, Self::Companionship, Self::Bed];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Crop => "crop",
            Self::Companionship => "companionship",
            Self::Bed => "bed",
        }
    }

    /// Plural collection name, used for result slots and error messages.
    #[must_use]
    pub const fn collection(self) -> &'static str {
        match self {
            Self::Crop => "crops",
            Self::Companionship => "companionships",
            Self::Bed => "beds",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
