use serde::{Deserialize, Serialize};

use garden_store::MAX_COMPATIBILITY;

/// Scoring parameters, deserializable from the application's config layer.
/// Every field is defaulted so an empty table section is valid.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScoreProfile {
    /// Upper bound of the stored compatibility scale.
    #[serde(default = "default_max_score")]
    pub max_score: f64,
}

fn default_max_score() -> f64 {
    MAX_COMPATIBILITY
}

impl Default for ScoreProfile {
    fn default() -> Self {
        Self {
            max_score: default_max_score(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_uses_schema_bound() {
        let profile: ScoreProfile = serde_json::from_str("{}").expect("deserialize");
        assert_eq!(profile, ScoreProfile::default());
        assert_eq!(profile.max_score, MAX_COMPATIBILITY);
    }

    #[test]
    fn explicit_bound_wins() {
        let profile: ScoreProfile =
            serde_json::from_str(r#"{"max_score": 5.0}"#).expect("deserialize");
        assert_eq!(profile.max_score, 5.0);
    }
}
