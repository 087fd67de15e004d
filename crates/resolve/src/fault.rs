use std::collections::BTreeMap;

use serde::Serialize;

use crate::error::ResolveError;

/// Transport-level fault shape surfaced to the request-handling
/// collaborator: a status code, a message, and optionally a field-keyed
/// error map. Typed errors convert to this at the outer boundary only;
/// nothing inside the pipeline sees status codes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Fault {
    pub status: u16,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<BTreeMap<String, String>>,
}

impl Fault {
    fn new(status: u16, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
            errors: None,
        }
    }
}

impl From<ResolveError> for Fault {
    fn from(err: ResolveError) -> Self {
        match err {
            ResolveError::MalformedId => Self::new(400, "Malformed document id"),
            ResolveError::NotFound { kind, missing } => {
                let ids: Vec<&str> = missing.iter().map(|id| id.as_str()).collect();
                Self::new(
                    404,
                    format!("No {} found with id(s): {}", kind.collection(), ids.join(", ")),
                )
            }
            ResolveError::Forbidden { message } => Self::new(403, message),
            ResolveError::Validation { fields } => Self {
                status: 400,
                message: "Invalid data".to_string(),
                errors: Some(fields),
            },
            ResolveError::InternalFetch(_) | ResolveError::Store(_) | ResolveError::Join(_) => {
                Self::new(500, "Internal error")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use garden_store::{DocId, ResourceKind, StoreError};

    use super::*;

    #[test]
    fn maps_statuses() {
        assert_eq!(Fault::from(ResolveError::MalformedId).status, 400);

        let not_found = ResolveError::NotFound {
            kind: ResourceKind::Crop,
            missing: vec![DocId::parse("00000000000000000000000a").expect("valid id")],
        };
        let fault = Fault::from(not_found);
        assert_eq!(fault.status, 404);
        assert_eq!(
            fault.message,
            "No crops found with id(s): 00000000000000000000000a"
        );

        let forbidden = ResolveError::Forbidden {
            message: "You don't have access to this bed".to_string(),
        };
        assert_eq!(Fault::from(forbidden).status, 403);

        let join = ResolveError::Join("worker died".to_string());
        assert_eq!(Fault::from(join).status, 500);
    }

    #[test]
    fn validation_carries_the_field_map() {
        let err = ResolveError::from(StoreError::validation(
            "compatibility",
            "Compatibility must be -1 or within [0, 3]",
        ));
        let fault = Fault::from(err);
        assert_eq!(fault.status, 400);

        let body = serde_json::to_value(&fault).expect("serialize");
        assert_eq!(
            body["errors"]["compatibility"],
            "Compatibility must be -1 or within [0, 3]"
        );
    }

    #[test]
    fn errors_field_is_omitted_when_absent() {
        let body = serde_json::to_value(Fault::from(ResolveError::MalformedId)).expect("serialize");
        assert!(body.get("errors").is_none());
        assert_eq!(body["status"], 400);
        assert_eq!(body["message"], "Malformed document id");
    }
}
