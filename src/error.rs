use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AssessorError {
    #[error("path does not exist: {0}")]
    PathNotFound(String),

    #[error("config parse error: {0}")]
    ConfigParse(String),

    #[error("document parse error: {0}")]
    DocumentParse(String),

    #[error("telemetry error: {0}")]
    Telemetry(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("toml parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, AssessorError>;

/// Failure returned by the scoring entry points. Always data, never a panic.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScoringError {
    #[error("No responses provided")]
    NoResponses,

    #[error("Failed to calculate scores: {0}")]
    ComputationFailure(String),
}

/// Serialisable `{error, details}` shape handed to collaborators.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorPayload {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ScoringError {
    pub fn payload(&self) -> ErrorPayload {
        match self {
            ScoringError::NoResponses => ErrorPayload {
                error: "No responses provided".to_string(),
                details: None,
            },
            ScoringError::ComputationFailure(detail) => ErrorPayload {
                error: "Failed to calculate scores".to_string(),
                details: Some(detail.clone()),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_responses_payload_has_no_details() {
        let rendered = serde_json::to_string(&ScoringError::NoResponses.payload())
            .expect("payload should serialize");
        assert_eq!(rendered, r#"{"error":"No responses provided"}"#);
    }

    #[test]
    fn computation_failure_payload_carries_details() {
        let payload = ScoringError::ComputationFailure("overflow in clarity".to_string()).payload();
        assert_eq!(payload.error, "Failed to calculate scores");
        assert_eq!(payload.details.as_deref(), Some("overflow in clarity"));
    }
}
