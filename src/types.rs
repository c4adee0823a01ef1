//! Common types and data structures

use crate::error::ValidationError;
use serde::Deserialize;
use serde_json::Value;

/// A measurement string ready to send, already trimmed and non-empty
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionRequest {
    raw_input: String,
}

impl ConversionRequest {
    pub fn new(raw: &str) -> Result<Self, ValidationError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::EmptyInput);
        }
        Ok(Self {
            raw_input: trimmed.to_string(),
        })
    }

    pub fn raw_input(&self) -> &str {
        &self.raw_input
    }
}

/// Past conversion record returned by the history endpoint.
/// `input` is normally a string but any JSON value is shown as-is.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct HistoryEntry {
    #[serde(default)]
    pub input: Value,
    #[serde(default)]
    pub output: Value,
}

/// Body the service sends alongside a non-2xx status
#[derive(Debug, Default, Deserialize)]
pub struct ServiceErrorBody {
    #[serde(default)]
    pub detail: Option<Value>,
}

impl ServiceErrorBody {
    /// Usable error reason, if the service supplied one.
    /// Non-string details (validation error lists) are rendered as JSON.
    pub fn reason(&self) -> Option<String> {
        match self.detail.as_ref()? {
            Value::Null => None,
            Value::String(s) if s.is_empty() => None,
            Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }
}

/// Successful result of one request
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    Conversion(Value),
    History(Vec<HistoryEntry>),
    Message(String),
}

/// Result of one request/response cycle
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Success(Payload),
    Failure(String),
}

impl Outcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }
}

/// Which button started a request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Convert,
    History,
}

/// Outcome tagged with the sequence number of the action that produced it
#[derive(Debug)]
pub struct Completion {
    pub seq: u64,
    pub action: Action,
    pub outcome: Outcome,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn conversion_request_trims_input() {
        let req = ConversionRequest::new("  5 km \n").unwrap();
        assert_eq!(req.raw_input(), "5 km");
    }

    #[test]
    fn conversion_request_rejects_blank_input() {
        assert_eq!(ConversionRequest::new(""), Err(ValidationError::EmptyInput));
        assert_eq!(ConversionRequest::new("   \t"), Err(ValidationError::EmptyInput));
    }

    #[test]
    fn error_body_reason_prefers_string_detail() {
        let body: ServiceErrorBody =
            serde_json::from_value(json!({"detail": "Invalid character in input: 1"})).unwrap();
        assert_eq!(body.reason().as_deref(), Some("Invalid character in input: 1"));
    }

    #[test]
    fn error_body_reason_ignores_missing_null_and_empty() {
        for body in [json!({}), json!({"detail": null}), json!({"detail": ""})] {
            let body: ServiceErrorBody = serde_json::from_value(body).unwrap();
            assert_eq!(body.reason(), None);
        }
    }

    #[test]
    fn error_body_reason_renders_structured_detail() {
        let body: ServiceErrorBody =
            serde_json::from_value(json!({"detail": [{"msg": "field required"}]})).unwrap();
        assert_eq!(body.reason().as_deref(), Some(r#"[{"msg":"field required"}]"#));
    }

    #[test]
    fn history_entry_tolerates_missing_output() {
        let entry: HistoryEntry = serde_json::from_value(json!({"input": "aa"})).unwrap();
        assert_eq!(entry.input, "aa");
        assert_eq!(entry.output, Value::Null);
    }

    #[test]
    fn history_entry_accepts_non_string_input() {
        let entry: HistoryEntry =
            serde_json::from_value(json!({"input": 5, "output": [5]})).unwrap();
        assert_eq!(entry.input, json!(5));
    }
}
