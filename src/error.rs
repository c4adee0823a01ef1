//! Error types. `Display` text is exactly what the user sees.

use crate::constants::*;
use crate::types::Outcome;

/// Input rejected before any request is made
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("{}", MSG_EMPTY_INPUT)]
    EmptyInput,
}

/// Failure of a single request to the conversion service
#[derive(Debug, thiserror::Error)]
pub enum RequestError {
    /// Non-2xx status, with the reason taken from the body or a fallback
    #[error("{0}")]
    Service(String),

    /// No response at all (connect, DNS, timeout)
    #[error("{}", MSG_SERVER_UNAVAILABLE)]
    Transport(#[source] reqwest::Error),

    /// 2xx status but the body was not what the endpoint promises
    #[error("{}", MSG_INVALID_RESPONSE)]
    Decode(#[source] reqwest::Error),
}

pub type RequestResult<T> = Result<T, RequestError>;

impl From<RequestError> for Outcome {
    fn from(e: RequestError) -> Self {
        Outcome::Failure(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_message_matches_prompt() {
        assert_eq!(
            ValidationError::EmptyInput.to_string(),
            "Please enter a measurement string."
        );
    }

    #[test]
    fn service_error_becomes_raw_failure() {
        let outcome: Outcome = RequestError::Service("bad input".into()).into();
        assert_eq!(outcome, Outcome::Failure("bad input".into()));
    }
}
