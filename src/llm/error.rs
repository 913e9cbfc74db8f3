//! LLM error types.
//!
//! Classifies failures from the completion API so callers can decide which
//! ones are safe to surface and which must stay opaque.

use thiserror::Error;

/// Error from a chat-completion call.
#[derive(Debug, Error)]
pub enum LlmError {
    /// No API key configured. Raised before any network I/O.
    #[error("missing API key")]
    MissingApiKey,

    /// The service answered with a non-success status.
    #[error("completion API returned HTTP {status}: {body}")]
    Http { status: u16, body: String },

    /// The request never completed (connect failure, timeout).
    #[error("network error: {0}")]
    Network(String),

    /// The response body was not a valid completion envelope.
    #[error("failed to parse completion response: {0}")]
    Parse(String),
}

impl LlmError {
    /// HTTP status code, if the service answered at all.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            LlmError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_error_display() {
        let error = LlmError::Http {
            status: 429,
            body: "rate limited".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "completion API returned HTTP 429: rate limited"
        );
        assert_eq!(error.status_code(), Some(429));
    }

    #[test]
    fn test_only_http_errors_carry_a_status() {
        assert_eq!(LlmError::MissingApiKey.status_code(), None);
        assert_eq!(LlmError::Network("timeout".to_string()).status_code(), None);
    }
}
