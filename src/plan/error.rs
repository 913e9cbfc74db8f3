//! Classified errors for the plan pipeline.
//!
//! Classified variants carry a caller-facing message and pass through the
//! boundary unchanged. Everything else lands in the `Other` catch-all and is
//! replaced with an opaque generic failure before it reaches the caller.

use thiserror::Error;

use crate::llm::LlmError;

/// Error raised by the plan pipeline.
#[derive(Debug, Error)]
pub enum PlanError {
    /// Missing caller identity.
    #[error("{0}")]
    Unauthenticated(String),

    /// Missing API credential.
    #[error("{0}")]
    FailedPrecondition(String),

    /// Downstream failure whose message is safe to surface.
    #[error("{0}")]
    Internal(String),

    /// Anything else. The boundary logs it and answers generically.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl PlanError {
    /// Missing caller identity.
    pub fn unauthenticated(message: impl Into<String>) -> Self {
        PlanError::Unauthenticated(message.into())
    }

    /// Missing credential or other unmet precondition.
    pub fn failed_precondition(message: impl Into<String>) -> Self {
        PlanError::FailedPrecondition(message.into())
    }

    /// Downstream failure with a caller-safe message.
    pub fn internal(message: impl Into<String>) -> Self {
        PlanError::Internal(message.into())
    }

    /// Wire code for the caller-facing error body.
    pub fn code(&self) -> &'static str {
        match self {
            PlanError::Unauthenticated(_) => "unauthenticated",
            PlanError::FailedPrecondition(_) => "failed-precondition",
            PlanError::Internal(_) | PlanError::Other(_) => "internal",
        }
    }
}

impl From<LlmError> for PlanError {
    fn from(error: LlmError) -> Self {
        PlanError::Other(anyhow::Error::new(error))
    }
}
