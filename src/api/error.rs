//! The top-level error boundary.
//!
//! Every failure is logged server-side in full. Classified variants pass
//! through to the caller with their message; the `Other` catch-all is
//! replaced with an opaque generic failure so no internal detail leaks.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::plan::PlanError;

/// Caller-facing error body.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub code: &'static str,
    pub message: String,
}

fn status_for(error: &PlanError) -> StatusCode {
    match error {
        PlanError::Unauthenticated(_) => StatusCode::UNAUTHORIZED,
        PlanError::FailedPrecondition(_) | PlanError::Internal(_) | PlanError::Other(_) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

fn body_for(error: &PlanError) -> ErrorBody {
    match error {
        PlanError::Unauthenticated(message)
        | PlanError::FailedPrecondition(message)
        | PlanError::Internal(message) => ErrorBody {
            code: error.code(),
            message: message.clone(),
        },
        PlanError::Other(_) => ErrorBody {
            code: "internal",
            message: "Something went wrong.".to_string(),
        },
    }
}

impl IntoResponse for PlanError {
    fn into_response(self) -> Response {
        match &self {
            PlanError::Other(e) => {
                tracing::error!("plan generation failed: {:#}", e);
            }
            classified => {
                tracing::error!(code = classified.code(), "plan generation failed: {}", classified);
            }
        }
        (status_for(&self), Json(body_for(&self))).into_response()
    }
}
