//! Plan resolution.
//!
//! Sends the prompt to the completion service, validates the reply, and
//! wraps the parsed plan. All external-call and error-classification logic
//! for the pipeline lives here.

use serde::Serialize;
use serde_json::Value;

use super::PlanError;
use crate::llm::{ChatMessage, LlmClient, LlmError};

/// Sampling temperature for plan generation.
const TEMPERATURE: f64 = 0.6;

/// System instruction accompanying every prompt.
const SYSTEM_INSTRUCTION: &str = "You are a helpful planner.";

/// The parsed model reply, wrapped under the `plan` key.
#[derive(Debug, Clone, Serialize)]
pub struct PlanResponse {
    pub plan: Value,
}

/// Resolve a prompt into a plan via a single completion call.
///
/// # Errors
///
/// - `FailedPrecondition` when no API credential is configured; no request
///   is issued in that case.
/// - `Internal` when the service answers non-2xx (status and body are
///   surfaced verbatim) or when the reply content is not valid JSON (the
///   content is logged, never surfaced).
/// - Network and envelope faults land in the catch-all and stay opaque.
pub async fn resolve_plan(
    llm: &dyn LlmClient,
    model: &str,
    prompt: &str,
) -> Result<PlanResponse, PlanError> {
    let messages = vec![
        ChatMessage::system(SYSTEM_INSTRUCTION),
        ChatMessage::user(prompt),
    ];

    let response = match llm.chat_completion(model, &messages, TEMPERATURE).await {
        Ok(response) => response,
        Err(LlmError::MissingApiKey) => {
            return Err(PlanError::failed_precondition(
                "Missing OPENAI_API_KEY secret.",
            ));
        }
        Err(LlmError::Http { status, body }) => {
            tracing::error!(status, error = %body, "completion API error");
            return Err(PlanError::internal(format!(
                "OpenAI failed ({}): {}",
                status, body
            )));
        }
        Err(e) => return Err(e.into()),
    };

    tracing::debug!(model = ?response.model, "completion received");

    let content = response.content.as_deref().map(str::trim).unwrap_or("");

    let parsed: Value = match serde_json::from_str(content) {
        Ok(value) => value,
        Err(_) => {
            tracing::error!(content, "model reply was not valid JSON");
            return Err(PlanError::internal("AI returned invalid JSON."));
        }
    };

    Ok(PlanResponse { plan: parsed })
}
