//! Daily-plan generation pipeline.
//!
//! Three sequential stages per invocation, no state in between:
//! 1. [`request`] normalizes the raw payload into a canonical [`PlanRequest`]
//! 2. [`prompt`] renders the deterministic instruction prompt
//! 3. [`resolver`] performs the single completion call and parses the reply

mod error;
mod prompt;
mod request;
mod resolver;

pub use error::PlanError;
pub use prompt::build_prompt;
pub use request::{normalize_request, PlanRequest, TaskSpec};
pub use resolver::{resolve_plan, PlanResponse};

use crate::api::auth::AuthUser;
use crate::llm::LlmClient;

/// Run the full pipeline: normalize, build the prompt, resolve the plan.
pub async fn generate_daily_plan(
    user: Option<&AuthUser>,
    payload: &serde_json::Value,
    llm: &dyn LlmClient,
    model: &str,
) -> Result<PlanResponse, PlanError> {
    let request = normalize_request(user, payload)?;
    let prompt = build_prompt(&request);
    resolve_plan(llm, model, &prompt).await
}
