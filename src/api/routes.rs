//! HTTP route handlers.

use std::sync::Arc;

use axum::{
    extract::State,
    http::HeaderMap,
    response::Json,
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::llm::OpenAiClient;
use crate::plan::{self, PlanError, PlanResponse};

use super::auth;
use super::types::HealthResponse;

/// Shared application state.
///
/// Nothing here is mutable; concurrent invocations only share the config
/// and the completion client.
pub struct AppState {
    pub config: Config,
    /// The chat-completions client
    pub llm: OpenAiClient,
}

/// Start the HTTP server.
pub async fn serve(config: Config) -> anyhow::Result<()> {
    let llm = OpenAiClient::new(config.api_key.clone());

    let state = Arc::new(AppState {
        config: config.clone(),
        llm,
    });

    let app = Router::new()
        .route("/api/health", get(health))
        .route("/api/auth/login", post(auth::login))
        .route("/api/plan", post(generate_plan))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::clone(&state));

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Wait for Ctrl+C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}

/// Health check endpoint.
async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        dev_mode: state.config.dev_mode,
        auth_required: state.config.auth.auth_required(state.config.dev_mode),
        model: state.config.model.clone(),
    })
}

/// Generate a daily plan from the submitted task list.
///
/// The body is read leniently: a missing or malformed body degrades to the
/// normalizer defaults instead of an extractor rejection.
async fn generate_plan(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    body: Option<Json<serde_json::Value>>,
) -> Result<Json<PlanResponse>, PlanError> {
    let user = auth::authenticate(&headers, &state.config);
    let payload = body
        .map(|Json(value)| value)
        .unwrap_or(serde_json::Value::Null);

    let response = plan::generate_daily_plan(
        user.as_ref(),
        &payload,
        &state.llm,
        &state.config.model,
    )
    .await?;

    Ok(Json(response))
}
