//! HTTP gateway for quarry.
//!
//! Serves the bundled chat frontend and a small JSON API:
//! - `GET /` (+ `/static/*`) — embedded chat UI
//! - `POST /api/chat`        — one orchestrated chat turn
//! - `GET /health`           — liveness probe
//!
//! Built on Axum. A retrieval failure is the one error that reaches this
//! layer (generation failures are already degraded to a missing bot
//! message inside the pipeline) and maps to 502.

pub mod frontend;

use axum::extract::DefaultBodyLimit;
use axum::{
    Router,
    extract::State,
    http::StatusCode,
    response::Json,
    routing::{get, post},
};
use quarry_core::message::ChatTurn;
use quarry_pipeline::ChatPipeline;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{error, info};

/// Shared application state for the gateway.
pub struct GatewayState {
    pub pipeline: ChatPipeline,
}

pub type SharedState = Arc<GatewayState>;

/// One chat submit from the frontend.
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    /// The textbox content.
    pub message: String,

    /// The transcript so far, owned by the client.
    #[serde(default)]
    pub history: Vec<ChatTurn>,
}

/// The orchestrator's reply: cleared input + updated transcript.
#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub input: String,
    pub history: Vec<ChatTurn>,
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

/// Build the Axum router with all gateway routes.
pub fn build_router(state: SharedState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/api/chat", post(chat_handler))
        .with_state(state)
        .merge(frontend::frontend_router())
        .layer(DefaultBodyLimit::max(64 * 1024))
        .layer(tower_http::trace::TraceLayer::new_for_http())
}

/// Start the gateway HTTP server.
pub async fn start(
    config: &quarry_config::GatewayConfig,
    pipeline: ChatPipeline,
) -> Result<(), Box<dyn std::error::Error>> {
    let addr = format!("{}:{}", config.host, config.port);
    let state = Arc::new(GatewayState { pipeline });
    let app = build_router(state);

    info!(addr = %addr, "Starting gateway");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

async fn chat_handler(
    State(state): State<SharedState>,
    Json(payload): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, (StatusCode, Json<ErrorResponse>)> {
    info!(history_len = payload.history.len(), "api/chat request");

    let (input, history) = state
        .pipeline
        .handle_submit(&payload.message, payload.history)
        .await
        .map_err(|e| {
            error!(error = %e, "Retrieval failed");
            (
                StatusCode::BAD_GATEWAY,
                Json(ErrorResponse {
                    error: e.to_string(),
                }),
            )
        })?;

    Ok(Json(ChatResponse { input, history }))
}
