use crate::error::ApiError;
use crate::state::AppState;
use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use mf_compactor::OutputFormat;
use mf_core::ScheduleInput;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::warn;

#[derive(Debug, Deserialize)]
pub struct RenderRequest {
    pub types: ScheduleInput,
    #[serde(default)]
    pub format: OutputFormat,
}

#[derive(Debug, Deserialize)]
pub struct RenderModesRequest {
    pub modes: Vec<Vec<String>>,
    #[serde(default)]
    pub format: OutputFormat,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RenderResponse {
    pub output: String,
}

pub fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(health))
}

pub fn render_routes() -> Router<AppState> {
    Router::new()
        .route("/api/v1/render", post(render))
        .route("/api/v1/render/modes", post(render_modes))
}

async fn health(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "uptime_secs": state.start_time.elapsed().as_secs(),
    }))
}

async fn render(
    State(state): State<AppState>,
    Json(req): Json<RenderRequest>,
) -> Result<Json<RenderResponse>, ApiError> {
    let output = state
        .formatter
        .render_with(&req.types, req.format.markup())
        .inspect_err(|e| warn!(error = %e, "render failed"))?;
    Ok(Json(RenderResponse { output }))
}

async fn render_modes(
    State(state): State<AppState>,
    Json(req): Json<RenderModesRequest>,
) -> Result<Json<RenderResponse>, ApiError> {
    let output = state
        .formatter
        .render_modes_with(&req.modes, req.format.markup())
        .inspect_err(|e| warn!(error = %e, "render modes failed"))?;
    Ok(Json(RenderResponse { output }))
}
