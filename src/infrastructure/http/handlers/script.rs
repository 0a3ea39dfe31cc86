//! Script HTTP Handlers

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use std::sync::Arc;

use crate::application::GenerateScript;
use crate::domain::GeneratedScript;
use crate::infrastructure::http::dto::GenerateScriptRequest;
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// POST /generate-script
pub async fn generate_script(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<GenerateScriptRequest>, JsonRejection>,
) -> Result<Json<GeneratedScript>, ApiError> {
    let Json(req) = payload?;

    tracing::info!(
        niche = %req.niche,
        tone = %req.tone,
        format = %req.format,
        length = %req.length,
        "Generate script request"
    );

    let script = state
        .generate_script_handler
        .handle(GenerateScript { brief: req.into() })
        .await?;

    Ok(Json(script))
}
