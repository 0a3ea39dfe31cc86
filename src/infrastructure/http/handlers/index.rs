//! Index / Ping Handlers
//!
//! 存活检查

use axum::Json;
use serde::Serialize;

use crate::infrastructure::http::dto::IndexResponse;

/// 首页文案
pub const INDEX_MESSAGE: &str = "Faceless Factory API is running 🚀";

/// Ping 响应
#[derive(Serialize)]
pub struct PingResponse {
    pub status: &'static str,
    pub version: &'static str,
}

/// GET /
pub async fn index() -> Json<IndexResponse> {
    Json(IndexResponse {
        message: INDEX_MESSAGE,
    })
}

/// GET /ping - 健康检查
pub async fn ping() -> Json<PingResponse> {
    Json(PingResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}
