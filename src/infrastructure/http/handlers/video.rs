//! Video HTTP Handlers

use axum::{
    body::Body,
    extract::{rejection::JsonRejection, State},
    http::{header, StatusCode},
    response::Response,
    Json,
};
use std::sync::Arc;
use tokio_util::io::ReaderStream;

use crate::application::{RenderVideo, RenderedVideo};
use crate::infrastructure::http::dto::GenerateVideoRequest;
use crate::infrastructure::http::error::{messages, ApiError};
use crate::infrastructure::http::state::AppState;

const VIDEO_CONTENT_TYPE: &str = "video/mp4";

/// POST /generate-video
///
/// 成功时直接返回 mp4 二进制
pub async fn generate_video(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<GenerateVideoRequest>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Json(req) = payload?;

    tracing::info!(script_chars = req.script.chars().count(), "Generate video request");

    let video = state
        .render_video_handler
        .handle(RenderVideo { script: req.script })
        .await?;

    let size = video.len();
    let body = match video {
        RenderedVideo::Buffer(data) => Body::from(data),
        RenderedVideo::File { path, .. } => {
            let file = tokio::fs::File::open(&path).await.map_err(|e| {
                tracing::error!(path = %path.display(), error = %e, "Failed to open rendered video");
                ApiError::internal(messages::PROCESSING_FAILED)
            })?;
            // 流式返回文件内容
            Body::from_stream(ReaderStream::new(file))
        }
    };

    video_response(body, size, VIDEO_CONTENT_TYPE)
}

/// 构建视频响应，构建失败只记录日志，对外返回通用文案
fn video_response(body: Body, size: u64, content_type: &str) -> Result<Response, ApiError> {
    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, content_type)
        .header(header::CONTENT_LENGTH, size)
        .header(
            header::CONTENT_DISPOSITION,
            "inline; filename=\"faceless-video.mp4\"",
        )
        .body(body)
        .map_err(|e| {
            tracing::error!(error = %e, "Failed to build video response");
            ApiError::internal(messages::INTERNAL)
        })
}
