//! HTTP Error Handling
//!
//! 错误响应统一为 `{ "error": ..., "raw"?: ... }`，使用真实 HTTP 状态码。
//! 对外只暴露固定文案，细节写入日志。

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::application::ApplicationError;

/// 对外错误文案
pub mod messages {
    pub const SCRIPT_FAILED: &str = "Failed to generate script";
    pub const INVALID_AI_JSON: &str = "Invalid AI JSON response";
    pub const SCRIPT_REQUIRED: &str = "Script is required";
    pub const VIDEO_FAILED: &str = "Failed to generate video";
    pub const PROCESSING_FAILED: &str = "Video processing failed";
    pub const INTERNAL: &str = "Internal server error";
}

/// 统一错误响应格式
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw: Option<String>,
}

/// API 错误
#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    Internal {
        message: String,
        raw: Option<String>,
    },
}

impl ApiError {
    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::Internal {
            message: message.into(),
            raw: None,
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match self {
            ApiError::BadRequest(error) => ErrorResponse { error, raw: None },
            ApiError::Internal { message, raw } => ErrorResponse {
                error: message,
                raw,
            },
        };

        (status, Json(body)).into_response()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::warn!(error = %rejection.body_text(), "Rejected request body");
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<ApplicationError> for ApiError {
    fn from(e: ApplicationError) -> Self {
        match e {
            ApplicationError::ValidationError(msg) => {
                tracing::warn!(error = %msg, "Validation failed");
                ApiError::BadRequest(msg)
            }
            ApplicationError::GenerationFailed(detail) => {
                tracing::error!(stage = "script", error = %detail, "Script generation failed");
                ApiError::internal(messages::SCRIPT_FAILED)
            }
            ApplicationError::InvalidAiResponse { reason, raw } => {
                tracing::error!(stage = "script", error = %reason, raw = %raw, "Invalid AI JSON response");
                ApiError::Internal {
                    message: messages::INVALID_AI_JSON.to_string(),
                    raw: Some(raw),
                }
            }
            ApplicationError::VideoGenerationFailed(detail) => {
                tracing::error!(stage = "video", error = %detail, "Video generation failed");
                ApiError::internal(messages::VIDEO_FAILED)
            }
            ApplicationError::ProcessingFailed(detail) => {
                tracing::error!(stage = "encode", error = %detail, "Video processing failed");
                ApiError::internal(messages::PROCESSING_FAILED)
            }
            ApplicationError::StorageError(detail) => {
                tracing::error!(stage = "storage", error = %detail, "Artifact storage failed");
                ApiError::internal(messages::PROCESSING_FAILED)
            }
        }
    }
}
