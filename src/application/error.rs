//! 应用层错误定义
//!
//! 统一的命令错误类型，HTTP 层据此选择状态码和对外文案

use thiserror::Error;

use crate::application::ports::{EncodeError, ProviderError, StorageError};
use crate::domain::ScriptParseError;

/// 应用层错误
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// 验证错误（客户端输入）
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 文本生成调用失败（网络 / 鉴权 / 限流）
    #[error("Script generation failed: {0}")]
    GenerationFailed(String),

    /// 模型回复无法解析为 JSON 对象
    #[error("Invalid AI response: {reason}")]
    InvalidAiResponse { reason: String, raw: String },

    /// 语音合成或视频生成调用失败
    #[error("Video generation failed: {0}")]
    VideoGenerationFailed(String),

    /// 编码器失败
    #[error("Video processing failed: {0}")]
    ProcessingFailed(String),

    /// 存储错误
    #[error("Storage error: {0}")]
    StorageError(String),
}

impl ApplicationError {
    /// 创建验证错误
    pub fn validation(message: impl Into<String>) -> Self {
        Self::ValidationError(message.into())
    }

    /// 文本生成阶段的服务错误
    pub fn generation(err: ProviderError) -> Self {
        Self::GenerationFailed(err.to_string())
    }

    /// 语音 / 视频生成阶段的服务错误
    pub fn video_generation(err: ProviderError) -> Self {
        Self::VideoGenerationFailed(err.to_string())
    }
}

impl From<ScriptParseError> for ApplicationError {
    fn from(err: ScriptParseError) -> Self {
        let reason = err.to_string();
        Self::InvalidAiResponse {
            reason,
            raw: err.into_raw(),
        }
    }
}

impl From<EncodeError> for ApplicationError {
    fn from(err: EncodeError) -> Self {
        Self::ProcessingFailed(err.to_string())
    }
}

impl From<StorageError> for ApplicationError {
    fn from(err: StorageError) -> Self {
        Self::StorageError(err.to_string())
    }
}
