//! Media Encoder Port - 媒体合成抽象
//!
//! 把静态背景图和音频合成为 MP4

use async_trait::async_trait;
use std::path::PathBuf;
use thiserror::Error;

/// 编码错误
#[derive(Debug, Error)]
pub enum EncodeError {
    #[error("Failed to launch encoder: {0}")]
    SpawnFailed(String),

    #[error("Encoder exited with {status}: {stderr}")]
    ExitFailure { status: String, stderr: String },

    #[error("Encoder produced no output: {0}")]
    MissingOutput(String),
}

/// 合成请求
///
/// 背景图循环作为视频流，音频作为音频流，以较短的流为准截断
#[derive(Debug, Clone)]
pub struct StillImageMux {
    pub image_path: PathBuf,
    pub audio_path: PathBuf,
    pub output_path: PathBuf,
}

/// Media Encoder Port
#[async_trait]
pub trait MediaEncoderPort: Send + Sync {
    async fn mux_still_image(&self, job: &StillImageMux) -> Result<(), EncodeError>;
}
