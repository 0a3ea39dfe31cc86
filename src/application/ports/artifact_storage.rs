//! Artifact Storage Port - 出站端口
//!
//! 渲染过程中的临时文件（合成音频、输出视频）和固定背景图

use async_trait::async_trait;
use std::path::PathBuf;
use thiserror::Error;
use uuid::Uuid;

/// 存储错误
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("IO error: {0}")]
    IoError(String),
}

/// Artifact Storage Port
///
/// 文件不做清理
#[async_trait]
pub trait ArtifactStoragePort: Send + Sync {
    /// 保存合成音频，返回文件路径
    async fn save_audio(
        &self,
        job_id: Uuid,
        extension: &str,
        data: &[u8],
    ) -> Result<PathBuf, StorageError>;

    /// 输出视频路径
    fn video_path(&self, job_id: Uuid) -> PathBuf;

    /// 固定背景图路径，文件不存在时报错
    async fn background_image(&self) -> Result<PathBuf, StorageError>;

    /// 文件大小（字节）
    async fn file_size(&self, path: &std::path::Path) -> Result<u64, StorageError>;
}
