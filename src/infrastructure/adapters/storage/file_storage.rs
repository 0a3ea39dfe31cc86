//! File Storage - 文件系统渲染产物存储
//!
//! 实现 ArtifactStoragePort trait
//!
//! 目录结构:
//! - {work_dir}/{job_id}.{ext}  合成音频
//! - {work_dir}/{job_id}.mp4    输出视频

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;
use uuid::Uuid;

use crate::application::ports::{ArtifactStoragePort, StorageError};

/// 文件系统渲染产物存储
pub struct FileArtifactStorage {
    /// 临时文件目录
    work_dir: PathBuf,
    /// 固定背景图
    background_image: PathBuf,
}

impl FileArtifactStorage {
    /// 创建存储，确保工作目录存在
    pub async fn new(
        work_dir: impl AsRef<Path>,
        background_image: impl Into<PathBuf>,
    ) -> Result<Self, StorageError> {
        let work_dir = work_dir.as_ref().to_path_buf();

        fs::create_dir_all(&work_dir)
            .await
            .map_err(|e| StorageError::IoError(e.to_string()))?;

        Ok(Self {
            work_dir,
            background_image: background_image.into(),
        })
    }

    /// 获取工作目录
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    fn audio_path(&self, job_id: Uuid, extension: &str) -> PathBuf {
        let extension = extension.trim_start_matches('.');
        let extension = if extension.is_empty() { "mp3" } else { extension };
        self.work_dir.join(format!("{}.{}", job_id, extension))
    }
}

#[async_trait]
impl ArtifactStoragePort for FileArtifactStorage {
    async fn save_audio(
        &self,
        job_id: Uuid,
        extension: &str,
        data: &[u8],
    ) -> Result<PathBuf, StorageError> {
        let audio_path = self.audio_path(job_id, extension);

        fs::write(&audio_path, data)
            .await
            .map_err(|e| StorageError::IoError(e.to_string()))?;

        tracing::debug!(
            "Saved narration audio: job={}, size={} bytes",
            job_id,
            data.len()
        );

        Ok(audio_path)
    }

    fn video_path(&self, job_id: Uuid) -> PathBuf {
        self.work_dir.join(format!("{}.mp4", job_id))
    }

    async fn background_image(&self) -> Result<PathBuf, StorageError> {
        match fs::metadata(&self.background_image).await {
            Ok(metadata) if metadata.is_file() => Ok(self.background_image.clone()),
            _ => Err(StorageError::FileNotFound(
                self.background_image.to_string_lossy().to_string(),
            )),
        }
    }

    async fn file_size(&self, path: &Path) -> Result<u64, StorageError> {
        match fs::metadata(path).await {
            Ok(metadata) => Ok(metadata.len()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Err(
                StorageError::FileNotFound(path.to_string_lossy().to_string()),
            ),
            Err(e) => Err(StorageError::IoError(e.to_string())),
        }
    }
}
