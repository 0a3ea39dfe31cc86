//! Render Commands - 视频渲染命令

use std::path::PathBuf;

/// 渲染视频命令
#[derive(Debug, Clone)]
pub struct RenderVideo {
    pub script: String,
}

/// 渲染结果
#[derive(Debug, Clone)]
pub enum RenderedVideo {
    /// AI 服务直接返回的视频字节
    Buffer(Vec<u8>),
    /// 本地编码输出的文件
    File { path: PathBuf, size: u64 },
}

impl RenderedVideo {
    /// 视频大小（字节）
    pub fn len(&self) -> u64 {
        match self {
            Self::Buffer(data) => data.len() as u64,
            Self::File { size, .. } => *size,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// 语音合成参数（本地渲染）
#[derive(Debug, Clone)]
pub struct SpeechSettings {
    pub model: String,
    pub voice: String,
    pub format: String,
}

impl Default for SpeechSettings {
    fn default() -> Self {
        Self {
            model: "gpt-4o-mini-tts".to_string(),
            voice: "alloy".to_string(),
            format: "mp3".to_string(),
        }
    }
}

/// 视频生成参数（AI 服务渲染）
#[derive(Debug, Clone)]
pub struct VideoSettings {
    pub model: String,
    pub resolution: String,
    pub duration: String,
    pub format: String,
}

impl Default for VideoSettings {
    fn default() -> Self {
        Self {
            model: "sora-2".to_string(),
            resolution: "1080x1920".to_string(),
            duration: "short".to_string(),
            format: "mp4".to_string(),
        }
    }
}
