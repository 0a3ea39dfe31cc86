//! Video Generator Port - 视频生成抽象
//!
//! 由 AI 服务直接生成视频，适配器负责把传输编码（base64）解码为原始字节

use async_trait::async_trait;

use super::ProviderError;

/// 视频生成请求
#[derive(Debug, Clone)]
pub struct VideoGenerationRequest {
    /// 生成提示词（即脚本）
    pub prompt: String,
    /// 模型标识
    pub model: String,
    /// 目标分辨率，如 1080x1920
    pub resolution: String,
    /// 时长档位
    pub duration: String,
    /// 输出格式
    pub format: String,
}

/// Video Generator Port
#[async_trait]
pub trait VideoGeneratorPort: Send + Sync {
    /// 返回解码后的视频字节
    async fn generate(&self, request: VideoGenerationRequest) -> Result<Vec<u8>, ProviderError>;
}
