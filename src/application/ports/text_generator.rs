//! Text Generator Port - 文本生成抽象
//!
//! 定义对话补全接口，具体实现在 infrastructure/adapters 层

use async_trait::async_trait;

use super::ProviderError;

/// 文本生成请求
///
/// 只发送一条 user 消息
#[derive(Debug, Clone)]
pub struct CompletionRequest {
    /// 模型标识
    pub model: String,
    /// 用户消息内容
    pub prompt: String,
    /// 采样温度
    pub temperature: f32,
    /// 最大生成 token 数，None 表示不限制
    pub max_tokens: Option<u32>,
}

/// Text Generator Port
#[async_trait]
pub trait TextGeneratorPort: Send + Sync {
    /// 返回模型的原始文本回复
    async fn complete(&self, request: CompletionRequest) -> Result<String, ProviderError>;
}
