//! Script Commands - 脚本生成命令

use crate::domain::ContentBrief;

/// 生成脚本命令
#[derive(Debug, Clone)]
pub struct GenerateScript {
    pub brief: ContentBrief,
}

/// 文本生成参数
///
/// 启动时由配置构建，所有请求共享
#[derive(Debug, Clone)]
pub struct ScriptSettings {
    /// 模型标识
    pub model: String,
    /// 采样温度，非零以保留创作随机性
    pub temperature: f32,
    /// 最大生成 token 数
    pub max_tokens: Option<u32>,
}

impl Default for ScriptSettings {
    fn default() -> Self {
        Self {
            model: "gpt-4o-mini".to_string(),
            temperature: 0.85,
            max_tokens: Some(600),
        }
    }
}
