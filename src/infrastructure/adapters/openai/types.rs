//! OpenAI 兼容接口的请求 / 响应结构

use serde::{Deserialize, Serialize};

/// 对话补全请求体
#[derive(Debug, Serialize)]
pub(super) struct ChatCompletionBody<'a> {
    pub model: &'a str,
    pub messages: Vec<ChatMessage<'a>>,
    pub temperature: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
}

#[derive(Debug, Serialize)]
pub(super) struct ChatMessage<'a> {
    pub role: &'a str,
    pub content: &'a str,
}

/// 对话补全响应（只取需要的字段）
#[derive(Debug, Deserialize)]
pub(super) struct ChatCompletionResponse {
    #[serde(default)]
    pub choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
pub(super) struct ChatChoice {
    pub message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
pub(super) struct ChatChoiceMessage {
    #[serde(default)]
    pub content: Option<String>,
}

/// 语音合成请求体
#[derive(Debug, Serialize)]
pub(super) struct SpeechBody<'a> {
    pub model: &'a str,
    pub voice: &'a str,
    pub input: &'a str,
    pub response_format: &'a str,
}

/// 视频生成请求体
#[derive(Debug, Serialize)]
pub(super) struct VideoBody<'a> {
    pub model: &'a str,
    pub prompt: &'a str,
    pub size: &'a str,
    pub duration: &'a str,
    pub response_format: &'a str,
}

/// 视频生成响应
///
/// 兼容 `{data:[{b64_json}]}`、顶层 `b64_json`、顶层 `video` 三种形态
#[derive(Debug, Default, Deserialize)]
pub(super) struct VideoResponse {
    #[serde(default)]
    pub data: Vec<VideoDatum>,
    #[serde(default)]
    pub b64_json: Option<String>,
    #[serde(default)]
    pub video: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(super) struct VideoDatum {
    #[serde(default)]
    pub b64_json: Option<String>,
}

impl VideoResponse {
    /// 第一个可用的 base64 负载
    pub fn payload(&self) -> Option<&str> {
        self.data
            .iter()
            .find_map(|d| d.b64_json.as_deref())
            .or(self.b64_json.as_deref())
            .or(self.video.as_deref())
    }
}

/// 错误响应 `{error:{message}}`
#[derive(Debug, Deserialize)]
pub(super) struct ErrorEnvelope {
    pub error: ErrorBody,
}

#[derive(Debug, Deserialize)]
pub(super) struct ErrorBody {
    #[serde(default)]
    pub message: String,
}
