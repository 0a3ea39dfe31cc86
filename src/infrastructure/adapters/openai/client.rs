//! OpenAI Client - 调用 OpenAI 兼容的 HTTP 接口
//!
//! 一个客户端同时实现 TextGeneratorPort / SpeechSynthesizerPort / VideoGeneratorPort，
//! 启动时创建一次，所有请求共享
//!
//! 外部 API:
//! - POST {base_url}/chat/completions   文本生成
//! - POST {base_url}/audio/speech       语音合成（返回音频二进制）
//! - POST {base_url}/videos/generations 视频生成（返回 base64）

use async_trait::async_trait;
use base64::Engine;
use reqwest::{Client, Response};
use std::time::Duration;

use super::types::{
    ChatCompletionBody, ChatCompletionResponse, ChatMessage, ErrorEnvelope, SpeechBody,
    VideoBody, VideoResponse,
};
use crate::application::ports::{
    CompletionRequest, ProviderError, SpeechRequest, SpeechSynthesizerPort, SynthesizedSpeech,
    TextGeneratorPort, VideoGenerationRequest, VideoGeneratorPort,
};

/// 错误响应体日志截断长度
const ERROR_BODY_LOG_CHARS: usize = 800;

/// OpenAI 客户端配置
#[derive(Debug, Clone)]
pub struct OpenAiClientConfig {
    /// API 基础 URL（含版本路径）
    pub base_url: String,
    /// API Key
    pub api_key: String,
    /// 请求超时时间（秒），0 表示不限制
    pub timeout_secs: u64,
}

impl Default for OpenAiClientConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.openai.com/v1".to_string(),
            api_key: String::new(),
            timeout_secs: 0,
        }
    }
}

impl OpenAiClientConfig {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
            ..Default::default()
        }
    }

    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// OpenAI 客户端
pub struct OpenAiClient {
    client: Client,
    config: OpenAiClientConfig,
}

impl OpenAiClient {
    /// 创建新的客户端
    pub fn new(config: OpenAiClientConfig) -> Result<Self, ProviderError> {
        let mut builder = Client::builder();
        if config.timeout_secs > 0 {
            builder = builder.timeout(Duration::from_secs(config.timeout_secs));
        }
        let client = builder
            .build()
            .map_err(|e| ProviderError::NetworkError(e.to_string()))?;

        Ok(Self { client, config })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.config.base_url.trim_end_matches('/'), path)
    }

    fn chat_url(&self) -> String {
        self.endpoint("chat/completions")
    }

    fn speech_url(&self) -> String {
        self.endpoint("audio/speech")
    }

    fn video_url(&self) -> String {
        self.endpoint("videos/generations")
    }

    /// 发送 JSON 请求并检查状态码
    async fn post_json<T: serde::Serialize + ?Sized>(
        &self,
        url: &str,
        body: &T,
    ) -> Result<Response, ProviderError> {
        let response = self
            .client
            .post(url)
            .bearer_auth(&self.config.api_key)
            .json(body)
            .send()
            .await
            .map_err(map_send_error)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = error_message(&body);
            tracing::warn!(
                url = %url,
                status = status.as_u16(),
                body = %truncate(&body, ERROR_BODY_LOG_CHARS),
                "Provider request failed"
            );
            return Err(ProviderError::from_status(status.as_u16(), message));
        }

        Ok(response)
    }
}

fn map_send_error(e: reqwest::Error) -> ProviderError {
    if e.is_timeout() {
        ProviderError::Timeout
    } else if e.is_connect() {
        ProviderError::NetworkError(format!("Cannot connect to provider: {}", e))
    } else {
        ProviderError::NetworkError(e.to_string())
    }
}

/// 优先取 `{error:{message}}`，否则返回截断的原始文本
fn error_message(body: &str) -> String {
    match serde_json::from_str::<ErrorEnvelope>(body) {
        Ok(envelope) if !envelope.error.message.is_empty() => envelope.error.message,
        _ => truncate(body, ERROR_BODY_LOG_CHARS),
    }
}

fn truncate(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}

/// 取第一条 choice 的文本内容
fn first_choice_content(response: ChatCompletionResponse) -> Result<String, ProviderError> {
    response
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .ok_or_else(|| ProviderError::InvalidResponse("Completion has no message content".to_string()))
}

/// 解码视频 base64 负载
fn decode_video(response: &VideoResponse) -> Result<Vec<u8>, ProviderError> {
    let payload = response
        .payload()
        .ok_or_else(|| ProviderError::InvalidResponse("Video response has no payload".to_string()))?;

    base64::engine::general_purpose::STANDARD
        .decode(payload.trim())
        .map_err(|e| ProviderError::InvalidResponse(format!("Invalid base64 video payload: {}", e)))
}

#[async_trait]
impl TextGeneratorPort for OpenAiClient {
    async fn complete(&self, request: CompletionRequest) -> Result<String, ProviderError> {
        let body = ChatCompletionBody {
            model: &request.model,
            messages: vec![ChatMessage {
                role: "user",
                content: &request.prompt,
            }],
            temperature: request.temperature,
            max_tokens: request.max_tokens,
        };

        tracing::debug!(
            url = %self.chat_url(),
            model = %request.model,
            prompt_len = request.prompt.len(),
            temperature = request.temperature,
            "Sending chat completion request"
        );

        let response = self.post_json(&self.chat_url(), &body).await?;
        let completion: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::InvalidResponse(format!("Failed to decode completion: {}", e)))?;

        let content = first_choice_content(completion)?;

        tracing::debug!(reply_len = content.len(), "Chat completion received");

        Ok(content)
    }
}

#[async_trait]
impl SpeechSynthesizerPort for OpenAiClient {
    async fn synthesize(&self, request: SpeechRequest) -> Result<SynthesizedSpeech, ProviderError> {
        let body = SpeechBody {
            model: &request.model,
            voice: &request.voice,
            input: &request.text,
            response_format: &request.format,
        };

        tracing::debug!(
            url = %self.speech_url(),
            model = %request.model,
            voice = %request.voice,
            text_len = request.text.len(),
            "Sending speech request"
        );

        let response = self.post_json(&self.speech_url(), &body).await?;
        let audio_data = response
            .bytes()
            .await
            .map_err(|e| ProviderError::InvalidResponse(format!("Failed to read audio: {}", e)))?
            .to_vec();

        if audio_data.is_empty() {
            return Err(ProviderError::InvalidResponse("Empty audio response".to_string()));
        }

        tracing::info!(audio_size = audio_data.len(), "Speech synthesis completed");

        Ok(SynthesizedSpeech {
            audio_data,
            extension: request.format,
        })
    }
}

#[async_trait]
impl VideoGeneratorPort for OpenAiClient {
    async fn generate(&self, request: VideoGenerationRequest) -> Result<Vec<u8>, ProviderError> {
        let body = VideoBody {
            model: &request.model,
            prompt: &request.prompt,
            size: &request.resolution,
            duration: &request.duration,
            response_format: &request.format,
        };

        tracing::debug!(
            url = %self.video_url(),
            model = %request.model,
            size = %request.resolution,
            "Sending video generation request"
        );

        let response = self.post_json(&self.video_url(), &body).await?;
        let video: VideoResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::InvalidResponse(format!("Failed to decode video response: {}", e)))?;

        decode_video(&video)
    }
}
