//! Fake Provider - 用于测试的 AI 服务
//!
//! 返回预设的回复，记录调用次数和最后一次输入

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use crate::application::ports::{
    CompletionRequest, ProviderError, SpeechRequest, SpeechSynthesizerPort, SynthesizedSpeech,
    TextGeneratorPort, VideoGenerationRequest, VideoGeneratorPort,
};

const DEFAULT_CHAT_REPLY: &str =
    r##"{"script":"Cats rule.","title":"Cat Hook!!","hashtags":"#cats #funny"}"##;

/// Fake Provider
///
/// 字段为 None 时对应接口返回 ServiceError
pub struct FakeProvider {
    chat_reply: Option<String>,
    speech_audio: Option<Vec<u8>>,
    video_data: Option<Vec<u8>>,
    calls: AtomicUsize,
    last_input: Mutex<Option<String>>,
}

impl FakeProvider {
    pub fn new() -> Self {
        Self {
            chat_reply: Some(DEFAULT_CHAT_REPLY.to_string()),
            speech_audio: Some(b"ID3\x04fake-mp3".to_vec()),
            video_data: Some(b"\x00\x00\x00\x18ftypmp42fake".to_vec()),
            calls: AtomicUsize::new(0),
            last_input: Mutex::new(None),
        }
    }

    /// 所有接口都失败
    pub fn failing() -> Self {
        Self {
            chat_reply: None,
            speech_audio: None,
            video_data: None,
            ..Self::new()
        }
    }

    pub fn with_chat_reply(mut self, reply: impl Into<String>) -> Self {
        self.chat_reply = Some(reply.into());
        self
    }

    pub fn with_video(mut self, data: Vec<u8>) -> Self {
        self.video_data = Some(data);
        self
    }

    /// 三个接口的调用总次数
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// 最后一次收到的 prompt / 文本
    pub fn last_prompt(&self) -> Option<String> {
        self.last_input
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    fn record(&self, input: &str) {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_input.lock().unwrap_or_else(|e| e.into_inner()) = Some(input.to_string());
    }

    fn unavailable() -> ProviderError {
        ProviderError::ServiceError {
            status: 503,
            message: "fake provider unavailable".to_string(),
        }
    }
}

impl Default for FakeProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TextGeneratorPort for FakeProvider {
    async fn complete(&self, request: CompletionRequest) -> Result<String, ProviderError> {
        self.record(&request.prompt);
        self.chat_reply.clone().ok_or_else(Self::unavailable)
    }
}

#[async_trait]
impl SpeechSynthesizerPort for FakeProvider {
    async fn synthesize(&self, request: SpeechRequest) -> Result<SynthesizedSpeech, ProviderError> {
        self.record(&request.text);
        let audio_data = self.speech_audio.clone().ok_or_else(Self::unavailable)?;
        Ok(SynthesizedSpeech {
            audio_data,
            extension: request.format,
        })
    }
}

#[async_trait]
impl VideoGeneratorPort for FakeProvider {
    async fn generate(&self, request: VideoGenerationRequest) -> Result<Vec<u8>, ProviderError> {
        self.record(&request.prompt);
        self.video_data.clone().ok_or_else(Self::unavailable)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::parse_generated_script;

    #[tokio::test]
    async fn test_default_reply_is_complete_script_object() {
        let provider = FakeProvider::new();
        let reply = provider
            .complete(CompletionRequest {
                model: "gpt-4o-mini".to_string(),
                prompt: "Niche: cats".to_string(),
                temperature: 0.85,
                max_tokens: None,
            })
            .await
            .unwrap();

        let script = parse_generated_script(&reply).unwrap();
        assert_eq!(script.script, "Cats rule.");
        assert_eq!(script.title, "Cat Hook!!");
        assert_eq!(script.hashtags, "#cats #funny");
        assert_eq!(provider.call_count(), 1);
        assert_eq!(provider.last_prompt().as_deref(), Some("Niche: cats"));
    }
}
