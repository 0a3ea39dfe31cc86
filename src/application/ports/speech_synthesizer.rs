//! Speech Synthesizer Port - 语音合成抽象
//!
//! 文本 → 音频字节，具体实现在 infrastructure/adapters 层

use async_trait::async_trait;

use super::ProviderError;

/// 语音合成请求
#[derive(Debug, Clone)]
pub struct SpeechRequest {
    /// 要合成的文本
    pub text: String,
    /// TTS 模型
    pub model: String,
    /// 音色
    pub voice: String,
    /// 音频格式（mp3 / wav / aac ...），同时作为落盘扩展名
    pub format: String,
}

/// 语音合成结果
#[derive(Debug, Clone)]
pub struct SynthesizedSpeech {
    /// 原始音频数据
    pub audio_data: Vec<u8>,
    /// 文件扩展名
    pub extension: String,
}

/// Speech Synthesizer Port
#[async_trait]
pub trait SpeechSynthesizerPort: Send + Sync {
    async fn synthesize(&self, request: SpeechRequest) -> Result<SynthesizedSpeech, ProviderError>;
}
