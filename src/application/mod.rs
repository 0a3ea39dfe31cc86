//! 应用层 - 用例编排
//!
//! 包含：
//! - ports: 六边形架构端口定义（文本生成、语音合成、视频生成、编码器、临时文件存储）
//! - commands: 脚本生成 / 视频渲染命令及处理器
//! - error: 应用层错误定义

pub mod commands;
pub mod error;
pub mod ports;

// Re-exports
pub use commands::{
    GenerateScript, RenderVideo, RenderedVideo, ScriptSettings, SpeechSettings, VideoSettings,
    // Handlers
    handlers::{GenerateScriptHandler, RenderPipeline, RenderVideoHandler},
};

pub use error::ApplicationError;

pub use ports::{
    // Storage
    ArtifactStoragePort,
    StorageError,
    // Encoder
    EncodeError,
    MediaEncoderPort,
    StillImageMux,
    // Provider
    CompletionRequest,
    ProviderError,
    SpeechRequest,
    SpeechSynthesizerPort,
    SynthesizedSpeech,
    TextGeneratorPort,
    VideoGenerationRequest,
    VideoGeneratorPort,
};
