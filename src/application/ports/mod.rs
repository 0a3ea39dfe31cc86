//! Application Ports - 出站端口定义
//!
//! 定义应用层与基础设施层的抽象接口

mod artifact_storage;
mod media_encoder;
mod provider_error;
mod speech_synthesizer;
mod text_generator;
mod video_generator;

pub use artifact_storage::{ArtifactStoragePort, StorageError};
pub use media_encoder::{EncodeError, MediaEncoderPort, StillImageMux};
pub use provider_error::ProviderError;
pub use speech_synthesizer::{SpeechRequest, SpeechSynthesizerPort, SynthesizedSpeech};
pub use text_generator::{CompletionRequest, TextGeneratorPort};
pub use video_generator::{VideoGenerationRequest, VideoGeneratorPort};
