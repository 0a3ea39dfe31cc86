//! Render Command Handlers

use std::sync::Arc;
use uuid::Uuid;

use crate::application::commands::{RenderVideo, RenderedVideo, SpeechSettings, VideoSettings};
use crate::application::error::ApplicationError;
use crate::application::ports::{
    ArtifactStoragePort, MediaEncoderPort, SpeechRequest, SpeechSynthesizerPort, StillImageMux,
    VideoGenerationRequest, VideoGeneratorPort,
};

/// 渲染流水线
pub enum RenderPipeline {
    /// 语音合成 + 本地编码
    Local {
        speech: Arc<dyn SpeechSynthesizerPort>,
        encoder: Arc<dyn MediaEncoderPort>,
        storage: Arc<dyn ArtifactStoragePort>,
        settings: SpeechSettings,
    },
    /// AI 服务直接生成视频
    Provider {
        generator: Arc<dyn VideoGeneratorPort>,
        settings: VideoSettings,
    },
}

/// RenderVideo Handler
pub struct RenderVideoHandler {
    pipeline: RenderPipeline,
}

impl RenderVideoHandler {
    pub fn new(pipeline: RenderPipeline) -> Self {
        Self { pipeline }
    }

    pub fn local(
        speech: Arc<dyn SpeechSynthesizerPort>,
        encoder: Arc<dyn MediaEncoderPort>,
        storage: Arc<dyn ArtifactStoragePort>,
        settings: SpeechSettings,
    ) -> Self {
        Self::new(RenderPipeline::Local {
            speech,
            encoder,
            storage,
            settings,
        })
    }

    pub fn provider(generator: Arc<dyn VideoGeneratorPort>, settings: VideoSettings) -> Self {
        Self::new(RenderPipeline::Provider {
            generator,
            settings,
        })
    }

    pub async fn handle(&self, command: RenderVideo) -> Result<RenderedVideo, ApplicationError> {
        // 空脚本在任何外部调用之前拒绝
        let script = command.script.trim();
        if script.is_empty() {
            return Err(ApplicationError::validation("Script is required"));
        }

        match &self.pipeline {
            RenderPipeline::Local {
                speech,
                encoder,
                storage,
                settings,
            } => {
                self.render_locally(script, speech, encoder, storage, settings)
                    .await
            }
            RenderPipeline::Provider {
                generator,
                settings,
            } => self.render_with_provider(script, generator, settings).await,
        }
    }

    async fn render_with_provider(
        &self,
        script: &str,
        generator: &Arc<dyn VideoGeneratorPort>,
        settings: &VideoSettings,
    ) -> Result<RenderedVideo, ApplicationError> {
        let request = VideoGenerationRequest {
            prompt: script.to_string(),
            model: settings.model.clone(),
            resolution: settings.resolution.clone(),
            duration: settings.duration.clone(),
            format: settings.format.clone(),
        };

        tracing::info!(
            script_len = script.len(),
            model = %settings.model,
            resolution = %settings.resolution,
            "Requesting provider video generation"
        );

        let data = generator
            .generate(request)
            .await
            .map_err(ApplicationError::video_generation)?;

        if data.is_empty() {
            return Err(ApplicationError::VideoGenerationFailed(
                "Provider returned an empty video".to_string(),
            ));
        }

        tracing::info!(video_size = data.len(), "Provider video received");

        Ok(RenderedVideo::Buffer(data))
    }

    async fn render_locally(
        &self,
        script: &str,
        speech: &Arc<dyn SpeechSynthesizerPort>,
        encoder: &Arc<dyn MediaEncoderPort>,
        storage: &Arc<dyn ArtifactStoragePort>,
        settings: &SpeechSettings,
    ) -> Result<RenderedVideo, ApplicationError> {
        let job_id = Uuid::new_v4();

        tracing::info!(
            job_id = %job_id,
            script_len = script.len(),
            voice = %settings.voice,
            "Synthesizing narration"
        );

        let speech_result = speech
            .synthesize(SpeechRequest {
                text: script.to_string(),
                model: settings.model.clone(),
                voice: settings.voice.clone(),
                format: settings.format.clone(),
            })
            .await
            .map_err(ApplicationError::video_generation)?;

        let audio_path = storage
            .save_audio(job_id, &speech_result.extension, &speech_result.audio_data)
            .await?;

        let image_path = storage.background_image().await.map_err(|e| {
            ApplicationError::ProcessingFailed(format!("Background image unavailable: {}", e))
        })?;

        let job = StillImageMux {
            image_path,
            audio_path,
            output_path: storage.video_path(job_id),
        };

        encoder.mux_still_image(&job).await?;

        let size = storage.file_size(&job.output_path).await.map_err(|e| {
            ApplicationError::ProcessingFailed(format!("Encoder output unavailable: {}", e))
        })?;

        if size == 0 {
            return Err(ApplicationError::ProcessingFailed(
                "Encoder produced an empty file".to_string(),
            ));
        }

        tracing::info!(
            job_id = %job_id,
            output = %job.output_path.display(),
            video_size = size,
            "Video rendered"
        );

        Ok(RenderedVideo::File {
            path: job.output_path,
            size,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::adapters::{FakeEncoder, FakeProvider, FileArtifactStorage};
    use tempfile::TempDir;

    async fn local_handler(
        provider: Arc<FakeProvider>,
        encoder: Arc<FakeEncoder>,
        dir: &TempDir,
        with_background: bool,
    ) -> RenderVideoHandler {
        let background = dir.path().join("background.jpg");
        if with_background {
            tokio::fs::write(&background, b"jpeg").await.unwrap();
        }
        let storage = FileArtifactStorage::new(dir.path().join("work"), background)
            .await
            .unwrap();

        RenderVideoHandler::local(provider, encoder, Arc::new(storage), SpeechSettings::default())
    }

    fn command(script: &str) -> RenderVideo {
        RenderVideo {
            script: script.to_string(),
        }
    }

    #[tokio::test]
    async fn test_blank_script_rejected_without_provider_call() {
        let dir = TempDir::new().unwrap();
        let provider = Arc::new(FakeProvider::new());
        let encoder = Arc::new(FakeEncoder::new());
        let handler = local_handler(provider.clone(), encoder.clone(), &dir, true).await;

        for script in ["", "   ", "\n\t"] {
            let err = handler.handle(command(script)).await.unwrap_err();
            assert!(matches!(err, ApplicationError::ValidationError(_)));
        }
        assert_eq!(provider.call_count(), 0);
        assert_eq!(encoder.call_count(), 0);
    }

    #[tokio::test]
    async fn test_local_render_produces_file() {
        let dir = TempDir::new().unwrap();
        let provider = Arc::new(FakeProvider::new());
        let encoder = Arc::new(FakeEncoder::new());
        let handler = local_handler(provider.clone(), encoder.clone(), &dir, true).await;

        let video = handler.handle(command("  Cats rule.  ")).await.unwrap();

        match video {
            RenderedVideo::File { path, size } => {
                assert!(path.exists());
                assert_eq!(path.extension().and_then(|e| e.to_str()), Some("mp4"));
                assert!(size > 0);
            }
            other => panic!("unexpected video: {:?}", other),
        }
        assert_eq!(provider.call_count(), 1);
        assert_eq!(encoder.call_count(), 1);
        assert_eq!(provider.last_prompt().as_deref(), Some("Cats rule."));
    }

    #[tokio::test]
    async fn test_encoder_failure_is_processing_failed() {
        let dir = TempDir::new().unwrap();
        let provider = Arc::new(FakeProvider::new());
        let encoder = Arc::new(FakeEncoder::failing());
        let handler = local_handler(provider, encoder, &dir, true).await;

        let err = handler.handle(command("Cats rule.")).await.unwrap_err();
        assert!(matches!(err, ApplicationError::ProcessingFailed(_)));
    }

    #[tokio::test]
    async fn test_missing_background_is_processing_failed() {
        let dir = TempDir::new().unwrap();
        let encoder = Arc::new(FakeEncoder::new());
        let handler = local_handler(Arc::new(FakeProvider::new()), encoder.clone(), &dir, false).await;

        let err = handler.handle(command("Cats rule.")).await.unwrap_err();
        assert!(matches!(err, ApplicationError::ProcessingFailed(_)));
        assert_eq!(encoder.call_count(), 0);
    }

    #[tokio::test]
    async fn test_speech_failure_is_video_generation_failed() {
        let dir = TempDir::new().unwrap();
        let encoder = Arc::new(FakeEncoder::new());
        let handler = local_handler(Arc::new(FakeProvider::failing()), encoder.clone(), &dir, true).await;

        let err = handler.handle(command("Cats rule.")).await.unwrap_err();
        assert!(matches!(err, ApplicationError::VideoGenerationFailed(_)));
        assert_eq!(encoder.call_count(), 0);
    }

    #[tokio::test]
    async fn test_provider_render_returns_buffer() {
        let provider = Arc::new(FakeProvider::new().with_video(b"\x00\x00\x00\x18ftypmp42".to_vec()));
        let handler = RenderVideoHandler::provider(provider.clone(), VideoSettings::default());

        let video = handler.handle(command("Cats rule.")).await.unwrap();
        match video {
            RenderedVideo::Buffer(data) => assert_eq!(&data[4..8], b"ftyp"),
            other => panic!("unexpected video: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_provider_render_rejects_empty_payload() {
        let provider = Arc::new(FakeProvider::new().with_video(Vec::new()));
        let handler = RenderVideoHandler::provider(provider, VideoSettings::default());

        let err = handler.handle(command("Cats rule.")).await.unwrap_err();
        assert!(matches!(err, ApplicationError::VideoGenerationFailed(_)));
    }
}
