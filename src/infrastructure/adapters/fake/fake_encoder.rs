//! Fake Encoder - 用于测试的编码器
//!
//! 不启动 ffmpeg，直接把固定字节写到输出路径

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::application::ports::{EncodeError, MediaEncoderPort, StillImageMux};

/// Fake Encoder
pub struct FakeEncoder {
    output: Option<Vec<u8>>,
    calls: AtomicUsize,
}

impl FakeEncoder {
    pub fn new() -> Self {
        Self {
            output: Some(b"\x00\x00\x00\x18ftypisomfake-mp4".to_vec()),
            calls: AtomicUsize::new(0),
        }
    }

    /// 模拟 ffmpeg 非零退出
    pub fn failing() -> Self {
        Self {
            output: None,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Default for FakeEncoder {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MediaEncoderPort for FakeEncoder {
    async fn mux_still_image(&self, job: &StillImageMux) -> Result<(), EncodeError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        let output = self.output.as_ref().ok_or_else(|| EncodeError::ExitFailure {
            status: "exit status: 1".to_string(),
            stderr: "fake encoder failure".to_string(),
        })?;

        tokio::fs::write(&job.output_path, output)
            .await
            .map_err(|e| EncodeError::MissingOutput(e.to_string()))
    }
}
