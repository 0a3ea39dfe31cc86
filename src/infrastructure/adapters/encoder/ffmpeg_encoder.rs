//! FFmpeg Encoder - 基于 ffmpeg 子进程的媒体合成
//!
//! 背景图 `-loop 1` 作为视频流，合成音频作为音频流，
//! 缩放 / 填充到竖屏 1080x1920，`-shortest` 按较短的流截断

use async_trait::async_trait;
use std::ffi::OsString;
use std::path::PathBuf;
use std::process::Stdio;
use tokio::process::Command;

use crate::application::ports::{EncodeError, MediaEncoderPort, StillImageMux};

/// stderr 保留的尾部长度
const STDERR_TAIL_CHARS: usize = 1200;

/// 竖屏输出：等比缩放后居中填充
const VERTICAL_FILTER: &str =
    "scale=1080:1920:force_original_aspect_ratio=decrease,pad=1080:1920:(ow-iw)/2:(oh-ih)/2";

/// FFmpeg 编码器
pub struct FfmpegEncoder {
    /// ffmpeg 可执行文件
    binary: PathBuf,
}

impl FfmpegEncoder {
    pub fn new(binary: impl Into<PathBuf>) -> Self {
        Self {
            binary: binary.into(),
        }
    }

    /// 固定参数集
    fn build_args(job: &StillImageMux) -> Vec<OsString> {
        let mut args: Vec<OsString> = ["-y", "-hide_banner", "-loglevel", "error", "-loop", "1", "-i"]
            .into_iter()
            .map(OsString::from)
            .collect();
        args.push(job.image_path.clone().into());
        args.push("-i".into());
        args.push(job.audio_path.clone().into());

        args.extend(
            [
                "-map", "0:v:0",
                "-map", "1:a:0",
                "-vf", VERTICAL_FILTER,
                "-c:v", "libx264",
                "-tune", "stillimage",
                "-pix_fmt", "yuv420p",
                "-r", "30",
                "-c:a", "aac",
                "-b:a", "192k",
                "-movflags", "+faststart",
                "-shortest",
            ]
            .into_iter()
            .map(OsString::from),
        );

        args.push(job.output_path.clone().into());
        args
    }
}

impl Default for FfmpegEncoder {
    fn default() -> Self {
        Self::new("ffmpeg")
    }
}

fn stderr_tail(stderr: &[u8]) -> String {
    let text = String::from_utf8_lossy(stderr);
    let text = text.trim();
    let skip = text.chars().count().saturating_sub(STDERR_TAIL_CHARS);
    text.chars().skip(skip).collect()
}

#[async_trait]
impl MediaEncoderPort for FfmpegEncoder {
    async fn mux_still_image(&self, job: &StillImageMux) -> Result<(), EncodeError> {
        let args = Self::build_args(job);

        tracing::debug!(
            binary = %self.binary.display(),
            image = %job.image_path.display(),
            audio = %job.audio_path.display(),
            output = %job.output_path.display(),
            "Starting ffmpeg"
        );

        let started = std::time::Instant::now();
        let output = Command::new(&self.binary)
            .args(&args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .output()
            .await
            .map_err(|e| EncodeError::SpawnFailed(format!("{}: {}", self.binary.display(), e)))?;

        if !output.status.success() {
            let stderr = stderr_tail(&output.stderr);
            tracing::error!(
                status = %output.status,
                stderr = %stderr,
                "ffmpeg failed"
            );
            return Err(EncodeError::ExitFailure {
                status: output.status.to_string(),
                stderr,
            });
        }

        if tokio::fs::metadata(&job.output_path).await.is_err() {
            return Err(EncodeError::MissingOutput(
                job.output_path.display().to_string(),
            ));
        }

        tracing::info!(
            elapsed_ms = started.elapsed().as_millis() as u64,
            output = %job.output_path.display(),
            "ffmpeg finished"
        );

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn job() -> StillImageMux {
        StillImageMux {
            image_path: PathBuf::from("assets/background.jpg"),
            audio_path: PathBuf::from("tmp/job.mp3"),
            output_path: PathBuf::from("tmp/job.mp4"),
        }
    }

    fn args_as_strings(job: &StillImageMux) -> Vec<String> {
        FfmpegEncoder::build_args(job)
            .into_iter()
            .map(|a| a.to_string_lossy().into_owned())
            .collect()
    }

    #[test]
    fn test_args_loop_image_before_its_input() {
        let args = args_as_strings(&job());
        let loop_pos = args.iter().position(|a| a == "-loop").unwrap();
        assert_eq!(args[loop_pos + 1], "1");
        assert_eq!(args[loop_pos + 2], "-i");
        assert_eq!(args[loop_pos + 3], "assets/background.jpg");
    }

    #[test]
    fn test_args_trim_to_shortest_stream() {
        let args = args_as_strings(&job());
        assert!(args.contains(&"-shortest".to_string()));
        assert!(args.contains(&"tmp/job.mp3".to_string()));
        assert_eq!(args.last().unwrap(), "tmp/job.mp4");
    }

    #[test]
    fn test_args_produce_vertical_h264_aac() {
        let args = args_as_strings(&job());
        let vf = args.iter().position(|a| a == "-vf").unwrap();
        assert!(args[vf + 1].contains("1080:1920"));
        assert!(args.windows(2).any(|w| w[0] == "-c:v" && w[1] == "libx264"));
        assert!(args.windows(2).any(|w| w[0] == "-c:a" && w[1] == "aac"));
    }

    #[test]
    fn test_stderr_tail_keeps_end() {
        let long = "x".repeat(STDERR_TAIL_CHARS) + "END";
        let tail = stderr_tail(long.as_bytes());
        assert!(tail.ends_with("END"));
        assert_eq!(tail.chars().count(), STDERR_TAIL_CHARS);
    }

    #[tokio::test]
    async fn test_missing_binary_is_spawn_failure() {
        let encoder = FfmpegEncoder::new("/nonexistent/ffmpeg-binary");
        let err = encoder.mux_still_image(&job()).await.unwrap_err();
        assert!(matches!(err, EncodeError::SpawnFailed(_)));
    }
}
