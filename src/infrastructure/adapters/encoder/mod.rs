mod ffmpeg_encoder;

pub use ffmpeg_encoder::FfmpegEncoder;
