//! Configuration Types
//!
//! 定义所有配置结构体

use serde::Deserialize;
use std::path::PathBuf;

use crate::application::{ScriptSettings, SpeechSettings, VideoSettings};

/// 应用主配置
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// 服务器配置
    #[serde(default)]
    pub server: ServerConfig,

    /// AI 服务配置
    #[serde(default)]
    pub provider: ProviderConfig,

    /// 脚本生成配置
    #[serde(default)]
    pub script: ScriptConfig,

    /// 语音合成配置
    #[serde(default)]
    pub speech: SpeechConfig,

    /// 视频生成配置
    #[serde(default)]
    pub video: VideoConfig,

    /// 渲染配置
    #[serde(default)]
    pub render: RenderConfig,

    /// 日志配置
    #[serde(default)]
    pub log: LogConfig,
}

/// 服务器配置
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// 监听地址
    #[serde(default = "default_host")]
    pub host: String,

    /// 监听端口
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5000
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl ServerConfig {
    /// 获取服务器地址
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// AI 服务配置
#[derive(Clone, Deserialize)]
pub struct ProviderConfig {
    /// OpenAI 兼容接口的基础 URL
    #[serde(default = "default_provider_url")]
    pub base_url: String,

    /// API Key，为空时读取 OPENAI_API_KEY
    #[serde(default)]
    pub api_key: String,

    /// 请求超时时间（秒），0 表示不限制
    #[serde(default)]
    pub timeout_secs: u64,
}

fn default_provider_url() -> String {
    "https://api.openai.com/v1".to_string()
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            base_url: default_provider_url(),
            api_key: String::new(),
            timeout_secs: 0,
        }
    }
}

// 不输出 api_key
impl std::fmt::Debug for ProviderConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &if self.api_key.is_empty() { "<unset>" } else { "<redacted>" })
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

/// 脚本生成配置
#[derive(Debug, Clone, Deserialize)]
pub struct ScriptConfig {
    /// 模型
    #[serde(default = "default_script_model")]
    pub model: String,

    /// 采样温度
    #[serde(default = "default_temperature")]
    pub temperature: f32,

    /// 最大生成 token 数，0 表示不限制
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
}

fn default_script_model() -> String {
    "gpt-4o-mini".to_string()
}

fn default_temperature() -> f32 {
    0.85
}

fn default_max_tokens() -> u32 {
    600
}

impl Default for ScriptConfig {
    fn default() -> Self {
        Self {
            model: default_script_model(),
            temperature: default_temperature(),
            max_tokens: default_max_tokens(),
        }
    }
}

impl ScriptConfig {
    pub fn settings(&self) -> ScriptSettings {
        ScriptSettings {
            model: self.model.clone(),
            temperature: self.temperature,
            max_tokens: (self.max_tokens > 0).then_some(self.max_tokens),
        }
    }
}

/// 语音合成配置
#[derive(Debug, Clone, Deserialize)]
pub struct SpeechConfig {
    #[serde(default = "default_speech_model")]
    pub model: String,

    /// 音色
    #[serde(default = "default_voice")]
    pub voice: String,

    /// 音频格式
    #[serde(default = "default_speech_format")]
    pub format: String,
}

fn default_speech_model() -> String {
    "gpt-4o-mini-tts".to_string()
}

fn default_voice() -> String {
    "alloy".to_string()
}

fn default_speech_format() -> String {
    "mp3".to_string()
}

impl Default for SpeechConfig {
    fn default() -> Self {
        Self {
            model: default_speech_model(),
            voice: default_voice(),
            format: default_speech_format(),
        }
    }
}

impl SpeechConfig {
    pub fn settings(&self) -> SpeechSettings {
        SpeechSettings {
            model: self.model.clone(),
            voice: self.voice.clone(),
            format: self.format.clone(),
        }
    }
}

/// 视频生成配置（provider 渲染模式）
#[derive(Debug, Clone, Deserialize)]
pub struct VideoConfig {
    #[serde(default = "default_video_model")]
    pub model: String,

    /// 目标分辨率
    #[serde(default = "default_resolution")]
    pub resolution: String,

    /// 时长档位
    #[serde(default = "default_duration")]
    pub duration: String,

    /// 输出格式
    #[serde(default = "default_video_format")]
    pub format: String,
}

fn default_video_model() -> String {
    "sora-2".to_string()
}

fn default_resolution() -> String {
    "1080x1920".to_string()
}

fn default_duration() -> String {
    "short".to_string()
}

fn default_video_format() -> String {
    "mp4".to_string()
}

impl Default for VideoConfig {
    fn default() -> Self {
        Self {
            model: default_video_model(),
            resolution: default_resolution(),
            duration: default_duration(),
            format: default_video_format(),
        }
    }
}

impl VideoConfig {
    pub fn settings(&self) -> VideoSettings {
        VideoSettings {
            model: self.model.clone(),
            resolution: self.resolution.clone(),
            duration: self.duration.clone(),
            format: self.format.clone(),
        }
    }
}

/// 渲染模式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum RenderMode {
    /// 语音合成 + ffmpeg 本地合成
    #[default]
    Local,
    /// AI 服务直接生成视频
    Provider,
}

impl std::fmt::Display for RenderMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RenderMode::Local => write!(f, "local"),
            RenderMode::Provider => write!(f, "provider"),
        }
    }
}

/// 渲染配置
#[derive(Debug, Clone, Deserialize)]
pub struct RenderConfig {
    /// 渲染模式
    #[serde(default)]
    pub mode: RenderMode,

    /// 临时文件目录（音频、视频，不清理）
    #[serde(default = "default_work_dir")]
    pub work_dir: PathBuf,

    /// 固定背景图
    #[serde(default = "default_background_image")]
    pub background_image: PathBuf,

    /// ffmpeg 可执行文件
    #[serde(default = "default_ffmpeg_path")]
    pub ffmpeg_path: PathBuf,
}

fn default_work_dir() -> PathBuf {
    PathBuf::from("tmp")
}

fn default_background_image() -> PathBuf {
    PathBuf::from("assets/background.jpg")
}

fn default_ffmpeg_path() -> PathBuf {
    PathBuf::from("ffmpeg")
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            mode: RenderMode::default(),
            work_dir: default_work_dir(),
            background_image: default_background_image(),
            ffmpeg_path: default_ffmpeg_path(),
        }
    }
}

/// 日志配置
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// 日志级别
    #[serde(default = "default_log_level")]
    pub level: String,

    /// 是否启用 JSON 格式
    #[serde(default)]
    pub json: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}
