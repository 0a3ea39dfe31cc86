//! Configuration Loader
//!
//! 实现多源配置加载与合并逻辑
//!
//! 优先级（从高到低）：
//! 1. 环境变量
//! 2. 配置文件（config.toml）
//! 3. 默认值

use config::{Config, ConfigError as ConfigCrateError, Environment, File};
use std::path::Path;
use thiserror::Error;

use super::types::{AppConfig, RenderMode};

/// 配置加载错误
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    LoadError(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}

impl From<ConfigCrateError> for ConfigError {
    fn from(err: ConfigCrateError) -> Self {
        ConfigError::LoadError(err.to_string())
    }
}

/// 配置文件搜索路径
const CONFIG_FILE_NAMES: &[&str] = &["config", "config.local"];

/// API Key 的通用环境变量
const API_KEY_ENV: &str = "OPENAI_API_KEY";

/// 加载应用配置
///
/// 先加载 `.env`（如果存在），再按优先级从高到低合并配置：
/// 1. 环境变量（前缀 `FACTORY_`，层级分隔符 `__`）
/// 2. 配置文件（config.toml 或 config.local.toml）
/// 3. 默认值
///
/// `provider.api_key` 为空时使用 `OPENAI_API_KEY`
///
/// # 环境变量示例
/// - `FACTORY_SERVER__PORT=8080`
/// - `FACTORY_PROVIDER__BASE_URL=http://localhost:11434/v1`
/// - `FACTORY_RENDER__MODE=provider`
pub fn load_config() -> Result<AppConfig, ConfigError> {
    // .env 不存在不是错误
    let _ = dotenv::dotenv();
    load_config_from_path(None)
}

/// 从指定路径加载配置
///
/// # 参数
/// - `config_path` - 可选的配置文件路径，如果为 None 则使用默认搜索路径
pub fn load_config_from_path(config_path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    let mut builder = Config::builder();

    // 1. 默认值（最低优先级）
    builder = builder
        .set_default("server.host", "0.0.0.0")?
        .set_default("server.port", 5000)?
        .set_default("provider.base_url", "https://api.openai.com/v1")?
        .set_default("provider.api_key", "")?
        .set_default("provider.timeout_secs", 0)?
        .set_default("script.model", "gpt-4o-mini")?
        .set_default("script.temperature", 0.85)?
        .set_default("script.max_tokens", 600)?
        .set_default("speech.model", "gpt-4o-mini-tts")?
        .set_default("speech.voice", "alloy")?
        .set_default("speech.format", "mp3")?
        .set_default("video.model", "sora-2")?
        .set_default("video.resolution", "1080x1920")?
        .set_default("video.duration", "short")?
        .set_default("video.format", "mp4")?
        .set_default("render.mode", "local")?
        .set_default("render.work_dir", "tmp")?
        .set_default("render.background_image", "assets/background.jpg")?
        .set_default("render.ffmpeg_path", "ffmpeg")?
        .set_default("log.level", "info")?
        .set_default("log.json", false)?;

    // 2. 配置文件（如果存在）
    if let Some(path) = config_path {
        builder = builder.add_source(File::from(path).required(true));
    } else {
        for name in CONFIG_FILE_NAMES {
            builder = builder.add_source(File::with_name(name).required(false));
        }
    }

    // 3. 环境变量（最高优先级）
    // 例如: FACTORY_PROVIDER__API_KEY=sk-...
    builder = builder.add_source(
        Environment::with_prefix("FACTORY")
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true),
    );

    let config = builder.build()?;

    let mut app_config: AppConfig = config.try_deserialize().map_err(|e| {
        ConfigError::ParseError(format!("Failed to deserialize config: {}", e))
    })?;

    if app_config.provider.api_key.is_empty() {
        if let Ok(key) = std::env::var(API_KEY_ENV) {
            app_config.provider.api_key = key.trim().to_string();
        }
    }

    validate_config(&app_config)?;

    Ok(app_config)
}

/// 验证配置有效性
fn validate_config(config: &AppConfig) -> Result<(), ConfigError> {
    if config.server.port == 0 {
        return Err(ConfigError::ValidationError(
            "Server port cannot be 0".to_string(),
        ));
    }

    if config.provider.base_url.trim().is_empty() {
        return Err(ConfigError::ValidationError(
            "Provider base URL cannot be empty".to_string(),
        ));
    }

    if !(0.0..=2.0).contains(&config.script.temperature) {
        return Err(ConfigError::ValidationError(format!(
            "Script temperature must be within 0.0..=2.0, got {}",
            config.script.temperature
        )));
    }

    if config.speech.voice.trim().is_empty() {
        return Err(ConfigError::ValidationError(
            "Speech voice cannot be empty".to_string(),
        ));
    }

    if config.render.mode == RenderMode::Local && config.render.ffmpeg_path.as_os_str().is_empty() {
        return Err(ConfigError::ValidationError(
            "ffmpeg path cannot be empty in local render mode".to_string(),
        ));
    }

    Ok(())
}

/// 打印配置信息（用于启动时日志）
pub fn print_config(config: &AppConfig) {
    tracing::info!("=== Application Configuration ===");
    tracing::info!("Server: {}", config.server.addr());
    tracing::info!("Provider URL: {}", config.provider.base_url);
    tracing::info!(
        "Provider Timeout: {}",
        if config.provider.timeout_secs == 0 {
            "none".to_string()
        } else {
            format!("{}s", config.provider.timeout_secs)
        }
    );
    if config.provider.api_key.is_empty() {
        tracing::warn!("Provider API key is not set; generation requests will fail");
    }
    tracing::info!(
        "Script Model: {} (temperature {}, max_tokens {})",
        config.script.model,
        config.script.temperature,
        config.script.max_tokens
    );
    tracing::info!("Render Mode: {}", config.render.mode);
    match config.render.mode {
        RenderMode::Local => {
            tracing::info!("Speech: {} / {}", config.speech.model, config.speech.voice);
            tracing::info!("Work Directory: {:?}", config.render.work_dir);
            tracing::info!("Background Image: {:?}", config.render.background_image);
            tracing::info!("ffmpeg: {:?}", config.render.ffmpeg_path);
        }
        RenderMode::Provider => {
            tracing::info!(
                "Video: {} ({}, {})",
                config.video.model,
                config.video.resolution,
                config.video.duration
            );
        }
    }
    tracing::info!("Log Level: {}", config.log.level);
    tracing::info!("=================================");
}
