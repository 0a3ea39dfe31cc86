//! Faceless Factory - 无出镜短视频生成后端
//!
//! 启动流程：加载配置 → 初始化日志 → 构建适配器与处理器 → 启动 HTTP 服务

use std::sync::Arc;

use faceless_factory::application::RenderPipeline;
use faceless_factory::config::{load_config, print_config, AppConfig, RenderMode};
use faceless_factory::infrastructure::adapters::{
    FfmpegEncoder, FileArtifactStorage, OpenAiClient, OpenAiClientConfig,
};
use faceless_factory::infrastructure::http::{AppState, HttpServer, ServerConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 加载配置（优先级：环境变量 > 配置文件 > 默认值）
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    init_tracing(&config);

    tracing::info!("Faceless Factory v{}", env!("CARGO_PKG_VERSION"));
    print_config(&config);

    // AI 服务客户端，启动时创建一次，所有请求共享
    let client_config = OpenAiClientConfig::new(&config.provider.base_url, &config.provider.api_key)
        .with_timeout(config.provider.timeout_secs);
    let client = Arc::new(OpenAiClient::new(client_config)?);

    let pipeline = match config.render.mode {
        RenderMode::Local => {
            let storage = FileArtifactStorage::new(
                &config.render.work_dir,
                config.render.background_image.clone(),
            )
            .await?;
            if !config.render.background_image.is_file() {
                tracing::warn!(
                    "Background image {:?} not found; video rendering will fail",
                    config.render.background_image
                );
            }

            RenderPipeline::Local {
                speech: client.clone(),
                encoder: Arc::new(FfmpegEncoder::new(config.render.ffmpeg_path.clone())),
                storage: Arc::new(storage),
                settings: config.speech.settings(),
            }
        }
        RenderMode::Provider => RenderPipeline::Provider {
            generator: client.clone(),
            settings: config.video.settings(),
        },
    };

    let state = AppState::new(client, config.script.settings(), pipeline);
    let server_config = ServerConfig::new(&config.server.host, config.server.port);
    let server = HttpServer::new(server_config, state);

    // 启动服务器（带优雅关闭）
    server
        .run_with_shutdown(async {
            match tokio::signal::ctrl_c().await {
                Ok(()) => tracing::info!("Received shutdown signal"),
                Err(e) => {
                    // 无法监听信号时保持运行
                    tracing::error!("Failed to listen for ctrl-c: {}", e);
                    std::future::pending::<()>().await;
                }
            }
        })
        .await?;

    tracing::info!("Server shutdown complete");

    Ok(())
}

/// 初始化日志（RUST_LOG 优先）
fn init_tracing(config: &AppConfig) {
    let log_filter = format!(
        "{},faceless_factory={},tower_http=debug",
        config.log.level, config.log.level
    );
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_filter));

    if config.log.json {
        tracing_subscriber::fmt().json().with_env_filter(filter).init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}
