//! Application State
//!
//! 启动时构建一次，所有请求通过 Arc 共享

use std::sync::Arc;

use crate::application::{
    GenerateScriptHandler, RenderPipeline, RenderVideoHandler, ScriptSettings, TextGeneratorPort,
};

/// 应用状态
pub struct AppState {
    pub generate_script_handler: GenerateScriptHandler,
    pub render_video_handler: RenderVideoHandler,
}

impl AppState {
    /// 创建应用状态
    pub fn new(
        text_generator: Arc<dyn TextGeneratorPort>,
        script_settings: ScriptSettings,
        render_pipeline: RenderPipeline,
    ) -> Self {
        Self {
            generate_script_handler: GenerateScriptHandler::new(text_generator, script_settings),
            render_video_handler: RenderVideoHandler::new(render_pipeline),
        }
    }
}
