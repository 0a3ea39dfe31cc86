//! Script Command Handlers

use std::sync::Arc;

use crate::application::commands::{GenerateScript, ScriptSettings};
use crate::application::error::ApplicationError;
use crate::application::ports::{CompletionRequest, TextGeneratorPort};
use crate::domain::{build_prompt, parse_generated_script, GeneratedScript};

/// GenerateScript Handler
///
/// brief → prompt → 文本生成 → 清洗解析
pub struct GenerateScriptHandler {
    text_generator: Arc<dyn TextGeneratorPort>,
    settings: ScriptSettings,
}

impl GenerateScriptHandler {
    pub fn new(text_generator: Arc<dyn TextGeneratorPort>, settings: ScriptSettings) -> Self {
        Self {
            text_generator,
            settings,
        }
    }

    pub async fn handle(&self, command: GenerateScript) -> Result<GeneratedScript, ApplicationError> {
        let brief = command.brief;

        if brief.script_format().is_none() {
            tracing::debug!(format = %brief.format, "Unknown format, sending prompt without style instructions");
        }

        let prompt = build_prompt(&brief);
        let request = CompletionRequest {
            model: self.settings.model.clone(),
            prompt,
            temperature: self.settings.temperature,
            max_tokens: self.settings.max_tokens,
        };

        tracing::info!(
            niche = %brief.niche,
            tone = %brief.tone,
            format = %brief.format,
            length = %brief.length,
            model = %request.model,
            "Generating script"
        );

        let raw = self
            .text_generator
            .complete(request)
            .await
            .map_err(ApplicationError::generation)?;

        let script = parse_generated_script(&raw).map_err(|e| {
            tracing::error!(error = %e, raw = %e.raw(), "Model reply is not a JSON object");
            ApplicationError::from(e)
        })?;

        tracing::info!(
            script_len = script.script.len(),
            title = %script.title,
            "Script generated"
        );

        Ok(script)
    }
}
