//! Prompt 构建
//!
//! 把 ContentBrief 插值到固定模板，要求模型只返回
//! 含 script / title / hashtags 三个字符串字段的 JSON 对象

use super::ContentBrief;

/// 构建发送给文本生成接口的 prompt
pub fn build_prompt(brief: &ContentBrief) -> String {
    format!(
        r#"
Return ONLY valid JSON. No backticks. No markdown. No explanations.

{{
  "script": "string",
  "title": "string",
  "hashtags": "string"
}}

Fill in the values based on this:

Niche: {niche}
Tone: {tone}
Format: {format}
Length: {length}
Format Instructions: {instructions}
"#,
        niche = brief.niche,
        tone = brief.tone,
        format = brief.format,
        length = brief.length_phrase(),
        instructions = brief.style_instruction(),
    )
}
