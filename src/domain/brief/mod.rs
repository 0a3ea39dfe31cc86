//! Brief Context - 内容需求限界上下文
//!
//! 职责:
//! - 风格 / 时长固定词表
//! - Prompt 模板

mod prompt;
mod value_objects;

pub use prompt::build_prompt;
pub use value_objects::{ContentBrief, ScriptFormat, ScriptLength, DEFAULT_LENGTH_PHRASE};
