//! Domain Layer - 领域层
//!
//! 包含两个限界上下文:
//! - Brief Context: 内容需求与 prompt 构建
//! - Script Context: 模型回复解析

pub mod brief;
pub mod script;

pub use brief::{build_prompt, ContentBrief, ScriptFormat, ScriptLength};
pub use script::{parse_generated_script, GeneratedScript, ScriptParseError};
