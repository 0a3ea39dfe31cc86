//! Script Context - 生成结果限界上下文
//!
//! 职责:
//! - 模型回复清洗（代码块标记）
//! - JSON 对象提取与解析
//! - GeneratedScript 实体

mod entities;
mod errors;
mod extraction;

pub use entities::GeneratedScript;
pub use errors::ScriptParseError;
pub use extraction::{extract_json_object, parse_generated_script, strip_code_fences};
