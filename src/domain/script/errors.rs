//! Script Context - Errors

use thiserror::Error;

/// 模型回复解析错误
///
/// 都携带去掉代码块标记后的原始文本，便于排查
#[derive(Debug, Error)]
pub enum ScriptParseError {
    #[error("reply is not valid JSON: {reason}")]
    NotJson { raw: String, reason: String },

    #[error("reply JSON is not an object")]
    NotAnObject { raw: String },
}

impl ScriptParseError {
    pub fn raw(&self) -> &str {
        match self {
            Self::NotJson { raw, .. } => raw,
            Self::NotAnObject { raw } => raw,
        }
    }

    pub fn into_raw(self) -> String {
        match self {
            Self::NotJson { raw, .. } => raw,
            Self::NotAnObject { raw } => raw,
        }
    }
}
