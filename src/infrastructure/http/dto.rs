//! Data Transfer Objects

use serde::{Deserialize, Serialize};

use crate::domain::ContentBrief;

// ============================================================================
// Index
// ============================================================================

/// 首页响应
#[derive(Debug, Serialize)]
pub struct IndexResponse {
    pub message: &'static str,
}

// ============================================================================
// Script DTOs
// ============================================================================

/// 脚本生成请求，缺失字段按空字符串处理
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct GenerateScriptRequest {
    pub niche: String,
    pub tone: String,
    pub format: String,
    pub length: String,
}

impl From<GenerateScriptRequest> for ContentBrief {
    fn from(req: GenerateScriptRequest) -> Self {
        ContentBrief::new(req.niche, req.tone, req.format, req.length)
    }
}

// ============================================================================
// Video DTOs
// ============================================================================

/// 视频生成请求
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct GenerateVideoRequest {
    pub script: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_script_request_missing_fields_default_empty() {
        let req: GenerateScriptRequest = serde_json::from_str(r#"{"niche":"cats"}"#).unwrap();
        assert_eq!(req.niche, "cats");
        assert_eq!(req.length, "");

        let brief: ContentBrief = req.into();
        assert_eq!(brief.niche, "cats");
        assert_eq!(brief.format, "");
    }

    #[test]
    fn test_video_request_missing_script() {
        let req: GenerateVideoRequest = serde_json::from_str("{}").unwrap();
        assert!(req.script.is_empty());
    }
}
