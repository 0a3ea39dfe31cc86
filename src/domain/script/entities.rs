//! Script Context - Entities

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// 生成结果
///
/// 不变量: 三个字段永远存在，模型回复中缺失的字段为空字符串
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedScript {
    pub script: String,
    pub title: String,
    pub hashtags: String,
}

impl GeneratedScript {
    pub fn new(
        script: impl Into<String>,
        title: impl Into<String>,
        hashtags: impl Into<String>,
    ) -> Self {
        Self {
            script: script.into(),
            title: title.into(),
            hashtags: hashtags.into(),
        }
    }

    /// 从模型返回的 JSON 对象构建
    ///
    /// 缺失或 null 的字段记为空字符串，不视为错误
    pub fn from_object(object: &Map<String, Value>) -> Self {
        Self {
            script: field_text(object, "script"),
            title: field_text(object, "title"),
            hashtags: field_text(object, "hashtags"),
        }
    }
}

fn field_text(object: &Map<String, Value>, key: &str) -> String {
    object.get(key).map(value_text).unwrap_or_default()
}

/// 模型偶尔会把 hashtags 写成数组，按空格拼接
fn value_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Array(items) => items
            .iter()
            .map(value_text)
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join(" "),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn object(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("not an object"),
        }
    }

    #[test]
    fn test_from_object_all_fields() {
        let obj = object(json!({"script": "a", "title": "b", "hashtags": "#c"}));
        assert_eq!(GeneratedScript::from_object(&obj), GeneratedScript::new("a", "b", "#c"));
    }

    #[test]
    fn test_missing_and_null_fields_default_to_empty() {
        let obj = object(json!({"script": "only script", "title": null}));
        let result = GeneratedScript::from_object(&obj);
        assert_eq!(result.script, "only script");
        assert_eq!(result.title, "");
        assert_eq!(result.hashtags, "");
    }

    #[test]
    fn test_hashtag_array_is_joined() {
        let obj = object(json!({"hashtags": ["#cats", "#funny"]}));
        assert_eq!(GeneratedScript::from_object(&obj).hashtags, "#cats #funny");
    }

    #[test]
    fn test_non_string_scalar_is_rendered() {
        let obj = object(json!({"title": 3}));
        assert_eq!(GeneratedScript::from_object(&obj).title, "3");
    }
}
