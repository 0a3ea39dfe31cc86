//! 模型回复清洗与 JSON 提取
//!
//! 处理流程:
//! 1. 去掉 Markdown 代码块标记（```json / ```）并 trim
//! 2. 直接按 JSON 解析
//! 3. 失败时提取第一个括号配平的 `{...}` 片段再解析
//! 4. 仍失败则返回 ScriptParseError

use serde_json::Value;

use super::{GeneratedScript, ScriptParseError};

const LANG_FENCE: &str = "```json";
const FENCE: &str = "```";

/// 去掉代码块标记和首尾空白
///
/// ```json 大小写不敏感
pub fn strip_code_fences(raw: &str) -> String {
    remove_ascii_case_insensitive(raw, LANG_FENCE)
        .replace(FENCE, "")
        .trim()
        .to_string()
}

/// 删除所有 needle（ASCII 大小写不敏感）
///
/// needle 必须是小写 ASCII；to_ascii_lowercase 不改变字节偏移
fn remove_ascii_case_insensitive(haystack: &str, needle: &str) -> String {
    let lower = haystack.to_ascii_lowercase();
    let mut out = String::with_capacity(haystack.len());
    let mut last = 0;

    while let Some(pos) = lower[last..].find(needle) {
        let start = last + pos;
        out.push_str(&haystack[last..start]);
        last = start + needle.len();
    }
    out.push_str(&haystack[last..]);
    out
}

/// 找到第一个括号配平的 `{...}` 片段
///
/// 跳过字符串字面量内的括号和转义字符
pub fn extract_json_object(text: &str) -> Option<&str> {
    let mut search_from = 0;

    while let Some(offset) = text[search_from..].find('{') {
        let start = search_from + offset;
        if let Some(end) = balanced_end(&text[start..]) {
            return Some(&text[start..start + end]);
        }
        search_from = start + 1;
    }

    None
}

/// 返回从开头 `{` 到配对 `}`（含）的字节长度
fn balanced_end(text: &str) -> Option<usize> {
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (idx, ch) in text.char_indices() {
        if in_string {
            match ch {
                _ if escaped => escaped = false,
                '\\' => escaped = true,
                '"' => in_string = false,
                _ => {}
            }
            continue;
        }

        match ch {
            '"' => in_string = true,
            '{' => depth += 1,
            '}' => {
                depth = depth.checked_sub(1)?;
                if depth == 0 {
                    return Some(idx + ch.len_utf8());
                }
            }
            _ => {}
        }
    }

    None
}

/// 把模型的原始回复解析为 GeneratedScript
pub fn parse_generated_script(raw: &str) -> Result<GeneratedScript, ScriptParseError> {
    let sanitized = strip_code_fences(raw);

    let value = match serde_json::from_str::<Value>(&sanitized) {
        Ok(value) => value,
        Err(direct_err) => {
            let extracted = extract_json_object(&sanitized)
                .and_then(|span| serde_json::from_str::<Value>(span).ok());

            match extracted {
                Some(value) => {
                    tracing::debug!("Recovered JSON object embedded in model reply");
                    value
                }
                None => {
                    return Err(ScriptParseError::NotJson {
                        raw: sanitized,
                        reason: direct_err.to_string(),
                    })
                }
            }
        }
    };

    match value {
        Value::Object(object) => Ok(GeneratedScript::from_object(&object)),
        _ => Err(ScriptParseError::NotAnObject { raw: sanitized }),
    }
}
