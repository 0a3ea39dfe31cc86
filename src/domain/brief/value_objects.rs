//! Brief Context - Value Objects

use serde::{Deserialize, Serialize};

/// 未知或缺失 length 时使用的时长描述
pub const DEFAULT_LENGTH_PHRASE: &str = "15–20 seconds.";

/// 脚本风格
///
/// 固定词表，所有路由共享
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScriptFormat {
    Hook,
    Story,
    Motivational,
    Hype,
    Soft,
    Facts,
    Listicle,
    Top3,
    Anime,
}

impl ScriptFormat {
    pub const ALL: [ScriptFormat; 9] = [
        ScriptFormat::Hook,
        ScriptFormat::Story,
        ScriptFormat::Motivational,
        ScriptFormat::Hype,
        ScriptFormat::Soft,
        ScriptFormat::Facts,
        ScriptFormat::Listicle,
        ScriptFormat::Top3,
        ScriptFormat::Anime,
    ];

    /// 按请求中的 key 精确匹配（区分大小写）
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "hook" => Some(Self::Hook),
            "story" => Some(Self::Story),
            "motivational" => Some(Self::Motivational),
            "hype" => Some(Self::Hype),
            "soft" => Some(Self::Soft),
            "facts" => Some(Self::Facts),
            "listicle" => Some(Self::Listicle),
            "top3" => Some(Self::Top3),
            "anime" => Some(Self::Anime),
            _ => None,
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            Self::Hook => "hook",
            Self::Story => "story",
            Self::Motivational => "motivational",
            Self::Hype => "hype",
            Self::Soft => "soft",
            Self::Facts => "facts",
            Self::Listicle => "listicle",
            Self::Top3 => "top3",
            Self::Anime => "anime",
        }
    }

    /// 写入 prompt 的风格指令
    pub fn instruction(&self) -> &'static str {
        match self {
            Self::Hook => "Write a viral TikTok hook. 1–2 punchy lines.",
            Self::Story => "Write a cinematic short story narration with a beginning and climax.",
            Self::Motivational => "Write a hype motivational speech with emotional pacing.",
            Self::Hype => "Write an aggressive high-energy script.",
            Self::Soft => "Write a soft-spoken comforting narration.",
            Self::Facts => "Write a list of rapid-fire facts.",
            Self::Listicle => "Write a 5-item list (#1–#5).",
            Self::Top3 => "Write a Top 3 countdown.",
            Self::Anime => "Write in anime narrator style. Dramatic, spiritual, epic.",
        }
    }
}

impl std::fmt::Display for ScriptFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// 脚本时长档位
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScriptLength {
    Short,
    Medium,
    Long,
}

impl ScriptLength {
    pub const ALL: [ScriptLength; 3] = [ScriptLength::Short, ScriptLength::Medium, ScriptLength::Long];

    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "short" => Some(Self::Short),
            "medium" => Some(Self::Medium),
            "long" => Some(Self::Long),
            _ => None,
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            Self::Short => "short",
            Self::Medium => "medium",
            Self::Long => "long",
        }
    }

    /// 时长 / 行数描述
    pub fn phrase(&self) -> &'static str {
        match self {
            Self::Short => "6–10 seconds, 1–3 lines.",
            Self::Medium => "12–18 seconds, 3–6 lines.",
            Self::Long => "20–28 seconds, 6–10 lines.",
        }
    }
}

impl std::fmt::Display for ScriptLength {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// 内容需求
///
/// format / length 保留原始字符串：未知 key 不是错误，
/// 只是解析不到对应的指令
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContentBrief {
    pub niche: String,
    pub tone: String,
    pub format: String,
    pub length: String,
}

impl ContentBrief {
    pub fn new(
        niche: impl Into<String>,
        tone: impl Into<String>,
        format: impl Into<String>,
        length: impl Into<String>,
    ) -> Self {
        Self {
            niche: niche.into(),
            tone: tone.into(),
            format: format.into(),
            length: length.into(),
        }
    }

    pub fn script_format(&self) -> Option<ScriptFormat> {
        ScriptFormat::from_key(&self.format)
    }

    pub fn script_length(&self) -> Option<ScriptLength> {
        ScriptLength::from_key(&self.length)
    }

    /// 未知 format 返回空字符串
    pub fn style_instruction(&self) -> &'static str {
        self.script_format().map(|f| f.instruction()).unwrap_or("")
    }

    /// 未知 length 回退到 [`DEFAULT_LENGTH_PHRASE`]
    pub fn length_phrase(&self) -> &'static str {
        self.script_length()
            .map(|l| l.phrase())
            .unwrap_or(DEFAULT_LENGTH_PHRASE)
    }
}
