use serde::{Deserialize, Serialize};

/// 未标注分值时的默认分值
pub const DEFAULT_SCORE: u32 = 5;

/// 未标注科目时的默认科目
pub const DEFAULT_SUBJECT: &str = "通用";

/// 题型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum QuestionType {
    /// 单选题
    SingleChoice,
    /// 多选题
    MultipleChoice,
    /// 填空题
    FillBlank,
    /// 简答题
    #[default]
    ShortAnswer,
    /// 论述题
    Essay,
}

impl QuestionType {
    pub const ALL: [QuestionType; 5] = [
        QuestionType::SingleChoice,
        QuestionType::MultipleChoice,
        QuestionType::FillBlank,
        QuestionType::ShortAnswer,
        QuestionType::Essay,
    ];

    /// 英文标识（与 JSON 中的取值一致）
    pub fn as_str(self) -> &'static str {
        match self {
            QuestionType::SingleChoice => "single-choice",
            QuestionType::MultipleChoice => "multiple-choice",
            QuestionType::FillBlank => "fill-blank",
            QuestionType::ShortAnswer => "short-answer",
            QuestionType::Essay => "essay",
        }
    }

    /// 中文标签，用于题目标题 `## 题目 N (单选)`
    pub fn label(self) -> &'static str {
        match self {
            QuestionType::SingleChoice => "单选",
            QuestionType::MultipleChoice => "多选",
            QuestionType::FillBlank => "填空",
            QuestionType::ShortAnswer => "简答",
            QuestionType::Essay => "论述",
        }
    }
}

impl std::str::FromStr for QuestionType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s.trim())
            .ok_or_else(|| format!("未知题型: {}", s))
    }
}

impl std::fmt::Display for QuestionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// 难度
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "简单",
            Difficulty::Medium => "中等",
            Difficulty::Hard => "困难",
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// 从 Markdown 文档中提取出的一道试题
///
/// `id` 只在同一次提取中唯一，重复提取同一文档会得到新的记录。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub id: String,
    pub content: String,
    #[serde(rename = "type")]
    pub question_type: QuestionType,
    pub difficulty: Difficulty,
    pub subject: String,
    pub score: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub answer: Option<String>,
    /// 来源文件名，仅用于溯源
    pub source: String,
}

impl Question {
    /// 生成批次内的题目 ID
    pub fn batch_id(source: &str, position: usize) -> String {
        format!("q-{}-{}", source, position)
    }

    /// 题干预览（日志用）
    pub fn preview(&self, max_len: usize) -> String {
        crate::utils::logging::truncate_text(&self.content, max_len)
    }

    /// 一组题目的总分
    ///
    /// 单题分值为 `u32`，合计用 `u64` 以免溢出。
    pub fn total_score(questions: &[Question]) -> u64 {
        questions.iter().map(|q| u64::from(q.score)).sum()
    }
}

impl std::fmt::Display for Question {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[{} | {} | {}分] {}",
            self.question_type.label(),
            self.difficulty.label(),
            self.score,
            self.preview(40)
        )
    }
}

/// 待提取的源文档
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceDocument {
    pub name: String,
    pub content: String,
    #[serde(skip_serializing, skip_deserializing)]
    pub file_path: Option<String>,
}

impl SourceDocument {
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
            file_path: None,
        }
    }

    pub fn with_file_path(mut self, file_path: String) -> Self {
        self.file_path = Some(file_path);
        self
    }
}
