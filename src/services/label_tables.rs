//! 标签映射表
//!
//! 把 Markdown 中的自由文本（题型标签、难度、元数据字段名）映射为规范值。
//! 题型与难度使用有序的 `(关键词, 规范值)` 列表，按顺序做子串匹配，先匹配者胜出；
//! 元数据字段名是精确匹配，用 `phf` 静态表。

use crate::models::{Difficulty, QuestionType};
use phf::phf_map;

/// 元数据行的字段
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetaField {
    Difficulty,
    Score,
    Subject,
    Options,
    Answer,
    Type,
}

/// 元数据字段名 → 字段
static METADATA_LABELS: phf::Map<&'static str, MetaField> = phf_map! {
    "难度" => MetaField::Difficulty,
    "difficulty" => MetaField::Difficulty,
    "分值" => MetaField::Score,
    "score" => MetaField::Score,
    "科目" => MetaField::Subject,
    "subject" => MetaField::Subject,
    "选项" => MetaField::Options,
    "options" => MetaField::Options,
    "答案" => MetaField::Answer,
    "answer" => MetaField::Answer,
    "类型" => MetaField::Type,
    "题型" => MetaField::Type,
    "type" => MetaField::Type,
};

/// 题型关键词表
pub const TYPE_KEYWORDS: &[(&str, QuestionType)] = &[
    ("单选", QuestionType::SingleChoice),
    ("多选", QuestionType::MultipleChoice),
    ("填空", QuestionType::FillBlank),
    ("简答", QuestionType::ShortAnswer),
    ("解答", QuestionType::ShortAnswer),
    ("论述", QuestionType::Essay),
    ("multiple-choice", QuestionType::MultipleChoice),
    ("single-choice", QuestionType::SingleChoice),
    ("fill-blank", QuestionType::FillBlank),
    ("short-answer", QuestionType::ShortAnswer),
    ("essay", QuestionType::Essay),
];

/// 难度关键词表
pub const DIFFICULTY_KEYWORDS: &[(&str, Difficulty)] = &[
    ("简单", Difficulty::Easy),
    ("容易", Difficulty::Easy),
    ("easy", Difficulty::Easy),
    ("中等", Difficulty::Medium),
    ("medium", Difficulty::Medium),
    ("困难", Difficulty::Hard),
    ("较难", Difficulty::Hard),
    ("hard", Difficulty::Hard),
];

fn lookup<T: Copy>(table: &[(&str, T)], text: &str) -> Option<T> {
    let normalized = text.to_lowercase();
    table
        .iter()
        .find(|(keyword, _)| normalized.contains(keyword))
        .map(|(_, value)| *value)
}

/// 题型标签 → 题型，无法识别时返回 `None`
pub fn detect_question_type(label: &str) -> Option<QuestionType> {
    lookup(TYPE_KEYWORDS, label)
}

/// 难度文本 → 难度，无法识别时返回 `None`
pub fn detect_difficulty(text: &str) -> Option<Difficulty> {
    lookup(DIFFICULTY_KEYWORDS, text)
}

/// 把一行文本拆成 (字段, 值)
///
/// 支持半角/全角冒号，以及 `**分值**: 5分` 这样的加粗字段名。
pub fn split_metadata(line: &str) -> Option<(MetaField, &str)> {
    let (pos, colon_len) = line
        .char_indices()
        .find(|(_, c)| *c == ':' || *c == '：')
        .map(|(i, c)| (i, c.len_utf8()))?;

    let key = line[..pos].trim().trim_matches('*').trim().to_lowercase();
    let field = METADATA_LABELS.get(key.as_str()).copied()?;
    let value = line[pos + colon_len..].trim().trim_matches('*').trim();

    Some((field, value))
}
