//! 试题提取
//!
//! 从 Markdown 文本中找出 `## 题目 N (题型)` 形式的题目块，逐行识别元数据，
//! 其余内容作为题干。文档中没有任何题目块时，退化为按段落提取。
//!
//! 提取是全函数：无法识别的元数据按题干处理，缺失的字段使用默认值，从不报错。

use super::label_tables::{detect_difficulty, detect_question_type, split_metadata, MetaField};
use crate::models::{
    Difficulty, Question, QuestionType, SourceDocument, DEFAULT_SCORE, DEFAULT_SUBJECT,
};
use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

/// 退化为段落提取时，段落至少要超过的字符数
pub const MIN_FALLBACK_PARAGRAPH_CHARS: usize = 10;

static QUESTION_HEADING_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^#{2,3}\s*题目\s*(\d+)\s*(?:[(（]([^)）]*)[)）])?").expect("题目标题正则无效")
});

static OPTION_LINE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([A-Z])[.．]\s*(.*)$").expect("选项正则无效"));

static INLINE_OPTION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([A-Z])[.．]\s*").expect("行内选项正则无效"));

static SCORE_VALUE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d+)\s*(?:分|points?|pts?)?\s*$").expect("分值正则无效")
});

static SCORE_IN_TEXT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+)\s*分").expect("分值正则无效"));

/// 一个题目块：标题中的题型标签 + 标题之后的所有行
struct QuestionBlock<'a> {
    label: Option<&'a str>,
    lines: Vec<&'a str>,
}

/// 解析中的题目
struct QuestionDraft {
    question_type: QuestionType,
    difficulty: Difficulty,
    subject: String,
    score: u32,
    options: Vec<String>,
    answer: Option<String>,
    body: Vec<String>,
}

impl QuestionDraft {
    /// 用标题中的标签初始化，标签里可以同时写题型、难度和分值，如 `(单选，简单，3分)`
    fn from_label(label: Option<&str>) -> Self {
        let label = label.unwrap_or_default();
        Self {
            question_type: detect_question_type(label).unwrap_or_default(),
            difficulty: detect_difficulty(label).unwrap_or_default(),
            subject: DEFAULT_SUBJECT.to_string(),
            score: score_in_text(label).unwrap_or(DEFAULT_SCORE),
            options: Vec::new(),
            answer: None,
            body: Vec::new(),
        }
    }

    /// 应用一行元数据，返回 `false` 表示该行无法识别，应当作为题干
    fn apply(&mut self, field: MetaField, value: &str) -> bool {
        match field {
            MetaField::Difficulty => match detect_difficulty(value) {
                Some(difficulty) => self.difficulty = difficulty,
                None => return false,
            },
            MetaField::Score => match parse_score(value) {
                Some(score) => self.score = score,
                None => return false,
            },
            MetaField::Subject => {
                if value.is_empty() {
                    return false;
                }
                self.subject = value.to_string();
            }
            MetaField::Type => match detect_question_type(value) {
                Some(question_type) => self.question_type = question_type,
                None => return false,
            },
            MetaField::Answer => {
                if !value.is_empty() {
                    self.answer = Some(value.to_string());
                }
            }
            MetaField::Options => {
                if !value.is_empty() {
                    let inline = split_inline_options(value);
                    if inline.is_empty() {
                        return false;
                    }
                    self.options.extend(inline);
                }
            }
        }
        true
    }

    fn finish(self, id: String, source: &str) -> Question {
        Question {
            id,
            content: self.body.join("\n").trim().to_string(),
            question_type: self.question_type,
            difficulty: self.difficulty,
            subject: self.subject,
            score: self.score,
            options: (!self.options.is_empty()).then_some(self.options),
            answer: self.answer,
            source: source.to_string(),
        }
    }
}

/// 从 Markdown 文档中提取试题
///
/// # 参数
/// - `content`: Markdown 原文
/// - `source`: 来源名称（通常是文件名），用于生成 ID 和溯源
///
/// # 返回
/// 按出现顺序排列的试题；空文本返回空列表
pub fn extract_questions(content: &str, source: &str) -> Vec<Question> {
    let blocks = split_question_blocks(content);

    if blocks.is_empty() {
        let questions = extract_paragraphs(content, source);
        debug!(
            "{}: 未找到题目标题，按段落提取 {} 道题",
            source,
            questions.len()
        );
        return questions;
    }

    let questions: Vec<Question> = blocks
        .into_iter()
        .enumerate()
        .map(|(position, block)| parse_block(block, source, position))
        .collect();

    debug!("{}: 提取到 {} 道题", source, questions.len());
    questions
}

/// 从多个文档中提取试题，结果按文档顺序拼接
pub fn extract_from_documents(documents: &[SourceDocument]) -> Vec<Question> {
    documents
        .iter()
        .flat_map(|doc| extract_questions(&doc.content, &doc.name))
        .collect()
}

fn split_question_blocks(content: &str) -> Vec<QuestionBlock<'_>> {
    let mut blocks: Vec<QuestionBlock<'_>> = Vec::new();

    for line in content.lines() {
        if let Some(caps) = QUESTION_HEADING_RE.captures(line.trim_start()) {
            blocks.push(QuestionBlock {
                label: caps.get(2).map(|m| m.as_str().trim()),
                lines: Vec::new(),
            });
        } else if let Some(block) = blocks.last_mut() {
            block.lines.push(line);
        }
    }

    blocks
}

fn parse_block(block: QuestionBlock<'_>, source: &str, position: usize) -> Question {
    let mut draft = QuestionDraft::from_label(block.label);

    for raw in block.lines {
        let line = raw.trim();
        if line.is_empty() || is_horizontal_rule(line) {
            continue;
        }

        if let Some((field, value)) = split_metadata(line) {
            if draft.apply(field, value) {
                continue;
            }
        }

        // 选项字母必须按 A、B、C…… 依次出现
        if let Some(caps) = OPTION_LINE_RE.captures(line) {
            if caps[1].chars().next() == option_letter(draft.options.len()) {
                draft.options.push(caps[2].trim().to_string());
                continue;
            }
        }

        draft.body.push(line.to_string());
    }

    draft.finish(Question::batch_id(source, position), source)
}

fn extract_paragraphs(content: &str, source: &str) -> Vec<Question> {
    let mut paragraphs: Vec<String> = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for line in content.lines() {
        if line.trim().is_empty() {
            if !current.is_empty() {
                paragraphs.push(current.join("\n"));
                current.clear();
            }
        } else {
            current.push(line);
        }
    }
    if !current.is_empty() {
        paragraphs.push(current.join("\n"));
    }

    paragraphs
        .iter()
        .map(|p| p.trim())
        .filter(|p| p.chars().count() > MIN_FALLBACK_PARAGRAPH_CHARS)
        .enumerate()
        .map(|(position, paragraph)| Question {
            id: Question::batch_id(source, position),
            content: paragraph.to_string(),
            question_type: QuestionType::ShortAnswer,
            difficulty: Difficulty::default(),
            subject: DEFAULT_SUBJECT.to_string(),
            score: DEFAULT_SCORE,
            options: None,
            answer: None,
            source: source.to_string(),
        })
        .collect()
}

fn parse_score(value: &str) -> Option<u32> {
    SCORE_VALUE_RE
        .captures(value)
        .and_then(|caps| caps[1].parse().ok())
}

fn score_in_text(text: &str) -> Option<u32> {
    SCORE_IN_TEXT_RE
        .captures(text)
        .and_then(|caps| caps[1].parse().ok())
}

/// 第 `index` 个选项的字母，最多到 `Z`
pub(crate) fn option_letter(index: usize) -> Option<char> {
    u8::try_from(index)
        .ok()
        .filter(|i| *i < 26)
        .map(|i| char::from(b'A' + i))
}

/// `A. 1 B. 2 C. 3` → `["1", "2", "3"]`，不是以选项字母开头时返回空
fn split_inline_options(value: &str) -> Vec<String> {
    let mut markers: Vec<(usize, usize)> = Vec::new();
    for caps in INLINE_OPTION_RE.captures_iter(value) {
        let (Some(whole), Some(letter)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        let at_boundary = value[..whole.start()]
            .chars()
            .next_back()
            .map_or(true, char::is_whitespace);
        if at_boundary && letter.as_str().chars().next() == option_letter(markers.len()) {
            markers.push((whole.start(), whole.end()));
        }
    }

    if markers.first().map(|(start, _)| *start) != Some(0) {
        return Vec::new();
    }

    markers
        .iter()
        .enumerate()
        .map(|(i, (_, end))| {
            let next_start = markers.get(i + 1).map_or(value.len(), |(start, _)| *start);
            value[*end..next_start].trim().to_string()
        })
        .collect()
}

fn is_horizontal_rule(line: &str) -> bool {
    line.len() >= 3 && (line.chars().all(|c| c == '-') || line.chars().all(|c| c == '*'))
}
