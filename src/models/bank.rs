use super::question::Question;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 题库中的一个源文档
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BankDocument {
    pub id: String,
    pub name: String,
    pub content: String,
    /// 内容字节数
    pub size: usize,
    pub uploaded_at: DateTime<Utc>,
    #[serde(default)]
    pub questions: Vec<Question>,
}

/// 题库
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionBank {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub documents: Vec<BankDocument>,
    pub total_questions: usize,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl QuestionBank {
    /// 重新统计题目总数
    pub fn recount(&mut self) {
        self.total_questions = self.documents.iter().map(|d| d.questions.len()).sum();
    }

    /// 按文档名选出题目，`None` 表示全部文档
    pub fn questions_of(&self, document_names: Option<&[String]>) -> Vec<Question> {
        self.documents
            .iter()
            .filter(|doc| document_names.map_or(true, |names| names.contains(&doc.name)))
            .flat_map(|doc| doc.questions.iter().cloned())
            .collect()
    }
}
