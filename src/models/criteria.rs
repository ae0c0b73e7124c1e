use super::question::{Difficulty, QuestionType};
use serde::{Deserialize, Serialize};

/// 筛选条件
///
/// 每个维度都是可选的：为空表示"不限制"，而不是"全部排除"。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterCriteria {
    pub types: Vec<QuestionType>,
    pub difficulties: Vec<Difficulty>,
    pub subjects: Vec<String>,
    /// 分值范围，两端都包含
    pub score_range: Option<(u32, u32)>,
    pub keywords: Vec<String>,
}

impl FilterCriteria {
    pub fn with_types(mut self, types: impl IntoIterator<Item = QuestionType>) -> Self {
        self.types = types.into_iter().collect();
        self
    }

    pub fn with_difficulties(mut self, difficulties: impl IntoIterator<Item = Difficulty>) -> Self {
        self.difficulties = difficulties.into_iter().collect();
        self
    }

    pub fn with_subjects<S: Into<String>>(mut self, subjects: impl IntoIterator<Item = S>) -> Self {
        self.subjects = subjects.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_score_range(mut self, min: u32, max: u32) -> Self {
        self.score_range = Some((min, max));
        self
    }

    pub fn with_keywords<S: Into<String>>(mut self, keywords: impl IntoIterator<Item = S>) -> Self {
        self.keywords = keywords.into_iter().map(Into::into).collect();
        self
    }

    /// 是否没有任何限制
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
            && self.difficulties.is_empty()
            && self.subjects.is_empty()
            && self.score_range.is_none()
            && self.keywords.is_empty()
    }
}
