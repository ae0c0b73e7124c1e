use crate::models::{Difficulty, Question, QuestionType};
use serde::Serialize;
use std::collections::BTreeMap;

/// 试题统计
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct QuestionStats {
    pub total: usize,
    pub by_type: BTreeMap<QuestionType, usize>,
    pub by_difficulty: BTreeMap<Difficulty, usize>,
    pub by_subject: BTreeMap<String, usize>,
    pub total_score: u64,
    pub avg_score: f64,
}

/// 统计题型、难度、科目分布以及总分、平均分
pub fn question_stats(questions: &[Question]) -> QuestionStats {
    let mut stats = QuestionStats {
        total: questions.len(),
        ..Default::default()
    };

    for q in questions {
        *stats.by_type.entry(q.question_type).or_default() += 1;
        *stats.by_difficulty.entry(q.difficulty).or_default() += 1;
        *stats.by_subject.entry(q.subject.clone()).or_default() += 1;
    }

    stats.total_score = Question::total_score(questions);

    if stats.total > 0 {
        stats.avg_score = stats.total_score as f64 / stats.total as f64;
    }

    stats
}

impl std::fmt::Display for QuestionStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "共 {} 道, 总分 {}, 平均 {:.1} 分",
            self.total, self.total_score, self.avg_score
        )?;
        for (difficulty, count) in &self.by_difficulty {
            write!(f, ", {} {}", difficulty.label(), count)?;
        }
        Ok(())
    }
}
