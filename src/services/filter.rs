use crate::models::{FilterCriteria, Question};

/// 筛选试题
///
/// 各维度之间是"与"的关系，同一维度内的多个取值是"或"的关系；
/// 空维度不做限制。关键词只匹配题干，且不区分大小写。
pub fn filter_questions(questions: &[Question], criteria: &FilterCriteria) -> Vec<Question> {
    let keywords: Vec<String> = criteria.keywords.iter().map(|k| k.to_lowercase()).collect();

    questions
        .iter()
        .filter(|q| matches(q, criteria, &keywords))
        .cloned()
        .collect()
}

fn matches(question: &Question, criteria: &FilterCriteria, keywords: &[String]) -> bool {
    if !criteria.types.is_empty() && !criteria.types.contains(&question.question_type) {
        return false;
    }

    if !criteria.difficulties.is_empty() && !criteria.difficulties.contains(&question.difficulty) {
        return false;
    }

    if !criteria.subjects.is_empty() && !criteria.subjects.contains(&question.subject) {
        return false;
    }

    if let Some((min, max)) = criteria.score_range {
        if question.score < min || question.score > max {
            return false;
        }
    }

    if !keywords.is_empty() {
        let content = question.content.to_lowercase();
        if !keywords.iter().any(|k| content.contains(k.as_str())) {
            return false;
        }
    }

    true
}
