//! 单份试卷组卷器 - 编排层
//!
//! ## 职责
//!
//! 按组卷方案从题目池中组出一份试卷：
//!
//! 1. **筛选**：按方案中的条件过滤题目池
//! 2. **选题**：根据组卷方式调用对应的选题能力
//! 3. **统计输出**：记录筛选和选题的结果，题目不足时给出警告

use crate::models::{ExamMode, ExamPlan, Question, QuestionType};
use crate::services::{
    filter_questions, generate_exam_by_difficulty, question_stats, select_by_type_ratio,
    select_randomly,
};
use rand::Rng;
use std::collections::BTreeMap;
use tracing::{debug, info, warn};

/// 组卷结果
#[derive(Debug, Clone)]
pub struct PaperResult {
    /// 筛选后可用的题目数
    pub candidates: usize,
    /// 选中的题目
    pub questions: Vec<Question>,
    /// 目标总分（随机模式下为 `None`）
    pub target_score: Option<u32>,
}

impl PaperResult {
    pub fn total_score(&self) -> u64 {
        Question::total_score(&self.questions)
    }
}

/// 按组卷方案组出一份试卷
///
/// # 参数
/// - `pool`: 全部候选题目
/// - `plan`: 组卷方案
/// - `rng`: 随机数源（仅随机模式使用）
///
/// # 返回
/// 组卷结果；题目不足时结果会比要求的少，只记录警告
pub fn process_paper<R: Rng + ?Sized>(pool: &[Question], plan: &ExamPlan, rng: &mut R) -> PaperResult {
    let filtered = filter_questions(pool, &plan.criteria);
    info!(
        "🔍 筛选后剩余 {}/{} 道题 ({})",
        filtered.len(),
        pool.len(),
        question_stats(&filtered)
    );

    let (questions, target_score) = match plan.mode {
        ExamMode::Difficulty => (
            generate_exam_by_difficulty(&filtered, plan.total_score, &plan.distribution),
            Some(plan.total_score),
        ),
        ExamMode::TypeRatio => (
            select_by_type_ratio(&filtered, plan.total_score, &parse_type_ratios(&plan.type_ratios)),
            Some(plan.total_score),
        ),
        ExamMode::Random => (select_randomly(&filtered, plan.question_count, rng), None),
    };

    let result = PaperResult {
        candidates: filtered.len(),
        questions,
        target_score,
    };

    log_paper_complete(plan, &result);
    result
}

/// 把方案中的题型名转换为题型，无法识别的题型跳过
fn parse_type_ratios(raw: &BTreeMap<String, f64>) -> BTreeMap<QuestionType, f64> {
    raw.iter()
        .filter_map(|(name, ratio)| match name.parse::<QuestionType>() {
            Ok(question_type) => Some((question_type, *ratio)),
            Err(e) => {
                warn!("⚠️ {}，已忽略", e);
                None
            }
        })
        .collect()
}

// ========== 日志辅助函数 ==========

fn log_paper_complete(plan: &ExamPlan, result: &PaperResult) {
    for (index, q) in result.questions.iter().enumerate() {
        debug!("  {}. {}", index + 1, q);
    }

    match (plan.mode, result.target_score) {
        (ExamMode::Random, _) if result.questions.len() < plan.question_count => {
            warn!(
                "⚠️ 可用题目不足: 需要 {} 道，只选出 {} 道",
                plan.question_count,
                result.questions.len()
            );
        }
        (_, Some(target)) if result.total_score() < u64::from(target) => {
            warn!(
                "⚠️ 未能凑满目标分值: 目标 {} 分，实际 {} 分",
                target,
                result.total_score()
            );
        }
        _ => {}
    }

    info!(
        "✓ 试卷「{}」组卷完成: {} 道题, {} 分",
        plan.title,
        result.questions.len(),
        result.total_score()
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Difficulty, DifficultyDistribution, FilterCriteria};
    use crate::services::extract_questions;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn pool() -> Vec<Question> {
        extract_questions(
            "## 题目 1 (单选)\n难度: 简单\n分值: 5分\n科目: 数学\nA. 1\nB. 2\n答案: A\n\
             ## 题目 2 (简答)\n难度: 困难\n分值: 10分\n\
             ## 题目 3 (填空)\n难度: 中等\n分值: 4分\n科目: 物理\n光速约为____。",
            "pool.md",
        )
    }

    #[test]
    fn test_difficulty_mode() {
        let plan = ExamPlan {
            total_score: 15,
            distribution: DifficultyDistribution::new(50.0, 0.0, 50.0),
            ..Default::default()
        };
        let result = process_paper(&pool(), &plan, &mut StdRng::seed_from_u64(1));
        assert_eq!(result.candidates, 3);
        assert_eq!(result.total_score(), 15);
        assert_eq!(result.target_score, Some(15));
    }

    #[test]
    fn test_criteria_apply_before_selection() {
        let plan = ExamPlan {
            mode: ExamMode::Random,
            question_count: 5,
            criteria: FilterCriteria::default().with_difficulties([Difficulty::Easy, Difficulty::Medium]),
            ..Default::default()
        };
        let result = process_paper(&pool(), &plan, &mut StdRng::seed_from_u64(1));
        assert_eq!(result.candidates, 2);
        assert_eq!(result.questions.len(), 2);
        assert!(result.questions.iter().all(|q| q.difficulty != Difficulty::Hard));
        assert_eq!(result.target_score, None);
    }

    #[test]
    fn test_type_ratio_mode_ignores_unknown_types() {
        let mut type_ratios = BTreeMap::new();
        type_ratios.insert("fill-blank".to_string(), 0.4);
        type_ratios.insert("判断".to_string(), 0.6);
        let plan = ExamPlan {
            mode: ExamMode::TypeRatio,
            total_score: 10,
            type_ratios,
            ..Default::default()
        };
        let result = process_paper(&pool(), &plan, &mut StdRng::seed_from_u64(1));
        assert_eq!(result.questions.len(), 1);
        assert_eq!(result.questions[0].question_type, QuestionType::FillBlank);
    }
}
