//! 组卷
//!
//! 三种选题方式：
//! - 按难度比例：先把总分按权重分到 简单/中等/困难 三档，再在每档内就近凑分
//! - 按题型比例：同理，按题型分档
//! - 随机抽取：打乱后取前 N 道
//!
//! 题目不足时不会报错，只会返回更少的题目，调用方应自行检查结果数量。

use crate::models::{Difficulty, DifficultyDistribution, Question, QuestionType};
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::BTreeMap;
use tracing::{debug, warn};

/// 就近凑分
///
/// 反复从剩余题目中挑选分值不超过剩余预算、且最接近剩余预算的一道；
/// 分值相同时取原顺序中靠前的。预算用完或没有题目放得下时停止。
/// 凑分结束后若预算仍有剩余，分值为 0 的题目按原顺序全部选入。
pub fn select_by_score(questions: &[Question], target_score: u32) -> Vec<Question> {
    let refs: Vec<&Question> = questions.iter().collect();
    select_refs_by_score(&refs, target_score)
        .into_iter()
        .cloned()
        .collect()
}

fn select_refs_by_score<'a>(candidates: &[&'a Question], target_score: u32) -> Vec<&'a Question> {
    let mut used = vec![false; candidates.len()];
    let mut selected = Vec::new();
    let mut remaining = target_score;

    while remaining > 0 {
        let mut best: Option<usize> = None;

        for (i, question) in candidates.iter().enumerate() {
            if used[i] || question.score == 0 || question.score > remaining {
                continue;
            }
            // 分值不超过预算时，越接近预算即分值越大；严格大于保证先出现者胜出
            if best.map_or(true, |b| question.score > candidates[b].score) {
                best = Some(i);
            }
        }

        let Some(index) = best else { break };
        used[index] = true;
        remaining -= candidates[index].score;
        selected.push(candidates[index]);
    }

    if remaining > 0 {
        selected.extend(
            candidates
                .iter()
                .zip(&used)
                .filter(|(q, used)| !**used && q.score == 0)
                .map(|(q, _)| *q),
        );
    }

    selected
}

/// 按难度比例组卷
///
/// # 参数
/// - `questions`: 候选题目
/// - `total_score`: 目标总分
/// - `distribution`: 难度权重，按三者之和归一化
///
/// # 返回
/// 依次为简单、中等、困难题目。某一档凑不满时，剩余分值顺延到下一个权重大于 0 的档位。
pub fn generate_exam_by_difficulty(
    questions: &[Question],
    total_score: u32,
    distribution: &DifficultyDistribution,
) -> Vec<Question> {
    let total_parts = distribution.total();
    if total_parts <= 0.0 {
        warn!("⚠️ 难度权重之和为 0，无法组卷");
        return Vec::new();
    }

    let easy_score = proportional(total_score, distribution.easy, total_parts);
    // 两次四舍五入可能超出总分
    let medium_score = proportional(total_score, distribution.medium, total_parts)
        .min(total_score.saturating_sub(easy_score));
    let hard_score = total_score
        .saturating_sub(easy_score)
        .saturating_sub(medium_score);

    let buckets = [
        (Difficulty::Easy, distribution.easy, easy_score),
        (Difficulty::Medium, distribution.medium, medium_score),
        (Difficulty::Hard, distribution.hard, hard_score),
    ];

    let mut selected: Vec<Question> = Vec::new();
    let mut carry = 0u32;

    for (difficulty, weight, bucket_score) in buckets {
        if weight <= 0.0 && bucket_score == 0 {
            continue;
        }

        let target = bucket_score + carry;
        let candidates: Vec<&Question> = questions
            .iter()
            .filter(|q| q.difficulty == difficulty)
            .collect();

        let picked = select_refs_by_score(&candidates, target);
        let picked_score: u32 = picked.iter().map(|q| q.score).sum();
        carry = target - picked_score;

        debug!(
            "难度 {}: 目标 {} 分, 选中 {} 道 / {} 分",
            difficulty,
            target,
            picked.len(),
            picked_score
        );
        selected.extend(picked.into_iter().cloned());
    }

    if carry > 0 {
        debug!("组卷未凑满, 差 {} 分", carry);
    }

    selected
}

/// 按题型比例组卷
///
/// `type_ratios` 中每项的比例直接乘以总分（如 0.4 表示 40%），按题型顺序依次凑分。
pub fn select_by_type_ratio(
    questions: &[Question],
    total_score: u32,
    type_ratios: &BTreeMap<QuestionType, f64>,
) -> Vec<Question> {
    let mut selected = Vec::new();

    for (question_type, ratio) in type_ratios {
        let type_score = (total_score as f64 * ratio).round().max(0.0) as u32;
        let candidates: Vec<&Question> = questions
            .iter()
            .filter(|q| q.question_type == *question_type)
            .collect();

        let picked = select_refs_by_score(&candidates, type_score);
        debug!(
            "题型 {}: 目标 {} 分, 选中 {} 道",
            question_type,
            type_score,
            picked.len()
        );
        selected.extend(picked.into_iter().cloned());
    }

    selected
}

/// 随机抽取 `count` 道题，超过题目总数时返回全部
pub fn select_randomly<R: Rng + ?Sized>(
    questions: &[Question],
    count: usize,
    rng: &mut R,
) -> Vec<Question> {
    let mut shuffled = questions.to_vec();
    shuffled.shuffle(rng);
    shuffled.truncate(count.min(questions.len()));
    shuffled
}

fn proportional(total_score: u32, weight: f64, total_parts: f64) -> u32 {
    (total_score as f64 * weight / total_parts).round().max(0.0) as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::extractor::extract_questions;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    fn question(id: &str, difficulty: Difficulty, score: u32) -> Question {
        Question {
            id: id.to_string(),
            content: format!("题干 {}", id),
            question_type: QuestionType::ShortAnswer,
            difficulty,
            subject: "数学".to_string(),
            score,
            options: None,
            answer: None,
            source: "test.md".to_string(),
        }
    }

    fn ids(questions: &[Question]) -> Vec<&str> {
        questions.iter().map(|q| q.id.as_str()).collect()
    }

    #[test]
    fn test_nearest_fit_prefers_closest_then_first() {
        let pool = vec![
            question("a", Difficulty::Easy, 3),
            question("b", Difficulty::Easy, 6),
            question("c", Difficulty::Easy, 4),
            question("d", Difficulty::Easy, 4),
            question("e", Difficulty::Easy, 12),
        ];

        // 10: 先选 6，剩 4，两道 4 分题中取靠前的 c
        assert_eq!(ids(&select_by_score(&pool, 10)), vec!["b", "c"]);
        // 8: 6 + (剩 2 无题可放)
        assert_eq!(ids(&select_by_score(&pool, 8)), vec!["b"]);
        assert!(select_by_score(&pool, 0).is_empty());
        assert!(select_by_score(&pool, 2).is_empty());
    }

    #[test]
    fn test_zero_score_questions_fill_in_while_budget_remains() {
        let pool = vec![question("five", Difficulty::Easy, 5), question("zero", Difficulty::Easy, 0)];
        assert_eq!(ids(&select_by_score(&pool, 10)), vec!["five", "zero"]);

        let pool = vec![
            question("zero-a", Difficulty::Easy, 0),
            question("one", Difficulty::Easy, 1),
            question("zero-b", Difficulty::Easy, 0),
        ];
        assert_eq!(ids(&select_by_score(&pool, 5)), vec!["one", "zero-a", "zero-b"]);
    }

    #[test]
    fn test_zero_score_questions_skipped_when_budget_met() {
        let pool = vec![question("five", Difficulty::Easy, 5), question("zero", Difficulty::Easy, 0)];
        assert_eq!(ids(&select_by_score(&pool, 5)), vec!["five"]);
        assert!(select_by_score(&pool, 0).is_empty());
    }

    #[test]
    fn test_difficulty_example_hits_target() {
        let pool = extract_questions(
            "## 题目 1 (单选)\n难度: 简单\n分值: 5分\n科目: 数学\nA. 1\nB. 2\n答案: A\n## 题目 2 (简答)\n难度: 困难\n分值: 10分",
            "exam.md",
        );
        let selected =
            generate_exam_by_difficulty(&pool, 15, &DifficultyDistribution::new(50.0, 0.0, 50.0));
        assert_eq!(selected.len(), 2);
        assert_eq!(selected.iter().map(|q| q.score).sum::<u32>(), 15);
    }

    #[test]
    fn test_difficulty_weights_are_normalized() {
        let pool = vec![
            question("e1", Difficulty::Easy, 2),
            question("e2", Difficulty::Easy, 2),
            question("m1", Difficulty::Medium, 4),
            question("h1", Difficulty::Hard, 2),
            question("h2", Difficulty::Hard, 2),
        ];
        // 1:2:1 与 25:50:25 等价：各 2 / 4 / 2 分
        let a = generate_exam_by_difficulty(&pool, 8, &DifficultyDistribution::new(1.0, 2.0, 1.0));
        let b = generate_exam_by_difficulty(&pool, 8, &DifficultyDistribution::new(25.0, 50.0, 25.0));
        assert_eq!(ids(&a), vec!["e1", "m1", "h1"]);
        assert_eq!(a, b);
    }

    #[test]
    fn test_difficulty_selection_has_no_duplicates_or_foreign_questions() {
        let pool: Vec<Question> = (0..30)
            .map(|i| {
                let difficulty = Difficulty::ALL[i % 3];
                question(&format!("q{}", i), difficulty, (i % 7) as u32 + 1)
            })
            .collect();

        for total in [0, 7, 33, 100, 500] {
            let selected = generate_exam_by_difficulty(&pool, total, &DifficultyDistribution::default());
            let unique: HashSet<&str> = selected.iter().map(|q| q.id.as_str()).collect();
            assert_eq!(unique.len(), selected.len());
            assert!(selected.iter().all(|q| pool.contains(q)));
            assert!(selected.iter().map(|q| q.score).sum::<u32>() <= total);
        }
    }

    #[test]
    fn test_zero_weights_yield_nothing() {
        let pool = vec![question("a", Difficulty::Easy, 5)];
        let selected = generate_exam_by_difficulty(&pool, 10, &DifficultyDistribution::new(0.0, 0.0, 0.0));
        assert!(selected.is_empty());
    }

    #[test]
    fn test_select_by_type_ratio() {
        let mut choice = question("c1", Difficulty::Easy, 5);
        choice.question_type = QuestionType::SingleChoice;
        let mut essay = question("e1", Difficulty::Hard, 20);
        essay.question_type = QuestionType::Essay;
        let pool = vec![choice, essay, question("s1", Difficulty::Medium, 5)];

        let mut ratios = BTreeMap::new();
        ratios.insert(QuestionType::SingleChoice, 0.2);
        ratios.insert(QuestionType::Essay, 0.8);

        let selected = select_by_type_ratio(&pool, 25, &ratios);
        assert_eq!(ids(&selected), vec!["c1", "e1"]);
    }

    #[test]
    fn test_select_randomly_bounds() {
        let pool: Vec<Question> = (0..5)
            .map(|i| question(&format!("q{}", i), Difficulty::Medium, 5))
            .collect();
        let mut rng = StdRng::seed_from_u64(7);

        let all = select_randomly(&pool, 10, &mut rng);
        let all_ids: HashSet<&str> = all.iter().map(|q| q.id.as_str()).collect();
        assert_eq!(all.len(), 5);
        assert_eq!(all_ids.len(), 5);

        assert!(select_randomly(&pool, 0, &mut rng).is_empty());

        let three = select_randomly(&pool, 3, &mut rng);
        assert_eq!(three.len(), 3);
        assert!(three.iter().all(|q| pool.contains(q)));
    }

    #[test]
    fn test_select_randomly_is_deterministic_for_seed() {
        let pool: Vec<Question> = (0..8)
            .map(|i| question(&format!("q{}", i), Difficulty::Medium, 5))
            .collect();
        let a = select_randomly(&pool, 4, &mut StdRng::seed_from_u64(42));
        let b = select_randomly(&pool, 4, &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }
}
