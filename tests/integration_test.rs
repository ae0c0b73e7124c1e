use md_exam_builder::models::{Difficulty, DifficultyDistribution, ExamMode, ExamPlan, QuestionType};
use md_exam_builder::services::{
    extract_questions, filter_questions, from_json, generate_exam_by_difficulty, select_randomly,
    to_markdown,
};
use md_exam_builder::storage::{MemoryStorage, QuestionBankStore};
use md_exam_builder::{App, Config, FilterCriteria};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::fs;
use std::path::PathBuf;

const EXAMPLE: &str = "## 题目 1 (单选)\n难度: 简单\n分值: 5分\n科目: 数学\nA. 1\nB. 2\n答案: A\n## 题目 2 (简答)\n难度: 困难\n分值: 10分";

const UNIT_TEST: &str = "\
# 第一单元练习

## 题目 1 (单选)
难度: 简单
分值: 2分
科目: 数学
下列数中最大的是？
A. 0.5
B. 1/3
C. 0.45
D. 2/5
答案: A

## 题目 2 (填空)
难度: 中等
分值: 4分
科目: 数学
3 的平方是____。
答案: 9

### 题目 3 (简答)
难度: 困难
分值: 8分
科目: 数学
证明：两个偶数之和仍为偶数。

## 题目 4 (论述)
难度: 中等
分值: 6分
科目: 语文
谈谈你对「学而不思则罔」的理解。
";

fn temp_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("md_exam_it_{}_{}", name, std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
fn test_spec_example_pipeline() {
    let questions = extract_questions(EXAMPLE, "example.md");
    assert_eq!(questions.len(), 2);
    assert_eq!(questions[0].question_type, QuestionType::SingleChoice);
    assert_eq!(questions[0].options, Some(vec!["1".to_string(), "2".to_string()]));
    assert_eq!(questions[0].answer.as_deref(), Some("A"));
    assert_eq!(questions[1].question_type, QuestionType::ShortAnswer);
    assert_eq!(questions[1].difficulty, Difficulty::Hard);

    let five = filter_questions(&questions, &FilterCriteria::default().with_score_range(5, 5));
    assert_eq!(five, vec![questions[0].clone()]);

    let exam = generate_exam_by_difficulty(&questions, 15, &DifficultyDistribution::new(50.0, 0.0, 50.0));
    assert_eq!(exam, questions);
}

#[test]
fn test_extract_serialize_reextract_is_stable() {
    let original = extract_questions(UNIT_TEST, "unit1.md");
    assert_eq!(original.len(), 4);

    let markdown = to_markdown(&original, "第一单元");
    let again = extract_questions(&markdown, "unit1-exam.md");

    let key = |q: &md_exam_builder::Question| (q.question_type, q.difficulty, q.score, q.content.clone());
    let mut a: Vec<_> = original.iter().map(key).collect();
    let mut b: Vec<_> = again.iter().map(key).collect();
    a.sort_by(|x, y| x.3.cmp(&y.3));
    b.sort_by(|x, y| x.3.cmp(&y.3));
    assert_eq!(a, b);
}

#[test]
fn test_random_selection_from_filtered_pool() {
    let questions = extract_questions(UNIT_TEST, "unit1.md");
    let math = filter_questions(&questions, &FilterCriteria::default().with_subjects(["数学"]));
    assert_eq!(math.len(), 3);

    let mut rng = StdRng::seed_from_u64(2024);
    let all = select_randomly(&math, 99, &mut rng);
    assert_eq!(all.len(), 3);
    assert!(math.iter().all(|q| all.contains(q)));
    assert!(select_randomly(&math, 0, &mut rng).is_empty());
}

#[test]
fn test_bank_store_with_memory_storage() {
    let mut store = QuestionBankStore::new(MemoryStorage::new());
    let bank = store.create_bank("单元练习", None).unwrap();
    store.add_document(&bank.id, "unit1.md", UNIT_TEST).unwrap();

    let essays = store
        .query(&bank.id, None, &FilterCriteria::default().with_types([QuestionType::Essay]))
        .unwrap();
    assert_eq!(essays.len(), 1);
    assert_eq!(essays[0].subject, "语文");

    let storage = store.into_inner();
    let reopened = QuestionBankStore::new(storage);
    assert_eq!(reopened.all_banks().unwrap()[0].total_questions, 4);
}

#[tokio::test]
async fn test_app_end_to_end() {
    let root = temp_dir("app");
    let input = root.join("input");
    let output = root.join("output");
    fs::create_dir_all(&input).unwrap();
    fs::write(input.join("unit1.md"), UNIT_TEST).unwrap();

    let plan = ExamPlan {
        title: "数学小测".to_string(),
        mode: ExamMode::Difficulty,
        total_score: 14,
        distribution: DifficultyDistribution::new(1.0, 2.0, 4.0),
        criteria: FilterCriteria::default().with_subjects(["数学"]),
        ..Default::default()
    };
    let plan_path = root.join("plan.toml");
    fs::write(&plan_path, toml::to_string(&plan).unwrap()).unwrap();

    let config = Config {
        input_folder: input.to_string_lossy().to_string(),
        output_folder: output.to_string_lossy().to_string(),
        output_file_stem: "quiz".to_string(),
        plan_file: Some(plan_path.to_string_lossy().to_string()),
        storage_dir: root.join("banks").to_string_lossy().to_string(),
        bank_name: Some("数学题库".to_string()),
        verbose_logging: false,
        output_log_file: root.join("run.log").to_string_lossy().to_string(),
    };

    let app = App::initialize(config).await.unwrap();
    assert_eq!(app.plan().title, "数学小测");

    let result = app.run().await.unwrap().expect("应当组出试卷");
    // 2 + 4 + 8 = 14
    assert_eq!(result.candidates, 3);
    assert_eq!(result.total_score(), 14);

    let markdown = fs::read_to_string(output.join("quiz.md")).unwrap();
    assert!(markdown.starts_with("# 数学小测\n\n总分: 14分"));
    let json = fs::read_to_string(output.join("quiz.json")).unwrap();
    assert_eq!(from_json(&json).unwrap(), result.questions);

    let log = fs::read_to_string(root.join("run.log")).unwrap();
    assert!(log.contains("选中: 3 道, 14 分"));
    assert!(root.join("banks").join("markdown-editor-question-banks.json").exists());

    fs::remove_dir_all(&root).ok();
}

#[tokio::test]
async fn test_app_with_empty_input_folder() {
    let root = temp_dir("empty");
    let input = root.join("input");
    fs::create_dir_all(&input).unwrap();

    let config = Config {
        input_folder: input.to_string_lossy().to_string(),
        output_folder: root.join("output").to_string_lossy().to_string(),
        output_log_file: root.join("run.log").to_string_lossy().to_string(),
        ..Config::default()
    };

    let app = App::initialize(config).await.unwrap();
    assert!(app.run().await.unwrap().is_none());

    fs::remove_dir_all(&root).ok();
}
