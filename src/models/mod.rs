pub mod bank;
pub mod criteria;
pub mod loaders;
pub mod plan;
pub mod question;

pub use bank::{BankDocument, QuestionBank};
pub use criteria::FilterCriteria;
pub use loaders::{load_exam_plan, load_markdown_documents};
pub use plan::{DifficultyDistribution, ExamMode, ExamPlan};
pub use question::{Difficulty, Question, QuestionType, SourceDocument, DEFAULT_SCORE, DEFAULT_SUBJECT};
