//! 业务能力层
//!
//! 提取、筛选、组卷、导出都是纯函数，只处理内存中的题目列表；
//! 只有 `ExamWriter` 会碰文件系统。

pub mod assembler;
pub mod exam_writer;
pub mod extractor;
pub mod filter;
pub mod label_tables;
pub mod serializer;
pub mod stats;

pub use assembler::{generate_exam_by_difficulty, select_by_score, select_by_type_ratio, select_randomly};
pub use exam_writer::ExamWriter;
pub use extractor::{extract_from_documents, extract_questions, MIN_FALLBACK_PARAGRAPH_CHARS};
pub use filter::filter_questions;
pub use serializer::{from_json, to_json, to_markdown};
pub use stats::{question_stats, QuestionStats};
