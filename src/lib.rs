//! # Markdown Exam Builder
//!
//! 从 Markdown 文档中提取试题、筛选、按分值与难度组卷，并导出为 Markdown / JSON
//!
//! ## 架构设计
//!
//! ### ① 模型层（Models）
//! - `models/` - 试题、筛选条件、组卷方案、题库等数据结构
//! - `models/loaders` - 异步加载 Markdown 源文档和 TOML 组卷方案
//!
//! ### ② 业务能力层（Services）
//! - `services/` - 纯函数能力，只处理内存中的题目列表
//! - `extractor` - 题目提取（标题块 + 元数据行，退化为段落）
//! - `filter` - 按题型 / 难度 / 科目 / 分值 / 关键词筛选
//! - `assembler` - 按难度比例、按题型比例、随机选题
//! - `serializer` - 导出 Markdown 与 JSON
//! - `ExamWriter` - 写出试卷文件
//!
//! ### ③ 存储层（Storage）
//! - `storage/` - `StoragePort` 键值端口，内存与目录两种实现
//! - `QuestionBankStore` - 题库的增删查、收录文档、导入导出
//!
//! ### ④ 编排层（Orchestration）
//! - `orchestrator/batch_processor` - 加载文档、提取、收录题库、写出
//! - `orchestrator/paper_processor` - 按组卷方案组出一份试卷
//!
//! ## 模块结构

pub mod config;
pub mod error;
pub mod models;
pub mod orchestrator;
pub mod services;
pub mod storage;
pub mod utils;

// 重新导出常用类型
pub use config::Config;
pub use error::{AppError, AppResult};
pub use models::{
    Difficulty, DifficultyDistribution, ExamMode, ExamPlan, FilterCriteria, Question, QuestionType,
};
pub use orchestrator::{process_paper, App, PaperResult};
pub use services::{
    extract_questions, filter_questions, generate_exam_by_difficulty, select_randomly, to_json,
    to_markdown,
};
pub use storage::{FileStorage, MemoryStorage, QuestionBankStore, StoragePort};
