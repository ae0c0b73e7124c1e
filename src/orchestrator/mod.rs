//! 编排层（Orchestration Layer）
//!
//! ## 职责
//!
//! 本层负责把文件系统和纯函数能力串起来，是整个系统的"指挥中心"。
//!
//! ## 模块划分
//!
//! ### `batch_processor` - 批量处理器
//! - 管理应用生命周期（初始化、运行）
//! - 批量加载源文档（Vec<SourceDocument>）并提取题目池
//! - 按需收录题库
//! - 写出试卷文件、输出全局统计
//!
//! ### `paper_processor` - 单份试卷组卷器
//! - 按组卷方案筛选题目池
//! - 按组卷方式选题
//! - 输出单份试卷的统计和警告
//!
//! ## 层次关系
//!
//! ```text
//! batch_processor (处理 Vec<SourceDocument>)
//!     ↓
//! paper_processor (处理 Vec<Question> → 一份试卷)
//!     ↓
//! services (能力层：extract / filter / assemble / serialize)
//!     ↓
//! storage (题库存储端口)
//! ```

pub mod batch_processor;
pub mod paper_processor;

// 重新导出主要类型
pub use batch_processor::App;
pub use paper_processor::{process_paper, PaperResult};
