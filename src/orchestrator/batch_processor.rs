//! 批量处理器 - 编排层
//!
//! ## 职责
//!
//! 本模块是整个应用的入口，负责从源文档到输出文件的完整流程。
//!
//! ## 核心功能
//!
//! 1. **应用初始化**：写日志文件头、加载组卷方案
//! 2. **批量加载**：扫描并加载目录中的所有 Markdown 文档
//! 3. **批量提取**：逐个文档提取试题，汇总为题目池
//! 4. **收录题库**：配置了题库名称时，把文档收录进题库
//! 5. **组卷与写出**：委托 `paper_processor` 组卷，`ExamWriter` 写出
//! 6. **全局统计**：输出并记录最终结果

use crate::config::Config;
use crate::models::{load_exam_plan, load_markdown_documents, ExamPlan, Question, SourceDocument};
use crate::orchestrator::paper_processor::{self, PaperResult};
use crate::services::{extract_questions, ExamWriter};
use crate::storage::{FileStorage, QuestionBankStore};
use crate::utils::logging::{
    append_log_line, init_log_file, log_documents_loaded, log_startup, print_final_stats,
};
use anyhow::{Context, Result};
use std::path::Path;
use tracing::{info, warn};

/// 应用主结构
pub struct App {
    config: Config,
    plan: ExamPlan,
}

impl App {
    /// 初始化应用
    pub async fn initialize(config: Config) -> Result<Self> {
        // 初始化日志文件
        init_log_file(&config.output_log_file)
            .with_context(|| format!("无法创建日志文件: {}", config.output_log_file))?;

        log_startup(&config.input_folder, &config.output_folder);

        let plan = match &config.plan_file {
            Some(path) => load_exam_plan(Path::new(path)).await?,
            None => {
                info!("未指定组卷方案，使用默认方案");
                ExamPlan::default()
            }
        };

        Ok(Self { config, plan })
    }

    pub fn plan(&self) -> &ExamPlan {
        &self.plan
    }

    /// 运行应用主逻辑
    ///
    /// # 返回
    /// 组卷结果；没有找到任何文档时返回 `None`
    pub async fn run(&self) -> Result<Option<PaperResult>> {
        info!("\n📁 正在扫描源文档...");
        let documents = load_markdown_documents(&self.config.input_folder).await?;

        if documents.is_empty() {
            warn!("⚠️ 没有找到待处理的 Markdown 文件，程序结束");
            return Ok(None);
        }

        let pool = self.extract_all(&documents);
        log_documents_loaded(documents.len(), pool.len());

        if let Some(bank_name) = &self.config.bank_name {
            self.store_into_bank(bank_name, &documents)?;
        }

        let result = paper_processor::process_paper(&pool, &self.plan, &mut rand::rng());

        let writer = ExamWriter::new(&self.config.output_folder);
        let written = writer.write(&result.questions, &self.plan.title, &self.config.output_file_stem)?;
        info!("💾 已写出: {}", written.markdown_path.display());
        info!("💾 已写出: {}", written.json_path.display());

        self.record_summary(&documents, &pool, &result)?;
        print_final_stats(
            result.questions.len(),
            result.total_score(),
            result.target_score,
            &self.config.output_log_file,
        );

        Ok(Some(result))
    }

    /// 逐个文档提取试题
    fn extract_all(&self, documents: &[SourceDocument]) -> Vec<Question> {
        let mut pool = Vec::new();

        for (index, doc) in documents.iter().enumerate() {
            let questions = extract_questions(&doc.content, &doc.name);
            info!(
                "[文档 {}/{}] {}: 提取 {} 道题",
                index + 1,
                documents.len(),
                doc.name,
                questions.len()
            );
            pool.extend(questions);
        }

        pool
    }

    /// 把文档收录进题库，题库不存在时先创建
    fn store_into_bank(&self, bank_name: &str, documents: &[SourceDocument]) -> Result<()> {
        let storage = FileStorage::open(&self.config.storage_dir)
            .with_context(|| format!("无法打开题库目录: {}", self.config.storage_dir))?;
        let mut store = QuestionBankStore::new(storage);

        let bank = match store.find_bank_by_name(bank_name)? {
            Some(bank) => bank,
            None => store.create_bank(bank_name, None)?,
        };

        for doc in documents {
            store.add_document(&bank.id, &doc.name, &doc.content)?;
        }

        Ok(())
    }

    fn record_summary(
        &self,
        documents: &[SourceDocument],
        pool: &[Question],
        result: &PaperResult,
    ) -> Result<()> {
        let log_file = &self.config.output_log_file;
        append_log_line(log_file, &format!("文档数: {}", documents.len()))?;
        append_log_line(log_file, &format!("题目池: {} 道", pool.len()))?;
        append_log_line(log_file, &format!("筛选后: {} 道", result.candidates))?;
        append_log_line(
            log_file,
            &format!(
                "选中: {} 道, {} 分",
                result.questions.len(),
                result.total_score()
            ),
        )?;
        for q in &result.questions {
            append_log_line(log_file, &format!("  {} {}", q.id, q))?;
        }
        Ok(())
    }
}
