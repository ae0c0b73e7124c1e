//! 题库管理
//!
//! 所有题库作为一个 JSON 数组保存在 `BANKS_STORAGE_KEY` 下。
//! 每次操作都会重新读取，存储中的内容是唯一的事实来源。

use super::StoragePort;
use crate::error::{AppError, AppResult, BusinessError};
use crate::models::{BankDocument, FilterCriteria, Question, QuestionBank};
use crate::services::{extract_questions, filter_questions, to_markdown};
use chrono::Utc;
use rand::distr::Alphanumeric;
use rand::Rng;
use tracing::info;

/// 题库在存储中的键
pub const BANKS_STORAGE_KEY: &str = "markdown-editor-question-banks";

/// 生成 `{prefix}-{毫秒时间戳}-{9位随机串}` 形式的 ID
fn generate_id(prefix: &str) -> String {
    let suffix: String = rand::rng()
        .sample_iter(&Alphanumeric)
        .take(9)
        .map(|c| char::from(c).to_ascii_lowercase())
        .collect();
    format!("{}-{}-{}", prefix, Utc::now().timestamp_millis(), suffix)
}

/// 题库管理
pub struct QuestionBankStore<S: StoragePort> {
    storage: S,
}

impl<S: StoragePort> QuestionBankStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// 取回底层存储
    pub fn into_inner(self) -> S {
        self.storage
    }

    /// 获取所有题库
    pub fn all_banks(&self) -> AppResult<Vec<QuestionBank>> {
        match self.storage.get(BANKS_STORAGE_KEY)? {
            Some(data) => Ok(serde_json::from_str(&data)?),
            None => Ok(Vec::new()),
        }
    }

    /// 获取单个题库
    pub fn get_bank(&self, id: &str) -> AppResult<Option<QuestionBank>> {
        Ok(self.all_banks()?.into_iter().find(|b| b.id == id))
    }

    /// 按名称查找题库
    pub fn find_bank_by_name(&self, name: &str) -> AppResult<Option<QuestionBank>> {
        Ok(self.all_banks()?.into_iter().find(|b| b.name == name))
    }

    /// 创建新题库
    pub fn create_bank(&mut self, name: &str, description: Option<&str>) -> AppResult<QuestionBank> {
        let name = name.trim();
        if name.is_empty() {
            return Err(BusinessError::EmptyBankName.into());
        }

        let now = Utc::now();
        let bank = QuestionBank {
            id: generate_id("bank"),
            name: name.to_string(),
            description: description.map(str::to_string),
            documents: Vec::new(),
            total_questions: 0,
            created_at: now,
            updated_at: now,
        };

        self.save_bank(bank.clone())?;
        info!("📚 创建题库: {} ({})", bank.name, bank.id);
        Ok(bank)
    }

    /// 删除题库，返回是否确实删除了
    pub fn delete_bank(&mut self, id: &str) -> AppResult<bool> {
        let mut banks = self.all_banks()?;
        let before = banks.len();
        banks.retain(|b| b.id != id);

        if banks.len() == before {
            return Ok(false);
        }

        self.write_banks(&banks)?;
        Ok(true)
    }

    /// 向题库添加文档并提取其中的题目
    ///
    /// 同名文档会被替换。
    pub fn add_document(&mut self, bank_id: &str, name: &str, content: &str) -> AppResult<BankDocument> {
        let mut bank = self
            .get_bank(bank_id)?
            .ok_or_else(|| AppError::bank_not_found(bank_id))?;

        let document = BankDocument {
            id: generate_id("doc"),
            name: name.to_string(),
            content: content.to_string(),
            size: content.len(),
            uploaded_at: Utc::now(),
            questions: extract_questions(content, name),
        };

        match bank.documents.iter_mut().find(|d| d.name == name) {
            Some(existing) => *existing = document.clone(),
            None => bank.documents.push(document.clone()),
        }

        bank.recount();
        bank.updated_at = Utc::now();

        info!(
            "📄 题库 {} 收录文档 {}: {} 道题 (共 {} 道)",
            bank.name,
            name,
            document.questions.len(),
            bank.total_questions
        );

        self.save_bank(bank)?;
        Ok(document)
    }

    /// 从题库中筛选题目
    ///
    /// # 参数
    /// - `bank_id`: 题库ID
    /// - `document_names`: 只在这些文档中查找，`None` 表示全部文档
    /// - `criteria`: 筛选条件
    pub fn query(
        &self,
        bank_id: &str,
        document_names: Option<&[String]>,
        criteria: &FilterCriteria,
    ) -> AppResult<Vec<Question>> {
        let bank = self
            .get_bank(bank_id)?
            .ok_or_else(|| AppError::bank_not_found(bank_id))?;

        Ok(filter_questions(&bank.questions_of(document_names), criteria))
    }

    /// 把题库中筛选出的题目生成为一份 Markdown 试卷
    pub fn exam_markdown(
        &self,
        bank_id: &str,
        document_names: Option<&[String]>,
        criteria: &FilterCriteria,
        title: &str,
    ) -> AppResult<String> {
        let questions = self.query(bank_id, document_names, criteria)?;
        Ok(to_markdown(&questions, title))
    }

    /// 导出题库为 JSON
    pub fn export_json(&self, bank_id: &str) -> AppResult<String> {
        let bank = self
            .get_bank(bank_id)?
            .ok_or_else(|| AppError::bank_not_found(bank_id))?;
        Ok(serde_json::to_string_pretty(&bank)?)
    }

    /// 从 JSON 导入题库
    ///
    /// 导入的题库会分配新的 ID 和时间戳，不会覆盖已有题库。
    pub fn import_json(&mut self, json: &str) -> AppResult<QuestionBank> {
        let mut bank: QuestionBank = serde_json::from_str(json)?;
        let now = Utc::now();
        bank.id = generate_id("bank");
        bank.created_at = now;
        bank.updated_at = now;
        bank.recount();

        self.save_bank(bank.clone())?;
        info!("📥 导入题库: {} ({} 道题)", bank.name, bank.total_questions);
        Ok(bank)
    }

    fn save_bank(&mut self, bank: QuestionBank) -> AppResult<()> {
        let mut banks = self.all_banks()?;
        match banks.iter_mut().find(|b| b.id == bank.id) {
            Some(existing) => *existing = bank,
            None => banks.push(bank),
        }
        self.write_banks(&banks)
    }

    fn write_banks(&mut self, banks: &[QuestionBank]) -> AppResult<()> {
        let data = serde_json::to_string(banks)?;
        self.storage.set(BANKS_STORAGE_KEY, &data)
    }
}
