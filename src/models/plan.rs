//! 组卷方案
//!
//! 从 TOML 文件加载，决定如何从筛选后的题目中组出一份试卷。

use super::criteria::FilterCriteria;
use crate::error::AppResult;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// 组卷方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExamMode {
    /// 按难度比例分配分值
    #[default]
    Difficulty,
    /// 随机抽取指定数量
    Random,
    /// 按题型比例分配分值
    TypeRatio,
}

/// 难度分布权重（不要求加起来等于 100）
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DifficultyDistribution {
    pub easy: f64,
    pub medium: f64,
    pub hard: f64,
}

impl DifficultyDistribution {
    pub fn new(easy: f64, medium: f64, hard: f64) -> Self {
        Self { easy, medium, hard }
    }

    pub fn total(&self) -> f64 {
        self.easy + self.medium + self.hard
    }
}

impl Default for DifficultyDistribution {
    fn default() -> Self {
        Self::new(30.0, 50.0, 20.0)
    }
}

/// 组卷方案
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExamPlan {
    /// 试卷标题
    pub title: String,
    pub mode: ExamMode,
    /// 目标总分（difficulty / type-ratio 模式）
    pub total_score: u32,
    pub distribution: DifficultyDistribution,
    /// 题目数量（random 模式）
    pub question_count: usize,
    /// 各题型所占总分比例（type-ratio 模式），如 `single-choice = 0.4`
    pub type_ratios: BTreeMap<String, f64>,
    pub criteria: FilterCriteria,
}

impl Default for ExamPlan {
    fn default() -> Self {
        Self {
            title: "试卷".to_string(),
            mode: ExamMode::Difficulty,
            total_score: 100,
            distribution: DifficultyDistribution::default(),
            question_count: 10,
            type_ratios: BTreeMap::new(),
            criteria: FilterCriteria::default(),
        }
    }
}

impl ExamPlan {
    /// 从 TOML 文本解析，缺失的字段使用默认值
    pub fn from_toml_str(content: &str) -> AppResult<Self> {
        Ok(toml::from_str(content)?)
    }
}
