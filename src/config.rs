use crate::error::{AppResult, ConfigError};
use std::str::FromStr;

/// 程序配置
///
/// 组卷参数（标题、总分、难度比例、筛选条件）不在这里，而在 `PLAN_FILE` 指向的 TOML 组卷方案中。
#[derive(Clone, Debug)]
pub struct Config {
    /// Markdown 源文档目录
    pub input_folder: String,
    /// 试卷输出目录
    pub output_folder: String,
    /// 输出文件名（不含扩展名）
    pub output_file_stem: String,
    /// 组卷方案 TOML 文件，未设置时使用默认方案
    pub plan_file: Option<String>,
    /// 题库存储目录
    pub storage_dir: String,
    /// 设置后，把源文档收录到该名称的题库中
    pub bank_name: Option<String>,
    /// 是否显示详细日志
    pub verbose_logging: bool,
    /// 输出日志文件
    pub output_log_file: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_folder: "input_md".to_string(),
            output_folder: "output_exam".to_string(),
            output_file_stem: "exam".to_string(),
            plan_file: None,
            storage_dir: "question_banks".to_string(),
            bank_name: None,
            verbose_logging: false,
            output_log_file: "output.txt".to_string(),
        }
    }
}

impl Config {
    /// 从环境变量读取配置，未设置的项使用默认值
    pub fn from_env() -> AppResult<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// 从任意键值来源读取配置（便于测试）
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> AppResult<Self> {
        let default = Self::default();
        let non_empty = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        Ok(Self {
            input_folder: lookup("INPUT_FOLDER").unwrap_or(default.input_folder),
            output_folder: lookup("OUTPUT_FOLDER").unwrap_or(default.output_folder),
            output_file_stem: lookup("OUTPUT_FILE_STEM").unwrap_or(default.output_file_stem),
            plan_file: non_empty("PLAN_FILE"),
            storage_dir: lookup("STORAGE_DIR").unwrap_or(default.storage_dir),
            bank_name: non_empty("BANK_NAME"),
            verbose_logging: parse_var("VERBOSE_LOGGING", lookup("VERBOSE_LOGGING"), "bool")?
                .unwrap_or(default.verbose_logging),
            output_log_file: lookup("OUTPUT_LOG_FILE").unwrap_or(default.output_log_file),
        })
    }
}

fn parse_var<T: FromStr>(
    var_name: &str,
    value: Option<String>,
    expected_type: &str,
) -> AppResult<Option<T>> {
    match value {
        None => Ok(None),
        Some(v) => v.trim().parse().map(Some).map_err(|_| {
            ConfigError::EnvVarParseFailed {
                var_name: var_name.to_string(),
                value: v,
                expected_type: expected_type.to_string(),
            }
            .into()
        }),
    }
}
