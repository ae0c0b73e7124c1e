//! 试卷写出服务 - 业务能力层
//!
//! 只负责把一份试卷写成 `.md` 和 `.json` 文件，不关心试卷是怎么组出来的

use crate::error::{AppError, AppResult};
use crate::models::Question;
use crate::services::serializer::{to_json, to_markdown};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// 写出结果
#[derive(Debug, Clone)]
pub struct WrittenExam {
    pub markdown_path: PathBuf,
    pub json_path: PathBuf,
}

/// 试卷写出服务
pub struct ExamWriter {
    output_folder: PathBuf,
}

impl ExamWriter {
    /// 创建新的写出服务
    pub fn new(output_folder: impl Into<PathBuf>) -> Self {
        Self {
            output_folder: output_folder.into(),
        }
    }

    /// 写出试卷
    ///
    /// # 参数
    /// - `questions`: 选中的题目
    /// - `title`: 试卷标题
    /// - `file_stem`: 文件名（不含扩展名）
    ///
    /// # 返回
    /// 两个输出文件的路径
    pub fn write(&self, questions: &[Question], title: &str, file_stem: &str) -> AppResult<WrittenExam> {
        fs::create_dir_all(&self.output_folder).map_err(|e| {
            AppError::file_write_failed(self.output_folder.to_string_lossy(), e)
        })?;

        let markdown_path = self.output_folder.join(format!("{}.md", file_stem));
        let json_path = self.output_folder.join(format!("{}.json", file_stem));

        write_file(&markdown_path, &to_markdown(questions, title))?;
        write_file(&json_path, &to_json(questions)?)?;

        debug!(
            "写出试卷: {} 道题 -> {}",
            questions.len(),
            markdown_path.display()
        );

        Ok(WrittenExam {
            markdown_path,
            json_path,
        })
    }
}

fn write_file(path: &Path, content: &str) -> AppResult<()> {
    fs::write(path, content).map_err(|e| AppError::file_write_failed(path.to_string_lossy(), e))
}
