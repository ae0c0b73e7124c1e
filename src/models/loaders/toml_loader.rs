use crate::models::plan::ExamPlan;
use anyhow::{Context, Result};
use std::path::Path;
use tokio::fs;

/// 从 TOML 文件加载组卷方案
///
/// 文件中未出现的字段使用 `ExamPlan::default()` 中的值。
pub async fn load_exam_plan(toml_file_path: &Path) -> Result<ExamPlan> {
    let content = fs::read_to_string(toml_file_path)
        .await
        .with_context(|| format!("无法读取组卷方案: {}", toml_file_path.display()))?;

    let plan = ExamPlan::from_toml_str(&content)
        .with_context(|| format!("无法解析组卷方案: {}", toml_file_path.display()))?;

    tracing::info!(
        "✓ 已加载组卷方案: {} ({:?}, 总分 {})",
        plan.title,
        plan.mode,
        plan.total_score
    );

    Ok(plan)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ExamMode;

    #[tokio::test]
    async fn test_load_exam_plan() {
        let dir = std::env::temp_dir().join(format!("md_exam_plan_{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("plan.toml");
        std::fs::write(&path, "title = \"单元测验\"\nmode = \"random\"\nquestion_count = 3\n").unwrap();

        let plan = load_exam_plan(&path).await.unwrap();
        assert_eq!(plan.title, "单元测验");
        assert_eq!(plan.mode, ExamMode::Random);
        assert_eq!(plan.question_count, 3);

        std::fs::remove_dir_all(&dir).ok();
    }

    #[tokio::test]
    async fn test_load_missing_plan_fails() {
        let result = load_exam_plan(Path::new("/nonexistent/plan.toml")).await;
        assert!(result.is_err());
    }
}
