use crate::models::question::SourceDocument;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tokio::fs;

const MARKDOWN_EXTENSIONS: [&str; 2] = ["md", "markdown"];

fn is_markdown(path: &Path) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .map(|ext| MARKDOWN_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
        .unwrap_or(false)
}

/// 从文件夹中加载所有 Markdown 文档
///
/// # 参数
/// - `folder_path`: 文档所在文件夹
///
/// # 返回
/// 按文件名排序的文档列表；读取失败的单个文件会被跳过
pub async fn load_markdown_documents(folder_path: &str) -> Result<Vec<SourceDocument>> {
    let folder = PathBuf::from(folder_path);

    if !folder.exists() {
        anyhow::bail!("文件夹不存在: {}", folder_path);
    }

    let mut paths = Vec::new();
    let mut entries = fs::read_dir(&folder)
        .await
        .with_context(|| format!("无法读取文件夹: {}", folder_path))?;

    while let Some(entry) = entries.next_entry().await? {
        let path = entry.path();
        if is_markdown(&path) {
            paths.push(path);
        }
    }
    paths.sort();

    let mut documents = Vec::with_capacity(paths.len());
    for path in paths {
        let name = path
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();
        tracing::info!("正在加载: {}", name);

        match fs::read_to_string(&path).await {
            Ok(content) => {
                documents.push(
                    SourceDocument::new(name, content)
                        .with_file_path(path.to_string_lossy().to_string()),
                );
            }
            Err(e) => {
                tracing::warn!("加载文件失败 {}: {}", path.display(), e);
            }
        }
    }

    Ok(documents)
}
