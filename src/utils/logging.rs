//! 日志工具模块
//!
//! 提供日志初始化、格式化和输出的辅助函数

use anyhow::Result;
use std::fs::{self, OpenOptions};
use std::io::Write;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// 初始化 tracing 日志
///
/// 优先使用 `RUST_LOG`；未设置时 `verbose` 为真输出 debug，否则输出 info。
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

/// 初始化日志文件
///
/// # 参数
/// - `log_file_path`: 日志文件路径
pub fn init_log_file(log_file_path: &str) -> Result<()> {
    let log_header = format!(
        "{}\n组卷日志 - {}\n{}\n\n",
        "=".repeat(60),
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
        "=".repeat(60)
    );
    fs::write(log_file_path, log_header)?;
    Ok(())
}

/// 向日志文件追加一行
pub fn append_log_line(log_file_path: &str, line: &str) -> Result<()> {
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file_path)?;
    writeln!(file, "{}", line)?;
    Ok(())
}

/// 记录程序启动信息
pub fn log_startup(input_folder: &str, output_folder: &str) {
    info!("{}", "=".repeat(60));
    info!("🚀 程序启动 - Markdown 试题提取与组卷");
    info!("📂 源文档目录: {}", input_folder);
    info!("📤 输出目录: {}", output_folder);
    info!("{}", "=".repeat(60));
}

/// 记录文档加载信息
///
/// # 参数
/// - `documents`: 文档数量
/// - `questions`: 提取出的题目总数
pub fn log_documents_loaded(documents: usize, questions: usize) {
    info!("✓ 找到 {} 个 Markdown 文档", documents);
    info!("📋 共提取 {} 道试题\n", questions);
}

/// 打印最终统计信息
///
/// # 参数
/// - `selected`: 选中题目数
/// - `total_score`: 实际总分
/// - `target_score`: 目标总分（随机模式下为 `None`）
/// - `log_file_path`: 日志文件路径
pub fn print_final_stats(
    selected: usize,
    total_score: u64,
    target_score: Option<u32>,
    log_file_path: &str,
) {
    info!("\n{}", "=".repeat(60));
    info!("📊 组卷完成统计");
    info!(
        "完成时间: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("{}", "=".repeat(60));
    info!("✅ 选中题目: {}", selected);
    match target_score {
        Some(target) => info!("🎯 总分: {}/{}", total_score, target),
        None => info!("🎯 总分: {}", total_score),
    }
    info!("{}", "=".repeat(60));
    info!("\n日志已保存至: {}", log_file_path);
}

/// 截断长文本用于日志显示
///
/// # 参数
/// - `text`: 原始文本
/// - `max_len`: 最大长度（按字符计）
///
/// # 返回
/// 返回截断后的文本
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        text.chars().take(max_len).collect::<String>() + "..."
    } else {
        text.to_string()
    }
}
