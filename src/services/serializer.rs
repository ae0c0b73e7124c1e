//! 试卷导出
//!
//! Markdown 输出使用与提取相同的格式，导出的试卷可以再次被提取。

use crate::error::AppResult;
use crate::models::Question;
use crate::services::extractor::option_letter;

/// 将试题渲染为 Markdown 试卷
///
/// 标题之后先给出总分，再按输入顺序输出每道题。选项按 A 到 Z 编号，最多 26 个。
pub fn to_markdown(questions: &[Question], title: &str) -> String {
    let mut markdown = format!(
        "# {}\n\n总分: {}分\n\n",
        title,
        Question::total_score(questions)
    );

    for (index, q) in questions.iter().enumerate() {
        markdown.push_str(&format!(
            "## 题目 {} ({})\n\n",
            index + 1,
            q.question_type.label()
        ));

        if !q.content.is_empty() {
            markdown.push_str(&format!("{}\n\n", q.content));
        }

        if let Some(options) = q.options.as_ref().filter(|o| !o.is_empty()) {
            for (i, option) in options.iter().enumerate() {
                let Some(letter) = option_letter(i) else { break };
                markdown.push_str(&format!("{}. {}\n", letter, option));
            }
            markdown.push('\n');
        }

        markdown.push_str(&format!("难度: {}\n", q.difficulty.label()));
        markdown.push_str(&format!("分值: {}分\n", q.score));
        markdown.push_str(&format!("科目: {}\n", q.subject));
        if let Some(answer) = &q.answer {
            markdown.push_str(&format!("答案: {}\n", answer));
        }

        markdown.push_str("\n---\n\n");
    }

    markdown
}

/// 导出为 JSON（带缩进）
pub fn to_json(questions: &[Question]) -> AppResult<String> {
    Ok(serde_json::to_string_pretty(questions)?)
}

/// 从 `to_json` 的输出还原试题
pub fn from_json(json: &str) -> AppResult<Vec<Question>> {
    Ok(serde_json::from_str(json)?)
}
