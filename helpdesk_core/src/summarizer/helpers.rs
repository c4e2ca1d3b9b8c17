use regex::Regex;
use std::sync::LazyLock;

use crate::comments::dto::CommentRecord;
use crate::helpers::utils::{escape_html, format_date_time};

static LEADING_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[+-]?(\d+\.?\d*|\.\d+)").expect("number pattern"));

const UNKNOWN_DATE: &str = "Unknown date";

/// Render the comment history as numbered blocks for the summarization model.
pub fn prepare_comments_for_summarizer(comments: &[CommentRecord]) -> String {
    comments
        .iter()
        .enumerate()
        .map(|(index, comment)| {
            let date = comment
                .date
                .as_ref()
                .map(format_date_time)
                .unwrap_or_else(|| UNKNOWN_DATE.to_string());

            format!(
                "Comment {} ({}) by {} on {}:\n{}\n",
                index + 1,
                comment.visibility,
                comment.author,
                date,
                comment.content
            )
        })
        .collect::<Vec<_>>()
        .join("\n---\n")
}

/// Turn "- a - b" style key points into an HTML list.
pub fn convert_text_to_list(text: &str) -> String {
    let items = text
        .split("- ")
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(|item| format!("<li>{}</li>", escape_html(item)))
        .collect::<String>();

    format!("<br>Key Points:<br><ul>{}</ul>", items)
}

/// Hours from the model's answer, rounded to the nearest quarter. Falls back to 1.
pub fn normalize_duration(raw: &str) -> f64 {
    let hours = LEADING_NUMBER
        .find(raw.trim())
        .and_then(|m| m.as_str().parse::<f64>().ok())
        .filter(|hours| hours.is_finite() && *hours > 0.0)
        .unwrap_or(1.0);

    (hours * 4.0).round() / 4.0
}
