use super::dto::{PromptMessage, SummarizerOptions, SummaryLength, SummaryType};

const SUMMARY_SYSTEM_PROMPT: &str = "You are an assistant that summarizes user comments for display in a web interface. Avoid unnecessary text. Focus on the main points and latest updates. Keep it concise. You are a helpful assistant.";

const SINGLE_LINE_SYSTEM_PROMPT: &str = r#"You are an assistant that summarizes user comments for display in a web interface.
Output exactly one concise sentence in text. You're inferring what was done based on the comment.
Do not add extra text, explanations, or numbering.
Focus on the main point or action implied by the comments.
Keep it clear, professional, and self-contained."#;

const DURATION_SYSTEM_PROMPT: &str = r#"You are an assistant that estimates the total effort required for a task based on user comments.
Output only a numeric value representing hours, using increments of 0.25 (e.g., 0.25, 0.5, 0.75, 1, 1.25).
Do not include any text, units, or explanations, only the number.
If unsure, round up to the nearest 0.25.
Focus on all the comments provided to determine the total time."#;

pub fn summary_messages(input: &str) -> Vec<PromptMessage> {
    vec![
        PromptMessage::system(SUMMARY_SYSTEM_PROMPT),
        PromptMessage::user(format!(
            "Summarize the following user comments into paragraphs, focusing on main points and latest updates:\n\n{}",
            input
        )),
    ]
}

pub fn single_line_messages(comment: &str) -> Vec<PromptMessage> {
    vec![
        PromptMessage::system(SINGLE_LINE_SYSTEM_PROMPT),
        PromptMessage::user(format!(
            "Summarize the work carried out based on the comment.\nIt will justify the time spent on this piece of work in the timesheet.\nComment:\n{}",
            comment
        )),
    ]
}

pub fn duration_messages(comment: &str) -> Vec<PromptMessage> {
    vec![
        PromptMessage::system(DURATION_SYSTEM_PROMPT),
        PromptMessage::user(format!(
            "Estimate the total hours it would take to complete the following task based on the comments: \n\n{}",
            comment
        )),
    ]
}

pub fn summary_fallback_options() -> SummarizerOptions {
    SummarizerOptions::new(
        "A general summary of what the comments have discussed so far, emphasizing the latest status.",
        SummaryType::Tldr,
        SummaryLength::Short,
    )
}

pub fn key_points_options() -> SummarizerOptions {
    SummarizerOptions::new(
        "A list of key-points of how the comments have evolved, from the latest to earliest.",
        SummaryType::KeyPoints,
        SummaryLength::Medium,
    )
}

pub fn single_line_fallback_options() -> SummarizerOptions {
    SummarizerOptions::new(
        "Summarize comments into a single sentence.",
        SummaryType::Tldr,
        SummaryLength::Short,
    )
}
