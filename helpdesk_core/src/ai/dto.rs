use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptMessage {
    pub role: Role,
    pub content: String,
}

impl PromptMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Availability {
    Available,
    Downloadable,
    Downloading,
    Unavailable,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SummaryType {
    Tldr,
    KeyPoints,
    Teaser,
    Headline,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SummaryLength {
    Short,
    Medium,
    Long,
}

/// Configuration handed to the summarizer capability.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummarizerOptions {
    pub shared_context: String,
    #[serde(rename = "type")]
    pub summary_type: SummaryType,
    pub length: SummaryLength,
    pub expected_input_languages: Vec<String>,
    pub output_language: String,
}

impl SummarizerOptions {
    pub const LANGUAGE: &'static str = "en-GB";

    pub fn new(shared_context: &str, summary_type: SummaryType, length: SummaryLength) -> Self {
        Self {
            shared_context: shared_context.to_string(),
            summary_type,
            length,
            expected_input_languages: vec![Self::LANGUAGE.to_string()],
            output_language: Self::LANGUAGE.to_string(),
        }
    }
}
