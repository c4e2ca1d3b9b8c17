use anyhow::Result;
use async_trait::async_trait;
use open_ai_rust_responses_by_sshift::{Client, Model, ReasoningEffort, Request, Verbosity};

use helpdesk_core::ai::dto::{
    Availability, PromptMessage, Role, SummarizerOptions, SummaryLength, SummaryType,
};
use helpdesk_core::ai::{LanguageModel, Summarizer};
use helpdesk_core::{AssistError, AssistResult};

const MAX_OUTPUT_TOKENS: u32 = 800;

/// Language model and summarizer backed by the OpenAI Responses API.
#[derive(Clone)]
pub struct OpenAiCapability {
    client: Client,
}

impl OpenAiCapability {
    pub fn new(api_key: &str) -> Result<Self> {
        let client = Client::new(api_key)?;
        Ok(Self { client })
    }

    async fn complete(&self, input: String) -> AssistResult<String> {
        let request = Request::builder()
            .model(Model::GPT5Nano)
            .input(input)
            .max_output_tokens(MAX_OUTPUT_TOKENS)
            .verbosity(Verbosity::Low)
            .reasoning_effort(ReasoningEffort::Minimal)
            .build();

        let response = self
            .client
            .responses
            .create(request)
            .await
            .map_err(|e| AssistError::Capability(e.to_string()))?;

        let text = response.output_text().trim().to_string();
        if text.is_empty() {
            return Err(AssistError::EmptyOutput);
        }
        Ok(text)
    }
}

#[async_trait]
impl LanguageModel for OpenAiCapability {
    async fn availability(&self) -> Availability {
        Availability::Available
    }

    async fn prompt(&self, messages: &[PromptMessage]) -> AssistResult<String> {
        self.complete(render_messages(messages)).await
    }
}

#[async_trait]
impl Summarizer for OpenAiCapability {
    async fn summarize(&self, options: &SummarizerOptions, input: &str) -> AssistResult<String> {
        self.complete(summarizer_prompt(options, input)).await
    }
}

/// The Responses API takes a single input here, so the conversation is flattened.
pub fn render_messages(messages: &[PromptMessage]) -> String {
    messages
        .iter()
        .map(|message| match message.role {
            Role::System => message.content.clone(),
            Role::User => format!("User: {}", message.content),
            Role::Assistant => format!("Assistant: {}", message.content),
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

pub fn summarizer_prompt(options: &SummarizerOptions, input: &str) -> String {
    let shape = match options.summary_type {
        SummaryType::Tldr => "a short overview (TL;DR)",
        SummaryType::KeyPoints => "a bulleted list of key points, each line starting with \"- \"",
        SummaryType::Teaser => "an intriguing teaser",
        SummaryType::Headline => "a single headline",
    };
    let length = match options.length {
        SummaryLength::Short => "short",
        SummaryLength::Medium => "medium length",
        SummaryLength::Long => "long",
    };

    format!(
        "You are a summarizer. Write {} that is {}, in {}. Output only the summary.\nContext: {}\n\nText:\n{}",
        shape, length, options.output_language, options.shared_context, input
    )
}
