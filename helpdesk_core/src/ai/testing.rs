use async_trait::async_trait;
use futures::stream::{self, StreamExt};
use std::sync::Mutex;

use super::dto::{Availability, PromptMessage, SummarizerOptions};
use super::handler::{LanguageModel, Summarizer, TextStream};
use crate::helpers::error::{AssistError, AssistResult};

pub struct FakeModel {
    availability: Availability,
    chunks: Option<Vec<String>>,
    pub prompts: Mutex<Vec<Vec<PromptMessage>>>,
}

impl FakeModel {
    pub fn answering(text: &str) -> Self {
        Self::streaming(&[text])
    }

    pub fn streaming(chunks: &[&str]) -> Self {
        Self {
            availability: Availability::Available,
            chunks: Some(chunks.iter().map(|c| c.to_string()).collect()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn failing() -> Self {
        Self {
            availability: Availability::Available,
            chunks: None,
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn unavailable() -> Self {
        Self {
            availability: Availability::Unavailable,
            ..Self::failing()
        }
    }
}

#[async_trait]
impl LanguageModel for FakeModel {
    async fn availability(&self) -> Availability {
        self.availability
    }

    async fn prompt(&self, messages: &[PromptMessage]) -> AssistResult<String> {
        self.prompts.lock().unwrap().push(messages.to_vec());
        self.chunks
            .as_ref()
            .map(|chunks| chunks.concat())
            .ok_or_else(|| AssistError::Capability("model offline".to_string()))
    }

    async fn prompt_streaming(&self, messages: &[PromptMessage]) -> AssistResult<TextStream> {
        self.prompts.lock().unwrap().push(messages.to_vec());
        let chunks = self
            .chunks
            .clone()
            .ok_or_else(|| AssistError::Capability("model offline".to_string()))?;
        Ok(stream::iter(chunks.into_iter().map(Ok)).boxed())
    }
}

pub struct FakeSummarizer {
    answer: Option<String>,
    pub calls: Mutex<Vec<(SummarizerOptions, String)>>,
}

impl FakeSummarizer {
    pub fn answering(text: &str) -> Self {
        Self {
            answer: Some(text.to_string()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn failing() -> Self {
        Self {
            answer: None,
            calls: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl Summarizer for FakeSummarizer {
    async fn summarize(&self, options: &SummarizerOptions, input: &str) -> AssistResult<String> {
        self.calls
            .lock()
            .unwrap()
            .push((options.clone(), input.to_string()));
        self.answer
            .clone()
            .ok_or_else(|| AssistError::Capability("summarizer offline".to_string()))
    }
}
