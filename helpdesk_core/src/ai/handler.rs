use async_trait::async_trait;
use futures::stream::{self, BoxStream, StreamExt};
use std::sync::Arc;

use super::dto::{Availability, PromptMessage, SummarizerOptions};
use crate::helpers::error::AssistResult;

/// Finite, non-restartable sequence of text chunks.
pub type TextStream = BoxStream<'static, AssistResult<String>>;

/// Prompt/completion language model reachable from the assistant.
#[async_trait]
pub trait LanguageModel: Send + Sync {
    async fn availability(&self) -> Availability;

    async fn prompt(&self, messages: &[PromptMessage]) -> AssistResult<String>;

    /// Models without native streaming deliver the whole completion as one chunk.
    async fn prompt_streaming(&self, messages: &[PromptMessage]) -> AssistResult<TextStream> {
        let text = self.prompt(messages).await?;
        Ok(stream::once(async move { Ok(text) }).boxed())
    }
}

#[async_trait]
pub trait Summarizer: Send + Sync {
    async fn summarize(&self, options: &SummarizerOptions, input: &str) -> AssistResult<String>;

    async fn summarize_streaming(
        &self,
        options: &SummarizerOptions,
        input: &str,
    ) -> AssistResult<TextStream> {
        let text = self.summarize(options, input).await?;
        Ok(stream::once(async move { Ok(text) }).boxed())
    }
}

/// The AI capabilities present in the current page context. Either may be missing.
#[derive(Clone, Default)]
pub struct Capabilities {
    pub language_model: Option<Arc<dyn LanguageModel>>,
    pub summarizer: Option<Arc<dyn Summarizer>>,
}

impl Capabilities {
    pub fn new(
        language_model: Option<Arc<dyn LanguageModel>>,
        summarizer: Option<Arc<dyn Summarizer>>,
    ) -> Self {
        Self {
            language_model,
            summarizer,
        }
    }

    /// The language model, but only when it reports itself ready to use.
    pub async fn ready_language_model(&self) -> Option<Arc<dyn LanguageModel>> {
        let model = self.language_model.clone()?;
        match model.availability().await {
            Availability::Available => Some(model),
            other => {
                log::info!("Language model not ready: {:?}", other);
                None
            }
        }
    }
}
