use std::time::Duration;

use crate::ai::handler::{Capabilities, LanguageModel};
use crate::ai::prompt::{
    duration_messages, key_points_options, single_line_fallback_options,
    single_line_messages, summary_fallback_options, summary_messages,
};
use crate::helpers::error::{AssistError, AssistResult};
use crate::page::render::{render_stream, TextSink};
use crate::summarizer::helpers::{convert_text_to_list, normalize_duration};

pub const SUMMARY_FAILED: &str = "Failed to generate summary.";
pub const KEY_POINTS_FAILED: &str = "Failed to generate key points.";
const SUMMARY_FALLBACK_INDICATOR: &str = "Generating summary...";

/// Drives the AI capabilities for comment summaries, key points and timesheet entries.
#[derive(Clone)]
pub struct SummaryService {
    capabilities: Capabilities,
    stream_delay: Duration,
}

impl SummaryService {
    pub fn new(capabilities: Capabilities, stream_delay: Duration) -> Self {
        Self {
            capabilities,
            stream_delay,
        }
    }

    pub fn capabilities(&self) -> &Capabilities {
        &self.capabilities
    }

    /// Stream a paragraph summary into `sink`, preferring the language model and
    /// falling back to the summarizer. Failures end up as an inline message.
    pub async fn generate_summary(&self, input: &str, sink: &mut dyn TextSink) {
        if let Some(model) = self.capabilities.ready_language_model().await {
            match self.prompt_streaming_into(model.as_ref(), input, sink).await {
                Ok(text) => {
                    log::info!("Summary generated with the language model ({} chars)", text.len());
                    return;
                }
                Err(e) => log::warn!("Language model available but failed: {}", e),
            }
        }

        sink.set_text(SUMMARY_FALLBACK_INDICATOR);

        if let Err(e) = self.summarize_streaming_into(input, sink).await {
            sink.set_text(SUMMARY_FAILED);
            log::error!("Summarizer error: {}", e);
        }
    }

    async fn prompt_streaming_into(
        &self,
        model: &dyn LanguageModel,
        input: &str,
        sink: &mut dyn TextSink,
    ) -> AssistResult<String> {
        let stream = model.prompt_streaming(&summary_messages(input)).await?;
        render_stream(stream, sink, self.stream_delay).await
    }

    async fn summarize_streaming_into(
        &self,
        input: &str,
        sink: &mut dyn TextSink,
    ) -> AssistResult<String> {
        let summarizer = self
            .capabilities
            .summarizer
            .as_ref()
            .ok_or(AssistError::Unavailable("Summarizer"))?;

        let stream = summarizer
            .summarize_streaming(&summary_fallback_options(), input)
            .await?;
        render_stream(stream, sink, self.stream_delay).await
    }

    /// Key points as an HTML list written into `sink`.
    pub async fn generate_key_points(&self, input: &str, sink: &mut dyn TextSink) {
        match self.key_points(input).await {
            Ok(key_points) => sink.set_html(&convert_text_to_list(&key_points)),
            Err(e) => {
                sink.set_html(KEY_POINTS_FAILED);
                log::error!("Summarizer error: {}", e);
            }
        }
    }

    async fn key_points(&self, input: &str) -> AssistResult<String> {
        let summarizer = self
            .capabilities
            .summarizer
            .as_ref()
            .ok_or(AssistError::Unavailable("Summarizer"))?;
        summarizer.summarize(&key_points_options(), input).await
    }

    /// One sentence describing the work in `comment`, for a timesheet entry.
    pub async fn single_line_summary(&self, comment: &str) -> AssistResult<String> {
        if let Some(model) = self.capabilities.ready_language_model().await {
            match model.prompt(&single_line_messages(comment)).await {
                Ok(summary) if !summary.trim().is_empty() => {
                    return Ok(summary.trim().to_string());
                }
                Ok(_) => log::warn!("Language model returned an empty single line summary"),
                Err(e) => log::warn!("Language model failed on single line summary: {}", e),
            }
        }

        log::info!("Single line summary falls back to summarizer");

        let summarizer = self
            .capabilities
            .summarizer
            .as_ref()
            .ok_or(AssistError::Unavailable("Summarizer"))?;
        let summary = summarizer
            .summarize(&single_line_fallback_options(), comment)
            .await?;

        let summary = summary.trim();
        if summary.is_empty() {
            return Err(AssistError::EmptyOutput);
        }
        Ok(summary.to_string())
    }

    /// Estimated hours in quarter increments, or `None` when no language model
    /// is ready or the call fails.
    pub async fn estimate_duration(&self, comment: &str) -> Option<f64> {
        let model = self.capabilities.ready_language_model().await?;

        match model.prompt(&duration_messages(comment)).await {
            Ok(raw) => {
                log::info!("Estimated time from ai: {}", raw);
                Some(normalize_duration(&raw))
            }
            Err(e) => {
                log::warn!("Failed to estimate duration: {}", e);
                None
            }
        }
    }
}
