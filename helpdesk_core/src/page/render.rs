use futures::StreamExt;
use std::time::Duration;

use crate::ai::handler::TextStream;
use crate::helpers::error::AssistResult;

/// Something that displays text, replacing what it showed before.
pub trait TextSink {
    fn set_text(&mut self, text: &str);

    fn set_html(&mut self, html: &str);
}

/// Show a stream progressively: after every chunk the accumulated text is
/// pushed to `sink`. Returns the full text once the stream ends.
pub async fn render_stream(
    mut stream: TextStream,
    sink: &mut dyn TextSink,
    delay: Duration,
) -> AssistResult<String> {
    let mut text = String::new();

    while let Some(chunk) = stream.next().await {
        let chunk = chunk?;
        if chunk.is_empty() {
            continue;
        }
        text.push_str(&chunk);
        sink.set_text(&text);

        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
    }

    Ok(text)
}


#[cfg(test)]
mod tests {
    use super::testing::RecordingSink;
    use super::*;
    use crate::helpers::error::AssistError;
    use futures::stream;

    #[tokio::test]
    async fn test_render_stream_accumulates() {
        let chunks = vec![Ok("Hel".to_string()), Ok(String::new()), Ok("lo".to_string())];
        let mut sink = RecordingSink::default();

        let text = render_stream(stream::iter(chunks).boxed(), &mut sink, Duration::ZERO)
            .await
            .unwrap();

        assert_eq!(text, "Hello");
        assert_eq!(sink.updates, vec!["Hel", "Hello"]);
    }

    #[tokio::test]
    async fn test_render_stream_stops_on_error() {
        let chunks = vec![
            Ok("partial".to_string()),
            Err(AssistError::Capability("dropped".to_string())),
            Ok("never".to_string()),
        ];
        let mut sink = RecordingSink::default();

        let result = render_stream(stream::iter(chunks).boxed(), &mut sink, Duration::ZERO).await;

        assert!(result.is_err());
        assert_eq!(sink.text, "partial");
    }

    #[tokio::test(start_paused = true)]
    async fn test_render_stream_with_delay() {
        let chunks = vec![Ok("a".to_string()), Ok("b".to_string())];
        let mut sink = RecordingSink::default();

        let text = render_stream(stream::iter(chunks).boxed(), &mut sink, Duration::from_millis(5))
            .await
            .unwrap();
        assert_eq!(text, "ab");
    }
}
