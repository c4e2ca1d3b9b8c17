use regex::Regex;
use std::sync::LazyLock;

static PARAGRAPH_OPEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<p>").expect("paragraph open pattern"));
static LINE_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)</p>|<br\s*/?>").expect("line break pattern"));
static ANY_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]+>").expect("tag pattern"));
static EXCESS_NEWLINES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n{3,}").expect("newline pattern"));

/// Turn a comment body's markup into plain text with normalised line breaks.
pub fn normalize_body(markup: &str) -> String {
    let text = PARAGRAPH_OPEN.replace_all(markup, "");
    let text = LINE_BREAK.replace_all(&text, "\n");
    let text = text.replace("&nbsp;", " ");
    let text = ANY_TAG.replace_all(&text, "");
    let text = EXCESS_NEWLINES.replace_all(&text, "\n\n");

    text.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paragraphs_and_breaks() {
        let markup = "<p>Hello&nbsp;there,</p><p>Line one<br>Line two<BR />Line three</p>";
        assert_eq!(
            normalize_body(markup),
            "Hello there,\nLine one\nLine two\nLine three"
        );
    }

    #[test]
    fn test_strips_remaining_tags() {
        let markup = r#"<div class="x"><strong>Fixed</strong> the <a href="/t/1">printer</a></div>"#;
        assert_eq!(normalize_body(markup), "Fixed the printer");
    }

    #[test]
    fn test_collapses_newline_runs() {
        assert_eq!(normalize_body("a\n\n\n\nb"), "a\n\nb");
        assert_eq!(normalize_body("<p>a</p><p></p><p></p><p>b</p>"), "a\n\nb");
    }

    #[test]
    fn test_idempotent_on_plain_text() {
        let plain = "Called the customer.\n\nWill follow up tomorrow.";
        assert_eq!(normalize_body(plain), plain);
        assert_eq!(normalize_body(&normalize_body(plain)), plain);
    }

    #[test]
    fn test_empty_body() {
        assert_eq!(normalize_body(""), "");
        assert_eq!(normalize_body("  <p></p>  "), "");
    }
}
