use anyhow::{Context, Result};
use std::path::PathBuf;
use std::time::Duration;

use helpdesk_core::template::handler::DEFAULT_MENTION_DOMAIN;

pub const DEFAULT_TEMPLATES_PATH: &str = "templates.json";
const DEFAULT_STREAM_DELAY_MS: u64 = 5;

/// Runtime settings, read from the environment (after `.env` is loaded).
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Without a key the language model is reported unavailable.
    pub openai_api_key: Option<String>,
    pub templates_path: PathBuf,
    pub mention_domain: String,
    pub stream_delay: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let non_empty = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let stream_delay_ms = match non_empty("HELPDESK_STREAM_DELAY_MS") {
            Some(raw) => raw.trim().parse::<u64>().with_context(|| {
                format!("HELPDESK_STREAM_DELAY_MS must be milliseconds, got '{}'", raw)
            })?,
            None => DEFAULT_STREAM_DELAY_MS,
        };

        Ok(Self {
            openai_api_key: non_empty("OPENAI_API_KEY"),
            templates_path: non_empty("HELPDESK_TEMPLATES")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_TEMPLATES_PATH)),
            mention_domain: non_empty("HELPDESK_MENTION_DOMAIN")
                .unwrap_or_else(|| DEFAULT_MENTION_DOMAIN.to_string()),
            stream_delay: Duration::from_millis(stream_delay_ms),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(pairs: &[(&str, &str)]) -> Result<Config> {
        let env: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| env.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config(&[]).unwrap();
        assert_eq!(config.openai_api_key, None);
        assert_eq!(config.templates_path, PathBuf::from("templates.json"));
        assert_eq!(config.mention_domain, "eviosys");
        assert_eq!(config.stream_delay, Duration::from_millis(5));
    }

    #[test]
    fn test_overrides() {
        let config = config(&[
            ("OPENAI_API_KEY", "sk-test"),
            ("HELPDESK_TEMPLATES", "/etc/helpdesk/templates.json"),
            ("HELPDESK_MENTION_DOMAIN", "acme"),
            ("HELPDESK_STREAM_DELAY_MS", "0"),
        ])
        .unwrap();

        assert_eq!(config.openai_api_key.as_deref(), Some("sk-test"));
        assert_eq!(config.templates_path, PathBuf::from("/etc/helpdesk/templates.json"));
        assert_eq!(config.mention_domain, "acme");
        assert_eq!(config.stream_delay, Duration::ZERO);
    }

    #[test]
    fn test_blank_key_is_absent() {
        assert_eq!(config(&[("OPENAI_API_KEY", "  ")]).unwrap().openai_api_key, None);
    }

    #[test]
    fn test_bad_delay() {
        assert!(config(&[("HELPDESK_STREAM_DELAY_MS", "fast")]).is_err());
    }
}
