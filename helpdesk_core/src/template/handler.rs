use chrono::{Days, Local, NaiveDate};
use regex::{Captures, Regex};
use std::collections::BTreeMap;
use std::sync::LazyLock;

use crate::helpers::error::AssistResult;
use crate::helpers::utils::format_date;

pub const DEFAULT_MENTION_DOMAIN: &str = "eviosys";
const PERSON_NAME_KEY: &str = "personName";

static TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\{([^}]+)\}\}").expect("token pattern"));
static FUNCTION_CALL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\w+)\((.*?)\)$").expect("function call pattern"));
static DEFAULT_ENGINE: LazyLock<TemplateEngine> = LazyLock::new(TemplateEngine::default);

/// Fills `{{ key }}` and `{{ todayPlusDays(n) }}` placeholders.
#[derive(Debug, Clone)]
pub struct TemplateEngine {
    mention: Regex,
}

impl TemplateEngine {
    /// `mention_domain` is the corporate mail domain whose addresses become
    /// `@[address]` mentions when they appear in `personName`.
    pub fn new(mention_domain: &str) -> AssistResult<Self> {
        let mention = Regex::new(&format!(
            r"([a-zA-Z0-9._%+-]+@{}\.[a-zA-Z]{{2,}})",
            regex::escape(mention_domain)
        ))?;
        Ok(Self { mention })
    }

    pub fn fill(&self, template: &str, data: &BTreeMap<String, String>) -> String {
        self.fill_on(template, data, Local::now().date_naive())
    }

    /// Same as [`fill`](Self::fill) with an explicit current date.
    pub fn fill_on(
        &self,
        template: &str,
        data: &BTreeMap<String, String>,
        today: NaiveDate,
    ) -> String {
        TOKEN
            .replace_all(template, |caps: &Captures<'_>| {
                self.expand(caps[1].trim(), data, today)
                    .unwrap_or_else(|| caps[0].to_string())
            })
            .into_owned()
    }

    fn expand(
        &self,
        key: &str,
        data: &BTreeMap<String, String>,
        today: NaiveDate,
    ) -> Option<String> {
        if let Some(call) = FUNCTION_CALL.captures(key) {
            return call_function(&call[1], &call[2], today);
        }

        let value = data.get(key)?;

        if key == PERSON_NAME_KEY {
            if let Some(address) = self.mention.captures(value) {
                return Some(format!("@[{}]", &address[1]));
            }
        }

        Some(value.clone())
    }
}

impl Default for TemplateEngine {
    fn default() -> Self {
        Self::new(DEFAULT_MENTION_DOMAIN).expect("default mention domain")
    }
}

fn call_function(name: &str, arg: &str, today: NaiveDate) -> Option<String> {
    match name {
        "todayPlusDays" => {
            let Ok(days) = arg.trim().parse::<i64>() else {
                log::warn!("todayPlusDays expects a whole number of days, got '{}'", arg);
                return None;
            };
            let date = if days >= 0 {
                today.checked_add_days(Days::new(days.unsigned_abs()))
            } else {
                today.checked_sub_days(Days::new(days.unsigned_abs()))
            }?;
            Some(format_date(date))
        }
        other => {
            log::warn!("Unknown template function '{}', leaving placeholder as is", other);
            None
        }
    }
}

/// Fill `template` with the default engine.
pub fn fill_template(template: &str, data: &BTreeMap<String, String>) -> String {
    DEFAULT_ENGINE.fill(template, data)
}
