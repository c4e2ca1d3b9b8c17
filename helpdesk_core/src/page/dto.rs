use serde::{Deserialize, Serialize};

/// Result of searching the page for something that may not be there.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup<T> {
    Found(T),
    Missing { target: String },
}

impl<T> Lookup<T> {
    pub fn missing(target: impl Into<String>) -> Self {
        Lookup::Missing {
            target: target.into(),
        }
    }

    pub fn from_option(value: Option<T>, target: &str) -> Self {
        match value {
            Some(value) => Lookup::Found(value),
            None => Lookup::missing(target),
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, Lookup::Found(_))
    }

    pub fn found(self) -> Option<T> {
        match self {
            Lookup::Found(value) => Some(value),
            Lookup::Missing { .. } => None,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Lookup<U> {
        match self {
            Lookup::Found(value) => Lookup::Found(f(value)),
            Lookup::Missing { target } => Lookup::Missing { target },
        }
    }

    /// The found value, or `None` after logging which element was missing.
    pub fn or_log(self, context: &str) -> Option<T> {
        match self {
            Lookup::Found(value) => Some(value),
            Lookup::Missing { target } => {
                log::info!("Could not find {}. {}", target, context);
                None
            }
        }
    }
}

/// Where a button goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ButtonBar {
    /// The ticket dialog's button set; new buttons go first.
    Dialog,
    /// The comment editor container; new buttons are appended.
    CommentEditor,
}

/// Writable areas of the summary panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Region {
    SummaryBox,
    KeyPoints,
}

impl Region {
    pub fn element_id(&self) -> &'static str {
        match self {
            Region::SummaryBox => "ai-summary-box",
            Region::KeyPoints => "ai-key-points",
        }
    }
}
