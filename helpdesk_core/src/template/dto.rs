use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::helpers::error::AssistResult;

/// The bundled reply templates, loaded once at startup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateSet {
    pub template1: String,
    pub template2: String,
    pub template3: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateKind {
    ThirdStrike,
    SecondStrike,
    Closure,
}

impl TemplateSet {
    pub fn from_json(json: &str) -> AssistResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: impl AsRef<Path>) -> AssistResult<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn get(&self, kind: TemplateKind) -> &str {
        match kind {
            TemplateKind::ThirdStrike => &self.template1,
            TemplateKind::SecondStrike => &self.template2,
            TemplateKind::Closure => &self.template3,
        }
    }
}
