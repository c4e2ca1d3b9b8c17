use thiserror::Error;

#[derive(Debug, Error)]
pub enum AssistError {
    #[error("{0} capability is unavailable")]
    Unavailable(&'static str),
    #[error("Capability call failed: {0}")]
    Capability(String),
    #[error("Could not read templates: {0}")]
    TemplateIo(#[from] std::io::Error),
    #[error("Could not parse templates: {0}")]
    TemplateParse(#[from] serde_json::Error),
    #[error("Invalid pattern: {0}")]
    Pattern(#[from] regex::Error),
    #[error("Generated text is empty")]
    EmptyOutput,
}

pub type AssistResult<T> = Result<T, AssistError>;
