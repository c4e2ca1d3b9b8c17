pub mod dto;
pub mod handler;
pub mod prompt;

pub use handler::{Capabilities, LanguageModel, Summarizer, TextStream};

#[cfg(test)]
pub(crate) mod testing;
