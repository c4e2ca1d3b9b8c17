pub mod dto;
pub mod handler;

pub use dto::{TemplateKind, TemplateSet};
pub use handler::{fill_template, TemplateEngine};
