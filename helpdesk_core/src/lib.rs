pub mod ai;
pub mod assistant;
pub mod comments;
pub mod helpers;
pub mod page;
pub mod summarizer;
pub mod template;
pub mod ticket;
pub mod ui;

pub use assistant::Assistant;
pub use helpers::error::{AssistError, AssistResult};
