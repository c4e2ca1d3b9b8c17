pub mod handler;
pub mod helpers;

pub use handler::SummaryService;
