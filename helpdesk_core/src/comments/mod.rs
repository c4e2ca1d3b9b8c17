//! Comment history scraping: legend parsing, body normalisation, extraction
//! and selection of customer-facing comments.

pub mod body;
pub mod dto;
pub mod handler;
pub mod legend;
pub mod selector;

pub use handler::extract_comments;
