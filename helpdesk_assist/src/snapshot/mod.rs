//! The browser bridge hands the page over as JSON; the assistant works on it
//! through [`HostPage`](helpdesk_core::page::HostPage) and the result is written back.

pub mod dto;
pub mod handler;

pub use dto::PageSnapshot;
