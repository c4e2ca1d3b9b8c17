//! The host page as seen by the assistant: typed lookups, writes, and the
//! helpers that render streamed text or wait for elements to appear.

pub mod dto;
pub mod handler;
pub mod render;
pub mod watcher;

pub use dto::{ButtonBar, Lookup, Region};
pub use handler::{HostPage, RegionSink};

#[cfg(test)]
pub(crate) mod testing;
