pub mod buttons;
pub mod panel;

pub use buttons::{ButtonAction, ButtonSpec};
