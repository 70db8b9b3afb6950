//! Terminal output formatting
//!
//! Display utilities for the text game and message text shared with the TUI.

pub mod display;
pub mod formatters;

pub use display::{write_board, write_outcome, write_result};
