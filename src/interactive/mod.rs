//! Interactive full-screen mode
//!
//! Plays the same `GameSession` through a ratatui interface driven by key presses.

mod app;
mod rendering;

pub use app::{App, Message, MessageStyle, Statistics, run_tui};
