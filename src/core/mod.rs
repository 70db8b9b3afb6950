//! Core domain types for hangman
//!
//! This module contains the game state machine and its value types.
//! Nothing here touches the terminal; drivers render what these types report.

mod board;
mod secret;
mod session;

pub use board::{Board, PLACEHOLDER};
pub use secret::SecretWord;
pub use session::{ConfigError, DEFAULT_MAX_GUESSES, GameSession, GameStatus, GuessOutcome};
