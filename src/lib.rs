//! Hangman
//!
//! A terminal word-guessing game: a secret word is picked from a fixed list and
//! the player reveals it one letter at a time before running out of guesses.
//!
//! # Quick Start
//!
//! ```rust
//! use hangman::core::{GameSession, GameStatus, GuessOutcome};
//!
//! let mut game = GameSession::with_secret("code", 7).unwrap();
//!
//! assert!(matches!(game.guess("c"), GuessOutcome::Hit { .. }));
//! assert_eq!(game.board().mask(), "c _ _ _");
//! assert_eq!(game.status(), GameStatus::InProgress);
//! ```

// Core domain types
pub mod core;

// Word list
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
