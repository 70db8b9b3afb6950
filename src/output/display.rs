//! Display functions for the text game

use super::formatters::{guesses_bar, outcome_message, result_message};
use crate::core::{Board, GameStatus, GuessOutcome};
use colored::Colorize;
use std::io::{self, Write};

/// Write the board in the classic three-line layout
///
/// # Errors
///
/// Returns any I/O error from the writer.
pub fn write_board<W: Write>(out: &mut W, board: &Board, max_guesses: usize) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "Current word: {}", board.mask().bright_white().bold())?;

    let remaining = board.remaining_guesses();
    let bar = guesses_bar(remaining, max_guesses);
    let bar = if remaining * 3 <= max_guesses {
        bar.red()
    } else {
        bar.green()
    };
    writeln!(out, "Guesses left: {remaining} {bar}")?;

    writeln!(out, "Guessed letters: {}", board.guessed_list())
}

/// Write feedback for a single guess
///
/// # Errors
///
/// Returns any I/O error from the writer.
pub fn write_outcome<W: Write>(out: &mut W, outcome: GuessOutcome) -> io::Result<()> {
    let message = outcome_message(outcome);
    let message = match outcome {
        GuessOutcome::Hit { .. } => message.green(),
        GuessOutcome::Miss { .. } => message.red(),
        GuessOutcome::AlreadyGuessed(_) | GuessOutcome::GameOver => message.yellow(),
        GuessOutcome::InvalidInput => message.bright_red(),
    };
    writeln!(out, "{message}")
}

/// Write the closing banner of a finished game
///
/// Writes nothing while the game is in progress.
///
/// # Errors
///
/// Returns any I/O error from the writer.
pub fn write_result<W: Write>(out: &mut W, status: GameStatus, secret: &str) -> io::Result<()> {
    let Some(message) = result_message(status, secret) else {
        return Ok(());
    };

    let message = if status == GameStatus::Won {
        message.bright_green().bold()
    } else {
        message.bright_red().bold()
    };
    writeln!(out, "{message}")
}
