//! Simple interactive CLI mode
//!
//! Line-based game loop: show the board, read a guess, report the outcome.

use crate::core::{GameSession, GameStatus};
use crate::output::{write_board, write_outcome, write_result};
use std::io::{self, BufRead, Write};
use tracing::warn;

/// Run one game over line-based input until it is won, lost or input ends
///
/// Each line, minus its line ending, is passed to the session as a guess. Once the game
/// is over the final board is shown along with the win or loss message.
///
/// Returns the status at exit, which is `InProgress` only if input ran out.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_simple<R: BufRead, W: Write>(
    session: &mut GameSession,
    input: &mut R,
    out: &mut W,
) -> io::Result<GameStatus> {
    writeln!(out, "=== Hangman ===")?;
    writeln!(
        out,
        "Guess the word one letter at a time. {} wrong guesses allowed.",
        session.max_guesses()
    )?;

    while !session.is_game_over() {
        write_board(out, &session.board(), session.max_guesses())?;

        let Some(line) = read_guess(input, out)? else {
            warn!(
                remaining = session.remaining_guesses(),
                "input closed before the game finished"
            );
            writeln!(out, "\nGoodbye!")?;
            return Ok(session.status());
        };

        let outcome = session.guess(&line);
        write_outcome(out, outcome)?;
    }

    let status = session.status();
    write_board(out, &session.board(), session.max_guesses())?;
    write_result(out, status, session.secret_word())?;

    Ok(status)
}

/// Prompt for a guess; `None` at end of input
fn read_guess<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> io::Result<Option<String>> {
    write!(out, "Guess a letter: ")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }

    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Read};

    fn play(word: &str, max_guesses: usize, input: &str) -> (GameStatus, String, Cursor<String>) {
        colored::control::set_override(false);

        let mut session = GameSession::with_secret(word, max_guesses).unwrap();
        let mut input = Cursor::new(input.to_string());
        let mut out = Vec::new();

        let status = run_simple(&mut session, &mut input, &mut out).unwrap();
        (status, String::from_utf8(out).unwrap(), input)
    }

    #[test]
    fn all_hits_win() {
        let (status, out, _) = play("code", 7, "c\no\nd\ne\n");

        assert_eq!(status, GameStatus::Won);
        assert_eq!(out.matches("Good guess").count(), 4);
        assert!(out.contains("Good guess: 'e' is in the word!"));
        assert!(out.contains("Current word: c o d e"));
        assert!(out.contains("Guesses left: 7"));
        assert!(out.contains("Congratulations! You've won!"));
        assert!(!out.contains("The word was"));
    }

    #[test]
    fn misses_lose_and_disclose_word() {
        let (status, out, mut rest) = play("byte", 2, "x\nq\nz\n");

        assert_eq!(status, GameStatus::Lost);
        assert!(out.contains("Sorry, 'x' is not in the word."));
        assert!(out.contains("Sorry, 'q' is not in the word."));
        assert!(!out.contains("'z'"));
        assert!(out.contains("Guesses left: 0"));
        assert!(out.contains("Sorry, you've run out of guesses. The word was 'byte'."));

        // Third guess is never read
        let mut unread = String::new();
        rest.read_to_string(&mut unread).unwrap();
        assert_eq!(unread, "z\n");
    }

    #[test]
    fn invalid_and_repeated_input_reprompts() {
        let (status, out, _) = play("byte", 7, "5\nab\n\nb\nB\ny\nt\ne\n");

        assert_eq!(status, GameStatus::Won);
        assert_eq!(
            out.matches("Invalid input. Please guess a single letter.")
                .count(),
            3
        );
        assert!(out.contains("You've already guessed 'b'. Try again."));
        assert!(out.contains("Guesses left: 7"));
        assert!(!out.contains("Guesses left: 6"));
    }

    #[test]
    fn uppercase_and_crlf_input_accepted() {
        let (status, out, _) = play("code", 7, "C\r\nO\nd\ne\n");

        assert_eq!(status, GameStatus::Won);
        assert!(out.contains("Good guess: 'c' is in the word!"));
        assert!(out.contains("Guessed letters: c, d, e, o"));
    }

    #[test]
    fn padded_input_is_invalid() {
        let (status, out, _) = play("code", 7, " c\nc \n");

        assert_eq!(status, GameStatus::InProgress);
        let invalid = "Invalid input. Please guess a single letter.";
        assert_eq!(out.matches(invalid).count(), 2);
        assert!(!out.contains("Good guess"));
        assert!(out.contains("Guesses left: 7"));
        assert!(!out.contains("Guesses left: 6"));
    }

    #[test]
    fn end_of_input_stops_without_disclosure() {
        let (status, out, _) = play("syntax", 7, "s\nq\n");

        assert_eq!(status, GameStatus::InProgress);
        assert!(out.contains("Goodbye!"));
        assert!(!out.contains("syntax"));
        assert!(out.contains("Guessed letters: q, s"));
    }

    #[test]
    fn board_shown_before_every_prompt() {
        let (_, out, _) = play("ab", 7, "a\nb\n");

        // Two prompts plus the final board
        assert_eq!(out.matches("Guess a letter: ").count(), 2);
        assert_eq!(out.matches("Current word:").count(), 3);
        assert!(out.contains("Current word: _ _"));
        assert!(out.contains("Current word: a _"));
        assert!(out.contains("Current word: a b"));
    }
}
