//! Word list command
//!
//! Prints the embedded secret word candidates.

use colored::Colorize;
use std::io::{self, Write};

const WORDS_PER_LINE: usize = 6;

/// Write the word list in aligned columns
///
/// # Errors
///
/// Returns any I/O error from the writer.
pub fn write_words<W: Write>(out: &mut W, words: &[&str]) -> io::Result<()> {
    writeln!(
        out,
        "{} ({} words)",
        "Secret word candidates".bright_cyan().bold(),
        words.len()
    )?;

    let width = words.iter().map(|w| w.len()).max().unwrap_or(0);
    for row in words.chunks(WORDS_PER_LINE) {
        let line = row
            .iter()
            .map(|w| format!("{w:<width$}"))
            .collect::<Vec<_>>()
            .join("  ");
        writeln!(out, "  {}", line.trim_end())?;
    }

    Ok(())
}
