//! Input parsing and validation

use super::types::RecurrenceError;
use std::io::BufRead;

/// Input parser for evaluation requests
pub struct InputParser;

impl InputParser {
    /// Parse a single n from text, ignoring surrounding whitespace.
    pub fn parse_n(text: &str) -> Result<i64, RecurrenceError> {
        let trimmed = text.trim();
        trimmed.parse().map_err(|e| {
            RecurrenceError::MalformedInput(format!(
                "Failed to parse {:?} as an integer: {}",
                trimmed, e
            ))
        })
    }

    /// Parse one n per line, skipping blank lines.
    ///
    /// Lines are read lazily, so a caller can act on each value before the
    /// next line is consumed.
    pub fn parse_lines(
        reader: impl BufRead,
    ) -> impl Iterator<Item = Result<i64, RecurrenceError>> {
        reader.lines().filter_map(|line| match line {
            Ok(line) if line.trim().is_empty() => None,
            Ok(line) => Some(Self::parse_n(&line)),
            Err(e) => Some(Err(e.into())),
        })
    }
}
