//! The fixed-width record line

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use enstools_utils::f;

/// Fixed width of every ENSDF record line
pub const RECORD_WIDTH: usize = 80;

/// An immutable 80-character line of ENSDF source text
///
/// The line is the only atomic unit of the format. All structure is inferred
/// from characters at fixed positions, so every line is normalised to exactly
/// [RECORD_WIDTH] characters on construction and column access is 1-based to
/// match the ENSDF manual.
///
/// A line consisting entirely of spaces is the blank sentinel, used both as
/// the terminal record of every dataset and as the separator between
/// datasets in the raw file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Line {
    number: usize,
    text: String,
}

impl Line {
    /// Normalise one raw source line to the fixed record width
    ///
    /// Short lines are space-padded out to [RECORD_WIDTH] and a trailing
    /// carriage return is dropped. Content that cannot be aligned to
    /// single-character columns (non-ASCII text, or more than
    /// [RECORD_WIDTH] characters) fails the parse of the enclosing file.
    pub(crate) fn normalise(number: usize, raw: &str) -> Result<Self> {
        let raw = raw.strip_suffix('\r').unwrap_or(raw);
        if !raw.is_ascii() {
            return Err(Error::Encoding { number });
        }
        if raw.len() > RECORD_WIDTH {
            return Err(Error::Overflow {
                number,
                length: raw.len(),
            });
        }
        Ok(Self {
            number,
            text: f!("{raw: <width$}", width = RECORD_WIDTH),
        })
    }

    /// 1-based position of the line in the source
    pub fn number(&self) -> usize {
        self.number
    }

    /// Full 80-character text of the line
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Check for the blank sentinel separating and terminating datasets
    pub fn is_blank(&self) -> bool {
        self.text.bytes().all(|b| b == b' ')
    }

    /// Character at a 1-based column position
    pub fn column(&self, position: usize) -> char {
        debug_assert!((1..=RECORD_WIDTH).contains(&position));
        self.text.as_bytes()[position - 1] as char
    }

    /// Text between two 1-based column positions, inclusive of both
    pub fn columns(&self, start: usize, end: usize) -> &str {
        debug_assert!(start >= 1 && start <= end && end <= RECORD_WIDTH);
        &self.text[start - 1..end]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_lines_are_padded() {
        let line = Line::normalise(1, " 58NI  L 0.0").unwrap();
        assert_eq!(line.text().len(), RECORD_WIDTH);
        assert_eq!(line.columns(1, 5), " 58NI");
        assert_eq!(line.column(8), 'L');
        assert_eq!(line.column(80), ' ');
    }

    #[test]
    fn carriage_returns_are_dropped() {
        let line = Line::normalise(1, " 58NI  L\r").unwrap();
        assert_eq!(line.column(8), 'L');
        assert!(line.text().is_ascii());
    }

    #[test]
    fn blank_sentinel() {
        assert!(Line::normalise(1, "").unwrap().is_blank());
        assert!(Line::normalise(1, "          ").unwrap().is_blank());
        assert!(!Line::normalise(1, " 58NI").unwrap().is_blank());
    }

    #[test]
    fn unalignable_content_is_fatal() {
        assert!(matches!(
            Line::normalise(3, &" ".repeat(81)),
            Err(Error::Overflow {
                number: 3,
                length: 81
            })
        ));
        assert!(matches!(
            Line::normalise(7, " 58NI ü"),
            Err(Error::Encoding { number: 7 })
        ));
    }
}
