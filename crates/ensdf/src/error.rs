//! Result, Error, and Diagnostic types for the ENSDF parser

use serde::{Deserialize, Serialize};

/// Type alias for `Result<T, ensdf::Error>`
pub type Result<T> = core::result::Result<T, Error>;

/// The error type for `enstools-ensdf`
///
/// Any of these variants is fatal for the file being parsed, and only for
/// that file. Recoverable events are reported as [Diagnostic] records
/// instead and never interrupt a parse.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Underlying file I/O error
    #[error("failure in file I/O")]
    Io(#[from] std::io::Error),

    /// Input could not be split into at least one dataset block
    #[error("no dataset blocks found in the input")]
    EmptyFile,

    /// Line content does not align to single-character columns
    #[error("line {number} is not 8-bit text")]
    Encoding {
        /// 1-based position of the line in the source
        number: usize,
    },

    /// Line is longer than the fixed record width
    #[error("line {number} is {length} characters, expected at most 80")]
    Overflow {
        /// 1-based position of the line in the source
        number: usize,
        /// Actual character count of the line
        length: usize,
    },
}

/// Reason a line was flagged during parsing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DiagnosticKind {
    /// The line matched none of the record classification rules
    UnclassifiedRecord,
    /// The identification DSID matched none of the known dataset patterns
    UnknownDatasetType,
    /// The mass number columns were not a valid integer
    BadMassNumber,
}

impl std::fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let reason = match self {
            Self::UnclassifiedRecord => "record not within expected types",
            Self::UnknownDatasetType => "identification matched no known dataset type",
            Self::BadMassNumber => "mass number columns are not a valid integer",
        };
        write!(f, "{reason}")
    }
}

/// A recoverable event recorded while parsing a file
///
/// Diagnostics are informational. Parsing continues past every flagged line
/// with an UNKNOWN tag in place, so a structurally damaged record never
/// costs the caller the rest of the file. Callers decide whether to surface
/// these in a report or ignore them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// 1-based line position in the source
    pub line: usize,
    /// Raw text of the offending line
    pub text: String,
    /// Reason the line was flagged
    pub kind: DiagnosticKind,
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "line {}: {}\n......{}", self.line, self.kind, self.text)
    }
}
