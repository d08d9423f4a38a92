use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Failed to read source file {path}: {source}")]
    SourceRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Source file {path} is not valid UTF-8")]
    InvalidUtf8 { path: PathBuf },

    #[error("Unterminated quoted field in {path} starting at line {line}")]
    UnterminatedQuote { path: PathBuf, line: usize },

    #[error("Malformed row in {path} at line {line}: expected at least 2 columns, got {columns}")]
    MalformedRow {
        path: PathBuf,
        line: usize,
        columns: usize,
    },

    #[error("Malformed annotation in {path} at line {line}: {source} in {field:?}")]
    UnbalancedBrackets {
        path: PathBuf,
        line: usize,
        field: String,
        #[source]
        source: BracketError,
    },
}

/// Malformed `[ ... ]` annotation inside a games field.
///
/// Positions are character offsets into the raw field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BracketError {
    #[error("']' at {position} has no matching '['")]
    UnmatchedClose { position: usize },

    #[error("'[' at {position} opens inside another annotation")]
    NestedOpen { position: usize },

    #[error("'[' at {position} is never closed")]
    Unclosed { position: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
