//! Error types for line preparation.

use std::io;

/// Errors that can occur while turning raw input into table lines.
#[derive(Debug, thiserror::Error)]
pub enum LinesError {
    /// Reading the input failed.
    #[error("failed to read table input: {0}")]
    Io(#[from] io::Error),

    /// The comment pattern is not a valid regular expression.
    #[error("invalid comment pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    /// The prepared lines could not be read as a table.
    #[error(transparent)]
    Read(#[from] fixtab::ReadError),
}

/// Result type for line preparation.
pub type Result<T> = std::result::Result<T, LinesError>;
