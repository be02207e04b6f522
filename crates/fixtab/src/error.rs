//! Error types for the fixtab crate.

use thiserror::Error;

use crate::config::LineIndex;

/// Broad classification of a [`ReadError`].
///
/// Callers that only care about *why* a read failed (bad configuration,
/// unparseable input, clashing names) can match on this instead of the
/// individual variants.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Invalid or contradictory configuration.
    Config,
    /// The input cannot be laid out as a fixed-width table.
    Format,
    /// Two or more resolved column names collide.
    NameConflict,
}

/// Errors that can occur when configuring or running a read.
#[derive(Debug, Error)]
pub enum ReadError {
    /// The header line index points outside the supplied lines.
    #[error("header line {index} is out of range for {len} input lines")]
    HeaderOutOfRange { index: LineIndex, len: usize },

    /// Explicit names were given but their count does not match the columns found.
    #[error("{given} column names supplied but {detected} columns were detected")]
    NamesLengthMismatch { given: usize, detected: usize },

    /// Both an include and an exclude filter were supplied.
    #[error("{what}: include and exclude lists are mutually exclusive")]
    ConflictingFilters { what: &'static str },

    /// A serialized configuration could not be turned into a valid config.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// The reference line does not contain the delimiter at all.
    #[error("no column boundaries detected: delimiter {delimiter:?} not found in {line:?}")]
    NoBoundaries { delimiter: char, line: String },

    /// No header line and no data lines, so there is nothing to take spans from.
    #[error("no data lines to infer columns from")]
    NoReferenceLine,

    /// The same column name was resolved for more than one column.
    #[error("duplicate column name {name:?} (columns {first} and {second})")]
    NameConflict {
        name: String,
        first: usize,
        second: usize,
    },
}

impl ReadError {
    /// Returns the broad classification of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            ReadError::HeaderOutOfRange { .. }
            | ReadError::NamesLengthMismatch { .. }
            | ReadError::ConflictingFilters { .. }
            | ReadError::InvalidConfig(_) => ErrorKind::Config,
            ReadError::NoBoundaries { .. } | ReadError::NoReferenceLine => ErrorKind::Format,
            ReadError::NameConflict { .. } => ErrorKind::NameConflict,
        }
    }

    /// Create an invalid-config error.
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }
}

/// Result type for fixtab operations.
pub type Result<T> = std::result::Result<T, ReadError>;
