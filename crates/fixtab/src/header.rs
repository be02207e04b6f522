//! Header and data line location.

use std::ops::Range;

use crate::config::{HeaderMode, LineIndex};
use crate::error::{ReadError, Result};

/// Resolved line positions for one read.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LineLayout {
    /// Index of the header line, or `None` for a headerless table.
    pub header: Option<usize>,
    /// Indices of the data lines. May be empty.
    pub data: Range<usize>,
}

/// Resolve the header line and the data range for an input of `len` lines.
///
/// A header index outside the input is a configuration error. Data bounds
/// are clamped instead: a start past the end simply yields no data lines.
pub fn locate(
    len: usize,
    header: HeaderMode,
    data_start: Option<LineIndex>,
    data_end: Option<LineIndex>,
) -> Result<LineLayout> {
    let header = match header {
        HeaderMode::Absent => None,
        HeaderMode::Present(index) => match index.resolve(len) {
            Some(i) if i < len => Some(i),
            _ => return Err(ReadError::HeaderOutOfRange { index, len }),
        },
    };

    let start = match data_start {
        Some(index) => index.resolve(len).unwrap_or(0),
        None => header.map_or(0, |h| h + 1),
    };
    let end = match data_end {
        Some(index) => index.resolve(len).unwrap_or(0).min(len),
        None => len,
    };

    Ok(LineLayout {
        header,
        data: start.min(end)..end,
    })
}
