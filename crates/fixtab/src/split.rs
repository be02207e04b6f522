//! Row splitting.

use crate::span::LineOffsets;
use crate::table::{Column, Row};

/// Slice `line` into one value per column in `columns`.
///
/// Each value is the line's text over the column's span with surrounding
/// whitespace trimmed. Lines shorter than a span give a shorter (possibly
/// empty) value; text past the last span is ignored. Quotes and inner
/// whitespace are kept as they are. Never fails.
pub fn split(line: &str, columns: &[Column]) -> Row {
    let offsets = LineOffsets::new(line);
    Row::new(
        columns
            .iter()
            .map(|col| offsets.slice(col.span).trim().to_string())
            .collect(),
    )
}
