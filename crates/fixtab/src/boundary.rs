//! Column boundary detection.
//!
//! A reference line is scanned for the delimiter. Every contiguous run of
//! delimiter characters is one boundary marker, so `||` behaves like `|`.
//! The gaps between consecutive markers are the column spans:
//!
//! ```text
//! || Name ||   Phone ||         TCP||
//! ^^      ^^         ^^            ^^   markers
//!   [2,8)   [10,19)    [21,33)          spans
//! ```
//!
//! A line that does not start with the delimiter is read as if it did: the
//! text before the first marker is always a column, even when blank, so
//! headers such as `  Col1  |  Col2 |` work and a blank first cell still
//! gets its column. Text after the last marker is a column only when it holds
//! something other than whitespace.
//!
//! Span bounds are character offsets into the reference line. They are
//! replayed unchanged against every data line.

use crate::error::{ReadError, Result};
use crate::span::ColumnSpan;

/// A detected column span with the reference line's text over it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawColumn {
    /// Character span in the reference line.
    pub span: ColumnSpan,
    /// Whitespace-trimmed text of the reference line over `span`.
    pub text: String,
}

/// Compute column spans from `line`.
///
/// Fails with [`ReadError::NoBoundaries`] if the delimiter does not occur.
pub fn extract(line: &str, delimiter: char) -> Result<Vec<RawColumn>> {
    let chars: Vec<char> = line.chars().collect();
    let markers = markers(&chars, delimiter);

    let (Some(first), Some(last)) = (markers.first(), markers.last()) else {
        return Err(ReadError::NoBoundaries {
            delimiter,
            line: line.to_string(),
        });
    };

    let mut columns = Vec::with_capacity(markers.len() + 1);

    if first.start > 0 {
        let span = ColumnSpan::new(0, first.start);
        columns.push(RawColumn {
            span,
            text: text_over(&chars, span),
        });
    }
    for pair in markers.windows(2) {
        let span = ColumnSpan::new(pair[0].end, pair[1].start);
        columns.push(RawColumn {
            span,
            text: text_over(&chars, span),
        });
    }
    if last.end < chars.len() {
        push_if_filled(&mut columns, &chars, ColumnSpan::new(last.end, chars.len()));
    }

    tracing::trace!(
        markers = markers.len(),
        columns = columns.len(),
        "extracted column boundaries"
    );

    Ok(columns)
}

/// Collapse every run of `delimiter` into one marker span.
fn markers(chars: &[char], delimiter: char) -> Vec<ColumnSpan> {
    let mut markers: Vec<ColumnSpan> = Vec::new();
    for (i, &c) in chars.iter().enumerate() {
        if c != delimiter {
            continue;
        }
        match markers.last_mut() {
            Some(run) if run.end == i => run.end = i + 1,
            _ => markers.push(ColumnSpan::new(i, i + 1)),
        }
    }
    markers
}

fn text_over(chars: &[char], span: ColumnSpan) -> String {
    let s: String = chars[span.start..span.end].iter().collect();
    s.trim().to_string()
}

fn push_if_filled(columns: &mut Vec<RawColumn>, chars: &[char], span: ColumnSpan) {
    let text = text_over(chars, span);
    if !text.is_empty() {
        columns.push(RawColumn { span, text });
    }
}
