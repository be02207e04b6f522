//! Character-offset spans and the slicing rule applied to every data line.

use serde::{Deserialize, Serialize};

/// A half-open `[start, end)` range of character offsets within a line.
///
/// Offsets count Unicode scalar values, not bytes, so a span taken from a
/// header line lands on the same visual columns in a data line that holds
/// multi-byte characters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ColumnSpan {
    /// First character offset covered by the span.
    pub start: usize,
    /// Offset one past the last character covered by the span.
    pub end: usize,
}

impl ColumnSpan {
    /// Create a span. `end` is clamped so it is never before `start`.
    pub fn new(start: usize, end: usize) -> Self {
        ColumnSpan {
            start,
            end: end.max(start),
        }
    }

    /// Number of characters covered.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Whether the span covers no characters.
    pub fn is_empty(&self) -> bool {
        self.end == self.start
    }

    /// Whether this span ends at or before `other` starts.
    pub fn precedes(&self, other: &ColumnSpan) -> bool {
        self.end <= other.start
    }

    /// Cut the span out of `line`, truncating at the end of the line.
    ///
    /// A line that ends before `start` yields `""`; a line that ends inside
    /// the span yields whatever part of the span it covers. Nothing is padded
    /// and nothing is trimmed.
    ///
    /// ```
    /// use fixtab::ColumnSpan;
    ///
    /// let span = ColumnSpan::new(2, 6);
    /// assert_eq!(span.slice("ab1234cd"), "1234");
    /// assert_eq!(span.slice("ab12"), "12");
    /// assert_eq!(span.slice("a"), "");
    /// ```
    pub fn slice<'a>(&self, line: &'a str) -> &'a str {
        LineOffsets::new(line).slice(*self)
    }
}

/// Character boundaries of one line, computed once and shared by every span
/// sliced from it.
#[derive(Clone, Debug)]
pub(crate) struct LineOffsets<'a> {
    line: &'a str,
    /// Byte offset of every char boundary, including the end of the line.
    /// `None` for ASCII lines, where char and byte offsets coincide.
    bounds: Option<Vec<usize>>,
}

impl<'a> LineOffsets<'a> {
    pub(crate) fn new(line: &'a str) -> Self {
        let bounds = if line.is_ascii() {
            None
        } else {
            Some(
                line.char_indices()
                    .map(|(i, _)| i)
                    .chain(std::iter::once(line.len()))
                    .collect(),
            )
        };
        LineOffsets { line, bounds }
    }

    /// Number of characters in the line.
    fn char_len(&self) -> usize {
        match &self.bounds {
            Some(bounds) => bounds.len() - 1,
            None => self.line.len(),
        }
    }

    /// Cut `span` out of the line, truncating at the end of the line.
    pub(crate) fn slice(&self, span: ColumnSpan) -> &'a str {
        let len = self.char_len();
        if span.is_empty() || span.start >= len {
            return "";
        }
        let end = span.end.min(len);
        match &self.bounds {
            Some(bounds) => &self.line[bounds[span.start]..bounds[end]],
            None => &self.line[span.start..end],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slice_inside_line() {
        let span = ColumnSpan::new(1, 4);
        assert_eq!(span.slice("|abc|"), "abc");
    }

    #[test]
    fn slice_truncates_short_line() {
        let span = ColumnSpan::new(3, 10);
        assert_eq!(span.slice("12345"), "45");
    }

    #[test]
    fn slice_past_end_is_empty() {
        let span = ColumnSpan::new(5, 10);
        assert_eq!(span.slice("12345"), "");
        assert_eq!(span.slice(""), "");
    }

    #[test]
    fn slice_counts_chars_not_bytes() {
        let span = ColumnSpan::new(2, 5);
        assert_eq!(span.slice("|éxyz|"), "xyz");
        assert_eq!(span.slice("|ééé"), "éé");
        assert_eq!(span.slice("|é"), "");
    }

    #[test]
    fn empty_span_slices_nothing() {
        let span = ColumnSpan::new(4, 2);
        assert!(span.is_empty());
        assert_eq!(span.slice("abcdef"), "");
    }

    #[test]
    fn offsets_are_shared_across_spans() {
        let offsets = LineOffsets::new("| Größe | Ü |");
        assert_eq!(offsets.slice(ColumnSpan::new(1, 8)), " Größe ");
        assert_eq!(offsets.slice(ColumnSpan::new(9, 12)), " Ü ");
        assert_eq!(offsets.slice(ColumnSpan::new(12, 20)), "|");
        assert_eq!(offsets.slice(ColumnSpan::new(13, 20)), "");
    }

    #[test]
    fn precedes_allows_touching() {
        let a = ColumnSpan::new(0, 3);
        let b = ColumnSpan::new(3, 5);
        assert!(a.precedes(&b));
        assert!(!b.precedes(&a));
    }
}
