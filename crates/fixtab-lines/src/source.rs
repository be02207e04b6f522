//! Line sources: turning raw text into table lines.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::Result;

/// Pattern used for comment lines when none is configured.
pub const DEFAULT_COMMENT: &str = r"\s*#";

static DEFAULT_COMMENT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(&anchored(DEFAULT_COMMENT)).expect("static regex must compile"));

/// Comment patterns must match at the start of the line.
fn anchored(pattern: &str) -> String {
    format!("^(?:{})", pattern)
}

/// Prepares raw input for [`fixtab::read`].
///
/// Line endings are stripped, blank lines (empty or whitespace only) are
/// dropped, and so is every line whose start matches the comment pattern.
/// The remaining lines keep their original text, including leading and
/// trailing whitespace, so column offsets are not disturbed.
///
/// ```
/// use fixtab_lines::LineSource;
///
/// let text = "\n# generated\n| a | b |\n\n| 1 | 2 |\n";
/// let lines = LineSource::new().lines_from_str(text);
/// assert_eq!(lines, vec!["| a | b |", "| 1 | 2 |"]);
/// ```
#[derive(Clone, Debug)]
pub struct LineSource {
    comment: Option<Regex>,
}

impl Default for LineSource {
    fn default() -> Self {
        Self::new()
    }
}

impl LineSource {
    /// A source that treats lines starting with `#` (after optional
    /// whitespace) as comments.
    pub fn new() -> Self {
        LineSource {
            comment: Some(DEFAULT_COMMENT_RE.clone()),
        }
    }

    /// Use `pattern` as the comment regex. It is matched at line start.
    pub fn comment(mut self, pattern: &str) -> Result<Self> {
        self.comment = Some(Regex::new(&anchored(pattern))?);
        Ok(self)
    }

    /// Keep every non-blank line; nothing is a comment.
    pub fn no_comments(mut self) -> Self {
        self.comment = None;
        self
    }

    /// Whether `line` would be dropped.
    pub fn is_skipped(&self, line: &str) -> bool {
        line.trim().is_empty() || self.is_comment(line)
    }

    fn is_comment(&self, line: &str) -> bool {
        self.comment.as_ref().is_some_and(|re| re.is_match(line))
    }

    /// Table lines from in-memory text.
    pub fn lines_from_str(&self, text: &str) -> Vec<String> {
        let lines: Vec<String> = text
            .lines()
            .filter(|line| !self.is_skipped(line))
            .map(str::to_string)
            .collect();
        tracing::debug!(kept = lines.len(), "prepared lines from text");
        lines
    }

    /// Table lines from any buffered reader.
    pub fn lines_from_reader<R: BufRead>(&self, reader: R) -> Result<Vec<String>> {
        let mut lines = Vec::new();
        let mut skipped = 0usize;
        for line in reader.lines() {
            let line = line?;
            if self.is_skipped(&line) {
                skipped += 1;
            } else {
                lines.push(line);
            }
        }
        tracing::debug!(kept = lines.len(), skipped, "prepared lines from reader");
        Ok(lines)
    }

    /// Table lines from a file.
    #[tracing::instrument(level = "debug", skip_all, fields(path = %path.as_ref().display()))]
    pub fn lines_from_path(&self, path: impl AsRef<Path>) -> Result<Vec<String>> {
        let file = File::open(path.as_ref())?;
        self.lines_from_reader(BufReader::new(file))
    }

    /// The comment lines found in `text`, in order.
    pub fn comment_lines(&self, text: &str) -> Vec<String> {
        text.lines()
            .filter(|line| self.is_comment(line))
            .map(str::to_string)
            .collect()
    }
}
