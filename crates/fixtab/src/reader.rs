//! The read pipeline.
//!
//! Reading is two separate phases:
//!
//! 1. [`Layout::infer`] looks at the configuration and the header (or first
//!    data) line once and produces an immutable layout: every column's span
//!    and name, which columns are kept, and which lines hold data.
//! 2. [`Layout::apply`] maps one data line to a [`Row`]. It reads nothing but
//!    the layout and the line, so rows can be produced in any order or in
//!    parallel.
//!
//! [`read`] runs both phases and collects a [`Table`]. Any failure aborts the
//! whole read; a partial table is never returned.

use std::ops::Range;

use crate::boundary;
use crate::config::ReaderConfig;
use crate::error::{ReadError, Result};
use crate::fill::FillPlan;
use crate::header;
use crate::names;
use crate::split::split;
use crate::table::{Column, Row, Table};

/// Column layout inferred from one reference line.
#[derive(Clone, Debug)]
pub struct Layout {
    columns: Vec<Column>,
    included: Vec<Column>,
    data: Range<usize>,
    fill: FillPlan,
}

/// The layout is the table's header information.
pub type HeaderInfo = Layout;

impl Layout {
    /// Infer the layout of `lines` under `config`.
    pub fn infer<S: AsRef<str>>(lines: &[S], config: &ReaderConfig) -> Result<Self> {
        let located = header::locate(
            lines.len(),
            config.header(),
            config.data_start(),
            config.data_end(),
        )?;

        let (reference, from_header) = match located.header {
            Some(index) => (lines[index].as_ref(), true),
            None if located.data.is_empty() => return Err(ReadError::NoReferenceLine),
            None => (lines[located.data.start].as_ref(), false),
        };

        let raw = boundary::extract(reference, config.delimiter())?;
        let columns = names::resolve(&raw, from_header, config.names(), config.filter())?;
        let included: Vec<Column> = columns.iter().filter(|c| c.included).cloned().collect();
        let fill = FillPlan::new(&included, config.fill_values(), config.fill_filter());

        tracing::debug!(
            header = ?located.header,
            data_start = located.data.start,
            data_end = located.data.end,
            detected = columns.len(),
            included = included.len(),
            "inferred fixed-width layout"
        );

        Ok(Layout {
            columns,
            included,
            data: located.data,
            fill,
        })
    }

    /// Every detected column, including filtered-out ones.
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// The columns that appear in the output, in line order.
    pub fn included_columns(&self) -> &[Column] {
        &self.included
    }

    /// Indices of the input lines that hold data.
    pub fn data_lines(&self) -> Range<usize> {
        self.data.clone()
    }

    /// Split one data line into a row, applying fill rules.
    pub fn apply(&self, line: &str) -> Row {
        let mut row = split(line, &self.included);
        if !self.fill.is_empty() {
            self.fill.apply(&mut row);
        }
        row
    }

    fn into_table(self, rows: Vec<Row>) -> Table {
        Table::new(self.included, rows)
    }
}

/// Read a fixed-width table from already-prepared lines.
///
/// ```
/// use fixtab::{read, ReaderConfig};
///
/// let lines = [
///     "|  Col1  |  Col2   |",
///     "|  1.2   | \"hello\" |",
///     "|  2.4   |'s worlds|",
/// ];
/// let table = read(&lines, &ReaderConfig::default()).unwrap();
/// assert_eq!(table.column_names(), vec!["Col1", "Col2"]);
/// assert_eq!(table.rows()[1][1], "'s worlds");
/// ```
#[tracing::instrument(level = "debug", skip_all, fields(lines = lines.len()))]
pub fn read<S: AsRef<str>>(lines: &[S], config: &ReaderConfig) -> Result<Table> {
    let layout = Layout::infer(lines, config)?;

    let rows: Vec<Row> = lines[layout.data_lines()]
        .iter()
        .enumerate()
        .map(|(i, line)| {
            tracing::trace!(line = layout.data.start + i, "splitting row");
            layout.apply(line.as_ref())
        })
        .collect();

    tracing::debug!(rows = rows.len(), "read complete");
    Ok(layout.into_table(rows))
}

/// Like [`read`], but splits rows on the rayon thread pool.
///
/// The result is identical to [`read`] for the same input.
#[cfg(feature = "parallel")]
#[tracing::instrument(level = "debug", skip_all, fields(lines = lines.len()))]
pub fn read_par<S: AsRef<str> + Sync>(lines: &[S], config: &ReaderConfig) -> Result<Table> {
    use rayon::prelude::*;

    let layout = Layout::infer(lines, config)?;

    let rows: Vec<Row> = lines[layout.data_lines()]
        .par_iter()
        .map(|line| layout.apply(line.as_ref()))
        .collect();

    tracing::debug!(rows = rows.len(), "parallel read complete");
    Ok(layout.into_table(rows))
}

/// A reusable reader bound to one validated configuration.
#[derive(Clone, Debug, Default)]
pub struct FixedWidthReader {
    config: ReaderConfig,
}

impl FixedWidthReader {
    /// Create a reader with `config`.
    pub fn new(config: ReaderConfig) -> Self {
        FixedWidthReader { config }
    }

    /// The reader's configuration.
    pub fn config(&self) -> &ReaderConfig {
        &self.config
    }

    /// Infer the layout of `lines` without splitting any rows.
    pub fn layout<S: AsRef<str>>(&self, lines: &[S]) -> Result<Layout> {
        Layout::infer(lines, &self.config)
    }

    /// Read `lines` into a table.
    pub fn read<S: AsRef<str>>(&self, lines: &[S]) -> Result<Table> {
        read(lines, &self.config)
    }

    /// Read `lines` into a table, splitting rows in parallel.
    #[cfg(feature = "parallel")]
    pub fn read_par<S: AsRef<str> + Sync>(&self, lines: &[S]) -> Result<Table> {
        read_par(lines, &self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{HeaderMode, LineIndex};
    use crate::error::ErrorKind;
    use crate::fill::FillRule;

    const NORMAL: [&str; 3] = [
        "|  Col1  |  Col2   |",
        "|  1.2   | \"hello\" |",
        "|  2.4   |'s worlds|",
    ];

    #[test]
    fn layout_is_inferred_from_header() {
        let layout = Layout::infer(&NORMAL, &ReaderConfig::default()).unwrap();
        assert_eq!(layout.columns().len(), 2);
        assert_eq!(layout.included_columns()[1].name, "Col2");
        assert_eq!(layout.data_lines(), 1..3);
    }

    #[test]
    fn apply_is_independent_of_line_order() {
        let layout = Layout::infer(&NORMAL, &ReaderConfig::default()).unwrap();
        let second = layout.apply(NORMAL[2]);
        let first = layout.apply(NORMAL[1]);
        assert_eq!(first.values(), &["1.2", "\"hello\""]);
        assert_eq!(second.values(), &["2.4", "'s worlds"]);
    }

    #[test]
    fn header_can_be_a_data_line_too() {
        let config = ReaderConfig::builder().data_start(0).build().unwrap();
        let table = read(&NORMAL, &config).unwrap();
        assert_eq!(table.num_rows(), 3);
        assert_eq!(table.rows()[0].values(), &["Col1", "Col2"]);
    }

    #[test]
    fn headerless_without_data_is_format_error() {
        let config = ReaderConfig::builder().no_header().build().unwrap();
        let lines: [&str; 0] = [];
        let err = read(&lines, &config).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Format);
    }

    #[test]
    fn header_without_delimiter_is_format_error() {
        let lines = ["Col1 Col2", "1 2"];
        let err = read(&lines, &ReaderConfig::default()).unwrap_err();
        assert!(matches!(err, ReadError::NoBoundaries { .. }));
    }

    #[test]
    fn header_only_input_gives_empty_table() {
        let table = read(&NORMAL[..1], &ReaderConfig::default()).unwrap();
        assert_eq!(table.column_names(), vec!["Col1", "Col2"]);
        assert!(table.is_empty());
    }

    #[test]
    fn header_from_end() {
        let lines = ["junk", "| a | b |", "| 1 | 2 |"];
        let config = ReaderConfig::builder()
            .header(HeaderMode::Present(LineIndex::FromEnd(2)))
            .build()
            .unwrap();
        let table = read(&lines, &config).unwrap();
        assert_eq!(table.column_names(), vec!["a", "b"]);
        assert_eq!(table.num_rows(), 1);
    }

    #[test]
    fn fill_rules_mask_values() {
        let lines = ["| a  | b  |", "| -- | 1  |", "| 2  | -- |"];
        let config = ReaderConfig::builder()
            .fill_value(FillRule::new("--", "0"))
            .fill_exclude_names(["b"])
            .build()
            .unwrap();
        let table = read(&lines, &config).unwrap();

        assert_eq!(table.rows()[0].values(), &["0", "1"]);
        assert!(table.rows()[0].is_masked(0));
        assert_eq!(table.rows()[1].values(), &["2", "--"]);
        assert!(!table.rows()[1].is_masked(1));
    }

    #[test]
    fn reader_reuses_config() {
        let reader = FixedWidthReader::new(
            ReaderConfig::builder()
                .exclude_names(["Col1"])
                .build()
                .unwrap(),
        );
        let table = reader.read(&NORMAL).unwrap();
        assert_eq!(table.column_names(), vec!["Col2"]);

        let layout = reader.layout(&NORMAL).unwrap();
        assert_eq!(layout.columns().len(), 2);
        assert_eq!(layout.included_columns().len(), 1);
    }

    #[test]
    fn reads_owned_lines() {
        let lines: Vec<String> = NORMAL.iter().map(|s| s.to_string()).collect();
        let table = read(&lines, &ReaderConfig::default()).unwrap();
        assert_eq!(table.num_rows(), 2);
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn parallel_read_matches_sequential() {
        let config = ReaderConfig::default();
        assert_eq!(
            read_par(&NORMAL, &config).unwrap(),
            read(&NORMAL, &config).unwrap()
        );
    }
}
