//! Reader configuration.
//!
//! A [`ReaderConfig`] is built once, validated once, and then shared by every
//! read that uses it. Contradictory settings (an include *and* an exclude
//! list, for instance) are rejected by [`ReaderConfigBuilder::build`] rather
//! than discovered halfway through a read.
//!
//! Configs can also be loaded from any serde format. The serialized form uses
//! plain integers for line indices (negative values count from the end) and
//! `null` for a missing header:
//!
//! ```
//! use fixtab::{HeaderMode, ReaderConfig};
//!
//! let config: ReaderConfig = serde_json::from_str(
//!     r#"{ "header_start": null, "data_start": 0, "names": ["Name", "Phone"] }"#,
//! ).unwrap();
//! assert_eq!(config.header(), HeaderMode::Absent);
//! ```

use std::collections::BTreeSet;
use std::fmt;

use serde::Deserialize;

use crate::error::{ReadError, Result};
use crate::fill::FillRule;

/// Default column delimiter.
pub const DEFAULT_DELIMITER: char = '|';

/// Position of a line within the input, counted from either end.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LineIndex {
    /// 0-based offset from the first line.
    FromStart(usize),
    /// Offset back from the end: `FromEnd(1)` is the last line.
    FromEnd(usize),
}

impl LineIndex {
    /// Interpret a signed index the way slice-style APIs do: negative values
    /// count back from the end.
    pub fn from_signed(index: i64) -> Self {
        if index < 0 {
            LineIndex::FromEnd(index.unsigned_abs() as usize)
        } else {
            LineIndex::FromStart(index as usize)
        }
    }

    /// Resolve against an input of `len` lines.
    ///
    /// Returns `None` when a `FromEnd` index reaches before the first line.
    /// The result may be `>= len`; callers decide whether that is an error.
    pub fn resolve(self, len: usize) -> Option<usize> {
        match self {
            LineIndex::FromStart(n) => Some(n),
            LineIndex::FromEnd(n) => len.checked_sub(n),
        }
    }
}

impl Default for LineIndex {
    fn default() -> Self {
        LineIndex::FromStart(0)
    }
}

impl From<usize> for LineIndex {
    fn from(index: usize) -> Self {
        LineIndex::FromStart(index)
    }
}

impl From<i64> for LineIndex {
    fn from(index: i64) -> Self {
        LineIndex::from_signed(index)
    }
}

impl From<i32> for LineIndex {
    fn from(index: i32) -> Self {
        LineIndex::from_signed(i64::from(index))
    }
}

impl fmt::Display for LineIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LineIndex::FromStart(n) => write!(f, "{}", n),
            LineIndex::FromEnd(n) => write!(f, "-{}", n),
        }
    }
}

/// Where the header line is, if there is one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HeaderMode {
    /// The header is the line at this index.
    Present(LineIndex),
    /// There is no header; spans come from the first data line and names
    /// are generated (`col1`, `col2`, ...) unless given explicitly.
    Absent,
}

impl Default for HeaderMode {
    fn default() -> Self {
        HeaderMode::Present(LineIndex::FromStart(0))
    }
}

/// A column-name filter: keep only some names, drop some names, or neither.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum NameFilter {
    /// Keep every column.
    #[default]
    None,
    /// Keep only the named columns (in their original order).
    Include(BTreeSet<String>),
    /// Drop the named columns.
    Exclude(BTreeSet<String>),
}

impl NameFilter {
    /// Filter that keeps only `names`.
    pub fn include<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        NameFilter::Include(names.into_iter().map(Into::into).collect())
    }

    /// Filter that drops `names`.
    pub fn exclude<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        NameFilter::Exclude(names.into_iter().map(Into::into).collect())
    }

    /// Fold an optional include list and an optional exclude list into one
    /// filter. Supplying both is a configuration error.
    pub fn from_lists(
        include: Option<Vec<String>>,
        exclude: Option<Vec<String>>,
        what: &'static str,
    ) -> Result<Self> {
        match (include, exclude) {
            (Some(_), Some(_)) => Err(ReadError::ConflictingFilters { what }),
            (Some(names), None) => Ok(NameFilter::include(names)),
            (None, Some(names)) => Ok(NameFilter::exclude(names)),
            (None, None) => Ok(NameFilter::None),
        }
    }

    /// Whether a column called `name` survives this filter.
    pub fn retains(&self, name: &str) -> bool {
        match self {
            NameFilter::None => true,
            NameFilter::Include(names) => names.contains(name),
            NameFilter::Exclude(names) => !names.contains(name),
        }
    }
}

/// Validated configuration for a fixed-width read.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(try_from = "ReaderConfigRaw")]
pub struct ReaderConfig {
    header: HeaderMode,
    data_start: Option<LineIndex>,
    data_end: Option<LineIndex>,
    delimiter: char,
    names: Option<Vec<String>>,
    filter: NameFilter,
    fill_values: Vec<FillRule>,
    fill_filter: NameFilter,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        ReaderConfig {
            header: HeaderMode::default(),
            data_start: None,
            data_end: None,
            delimiter: DEFAULT_DELIMITER,
            names: None,
            filter: NameFilter::None,
            fill_values: Vec::new(),
            fill_filter: NameFilter::None,
        }
    }
}

impl ReaderConfig {
    /// Create a builder for fluent construction.
    pub fn builder() -> ReaderConfigBuilder {
        ReaderConfigBuilder::default()
    }

    /// Where the header line is.
    pub fn header(&self) -> HeaderMode {
        self.header
    }

    /// First data line, if set explicitly.
    ///
    /// When unset, data starts on the line after the header, or on line 0
    /// when there is no header.
    pub fn data_start(&self) -> Option<LineIndex> {
        self.data_start
    }

    /// Exclusive end of the data lines, if bounded.
    pub fn data_end(&self) -> Option<LineIndex> {
        self.data_end
    }

    /// Column delimiter character.
    pub fn delimiter(&self) -> char {
        self.delimiter
    }

    /// Explicit column names overriding the header text.
    pub fn names(&self) -> Option<&[String]> {
        self.names.as_deref()
    }

    /// Column-name filter applied after names are resolved.
    pub fn filter(&self) -> &NameFilter {
        &self.filter
    }

    /// Bad-value replacement rules.
    pub fn fill_values(&self) -> &[FillRule] {
        &self.fill_values
    }

    /// Which columns rules without their own column list apply to.
    pub fn fill_filter(&self) -> &NameFilter {
        &self.fill_filter
    }
}

/// Builder for [`ReaderConfig`].
///
/// ```
/// use fixtab::ReaderConfig;
///
/// let config = ReaderConfig::builder()
///     .names(["name1", "name2", "name3"])
///     .include_names(["name1", "name3"])
///     .build()
///     .unwrap();
/// assert_eq!(config.delimiter(), '|');
/// ```
#[derive(Clone, Debug, Default)]
pub struct ReaderConfigBuilder {
    header: Option<HeaderMode>,
    data_start: Option<LineIndex>,
    data_end: Option<LineIndex>,
    delimiter: Option<char>,
    names: Option<Vec<String>>,
    include_names: Option<Vec<String>>,
    exclude_names: Option<Vec<String>>,
    fill_values: Vec<FillRule>,
    fill_include_names: Option<Vec<String>>,
    fill_exclude_names: Option<Vec<String>>,
}

impl ReaderConfigBuilder {
    /// Set the header mode directly.
    pub fn header(mut self, header: HeaderMode) -> Self {
        self.header = Some(header);
        self
    }

    /// Use the line at `index` as the header.
    pub fn header_line(self, index: impl Into<LineIndex>) -> Self {
        self.header(HeaderMode::Present(index.into()))
    }

    /// Read a table without a header line.
    pub fn no_header(self) -> Self {
        self.header(HeaderMode::Absent)
    }

    /// Set the first data line.
    pub fn data_start(mut self, index: impl Into<LineIndex>) -> Self {
        self.data_start = Some(index.into());
        self
    }

    /// Set the exclusive end of the data lines.
    pub fn data_end(mut self, index: impl Into<LineIndex>) -> Self {
        self.data_end = Some(index.into());
        self
    }

    /// Set the delimiter character (default `|`).
    pub fn delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = Some(delimiter);
        self
    }

    /// Supply explicit column names, one per detected column.
    pub fn names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.names = Some(names.into_iter().map(Into::into).collect());
        self
    }

    /// Keep only these columns.
    pub fn include_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.include_names = Some(names.into_iter().map(Into::into).collect());
        self
    }

    /// Drop these columns.
    pub fn exclude_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exclude_names = Some(names.into_iter().map(Into::into).collect());
        self
    }

    /// Add a bad-value replacement rule.
    pub fn fill_value(mut self, rule: FillRule) -> Self {
        self.fill_values.push(rule);
        self
    }

    /// Restrict column-less fill rules to these columns.
    pub fn fill_include_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.fill_include_names = Some(names.into_iter().map(Into::into).collect());
        self
    }

    /// Exempt these columns from column-less fill rules.
    pub fn fill_exclude_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.fill_exclude_names = Some(names.into_iter().map(Into::into).collect());
        self
    }

    /// Validate and build the configuration.
    pub fn build(self) -> Result<ReaderConfig> {
        let delimiter = self.delimiter.unwrap_or(DEFAULT_DELIMITER);
        if matches!(delimiter, '\n' | '\r') {
            return Err(ReadError::invalid_config("delimiter cannot be a line break"));
        }

        let filter =
            NameFilter::from_lists(self.include_names, self.exclude_names, "column names")?;
        let fill_filter = NameFilter::from_lists(
            self.fill_include_names,
            self.fill_exclude_names,
            "fill column names",
        )?;

        Ok(ReaderConfig {
            header: self.header.unwrap_or_default(),
            data_start: self.data_start,
            data_end: self.data_end,
            delimiter,
            names: self.names,
            filter,
            fill_values: self.fill_values,
            fill_filter,
        })
    }
}

fn default_header_start() -> Option<i64> {
    Some(0)
}

/// Serialized shape of a [`ReaderConfig`].
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct ReaderConfigRaw {
    /// Missing means line 0; an explicit `null` means no header.
    #[serde(default = "default_header_start")]
    header_start: Option<i64>,
    #[serde(default)]
    data_start: Option<i64>,
    #[serde(default)]
    data_end: Option<i64>,
    #[serde(default)]
    delimiter: Option<char>,
    #[serde(default)]
    names: Option<Vec<String>>,
    #[serde(default)]
    include_names: Option<Vec<String>>,
    #[serde(default)]
    exclude_names: Option<Vec<String>>,
    #[serde(default)]
    fill_values: Vec<FillRule>,
    #[serde(default)]
    fill_include_names: Option<Vec<String>>,
    #[serde(default)]
    fill_exclude_names: Option<Vec<String>>,
}

impl TryFrom<ReaderConfigRaw> for ReaderConfig {
    type Error = ReadError;

    fn try_from(raw: ReaderConfigRaw) -> Result<Self> {
        let mut builder = ReaderConfig::builder();
        builder.header = Some(match raw.header_start {
            Some(index) => HeaderMode::Present(LineIndex::from_signed(index)),
            None => HeaderMode::Absent,
        });
        builder.data_start = raw.data_start.map(LineIndex::from_signed);
        builder.data_end = raw.data_end.map(LineIndex::from_signed);
        builder.delimiter = raw.delimiter;
        builder.names = raw.names;
        builder.include_names = raw.include_names;
        builder.exclude_names = raw.exclude_names;
        builder.fill_values = raw.fill_values;
        builder.fill_include_names = raw.fill_include_names;
        builder.fill_exclude_names = raw.fill_exclude_names;
        builder.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_read_header_on_first_line() {
        let config = ReaderConfig::default();
        assert_eq!(config.header(), HeaderMode::Present(LineIndex::FromStart(0)));
        assert_eq!(config.data_start(), None);
        assert_eq!(config.delimiter(), '|');
        assert_eq!(config.filter(), &NameFilter::None);
    }

    #[test]
    fn builder_rejects_include_and_exclude() {
        let err = ReaderConfig::builder()
            .include_names(["a"])
            .exclude_names(["b"])
            .build()
            .unwrap_err();
        assert!(matches!(
            err,
            ReadError::ConflictingFilters {
                what: "column names"
            }
        ));
    }

    #[test]
    fn builder_rejects_conflicting_fill_filters() {
        let err = ReaderConfig::builder()
            .fill_include_names(["a"])
            .fill_exclude_names(["b"])
            .build()
            .unwrap_err();
        assert!(matches!(
            err,
            ReadError::ConflictingFilters {
                what: "fill column names"
            }
        ));
    }

    #[test]
    fn builder_rejects_line_break_delimiter() {
        let err = ReaderConfig::builder().delimiter('\n').build().unwrap_err();
        assert_eq!(err.kind(), crate::ErrorKind::Config);
    }

    #[test]
    fn builder_folds_filters() {
        let config = ReaderConfig::builder()
            .exclude_names(["Col1"])
            .build()
            .unwrap();
        assert_eq!(config.filter(), &NameFilter::exclude(["Col1"]));
        assert!(!config.filter().retains("Col1"));
        assert!(config.filter().retains("Col2"));
    }

    #[test]
    fn line_index_resolution() {
        assert_eq!(LineIndex::FromStart(3).resolve(2), Some(3));
        assert_eq!(LineIndex::FromEnd(1).resolve(5), Some(4));
        assert_eq!(LineIndex::FromEnd(6).resolve(5), None);
        assert_eq!(LineIndex::from_signed(-2), LineIndex::FromEnd(2));
        assert_eq!(LineIndex::from_signed(2), LineIndex::FromStart(2));
        assert_eq!(LineIndex::FromEnd(2).to_string(), "-2");
        assert_eq!(LineIndex::from(-1), LineIndex::FromEnd(1));
        assert_eq!(LineIndex::from(4usize), LineIndex::FromStart(4));
    }

    #[test]
    fn include_filter_ignores_unknown_names() {
        let filter = NameFilter::include(["a", "zzz"]);
        assert!(filter.retains("a"));
        assert!(!filter.retains("b"));
    }

    #[test]
    fn deserialize_missing_header_means_first_line() {
        let config: ReaderConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, ReaderConfig::default());
    }

    #[test]
    fn deserialize_null_header_means_absent() {
        let config: ReaderConfig =
            serde_json::from_str(r#"{"header_start": null, "data_start": 0}"#).unwrap();
        assert_eq!(config.header(), HeaderMode::Absent);
        assert_eq!(config.data_start(), Some(LineIndex::FromStart(0)));
    }

    #[test]
    fn deserialize_negative_indices() {
        let config: ReaderConfig =
            serde_json::from_str(r#"{"header_start": -3, "data_end": -1}"#).unwrap();
        assert_eq!(config.header(), HeaderMode::Present(LineIndex::FromEnd(3)));
        assert_eq!(config.data_end(), Some(LineIndex::FromEnd(1)));
    }

    #[test]
    fn deserialize_yaml_with_filters() {
        let yaml = "delimiter: ','\nnames: [a, b, c]\ninclude_names: [a, c]\n";
        let config: ReaderConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.delimiter(), ',');
        assert_eq!(config.names().map(<[String]>::len), Some(3));
        assert_eq!(config.filter(), &NameFilter::include(["a", "c"]));
    }

    #[test]
    fn deserialize_rejects_conflicting_filters() {
        let result: std::result::Result<ReaderConfig, _> =
            serde_json::from_str(r#"{"include_names": ["a"], "exclude_names": ["b"]}"#);
        let err = result.unwrap_err();
        assert!(err.to_string().contains("mutually exclusive"));
    }

    #[test]
    fn deserialize_rejects_unknown_fields() {
        let result: std::result::Result<ReaderConfig, _> =
            serde_json::from_str(r#"{"header_row": 0}"#);
        assert!(result.is_err());
    }
}
