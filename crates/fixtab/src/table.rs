//! Output types: columns, rows and the finished table.

use std::ops::Index;

use serde::Serialize;

use crate::span::ColumnSpan;

/// One detected column.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Column {
    /// Resolved column name.
    pub name: String,
    /// Character span the column occupies in every line.
    pub span: ColumnSpan,
    /// Position among all detected columns, before filtering.
    pub index: usize,
    /// Whether the column survived the include/exclude filter.
    pub included: bool,
}

/// Raw string values of one data line, one per included column.
///
/// Each value carries a mask bit that is set when a fill rule replaced it.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Row {
    pub(crate) values: Vec<String>,
    pub(crate) masked: Vec<bool>,
}

impl Row {
    /// Create an unmasked row.
    pub fn new(values: Vec<String>) -> Self {
        let masked = vec![false; values.len()];
        Row { values, masked }
    }

    /// The row's values in column order.
    pub fn values(&self) -> &[String] {
        &self.values
    }

    /// Value of the column at `index`.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.values.get(index).map(String::as_str)
    }

    /// Whether the value at `index` was substituted by a fill rule.
    pub fn is_masked(&self, index: usize) -> bool {
        self.masked.get(index).copied().unwrap_or(false)
    }

    /// Number of values.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the row has no values.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate over the values as string slices.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.values.iter().map(String::as_str)
    }

    /// Consume the row, returning its values.
    pub fn into_values(self) -> Vec<String> {
        self.values
    }
}

impl Index<usize> for Row {
    type Output = String;

    fn index(&self, index: usize) -> &String {
        &self.values[index]
    }
}

/// A parsed table: the included columns and one row per data line.
///
/// Every row has exactly as many values as the table has columns.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Table {
    columns: Vec<Column>,
    rows: Vec<Row>,
}

impl Table {
    pub(crate) fn new(columns: Vec<Column>, rows: Vec<Row>) -> Self {
        debug_assert!(rows.iter().all(|r| r.len() == columns.len()));
        Table { columns, rows }
    }

    /// The included columns, in line order.
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Names of the included columns, in line order.
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    /// Position of the column called `name`.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.name == name)
    }

    /// Values of the column called `name`, top to bottom.
    pub fn column_values<'a>(&'a self, name: &str) -> Option<impl Iterator<Item = &'a str> + 'a> {
        let index = self.column_index(name)?;
        Some(self.rows.iter().map(move |row| row.values[index].as_str()))
    }

    /// All rows.
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Row at `index`.
    pub fn row(&self, index: usize) -> Option<&Row> {
        self.rows.get(index)
    }

    /// Number of included columns.
    pub fn num_columns(&self) -> usize {
        self.columns.len()
    }

    /// Number of data rows.
    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no data rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Split into columns and rows.
    pub fn into_parts(self) -> (Vec<Column>, Vec<Row>) {
        (self.columns, self.rows)
    }
}
