//! Line preparation for fixtab.
//!
//! `fixtab` reads tables from lines that are already clean. This crate does
//! the cleaning: it reads text from a string, a reader or a file, strips line
//! endings, and drops blank lines and comment lines.
//!
//! ```rust
//! use fixtab::ReaderConfig;
//! use fixtab_lines::{read_str, LineSource};
//!
//! let text = "
//! ## comment (with blank line above)
//! |  Col1  |  Col2   |
//! |  1.2   | \"hello\" |
//! |  2.4   |'s worlds|
//! ";
//!
//! let table = read_str(&LineSource::new(), text, &ReaderConfig::default()).unwrap();
//! assert_eq!(table.column_names(), vec!["Col1", "Col2"]);
//! assert_eq!(table.num_rows(), 2);
//! ```
//!
//! Line indices in [`fixtab::ReaderConfig`] (header, data start and end)
//! count the lines *after* cleaning.

mod error;
mod source;

use std::path::Path;

use fixtab::{ReaderConfig, Table};

pub use error::{LinesError, Result};
pub use source::{LineSource, DEFAULT_COMMENT};

/// Clean `text` with `source` and read it as a table.
pub fn read_str(source: &LineSource, text: &str, config: &ReaderConfig) -> Result<Table> {
    let lines = source.lines_from_str(text);
    Ok(fixtab::read(&lines, config)?)
}

/// Clean the file at `path` with `source` and read it as a table.
pub fn read_path(
    source: &LineSource,
    path: impl AsRef<Path>,
    config: &ReaderConfig,
) -> Result<Table> {
    let lines = source.lines_from_path(path)?;
    Ok(fixtab::read(&lines, config)?)
}
