//! Fixtab - reader for fixed-width, delimiter-aligned text tables.
//!
//! Pretty-printed tables mark their columns by *position*: every row is cut
//! at the same character offsets, and a delimiter such as `|` only shows the
//! reader where those offsets are. Fixtab takes the offsets from one reference
//! line (the header, or the first data line when there is no header) and
//! replays them against every data line.
//!
//! # Quick Start
//!
//! ```rust
//! use fixtab::{read, ReaderConfig};
//!
//! let lines = [
//!     "|| Name ||   Phone ||         TCP||",
//!     "|  John  | 555-1234 |192.168.1.10X|",
//!     "|  Mary  | 555-2134 |192.168.1.12X|",
//!     "|   Bob  | 555-4527 | 192.168.1.9X|",
//! ];
//!
//! let table = read(&lines, &ReaderConfig::default()).unwrap();
//! assert_eq!(table.column_names(), vec!["Name", "Phone", "TCP"]);
//! assert_eq!(table.rows()[2][2], "192.168.1.9");
//! ```
//!
//! # Pipeline
//!
//! ```text
//! lines + ReaderConfig
//!   ├── header::locate      → header line index, data line range
//!   ├── boundary::extract   → column spans + header text
//!   ├── names::resolve      → column names, include/exclude filter
//!   └── split::split        → one Row per data line
//! ```
//!
//! The first three steps build a [`Layout`] once; the last step is a pure
//! function of the layout and one line.
//!
//! # Misaligned rows
//!
//! Data lines are cut at the reference line's offsets no matter what they
//! contain. A value that drifts across a boundary is chopped there, exactly
//! as if the table were cut with scissors at the header's marks. Short lines
//! give empty values; text past the last column is dropped.
//!
//! # Features
//!
//! - **`parallel`** - Enable [`read_par`], which splits rows on rayon's pool
//!
//! This crate does no I/O. Turning a file or string into clean lines (with
//! comments and blank lines removed) is the job of `fixtab-lines`.

pub mod boundary;
mod config;
mod error;
mod fill;
pub mod header;
pub mod names;
mod reader;
mod span;
pub mod split;
mod table;

pub use config::{
    HeaderMode, LineIndex, NameFilter, ReaderConfig, ReaderConfigBuilder, DEFAULT_DELIMITER,
};
pub use error::{ErrorKind, ReadError, Result};
pub use fill::FillRule;
pub use reader::{read, FixedWidthReader, HeaderInfo, Layout};
pub use span::ColumnSpan;
pub use table::{Column, Row, Table};

#[cfg(feature = "parallel")]
pub use reader::read_par;
