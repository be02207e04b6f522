//! Column name resolution.
//!
//! Names come from one of three places, in order of precedence: an explicit
//! list from the config, the header text over each span, or generated
//! `col1`, `col2`, ... names. The include/exclude filter is then applied by
//! name, keeping the original column order.

use std::collections::HashMap;

use crate::boundary::RawColumn;
use crate::config::NameFilter;
use crate::error::{ReadError, Result};
use crate::table::Column;

/// Generated name for the column at 0-based `index`.
pub fn auto_name(index: usize) -> String {
    format!("col{}", index + 1)
}

/// Resolve names for `raw` columns and mark which ones `filter` keeps.
///
/// `header_text` says whether the raw column text came from a header line
/// (and may be used as names) or from a data line (and must not be).
///
/// Every column is returned, in span order; filtered-out columns have
/// `included == false`.
pub fn resolve(
    raw: &[RawColumn],
    header_text: bool,
    explicit: Option<&[String]>,
    filter: &NameFilter,
) -> Result<Vec<Column>> {
    let names: Vec<String> = match explicit {
        Some(names) if names.len() != raw.len() => {
            return Err(ReadError::NamesLengthMismatch {
                given: names.len(),
                detected: raw.len(),
            });
        }
        Some(names) => names.to_vec(),
        None if header_text => raw
            .iter()
            .enumerate()
            .map(|(i, col)| {
                if col.text.is_empty() {
                    auto_name(i)
                } else {
                    col.text.clone()
                }
            })
            .collect(),
        None => (0..raw.len()).map(auto_name).collect(),
    };

    check_unique(&names)?;

    Ok(raw
        .iter()
        .zip(names)
        .enumerate()
        .map(|(index, (col, name))| Column {
            included: filter.retains(&name),
            name,
            span: col.span,
            index,
        })
        .collect())
}

fn check_unique(names: &[String]) -> Result<()> {
    let mut seen: HashMap<&str, usize> = HashMap::with_capacity(names.len());
    for (i, name) in names.iter().enumerate() {
        if let Some(&first) = seen.get(name.as_str()) {
            return Err(ReadError::NameConflict {
                name: name.clone(),
                first,
                second: i,
            });
        }
        seen.insert(name.as_str(), i);
    }
    Ok(())
}
