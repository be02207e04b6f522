//! Bad-value replacement.
//!
//! Fixed-width tables often spell "no value" with a sentinel such as `--`,
//! `N/A` or `-999`. A [`FillRule`] swaps such a sentinel for a fill value and
//! marks the cell as masked so callers can tell a real value from a filled one.
//!
//! Rules without their own column list apply to every included column that
//! passes the config's fill filter. When several rules name the same bad value
//! for the same column, the earliest rule wins.

use std::collections::HashMap;

use serde::Deserialize;

use crate::config::NameFilter;
use crate::table::{Column, Row};

/// Replace `bad` with `fill` in the given columns (or all columns).
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FillRule {
    /// Value to look for, compared after whitespace trimming.
    pub bad: String,
    /// Replacement value.
    pub fill: String,
    /// Columns the rule applies to; `None` means the default fill set.
    #[serde(default)]
    pub columns: Option<Vec<String>>,
}

impl FillRule {
    /// Create a rule that applies to the default fill set.
    pub fn new(bad: impl Into<String>, fill: impl Into<String>) -> Self {
        FillRule {
            bad: bad.into(),
            fill: fill.into(),
            columns: None,
        }
    }

    /// Restrict the rule to the named columns.
    pub fn columns<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.columns = Some(names.into_iter().map(Into::into).collect());
        self
    }

    fn targets(&self, name: &str, default_set: &NameFilter) -> bool {
        match &self.columns {
            Some(names) => names.iter().any(|n| n == name),
            None => default_set.retains(name),
        }
    }
}

/// Per-column replacement tables, resolved once against the table's columns.
#[derive(Clone, Debug, Default)]
pub(crate) struct FillPlan {
    /// One map per included column, positionally aligned with the row values.
    per_column: Vec<HashMap<String, String>>,
}

impl FillPlan {
    pub(crate) fn new(columns: &[Column], rules: &[FillRule], default_set: &NameFilter) -> Self {
        if rules.is_empty() {
            return FillPlan::default();
        }

        let per_column = columns
            .iter()
            .map(|col| {
                let mut map = HashMap::new();
                for rule in rules.iter().filter(|r| r.targets(&col.name, default_set)) {
                    map.entry(rule.bad.clone())
                        .or_insert_with(|| rule.fill.clone());
                }
                map
            })
            .collect();

        FillPlan { per_column }
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.per_column.iter().all(HashMap::is_empty)
    }

    /// Replace bad values in `row` and mark them masked.
    pub(crate) fn apply(&self, row: &mut Row) {
        for (i, map) in self.per_column.iter().enumerate() {
            if let Some(fill) = row.values.get(i).and_then(|v| map.get(v)) {
                row.values[i] = fill.clone();
                row.masked[i] = true;
            }
        }
    }
}
