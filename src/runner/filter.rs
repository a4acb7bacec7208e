//! Column filtering by id list and pattern

use crate::error::{SelectionError, SelectionResult};
use crate::netprofiler::Column;
use regex::{Regex, RegexBuilder};

/// Restricts a column list to the requested ids and/or a key/label pattern
#[derive(Debug, Clone, Default)]
pub struct ColumnFilter {
    ids: Vec<String>,
    pattern: Option<Regex>,
}

impl ColumnFilter {
    /// Build a filter.
    ///
    /// `ids` entries may be numeric column ids or column keys; blank entries
    /// are ignored. `pattern` is a case-insensitive regular expression.
    pub fn new(ids: Option<&[String]>, pattern: Option<&str>) -> SelectionResult<Self> {
        let ids = ids
            .unwrap_or_default()
            .iter()
            .map(|id| id.trim().to_string())
            .filter(|id| !id.is_empty())
            .collect();

        let pattern = pattern
            .map(|p| {
                RegexBuilder::new(p)
                    .case_insensitive(true)
                    .build()
                    .map_err(|e| SelectionError::InvalidFilter {
                        pattern: p.to_string(),
                        error: e.to_string(),
                    })
            })
            .transpose()?;

        Ok(ColumnFilter { ids, pattern })
    }

    /// Apply the filter. Every requested id must match at least one column.
    pub fn apply(&self, columns: Vec<Column>) -> SelectionResult<Vec<Column>> {
        let mut columns = columns;

        if !self.ids.is_empty() {
            let missing: Vec<&str> = self
                .ids
                .iter()
                .filter(|id| !columns.iter().any(|c| matches_id(c, id)))
                .map(String::as_str)
                .collect();
            if !missing.is_empty() {
                return Err(SelectionError::UnknownColumns(missing.join(", ")));
            }

            columns.retain(|c| self.ids.iter().any(|id| matches_id(c, id)));
        }

        if let Some(pattern) = &self.pattern {
            columns.retain(|c| pattern.is_match(&c.key()) || pattern.is_match(&c.label));
        }

        Ok(columns)
    }
}

fn matches_id(column: &Column, id: &str) -> bool {
    column.id.to_string() == id || column.key().eq_ignore_ascii_case(id)
}
