use std::path::PathBuf;

use polars::prelude::DataFrame;
use serde::Serialize;

/// Row/column counts at a pipeline stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TableShape {
    pub rows: usize,
    pub columns: usize,
}

impl From<&DataFrame> for TableShape {
    fn from(df: &DataFrame) -> Self {
        Self {
            rows: df.height(),
            columns: df.width(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ColumnRename {
    pub from: String,
    pub to: String,
}

/// Outcome of the optional date-coercion step.
#[derive(Debug, Clone, Serialize)]
pub struct DateCoercion {
    pub column: String,
    pub parsed: usize,
    pub failed: usize,
}

/// Structured outcome of one cleaning run: the counts the original tool
/// surfaced only as console text, returned to the caller instead.
#[derive(Debug, Clone, Serialize)]
pub struct CleanReport {
    pub input: PathBuf,
    pub output: PathBuf,
    pub loaded: TableShape,
    pub incomplete_rows_dropped: usize,
    pub duplicate_rows_dropped: usize,
    pub renamed_columns: Vec<ColumnRename>,
    pub dropped_columns: Vec<String>,
    pub date_coercion: Option<DateCoercion>,
    pub written: TableShape,
}
