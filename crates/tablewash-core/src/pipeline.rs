use std::path::Path;

use tracing::info;

use crate::coerce;
use crate::columns::{self, CollisionPolicy};
use crate::error::Result;
use crate::filters;
use crate::loader::{self, TextEncoding};
use crate::report::{CleanReport, TableShape};
use crate::writer;

/// Knobs for one cleaning run. The defaults give the strict-UTF-8 run
/// with no date coercion and a hard error on column-name collisions.
#[derive(Debug, Clone, Default)]
pub struct CleanOptions {
    pub encoding: TextEncoding,
    /// When set, parse this column into dates after column names have
    /// been normalized (so the name is matched in normalized form).
    pub date_column: Option<String>,
    pub on_name_collision: CollisionPolicy,
}

/// Run the full pipeline: load, drop incomplete rows, drop duplicates,
/// normalize column names, optionally coerce the date column, write.
///
/// A loader failure aborts the run before anything else happens; the
/// output path is only created or replaced once every in-memory step has
/// succeeded.
pub fn clean_file(input: &Path, output: &Path, options: &CleanOptions) -> Result<CleanReport> {
    let df = loader::load_table(input, options.encoding)?;
    let loaded = TableShape::from(&df);

    let (df, incomplete_rows_dropped) = filters::drop_incomplete_rows(&df)?;
    let (df, duplicate_rows_dropped) = filters::drop_duplicate_rows(&df)?;

    let normalized = columns::normalize_columns(df, options.on_name_collision)?;

    let (mut df, date_coercion) = match options.date_column.as_deref() {
        Some(column) => coerce::coerce_date_column(normalized.df, column)?,
        None => (normalized.df, None),
    };

    writer::write_table(&mut df, output)?;

    let report = CleanReport {
        input: input.to_path_buf(),
        output: output.to_path_buf(),
        loaded,
        incomplete_rows_dropped,
        duplicate_rows_dropped,
        renamed_columns: normalized.renamed,
        dropped_columns: normalized.dropped,
        date_coercion,
        written: TableShape::from(&df),
    };

    info!(
        rows_in = report.loaded.rows,
        rows_out = report.written.rows,
        "cleaning run complete"
    );
    Ok(report)
}
