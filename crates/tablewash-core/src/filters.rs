use polars::prelude::*;
use tracing::info;

use crate::error::Result;

/// Drop every row containing at least one null cell. An all-null or
/// empty table yields an empty table, never an error.
pub fn drop_incomplete_rows(df: &DataFrame) -> Result<(DataFrame, usize)> {
    let kept = df.drop_nulls::<String>(None)?;
    let dropped = df.height() - kept.height();

    info!(
        rows = kept.height(),
        columns = kept.width(),
        dropped,
        "dropped rows with missing values"
    );
    Ok((kept, dropped))
}

/// Drop exact-duplicate rows (null cells compare equal), keeping the
/// first occurrence and preserving the relative order of retained rows.
pub fn drop_duplicate_rows(df: &DataFrame) -> Result<(DataFrame, usize)> {
    let kept = df
        .clone()
        .lazy()
        .unique_stable(None, UniqueKeepStrategy::First)
        .collect()?;
    let removed = df.height() - kept.height();

    info!(
        rows = kept.height(),
        columns = kept.width(),
        removed,
        "removed duplicate rows"
    );
    Ok((kept, removed))
}
