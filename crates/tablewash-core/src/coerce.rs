use chrono::{NaiveDate, NaiveDateTime};
use polars::prelude::*;
use tracing::{info, warn};

use crate::error::Result;
use crate::report::DateCoercion;

static DATETIME_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%d %H:%M:%S"];
static DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y"];

/// Parse one cell into epoch microseconds, trying datetime formats first
/// and date-only formats at midnight.
fn parse_datetime_micros(value: &str) -> Option<i64> {
    let trimmed = value.trim();
    for fmt in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, fmt) {
            return Some(dt.and_utc().timestamp_micros());
        }
    }
    for fmt in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, fmt) {
            return date
                .and_hms_opt(0, 0, 0)
                .map(|dt| dt.and_utc().timestamp_micros());
        }
    }
    None
}

/// Coerce the named column to `Datetime(Microseconds)` when it exists as
/// a string column. Values that fail to parse become null; this step
/// never fails a run. A missing or non-string column passes the table
/// through unchanged.
pub fn coerce_date_column(
    df: DataFrame,
    column: &str,
) -> Result<(DataFrame, Option<DateCoercion>)> {
    let Ok(col) = df.column(column) else {
        info!(column, "no such column, skipping date coercion");
        return Ok((df, None));
    };

    let Ok(values) = col.str() else {
        warn!(
            column,
            dtype = %col.dtype(),
            "date column is not string typed, leaving it as-is"
        );
        return Ok((df, None));
    };

    let mut parsed = 0usize;
    let mut failed = 0usize;
    let micros: Vec<Option<i64>> = values
        .into_iter()
        .map(|cell| match cell {
            None => None,
            Some(raw) => match parse_datetime_micros(raw) {
                Some(value) => {
                    parsed += 1;
                    Some(value)
                }
                None => {
                    failed += 1;
                    None
                }
            },
        })
        .collect();

    let series = Series::new(column.into(), micros)
        .cast(&DataType::Datetime(TimeUnit::Microseconds, None))?;

    let mut out = df;
    out.replace(column, series)?;

    info!(column, parsed, failed, "coerced date column");
    Ok((
        out,
        Some(DateCoercion {
            column: column.to_string(),
            parsed,
            failed,
        }),
    ))
}

#[cfg(test)]
mod tests {
    use polars::df;

    use super::*;

    #[test]
    fn parses_iso_dates_and_datetimes() {
        assert_eq!(parse_datetime_micros("2024-01-15"), Some(1_705_276_800_000_000));
        assert_eq!(
            parse_datetime_micros("2024-01-15 10:30:00"),
            Some(1_705_314_600_000_000)
        );
        assert_eq!(parse_datetime_micros(" 2024/01/15 "), Some(1_705_276_800_000_000));
        assert_eq!(parse_datetime_micros("not-a-date"), None);
        assert_eq!(parse_datetime_micros(""), None);
    }

    #[test]
    fn failed_cells_become_null() {
        let df = df!(
            "date" => ["2024-01-15", "not-a-date"],
            "v" => [1i64, 2]
        )
        .unwrap();

        let (out, coercion) = coerce_date_column(df, "date").unwrap();
        let coercion = coercion.expect("coercion should have run");
        assert_eq!(coercion.parsed, 1);
        assert_eq!(coercion.failed, 1);

        let date = out.column("date").unwrap();
        assert!(matches!(
            date.dtype(),
            DataType::Datetime(TimeUnit::Microseconds, None)
        ));
        assert_eq!(date.null_count(), 1);
    }

    #[test]
    fn missing_column_passes_table_through() {
        let df = df!("v" => [1i64]).unwrap();

        let (out, coercion) = coerce_date_column(df.clone(), "date").unwrap();
        assert!(coercion.is_none());
        assert!(out.equals(&df));
    }

    #[test]
    fn non_string_column_is_left_alone() {
        let df = df!("date" => [1i64, 2]).unwrap();

        let (out, coercion) = coerce_date_column(df, "date").unwrap();
        assert!(coercion.is_none());
        assert!(matches!(out.column("date").unwrap().dtype(), DataType::Int64));
    }
}
