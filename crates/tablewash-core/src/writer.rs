use std::fs::File;
use std::path::Path;

use polars::prelude::*;
use tracing::info;

use crate::error::Result;

/// Serialize the table as comma-separated UTF-8 text with a header row
/// and no index column. Overwrites `path`; a crash mid-write leaves a
/// partial file.
pub fn write_table(df: &mut DataFrame, path: &Path) -> Result<()> {
    let mut file = File::create(path)?;
    CsvWriter::new(&mut file).include_header(true).finish(df)?;

    info!(
        rows = df.height(),
        columns = df.width(),
        path = %path.display(),
        "wrote cleaned table"
    );
    Ok(())
}
