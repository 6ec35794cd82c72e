use std::fs;
use std::io::Cursor;
use std::path::Path;
use std::str::FromStr;

use encoding_rs::{Encoding, UTF_8, WINDOWS_1252};
use polars::prelude::*;
use serde::Deserialize;
use tracing::info;

use crate::error::{CleanError, Result};

/// Text encoding the input file is assumed to use.
///
/// `Latin1` maps to windows-1252, the superset that exported "latin1"
/// data almost always means in practice. Every byte sequence decodes
/// under it, so decode failures can only occur under `Utf8`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextEncoding {
    #[default]
    Utf8,
    Latin1,
}

impl TextEncoding {
    fn as_encoding(&self) -> &'static Encoding {
        match self {
            TextEncoding::Utf8 => UTF_8,
            TextEncoding::Latin1 => WINDOWS_1252,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TextEncoding::Utf8 => "utf8",
            TextEncoding::Latin1 => "latin1",
        }
    }
}

impl FromStr for TextEncoding {
    type Err = CleanError;

    fn from_str(label: &str) -> Result<Self> {
        match label.trim().to_ascii_lowercase().as_str() {
            "utf8" | "utf-8" => Ok(TextEncoding::Utf8),
            "latin1" | "latin-1" | "iso-8859-1" => Ok(TextEncoding::Latin1),
            _ => Err(CleanError::UnknownEncoding {
                label: label.to_string(),
            }),
        }
    }
}

/// Read `path` as comma-separated text with the first line as the header
/// row. The file is decoded in full before parsing so that an encoding
/// mismatch surfaces as a `Decode` error rather than garbled cells.
pub fn load_table(path: &Path, encoding: TextEncoding) -> Result<DataFrame> {
    let bytes = fs::read(path).map_err(|err| match err.kind() {
        std::io::ErrorKind::NotFound => CleanError::MissingFile {
            path: path.to_path_buf(),
        },
        _ => CleanError::Io(err),
    })?;

    let (text, _, had_errors) = encoding.as_encoding().decode(&bytes);
    if had_errors {
        return Err(CleanError::Decode {
            path: path.to_path_buf(),
            encoding: encoding.label(),
        });
    }

    let cursor = Cursor::new(text.as_bytes());
    let df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(100))
        .into_reader_with_file_handle(cursor)
        .finish()?;

    info!(
        rows = df.height(),
        columns = df.width(),
        path = %path.display(),
        "loaded input table"
    );
    Ok(df)
}
