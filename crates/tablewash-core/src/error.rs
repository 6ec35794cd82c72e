use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CleanError {
    #[error("input file not found: {}", .path.display())]
    MissingFile { path: PathBuf },

    #[error("{} is not valid {} text", .path.display(), .encoding)]
    Decode {
        path: PathBuf,
        encoding: &'static str,
    },

    #[error("columns {originals:?} normalize to the same name '{normalized}'")]
    NameCollision {
        normalized: String,
        originals: Vec<String>,
    },

    #[error("unrecognized encoding '{label}' (expected utf8 or latin1)")]
    UnknownEncoding { label: String },

    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Polars operation failed: {0}")]
    Polars(#[from] polars::error::PolarsError),

    #[error("Config parse error: {0}")]
    Config(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, CleanError>;
