use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::columns::CollisionPolicy;
use crate::error::Result;
use crate::loader::TextEncoding;
use crate::pipeline::CleanOptions;

/// On-disk run configuration.
///
/// ```toml
/// input = "data.csv"
/// output = "cleaned_data.csv"
/// encoding = "latin1"
/// date_column = "date"
/// on_name_collision = "keep-first"
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CleanConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    #[serde(default)]
    pub encoding: TextEncoding,
    #[serde(default)]
    pub date_column: Option<String>,
    #[serde(default)]
    pub on_name_collision: CollisionPolicy,
}

impl CleanConfig {
    pub fn from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    pub fn options(&self) -> CleanOptions {
        CleanOptions {
            encoding: self.encoding,
            date_column: self.date_column.clone(),
            on_name_collision: self.on_name_collision,
        }
    }
}
