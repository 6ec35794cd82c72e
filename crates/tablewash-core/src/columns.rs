use std::collections::hash_map::Entry;
use std::collections::HashMap;

use polars::prelude::*;
use serde::Deserialize;
use tracing::info;

use crate::error::{CleanError, Result};
use crate::report::ColumnRename;

/// What to do when two distinct column names normalize to the same
/// string. There is no sensible merge for colliding columns, so the
/// default refuses rather than silently losing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CollisionPolicy {
    /// Fail the run with a `NameCollision` error.
    #[default]
    Reject,
    /// Keep the first colliding column in original order, drop the rest.
    KeepFirst,
}

#[derive(Debug)]
pub struct NormalizedColumns {
    pub df: DataFrame,
    pub renamed: Vec<ColumnRename>,
    pub dropped: Vec<String>,
}

/// Canonical column name form: surrounding whitespace stripped, letters
/// lowercased, internal spaces replaced with underscores.
pub fn normalize_name(raw: &str) -> String {
    raw.trim().to_lowercase().replace(' ', "_")
}

/// Replace every column name with its normalized form, applying `policy`
/// when previously distinct names collide.
pub fn normalize_columns(df: DataFrame, policy: CollisionPolicy) -> Result<NormalizedColumns> {
    let original: Vec<String> = df
        .get_column_names()
        .iter()
        .map(|name| name.to_string())
        .collect();

    let mut seen: HashMap<String, String> = HashMap::new();
    let mut keep: Vec<bool> = Vec::with_capacity(original.len());
    let mut renamed = Vec::new();
    let mut dropped = Vec::new();

    for name in &original {
        let normalized = normalize_name(name);
        match seen.entry(normalized.clone()) {
            Entry::Vacant(entry) => {
                entry.insert(name.clone());
                if normalized != *name {
                    renamed.push(ColumnRename {
                        from: name.clone(),
                        to: normalized,
                    });
                }
                keep.push(true);
            }
            Entry::Occupied(entry) => match policy {
                CollisionPolicy::Reject => {
                    return Err(CleanError::NameCollision {
                        normalized,
                        originals: vec![entry.get().clone(), name.clone()],
                    });
                }
                CollisionPolicy::KeepFirst => {
                    dropped.push(name.clone());
                    keep.push(false);
                }
            },
        }
    }

    let mut out = if dropped.is_empty() {
        df
    } else {
        let kept: Vec<&str> = original
            .iter()
            .zip(&keep)
            .filter(|(_, keep)| **keep)
            .map(|(name, _)| name.as_str())
            .collect();
        df.select(kept)?
    };

    let new_names: Vec<String> = out
        .get_column_names()
        .iter()
        .map(|name| normalize_name(name))
        .collect();
    out.set_column_names(new_names.iter().map(|name| name.as_str()))?;

    info!(
        columns = out.width(),
        renamed = renamed.len(),
        dropped = dropped.len(),
        "normalized column names"
    );
    Ok(NormalizedColumns {
        df: out,
        renamed,
        dropped,
    })
}
