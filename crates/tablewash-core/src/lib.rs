pub mod coerce;
pub mod columns;
pub mod config;
pub mod error;
pub mod filters;
pub mod loader;
pub mod pipeline;
pub mod report;
pub mod writer;

pub use columns::CollisionPolicy;
pub use config::CleanConfig;
pub use error::{CleanError, Result};
pub use loader::{load_table, TextEncoding};
pub use pipeline::{clean_file, CleanOptions};
pub use report::{CleanReport, ColumnRename, DateCoercion, TableShape};
