//! High-level report API.
//!
//! Combines the three stages behind one call: load the files, aggregate the
//! requested columns, render the grid.
//!
//! # Example
//!
//! ```rust,ignore
//! use avg_rating::build_report;
//!
//! let table = build_report(&["products1.csv", "products2.csv"], ("brand", "rating"))?;
//! println!("{}", table);
//! ```

use std::path::PathBuf;

use log::info;

use super::grouper::Aggregator;
use crate::error::ReportResult;
use crate::loader::{Loader, DEFAULT_DATA_DIR};
use crate::render::render;

/// Options for the report pipeline
#[derive(Debug, Clone, PartialEq)]
pub struct ReportOptions {
    /// Directory the file names are resolved against
    pub data_dir: PathBuf,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
        }
    }
}

/// Build a report from files under the default `data/` directory.
///
/// `columns` is `(group key column, value column)`.
pub fn build_report<S: AsRef<str>>(files: &[S], columns: (&str, &str)) -> ReportResult<String> {
    build_report_with(files, columns, &ReportOptions::default())
}

/// Build a report with explicit options.
///
/// Any failure aborts the whole report; nothing is rendered.
pub fn build_report_with<S: AsRef<str>>(
    files: &[S],
    columns: (&str, &str),
    options: &ReportOptions,
) -> ReportResult<String> {
    let (key_column, value_column) = columns;

    info!("Reading {} file(s) from {}", files.len(), options.data_dir.display());
    let rows = Loader::with_dir(&options.data_dir).load(files)?;

    info!("Averaging '{}' by '{}'", value_column, key_column);
    let table = Aggregator::new(key_column, value_column).aggregate(&rows)?;
    info!("{} groups", table.len());

    Ok(render(&table))
}
