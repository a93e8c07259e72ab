//! CSV loader.
//!
//! Reads named files from a data directory and concatenates their records
//! into one [`Dataset`]. Every value stays a string; numbers are only
//! interpreted later by the aggregator.

use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::error::{LoadError, LoadResult};
use crate::models::{Dataset, Row};

/// Directory file names are resolved against (relative to current dir)
pub const DEFAULT_DATA_DIR: &str = "data";

/// Loads CSV files from a base directory.
#[derive(Debug, Clone)]
pub struct Loader {
    base_dir: PathBuf,
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

impl Loader {
    /// Create a loader reading from [`DEFAULT_DATA_DIR`]
    pub fn new() -> Self {
        Self::with_dir(DEFAULT_DATA_DIR)
    }

    /// Create a loader reading from a custom directory
    pub fn with_dir(dir: impl AsRef<Path>) -> Self {
        Self {
            base_dir: dir.as_ref().to_path_buf(),
        }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Load every file in order into a fresh dataset.
    ///
    /// The first missing or unreadable file aborts the whole load; no
    /// partial dataset is returned.
    pub fn load<S: AsRef<str>>(&self, file_names: &[S]) -> LoadResult<Dataset> {
        let mut dataset = Dataset::new();
        self.load_into(file_names, &mut dataset)?;
        Ok(dataset)
    }

    /// Append the rows of every file to an existing dataset.
    ///
    /// Repeated calls with the same names keep growing `dataset`. On error
    /// `dataset` is left untouched.
    pub fn load_into<S: AsRef<str>>(&self, file_names: &[S], dataset: &mut Dataset) -> LoadResult<()> {
        let mut loaded = Dataset::new();
        for name in file_names {
            let path = self.base_dir.join(name.as_ref());
            let rows = read_file(&path)?;
            debug!("{}: {} rows", path.display(), rows.len());
            loaded.extend(rows);
        }

        info!("Loaded {} rows from {} file(s)", loaded.len(), file_names.len());
        dataset.extend(loaded);
        Ok(())
    }
}

/// Load files from [`DEFAULT_DATA_DIR`].
pub fn load<S: AsRef<str>>(file_names: &[S]) -> LoadResult<Dataset> {
    Loader::new().load(file_names)
}

/// Open and parse a single CSV file.
fn read_file(path: &Path) -> LoadResult<Vec<Row>> {
    let file = File::open(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => LoadError::FileNotFound {
            path: path.to_path_buf(),
        },
        _ => LoadError::Io(e),
    })?;

    parse_rows(file).map_err(|source| LoadError::Csv {
        path: path.to_path_buf(),
        source,
    })
}

/// Parse CSV with a header row into rows keyed by header names.
///
/// Short records lack their trailing fields; surplus fields are dropped.
pub fn parse_rows<R: Read>(reader: R) -> Result<Vec<Row>, csv::Error> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers = rdr.headers()?.clone();

    let mut rows = Vec::new();
    for record in rdr.records() {
        let record = record?;
        let row: Row = headers
            .iter()
            .zip(record.iter())
            .map(|(h, v)| (h.to_string(), v.to_string()))
            .collect();
        rows.push(row);
    }

    Ok(rows)
}
