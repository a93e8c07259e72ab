//! Error types for the report pipeline.
//!
//! Each stage has its own error enum:
//!
//! - [`LoadError`] - reading CSV files from the data directory
//! - [`AggregateError`] - projecting, parsing and averaging rows
//! - [`ReportError`] - top-level wrapper returned by the facade
//!
//! Conversion into [`ReportError`] is automatic via `From`, so `?` works
//! across stage boundaries.

use std::path::PathBuf;

use thiserror::Error;

// =============================================================================
// Load Errors
// =============================================================================

/// Errors while loading CSV files.
#[derive(Debug, Error)]
pub enum LoadError {
    /// A referenced file does not exist.
    #[error("File not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    /// Any other I/O failure while opening a file.
    #[error("Failed to read file: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed CSV content.
    #[error("Invalid CSV in {}: {source}", path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

// =============================================================================
// Aggregation Errors
// =============================================================================

/// Errors while grouping and averaging rows.
#[derive(Debug, Error)]
pub enum AggregateError {
    /// A row lacks one of the requested columns.
    #[error("Row {row}: missing column '{column}'")]
    MissingColumn { row: usize, column: String },

    /// A value could not be parsed as a number.
    #[error("Row {row}, column '{column}': '{value}' is not a number")]
    InvalidNumber {
        row: usize,
        column: String,
        value: String,
    },
}

// =============================================================================
// Report Errors (top-level)
// =============================================================================

/// Top-level error returned by [`crate::transform::pipeline::build_report`].
#[derive(Debug, Error)]
pub enum ReportError {
    /// Loading failed.
    #[error("Load error: {0}")]
    Load(#[from] LoadError),

    /// Aggregation failed.
    #[error("Aggregation error: {0}")]
    Aggregate(#[from] AggregateError),
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result type for load operations.
pub type LoadResult<T> = Result<T, LoadError>;

/// Result type for aggregation operations.
pub type AggregateResult<T> = Result<T, AggregateError>;

/// Result type for the full report pipeline.
pub type ReportResult<T> = Result<T, ReportError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_conversion_chain() {
        let load_err = LoadError::FileNotFound {
            path: PathBuf::from("data/missing.csv"),
        };
        let report_err: ReportError = load_err.into();
        assert!(matches!(report_err, ReportError::Load(LoadError::FileNotFound { .. })));
        assert!(report_err.to_string().contains("missing.csv"));

        let agg_err = AggregateError::MissingColumn {
            row: 3,
            column: "rating".into(),
        };
        let report_err: ReportError = agg_err.into();
        assert!(report_err.to_string().contains("rating"));
    }

    #[test]
    fn test_invalid_number_format() {
        let err = AggregateError::InvalidNumber {
            row: 0,
            column: "rating".into(),
            value: "n/a".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("Row 0"));
        assert!(msg.contains("'rating'"));
        assert!(msg.contains("'n/a'"));
    }

    #[test]
    fn test_io_error_from() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: LoadError = io.into();
        assert!(err.to_string().contains("denied"));
    }
}
