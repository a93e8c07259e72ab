//! # Avg-rating - grouped averages over CSV files
//!
//! Reads product catalogs from `data/`, groups the records by one column,
//! averages another and prints the result as a grid table.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │  CSV files  │────▶│   Loader    │────▶│ Aggregator  │────▶│  Renderer   │
//! │   (data/)   │     │  (rows)     │     │ (avg desc)  │     │   (grid)    │
//! └─────────────┘     └─────────────┘     └─────────────┘     └─────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use avg_rating::build_report;
//!
//! fn main() {
//!     let table = build_report(&["products.csv"], ("brand", "rating")).unwrap();
//!     println!("{}", table);
//! }
//! ```
//!
//! ## Modules
//!
//! - [`error`] - Error types per stage
//! - [`models`] - Rows, report tables and report selectors
//! - [`loader`] - CSV loading from the data directory
//! - [`transform`] - Grouping, averaging and the report pipeline
//! - [`render`] - Grid table output

// Core modules
pub mod error;
pub mod models;

// Stages
pub mod loader;
pub mod transform;
pub mod render;

// =============================================================================
// Re-exports - Error types
// =============================================================================

pub use error::{
    AggregateError,
    AggregateResult,
    LoadError,
    LoadResult,
    ReportError,
    ReportResult,
};

// =============================================================================
// Re-exports - Models
// =============================================================================

pub use models::{
    AggregateRow,
    Dataset,
    ProjectedRow,
    ReportKind,
    ReportTable,
    Row,
};

// =============================================================================
// Re-exports - Stages
// =============================================================================

pub use loader::{load, Loader, DEFAULT_DATA_DIR};
pub use transform::{aggregate, Aggregator};
pub use render::{render, render_rows};

// =============================================================================
// Re-exports - Pipeline
// =============================================================================

pub use transform::pipeline::{
    build_report,
    build_report_with,
    ReportOptions,
};
