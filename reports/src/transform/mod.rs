//! Transformation module.
//!
//! - Grouper: rows to per-group averages
//! - Pipeline: load, aggregate and render in one call

pub mod grouper;
pub mod pipeline;

pub use grouper::{aggregate, Aggregator};
pub use pipeline::*;
