//! Group rows by a key column and average a value column.
//!
//! ```text
//! Rows                                   ReportTable (avg desc)
//! ┌──────────────────────────────┐      ┌──────────────────────┐
//! │ brand: apple,   rating: 4.9  │      │ samsung  4.7         │
//! │ brand: samsung, rating: 4.8  │  →   │ apple    4.5         │
//! │ brand: apple,   rating: 4.1  │      │ xiaomi   4.5         │
//! │ ...                          │      └──────────────────────┘
//! └──────────────────────────────┘
//! ```
//!
//! Steps: project each row onto the two columns, parse and accumulate the
//! values per key, reduce to a rounded mean, then sort highest first.
//! Groups with equal averages keep the order their keys first appeared in.

use indexmap::IndexMap;
use log::debug;

use crate::error::{AggregateError, AggregateResult};
use crate::models::{AggregateRow, ProjectedRow, ReportTable, Row};

/// Values collected per group key, in first-seen key order.
type GroupAccumulator = IndexMap<String, Vec<f64>>;

/// Averages `value_field` per distinct `group_key_field`.
///
/// All accumulation state lives inside a single [`Aggregator::aggregate`]
/// call, so one aggregator can be reused for any number of datasets.
#[derive(Debug, Clone)]
pub struct Aggregator {
    group_key_field: String,
    value_field: String,
}

impl Aggregator {
    pub fn new(group_key_field: impl Into<String>, value_field: impl Into<String>) -> Self {
        Self {
            group_key_field: group_key_field.into(),
            value_field: value_field.into(),
        }
    }

    /// Reduce each row to the group key and value columns.
    ///
    /// Fails on the first row lacking either column.
    pub fn project(&self, rows: &[Row]) -> AggregateResult<Vec<ProjectedRow>> {
        rows.iter()
            .enumerate()
            .map(|(i, row)| {
                Ok(ProjectedRow {
                    key: field(row, i, &self.group_key_field)?.to_string(),
                    value: field(row, i, &self.value_field)?.to_string(),
                })
            })
            .collect()
    }

    /// Build the report table for `rows`.
    pub fn aggregate(&self, rows: &[Row]) -> AggregateResult<ReportTable> {
        let projected = self.project(rows)?;

        let mut groups = GroupAccumulator::new();
        for (i, row) in projected.into_iter().enumerate() {
            let value = parse_value(&row.value).ok_or_else(|| AggregateError::InvalidNumber {
                row: i,
                column: self.value_field.clone(),
                value: row.value.clone(),
            })?;
            groups.entry(row.key).or_default().push(value);
        }

        debug!(
            "{} rows in {} groups by '{}'",
            rows.len(),
            groups.len(),
            self.group_key_field
        );

        let mut table = ReportTable::new(&self.group_key_field, &self.value_field);
        table.rows = groups
            .into_iter()
            .map(|(key, values)| AggregateRow::new(key, round2(mean(&values))))
            .collect();

        // Stable: equal averages keep first-seen key order.
        table.rows.sort_by(|a, b| b.average.total_cmp(&a.average));

        Ok(table)
    }
}

/// Group `rows` by `group_key_field` and average `value_field`.
pub fn aggregate(rows: &[Row], group_key_field: &str, value_field: &str) -> AggregateResult<ReportTable> {
    Aggregator::new(group_key_field, value_field).aggregate(rows)
}

fn field<'a>(row: &'a Row, index: usize, column: &str) -> AggregateResult<&'a str> {
    row.get(column)
        .map(String::as_str)
        .ok_or_else(|| AggregateError::MissingColumn {
            row: index,
            column: column.to_string(),
        })
}

fn parse_value(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok()
}

fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

/// Above this magnitude an `f64` has no hundredths left to round.
const ROUNDING_LIMIT: f64 = 1e15;

/// Round to two decimal places, halves away from zero.
fn round2(x: f64) -> f64 {
    if !x.is_finite() || x.abs() >= ROUNDING_LIMIT {
        return x;
    }
    (x * 100.0).round() / 100.0
}
