//! Domain models for the report pipeline.
//!
//! - [`Row`] / [`Dataset`] - raw CSV records, all values kept as strings
//! - [`ProjectedRow`] - a row reduced to the group key and the value column
//! - [`AggregateRow`] / [`ReportTable`] - per-group averages, ready to render
//! - [`ReportKind`] - the report selectors known to the CLI

use indexmap::IndexMap;

// =============================================================================
// Raw Records
// =============================================================================

/// One CSV record: field name to raw string value, in header order.
pub type Row = IndexMap<String, String>;

/// All records from every loaded file, in file order then row order.
pub type Dataset = Vec<Row>;

/// A row restricted to the two requested columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectedRow {
    /// Literal value of the group-key column.
    pub key: String,
    /// Unparsed value of the column being averaged.
    pub value: String,
}

// =============================================================================
// Aggregated Output
// =============================================================================

/// Average of one group.
#[derive(Debug, Clone, PartialEq)]
pub struct AggregateRow {
    pub key: String,
    /// Mean of the group's values, rounded to two decimal places.
    pub average: f64,
}

impl AggregateRow {
    pub fn new(key: impl Into<String>, average: f64) -> Self {
        Self {
            key: key.into(),
            average,
        }
    }
}

/// Per-group averages sorted by average, highest first.
///
/// Carries the column names it was built from so the renderer can label
/// the header without the caller repeating them.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportTable {
    pub key_column: String,
    pub value_column: String,
    pub rows: Vec<AggregateRow>,
}

impl ReportTable {
    pub fn new(key_column: impl Into<String>, value_column: impl Into<String>) -> Self {
        Self {
            key_column: key_column.into(),
            value_column: value_column.into(),
            rows: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Average recorded for `key`, if the group exists.
    pub fn average_of(&self, key: &str) -> Option<f64> {
        self.rows.iter().find(|r| r.key == key).map(|r| r.average)
    }
}

// =============================================================================
// Report Selectors
// =============================================================================

/// Reports that can be requested by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportKind {
    /// Average `rating` per `brand`.
    AverageRating,
}

impl ReportKind {
    /// Look up a report by its CLI name. Unknown names return `None`.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "average-rating" => Some(ReportKind::AverageRating),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ReportKind::AverageRating => "average-rating",
        }
    }

    /// `(group key column, value column)` for this report.
    pub fn columns(&self) -> (&'static str, &'static str) {
        match self {
            ReportKind::AverageRating => ("brand", "rating"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_kind_lookup() {
        let kind = ReportKind::from_name("average-rating").unwrap();
        assert_eq!(kind, ReportKind::AverageRating);
        assert_eq!(kind.columns(), ("brand", "rating"));
        assert_eq!(kind.name(), "average-rating");
    }

    #[test]
    fn test_unknown_report_kind() {
        assert_eq!(ReportKind::from_name("average-price"), None);
        assert_eq!(ReportKind::from_name("Average-Rating"), None);
        assert_eq!(ReportKind::from_name(""), None);
    }

    #[test]
    fn test_report_table_lookup() {
        let mut table = ReportTable::new("brand", "rating");
        assert!(table.is_empty());

        table.rows.push(AggregateRow::new("samsung", 4.7));
        table.rows.push(AggregateRow::new("apple", 4.5));

        assert_eq!(table.len(), 2);
        assert_eq!(table.average_of("apple"), Some(4.5));
        assert_eq!(table.average_of("nokia"), None);
    }
}
