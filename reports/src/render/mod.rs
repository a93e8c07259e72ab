//! Grid table rendering.
//!
//! ```text
//! +---------+----------+
//! | brand   |   rating |
//! +=========+==========+
//! | samsung |      4.7 |
//! +---------+----------+
//! | apple   |     4.55 |
//! +---------+----------+
//! ```
//!
//! Keys are left-aligned, averages right-aligned on the decimal point.
//! Headers get two extra columns of room. An empty table renders as `""`.

use crate::models::{AggregateRow, ReportTable};

/// Padding added to header widths when sizing columns
const HEADER_PADDING: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq)]
enum Align {
    Left,
    Right,
}

/// Render a report table as a grid.
pub fn render(table: &ReportTable) -> String {
    render_rows(&table.rows, &table.key_column, &table.value_column)
}

/// Render rows under the given column headers.
pub fn render_rows(rows: &[AggregateRow], key_header: &str, value_header: &str) -> String {
    if rows.is_empty() {
        return String::new();
    }

    let keys: Vec<String> = rows.iter().map(|r| r.key.clone()).collect();
    let averages = align_decimals(rows.iter().map(|r| format_number(r.average)).collect());

    let columns = [
        (key_header, keys, Align::Left),
        (value_header, averages, Align::Right),
    ];

    let widths: Vec<usize> = columns
        .iter()
        .map(|(header, cells, _)| {
            cells
                .iter()
                .map(|c| text_width(c))
                .chain(std::iter::once(text_width(header) + HEADER_PADDING))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let border = separator(&widths, '-');
    let mut lines = Vec::with_capacity(rows.len() * 2 + 3);

    lines.push(border.clone());
    lines.push(line(
        columns
            .iter()
            .zip(&widths)
            .map(|((header, _, align), w)| pad(header, *w, *align)),
    ));
    lines.push(separator(&widths, '='));

    for i in 0..rows.len() {
        lines.push(line(
            columns
                .iter()
                .zip(&widths)
                .map(|((_, cells, align), w)| pad(&cells[i], *w, *align)),
        ));
        lines.push(border.clone());
    }

    lines.join("\n")
}

/// Shortest representation that round-trips: `4.5`, `714`, `4.03`.
pub fn format_number(value: f64) -> String {
    value.to_string()
}

/// Right-pad numbers so their decimal points line up once right-aligned.
fn align_decimals(cells: Vec<String>) -> Vec<String> {
    let fraction_len = |s: &str| s.find('.').map_or(0, |dot| s.len() - dot);
    let max_fraction = cells.iter().map(|c| fraction_len(c.as_str())).max().unwrap_or(0);

    cells
        .into_iter()
        .map(|c| {
            let missing = max_fraction - fraction_len(c.as_str());
            format!("{}{}", c, " ".repeat(missing))
        })
        .collect()
}

fn text_width(s: &str) -> usize {
    s.chars().count()
}

fn pad(text: &str, width: usize, align: Align) -> String {
    let fill = " ".repeat(width.saturating_sub(text_width(text)));
    match align {
        Align::Left => format!("{}{}", text, fill),
        Align::Right => format!("{}{}", fill, text),
    }
}

fn separator(widths: &[usize], fill: char) -> String {
    let segments: Vec<String> = widths
        .iter()
        .map(|w| fill.to_string().repeat(w + 2))
        .collect();
    format!("+{}+", segments.join("+"))
}

fn line(cells: impl Iterator<Item = String>) -> String {
    let cells: Vec<String> = cells.map(|c| format!(" {} ", c)).collect();
    format!("|{}|", cells.join("|"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(rows: &[(&str, f64)]) -> ReportTable {
        let mut t = ReportTable::new("brand", "rating");
        t.rows = rows.iter().map(|(k, v)| AggregateRow::new(*k, *v)).collect();
        t
    }

    #[test]
    fn test_empty_table_is_empty_string() {
        assert_eq!(render(&table(&[])), "");
        assert_eq!(render_rows(&[], "brand", "rating"), "");
    }

    #[test]
    fn test_grid_layout() {
        let out = render(&table(&[("samsung", 4.7), ("apple", 4.5)]));
        let expected = "\
+---------+----------+
| brand   |   rating |
+=========+==========+
| samsung |      4.7 |
+---------+----------+
| apple   |      4.5 |
+---------+----------+";
        assert_eq!(out, expected);
    }

    #[test]
    fn test_number_formatting() {
        assert_eq!(format_number(4.5), "4.5");
        assert_eq!(format_number(4.03), "4.03");
        assert_eq!(format_number(714.0), "714");
        assert_eq!(format_number(1099.0), "1099");
    }

    #[test]
    fn test_decimal_alignment() {
        let out = render(&table(&[("samsung", 10.0), ("apple", 4.55), ("xiaomi", 4.5)]));
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(lines[3], "| samsung |    10    |");
        assert_eq!(lines[5], "| apple   |     4.55 |");
        assert_eq!(lines[7], "| xiaomi  |     4.5  |");
    }

    #[test]
    fn test_wide_values_grow_columns() {
        let out = render_rows(
            &[AggregateRow::new("galaxy z flip 5", 123456.78)],
            "name",
            "rating",
        );
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(lines[0], "+-----------------+-----------+");
        assert_eq!(lines[1], "| name            |    rating |");
        assert_eq!(lines[3], "| galaxy z flip 5 | 123456.78 |");
    }

    #[test]
    fn test_non_ascii_keys_align() {
        let out = render(&table(&[("sony ü", 4.0), ("apple", 3.5)]));
        let widths: Vec<usize> = out.lines().map(|l| l.chars().count()).collect();
        assert!(widths.iter().all(|w| *w == widths[0]));
    }
}
