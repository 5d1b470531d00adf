// src/normalize.rs
//! Turns raw table cells into clean path tokens and a member name.

use tracing::debug;

use crate::index::split_tokens;
use crate::ingest::{ExplicitPlan, Table, TableRow};
use crate::types::{BuildReport, RowIssue};

/// A row reduced to its hierarchy path and the person it names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedRow {
    pub line: u64,
    /// Non-empty, trimmed tokens, top to bottom.
    pub path: Vec<String>,
    pub name: String,
}

/// Trimmed cell value, or `None` when the cell carries no data.
///
/// Absent cells, whitespace and spreadsheet `NaN` exports count as missing.
#[must_use]
pub fn clean_cell(cell: Option<&str>) -> Option<String> {
    let value = cell?.trim();
    if value.is_empty() || value.eq_ignore_ascii_case("nan") {
        None
    } else {
        Some(value.to_string())
    }
}

/// Builds the path for one row. Blank levels are left out of the path,
/// and a value holding `separator` becomes one level per piece.
///
/// Returns `None` when no level has a value.
#[must_use]
pub fn normalize_row(row: &TableRow, plan: &ExplicitPlan, separator: &str) -> Option<NormalizedRow> {
    let path = split_tokens(&level_values(row, plan), separator);
    if path.is_empty() {
        return None;
    }
    Some(NormalizedRow {
        line: row.line,
        path,
        name: clean_cell(row.cell(plan.name.index)).unwrap_or_default(),
    })
}

fn level_values(row: &TableRow, plan: &ExplicitPlan) -> Vec<String> {
    plan.levels
        .iter()
        .filter_map(|col| clean_cell(row.cell(col.index)))
        .collect()
}

/// Normalizes every kept table row, recording skips in the report.
///
/// The returned report already carries the table's own warnings.
#[must_use]
pub fn normalize_table(
    table: &Table,
    plan: &ExplicitPlan,
    separator: &str,
) -> (Vec<NormalizedRow>, BuildReport) {
    let mut report = BuildReport {
        rows_read: table.records_seen(),
        rows_malformed: table.malformed,
        warnings: table.warnings.clone(),
        ..BuildReport::default()
    };

    let mut rows = Vec::with_capacity(table.rows.len());
    for raw in &table.rows {
        if let Some(value) = level_values(raw, plan)
            .into_iter()
            .find(|v| v.contains(separator))
        {
            report.push(raw.line, RowIssue::SeparatorInValue { value });
        }
        match normalize_row(raw, plan, separator) {
            Some(row) => {
                if row.name.is_empty() {
                    report.push(row.line, RowIssue::BlankName);
                }
                rows.push(row);
            }
            None => {
                debug!("line {}: no hierarchy values", raw.line);
                report.rows_skipped += 1;
                report.push(raw.line, RowIssue::EmptyHierarchy);
            }
        }
    }
    report.rows_used = rows.len();
    (rows, report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ingest::Column;

    fn plan() -> ExplicitPlan {
        let col = |index: usize, header: &str| Column { index, header: header.into() };
        ExplicitPlan {
            levels: vec![col(0, "DIVISION"), col(1, "DEPT"), col(2, "SECTION")],
            name: col(3, "NAMA"),
        }
    }

    fn row(cells: &[&str]) -> TableRow {
        TableRow {
            line: 2,
            cells: cells.iter().map(|s| (*s).to_string()).collect(),
        }
    }

    #[test]
    fn test_trims_tokens_and_name() {
        let r = normalize_row(&row(&[" Eng ", "Backend", "API", "  Alice "]), &plan(), " / ").unwrap();
        assert_eq!(r.path, ["Eng", "Backend", "API"]);
        assert_eq!(r.name, "Alice");
    }

    #[test]
    fn test_blank_level_shortens_path() {
        let r = normalize_row(&row(&["Eng", "  ", "API", "Bob"]), &plan(), " / ").unwrap();
        assert_eq!(r.path, ["Eng", "API"]);
    }

    #[test]
    fn test_nan_counts_as_missing() {
        let r = normalize_row(&row(&["Eng", "NaN", "nan", "Bob"]), &plan(), " / ").unwrap();
        assert_eq!(r.path, ["Eng"]);
    }

    #[test]
    fn test_all_blank_is_dropped() {
        assert!(normalize_row(&row(&["", " ", "", "Carol"]), &plan(), " / ").is_none());
    }

    #[test]
    fn test_short_row_reads_missing_cells() {
        let r = normalize_row(&row(&["Eng"]), &plan(), " / ").unwrap();
        assert_eq!(r.path, ["Eng"]);
        assert_eq!(r.name, "");
    }

    #[test]
    fn test_separator_in_value_becomes_levels() {
        let r = normalize_row(&row(&["R&D / Labs", "", "", "Dee"]), &plan(), " / ").unwrap();
        assert_eq!(r.path, ["R&D", "Labs"]);
    }

    #[test]
    fn test_table_flags_split_values() {
        let table = Table::parse(
            "DIVISION,DEPT,SECTION,NAMA\nR&D/Labs,,,Dee\n/,,,Eve\n",
            &crate::config::InputConfig::default(),
        )
        .unwrap();
        let (rows, report) = normalize_table(&table, &plan(), "/");
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].path, ["R&D", "Labs"]);
        assert_eq!(report.rows_skipped, 1);
        assert_eq!(
            report.warnings[0].issue,
            RowIssue::SeparatorInValue { value: "R&D/Labs".into() }
        );
    }
}
