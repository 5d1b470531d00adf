// src/ingest/columns.rs
//! Resolves configured or detected column names against a header row.

use tracing::{debug, info};

use crate::config::{HierarchyConfig, InferredColumnsConfig};
use crate::error::{OrgTreeError, Result};

const NAME_HINTS: &[&str] = &["NAMA", "NAME"];
/// Only these name hints may match inside a longer header; "NAME" alone
/// would claim headers like `DIVISION_NAME`.
const NAME_SUBSTRING_HINTS: &[&str] = &["NAMA"];
const TITLE_HINTS: &[&str] = &["POSITION", "TITLE", "JABATAN"];
const DIVISION_HINTS: &[&str] = &["DIVISION", "DIVISI"];
const DEPARTMENT_HINTS: &[&str] = &["DEPT", "DEPARTMENT", "DEPARTEMEN"];
const SECTION_HINTS: &[&str] = &["SECTION", "SEKSI"];
/// Level hint groups, top to bottom.
const LEVEL_HINTS: &[&[&str]] = &[DIVISION_HINTS, DEPARTMENT_HINTS, SECTION_HINTS];

/// A header column by position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    pub index: usize,
    pub header: String,
}

/// Columns for explicit-columns mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExplicitPlan {
    /// Top to bottom.
    pub levels: Vec<Column>,
    pub name: Column,
}

/// Columns for inferred-levels mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InferredPlan {
    pub name: Column,
    pub title: Column,
    pub division: Option<Column>,
    pub department: Option<Column>,
    pub section: Option<Column>,
}

/// Resolves level and name columns.
///
/// Configured names must exist. Unconfigured levels fall back to header
/// hints, then to a positional guess.
///
/// # Errors
/// Returns `MissingColumn` for configured names absent from the header,
/// `NoLevelColumns` when nothing usable remains.
pub fn plan_explicit(headers: &[String], cfg: &HierarchyConfig) -> Result<ExplicitPlan> {
    let name = resolve_name(headers, cfg.name.as_deref())?;

    let levels = if cfg.levels.is_empty() {
        let detected = detect_levels(headers, name.index);
        info!(
            "detected level columns: [{}]",
            detected.iter().map(|c| c.header.as_str()).collect::<Vec<_>>().join(", ")
        );
        detected
    } else {
        cfg.levels
            .iter()
            .map(|l| require(headers, l))
            .collect::<Result<Vec<_>>>()?
    };

    if levels.is_empty() {
        return Err(OrgTreeError::NoLevelColumns);
    }
    Ok(ExplicitPlan { levels, name })
}

/// Resolves the columns classification and edge matching read from.
///
/// # Errors
/// Returns `MissingColumn` when no title column is configured or detectable.
pub fn plan_inferred(
    headers: &[String],
    name: Option<&str>,
    cfg: &InferredColumnsConfig,
) -> Result<InferredPlan> {
    let name = resolve_name(headers, name)?;
    let title = match cfg.title.as_deref() {
        Some(t) => require(headers, t)?,
        None => detect(headers, TITLE_HINTS).ok_or_else(|| missing(headers, "POSITION"))?,
    };
    Ok(InferredPlan {
        name,
        title,
        division: optional(headers, cfg.division.as_deref(), DIVISION_HINTS)?,
        department: optional(headers, cfg.department.as_deref(), DEPARTMENT_HINTS)?,
        section: optional(headers, cfg.section.as_deref(), SECTION_HINTS)?,
    })
}

fn resolve_name(headers: &[String], configured: Option<&str>) -> Result<Column> {
    if let Some(n) = configured {
        return require(headers, n);
    }
    let upper = uppercased(headers);
    let found = position_exact(&upper, NAME_HINTS)
        .or_else(|| position_within(&upper, NAME_SUBSTRING_HINTS));
    if let Some(index) = found {
        return Ok(column(headers, index));
    }
    let index = headers.len().checked_sub(1).ok_or(OrgTreeError::EmptyInput)?;
    debug!("no name-like header, using last column");
    Ok(column(headers, index))
}

fn detect_levels(headers: &[String], name_index: usize) -> Vec<Column> {
    let mut hinted: Vec<Column> = Vec::new();
    for group in LEVEL_HINTS {
        if let Some(col) = detect(headers, group) {
            if col.index != name_index && !hinted.contains(&col) {
                hinted.push(col);
            }
        }
    }
    if !hinted.is_empty() {
        return hinted;
    }

    // Positional guess: the three columns before the last, or all but the last.
    let n = headers.len();
    let range = if n >= 4 { n - 4..n - 1 } else { 0..n.saturating_sub(1) };
    range
        .filter(|&i| i != name_index)
        .map(|i| column(headers, i))
        .collect()
}

fn optional(headers: &[String], configured: Option<&str>, hints: &[&str]) -> Result<Option<Column>> {
    match configured {
        Some(c) => require(headers, c).map(Some),
        None => Ok(detect(headers, hints)),
    }
}

/// Case-insensitive exact match.
fn require(headers: &[String], wanted: &str) -> Result<Column> {
    let wanted = wanted.trim();
    headers
        .iter()
        .position(|h| h.eq_ignore_ascii_case(wanted))
        .map(|i| column(headers, i))
        .ok_or_else(|| missing(headers, wanted))
}

/// Exact hint match first, then substring, both case-insensitive.
fn detect(headers: &[String], hints: &[&str]) -> Option<Column> {
    let upper = uppercased(headers);
    position_exact(&upper, hints)
        .or_else(|| position_within(&upper, hints))
        .map(|i| column(headers, i))
}

fn uppercased(headers: &[String]) -> Vec<String> {
    headers.iter().map(|h| h.to_uppercase()).collect()
}

fn position_exact(upper: &[String], hints: &[&str]) -> Option<usize> {
    hints
        .iter()
        .find_map(|hint| upper.iter().position(|h| h == *hint))
}

fn position_within(upper: &[String], hints: &[&str]) -> Option<usize> {
    hints
        .iter()
        .find_map(|hint| upper.iter().position(|h| h.contains(*hint)))
}

fn column(headers: &[String], index: usize) -> Column {
    Column {
        index,
        header: headers[index].clone(),
    }
}

fn missing(headers: &[String], column: &str) -> OrgTreeError {
    OrgTreeError::MissingColumn {
        column: column.to_string(),
        available: headers.to_vec(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers(h: &[&str]) -> Vec<String> {
        h.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn test_hinted_levels_in_fixed_order() {
        let h = headers(&["NO", "NAMA", "SECTION", "Division", "DEPARTMENT"]);
        let plan = plan_explicit(&h, &HierarchyConfig::default()).unwrap();
        let names: Vec<_> = plan.levels.iter().map(|c| c.header.as_str()).collect();
        assert_eq!(names, ["Division", "DEPARTMENT", "SECTION"]);
        assert_eq!(plan.name.header, "NAMA");
    }

    #[test]
    fn test_positional_fallback() {
        let h = headers(&["A", "B", "C", "D", "E"]);
        let plan = plan_explicit(&h, &HierarchyConfig::default()).unwrap();
        let names: Vec<_> = plan.levels.iter().map(|c| c.header.as_str()).collect();
        // name falls back to the last column
        assert_eq!(plan.name.header, "E");
        assert_eq!(names, ["B", "C", "D"]);
    }

    #[test]
    fn test_single_column_has_no_levels() {
        let h = headers(&["NAMA"]);
        let err = plan_explicit(&h, &HierarchyConfig::default()).unwrap_err();
        assert!(matches!(err, OrgTreeError::NoLevelColumns));
    }

    #[test]
    fn test_configured_missing_column() {
        let h = headers(&["NAMA", "DIVISION"]);
        let cfg = HierarchyConfig {
            levels: vec!["UNIT".into()],
            ..HierarchyConfig::default()
        };
        let err = plan_explicit(&h, &cfg).unwrap_err();
        assert!(matches!(err, OrgTreeError::MissingColumn { ref column, .. } if column == "UNIT"));
    }

    #[test]
    fn test_name_hint_does_not_claim_longer_headers() {
        let h = headers(&["DIVISION_NAME", "DEPT", "EMPLOYEE"]);
        let plan = plan_explicit(&h, &HierarchyConfig::default()).unwrap();
        assert_eq!(plan.name.header, "EMPLOYEE");
        let names: Vec<_> = plan.levels.iter().map(|c| c.header.as_str()).collect();
        assert_eq!(names, ["DIVISION_NAME", "DEPT"]);

        let h = headers(&["DEPT", "NAMA_KARYAWAN"]);
        let plan = plan_explicit(&h, &HierarchyConfig::default()).unwrap();
        assert_eq!(plan.name.header, "NAMA_KARYAWAN");
        assert_eq!(plan.levels.len(), 1);
    }
}
