// src/hierarchy/explicit.rs
use tracing::info;

use super::Hierarchy;
use crate::config::HierarchyConfig;
use crate::error::Result;
use crate::index::NodeIndex;
use crate::ingest::{plan_explicit, Table};
use crate::normalize::normalize_table;

/// Nests rows by the configured level columns, top to bottom.
///
/// # Errors
/// Returns error if the level or name columns cannot be resolved.
pub fn build(table: &Table, cfg: &HierarchyConfig) -> Result<Hierarchy> {
    let plan = plan_explicit(&table.headers, cfg)?;
    let (rows, report) = normalize_table(table, &plan, &cfg.separator);
    let index = NodeIndex::from_rows(&rows, &cfg.separator);
    info!(
        "explicit hierarchy: {} rows -> {} nodes, {} skipped",
        report.rows_used,
        index.len(),
        report.rows_skipped
    );
    Ok(Hierarchy {
        index,
        report,
        graph: None,
    })
}
