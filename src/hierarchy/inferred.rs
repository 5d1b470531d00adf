// src/hierarchy/inferred.rs
//! Hierarchy from position titles when no level columns are given.

use tracing::{info, warn};

use super::classify::LevelClassifier;
use super::edges::{LevelGraph, LevelRecord};
use super::Hierarchy;
use crate::config::Config;
use crate::error::Result;
use crate::index::{split_tokens, NodeIndex};
use crate::ingest::{plan_inferred, Column, InferredPlan, Table, TableRow};
use crate::normalize::clean_cell;
use crate::types::{BuildReport, RowIssue};

/// Classifies titles, links adjacent levels, and indexes the first-claim tree.
///
/// # Errors
/// Returns error if the title or name column cannot be resolved.
pub fn build(table: &Table, config: &Config) -> Result<Hierarchy> {
    let plan = plan_inferred(
        &table.headers,
        config.hierarchy.name.as_deref(),
        &config.inferred,
    )?;
    let classifier = LevelClassifier::new()?;

    let mut report = BuildReport {
        rows_read: table.records_seen(),
        rows_malformed: table.malformed,
        warnings: table.warnings.clone(),
        ..BuildReport::default()
    };
    let mut records = Vec::with_capacity(table.rows.len());
    for row in &table.rows {
        match to_record(row, &plan, &classifier) {
            Some(rec) => {
                if rec.name.is_empty() {
                    report.push(rec.line, RowIssue::BlankName);
                }
                records.push(rec);
            }
            None => {
                report.rows_skipped += 1;
                report.push(row.line, RowIssue::EmptyHierarchy);
            }
        }
    }

    let graph = LevelGraph::new(records);
    report.ambiguities = graph.ambiguities();
    for amb in &report.ambiguities {
        warn!(
            "'{}' claimed by {} parents; using '{}'",
            amb.child,
            amb.parents.len(),
            amb.parents[0]
        );
    }

    let separator = config.hierarchy.separator.as_str();
    let mut pairs = Vec::with_capacity(graph.records.len());
    for (i, rec) in graph.records.iter().enumerate() {
        if rec.title.contains(separator) {
            report.push(
                rec.line,
                RowIssue::SeparatorInValue {
                    value: rec.title.clone(),
                },
            );
        }
        let path = split_tokens(&graph.tree_path(i), separator);
        if path.is_empty() {
            report.rows_skipped += 1;
            report.push(rec.line, RowIssue::EmptyHierarchy);
            continue;
        }
        pairs.push((path, rec.name.clone()));
    }
    report.rows_used = pairs.len();
    let index = NodeIndex::build(pairs, separator);
    info!(
        "inferred hierarchy: {} records, {} edges, {} roots, {} nodes",
        graph.records.len(),
        graph.edges.len(),
        graph.roots().len(),
        index.len()
    );

    Ok(Hierarchy {
        index,
        report,
        graph: Some(graph),
    })
}

fn to_record(row: &TableRow, plan: &InferredPlan, classifier: &LevelClassifier) -> Option<LevelRecord> {
    let title = clean_cell(row.cell(plan.title.index))?;
    let attr = |col: &Option<Column>| col.as_ref().and_then(|c| clean_cell(row.cell(c.index)));
    Some(LevelRecord {
        line: row.line,
        name: clean_cell(row.cell(plan.name.index)).unwrap_or_default(),
        level: classifier.classify(&title),
        title,
        division: attr(&plan.division),
        department: attr(&plan.department),
        section: attr(&plan.section),
    })
}
