// src/hierarchy/mod.rs
//! Hierarchy construction from a parsed table.

pub mod classify;
pub mod edges;
pub mod explicit;
pub mod inferred;

pub use classify::{Level, LevelClassifier};
pub use edges::{Edge, LevelGraph, LevelRecord, MatchedOn};

use crate::config::{Config, HierarchyMode};
use crate::error::Result;
use crate::index::NodeIndex;
use crate::ingest::Table;
use crate::types::BuildReport;

/// Everything one upload produces.
#[derive(Debug, Clone)]
pub struct Hierarchy {
    pub index: NodeIndex,
    pub report: BuildReport,
    /// The raw level multigraph, inferred mode only.
    pub graph: Option<LevelGraph>,
}

/// Builds with the strategy `config.hierarchy.mode` selects.
///
/// # Errors
/// Returns error if required columns cannot be resolved.
pub fn build(table: &Table, config: &Config) -> Result<Hierarchy> {
    match config.hierarchy.mode {
        HierarchyMode::Explicit => explicit::build(table, &config.hierarchy),
        HierarchyMode::Inferred => inferred::build(table, config),
    }
}
