// src/export/treemap.rs
use serde::Serialize;

use crate::index::NodeIndex;

/// Parallel arrays in the shape hierarchical chart libraries take.
///
/// `values` are own counts (remainder mode); `totals` include descendants
/// for renderers that expect branch totals.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TreemapData {
    pub ids: Vec<String>,
    pub labels: Vec<String>,
    /// Empty string for top-level nodes.
    pub parents: Vec<String>,
    pub values: Vec<usize>,
    pub totals: Vec<usize>,
}

impl TreemapData {
    #[must_use]
    pub fn from_index(index: &NodeIndex) -> Self {
        let mut data = Self::default();
        for node in index.nodes() {
            data.ids.push(node.id.clone());
            data.labels.push(node.label.clone());
            data.parents.push(node.parent_id().to_string());
            data.values.push(node.own_count());
            data.totals.push(node.total_count);
        }
        data
    }

    /// Pretty JSON.
    ///
    /// # Errors
    /// Returns error if serialization fails.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
