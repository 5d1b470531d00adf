// src/hierarchy/edges.rs
//! Parent claims between adjacent levels by grouping-attribute containment.
//!
//! The result is a multigraph: a child may be claimed by several parents
//! and identical labels may repeat. Edges are kept as found.

use serde::Serialize;
use std::fmt;

use super::classify::Level;
use crate::types::Ambiguity;

/// A row prepared for level inference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelRecord {
    pub line: u64,
    pub name: String,
    pub title: String,
    pub level: Level,
    pub division: Option<String>,
    pub department: Option<String>,
    pub section: Option<String>,
}

/// Attribute that linked a child to its parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchedOn {
    Division,
    Department,
    Section,
}

impl fmt::Display for MatchedOn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Division => "division",
            Self::Department => "department",
            Self::Section => "section",
        };
        f.write_str(s)
    }
}

/// `parent` and `child` index into [`LevelGraph::records`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Edge {
    pub parent: usize,
    pub child: usize,
    pub parent_label: String,
    pub child_label: String,
    pub matched_on: MatchedOn,
}

#[derive(Debug, Clone, Default)]
pub struct LevelGraph {
    pub records: Vec<LevelRecord>,
    /// Ordered by child row, then parent row.
    pub edges: Vec<Edge>,
    /// Claiming parents per record, in row order.
    claims: Vec<Vec<usize>>,
}

impl LevelGraph {
    #[must_use]
    pub fn new(records: Vec<LevelRecord>) -> Self {
        let edges = form_edges(&records);
        let mut claims = vec![Vec::new(); records.len()];
        for e in &edges {
            claims[e.child].push(e.parent);
        }
        Self {
            records,
            edges,
            claims,
        }
    }

    /// Records nothing claims as a child.
    #[must_use]
    pub fn roots(&self) -> Vec<usize> {
        (0..self.records.len())
            .filter(|&i| self.claims[i].is_empty())
            .collect()
    }

    /// Every parent claiming `child`, in row order.
    #[must_use]
    pub fn parents_of(&self, child: usize) -> &[usize] {
        self.claims.get(child).map(Vec::as_slice).unwrap_or_default()
    }

    /// The parent used for the tree view: first claim in row order.
    #[must_use]
    pub fn tree_parent(&self, child: usize) -> Option<usize> {
        self.parents_of(child).first().copied()
    }

    /// Children with more than one claiming parent.
    #[must_use]
    pub fn ambiguities(&self) -> Vec<Ambiguity> {
        self.claims
            .iter()
            .enumerate()
            .filter(|(_, parents)| parents.len() > 1)
            .map(|(child, parents)| Ambiguity {
                child: self.records[child].title.clone(),
                parents: parents
                    .iter()
                    .map(|&p| self.records[p].title.clone())
                    .collect(),
            })
            .collect()
    }

    /// Title chain from the top of the first-claim tree down to `record`.
    ///
    /// Parents always sit one level above their child, so the walk ends.
    #[must_use]
    pub fn tree_path(&self, record: usize) -> Vec<String> {
        let mut chain = vec![self.records[record].title.clone()];
        let mut current = record;
        while let Some(parent) = self.tree_parent(current) {
            chain.push(self.records[parent].title.clone());
            current = parent;
        }
        chain.reverse();
        chain
    }
}

/// Links each level-2 row to level-1 rows and each level-3 row to level-2 rows.
#[must_use]
pub fn form_edges(records: &[LevelRecord]) -> Vec<Edge> {
    let mut edges = Vec::new();
    for (ci, child) in records.iter().enumerate() {
        let Some(parent_level) = child.level.parent_level() else {
            continue;
        };
        for (pi, parent) in records.iter().enumerate() {
            if parent.level != parent_level {
                continue;
            }
            if let Some(matched_on) = link(parent, child) {
                edges.push(Edge {
                    parent: pi,
                    child: ci,
                    parent_label: parent.title.clone(),
                    child_label: child.title.clone(),
                    matched_on,
                });
            }
        }
    }
    edges
}

fn link(parent: &LevelRecord, child: &LevelRecord) -> Option<MatchedOn> {
    match child.level {
        Level::Manager => contains(parent.division.as_deref(), child.division.as_deref())
            .then_some(MatchedOn::Division),
        Level::Staff => {
            if parent.department.is_some() && child.department.is_some() {
                contains(parent.department.as_deref(), child.department.as_deref())
                    .then_some(MatchedOn::Department)
            } else {
                contains(parent.section.as_deref(), child.section.as_deref())
                    .then_some(MatchedOn::Section)
            }
        }
        Level::Executive | Level::Other => None,
    }
}

/// Case-sensitive: the parent's value must occur inside the child's.
fn contains(parent: Option<&str>, child: Option<&str>) -> bool {
    match (parent, child) {
        (Some(p), Some(c)) => c.contains(p),
        _ => false,
    }
}
