// src/query.rs
//! Who is under a node.

use crate::index::{NodeIndex, ROOT};

/// What a membership query is asked about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection<'a> {
    /// Nothing selected: the whole organization.
    Root,
    Node(&'a str),
}

impl<'a> Selection<'a> {
    /// `None` and the empty string both mean the root.
    #[must_use]
    pub fn parse(id: Option<&'a str>) -> Self {
        match id {
            None | Some(ROOT) => Self::Root,
            Some(id) => Self::Node(id),
        }
    }
}

/// People at the selected node and everywhere beneath it.
///
/// Each person appears once, at the node their own path ends on. An id
/// not present in the index yields an empty list.
#[must_use]
pub fn members_under<'i>(index: &'i NodeIndex, selection: Selection<'_>) -> Vec<&'i str> {
    match selection {
        Selection::Root => index
            .nodes()
            .flat_map(|n| n.members.iter().map(String::as_str))
            .collect(),
        Selection::Node(id) => subtree_members(index, id),
    }
}

fn subtree_members<'i>(index: &'i NodeIndex, id: &str) -> Vec<&'i str> {
    if !index.contains(id) {
        return Vec::new();
    }
    let prefix = format!("{id}{}", index.separator());
    index
        .nodes()
        .filter(|n| n.id == id || n.id.starts_with(&prefix))
        .flat_map(|n| n.members.iter().map(String::as_str))
        .collect()
}

impl NodeIndex {
    /// Shorthand for [`members_under`]; `""` selects the root.
    #[must_use]
    pub fn members_under(&self, id: &str) -> Vec<&str> {
        members_under(self, Selection::parse(Some(id)))
    }
}
