// src/index/mod.rs
//! Flat node table keyed by path id.
//!
//! Every strict prefix of every path is present as a node, so parent
//! references never dangle. Ancestors are always inserted before their
//! descendants; beyond that, order follows first appearance in the input.

pub mod node;

pub use node::{Node, NodeOrigin, ROOT};

use indexmap::IndexMap;
use tracing::{debug, warn};

use crate::normalize::NormalizedRow;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeIndex {
    separator: String,
    nodes: IndexMap<String, Node>,
}

impl NodeIndex {
    /// Groups `(path, name)` pairs by joined path and fills in missing ancestors.
    ///
    /// Tokens are passed through [`split_tokens`] first. Paths left empty
    /// are ignored; callers filter and count them beforehand.
    #[must_use]
    pub fn build<I>(pairs: I, separator: &str) -> Self
    where
        I: IntoIterator<Item = (Vec<String>, String)>,
    {
        let mut index = Self {
            separator: separator.to_string(),
            nodes: IndexMap::new(),
        };
        for (path, name) in pairs {
            index.insert(&path, name);
        }
        index.roll_up();
        debug!(
            "node index: {} nodes ({} synthesized)",
            index.len(),
            index.nodes.values().filter(|n| n.is_synthesized()).count()
        );
        index
    }

    /// Builds from normalizer output.
    #[must_use]
    pub fn from_rows(rows: &[NormalizedRow], separator: &str) -> Self {
        Self::build(
            rows.iter().map(|r| (r.path.clone(), r.name.clone())),
            separator,
        )
    }

    fn insert(&mut self, path: &[String], name: String) {
        let path = split_tokens(path, &self.separator);
        if path.is_empty() {
            return;
        }
        for depth in 1..path.len() {
            self.ensure(&path[..depth], NodeOrigin::Synthesized);
        }
        let node = self.ensure(&path, NodeOrigin::Observed);
        node.origin = NodeOrigin::Observed;
        node.members.push(name);
    }

    fn ensure(&mut self, path: &[String], origin: NodeOrigin) -> &mut Node {
        let id = path.join(self.separator.as_str());
        let separator = &self.separator;
        let node = self
            .nodes
            .entry(id)
            .or_insert_with(|| Node::new(path, separator, origin));
        if node.path != path {
            warn!(
                "path {:?} collides with {:?} under separator '{}'",
                path, node.path, separator
            );
        }
        node
    }

    /// Fills `total_count`. Descendants sit after ancestors, so one
    /// reverse pass settles every subtree before its parent is read.
    fn roll_up(&mut self) {
        for i in (0..self.nodes.len()).rev() {
            let Some((_, node)) = self.nodes.get_index_mut(i) else {
                continue;
            };
            node.total_count += node.members.len();
            let total = node.total_count;
            let Some(parent) = node.parent.clone() else {
                continue;
            };
            if let Some(p) = self.nodes.get_mut(&parent) {
                p.total_count += total;
            }
        }
    }

    #[must_use]
    pub fn separator(&self) -> &str {
        &self.separator
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Node> {
        self.nodes.get(id)
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.nodes.contains_key(id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Nodes in index order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.values()
    }

    pub fn roots(&self) -> impl Iterator<Item = &Node> {
        self.nodes.values().filter(|n| n.parent.is_none())
    }

    /// Direct children of `id`, in index order. Pass [`ROOT`] for top-level nodes.
    pub fn children<'a>(&'a self, id: &'a str) -> impl Iterator<Item = &'a Node> + 'a {
        self.nodes.values().filter(move |n| n.parent_id() == id)
    }

    /// Parent id to children, [`ROOT`] keyed for top-level nodes.
    #[must_use]
    pub fn child_map(&self) -> IndexMap<&str, Vec<&Node>> {
        let mut map: IndexMap<&str, Vec<&Node>> = IndexMap::new();
        for node in self.nodes.values() {
            map.entry(node.parent_id()).or_default().push(node);
        }
        map
    }

    /// Path id to own members, the mapping membership queries and exports read.
    #[must_use]
    pub fn id_to_members(&self) -> IndexMap<&str, &[String]> {
        self.nodes
            .iter()
            .map(|(id, n)| (id.as_str(), n.members.as_slice()))
            .collect()
    }

    /// Sum of own counts across all nodes.
    #[must_use]
    pub fn member_count(&self) -> usize {
        self.nodes.values().map(Node::own_count).sum()
    }
}

/// Breaks tokens that embed `separator` into one token per piece.
///
/// Keeps every joined prefix of an id resolvable to exactly one node.
/// Pieces are trimmed and blank pieces dropped.
#[must_use]
pub fn split_tokens(path: &[String], separator: &str) -> Vec<String> {
    path.iter()
        .flat_map(|token| token.split(separator))
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .map(str::to_string)
        .collect()
}
