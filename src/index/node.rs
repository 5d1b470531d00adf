// src/index/node.rs
use serde::Serialize;

/// Path id of the implicit root above every top-level node.
pub const ROOT: &str = "";

/// Whether any row ended exactly at this node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeOrigin {
    /// At least one row's full path is this node.
    Observed,
    /// Created only so a deeper path has a parent.
    Synthesized,
}

/// One position in the hierarchy forest, keyed by its joined path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Node {
    pub id: String,
    pub label: String,
    /// `None` for top-level nodes.
    pub parent: Option<String>,
    pub path: Vec<String>,
    /// People whose path ends here, in input order.
    pub members: Vec<String>,
    /// Own members plus every descendant's.
    pub total_count: usize,
    pub origin: NodeOrigin,
}

impl Node {
    pub(crate) fn new(path: &[String], separator: &str, origin: NodeOrigin) -> Self {
        let parent = (path.len() > 1).then(|| path[..path.len() - 1].join(separator));
        Self {
            id: path.join(separator),
            label: path.last().cloned().unwrap_or_default(),
            parent,
            path: path.to_vec(),
            members: Vec::new(),
            total_count: 0,
            origin,
        }
    }

    /// Number of rows whose full path is this node.
    #[must_use]
    pub fn own_count(&self) -> usize {
        self.members.len()
    }

    /// Parent path id, [`ROOT`] for top-level nodes.
    #[must_use]
    pub fn parent_id(&self) -> &str {
        self.parent.as_deref().unwrap_or(ROOT)
    }

    #[must_use]
    pub fn depth(&self) -> usize {
        self.path.len()
    }

    #[must_use]
    pub fn is_synthesized(&self) -> bool {
        self.origin == NodeOrigin::Synthesized
    }
}
