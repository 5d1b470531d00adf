// src/reporting/tree.rs
//! Indented tree view of a node index.

use colored::Colorize;
use indexmap::IndexMap;
use std::fmt::Write;

use crate::index::{Node, NodeIndex, ROOT};

/// Renders the forest, or the subtree under `start` when given.
///
/// Each line shows the label and the subtree head count. `max_depth`
/// limits how many levels below the start are drawn.
#[must_use]
pub fn render_tree(index: &NodeIndex, start: Option<&str>, max_depth: Option<usize>) -> String {
    let children = index.child_map();
    let mut out = String::new();

    match start.and_then(|id| index.get(id)) {
        Some(node) => {
            let _ = writeln!(out, "{}", node_line(node));
            render_children(&children, &node.id, "", 1, max_depth, &mut out);
        }
        None if start.is_some_and(|s| !s.is_empty()) => {}
        None => render_children(&children, ROOT, "", 0, max_depth, &mut out),
    }
    out
}

fn render_children(
    children: &IndexMap<&str, Vec<&Node>>,
    parent: &str,
    prefix: &str,
    depth: usize,
    max_depth: Option<usize>,
    out: &mut String,
) {
    if max_depth.is_some_and(|max| depth > max) {
        return;
    }
    let Some(kids) = children.get(parent) else {
        return;
    };
    let top = parent == ROOT;

    for (i, node) in kids.iter().enumerate() {
        let last = i + 1 == kids.len();
        let (branch, indent) = match (top, last) {
            (true, _) => ("", ""),
            (false, true) => ("└── ", "    "),
            (false, false) => ("├── ", "│   "),
        };
        let _ = writeln!(out, "{prefix}{}{}", branch.dimmed(), node_line(node));
        let next = format!("{prefix}{indent}");
        render_children(children, &node.id, &next, depth + 1, max_depth, out);
    }
}

fn node_line(node: &Node) -> String {
    let label = if node.is_synthesized() {
        node.label.normal()
    } else {
        node.label.bold()
    };
    format!("{label} {}", format!("({})", node.total_count).dimmed())
}
