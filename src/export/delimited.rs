// src/export/delimited.rs
//! Delimited exports of membership and inferred edges.

use std::io::Write;

use crate::error::Result;
use crate::hierarchy::LevelGraph;
use crate::index::NodeIndex;

pub const MEMBERSHIP_HEADER: [&str; 2] = ["node_id", "person_name"];
pub const EDGE_HEADER: [&str; 3] = ["parent", "child", "matched_on"];

/// Writes one `(node_id, person_name)` row per member, in node order.
///
/// # Errors
/// Returns error if writing to `out` fails.
pub fn write_membership<W: Write>(index: &NodeIndex, out: W, delimiter: char) -> Result<usize> {
    let mut writer = writer(out, delimiter);
    writer.write_record(MEMBERSHIP_HEADER)?;
    let mut rows = 0;
    for (id, members) in index.id_to_members() {
        for name in members {
            writer.write_record([id, name.as_str()])?;
            rows += 1;
        }
    }
    writer.flush()?;
    Ok(rows)
}

/// Writes the full parent-claim multigraph, duplicates included.
///
/// # Errors
/// Returns error if writing to `out` fails.
pub fn write_edges<W: Write>(graph: &LevelGraph, out: W, delimiter: char) -> Result<usize> {
    let mut writer = writer(out, delimiter);
    writer.write_record(EDGE_HEADER)?;
    for edge in &graph.edges {
        let matched = edge.matched_on.to_string();
        writer.write_record([
            edge.parent_label.as_str(),
            edge.child_label.as_str(),
            matched.as_str(),
        ])?;
    }
    writer.flush()?;
    Ok(graph.edges.len())
}

fn writer<W: Write>(out: W, delimiter: char) -> csv::Writer<W> {
    let byte = u8::try_from(delimiter).unwrap_or(b',');
    csv::WriterBuilder::new().delimiter(byte).from_writer(out)
}
