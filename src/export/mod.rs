// src/export/mod.rs
pub mod delimited;
pub mod treemap;

pub use delimited::{write_edges, write_membership};
pub use treemap::TreemapData;
