// src/reporting/mod.rs
//! Terminal output.

pub mod console;
pub mod tree;

pub use console::{print_members, print_preview, print_summary};
pub use tree::render_tree;
