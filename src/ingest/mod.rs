// src/ingest/mod.rs
//! Tabular input: delimiter sniffing, CSV reading, column resolution.

pub mod columns;
pub mod sniff;
pub mod table;

pub use columns::{plan_explicit, plan_inferred, Column, ExplicitPlan, InferredPlan};
pub use sniff::{sniff_delimiter, Delimiter};
pub use table::{Table, TableRow};
