pub mod cli;
pub mod config;
pub mod error;
pub mod exit;
pub mod export;
pub mod hierarchy;
pub mod index;
pub mod ingest;
pub mod normalize;
pub mod query;
pub mod reporting;
pub mod session;
pub mod types;
