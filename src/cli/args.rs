// src/cli/args.rs
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::config::{ConfigOverrides, HierarchyMode};

#[derive(Parser)]
#[command(name = "orgtree", version, about = "Organization structure viewer")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
    /// Config file (default: ./orgtree.toml when present)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,
    /// Enable debug logging on stderr
    #[arg(long, short, global = true)]
    pub verbose: bool,
}

/// Input file plus the column settings a command line may override.
#[derive(Args, Debug, Clone)]
pub struct InputArgs {
    /// Organization table (comma or semicolon separated)
    #[arg(value_name = "FILE")]
    pub file: PathBuf,
    /// Level columns, top to bottom, comma separated
    #[arg(long, value_delimiter = ',')]
    pub levels: Vec<String>,
    /// Column holding employee names
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long, value_enum)]
    pub mode: Option<HierarchyMode>,
    /// Path id separator
    #[arg(long)]
    pub separator: Option<String>,
    /// Input delimiter, skips sniffing
    #[arg(long)]
    pub delimiter: Option<char>,
}

impl InputArgs {
    #[must_use]
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            levels: (!self.levels.is_empty()).then(|| self.levels.clone()),
            name: self.name.clone(),
            mode: self.mode,
            separator: self.separator.clone(),
            delimiter: self.delimiter,
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the header and first rows as parsed
    Preview {
        #[command(flatten)]
        input: InputArgs,
        #[arg(long, short = 'n', default_value = "5")]
        rows: usize,
    },
    /// Print the hierarchy as an indented tree
    Tree {
        #[command(flatten)]
        input: InputArgs,
        /// Start at this node id
        #[arg(long)]
        node: Option<String>,
        /// Levels to draw below the start
        #[arg(long)]
        depth: Option<usize>,
    },
    /// Print treemap arrays (ids, labels, parents, values) as JSON
    Nodes {
        #[command(flatten)]
        input: InputArgs,
    },
    /// List people under a node, or everyone when no node is given
    Members {
        #[command(flatten)]
        input: InputArgs,
        #[arg(value_name = "NODE")]
        node: Option<String>,
        /// Exit non-zero when nobody matches
        #[arg(long)]
        strict: bool,
    },
    /// Write the (node_id, person_name) membership table
    Export {
        #[command(flatten)]
        input: InputArgs,
        #[arg(long, short, value_name = "FILE")]
        output: Option<PathBuf>,
    },
    /// Write the inferred parent-claim edges (inferred mode)
    Edges {
        #[command(flatten)]
        input: InputArgs,
        #[arg(long, short, value_name = "FILE")]
        output: Option<PathBuf>,
    },
}
