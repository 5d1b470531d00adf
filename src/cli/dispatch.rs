//! Command dispatch logic extracted from the binary.

use super::args::{Cli, Commands};
use super::handlers::{
    handle_edges, handle_export, handle_members, handle_nodes, handle_preview, handle_tree,
};
use crate::exit::OrgTreeExit;
use anyhow::Result;

/// Executes the parsed command.
///
/// # Errors
/// Returns error if the command handler fails.
pub fn execute(cli: &Cli) -> Result<OrgTreeExit> {
    let config = cli.config.as_deref();
    match &cli.command {
        Commands::Preview { input, rows } => handle_preview(config, input, *rows),
        Commands::Tree { input, node, depth } => {
            handle_tree(config, input, node.as_deref(), *depth)
        }
        Commands::Nodes { input } => handle_nodes(config, input),
        Commands::Members {
            input,
            node,
            strict,
        } => handle_members(config, input, node.as_deref(), *strict),
        Commands::Export { input, output } => handle_export(config, input, output.as_deref()),
        Commands::Edges { input, output } => handle_edges(config, input, output.as_deref()),
    }
}
