// src/cli/handlers.rs
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use anyhow::{anyhow, Result};
use colored::Colorize;

use crate::cli::args::InputArgs;
use crate::config::Config;
use crate::error::OrgTreeError;
use crate::exit::OrgTreeExit;
use crate::export::{self, TreemapData};
use crate::hierarchy::Hierarchy;
use crate::ingest::Table;
use crate::query::{members_under, Selection};
use crate::reporting;
use crate::session::Session;

fn load_config(config_path: Option<&Path>, input: &InputArgs) -> Result<Config> {
    let mut config = Config::load(config_path)?;
    config.apply_overrides(input.overrides());
    config.validate()?;
    Ok(config)
}

/// Builds the hierarchy for one command invocation and prints diagnostics.
fn load_hierarchy(config_path: Option<&Path>, input: &InputArgs) -> Result<(Config, Hierarchy)> {
    let config = load_config(config_path, input)?;
    let mut session = Session::new(config.clone());
    session.load_path(&input.file)?;
    let built = session
        .into_hierarchy()
        .ok_or_else(|| anyhow!("no hierarchy after a successful load"))?;
    reporting::print_summary(&built.report, &built.index);
    Ok((config, built))
}

/// Handles the preview command.
///
/// # Errors
/// Returns error if the file cannot be read as a table.
pub fn handle_preview(config_path: Option<&Path>, input: &InputArgs, rows: usize) -> Result<OrgTreeExit> {
    let config = load_config(config_path, input)?;
    let table = Table::read(&input.file, &config.input)?;
    reporting::print_preview(&table, rows);
    Ok(OrgTreeExit::Success)
}

/// Handles the tree command.
///
/// # Errors
/// Returns error if loading or building fails.
pub fn handle_tree(
    config_path: Option<&Path>,
    input: &InputArgs,
    node: Option<&str>,
    depth: Option<usize>,
) -> Result<OrgTreeExit> {
    let (_, built) = load_hierarchy(config_path, input)?;
    if let Some(id) = node.filter(|id| !id.is_empty() && !built.index.contains(id)) {
        println!("{}", format!("No node '{id}' in this hierarchy.").dimmed());
        return Ok(OrgTreeExit::Success);
    }
    print!("{}", reporting::render_tree(&built.index, node, depth));
    Ok(OrgTreeExit::Success)
}

/// Handles the nodes command.
///
/// # Errors
/// Returns error if loading, building, or serialization fails.
pub fn handle_nodes(config_path: Option<&Path>, input: &InputArgs) -> Result<OrgTreeExit> {
    let (_, built) = load_hierarchy(config_path, input)?;
    let data = TreemapData::from_index(&built.index);
    println!("{}", data.to_json()?);
    Ok(OrgTreeExit::Success)
}

/// Handles the members command.
///
/// # Errors
/// Returns error if loading or building fails.
pub fn handle_members(
    config_path: Option<&Path>,
    input: &InputArgs,
    node: Option<&str>,
    strict: bool,
) -> Result<OrgTreeExit> {
    let (_, built) = load_hierarchy(config_path, input)?;
    let selection = Selection::parse(node);
    let members = members_under(&built.index, selection);
    let label = match selection {
        Selection::Root => "the organization",
        Selection::Node(id) => id,
    };
    reporting::print_members(label, &members);

    if strict && members.is_empty() {
        Ok(OrgTreeExit::NoData)
    } else {
        Ok(OrgTreeExit::Success)
    }
}

/// Handles the export command.
///
/// # Errors
/// Returns error if loading fails or the output cannot be written.
pub fn handle_export(
    config_path: Option<&Path>,
    input: &InputArgs,
    output: Option<&Path>,
) -> Result<OrgTreeExit> {
    let (config, built) = load_hierarchy(config_path, input)?;
    let delimiter = config.export.delimiter;
    let rows = export::write_membership(&built.index, open_output(output)?, delimiter)?;
    if let Some(path) = output {
        eprintln!("Wrote {rows} membership rows to {}", path.display());
    }
    Ok(OrgTreeExit::Success)
}

/// Handles the edges command.
///
/// # Errors
/// Returns error if loading fails or the output cannot be written.
pub fn handle_edges(
    config_path: Option<&Path>,
    input: &InputArgs,
    output: Option<&Path>,
) -> Result<OrgTreeExit> {
    let (config, built) = load_hierarchy(config_path, input)?;
    let Some(graph) = built.graph.as_ref() else {
        return Err(anyhow!(OrgTreeError::InvalidConfig(
            "edges are only produced in inferred mode (use --mode inferred)".into()
        )));
    };
    let rows = export::write_edges(graph, open_output(output)?, config.export.delimiter)?;
    if let Some(path) = output {
        eprintln!("Wrote {rows} edges to {}", path.display());
    }
    Ok(OrgTreeExit::Success)
}

fn open_output(path: Option<&Path>) -> Result<Box<dyn Write>> {
    match path {
        Some(p) => {
            let file = File::create(p).map_err(|e| OrgTreeError::io(e, p))?;
            Ok(Box::new(file))
        }
        None => Ok(Box::new(io::stdout().lock())),
    }
}
