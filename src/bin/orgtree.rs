// src/bin/orgtree.rs
use clap::Parser;
use colored::Colorize;

use orgtree_core::cli::{self, dispatch, Cli};
use orgtree_core::error::OrgTreeError;
use orgtree_core::exit::OrgTreeExit;

fn main() -> OrgTreeExit {
    let cli = Cli::parse();
    cli::init_logging(cli.verbose);

    match dispatch::execute(&cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{} {e}", "error:".red().bold());
            e.downcast_ref::<OrgTreeError>()
                .map_or(OrgTreeExit::Error, OrgTreeExit::for_error)
        }
    }
}
