// tests/command_parsing_test.rs
use clap::Parser;
use orgtree_core::cli::args::{Cli, Commands};
use orgtree_core::cli::handlers::{handle_edges, handle_export};
use orgtree_core::config::HierarchyMode;
use orgtree_core::error::OrgTreeError;
use orgtree_core::exit::OrgTreeExit;
use std::fs;
use std::path::Path;

#[test]
fn test_members_with_node_and_overrides() {
    let cli = Cli::try_parse_from([
        "orgtree",
        "members",
        "org.csv",
        "Eng / Backend",
        "--levels",
        "DIVISION,DEPT",
        "--name",
        "NAMA",
        "--strict",
    ])
    .unwrap();
    let Commands::Members { input, node, strict } = cli.command else {
        panic!("expected members");
    };
    assert_eq!(input.file, Path::new("org.csv"));
    assert_eq!(node.as_deref(), Some("Eng / Backend"));
    assert!(strict);

    let overrides = input.overrides();
    assert_eq!(overrides.levels, Some(vec!["DIVISION".into(), "DEPT".into()]));
    assert_eq!(overrides.name.as_deref(), Some("NAMA"));
    assert_eq!(overrides.mode, None);
}

#[test]
fn test_no_levels_flag_means_no_override() {
    let cli = Cli::try_parse_from(["orgtree", "nodes", "org.csv"]).unwrap();
    let Commands::Nodes { input } = cli.command else {
        panic!("expected nodes");
    };
    assert!(input.overrides().levels.is_none());
}

#[test]
fn test_global_flags_and_mode() {
    let cli = Cli::try_parse_from([
        "orgtree",
        "tree",
        "org.csv",
        "--mode",
        "inferred",
        "--depth",
        "2",
        "-v",
        "--config",
        "alt.toml",
    ])
    .unwrap();
    assert!(cli.verbose);
    assert_eq!(cli.config.as_deref(), Some(Path::new("alt.toml")));
    let Commands::Tree { input, depth, node } = cli.command else {
        panic!("expected tree");
    };
    assert_eq!(input.mode, Some(HierarchyMode::Inferred));
    assert_eq!(depth, Some(2));
    assert!(node.is_none());
}

#[test]
fn test_preview_default_rows() {
    let cli = Cli::try_parse_from(["orgtree", "preview", "org.csv", "--delimiter", ";"]).unwrap();
    let Commands::Preview { input, rows } = cli.command else {
        panic!("expected preview");
    };
    assert_eq!(rows, 5);
    assert_eq!(input.delimiter, Some(';'));
}

#[test]
fn test_missing_file_is_usage_error() {
    assert!(Cli::try_parse_from(["orgtree", "tree"]).is_err());
    assert!(Cli::try_parse_from(["orgtree", "tree", "a.csv", "--mode", "guess"]).is_err());
}

fn input_for(path: &Path, extra: &[&str]) -> orgtree_core::cli::args::InputArgs {
    let file = path.to_string_lossy().into_owned();
    let mut argv = vec!["orgtree", "nodes", file.as_str()];
    argv.extend_from_slice(extra);
    match Cli::try_parse_from(argv).unwrap().command {
        Commands::Nodes { input } => input,
        _ => unreachable!(),
    }
}

#[test]
fn test_export_handler_writes_file() {
    let dir = tempfile::tempdir().unwrap();
    let csv = dir.path().join("org.csv");
    fs::write(&csv, "DIVISION,DEPT,NAMA\nEng,Backend,Alice\n").unwrap();
    let cfg = dir.path().join("orgtree.toml");
    fs::write(&cfg, "").unwrap();
    let out = dir.path().join("members.csv");

    let code = handle_export(Some(&cfg), &input_for(&csv, &[]), Some(&out)).unwrap();
    assert_eq!(code, OrgTreeExit::Success);
    assert_eq!(
        fs::read_to_string(&out).unwrap(),
        "node_id,person_name\nEng / Backend,Alice\n"
    );
}

#[test]
fn test_edges_handler_rejects_explicit_mode() {
    let dir = tempfile::tempdir().unwrap();
    let csv = dir.path().join("org.csv");
    fs::write(&csv, "DIVISION,DEPT,NAMA\nEng,Backend,Alice\n").unwrap();
    let cfg = dir.path().join("orgtree.toml");
    fs::write(&cfg, "").unwrap();

    let err = handle_edges(Some(&cfg), &input_for(&csv, &[]), None).unwrap_err();
    let lib = err.downcast_ref::<OrgTreeError>().unwrap();
    assert!(matches!(lib, OrgTreeError::InvalidConfig(_)));
    assert_eq!(OrgTreeExit::for_error(lib), OrgTreeExit::ConfigError);
}
