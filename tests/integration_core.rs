// tests/integration_core.rs
//! Table text through to hierarchy, queries, and exports.

use orgtree_core::config::{Config, HierarchyMode, InputConfig};
use orgtree_core::error::OrgTreeError;
use orgtree_core::export::{write_edges, write_membership, TreemapData};
use orgtree_core::hierarchy::{self, Hierarchy};
use orgtree_core::ingest::{Delimiter, Table};
use orgtree_core::query::Selection;
use orgtree_core::session::Session;
use orgtree_core::types::RowIssue;

const ORG: &str = "DIVISION,DEPT,NAMA\nEng,Backend,Alice\nEng,Backend,Bob\nEng,Frontend,Carol\n";

const INFERRED: &str = "NAMA;POSITION;DIVISION;DEPARTMENT;SECTION\n\
Ann;General Manager;Operations;;\n\
Ben;Plant Manager;Operations North;Plant;\n\
Cat;Process Engineer;Operations North;Plant 1;Line A\n\
Dan;Driver;Operations;;\n";

fn build(text: &str, config: &Config) -> Hierarchy {
    let table = Table::parse(text, &config.input).unwrap();
    hierarchy::build(&table, config).unwrap()
}

fn inferred_config() -> Config {
    let mut config = Config::default();
    config.hierarchy.mode = HierarchyMode::Inferred;
    config
}

#[test]
fn test_explicit_pipeline() {
    let built = build(ORG, &Config::default());
    assert!(built.graph.is_none());
    assert_eq!(built.report.rows_read, 3);
    assert_eq!(built.report.rows_used, 3);
    assert_eq!(built.report.rows_skipped, 0);

    let ids: Vec<_> = built.index.nodes().map(|n| n.id.as_str()).collect();
    assert_eq!(ids, ["Eng", "Eng / Backend", "Eng / Frontend"]);
    assert_eq!(built.index.members_under("Eng"), ["Alice", "Bob", "Carol"]);
}

#[test]
fn test_semicolon_input_is_sniffed() {
    let text = ORG.replace(',', ";");
    let table = Table::parse(&text, &InputConfig::default()).unwrap();
    assert_eq!(table.delimiter, Delimiter::Semicolon);
    let built = hierarchy::build(&table, &Config::default()).unwrap();
    assert_eq!(built.index.members_under(""), ["Alice", "Bob", "Carol"]);
}

#[test]
fn test_row_without_levels_is_dropped() {
    let text = format!("{ORG},,Dave\n");
    let built = build(&text, &Config::default());
    assert_eq!(built.report.rows_read, 4);
    assert_eq!(built.report.rows_skipped, 1);
    assert!(built
        .report
        .warnings
        .iter()
        .any(|w| w.issue == RowIssue::EmptyHierarchy));
    assert!(!built.index.members_under("").contains(&"Dave"));
}

#[test]
fn test_malformed_rows_are_reported() {
    let text = "DIVISION,DEPT,NAMA\nEng,Backend,Alice,extra\nEng,Frontend\nEng,Backend,Bob\n";
    let config = Config {
        input: InputConfig {
            delimiter: Some(','),
            ..InputConfig::default()
        },
        ..Config::default()
    };
    let built = build(text, &config);
    assert_eq!(built.report.rows_read, 3);
    assert_eq!(built.report.rows_malformed, 1);
    assert_eq!(built.index.members_under("Eng / Backend"), ["Bob"]);
    // Short row keeps its levels but has no name.
    assert_eq!(built.index.members_under("Eng / Frontend"), [""]);
    assert!(built.report.has_warnings());
}

#[test]
fn test_missing_level_column_is_config_error() {
    let mut config = Config::default();
    config.hierarchy.levels = vec!["REGION".into()];
    let table = Table::parse(ORG, &config.input).unwrap();
    let err = hierarchy::build(&table, &config).unwrap_err();
    assert!(matches!(err, OrgTreeError::MissingColumn { .. }));
    assert!(err.is_config_error());
}

#[test]
fn test_empty_input_is_rejected() {
    let err = Table::parse("", &InputConfig::default()).unwrap_err();
    assert!(matches!(err, OrgTreeError::EmptyInput));
    let err = Table::parse("\u{feff}\n", &InputConfig::default()).unwrap_err();
    assert!(matches!(err, OrgTreeError::EmptyInput));
}

#[test]
fn test_session_keeps_state_on_bad_upload() {
    let mut session = Session::new(Config::default());
    assert!(session.members_under(Selection::Root).is_empty());

    session.load_bytes(ORG.as_bytes().to_vec()).unwrap();
    assert_eq!(session.members_under(Selection::Root).len(), 3);

    let err = session.load_bytes(vec![0xff, 0xfe]).unwrap_err();
    assert!(matches!(err, OrgTreeError::Encoding(_)));
    assert_eq!(session.members_under(Selection::Root).len(), 3);

    assert!(session.load_bytes(Vec::new()).is_err());
    assert_eq!(
        session.members_under(Selection::Node("Eng / Frontend")),
        ["Carol"]
    );

    session.clear();
    assert!(session.hierarchy().is_none());
}

#[test]
fn test_sessions_are_independent() {
    let mut a = Session::new(Config::default());
    let b = Session::new(Config::default());
    a.load_bytes(ORG.as_bytes().to_vec()).unwrap();
    assert!(a.hierarchy().is_some());
    assert!(b.hierarchy().is_none());
}

#[test]
fn test_membership_export() {
    let built = build(ORG, &Config::default());
    let mut out = Vec::new();
    let rows = write_membership(&built.index, &mut out, ',').unwrap();
    assert_eq!(rows, 3);
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "node_id,person_name\nEng / Backend,Alice\nEng / Backend,Bob\nEng / Frontend,Carol\n"
    );
}

#[test]
fn test_treemap_arrays() {
    let built = build(ORG, &Config::default());
    let data = TreemapData::from_index(&built.index);
    assert_eq!(data.ids, ["Eng", "Eng / Backend", "Eng / Frontend"]);
    assert_eq!(data.labels, ["Eng", "Backend", "Frontend"]);
    assert_eq!(data.parents, ["", "Eng", "Eng"]);
    assert_eq!(data.values, [0, 2, 1]);
    assert_eq!(data.totals, [3, 2, 1]);

    let json: serde_json::Value = serde_json::from_str(&data.to_json().unwrap()).unwrap();
    assert_eq!(json["ids"].as_array().map(Vec::len), Some(3));
}

#[test]
fn test_inferred_pipeline() {
    let built = build(INFERRED, &inferred_config());
    let graph = built.graph.as_ref().unwrap();
    assert_eq!(graph.edges.len(), 2);
    assert_eq!(graph.roots(), vec![0, 3]);
    assert!(built.report.ambiguities.is_empty());

    assert_eq!(
        built.index.members_under("General Manager"),
        ["Ann", "Ben", "Cat"]
    );
    assert_eq!(built.index.members_under("Driver"), ["Dan"]);
    assert!(built
        .index
        .contains("General Manager / Plant Manager / Process Engineer"));
}

#[test]
fn test_inferred_ambiguity_uses_first_claim() {
    let text = "NAMA,POSITION,DIVISION\n\
Ann,General Manager,Ops\n\
Ali,Head of Ops,Ops\n\
Ben,Plant Manager,Ops North\n";
    let built = build(text, &inferred_config());
    let graph = built.graph.as_ref().unwrap();
    assert_eq!(graph.parents_of(2), [0, 1]);
    assert_eq!(graph.tree_parent(2), Some(0));
    assert_eq!(built.report.ambiguities.len(), 1);
    assert_eq!(built.report.ambiguities[0].child, "Plant Manager");
    assert_eq!(built.index.members_under("General Manager"), ["Ann", "Ben"]);
    assert_eq!(built.index.members_under("Head of Ops"), ["Ali"]);
}

#[test]
fn test_edge_export() {
    let built = build(INFERRED, &inferred_config());
    let mut out = Vec::new();
    let rows = write_edges(built.graph.as_ref().unwrap(), &mut out, ',').unwrap();
    assert_eq!(rows, 2);
    let text = String::from_utf8(out).unwrap();
    let mut lines = text.lines();
    assert_eq!(lines.next(), Some("parent,child,matched_on"));
    assert_eq!(lines.next(), Some("General Manager,Plant Manager,division"));
    assert_eq!(lines.next(), Some("Plant Manager,Process Engineer,department"));
}

#[test]
fn test_title_with_separator_keeps_parent_chain() {
    let text = "NAMA,POSITION,DIVISION\n\
Ann,General Manager,Ops\n\
Ben,Plant Manager / Maintenance,Ops North\n";
    let built = build(text, &inferred_config());
    let node = built
        .index
        .get("General Manager / Plant Manager / Maintenance")
        .unwrap();
    assert_eq!(node.parent.as_deref(), Some("General Manager / Plant Manager"));
    assert_eq!(node.members, ["Ben"]);
    assert_eq!(built.index.get("General Manager").unwrap().total_count, 2);
    assert!(built
        .report
        .warnings
        .iter()
        .any(|w| matches!(&w.issue, RowIssue::SeparatorInValue { value } if value == "Plant Manager / Maintenance")));
}

#[test]
fn test_level_value_with_separator_matches_query_and_totals() {
    let text = "DIVISION,DEPT,NAMA\nR&D / Labs,,Xia\nR&D,Labs,Yan\n";
    let built = build(text, &Config::default());
    assert_eq!(built.index.len(), 2);
    let rd = built.index.get("R&D").unwrap();
    assert_eq!(rd.total_count, 2);
    assert_eq!(built.index.members_under("R&D"), ["Xia", "Yan"]);
    let data = TreemapData::from_index(&built.index);
    assert_eq!(data.parents, ["", "R&D"]);
    assert_eq!(data.totals, [2, 2]);
}
