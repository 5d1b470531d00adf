use colored::Colorize;

use crate::index::NodeIndex;
use crate::ingest::Table;
use crate::types::BuildReport;

const MAX_LISTED_WARNINGS: usize = 10;

/// Prints row counts and the first few row warnings to stderr.
pub fn print_summary(report: &BuildReport, index: &NodeIndex) {
    eprintln!(
        "{} {} rows used, {} nodes",
        "[OK]".green().bold(),
        report.rows_used,
        index.len()
    );
    if report.rows_skipped > 0 {
        eprintln!(
            "{} {} {} skipped (no hierarchy values)",
            "warn:".yellow().bold(),
            report.rows_skipped,
            pluralize("row", report.rows_skipped)
        );
    }
    if report.rows_malformed > 0 {
        eprintln!(
            "{} {} malformed {} skipped",
            "warn:".yellow().bold(),
            report.rows_malformed,
            pluralize("row", report.rows_malformed)
        );
    }
    print_warnings(report);
}

fn print_warnings(report: &BuildReport) {
    for w in report.warnings.iter().take(MAX_LISTED_WARNINGS) {
        eprintln!("  {} line {}: {}", "-->".blue(), w.line, w.issue);
    }
    if report.warnings.len() > MAX_LISTED_WARNINGS {
        eprintln!(
            "  {}",
            format!("... {} more", report.warnings.len() - MAX_LISTED_WARNINGS).dimmed()
        );
    }
    for amb in &report.ambiguities {
        eprintln!(
            "{} '{}' has {} candidate parents ({}); placed under '{}'",
            "warn:".yellow().bold(),
            amb.child,
            amb.parents.len(),
            amb.parents.join(", "),
            amb.parents.first().map_or("", String::as_str)
        );
    }
}

/// Prints the people under a node as a bullet list.
pub fn print_members(label: &str, members: &[&str]) {
    if members.is_empty() {
        println!("{}", "No employees found under this node.".dimmed());
        return;
    }
    println!(
        "People under {} ({}):",
        label.bold(),
        members.len()
    );
    for m in members {
        println!("- {m}");
    }
}

/// Prints the header and the first rows as read.
pub fn print_preview(table: &Table, rows: usize) {
    println!(
        "{} delimiter '{}', {} columns, {} rows",
        "Raw data:".cyan().bold(),
        table.delimiter,
        table.headers.len(),
        table.rows.len()
    );
    println!("{}", table.headers.join(" | ").bold());
    for row in table.preview(rows) {
        println!("{}", row.cells.join(" | "));
    }
}

fn pluralize(word: &str, n: usize) -> String {
    if n == 1 {
        word.to_string()
    } else {
        format!("{word}s")
    }
}
