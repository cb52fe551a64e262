//! Rendering of diff reports and line diffs.
//!
//! Text output uses the classic `+`/`-` gutter with aligned line numbers;
//! JSON output serializes the same structures the library crates expose.

use colored::{ColoredString, Colorize};
use serde::Serialize;
use serde_json::Value;

use apidrift_risk::RiskBand;
use apidrift_textdiff::{DiffEntry, DiffLine};
use apidrift_types::{Change, DiffReport};

/// Pretty-print a document into the line sequence fed to the line differ.
///
/// Two-space indentation, key order as parsed (`preserve_order`), so the
/// rendering is deterministic for a given input.
pub fn pretty_lines(value: &Value) -> Vec<String> {
    let text = serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string());
    text.lines().map(str::to_string).collect()
}

/// Print the change list, summary, and risk score.
pub fn print_schema_section(report: &DiffReport, score: u8, band: RiskBand) {
    if report.is_empty() {
        println!("{}", "No schema changes.".green());
    } else {
        for change in &report.changes {
            println!("  {}", colorize_change(change));
        }
    }

    let summary = &report.summary;
    println!();
    println!(
        "Summary: {} added, {} removed, {} risky",
        summary.added.to_string().green(),
        summary.removed.to_string().red(),
        summary.risky.to_string().yellow(),
    );
    println!("Risk: {}", colorize_band(score, band).bold());
}

/// Print the side-by-side line diff.
pub fn print_line_section(lines: &[DiffLine]) {
    let width = number_width(lines);
    for line in lines {
        let row = format_row(line, width);
        match line {
            DiffEntry::Unchanged { .. } => println!("{}", row.dimmed()),
            DiffEntry::Added { .. } => println!("{}", row.green()),
            DiffEntry::Removed { .. } => println!("{}", row.red()),
        }
    }
}

/// Print any serializable payload as pretty JSON.
pub fn print_json<T: Serialize>(payload: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(payload)?);
    Ok(())
}

fn colorize_change(change: &Change) -> ColoredString {
    let text = change.to_string();
    match change {
        Change::Removed { .. } => text.red(),
        Change::Added { .. } => text.green(),
        Change::TypeChanged { .. } => text.yellow(),
    }
}

fn colorize_band(score: u8, band: RiskBand) -> ColoredString {
    let label = format!("{score}/100 ({band})");
    match band {
        RiskBand::Low => label.green(),
        RiskBand::Medium => label.yellow(),
        RiskBand::High => label.red(),
    }
}

/// Gutter width: digits of the largest line number on either side.
fn number_width(lines: &[DiffLine]) -> usize {
    lines
        .iter()
        .map(|line| match line {
            DiffEntry::Unchanged { old_num, new_num, .. } => (*old_num).max(*new_num),
            DiffEntry::Added { new_num, .. } => *new_num,
            DiffEntry::Removed { old_num, .. } => *old_num,
        })
        .max()
        .unwrap_or(0)
        .to_string()
        .len()
}

fn format_row(line: &DiffLine, width: usize) -> String {
    match line {
        DiffEntry::Unchanged { token, old_num, new_num } => {
            format!("{old_num:>width$} {new_num:>width$}   {token}")
        }
        DiffEntry::Removed { token, old_num } => {
            format!("{old_num:>width$} {blank:>width$} - {token}", blank = "")
        }
        DiffEntry::Added { token, new_num } => {
            format!("{blank:>width$} {new_num:>width$} + {token}", blank = "")
        }
    }
}
