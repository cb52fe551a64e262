use std::time::Duration;

use anyhow::Context;
use serde::Serialize;
use serde_json::Value;

use apidrift_risk::{score_report, RiskBand};
use apidrift_schema::diff_schemas;
use apidrift_textdiff::{diff_lines, DiffLine};
use apidrift_types::DiffReport;

use crate::cli::{Cli, Command, CompareArgs, OutputFormat};
use crate::render;
use crate::source;

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    let timeout = Duration::from_secs(cli.timeout);
    match &cli.command {
        Command::Report(args) => cmd_report(args, timeout, &cli.format),
        Command::Schema(args) => cmd_schema(args, timeout, &cli.format),
        Command::Lines(args) => cmd_lines(args, timeout, &cli.format),
    }
}

#[derive(Serialize)]
struct SchemaPayload<'a> {
    report: &'a DiffReport,
    score: u8,
    band: RiskBand,
}

#[derive(Serialize)]
struct LinesPayload<'a> {
    lines: &'a [DiffLine],
}

#[derive(Serialize)]
struct ReportPayload<'a> {
    #[serde(flatten)]
    schema: SchemaPayload<'a>,
    lines: &'a [DiffLine],
}

fn load_pair(args: &CompareArgs, timeout: Duration) -> anyhow::Result<(Value, Value)> {
    let old = source::load_json(&args.old, timeout)
        .with_context(|| format!("loading old document from {}", args.old))?;
    let new = source::load_json(&args.new, timeout)
        .with_context(|| format!("loading new document from {}", args.new))?;
    Ok((old, new))
}

fn cmd_report(args: &CompareArgs, timeout: Duration, format: &OutputFormat) -> anyhow::Result<()> {
    let (old, new) = load_pair(args, timeout)?;
    let report = diff_schemas(&old, &new);
    let score = score_report(&report);
    let band = RiskBand::from_score(score);
    let lines = diff_lines(&render::pretty_lines(&old), &render::pretty_lines(&new));

    match format {
        OutputFormat::Text => {
            render::print_schema_section(&report, score, band);
            println!();
            render::print_line_section(&lines);
            Ok(())
        }
        OutputFormat::Json => render::print_json(&ReportPayload {
            schema: SchemaPayload {
                report: &report,
                score,
                band,
            },
            lines: &lines,
        }),
    }
}

fn cmd_schema(args: &CompareArgs, timeout: Duration, format: &OutputFormat) -> anyhow::Result<()> {
    let (old, new) = load_pair(args, timeout)?;
    let report = diff_schemas(&old, &new);
    let score = score_report(&report);
    let band = RiskBand::from_score(score);

    match format {
        OutputFormat::Text => {
            render::print_schema_section(&report, score, band);
            Ok(())
        }
        OutputFormat::Json => render::print_json(&SchemaPayload {
            report: &report,
            score,
            band,
        }),
    }
}

fn cmd_lines(args: &CompareArgs, timeout: Duration, format: &OutputFormat) -> anyhow::Result<()> {
    let (old, new) = load_pair(args, timeout)?;
    let lines = diff_lines(&render::pretty_lines(&old), &render::pretty_lines(&new));

    match format {
        OutputFormat::Text => {
            render::print_line_section(&lines);
            Ok(())
        }
        OutputFormat::Json => render::print_json(&LinesPayload { lines: &lines }),
    }
}
