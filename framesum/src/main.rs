//! # framesum
//!
//! A CLI tool for summarizing CSV tables: column specs, duplicate rows and
//! sorted distinct values.
//!
//! ## Overview
//!
//! framesum is built on top of framesumlib. It loads a CSV file, infers a
//! type for every column and prints one of two reports.
//!
//! ## Usage
//!
//! ```bash
//! # Column types, nulls and uniqueness
//! framesum data.csv
//!
//! # Sorted distinct values of every column
//! framesum data.csv --mode data
//!
//! # Distinct values of selected columns, in this order, on wider lines
//! framesum data.csv --mode data --columns city,id --width 140
//!
//! # Semicolon separated file without a header row
//! framesum data.csv -d ';' --no-header
//! ```

mod render;

use std::process::ExitCode;

use anyhow::{anyhow, Context};
use clap::{Arg, ArgAction, ArgMatches, Command};
use framesumlib::{build_report, read_csv, CsvOptions, SummaryOptions};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::render::render_report;

/// Build the clap Command structure
fn build_command() -> Command {
    Command::new("framesum")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Arthur Debert")
        .about("Summarize a CSV table: column specs or sorted distinct values")
        .arg(
            Arg::new("path")
                .required(true)
                .help("CSV file to summarize"),
        )
        .arg(
            Arg::new("mode")
                .short('m')
                .long("mode")
                .default_value("spec")
                .help("Report to print: 'spec' (column facts) or 'data' (distinct values)"),
        )
        .arg(
            Arg::new("width")
                .short('w')
                .long("width")
                .default_value("100")
                .allow_negative_numbers(true)
                .help("Maximum width of distinct-value lines (minimum 80)"),
        )
        .arg(
            Arg::new("columns")
                .short('c')
                .long("columns")
                .action(ArgAction::Append)
                .help("Columns to list in data mode, comma separated (can be specified multiple times)"),
        )
        .arg(
            Arg::new("delimiter")
                .short('d')
                .long("delimiter")
                .default_value(",")
                .help("Field delimiter (single character, or 'tab')"),
        )
        .arg(
            Arg::new("no-header")
                .long("no-header")
                .action(ArgAction::SetTrue)
                .help("The first row is data, not column names"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .action(ArgAction::SetTrue)
                .help("Log progress to stderr"),
        )
}

/// Initialize the tracing subscriber for logging.
///
/// `RUST_LOG` wins when set; otherwise only errors are logged, or
/// everything down to debug with `--verbose`.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "error" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Parse the delimiter argument into a single byte
fn parse_delimiter(value: &str) -> Result<u8, anyhow::Error> {
    match value {
        "tab" | "\\t" | "\t" => Ok(b'\t'),
        _ if value.len() == 1 && value.is_ascii() => Ok(value.as_bytes()[0]),
        _ => Err(anyhow!(
            "delimiter must be a single ASCII character, got '{}'",
            value
        )),
    }
}

/// Merge every `--columns` occurrence into one comma separated list
fn extract_columns(matches: &ArgMatches) -> Option<String> {
    matches
        .get_many::<String>("columns")
        .map(|values| values.cloned().collect::<Vec<_>>().join(","))
}

/// Build summary options from matches, validating before any data is read
fn build_options(matches: &ArgMatches) -> Result<SummaryOptions, anyhow::Error> {
    let mode = matches
        .get_one::<String>("mode")
        .map(|s| s.as_str())
        .unwrap_or("spec");
    let width = matches
        .get_one::<String>("width")
        .map(|s| s.as_str())
        .unwrap_or("100");
    let columns = extract_columns(matches);

    Ok(SummaryOptions::parse(mode, width, columns.as_deref())?)
}

fn run(matches: &ArgMatches) -> Result<String, anyhow::Error> {
    let options = build_options(matches)?;

    let path = matches
        .get_one::<String>("path")
        .ok_or_else(|| anyhow!("missing CSV path"))?;
    let delimiter = parse_delimiter(
        matches
            .get_one::<String>("delimiter")
            .map(|s| s.as_str())
            .unwrap_or(","),
    )?;
    let csv_options = CsvOptions::new()
        .delimiter(delimiter)
        .has_headers(!matches.get_flag("no-header"));

    let table = read_csv(path, &csv_options).with_context(|| format!("loading {}", path))?;
    debug!(mode = %options.mode, width = options.effective_line_width(), "summarizing");

    let report = build_report(&table, &options);
    Ok(render_report(&report))
}

fn main() -> ExitCode {
    let matches = build_command().get_matches();
    init_logging(matches.get_flag("verbose"));

    match run(&matches) {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
