//! Report building and rendering.
//!
//! The data flow is:
//! 1. Table (borrowed, never mutated)
//! 2. Analysis (duplicates, column profiles or distinct-value lines)
//! 3. Report (pre-formatted lines, tagged by kind)
//!
//! A [`Report`] renders through `Display` as the fixed text layout, one line
//! per [`ReportLine`], joined with `\n` and no trailing newline. Callers that
//! want to style lines (the CLI does) walk [`Report::lines`] instead.

use std::io::Write;

use tracing::{debug, warn};

use crate::analysis::{format_distinct, has_duplicates, profile_column, ColumnProfile};
use crate::data::Table;
use crate::options::{Mode, SummaryOptions};
use crate::Result;

/// What a report line represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// The `*****` summary line
    Header,
    /// Spec mode: one column's type, nulls and uniqueness
    ColumnSpec,
    /// Data mode: `<pos>. <name>` above a value listing
    ColumnTitle,
    /// Data mode: the `(...) (N values)` listing
    Values,
    /// Data mode: a requested column that does not exist
    Warning,
}

/// A single pre-formatted report line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportLine {
    pub kind: LineKind,
    pub text: String,
}

impl ReportLine {
    fn new(kind: LineKind, text: String) -> Self {
        Self { kind, text }
    }
}

/// A rendered summary of one table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    /// Mode the report was built in
    pub mode: Mode,
    /// Column count of the table
    pub column_count: usize,
    /// Row count of the table
    pub row_count: usize,
    /// Whether any full row occurs more than once
    pub duplicates: bool,
    /// Names requested in data mode that the table does not have
    pub missing_columns: Vec<String>,
    lines: Vec<ReportLine>,
}

impl Report {
    /// All lines, header first.
    pub fn lines(&self) -> &[ReportLine] {
        &self.lines
    }
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, line) in self.lines.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            f.write_str(&line.text)?;
        }
        Ok(())
    }
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "yes"
    } else {
        "no"
    }
}

fn header_line(title: &str, table: &Table, duplicates: bool) -> ReportLine {
    ReportLine::new(
        LineKind::Header,
        format!(
            "***** {}: {} columns x {} rows, duplicates: {}",
            title,
            table.column_count(),
            table.row_count(),
            yes_no(duplicates)
        ),
    )
}

fn spec_line(index: usize, profile: &ColumnProfile) -> ReportLine {
    ReportLine::new(
        LineKind::ColumnSpec,
        format!(
            "{}. {}: {}, NA: {}, Unique: {}",
            index,
            profile.name,
            profile.dtype,
            yes_no(profile.has_null),
            yes_no(profile.is_unique)
        ),
    )
}

/// Build the structured report for a table.
pub fn build_report(table: &Table, options: &SummaryOptions) -> Report {
    let width = options.effective_line_width();
    debug!(
        mode = %options.mode,
        rows = table.row_count(),
        columns = table.column_count(),
        width,
        "building report"
    );

    let duplicates = has_duplicates(table);
    let mut lines = Vec::new();
    let mut missing_columns = Vec::new();

    match options.mode {
        Mode::Spec => {
            lines.push(header_line("Data Frame", table, duplicates));
            for (i, column) in table.columns().iter().enumerate() {
                lines.push(spec_line(i + 1, &profile_column(column)));
            }
        }
        Mode::Data => {
            lines.push(header_line("Sorted Distinct Values", table, duplicates));
            let requested: Vec<&str> = match &options.columns {
                Some(names) => names.iter().map(String::as_str).collect(),
                None => table.column_names().collect(),
            };
            for name in requested {
                match table.position(name) {
                    Some(index) => {
                        let column = &table.columns()[index];
                        lines.push(ReportLine::new(
                            LineKind::ColumnTitle,
                            format!("{}. {}", index + 1, name),
                        ));
                        lines.push(ReportLine::new(
                            LineKind::Values,
                            format_distinct(column, width),
                        ));
                    }
                    None => {
                        warn!(column = name, "requested column not found");
                        lines.push(ReportLine::new(
                            LineKind::Warning,
                            format!("Warning: Column '{}' not found in the data frame.", name),
                        ));
                        missing_columns.push(name.to_string());
                    }
                }
            }
        }
    }

    Report {
        mode: options.mode,
        column_count: table.column_count(),
        row_count: table.row_count(),
        duplicates,
        missing_columns,
        lines,
    }
}

/// Summarize a table as report text.
///
/// # Example
///
/// ```rust
/// use framesumlib::{summarize, Column, SummaryOptions, Table};
///
/// let table = Table::from_columns([
///     Column::from_values("id", [1, 1, 2]),
///     Column::from_values("name", ["a", "b", "b"]),
/// ])
/// .unwrap();
///
/// let report = summarize(&table, &SummaryOptions::new());
/// assert_eq!(
///     report,
///     "***** Data Frame: 2 columns x 3 rows, duplicates: no\n\
///      1. id: int64, NA: no, Unique: no\n\
///      2. name: string, NA: no, Unique: no"
/// );
/// ```
pub fn summarize(table: &Table, options: &SummaryOptions) -> String {
    build_report(table, options).to_string()
}

/// Summarize a table and write the report, newline-terminated, to `sink`.
pub fn summarize_to<W: Write>(table: &Table, options: &SummaryOptions, mut sink: W) -> Result<()> {
    let report = build_report(table, options);
    writeln!(sink, "{report}")?;
    sink.flush()?;
    Ok(())
}
