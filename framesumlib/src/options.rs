//! Input options for summary reports.
//!
//! This module contains the configuration types that control which report
//! is produced and how wide its distinct-value lines may grow, plus the
//! string parsers used by callers that receive options as text (the CLI).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::FramesumError;
use crate::Result;

/// Smallest line width a report will use; narrower requests are raised to it.
pub const MIN_LINE_WIDTH: usize = 80;

/// Line width used when none is given.
pub const DEFAULT_LINE_WIDTH: usize = 100;

/// Which report to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Column types, nulls and uniqueness
    #[default]
    Spec,
    /// Sorted distinct values per column
    Data,
}

impl FromStr for Mode {
    type Err = FramesumError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "spec" => Ok(Mode::Spec),
            "data" => Ok(Mode::Data),
            _ => Err(FramesumError::InvalidArgument(
                "mode must be 'spec' or 'data'".to_string(),
            )),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Spec => f.write_str("spec"),
            Mode::Data => f.write_str("data"),
        }
    }
}

/// Raise a line width to the [`MIN_LINE_WIDTH`] floor.
pub fn clamp_line_width(width: usize) -> usize {
    width.max(MIN_LINE_WIDTH)
}

/// Parse a line width given as text.
///
/// Any integer is accepted, of any size: negative ones clamp to
/// [`MIN_LINE_WIDTH`] and ones past `usize::MAX` saturate there. Anything
/// that is not an integer is an [`FramesumError::InvalidArgument`].
pub fn parse_line_width(s: &str) -> Result<usize> {
    let text = s.trim();
    let (negative, digits) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(FramesumError::InvalidArgument(
            "line width must be an integer".to_string(),
        ));
    }
    if negative {
        return Ok(MIN_LINE_WIDTH);
    }
    // Only overflow can fail here
    let width = digits.parse::<usize>().unwrap_or(usize::MAX);
    Ok(clamp_line_width(width))
}

/// Parse a comma-separated list of column names, keeping their order.
pub fn parse_columns(s: &str) -> Result<Vec<String>> {
    let names: Vec<String> = s
        .split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect();
    if names.is_empty() {
        return Err(FramesumError::InvalidArgument(
            "columns must be a list of column names".to_string(),
        ));
    }
    Ok(names)
}

/// Options for building a summary report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SummaryOptions {
    /// Report kind
    pub mode: Mode,
    /// Maximum width of a distinct-value line (floored at [`MIN_LINE_WIDTH`])
    pub line_width: usize,
    /// Columns to list in data mode, in the order given (`None` = all, table order)
    pub columns: Option<Vec<String>>,
}

impl Default for SummaryOptions {
    fn default() -> Self {
        Self {
            mode: Mode::Spec,
            line_width: DEFAULT_LINE_WIDTH,
            columns: None,
        }
    }
}

impl SummaryOptions {
    /// Create new default options (spec mode, width 100, all columns).
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the report mode.
    pub fn mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    /// Set the line width. Values below the floor are clamped when used.
    pub fn line_width(mut self, width: usize) -> Self {
        self.line_width = width;
        self
    }

    /// Restrict data mode to these columns, in this order.
    pub fn columns<S: Into<String>>(mut self, names: impl IntoIterator<Item = S>) -> Self {
        self.columns = Some(names.into_iter().map(Into::into).collect());
        self
    }

    /// Line width after applying the floor.
    pub fn effective_line_width(&self) -> usize {
        clamp_line_width(self.line_width)
    }

    /// Build options from text, validating in order: mode, width, columns.
    ///
    /// The first invalid argument fails the whole call.
    pub fn parse(mode: &str, line_width: &str, columns: Option<&str>) -> Result<Self> {
        let mode = Mode::from_str(mode)?;
        let line_width = parse_line_width(line_width)?;
        let columns = columns.map(parse_columns).transpose()?;
        Ok(Self {
            mode,
            line_width,
            columns,
        })
    }
}
