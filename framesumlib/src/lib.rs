//! # framesumlib
//!
//! A diagnostic summarizer for tabular data: what a table looks like, and
//! what is in it, in a few lines of fixed-layout text.
//!
//! ## Overview
//!
//! Given a [`Table`] of named, typed columns, the library produces one of two
//! reports:
//!
//! - **Spec** ([`Mode::Spec`]): column count, row count and duplicate-row
//!   presence, then one line per column with its type, whether it has nulls
//!   and whether all its values are distinct
//! - **Data** ([`Mode::Data`]): the same header, then for each requested
//!   column its sorted distinct values, cut to fit a line width
//!
//! ## Pipeline
//!
//! - [`source`]: load a table from CSV with type inference (optional)
//! - [`data`]: the table model (`Value`, `DataType`, `Column`, `Table`)
//! - [`analysis`]: duplicate rows, column profiles, distinct-value listings
//! - [`output`]: build the [`Report`] and render or write it
//!
//! Everything is synchronous and side-effect free except [`summarize_to`],
//! which writes to a sink the caller provides.
//!
//! ## Example
//!
//! ```rust
//! use framesumlib::{summarize, Column, Mode, SummaryOptions, Table};
//!
//! let table = Table::from_columns([
//!     Column::from_values("x", [None, Some(5), Some(3), Some(5)]),
//! ])
//! .unwrap();
//!
//! let spec = summarize(&table, &SummaryOptions::new());
//! assert!(spec.starts_with("***** Data Frame: 1 columns x 4 rows, duplicates: yes"));
//! assert!(spec.ends_with("1. x: int64, NA: yes, Unique: no"));
//!
//! let data = summarize(&table, &SummaryOptions::new().mode(Mode::Data));
//! assert!(data.ends_with("1. x\n(None, 3, 5) (3 values)"));
//! ```

pub mod analysis;
pub mod data;
pub mod error;
pub mod options;
pub mod output;
pub mod source;

pub use analysis::{
    distinct_values, format_distinct, has_duplicates, profile_column, ColumnProfile,
};
pub use data::{Column, DataType, Table, Value};
pub use error::FramesumError;
pub use options::{
    clamp_line_width, parse_columns, parse_line_width, Mode, SummaryOptions, DEFAULT_LINE_WIDTH,
    MIN_LINE_WIDTH,
};
pub use output::{build_report, summarize, summarize_to, LineKind, Report, ReportLine};
pub use source::{parse_csv_str, read_csv, CsvOptions};

/// Result type for framesumlib operations
pub type Result<T> = std::result::Result<T, FramesumError>;
