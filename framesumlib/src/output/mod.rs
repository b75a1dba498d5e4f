//! Output: turn analysis results into report text.
//!
//! This module handles the final stage of the pipeline. It provides:
//!
//! - **Report**: header facts plus pre-formatted, kind-tagged lines
//! - **summarize**: the report as a string
//! - **summarize_to**: the report written to any `io::Write` sink
//!
//! Building a report is pure; writing it is left to the caller's sink.
//!
//! ## Example
//!
//! ```rust
//! use framesumlib::output::{build_report, LineKind};
//! use framesumlib::{Column, Mode, SummaryOptions, Table};
//!
//! let table = Table::from_columns([Column::from_values("x", [1, 2])]).unwrap();
//! let options = SummaryOptions::new().mode(Mode::Data).columns(["x", "y"]);
//! let report = build_report(&table, &options);
//! assert_eq!(report.lines()[0].kind, LineKind::Header);
//! assert_eq!(report.missing_columns, vec!["y".to_string()]);
//! ```

pub mod report;

pub use report::{build_report, summarize, summarize_to, LineKind, Report, ReportLine};
