//! Table sources: load data into a [`Table`](crate::data::Table).
//!
//! The summarizer works on any in-memory table; this module covers the
//! common case of loading one from CSV. It provides:
//!
//! - **CSV reading**: [`read_csv`] for files, [`parse_csv_str`] for text
//! - **Type inference**: integer, float, boolean, timestamp or text per column
//!
//! ## Example
//!
//! ```rust
//! use framesumlib::data::DataType;
//! use framesumlib::source::{parse_csv_str, CsvOptions};
//!
//! let table = parse_csv_str("id,when\n1,2024-01-01\n2,NA\n", &CsvOptions::new()).unwrap();
//! assert_eq!(table.column("id").unwrap().dtype(), DataType::Integer);
//! assert_eq!(table.column("when").unwrap().dtype(), DataType::Temporal);
//! ```

pub mod reader;

pub use reader::{parse_csv_str, read_csv, CsvOptions, NULL_MARKERS};
