//! Table model: values, column types, columns and tables.
//!
//! This module holds the in-memory data the summarizer reads. It provides:
//!
//! - **Values**: [`Value`], a cell with a null-first total order and canonical text form
//! - **Types**: [`DataType`], the declared type of a column
//! - **Tables**: [`Column`] and [`Table`], with equal-length and unique-name invariants
//!
//! ## Example
//!
//! ```rust
//! use framesumlib::data::{Column, Table, Value};
//!
//! let table = Table::from_columns([
//!     Column::from_values("id", [1, 2, 3]),
//!     Column::from_values("score", [Some(0.5), None, Some(1.5)]),
//! ])
//! .unwrap();
//! assert_eq!(table.shape(), (3, 2));
//! assert!(table.column("score").unwrap().values()[1].is_null());
//! ```

pub mod dtype;
pub mod table;
pub mod value;

pub use dtype::DataType;
pub use table::{infer_data_type, Column, Table};
pub use value::Value;
