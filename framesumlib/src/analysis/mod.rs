//! Table analysis: the facts a report is built from.
//!
//! This module holds the three leaf computations behind every report:
//!
//! - **Duplicates**: does any full row occur more than once (`has_duplicates`)
//! - **Profiles**: per-column type, null presence and uniqueness (`profile_column`)
//! - **Distinct values**: sorted, width-bounded value listings (`format_distinct`)
//!
//! Each function borrows the table or column and allocates only its result.
//!
//! ## Example
//!
//! ```rust
//! use framesumlib::analysis::{format_distinct, has_duplicates, profile_column};
//! use framesumlib::data::{Column, Table};
//!
//! let table = Table::from_columns([Column::from_values("x", [Some(5), None, Some(3), Some(5)])]).unwrap();
//! assert!(has_duplicates(&table));
//!
//! let column = table.column("x").unwrap();
//! assert!(profile_column(column).has_null);
//! assert_eq!(format_distinct(column, 100), "(None, 3, 5) (3 values)");
//! ```

pub mod distinct;
pub mod duplicates;
pub mod profile;

pub use distinct::{distinct_values, format_distinct};
pub use duplicates::has_duplicates;
pub use profile::{distinct_count, profile_column, ColumnProfile};
