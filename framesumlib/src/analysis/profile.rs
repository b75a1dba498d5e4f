//! Per-column structural facts for the spec report.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::data::{Column, DataType, Value};

/// Type, nullability and uniqueness of one column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnProfile {
    /// Column name
    pub name: String,
    /// Declared column type
    pub dtype: DataType,
    /// At least one value is null
    pub has_null: bool,
    /// Distinct count (null counted once) equals the column length
    pub is_unique: bool,
}

/// Profile a single column.
pub fn profile_column(column: &Column) -> ColumnProfile {
    let values = column.values();
    ColumnProfile {
        name: column.name().to_string(),
        dtype: column.dtype(),
        has_null: values.iter().any(Value::is_null),
        is_unique: distinct_count(values) == values.len(),
    }
}

/// Number of distinct values, null included as one value.
pub fn distinct_count(values: &[Value]) -> usize {
    values.iter().collect::<HashSet<_>>().len()
}
