//! Declared column types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Logical type declared for a column.
///
/// The display names follow the usual dataframe dtype spelling, which is
/// what the spec report prints after each column name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataType {
    /// 64-bit signed integers
    Integer,
    /// 64-bit floats
    Float,
    /// true/false
    Boolean,
    /// Timestamps without timezone
    Temporal,
    /// UTF-8 text
    Text,
    /// Mixed or otherwise untyped data
    Other,
}

impl DataType {
    /// The dtype name printed in reports.
    pub fn name(&self) -> &'static str {
        match self {
            DataType::Integer => "int64",
            DataType::Float => "float64",
            DataType::Boolean => "bool",
            DataType::Temporal => "datetime64",
            DataType::Text => "string",
            DataType::Other => "object",
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
