//! Error types for framesumlib

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while building tables or summarizing them
#[derive(Error, Debug)]
pub enum FramesumError {
    /// A summary option was malformed (mode, line width or column list)
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A column's length does not match the table's row count
    #[error("column '{column}' has {actual} values, expected {expected}")]
    LengthMismatch {
        column: String,
        expected: usize,
        actual: usize,
    },

    /// A column with the same name is already in the table
    #[error("duplicate column name: {0}")]
    DuplicateColumn(String),

    /// Failed to read a CSV file
    #[error("failed to read CSV '{path}': {message}")]
    CsvRead { path: PathBuf, message: String },

    /// Malformed CSV content
    #[error("CSV error: {0}")]
    Csv(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
