//! In-memory column-major tables.
//!
//! A [`Table`] is an ordered list of named [`Column`]s of equal length.
//! Both invariants (equal length, unique names) are checked when a column
//! is added, so every `Table` value the summarizer sees is well formed.

use crate::error::FramesumError;
use crate::Result;

use super::dtype::DataType;
use super::value::Value;

/// A named, typed sequence of values.
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    name: String,
    dtype: DataType,
    values: Vec<Value>,
}

impl Column {
    /// Create a column with an explicitly declared type.
    pub fn new(name: impl Into<String>, dtype: DataType, values: Vec<Value>) -> Self {
        Self {
            name: name.into(),
            dtype,
            values,
        }
    }

    /// Create a column whose type is inferred from its values.
    ///
    /// See [`infer_data_type`] for the rules.
    pub fn from_values<V, I>(name: impl Into<String>, values: I) -> Self
    where
        V: Into<Value>,
        I: IntoIterator<Item = V>,
    {
        let values: Vec<Value> = values.into_iter().map(Into::into).collect();
        let dtype = infer_data_type(&values);
        Self::new(name, dtype, values)
    }

    /// Column name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declared type.
    pub fn dtype(&self) -> DataType {
        self.dtype
    }

    /// All values in row order.
    pub fn values(&self) -> &[Value] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Infer a column type from its values.
///
/// - Non-null values all of one kind: that kind.
/// - A mix of integers and floats: `Float`.
/// - Any other mix: `Other`.
/// - No non-null values at all: `Float`, since a column of missing markers
///   is a column of NaNs in most dataframe libraries.
pub fn infer_data_type(values: &[Value]) -> DataType {
    let mut inferred: Option<DataType> = None;
    for kind in values.iter().filter_map(Value::data_type) {
        inferred = Some(match (inferred, kind) {
            (None, k) => k,
            (Some(a), b) if a == b => a,
            (Some(DataType::Integer), DataType::Float)
            | (Some(DataType::Float), DataType::Integer) => DataType::Float,
            _ => return DataType::Other,
        });
    }
    inferred.unwrap_or(DataType::Float)
}

/// An ordered collection of equal-length named columns.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    columns: Vec<Column>,
    row_count: usize,
}

impl Table {
    /// Create an empty table (no columns, no rows).
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from columns, validating lengths and names.
    pub fn from_columns(columns: impl IntoIterator<Item = Column>) -> Result<Self> {
        let mut table = Self::new();
        for column in columns {
            table.add_column(column)?;
        }
        Ok(table)
    }

    /// Append a column.
    ///
    /// The first column fixes the row count; later columns must match it.
    pub fn add_column(&mut self, column: Column) -> Result<()> {
        if self.position(column.name()).is_some() {
            return Err(FramesumError::DuplicateColumn(column.name().to_string()));
        }
        if !self.columns.is_empty() && column.len() != self.row_count {
            return Err(FramesumError::LengthMismatch {
                column: column.name().to_string(),
                expected: self.row_count,
                actual: column.len(),
            });
        }
        self.row_count = column.len();
        self.columns.push(column);
        Ok(())
    }

    /// Builder form of [`Table::add_column`].
    pub fn with_column(mut self, column: Column) -> Result<Self> {
        self.add_column(column)?;
        Ok(self)
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn row_count(&self) -> usize {
        self.row_count
    }

    /// `(rows, columns)`
    pub fn shape(&self) -> (usize, usize) {
        (self.row_count, self.columns.len())
    }

    /// Columns in table order.
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Look up a column by name.
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Zero-based position of a column in table order.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.name == name)
    }

    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|c| c.name.as_str())
    }

    /// The values of row `index`, one per column in table order.
    ///
    /// Panics if `index >= row_count()`.
    pub fn row(&self, index: usize) -> Vec<&Value> {
        self.columns.iter().map(|c| &c.values[index]).collect()
    }

    /// Iterate over all rows.
    pub fn rows(&self) -> impl Iterator<Item = Vec<&Value>> + '_ {
        (0..self.row_count).map(move |i| self.row(i))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_table() -> Table {
        Table::from_columns([
            Column::from_values("id", [1, 2, 3]),
            Column::from_values("name", ["a", "b", "c"]),
        ])
        .unwrap()
    }

    #[test]
    fn test_shape() {
        let table = sample_table();
        assert_eq!(table.row_count(), 3);
        assert_eq!(table.column_count(), 2);
        assert_eq!(table.shape(), (3, 2));
    }

    #[test]
    fn test_empty_table() {
        let table = Table::new();
        assert_eq!(table.shape(), (0, 0));
        assert_eq!(table.rows().count(), 0);
    }

    #[test]
    fn test_length_mismatch_rejected() {
        let err = sample_table()
            .with_column(Column::from_values("short", [1]))
            .unwrap_err();
        match err {
            FramesumError::LengthMismatch {
                column,
                expected,
                actual,
            } => {
                assert_eq!(column, "short");
                assert_eq!(expected, 3);
                assert_eq!(actual, 1);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_duplicate_column_rejected() {
        let err = sample_table()
            .with_column(Column::from_values("id", [7, 8, 9]))
            .unwrap_err();
        assert!(matches!(err, FramesumError::DuplicateColumn(name) if name == "id"));
    }

    #[test]
    fn test_position_and_lookup() {
        let table = sample_table();
        assert_eq!(table.position("id"), Some(0));
        assert_eq!(table.position("name"), Some(1));
        assert_eq!(table.position("missing"), None);
        assert_eq!(table.column("name").unwrap().len(), 3);
        assert_eq!(table.column_names().collect::<Vec<_>>(), vec!["id", "name"]);
    }

    #[test]
    fn test_rows() {
        let table = sample_table();
        let row = table.row(1);
        assert_eq!(row, vec![&Value::from(2), &Value::from("b")]);
        assert_eq!(table.rows().count(), 3);
    }

    #[test]
    fn test_infer_data_type() {
        assert_eq!(
            infer_data_type(&[Value::from(1), Value::Null]),
            DataType::Integer
        );
        assert_eq!(
            infer_data_type(&[Value::from(1), Value::from(2.5)]),
            DataType::Float
        );
        assert_eq!(
            infer_data_type(&[Value::from(1), Value::from("x")]),
            DataType::Other
        );
        assert_eq!(infer_data_type(&[Value::Null, Value::Null]), DataType::Float);
        assert_eq!(infer_data_type(&[]), DataType::Float);
        assert_eq!(
            infer_data_type(&[Value::from(true), Value::from(false)]),
            DataType::Boolean
        );
    }
}
