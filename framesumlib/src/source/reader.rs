//! CSV loading with per-column type inference.
//!
//! Every cell is first checked against the null markers; the remaining
//! cells of a column decide its type, first match wins:
//!
//! 1. all parse as `i64`: `Integer`
//! 2. all parse as `f64`: `Float`
//! 3. all are `true`/`false` (any case): `Boolean`
//! 4. all parse as timestamps or dates: `Temporal`
//! 5. otherwise: `Text`
//!
//! A column with no non-null cells is `Float`.

use std::io;
use std::path::Path;

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::data::{Column, DataType, Table, Value};
use crate::error::FramesumError;
use crate::Result;

/// Cell texts read as missing values.
pub const NULL_MARKERS: &[&str] = &["", "NA", "N/A", "NaN", "nan", "null", "NULL", "None"];

const DATETIME_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"];
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Configuration for CSV parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CsvOptions {
    /// Field delimiter byte
    pub delimiter: u8,
    /// First record holds column names (otherwise `column_1`, `column_2`, ...)
    pub has_headers: bool,
}

impl Default for CsvOptions {
    fn default() -> Self {
        Self {
            delimiter: b',',
            has_headers: true,
        }
    }
}

impl CsvOptions {
    /// Create default options (comma separated, with a header row).
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the field delimiter.
    pub fn delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Set whether the first record is a header row.
    pub fn has_headers(mut self, has_headers: bool) -> Self {
        self.has_headers = has_headers;
        self
    }

    fn reader_builder(&self) -> csv::ReaderBuilder {
        let mut builder = csv::ReaderBuilder::new();
        builder
            .delimiter(self.delimiter)
            .has_headers(self.has_headers)
            .trim(csv::Trim::All);
        builder
    }
}

/// Read a CSV file into a table.
pub fn read_csv(path: impl AsRef<Path>, options: &CsvOptions) -> Result<Table> {
    let path = path.as_ref();
    let to_error = |e: csv::Error| FramesumError::CsvRead {
        path: path.to_path_buf(),
        message: e.to_string(),
    };

    let reader = options.reader_builder().from_path(path).map_err(to_error)?;
    let table = load(reader, options.has_headers).map_err(|e| match e {
        LoadError::Csv(e) => to_error(e),
        LoadError::Table(e) => e,
    })?;
    debug!(
        path = %path.display(),
        rows = table.row_count(),
        columns = table.column_count(),
        "loaded CSV"
    );
    Ok(table)
}

/// Parse CSV text into a table.
pub fn parse_csv_str(text: &str, options: &CsvOptions) -> Result<Table> {
    let reader = options.reader_builder().from_reader(text.as_bytes());
    load(reader, options.has_headers).map_err(|e| match e {
        LoadError::Csv(e) => FramesumError::Csv(e.to_string()),
        LoadError::Table(e) => e,
    })
}

/// Loading fails either in the CSV reader or while assembling the table.
enum LoadError {
    Csv(csv::Error),
    Table(FramesumError),
}

impl From<csv::Error> for LoadError {
    fn from(e: csv::Error) -> Self {
        LoadError::Csv(e)
    }
}

fn load<R: io::Read>(
    mut reader: csv::Reader<R>,
    has_headers: bool,
) -> std::result::Result<Table, LoadError> {
    let headers: Option<Vec<String>> = if has_headers {
        Some(reader.headers()?.iter().map(str::to_string).collect())
    } else {
        None
    };
    let records = reader
        .records()
        .collect::<std::result::Result<Vec<csv::StringRecord>, csv::Error>>()?;

    let width = match &headers {
        Some(names) => names.len(),
        None => records.first().map_or(0, csv::StringRecord::len),
    };
    let names = headers.unwrap_or_else(|| (1..=width).map(|i| format!("column_{i}")).collect());

    let mut table = Table::new();
    for (index, name) in names.into_iter().enumerate() {
        let cells: Vec<Option<&str>> = records
            .iter()
            .map(|record| record.get(index).filter(|cell| !is_null_marker(cell)))
            .collect();
        let (dtype, values) = infer_column(&cells);
        debug!(column = %name, dtype = %dtype, "inferred column type");
        table
            .add_column(Column::new(name, dtype, values))
            .map_err(LoadError::Table)?;
    }
    Ok(table)
}

fn is_null_marker(cell: &str) -> bool {
    NULL_MARKERS.iter().any(|marker| *marker == cell)
}

/// Pick the first type every present cell parses as, and convert the cells.
fn infer_column(cells: &[Option<&str>]) -> (DataType, Vec<Value>) {
    if cells.iter().all(Option::is_none) {
        return (DataType::Float, vec![Value::Null; cells.len()]);
    }

    let parsers: [(DataType, fn(&str) -> Option<Value>); 4] = [
        (DataType::Integer, |s| s.parse::<i64>().ok().map(Value::Integer)),
        (DataType::Float, |s| s.parse::<f64>().ok().map(Value::float)),
        (DataType::Boolean, |s| parse_bool(s).map(Value::Boolean)),
        (DataType::Temporal, |s| parse_temporal(s).map(Value::Temporal)),
    ];
    for (dtype, parse) in parsers {
        if let Some(values) = convert(cells, parse) {
            return (dtype, values);
        }
    }

    let values = cells
        .iter()
        .map(|cell| cell.map_or(Value::Null, Value::from))
        .collect();
    (DataType::Text, values)
}

/// Convert every cell, or `None` if any present cell fails to parse.
fn convert(cells: &[Option<&str>], parse: fn(&str) -> Option<Value>) -> Option<Vec<Value>> {
    cells
        .iter()
        .map(|cell| match cell {
            None => Some(Value::Null),
            Some(text) => parse(text),
        })
        .collect()
}

fn parse_bool(s: &str) -> Option<bool> {
    if s.eq_ignore_ascii_case("true") {
        Some(true)
    } else if s.eq_ignore_ascii_case("false") {
        Some(false)
    } else {
        None
    }
}

fn parse_temporal(s: &str) -> Option<NaiveDateTime> {
    DATETIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(s, format).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(s, DATE_FORMAT)
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn parse(text: &str) -> Table {
        parse_csv_str(text, &CsvOptions::new()).unwrap()
    }

    fn dtypes(table: &Table) -> Vec<DataType> {
        table.columns().iter().map(Column::dtype).collect()
    }

    #[test]
    fn test_type_inference() {
        let table = parse(
            "id,score,active,seen,name\n\
             1,1.5,true,2024-01-02,alice\n\
             2,2,FALSE,2024-01-03 10:30:00,bob\n",
        );
        assert_eq!(table.shape(), (2, 5));
        assert_eq!(
            dtypes(&table),
            vec![
                DataType::Integer,
                DataType::Float,
                DataType::Boolean,
                DataType::Temporal,
                DataType::Text,
            ]
        );
        let score = table.column("score").unwrap();
        assert_eq!(score.values()[1], Value::Float(2.0));
        let seen = table.column("seen").unwrap();
        assert_eq!(seen.values()[0].to_string(), "2024-01-02 00:00:00");
        assert_eq!(seen.values()[1].to_string(), "2024-01-03 10:30:00");
    }

    #[test]
    fn test_null_markers() {
        let table = parse("x,y\n,NA\n5,n/a\nNaN,None\n3,null\n");
        let x = table.column("x").unwrap();
        assert_eq!(x.dtype(), DataType::Integer);
        assert_eq!(
            x.values(),
            &[Value::Null, Value::from(5), Value::Null, Value::from(3)]
        );
        // "n/a" is not a marker (case matters), so y stays text
        let y = table.column("y").unwrap();
        assert_eq!(y.dtype(), DataType::Text);
        assert_eq!(y.values()[1], Value::from("n/a"));
        assert!(y.values()[0].is_null());
    }

    #[test]
    fn test_negative_zero_loads_as_zero() {
        let table = parse("z\n0.0\n-0.0\n");
        let z = table.column("z").unwrap();
        assert_eq!(z.dtype(), DataType::Float);
        assert_eq!(z.values()[0], z.values()[1]);
        assert_eq!(z.values()[1].to_string(), "0.0");
    }

    #[test]
    fn test_all_null_column_is_float() {
        let table = parse("a,b\n1,\n2,NA\n");
        assert_eq!(table.column("b").unwrap().dtype(), DataType::Float);
        assert!(table.column("b").unwrap().values().iter().all(Value::is_null));
    }

    #[test]
    fn test_headers_only() {
        let table = parse("a,b,c\n");
        assert_eq!(table.shape(), (0, 3));
        assert_eq!(dtypes(&table), vec![DataType::Float; 3]);
    }

    #[test]
    fn test_no_headers() {
        let options = CsvOptions::new().has_headers(false).delimiter(b';');
        let table = parse_csv_str("1;x\n2;y\n", &options).unwrap();
        assert_eq!(
            table.column_names().collect::<Vec<_>>(),
            vec!["column_1", "column_2"]
        );
        assert_eq!(table.row_count(), 2);
    }

    #[test]
    fn test_fields_are_trimmed() {
        let table = parse("n, label\n 7 , seven \n");
        assert_eq!(table.column("n").unwrap().values()[0], Value::from(7));
        assert_eq!(table.column("label").unwrap().values()[0], Value::from("seven"));
    }

    #[test]
    fn test_ragged_rows_rejected() {
        let err = parse_csv_str("a,b\n1,2\n3\n", &CsvOptions::new()).unwrap_err();
        assert!(matches!(err, FramesumError::Csv(_)));
    }

    #[test]
    fn test_duplicate_header_rejected() {
        let err = parse_csv_str("a,a\n1,2\n", &CsvOptions::new()).unwrap_err();
        assert!(matches!(err, FramesumError::DuplicateColumn(name) if name == "a"));
    }

    #[test]
    fn test_read_csv_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("people.csv");
        fs::write(&path, "id,name\n1,a\n1,b\n2,b\n").unwrap();

        let table = read_csv(&path, &CsvOptions::new()).unwrap();
        assert_eq!(table.shape(), (3, 2));
        assert_eq!(dtypes(&table), vec![DataType::Integer, DataType::Text]);
    }

    #[test]
    fn test_read_csv_missing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("absent.csv");
        let err = read_csv(&path, &CsvOptions::new()).unwrap_err();
        match err {
            FramesumError::CsvRead { path: p, .. } => assert_eq!(p, path),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_parse_temporal_fractional_seconds() {
        let t = parse_temporal("2024-05-06T07:08:09.250").unwrap();
        assert_eq!(Value::Temporal(t).to_string(), "2024-05-06 07:08:09.250");
        assert!(parse_temporal("06/05/2024").is_none());
    }
}
