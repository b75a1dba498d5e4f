//! Cell values and their total order.
//!
//! A [`Value`] is one cell of a table. Every column stores a `Vec<Value>`,
//! and the summarizer only ever needs three things from a value: equality
//! and hashing (for uniqueness and duplicate rows), a total order (for the
//! sorted distinct listing) and a canonical text form (for display).
//!
//! ## Ordering
//!
//! `Null` sorts before everything else. Values of the same kind compare
//! naturally: booleans `false < true`, integers numerically, floats by
//! [`f64::total_cmp`], timestamps chronologically, text by code point.
//!
//! Columns are homogeneous in practice, but the order is total across kinds
//! too so that mixed `Other` data never panics a sort:
//!
//! `Null < Boolean < Integer/Float < Temporal < Text < Other`
//!
//! Integers and floats compare with each other numerically. When an integer
//! and a float are numerically equal the integer sorts first, so two values
//! are only ever equal when they are the same variant with the same payload.
//!
//! A `Float` holding NaN is a missing value wherever it comes from: it is
//! null for [`Value::is_null`], equal to `Null`, and displayed as `None`.
//! `-0.0` and `0.0` are the same value.

use chrono::NaiveDateTime;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use super::dtype::DataType;

/// A single table cell.
#[derive(Debug, Clone, Default)]
pub enum Value {
    /// Missing value marker
    #[default]
    Null,
    Boolean(bool),
    Integer(i64),
    /// NaN here counts as null
    Float(f64),
    Temporal(NaiveDateTime),
    Text(String),
    /// Anything else, carried as its raw text
    Other(String),
}

impl Value {
    /// Build a float value, mapping NaN to [`Value::Null`] and `-0.0` to `0.0`.
    pub fn float(f: f64) -> Self {
        if f.is_nan() {
            Value::Null
        } else {
            Value::Float(fold_zero(f))
        }
    }

    /// Returns `true` for the missing value marker, or a NaN float.
    pub fn is_null(&self) -> bool {
        match self {
            Value::Null => true,
            Value::Float(f) => f.is_nan(),
            _ => false,
        }
    }

    /// The data type this value naturally belongs to (`None` for null).
    pub fn data_type(&self) -> Option<DataType> {
        if self.is_null() {
            return None;
        }
        match self {
            Value::Null => None,
            Value::Boolean(_) => Some(DataType::Boolean),
            Value::Integer(_) => Some(DataType::Integer),
            Value::Float(_) => Some(DataType::Float),
            Value::Temporal(_) => Some(DataType::Temporal),
            Value::Text(_) => Some(DataType::Text),
            Value::Other(_) => Some(DataType::Other),
        }
    }

    /// Cross-kind sort rank. Integer and Float share a rank.
    fn rank(&self) -> u8 {
        match self {
            Value::Null => 0,
            Value::Boolean(_) => 1,
            Value::Integer(_) | Value::Float(_) => 2,
            Value::Temporal(_) => 3,
            Value::Text(_) => 4,
            Value::Other(_) => 5,
        }
    }
}

/// `-0.0` becomes `0.0`, everything else is unchanged.
fn fold_zero(f: f64) -> f64 {
    if f == 0.0 {
        0.0
    } else {
        f
    }
}

/// Integer vs float: numeric order, integer first on a tie.
fn cmp_integer_float(i: i64, f: f64) -> Ordering {
    (i as f64).total_cmp(&fold_zero(f)).then(Ordering::Less)
}

impl Ord for Value {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.is_null(), other.is_null()) {
            (true, true) => return Ordering::Equal,
            (true, false) => return Ordering::Less,
            (false, true) => return Ordering::Greater,
            (false, false) => {}
        }
        match (self, other) {
            (Value::Boolean(a), Value::Boolean(b)) => a.cmp(b),
            (Value::Integer(a), Value::Integer(b)) => a.cmp(b),
            (Value::Float(a), Value::Float(b)) => fold_zero(*a).total_cmp(&fold_zero(*b)),
            (Value::Integer(a), Value::Float(b)) => cmp_integer_float(*a, *b),
            (Value::Float(a), Value::Integer(b)) => cmp_integer_float(*b, *a).reverse(),
            (Value::Temporal(a), Value::Temporal(b)) => a.cmp(b),
            (Value::Text(a), Value::Text(b)) | (Value::Other(a), Value::Other(b)) => a.cmp(b),
            _ => self.rank().cmp(&other.rank()),
        }
    }
}

impl PartialOrd for Value {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Value {}

// Must agree with `Ord`: every null hashes alike, otherwise equal values are
// the same variant with the same payload and floats hash with zero folded.
impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        if self.is_null() {
            std::mem::discriminant(&Value::Null).hash(state);
            return;
        }
        std::mem::discriminant(self).hash(state);
        match self {
            Value::Null => {}
            Value::Boolean(b) => b.hash(state),
            Value::Integer(i) => i.hash(state),
            Value::Float(f) => fold_zero(*f).to_bits().hash(state),
            Value::Temporal(t) => t.hash(state),
            Value::Text(s) | Value::Other(s) => s.hash(state),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_null() {
            return write!(f, "None");
        }
        match self {
            Value::Null => write!(f, "None"),
            Value::Boolean(true) => write!(f, "True"),
            Value::Boolean(false) => write!(f, "False"),
            Value::Integer(i) => write!(f, "{i}"),
            Value::Float(x) => write!(f, "{}", format_float(*x)),
            Value::Temporal(t) => write!(f, "{t}"),
            Value::Text(s) | Value::Other(s) => write!(f, "{s}"),
        }
    }
}

/// Magnitudes at or above this are written in exponent form.
const EXPONENT_ABOVE: f64 = 1e16;
/// Nonzero magnitudes below this are written in exponent form.
const EXPONENT_BELOW: f64 = 1e-4;

/// Shortest round-trip decimal, with `.0` on integral values (`5.0`, not `5`).
///
/// Very large and very small magnitudes use exponent form with a signed,
/// two-digit exponent (`1e+300`, `2.5e-07`) so they stay short.
fn format_float(x: f64) -> String {
    if x.is_nan() {
        return "nan".to_string();
    }
    if x.is_infinite() {
        return if x > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    let x = fold_zero(x);
    let magnitude = x.abs();
    if magnitude >= EXPONENT_ABOVE || (magnitude != 0.0 && magnitude < EXPONENT_BELOW) {
        return format_exponent(x);
    }
    let text = x.to_string();
    if text.contains('.') {
        text
    } else {
        format!("{text}.0")
    }
}

fn format_exponent(x: f64) -> String {
    let text = format!("{x:e}");
    match text.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exponent),
            };
            format!("{mantissa}e{sign}{digits:0>2}")
        }
        None => text,
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Integer(i)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Integer(i64::from(i))
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::float(f)
    }
}

impl From<NaiveDateTime> for Value {
    fn from(t: NaiveDateTime) -> Self {
        Value::Temporal(t)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Value::Null, Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::collections::HashSet;

    fn ts(y: i32, m: u32, d: u32) -> Value {
        Value::Temporal(
            NaiveDate::from_ymd_opt(y, m, d)
                .unwrap()
                .and_hms_opt(0, 0, 0)
                .unwrap(),
        )
    }

    #[test]
    fn test_null_sorts_first() {
        let mut values = vec![
            Value::from(5),
            Value::Null,
            Value::from(3),
            Value::from("a"),
            Value::from(false),
        ];
        values.sort();
        assert_eq!(values[0], Value::Null);
        assert_eq!(values[1], Value::from(false));
        assert_eq!(values[2], Value::from(3));
        assert_eq!(values[3], Value::from(5));
        assert_eq!(values[4], Value::from("a"));
    }

    #[test]
    fn test_same_kind_natural_order() {
        assert!(Value::from(-2) < Value::from(10));
        assert!(Value::from(1.5) < Value::from(2.25));
        assert!(Value::from("apple") < Value::from("banana"));
        assert!(Value::from(false) < Value::from(true));
        assert!(ts(2023, 12, 31) < ts(2024, 1, 1));
    }

    #[test]
    fn test_integer_float_compare_numerically() {
        assert!(Value::from(2) < Value::from(2.5));
        assert!(Value::from(3.5) > Value::from(3));
        // Numeric tie: integer first, and the two stay distinct
        assert!(Value::from(1) < Value::from(1.0));
        assert_ne!(Value::from(1), Value::from(1.0));
    }

    #[test]
    fn test_cross_kind_rank() {
        assert!(Value::from(true) < Value::from(0));
        assert!(Value::from(1_000_000) < ts(1970, 1, 1));
        assert!(ts(2999, 1, 1) < Value::from(""));
        assert!(Value::from("zzz") < Value::Other("a".to_string()));
    }

    #[test]
    fn test_nan_becomes_null() {
        assert!(Value::from(f64::NAN).is_null());
        assert!(Value::float(f64::NAN).is_null());
        assert!(!Value::from(0.0).is_null());
    }

    #[test]
    fn test_direct_nan_float_is_null() {
        let nan = Value::Float(f64::NAN);
        assert!(nan.is_null());
        assert_eq!(nan, Value::Null);
        assert_eq!(nan.data_type(), None);
        assert_eq!(nan.to_string(), "None");
        assert!(nan < Value::from(f64::NEG_INFINITY));
        let set: HashSet<Value> = [nan, Value::Null].into_iter().collect();
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_negative_zero_is_zero() {
        assert_eq!(Value::from(-0.0), Value::from(0.0));
        assert_eq!(Value::Float(-0.0), Value::Float(0.0));
        assert_eq!(Value::Float(-0.0).to_string(), "0.0");
        assert!(Value::from(0) < Value::Float(-0.0));
        assert!(Value::Float(-0.0) < Value::from(1));
        let set: HashSet<Value> = [Value::Float(-0.0), Value::Float(0.0)].into_iter().collect();
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_exponent_display() {
        assert_eq!(Value::from(1e300).to_string(), "1e+300");
        assert_eq!(Value::from(-1.5e16).to_string(), "-1.5e+16");
        assert_eq!(Value::from(2.5e-7).to_string(), "2.5e-07");
        assert_eq!(Value::from(1e15).to_string(), "1000000000000000.0");
        assert_eq!(Value::from(0.0001).to_string(), "0.0001");
    }

    #[test]
    fn test_option_conversion() {
        assert_eq!(Value::from(None::<i64>), Value::Null);
        assert_eq!(Value::from(Some(4)), Value::Integer(4));
        assert_eq!(Value::from(Some("x")), Value::Text("x".to_string()));
    }

    #[test]
    fn test_hash_agrees_with_eq() {
        let set: HashSet<Value> = [
            Value::Null,
            Value::Null,
            Value::from(1),
            Value::from(1),
            Value::from(1.0),
            Value::from("1"),
            Value::Other("1".to_string()),
        ]
        .into_iter()
        .collect();
        assert_eq!(set.len(), 5);
    }

    #[test]
    fn test_display() {
        assert_eq!(Value::Null.to_string(), "None");
        assert_eq!(Value::from(true).to_string(), "True");
        assert_eq!(Value::from(false).to_string(), "False");
        assert_eq!(Value::from(-42).to_string(), "-42");
        assert_eq!(Value::from(5.0).to_string(), "5.0");
        assert_eq!(Value::from(0.1).to_string(), "0.1");
        assert_eq!(Value::from(-2.5).to_string(), "-2.5");
        assert_eq!(Value::from(f64::INFINITY).to_string(), "inf");
        assert_eq!(Value::from(f64::NEG_INFINITY).to_string(), "-inf");
        assert_eq!(ts(2024, 3, 9).to_string(), "2024-03-09 00:00:00");
        assert_eq!(Value::from("hello world").to_string(), "hello world");
    }

    #[test]
    fn test_data_type() {
        assert_eq!(Value::Null.data_type(), None);
        assert_eq!(Value::from(1).data_type(), Some(DataType::Integer));
        assert_eq!(Value::from(1.5).data_type(), Some(DataType::Float));
        assert_eq!(Value::from("x").data_type(), Some(DataType::Text));
    }
}
