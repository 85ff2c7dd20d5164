//! Loosely-typed time-series records
//!
//! Chart data arrives as raw JSON rows of the form `[timestamp, value]`, where
//! `value` may be a number, `null`, or an array of numbers/nulls. Rows are
//! converted through [`serde_json::Value`] so that no row can fail to parse:
//! anything unexpected becomes an opaque record that downstream code skips.

use serde::{Deserialize, Serialize};
use serde_json::Value;

// ============================================================================
// SERIES VALUE
// ============================================================================

/// Value half of a record, tagged by shape
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SeriesValue {
    /// One number per timestamp; `None` is an explicit `null`
    Scalar(Option<f64>),
    /// Fixed-width vector per timestamp; non-numeric slots are `None`
    Vector(Vec<Option<f64>>),
    /// Strings, booleans, objects, or a missing value
    #[default]
    Opaque,
}

impl SeriesValue {
    /// Finite scalar value, if this is a numeric scalar
    pub fn scalar(&self) -> Option<f64> {
        match self {
            Self::Scalar(v) => v.filter(|v| v.is_finite()),
            _ => None,
        }
    }

    /// Finite value at vector slot `index`, if present and numeric
    pub fn slot(&self, index: usize) -> Option<f64> {
        match self {
            Self::Vector(slots) => slots
                .get(index)
                .copied()
                .flatten()
                .filter(|v| v.is_finite()),
            _ => None,
        }
    }

    /// Every finite number carried by this value, in slot order
    pub fn numeric_values(&self) -> Vec<f64> {
        match self {
            Self::Scalar(_) => self.scalar().into_iter().collect(),
            Self::Vector(slots) => slots
                .iter()
                .flatten()
                .copied()
                .filter(|v| v.is_finite())
                .collect(),
            Self::Opaque => Vec::new(),
        }
    }

    pub fn is_vector(&self) -> bool {
        matches!(self, Self::Vector(_))
    }

    pub fn is_scalar(&self) -> bool {
        matches!(self, Self::Scalar(_))
    }
}

impl From<Value> for SeriesValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => Self::Scalar(None),
            Value::Number(n) => Self::Scalar(n.as_f64()),
            Value::Array(items) => {
                Self::Vector(items.iter().map(Value::as_f64).collect())
            }
            _ => Self::Opaque,
        }
    }
}

impl From<SeriesValue> for Value {
    fn from(value: SeriesValue) -> Self {
        match value {
            SeriesValue::Scalar(v) => number_or_null(v),
            SeriesValue::Vector(slots) => {
                Value::Array(slots.into_iter().map(number_or_null).collect())
            }
            SeriesValue::Opaque => Value::Null,
        }
    }
}

fn number_or_null(v: Option<f64>) -> Value {
    v.and_then(serde_json::Number::from_f64)
        .map(Value::Number)
        .unwrap_or(Value::Null)
}

// ============================================================================
// RECORD
// ============================================================================

/// One `(timestamp, value)` data point
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "Value", into = "Value")]
pub struct Record {
    /// Timestamp, `None` when the supplied timestamp was not a number
    pub timestamp: Option<f64>,
    pub value: SeriesValue,
}

impl Record {
    pub fn new(timestamp: Option<f64>, value: SeriesValue) -> Self {
        Self { timestamp, value }
    }

    /// Scalar record (`null` when `value` is `None`)
    pub fn scalar(timestamp: f64, value: Option<f64>) -> Self {
        Self::new(Some(timestamp), SeriesValue::Scalar(value))
    }

    /// Vector record
    pub fn vector(timestamp: f64, slots: Vec<Option<f64>>) -> Self {
        Self::new(Some(timestamp), SeriesValue::Vector(slots))
    }

    /// Row that was not an array at all
    pub fn malformed() -> Self {
        Self::default()
    }

    /// Finite timestamp, if any
    pub fn time(&self) -> Option<f64> {
        self.timestamp.filter(|t| t.is_finite())
    }

    /// Ordering key: non-numeric timestamps sort as `0`
    pub fn sort_key(&self) -> f64 {
        self.time().unwrap_or(0.0)
    }
}

impl From<Value> for Record {
    fn from(row: Value) -> Self {
        match row {
            Value::Array(items) => {
                let mut items = items.into_iter();
                let timestamp = items.next().and_then(|t| t.as_f64());
                let value = items.next().map(SeriesValue::from).unwrap_or_default();
                Self::new(timestamp, value)
            }
            _ => Self::malformed(),
        }
    }
}

impl From<Record> for Value {
    fn from(record: Record) -> Self {
        Value::Array(vec![number_or_null(record.timestamp), record.value.into()])
    }
}

/// Sorted copy of `records`, ascending by [`Record::sort_key`]
///
/// The sort is stable, so malformed rows keep their relative order at `0`.
pub fn sorted_by_time(records: &[Record]) -> Vec<Record> {
    let mut sorted = records.to_vec();
    sorted.sort_by(|a, b| a.sort_key().total_cmp(&b.sort_key()));
    sorted
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_scalar_row() {
        let record = Record::from(json!([10, 2.5]));
        assert_eq!(record.timestamp, Some(10.0));
        assert_eq!(record.value, SeriesValue::Scalar(Some(2.5)));
    }

    #[test]
    fn test_null_value_is_scalar() {
        let record = Record::from(json!([1, null]));
        assert!(record.value.is_scalar());
        assert_eq!(record.value.scalar(), None);
    }

    #[test]
    fn test_vector_row_keeps_slot_positions() {
        let record = Record::from(json!([0, [1, null, "x", 4]]));
        assert_eq!(
            record.value,
            SeriesValue::Vector(vec![Some(1.0), None, None, Some(4.0)])
        );
        assert_eq!(record.value.slot(2), None);
        assert_eq!(record.value.slot(3), Some(4.0));
        assert_eq!(record.value.slot(9), None);
        assert_eq!(record.value.numeric_values(), vec![1.0, 4.0]);
    }

    #[test]
    fn test_non_numeric_timestamp() {
        let record = Record::from(json!(["a", 1]));
        assert_eq!(record.timestamp, None);
        assert_eq!(record.sort_key(), 0.0);
        assert_eq!(record.value.scalar(), Some(1.0));
    }

    #[test]
    fn test_short_row_keeps_timestamp() {
        let record = Record::from(json!([5]));
        assert_eq!(record.timestamp, Some(5.0));
        assert_eq!(record.value, SeriesValue::Opaque);
        assert_eq!(record.sort_key(), 5.0);

        assert_eq!(Record::from(json!([])), Record::malformed());
    }

    #[test]
    fn test_malformed_rows() {
        assert_eq!(Record::from(json!({"t": 1})), Record::malformed());
        assert_eq!(Record::from(json!("row")), Record::malformed());
        assert_eq!(Record::from(json!([1, "text"])).value, SeriesValue::Opaque);
    }

    #[test]
    fn test_deserialize_mixed_array() {
        let records: Vec<Record> =
            serde_json::from_str(r#"[[2, [1, 2]], [1, null], "junk"]"#).unwrap();
        assert_eq!(records.len(), 3);
        assert!(records[0].value.is_vector());
        assert!(records[1].value.is_scalar());
        assert_eq!(records[2], Record::malformed());
    }

    #[test]
    fn test_serialize_roundtrip_shape() {
        let record = Record::vector(5.0, vec![Some(1.0), None]);
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value, json!([5.0, [1.0, null]]));
    }

    #[test]
    fn test_sorted_by_time_moves_bad_timestamps_to_zero() {
        let records = vec![
            Record::scalar(5.0, Some(1.0)),
            Record::new(None, SeriesValue::Scalar(Some(2.0))),
            Record::scalar(-1.0, Some(3.0)),
            Record::scalar(2.0, Some(4.0)),
        ];
        let sorted = sorted_by_time(&records);
        let keys: Vec<Option<f64>> = sorted.iter().map(|r| r.timestamp).collect();
        assert_eq!(keys, vec![Some(-1.0), None, Some(2.0), Some(5.0)]);
    }
}
