use google_sheets4::api::ValueRange;
use serde_json::Value;

/// Builds the single-row, single-column block a cell write expects.
pub trait ValueRangeFactory {
    fn from_value(value: Value) -> Self;
    fn from_str<T: AsRef<str>>(s: T) -> Self;
}

impl ValueRangeFactory for ValueRange {
    fn from_value(value: Value) -> Self {
        ValueRange {
            major_dimension: None,
            range: None,
            values: Some(vec![vec![value]]),
        }
    }

    fn from_str<T: AsRef<str>>(s: T) -> Self {
        Self::from_value(Value::String(s.as_ref().to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_value_wraps_a_single_cell() {
        let value_range = ValueRange::from_value(Value::from(12));
        assert_eq!(value_range.values, Some(vec![vec![Value::from(12)]]));
        assert_eq!(value_range.major_dimension, None);
        assert_eq!(value_range.range, None);
    }

    #[test]
    fn test_from_str_wraps_a_single_string_cell() {
        let value_range = ValueRange::from_str("Running");
        assert_eq!(
            value_range.values,
            Some(vec![vec![Value::String("Running".to_owned())]])
        );
    }
}
