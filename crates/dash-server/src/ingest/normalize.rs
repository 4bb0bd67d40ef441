//! Row normalization
//!
//! Pure per-row cleanup applied before validation. Input is the raw row
//! mapping (column label to cell value, `Null` for absent cells); output is
//! the same mapping with text fields normalized and counter columns coerced
//! to integers.
//!
//! Coercion failures do not stop normalization: the offending cell keeps its
//! raw value and the failure is recorded per field, so a single report can
//! name everything wrong with a row.

use serde_json::{Map, Value};

use super::{FieldError, COL_SUBSCRIPTION_STATUS, COL_WORKFLOW_TITLE, NUMERIC_COLUMNS};

/// A row after normalization, ready for validation.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedRow {
    /// Column label to normalized value. Counter columns hold numbers unless
    /// their coercion failed, in which case the raw value is preserved.
    pub values: Map<String, Value>,
    /// Coercion failures encountered while normalizing counter columns
    pub coercion_errors: Vec<FieldError>,
}

/// Normalize one raw row.
///
/// Transformations, applied in place:
/// - `Subscription Status`: trim and lowercase; absent becomes the empty
///   string (which validation will reject).
/// - `Workflow Title`: trim; an empty result is stored as null.
/// - Each counter column: coerced via [`coerce_count`]; failures are
///   collected into `coercion_errors`.
pub fn normalize_row(mut values: Map<String, Value>) -> NormalizedRow {
    let status = values
        .get(COL_SUBSCRIPTION_STATUS)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .trim()
        .to_lowercase();
    values.insert(COL_SUBSCRIPTION_STATUS.to_string(), Value::String(status));

    let title = values
        .get(COL_WORKFLOW_TITLE)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .trim()
        .to_string();
    let title = if title.is_empty() {
        Value::Null
    } else {
        Value::String(title)
    };
    values.insert(COL_WORKFLOW_TITLE.to_string(), title);

    let mut coercion_errors = Vec::new();
    for col in NUMERIC_COLUMNS {
        let cell = values.get(col).unwrap_or(&Value::Null);
        match coerce_count(cell) {
            Ok(count) => {
                values.insert(col.to_string(), Value::from(count));
            },
            Err(message) => {
                // Keep the raw value so the report shows what was rejected
                coercion_errors.push(FieldError::new(col, message));
            },
        }
    }

    NormalizedRow {
        values,
        coercion_errors,
    }
}

/// Best-effort coercion of a raw cell to an integer counter.
///
/// Absent and blank cells count as zero. Anything else must parse as a
/// finite number; fractional values are truncated toward zero.
pub fn coerce_count(value: &Value) -> Result<i64, String> {
    match value {
        Value::Null => Ok(0),
        Value::Number(n) => n
            .as_i64()
            .ok_or_else(|| format!("'{}' is out of integer range", n)),
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                return Ok(0);
            }
            let parsed: f64 = trimmed
                .parse()
                .map_err(|_| format!("'{}' is not a number", trimmed))?;
            if !parsed.is_finite() {
                return Err(format!("'{}' is not a finite number", trimmed));
            }
            Ok(parsed.trunc() as i64)
        },
        other => Err(format!("unexpected value: {}", other)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ingest::COL_ADMIN_SEATS;

    fn raw_row(pairs: &[(&str, Value)]) -> Map<String, Value> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    #[test]
    fn test_coerce_count_truncates_fractions() {
        assert_eq!(coerce_count(&Value::String("3.9".into())), Ok(3));
        assert_eq!(coerce_count(&Value::String("-3.9".into())), Ok(-3));
    }

    #[test]
    fn test_coerce_count_blank_and_absent_are_zero() {
        assert_eq!(coerce_count(&Value::Null), Ok(0));
        assert_eq!(coerce_count(&Value::String("".into())), Ok(0));
        assert_eq!(coerce_count(&Value::String("   ".into())), Ok(0));
    }

    #[test]
    fn test_coerce_count_accepts_padded_and_scientific_input() {
        assert_eq!(coerce_count(&Value::String(" 42 ".into())), Ok(42));
        assert_eq!(coerce_count(&Value::String("1e3".into())), Ok(1000));
    }

    #[test]
    fn test_coerce_count_rejects_garbage() {
        assert!(coerce_count(&Value::String("abc".into())).is_err());
        assert!(coerce_count(&Value::String("12x".into())).is_err());
    }

    #[test]
    fn test_coerce_count_rejects_non_finite() {
        assert!(coerce_count(&Value::String("inf".into())).is_err());
        assert!(coerce_count(&Value::String("NaN".into())).is_err());
    }

    #[test]
    fn test_status_is_trimmed_and_lowercased() {
        let row = normalize_row(raw_row(&[(
            COL_SUBSCRIPTION_STATUS,
            Value::String(" Active ".into()),
        )]));
        assert_eq!(row.values[COL_SUBSCRIPTION_STATUS], "active");
    }

    #[test]
    fn test_absent_status_becomes_empty_string() {
        let row = normalize_row(raw_row(&[]));
        assert_eq!(row.values[COL_SUBSCRIPTION_STATUS], "");
    }

    #[test]
    fn test_blank_workflow_title_becomes_null() {
        let row = normalize_row(raw_row(&[(COL_WORKFLOW_TITLE, Value::String("   ".into()))]));
        assert!(row.values[COL_WORKFLOW_TITLE].is_null());
    }

    #[test]
    fn test_workflow_title_is_trimmed() {
        let row = normalize_row(raw_row(&[(
            COL_WORKFLOW_TITLE,
            Value::String("  Onboarding  ".into()),
        )]));
        assert_eq!(row.values[COL_WORKFLOW_TITLE], "Onboarding");
    }

    #[test]
    fn test_numeric_columns_default_to_zero() {
        let row = normalize_row(raw_row(&[]));
        assert!(row.coercion_errors.is_empty());
        for col in NUMERIC_COLUMNS {
            assert_eq!(row.values[col], 0, "column {col}");
        }
    }

    #[test]
    fn test_failed_coercion_keeps_raw_value_and_records_error() {
        let row = normalize_row(raw_row(&[(COL_ADMIN_SEATS, Value::String("abc".into()))]));
        assert_eq!(row.values[COL_ADMIN_SEATS], "abc");
        assert_eq!(row.coercion_errors.len(), 1);
        assert_eq!(row.coercion_errors[0].field, COL_ADMIN_SEATS);
    }
}
