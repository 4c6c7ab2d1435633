//! Student score record with all-or-nothing construction.

use serde::Serialize;
use serde_json::Value;

use crate::controller::ApiError;

/// Required fields, checked in this exact order. The first missing one wins.
const REQUIRED_PARAMS: [&str; 5] = ["name", "score1", "score2", "score3", "mean"];

/// One validated row of score data.
///
/// No partially-constructed `Student` can exist: [`Student::from_value`] either
/// yields a fully-typed record or fails on the first bad field.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Student {
    pub name: String,
    pub score1: f64,
    pub score2: f64,
    pub score3: f64,
    pub mean: f64,
}

impl Student {
    /// Build a `Student` from an untyped JSON value.
    ///
    /// Missing fields fail with `Missing param <field>`; present but
    /// non-coercible score values fail with the coercion error text.
    pub fn from_value(value: &Value) -> Result<Self, ApiError> {
        let data = value
            .as_object()
            .ok_or_else(|| ApiError::InvalidParam("student entry is not an object".to_string()))?;

        for param in REQUIRED_PARAMS {
            if !data.contains_key(param) {
                return Err(ApiError::MissingParam(param.to_string()));
            }
        }

        Ok(Self {
            name: coerce_string(&data["name"]),
            score1: coerce_f64("score1", &data["score1"])?,
            score2: coerce_f64("score2", &data["score2"])?,
            score3: coerce_f64("score3", &data["score3"])?,
            mean: coerce_f64("mean", &data["mean"])?,
        })
    }
}

/// Stringify any JSON value. Strings pass through without quoting.
fn coerce_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Coerce a JSON number or numeric string to `f64`.
fn coerce_f64(field: &str, value: &Value) -> Result<f64, ApiError> {
    match value {
        Value::Number(n) => n
            .as_f64()
            .ok_or_else(|| ApiError::InvalidParam(format!("{field} is out of range"))),
        Value::String(s) => s.trim().parse::<f64>().map_err(|err| {
            ApiError::InvalidParam(format!("could not convert {field} to float: {err}"))
        }),
        other => Err(ApiError::InvalidParam(format!(
            "could not convert {field} to float: {other}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn valid_entry() -> Value {
        json!({ "name": "User1", "score1": 1.0, "score2": 2.0, "score3": 3.0, "mean": 2.0 })
    }

    #[test]
    fn builds_from_a_complete_entry() {
        let student = Student::from_value(&valid_entry()).unwrap();
        assert_eq!(student.name, "User1");
        assert_eq!(student.score1, 1.0);
        assert_eq!(student.mean, 2.0);
    }

    #[test]
    fn first_missing_field_wins_in_declaration_order() {
        // Only `mean` present: `name` must be the reported field.
        let err = Student::from_value(&json!({ "mean": 2.0 })).unwrap_err();
        assert_eq!(err.to_string(), "Missing param name");

        let err = Student::from_value(&json!({ "name": "User1", "score2": 2.0 })).unwrap_err();
        assert_eq!(err.to_string(), "Missing param score1");

        let mut entry = valid_entry();
        entry.as_object_mut().unwrap().remove("mean");
        let err = Student::from_value(&entry).unwrap_err();
        assert_eq!(err.to_string(), "Missing param mean");
    }

    #[test]
    fn numeric_strings_coerce_to_floats() {
        let entry = json!({
            "name": "User1", "score1": "1.5", "score2": " 2.0 ", "score3": "3", "mean": 42
        });
        let student = Student::from_value(&entry).unwrap();
        assert_eq!(student.score1, 1.5);
        assert_eq!(student.score2, 2.0);
        assert_eq!(student.mean, 42.0);
    }

    #[test]
    fn non_numeric_strings_fail_with_a_coercion_error() {
        for bad in ["1.0a", "abc", "any", "(8.0)"] {
            let mut entry = valid_entry();
            entry["score1"] = json!(bad);
            let err = Student::from_value(&entry).unwrap_err();
            assert!(matches!(&err, ApiError::InvalidParam(_)), "{bad}: {err}");
            assert!(err.to_string().contains("score1"));
        }
    }

    #[test]
    fn non_numeric_values_fail_with_a_coercion_error() {
        let mut entry = valid_entry();
        entry["mean"] = json!(null);
        assert!(matches!(
            Student::from_value(&entry).unwrap_err(),
            ApiError::InvalidParam(_)
        ));
    }

    #[test]
    fn name_stringifies_any_value() {
        let mut entry = valid_entry();
        entry["name"] = json!(7);
        assert_eq!(Student::from_value(&entry).unwrap().name, "7");
    }

    #[test]
    fn non_object_entries_are_rejected() {
        assert!(Student::from_value(&json!("User1")).is_err());
        assert!(Student::from_value(&json!([])).is_err());
    }
}
