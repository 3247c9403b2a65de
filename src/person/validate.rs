//! Input validation for incoming person JSON.
//!
//! # Responsibilities
//! - Check the required/optional field shape of a JSON object
//! - Collect all field errors, not just the first
//! - Default absent optional fields to None
//!
//! # Design Decisions
//! - Errors are data (`Vec<FieldError>`), echoed back to the client
//! - Unknown keys are ignored, not rejected
//! - No type coercion: "40" is not a valid integer

use serde::Serialize;
use serde_json::Value;

use crate::person::model::PersonInput;

/// One invalid or missing field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    /// Field path within the input object.
    pub field: String,
    /// Human-readable reason.
    pub message: String,
}

impl FieldError {
    fn new(field: &str, message: &str) -> Self {
        Self {
            field: field.to_string(),
            message: message.to_string(),
        }
    }
}

/// Validate a JSON value against the person input shape.
///
/// `name` is required and must be a string; `age` must be an integer
/// or null; `address` and `work` must be strings or null. Absent
/// optionals become `None`.
pub fn validate(input: &Value) -> Result<PersonInput, Vec<FieldError>> {
    let Some(object) = input.as_object() else {
        return Err(vec![FieldError::new("__root__", "value is not an object")]);
    };

    let mut errors = Vec::new();

    let name = match object.get("name") {
        None => {
            errors.push(FieldError::new("name", "field required"));
            None
        }
        Some(Value::Null) => {
            errors.push(FieldError::new("name", "none is not an allowed value"));
            None
        }
        Some(Value::String(s)) => Some(s.clone()),
        Some(_) => {
            errors.push(FieldError::new("name", "value is not a valid string"));
            None
        }
    };

    let age = match object.get("age") {
        None | Some(Value::Null) => None,
        Some(Value::Number(n)) if n.as_i64().is_some() => n.as_i64(),
        Some(_) => {
            errors.push(FieldError::new("age", "value is not a valid integer"));
            None
        }
    };

    let address = optional_string(object, "address", &mut errors);
    let work = optional_string(object, "work", &mut errors);

    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(PersonInput {
        // name is always Some when errors is empty
        name: name.unwrap_or_default(),
        age,
        address,
        work,
    })
}

fn optional_string(
    object: &serde_json::Map<String, Value>,
    field: &str,
    errors: &mut Vec<FieldError>,
) -> Option<String> {
    match object.get(field) {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s.clone()),
        Some(_) => {
            errors.push(FieldError::new(field, "value is not a valid string"));
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_full_input() {
        let input = json!({"name": "John", "age": 40, "address": "Hobo", "work": "Google"});
        let parsed = validate(&input).unwrap();
        assert_eq!(parsed.name, "John");
        assert_eq!(parsed.age, Some(40));
        assert_eq!(parsed.address.as_deref(), Some("Hobo"));
        assert_eq!(parsed.work.as_deref(), Some("Google"));
    }

    #[test]
    fn test_name_only_defaults_optionals() {
        let parsed = validate(&json!({"name": "John"})).unwrap();
        assert_eq!(parsed.age, None);
        assert_eq!(parsed.address, None);
        assert_eq!(parsed.work, None);
    }

    #[test]
    fn test_explicit_nulls_are_valid() {
        let parsed =
            validate(&json!({"name": "John", "age": null, "address": null, "work": null})).unwrap();
        assert_eq!(parsed.age, None);
        assert_eq!(parsed.address, None);
    }

    #[test]
    fn test_missing_name() {
        let errors = validate(&json!({"age": 40})).unwrap_err();
        assert_eq!(errors, vec![FieldError::new("name", "field required")]);
    }

    #[test]
    fn test_null_name_is_rejected() {
        let errors = validate(&json!({"name": null})).unwrap_err();
        assert_eq!(errors[0].field, "name");
    }

    #[test]
    fn test_wrong_types_collected_together() {
        let errors = validate(&json!({"name": 5, "age": "forty", "work": 1})).unwrap_err();
        let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["name", "age", "work"]);
    }

    #[test]
    fn test_float_age_is_rejected() {
        let errors = validate(&json!({"name": "John", "age": 40.5})).unwrap_err();
        assert_eq!(errors[0].field, "age");
    }

    #[test]
    fn test_unknown_keys_ignored() {
        let parsed = validate(&json!({"name": "John", "hobby": "chess"})).unwrap();
        assert_eq!(parsed.name, "John");
    }

    #[test]
    fn test_non_object_rejected() {
        assert!(validate(&json!([1, 2])).is_err());
        assert!(validate(&json!("John")).is_err());
    }
}
