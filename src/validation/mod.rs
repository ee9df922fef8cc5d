// Request body shape validation
//
// Rules mirror the wire contract: required strings with length bounds,
// coordinate ranges, optional booleans with defaults. Validation runs on
// the raw JSON value before deserialization so every violated field can be
// reported, not just the first.

use std::collections::HashMap;

use serde_json::Value;
use thiserror::Error;

#[derive(Error, Debug)]
#[error("request body failed validation")]
pub struct ValidationError {
    pub field_errors: HashMap<String, String>,
}

const PLACE_FIELDS: &[&str] = &[
    "place_id",
    "place_name",
    "place_type",
    "latitude",
    "longitude",
    "starred",
    "picture_url",
];

const CATEGORY_FIELDS: &[&str] = &["type_id", "type_name"];

/// Validate a place payload: `place_name` 4-255 chars, `place_type` 4-50
/// chars, latitude/longitude within range, `starred` boolean, `picture_url`
/// string or null. An optional client-supplied `place_id` must still be a
/// 4-50 char string even though the store ignores it on insert.
pub fn validate_place(body: &Value) -> Result<(), ValidationError> {
    let mut errors = HashMap::new();
    let Some(map) = body.as_object() else {
        return Err(single_error("body", "must be a JSON object"));
    };

    reject_unknown_fields(map, PLACE_FIELDS, &mut errors);
    optional_string(map, "place_id", 4, 50, &mut errors);
    required_string(map, "place_name", 4, 255, &mut errors);
    required_string(map, "place_type", 4, 50, &mut errors);
    required_number(map, "latitude", -90.0, 90.0, &mut errors);
    required_number(map, "longitude", -180.0, 180.0, &mut errors);
    optional_bool(map, "starred", &mut errors);
    optional_nullable_string(map, "picture_url", &mut errors);

    finish(errors)
}

/// Validate a category payload: `type_name` 4-255 chars, optional
/// `type_id` 4-50 chars.
pub fn validate_category(body: &Value) -> Result<(), ValidationError> {
    let mut errors = HashMap::new();
    let Some(map) = body.as_object() else {
        return Err(single_error("body", "must be a JSON object"));
    };

    reject_unknown_fields(map, CATEGORY_FIELDS, &mut errors);
    optional_string(map, "type_id", 4, 50, &mut errors);
    required_string(map, "type_name", 4, 255, &mut errors);

    finish(errors)
}

fn finish(errors: HashMap<String, String>) -> Result<(), ValidationError> {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(ValidationError { field_errors: errors })
    }
}

fn single_error(field: &str, message: &str) -> ValidationError {
    let mut field_errors = HashMap::new();
    field_errors.insert(field.to_string(), message.to_string());
    ValidationError { field_errors }
}

fn reject_unknown_fields(
    map: &serde_json::Map<String, Value>,
    allowed: &[&str],
    errors: &mut HashMap<String, String>,
) {
    for key in map.keys() {
        if !allowed.contains(&key.as_str()) {
            errors.insert(key.clone(), "unknown field".to_string());
        }
    }
}

fn required_string(
    map: &serde_json::Map<String, Value>,
    field: &str,
    min: usize,
    max: usize,
    errors: &mut HashMap<String, String>,
) {
    match map.get(field) {
        None | Some(Value::Null) => {
            errors.insert(field.to_string(), "is required".to_string());
        }
        Some(value) => check_string(value, field, min, max, errors),
    }
}

fn optional_string(
    map: &serde_json::Map<String, Value>,
    field: &str,
    min: usize,
    max: usize,
    errors: &mut HashMap<String, String>,
) {
    if let Some(value) = map.get(field) {
        check_string(value, field, min, max, errors);
    }
}

fn check_string(
    value: &Value,
    field: &str,
    min: usize,
    max: usize,
    errors: &mut HashMap<String, String>,
) {
    match value.as_str() {
        Some(s) if s.chars().count() < min || s.chars().count() > max => {
            errors.insert(
                field.to_string(),
                format!("length must be between {} and {} characters", min, max),
            );
        }
        Some(_) => {}
        None => {
            errors.insert(field.to_string(), "must be a string".to_string());
        }
    }
}

fn required_number(
    map: &serde_json::Map<String, Value>,
    field: &str,
    min: f64,
    max: f64,
    errors: &mut HashMap<String, String>,
) {
    match map.get(field).and_then(Value::as_f64) {
        Some(n) if n < min || n > max => {
            errors.insert(
                field.to_string(),
                format!("must be between {} and {}", min, max),
            );
        }
        Some(_) => {}
        None => {
            errors.insert(
                field.to_string(),
                format!("is required and must be a number between {} and {}", min, max),
            );
        }
    }
}

fn optional_bool(
    map: &serde_json::Map<String, Value>,
    field: &str,
    errors: &mut HashMap<String, String>,
) {
    if let Some(value) = map.get(field) {
        if !value.is_boolean() {
            errors.insert(field.to_string(), "must be a boolean".to_string());
        }
    }
}

fn optional_nullable_string(
    map: &serde_json::Map<String, Value>,
    field: &str,
    errors: &mut HashMap<String, String>,
) {
    if let Some(value) = map.get(field) {
        if !value.is_string() && !value.is_null() {
            errors.insert(field.to_string(), "must be a string or null".to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn valid_place() -> Value {
        json!({
            "place_name": "Test Place",
            "place_type": "T0001",
            "latitude": 10.0,
            "longitude": 20.0
        })
    }

    #[test]
    fn accepts_minimal_valid_place() {
        assert!(validate_place(&valid_place()).is_ok());
    }

    #[test]
    fn accepts_full_valid_place() {
        let mut body = valid_place();
        body["starred"] = json!(true);
        body["picture_url"] = json!("https://example.com/p.jpg");
        assert!(validate_place(&body).is_ok());
    }

    #[test]
    fn accepts_null_picture_url() {
        let mut body = valid_place();
        body["picture_url"] = json!(null);
        assert!(validate_place(&body).is_ok());
    }

    #[test]
    fn rejects_missing_place_name() {
        let mut body = valid_place();
        body.as_object_mut().unwrap().remove("place_name");
        let err = validate_place(&body).unwrap_err();
        assert!(err.field_errors.contains_key("place_name"));
    }

    #[test]
    fn rejects_short_place_name() {
        let mut body = valid_place();
        body["place_name"] = json!("abc");
        let err = validate_place(&body).unwrap_err();
        assert!(err.field_errors.contains_key("place_name"));
    }

    #[test]
    fn rejects_place_name_over_255_chars() {
        let mut body = valid_place();
        body["place_name"] = json!("x".repeat(256));
        assert!(validate_place(&body).is_err());
    }

    #[test]
    fn rejects_out_of_range_coordinates() {
        let mut body = valid_place();
        body["latitude"] = json!(90.5);
        assert!(validate_place(&body).is_err());

        let mut body = valid_place();
        body["longitude"] = json!(-180.5);
        assert!(validate_place(&body).is_err());
    }

    #[test]
    fn rejects_non_numeric_latitude() {
        let mut body = valid_place();
        body["latitude"] = json!("not a number");
        let err = validate_place(&body).unwrap_err();
        assert!(err.field_errors.contains_key("latitude"));
    }

    #[test]
    fn rejects_non_boolean_starred() {
        let mut body = valid_place();
        body["starred"] = json!("yes");
        assert!(validate_place(&body).is_err());
    }

    #[test]
    fn rejects_unknown_fields() {
        let mut body = valid_place();
        body["rating"] = json!(5);
        let err = validate_place(&body).unwrap_err();
        assert!(err.field_errors.contains_key("rating"));
    }

    #[test]
    fn rejects_non_object_body() {
        assert!(validate_place(&json!([1, 2, 3])).is_err());
        assert!(validate_place(&json!("text")).is_err());
    }

    #[test]
    fn collects_every_violated_field() {
        let err = validate_place(&json!({
            "place_name": "ab",
            "latitude": 200
        }))
        .unwrap_err();
        assert!(err.field_errors.contains_key("place_name"));
        assert!(err.field_errors.contains_key("place_type"));
        assert!(err.field_errors.contains_key("latitude"));
        assert!(err.field_errors.contains_key("longitude"));
    }

    #[test]
    fn accepts_valid_category() {
        assert!(validate_category(&json!({"type_name": "Restaurant"})).is_ok());
    }

    #[test]
    fn rejects_category_name_below_minimum() {
        let err = validate_category(&json!({"type_name": "Ab"})).unwrap_err();
        assert!(err.field_errors.contains_key("type_name"));
    }

    #[test]
    fn rejects_category_without_name() {
        assert!(validate_category(&json!({})).is_err());
    }
}
