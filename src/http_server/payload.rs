//! Request payload validation
//!
//! Bodies are decoded into a `serde_json::Value` first and checked field by
//! field, so one response can report every problem with the request.

use serde_json::{Map, Value};

use super::errors::FieldError;
use crate::store::{ItemId, ItemInput};

/// Maximum item name length, in characters
pub const MAX_NAME_LEN: usize = 100;

/// Maximum item description length, in characters
pub const MAX_DESCRIPTION_LEN: usize = 500;

/// Parse the `{id}` path segment
pub fn parse_item_id(raw: &str) -> Result<ItemId, FieldError> {
    raw.parse::<ItemId>().map_err(|_| {
        FieldError::new(
            &["path", "item_id"],
            "Input should be a valid integer, unable to parse string as an integer",
            "int_parsing",
        )
    })
}

/// Parse and validate an item body
pub fn parse_item_input(body: &[u8]) -> Result<ItemInput, Vec<FieldError>> {
    let value: Value = serde_json::from_slice(body).map_err(|e| {
        vec![FieldError::new(
            &["body"],
            format!("JSON decode error: {}", e),
            "json_invalid",
        )]
    })?;

    let Value::Object(fields) = value else {
        return Err(vec![FieldError::new(
            &["body"],
            "Input should be a valid dictionary or object",
            "model_attributes_type",
        )]);
    };

    let mut errors = Vec::new();
    let name = required_string(&fields, "name", MAX_NAME_LEN, &mut errors);
    let description = optional_string(&fields, "description", MAX_DESCRIPTION_LEN, &mut errors);
    let price = required_number(&fields, "price", &mut errors);

    match (name, description, price) {
        (Some(name), Some(description), Some(price)) if errors.is_empty() => Ok(ItemInput {
            name,
            description,
            price,
        }),
        _ => Err(errors),
    }
}

fn missing(field: &str) -> FieldError {
    FieldError::new(&["body", field], "Field required", "missing")
}

fn check_length(value: &str, field: &str, max: usize) -> Result<(), FieldError> {
    if value.chars().count() > max {
        return Err(FieldError::new(
            &["body", field],
            format!("String should have at most {} characters", max),
            "string_too_long",
        ));
    }
    Ok(())
}

fn string_value(
    value: &Value,
    field: &str,
    max: usize,
    errors: &mut Vec<FieldError>,
) -> Option<String> {
    let Value::String(s) = value else {
        errors.push(FieldError::new(
            &["body", field],
            "Input should be a valid string",
            "string_type",
        ));
        return None;
    };
    match check_length(s, field, max) {
        Ok(()) => Some(s.clone()),
        Err(e) => {
            errors.push(e);
            None
        }
    }
}

fn required_string(
    fields: &Map<String, Value>,
    field: &str,
    max: usize,
    errors: &mut Vec<FieldError>,
) -> Option<String> {
    match fields.get(field) {
        Some(value) => string_value(value, field, max, errors),
        None => {
            errors.push(missing(field));
            None
        }
    }
}

/// Outer `None` means invalid; `Some(None)` means absent or `null`
fn optional_string(
    fields: &Map<String, Value>,
    field: &str,
    max: usize,
    errors: &mut Vec<FieldError>,
) -> Option<Option<String>> {
    match fields.get(field) {
        None | Some(Value::Null) => Some(None),
        Some(value) => string_value(value, field, max, errors).map(Some),
    }
}

fn required_number(
    fields: &Map<String, Value>,
    field: &str,
    errors: &mut Vec<FieldError>,
) -> Option<f64> {
    match fields.get(field) {
        Some(Value::Number(n)) => match n.as_f64() {
            Some(price) => Some(price),
            None => {
                errors.push(FieldError::new(
                    &["body", field],
                    "Input should be a finite number",
                    "finite_number",
                ));
                None
            }
        },
        Some(_) => {
            errors.push(FieldError::new(
                &["body", field],
                "Input should be a valid number",
                "float_type",
            ));
            None
        }
        None => {
            errors.push(missing(field));
            None
        }
    }
}
