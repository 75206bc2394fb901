//! Extraction of a [`Something`] from the raw JSON array response.

use serde_json::Value;

use crate::errors::{Error, Result};
use crate::something::Something;

/// Field read from the first element of the response array.
pub const SOMETHING_FIELD: &str = "something";

/// Parse `something_json` and build a [`Something`] from its first element.
///
/// Returns `Ok(None)` for empty input and for an empty array. Anything that is
/// not a JSON array, a first element that is not an object, or a missing
/// `something` field is an [`Error::Parsing`].
pub fn parse_something(something_json: &str) -> Result<Option<Something>> {
    if something_json.is_empty() {
        return Ok(None);
    }

    let payload: Value = serde_json::from_str(something_json)?;
    let something_array = payload.as_array().ok_or_else(|| {
        Error::Parsing(format!("Value of type {} is not an array", type_name(&payload)))
    })?;

    let Some(first) = something_array.first() else {
        return Ok(None);
    };

    let first = first.as_object().ok_or_else(|| {
        Error::Parsing(format!("Value at 0 of type {} is not an object", type_name(first)))
    })?;

    let name = match first.get(SOMETHING_FIELD) {
        Some(Value::String(name)) => name.clone(),
        // Non-string values are coerced to their JSON text.
        Some(other) => other.to_string(),
        None => return Err(Error::Parsing(format!("No value for {}", SOMETHING_FIELD))),
    };

    Ok(Some(Something::new(name)))
}

/// Log-and-abandon wrapper around [`parse_something`].
pub fn extract_feature_from_json(something_json: &str) -> Option<Something> {
    match parse_something(something_json) {
        Ok(something) => something,
        Err(e) => {
            log::error!("Problem parsing the something JSON results: {}", e);
            None
        }
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_element_array_yields_name() {
        let something = extract_feature_from_json(r#"[{"something":"Ada"}]"#);
        assert_eq!(something, Some(Something::new("Ada")));
    }

    #[test]
    fn test_only_first_element_is_used() {
        let json = r#"[{"something":"first","id":1},{"something":"second"}]"#;
        let something = extract_feature_from_json(json).unwrap();
        assert_eq!(something.name(), "first");
    }

    #[test]
    fn test_surrounding_whitespace_is_accepted() {
        let something = extract_feature_from_json("  [ {\"something\" : \"x\"} ]  ");
        assert_eq!(something, Some(Something::new("x")));
    }

    #[test]
    fn test_empty_input_yields_nothing() {
        assert_eq!(parse_something(""), Ok(None));
        assert_eq!(extract_feature_from_json(""), None);
    }

    #[test]
    fn test_empty_array_yields_nothing() {
        assert_eq!(parse_something("[]"), Ok(None));
        assert_eq!(extract_feature_from_json("[]"), None);
    }

    #[test]
    fn test_malformed_json_is_a_parsing_error() {
        assert!(matches!(parse_something("[{\"something\":"), Err(Error::Parsing(_))));
        assert!(matches!(parse_something("   "), Err(Error::Parsing(_))));
        assert_eq!(extract_feature_from_json("not json at all"), None);
    }

    #[test]
    fn test_top_level_object_is_rejected() {
        let result = parse_something(r#"{"something":"Ada"}"#);
        assert_eq!(
            result,
            Err(Error::Parsing("Value of type object is not an array".to_string()))
        );
    }

    #[test]
    fn test_first_element_must_be_object() {
        assert!(matches!(parse_something(r#"["Ada"]"#), Err(Error::Parsing(_))));
        assert_eq!(extract_feature_from_json("[null, {\"something\":\"x\"}]"), None);
    }

    #[test]
    fn test_missing_field_is_a_parsing_error() {
        let result = parse_something(r#"[{"name":"Ada"}]"#);
        assert_eq!(result, Err(Error::Parsing("No value for something".to_string())));
    }

    #[test]
    fn test_non_string_values_are_coerced() {
        let number = parse_something(r#"[{"something":42}]"#).unwrap().unwrap();
        assert_eq!(number.name(), "42");

        let flag = parse_something(r#"[{"something":true}]"#).unwrap().unwrap();
        assert_eq!(flag.name(), "true");

        let null = parse_something(r#"[{"something":null}]"#).unwrap().unwrap();
        assert_eq!(null.name(), "null");
    }

    #[test]
    fn test_unicode_name_survives() {
        let something = extract_feature_from_json(r#"[{"something":"Дарина é"}]"#).unwrap();
        assert_eq!(something.name(), "Дарина é");
    }
}
