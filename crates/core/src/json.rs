//! Loading already-partitioned element lists from JSON.
//!
//! The expected shape is an array of objects, each with `type` and `text`
//! keys. Other keys (`element_id`, `metadata`, ...) are ignored.

use crate::element::RawElement;
use crate::{DocumentElement, Error, Result};
use serde_json::Value;
use std::io::Read;

/// Parse an element list from a JSON string.
pub fn elements_from_str(input: &str) -> Result<Vec<RawElement>> {
    let value: Value = serde_json::from_str(input)
        .map_err(|e| Error::InvalidInput(format!("malformed JSON: {}", e)))?;
    elements_from_value(value)
}

/// Parse an element list from a reader.
pub fn elements_from_reader<R: Read>(reader: R) -> Result<Vec<RawElement>> {
    let value: Value = serde_json::from_reader(reader)
        .map_err(|e| Error::InvalidInput(format!("malformed JSON: {}", e)))?;
    elements_from_value(value)
}

/// Convert a parsed JSON value into element records.
///
/// The top level must be an array and every entry an object. Absent or null
/// fields are kept as absent so the formatter can report them by index.
pub fn elements_from_value(value: Value) -> Result<Vec<RawElement>> {
    let entries = match value {
        Value::Array(entries) => entries,
        other => {
            return Err(Error::InvalidInput(format!(
                "expected an array of elements, found {}",
                json_kind(&other)
            )));
        }
    };

    entries
        .into_iter()
        .enumerate()
        .map(|(index, entry)| raw_element(index, entry))
        .collect()
}

/// Serialize typed elements as a pretty-printed JSON array.
pub fn elements_to_json(elements: &[DocumentElement]) -> Result<String> {
    serde_json::to_string_pretty(elements).map_err(|e| Error::Serialize(e.to_string()))
}

fn raw_element(index: usize, entry: Value) -> Result<RawElement> {
    let mut object = match entry {
        Value::Object(object) => object,
        other => {
            return Err(Error::InvalidInput(format!(
                "element {} is {}, expected an object",
                index,
                json_kind(&other)
            )));
        }
    };

    let element_type = coerce_field(index, "type", object.remove("type"))?;
    let text = coerce_field(index, "text", object.remove("text"))?;

    Ok(RawElement::new(element_type, text))
}

/// Coerce a scalar field to a string. Null counts as absent.
fn coerce_field(index: usize, field: &str, value: Option<Value>) -> Result<Option<String>> {
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s)),
        Some(Value::Number(n)) => Ok(Some(n.to_string())),
        Some(Value::Bool(b)) => Ok(Some(b.to_string())),
        Some(other) => Err(Error::InvalidInput(format!(
            "element {} field `{}` is {}, expected a string",
            index,
            field,
            json_kind(&other)
        ))),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_elements() {
        let input = r#"[
            {"type": "Title", "text": "Report", "element_id": "a1"},
            {"type": "NarrativeText", "text": "Hello world", "metadata": {"page_number": 1}}
        ]"#;
        let elements = elements_from_str(input).unwrap();
        assert_eq!(elements.len(), 2);
        assert_eq!(elements[0].element_type.as_deref(), Some("Title"));
        assert_eq!(elements[1].text.as_deref(), Some("Hello world"));
    }

    #[test]
    fn test_empty_array() {
        assert!(elements_from_str("[]").unwrap().is_empty());
    }

    #[test]
    fn test_top_level_object_is_invalid() {
        let err = elements_from_str(r#"{"type": "Title", "text": "x"}"#).unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
    }

    #[test]
    fn test_malformed_json_is_invalid() {
        let err = elements_from_str("[{\"type\": ").unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
    }

    #[test]
    fn test_non_object_entry_is_invalid() {
        let err = elements_from_str(r#"[{"type": "Title", "text": "x"}, "stray"]"#).unwrap_err();
        match err {
            Error::InvalidInput(msg) => assert!(msg.contains("element 1")),
            other => panic!("expected InvalidInput, got {:?}", other),
        }
    }

    #[test]
    fn test_absent_and_null_fields_stay_absent() {
        let elements = elements_from_str(r#"[{"type": "Title"}, {"type": null, "text": "x"}]"#)
            .unwrap();
        assert!(elements[0].text.is_none());
        assert!(elements[1].element_type.is_none());
    }

    #[test]
    fn test_scalar_coercion() {
        let elements =
            elements_from_str(r#"[{"type": "PageNumber", "text": 12}, {"type": true, "text": 1.5}]"#)
                .unwrap();
        assert_eq!(elements[0].text.as_deref(), Some("12"));
        assert_eq!(elements[1].element_type.as_deref(), Some("true"));
        assert_eq!(elements[1].text.as_deref(), Some("1.5"));
    }

    #[test]
    fn test_nested_field_is_invalid() {
        let err = elements_from_str(r#"[{"type": "Title", "text": ["a", "b"]}]"#).unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
    }

    #[test]
    fn test_elements_to_json() {
        let elements = vec![DocumentElement::new("Title", "Report")];
        let json = elements_to_json(&elements).unwrap();
        let reloaded = elements_from_str(&json).unwrap();
        assert_eq!(reloaded[0].text.as_deref(), Some("Report"));
    }
}
