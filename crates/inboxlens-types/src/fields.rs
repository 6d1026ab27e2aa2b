//! Enumeration of the open-ended `key_values` map.
//!
//! Every entry becomes exactly one [`FieldEntry`], in map order. Values of any
//! JSON shape are coerced to text; nothing is dropped.

use serde::Serialize;
use serde_json::{Map, Value};

/// One dynamic field, ready to render and copy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldEntry {
    /// Raw key. Capitalization is left to the view.
    pub label: String,
    pub value: String,
}

/// Convert `key_values` into ordered label/value pairs.
pub fn enumerate_fields(key_values: &Map<String, Value>) -> Vec<FieldEntry> {
    key_values
        .iter()
        .map(|(key, value)| FieldEntry {
            label: key.clone(),
            value: display_value(value),
        })
        .collect()
}

/// Text form of an arbitrary JSON value.
///
/// Strings are used verbatim, `null` renders empty, and arrays/objects are
/// rendered as compact JSON.
pub fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Array(_) | Value::Object(_) => value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn map(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_empty_map_yields_empty_sequence() {
        assert!(enumerate_fields(&Map::new()).is_empty());
    }

    #[test]
    fn test_preserves_order_and_count() {
        let fields = enumerate_fields(&map(json!({
            "amount": "250",
            "account": "123",
            "due_date": "2024-03-01"
        })));

        let labels: Vec<&str> = fields.iter().map(|f| f.label.as_str()).collect();
        assert_eq!(labels, vec!["amount", "account", "due_date"]);
        assert_eq!(fields[0].value, "250");
        assert_eq!(fields[1].value, "123");
    }

    #[test]
    fn test_labels_are_raw_keys() {
        let fields = enumerate_fields(&map(json!({"loan number": "X-1"})));
        assert_eq!(fields[0].label, "loan number");
    }

    #[test]
    fn test_non_string_values_are_coerced() {
        let fields = enumerate_fields(&map(json!({
            "count": 3,
            "ratio": 0.25,
            "flag": true,
            "missing": null,
            "tags": ["a", "b"],
            "nested": {"k": 1}
        })));

        let values: Vec<&str> = fields.iter().map(|f| f.value.as_str()).collect();
        assert_eq!(
            values,
            vec!["3", "0.25", "true", "", r#"["a","b"]"#, r#"{"k":1}"#]
        );
    }

    #[test]
    fn test_many_entries_one_pair_each() {
        let mut source = Map::new();
        for i in 0..50 {
            source.insert(format!("field_{}", i), json!(i));
        }

        let fields = enumerate_fields(&source);
        assert_eq!(fields.len(), 50);
        for (i, field) in fields.iter().enumerate() {
            assert_eq!(field.label, format!("field_{}", i));
            assert_eq!(field.value, i.to_string());
        }
    }
}
