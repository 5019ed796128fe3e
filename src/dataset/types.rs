// src/dataset/types.rs

use serde_json::{Map, Value};

use crate::error::{DatasetError, Result};
use crate::stats::Fields;

/// One project object from the source array, fields kept in source order.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectRecord {
    index: usize,
    fields: Map<String, Value>,
}

impl ProjectRecord {
    pub fn new(index: usize, fields: Map<String, Value>) -> Self {
        Self { index, fields }
    }

    /// Position of this record in the source array.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Look up `field`, failing if the record does not carry it.
    pub fn get(&self, field: &str) -> Result<&Value> {
        self.fields
            .get(field)
            .ok_or_else(|| DatasetError::MissingField {
                record: self.index,
                field: field.to_string(),
            })
    }

    /// Look up an array-valued `field`.
    pub fn get_array(&self, field: &str) -> Result<&Vec<Value>> {
        self.get(field)?
            .as_array()
            .ok_or_else(|| DatasetError::FieldType {
                record: self.index,
                field: field.to_string(),
                expected: "an array",
            })
    }

    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }
}

impl Fields for ProjectRecord {
    fn field(&self, field: &str) -> Result<Value> {
        self.get(field).cloned()
    }
}

/// Render a JSON value as a table cell: strings unquoted, null as empty,
/// everything else in compact JSON.
pub fn render_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Array(_) | Value::Object(_) => value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: Value) -> ProjectRecord {
        match value {
            Value::Object(map) => ProjectRecord::new(3, map),
            other => panic!("not an object: {other}"),
        }
    }

    #[test]
    fn test_missing_field_names_record_and_field() {
        let rec = record(json!({"id": "P1"}));
        let err = rec.get("countryname").unwrap_err();
        assert!(matches!(
            err,
            DatasetError::MissingField { record: 3, ref field } if field == "countryname"
        ));
    }

    #[test]
    fn test_non_array_theme_field_is_a_type_error() {
        let rec = record(json!({"mjtheme_namecode": "8"}));
        let err = rec.get_array("mjtheme_namecode").unwrap_err();
        assert!(matches!(err, DatasetError::FieldType { expected: "an array", .. }));
    }

    #[test]
    fn test_columns_keep_source_order() {
        let rec = record(json!({"sector": 1, "id": "P1", "countryname": "Chad"}));
        let cols: Vec<&str> = rec.columns().collect();
        assert_eq!(cols, vec!["sector", "id", "countryname"]);
    }

    #[test]
    fn test_render_value_cells() {
        assert_eq!(render_value(&json!(null)), "");
        assert_eq!(render_value(&json!("Brazil")), "Brazil");
        assert_eq!(render_value(&json!(130000000)), "130000000");
        assert_eq!(render_value(&json!(["a", 1])), r#"["a",1]"#);
    }
}
