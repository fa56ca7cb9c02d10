//! Forward conversion: MockValue → JSON value.

use crate::values::{MockRecord, MockValue};
use base64::Engine;
use serde_json::{json, Map, Value};

/// Key under which default-construction placeholders are emitted.
pub const DEFAULT_MARKER: &str = "$default";

impl From<&MockValue> for Value {
    fn from(value: &MockValue) -> Self {
        match value {
            MockValue::Null => Value::Null,
            MockValue::Bool(b) => json!(*b),
            MockValue::Int64(i) => json!(*i),
            // Non-finite floats have no JSON form and become null
            MockValue::Float64(f) => json!(*f),
            MockValue::String(s) | MockValue::Url(s) => json!(s),

            // Binary types - base64 encode
            MockValue::Bytes(b) => json!(base64::engine::general_purpose::STANDARD.encode(b)),

            MockValue::Uuid(u) => json!(u.to_string()),
            MockValue::DateTime(dt) => json!(dt.to_rfc3339()),
            MockValue::Array(values) | MockValue::Set(values) => {
                Value::Array(values.iter().map(Value::from).collect())
            }
            MockValue::Map(entries) => Value::Object(
                entries
                    .iter()
                    .map(|(k, v)| (json_key(k), Value::from(v)))
                    .collect(),
            ),
            MockValue::Record(record) => Value::from(record),
            MockValue::Variant { case, .. } => json!(case),
            MockValue::Default { type_name } => {
                let mut marker = Map::new();
                marker.insert(DEFAULT_MARKER.to_string(), json!(type_name));
                Value::Object(marker)
            }
        }
    }
}

impl From<MockValue> for Value {
    fn from(value: MockValue) -> Self {
        Value::from(&value)
    }
}

impl From<&MockRecord> for Value {
    fn from(record: &MockRecord) -> Self {
        let fields: Map<String, Value> = record
            .fields
            .iter()
            .map(|(name, value)| (name.clone(), Value::from(value)))
            .collect();
        Value::Object(fields)
    }
}

/// JSON object keys must be strings; scalars keep their textual form.
fn json_key(key: &MockValue) -> String {
    match Value::from(key) {
        Value::String(s) => s,
        other => other.to_string(),
    }
}
