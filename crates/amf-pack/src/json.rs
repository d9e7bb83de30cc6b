//! Bridging between [`Value`] and `serde_json::Value`.
//!
//! Handlers commonly build their results as JSON; dumps and logs render
//! decoded requests as JSON. AMF-only shapes map to small tagged objects.

use serde_json::{Map, Number, Value as JsonValue};

use crate::Value;

/// Key prepended to typed objects when rendered as JSON.
pub const EXPLICIT_TYPE_KEY: &str = "_explicitType";

fn json_number(n: f64) -> JsonValue {
    Number::from_f64(n).map_or(JsonValue::Null, JsonValue::Number)
}

fn json_fields(fields: &[(String, Value)], map: &mut Map<String, JsonValue>) {
    for (key, value) in fields {
        map.insert(key.clone(), value.to_json());
    }
}

impl Value {
    /// Renders the value as JSON.
    ///
    /// Non-finite numbers become `null`. Undefined becomes `null`, dates
    /// become their millisecond count, references become `{"$ref": n}` and
    /// an embedded AMF3 value becomes `{"$amf3": true}`.
    pub fn to_json(&self) -> JsonValue {
        match self {
            Value::Number(n) => json_number(*n),
            Value::Boolean(b) => JsonValue::Bool(*b),
            Value::String(s) => JsonValue::String(s.clone()),
            Value::Null | Value::Undefined => JsonValue::Null,
            Value::Object(fields) => {
                let mut map = Map::new();
                json_fields(fields, &mut map);
                JsonValue::Object(map)
            }
            Value::Array(items) => JsonValue::Array(items.iter().map(Value::to_json).collect()),
            Value::Date { millis, .. } => json_number(*millis),
            Value::TypedObject { class_name, fields } => {
                let mut map = Map::new();
                map.insert(
                    EXPLICIT_TYPE_KEY.to_owned(),
                    JsonValue::String(class_name.clone()),
                );
                json_fields(fields, &mut map);
                JsonValue::Object(map)
            }
            Value::Reference(index) => {
                let mut map = Map::new();
                map.insert("$ref".to_owned(), JsonValue::from(*index));
                JsonValue::Object(map)
            }
            Value::Amf3 => {
                let mut map = Map::new();
                map.insert("$amf3".to_owned(), JsonValue::Bool(true));
                JsonValue::Object(map)
            }
        }
    }
}

impl From<JsonValue> for Value {
    fn from(json: JsonValue) -> Self {
        match json {
            JsonValue::Null => Value::Null,
            JsonValue::Bool(b) => Value::Boolean(b),
            JsonValue::Number(n) => Value::Number(n.as_f64().unwrap_or(f64::NAN)),
            JsonValue::String(s) => Value::String(s),
            JsonValue::Array(items) => Value::Array(items.into_iter().map(Value::from).collect()),
            JsonValue::Object(map) => {
                Value::Object(map.into_iter().map(|(k, v)| (k, Value::from(v))).collect())
            }
        }
    }
}

impl From<&JsonValue> for Value {
    fn from(json: &JsonValue) -> Self {
        Value::from(json.clone())
    }
}
