//! The decoded shape of one AMF0 value.

use std::fmt;

/// A tagged AMF0 value.
///
/// Objects keep their wire order and hold unique keys. Associative arrays
/// decode to [`Value::Object`] and XML documents to [`Value::String`]; the
/// distinction is not observable after decoding.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Number(f64),
    Boolean(bool),
    String(String),
    Null,
    Undefined,
    Object(Vec<(String, Value)>),
    Array(Vec<Value>),
    /// Milliseconds since the epoch; `timezone` is carried but ignored.
    Date { millis: f64, timezone: i16 },
    TypedObject {
        class_name: String,
        fields: Vec<(String, Value)>,
    },
    /// Index into the client's object table. Never resolved.
    Reference(u16),
    /// An embedded AMF3 value was present and skipped.
    Amf3,
}

impl Value {
    /// Builds an [`Value::Object`] from key/value pairs, keeping the last
    /// value for a repeated key at the position of its first occurrence.
    pub fn object<K, V, I>(pairs: I) -> Self
    where
        K: Into<String>,
        V: Into<Value>,
        I: IntoIterator<Item = (K, V)>,
    {
        let mut fields: Vec<(String, Value)> = Vec::new();
        for (key, value) in pairs {
            insert_field(&mut fields, key.into(), value.into());
        }
        Value::Object(fields)
    }

    pub fn array<V, I>(items: I) -> Self
    where
        V: Into<Value>,
        I: IntoIterator<Item = V>,
    {
        Value::Array(items.into_iter().map(Into::into).collect())
    }

    /// Looks up a field of an object or typed object.
    pub fn get(&self, key: &str) -> Option<&Value> {
        match self {
            Value::Object(fields) | Value::TypedObject { fields, .. } => fields
                .iter()
                .find_map(|(k, v)| if k == key { Some(v) } else { None }),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null | Value::Undefined)
    }
}

/// Inserts or replaces `key`, keeping the original position on replace.
pub(crate) fn insert_field(fields: &mut Vec<(String, Value)>, key: String, value: Value) {
    match fields.iter_mut().find(|(k, _)| *k == key) {
        Some(slot) => slot.1 = value,
        None => fields.push((key, value)),
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n) => write!(f, "{}", n),
            Value::String(s) => f.write_str(s),
            other => write!(f, "{}", other.to_json()),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<f32> for Value {
    fn from(n: f32) -> Self {
        Value::Number(n.into())
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(n.into())
    }
}

impl From<u32> for Value {
    fn from(n: u32) -> Self {
        Value::Number(n.into())
    }
}

// Exact up to 2^53; larger magnitudes round to the nearest double.
impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Number(n as f64)
    }
}

impl From<u64> for Value {
    fn from(n: u64) -> Self {
        Value::Number(n as f64)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_owned())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl<V: Into<Value>> From<Vec<V>> for Value {
    fn from(items: Vec<V>) -> Self {
        Value::array(items)
    }
}

impl<V: Into<Value>> From<Option<V>> for Value {
    fn from(opt: Option<V>) -> Self {
        match opt {
            Some(v) => v.into(),
            None => Value::Null,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integers_become_doubles() {
        assert_eq!(Value::from(42i32), Value::Number(42.0));
        assert_eq!(Value::from(7u64), Value::Number(7.0));
        assert_eq!(Value::from(-(1i64 << 53)), Value::Number(-9007199254740992.0));
    }

    #[test]
    fn object_builder_replaces_duplicates_in_place() {
        let obj = Value::object([("a", 1), ("b", 2), ("a", 3)]);
        assert_eq!(
            obj,
            Value::Object(vec![
                ("a".into(), Value::Number(3.0)),
                ("b".into(), Value::Number(2.0)),
            ])
        );
        assert_eq!(obj.get("a").and_then(Value::as_f64), Some(3.0));
        assert_eq!(obj.get("zz"), None);
    }

    #[test]
    fn accessors_match_only_their_variant() {
        assert_eq!(Value::Boolean(false).as_bool(), Some(false));
        assert_eq!(Value::from(1).as_bool(), None);
        assert_eq!(Value::from("true").as_bool(), None);

        let list = Value::array([1, 2]);
        assert_eq!(
            list.as_array(),
            Some(&[Value::Number(1.0), Value::Number(2.0)][..])
        );
        assert_eq!(Value::Array(vec![]).as_array(), Some(&[][..]));
        // Index-keyed objects are not arrays until they are encoded.
        assert_eq!(Value::object([("0", 1)]).as_array(), None);
        assert_eq!(Value::Null.as_array(), None);
    }

    #[test]
    fn option_none_is_null() {
        assert!(Value::from(None::<String>).is_null());
        assert_eq!(Value::from(Some("x")), Value::String("x".into()));
    }

    #[test]
    fn display_text() {
        assert_eq!(Value::Number(1.0).to_string(), "1");
        assert_eq!(Value::Number(1.5).to_string(), "1.5");
        assert_eq!(Value::from("plain").to_string(), "plain");
        assert_eq!(Value::Reference(3).to_string(), r#"{"$ref":3}"#);
        assert_eq!(
            Value::Date {
                millis: 1000.0,
                timezone: 0
            }
            .to_string(),
            "1000.0"
        );
    }
}
