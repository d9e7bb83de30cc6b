//! AMF0 encoder.
//!
//! Emits only the subset response payloads need: numbers as doubles,
//! short strings, dense arrays and anonymous objects. No reference table
//! is ever produced; every container is written inline.

use amf_gate_buffers::Writer;

use super::constants::*;
use crate::Value;

/// AMF0 encoder.
#[derive(Debug, Default)]
pub struct Amf0Encoder {
    pub writer: Writer,
}

impl Amf0Encoder {
    pub fn new() -> Self {
        Self {
            writer: Writer::new(),
        }
    }

    /// Encodes a [`Value`] and returns the encoded bytes.
    pub fn encode(&mut self, value: &Value) -> Vec<u8> {
        self.writer.reset();
        self.write_any(value);
        self.writer.flush()
    }

    /// Mapping:
    /// - `Null`/`Undefined` → null
    /// - `Boolean` → boolean
    /// - `Number` → number (always a double)
    /// - `String` → short string
    /// - `Array` → dense array
    /// - `Object` → dense array when its keys are exactly `"0".."n-1"` in
    ///   order (the empty object included), anonymous object otherwise
    /// - anything else → short string of its `Display` text
    pub fn write_any(&mut self, value: &Value) {
        match value {
            Value::Null | Value::Undefined => self.write_null(),
            Value::Boolean(b) => self.write_boolean(*b),
            Value::Number(n) => self.write_number(*n),
            Value::String(s) => self.write_str(s),
            Value::Array(items) => self.write_arr(items),
            Value::Object(fields) => {
                if is_list(fields) {
                    self.write_arr_header(fields.len());
                    for (_, v) in fields {
                        self.write_any(v);
                    }
                } else {
                    self.write_obj(fields);
                }
            }
            Value::Date { .. }
            | Value::TypedObject { .. }
            | Value::Reference(_)
            | Value::Amf3 => self.write_str(&value.to_string()),
        }
    }

    pub fn write_null(&mut self) {
        self.writer.u8(MARKER_NULL);
    }

    pub fn write_boolean(&mut self, b: bool) {
        self.writer.u8(MARKER_BOOLEAN);
        self.writer.u8(u8::from(b));
    }

    pub fn write_number(&mut self, n: f64) {
        self.writer.u8(MARKER_NUMBER);
        self.writer.f64(n);
    }

    /// Writes a short string. Longer input wraps its 16-bit length prefix.
    pub fn write_str(&mut self, s: &str) {
        if s.len() > SHORT_STRING_MAX {
            tracing::warn!(
                len = s.len(),
                "string exceeds the short string limit; length prefix wraps"
            );
        }
        self.writer.u8(MARKER_STRING);
        self.writer.utf8_prefixed(s);
    }

    fn write_arr_header(&mut self, len: usize) {
        self.writer.u8(MARKER_STRICT_ARRAY);
        self.writer.u32(len as u32);
    }

    pub fn write_arr(&mut self, items: &[Value]) {
        self.write_arr_header(items.len());
        for item in items {
            self.write_any(item);
        }
    }

    pub fn write_obj(&mut self, fields: &[(String, Value)]) {
        self.writer.u8(MARKER_OBJECT);
        for (key, value) in fields {
            self.writer.utf8_prefixed(key);
            self.write_any(value);
        }
        self.write_obj_end();
    }

    /// Zero-length key followed by the end marker.
    pub fn write_obj_end(&mut self) {
        self.writer.u16(0);
        self.writer.u8(MARKER_OBJECT_END);
    }
}

/// True when keys are exactly `0, 1, .., n-1` in canonical decimal form.
///
/// `"01"` or `"+1"` do not count as integer keys.
pub fn is_list(fields: &[(String, Value)]) -> bool {
    fields
        .iter()
        .enumerate()
        .all(|(i, (key, _))| *key == i.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(keys: &[&str]) -> Vec<(String, Value)> {
        keys.iter().map(|k| (k.to_string(), Value::Null)).collect()
    }

    #[test]
    fn list_detection() {
        assert!(is_list(&[]));
        assert!(is_list(&fields(&["0", "1", "2"])));
        assert!(!is_list(&fields(&["1"])));
        assert!(!is_list(&fields(&["1", "0"])));
        assert!(!is_list(&fields(&["0", "2"])));
        assert!(!is_list(&fields(&["00"])));
        assert!(!is_list(&fields(&["a"])));
    }

    #[test]
    fn empty_object_is_an_empty_dense_array() {
        let mut encoder = Amf0Encoder::new();
        assert_eq!(
            encoder.encode(&Value::Object(vec![])),
            vec![MARKER_STRICT_ARRAY, 0, 0, 0, 0]
        );
    }

    #[test]
    fn fallback_renders_text() {
        let mut encoder = Amf0Encoder::new();
        assert_eq!(
            encoder.encode(&Value::Reference(1)),
            [&[MARKER_STRING, 0x00, 0x0a][..], &br#"{"$ref":1}"#[..]].concat()
        );
    }
}
