//! AMF0 decoder.
//!
//! [`Amf0Decoder::read_any`] materializes a [`Value`];
//! [`Amf0Decoder::skip_any`] walks the same dispatch table and consumes the
//! same bytes without building anything.

use amf_gate_buffers::Reader;

use super::constants::*;
use crate::value::insert_field;
use crate::{amf3, AmfError, Value, WireFormat, MAX_DEPTH};

/// AMF0 decoder over a borrowed byte slice.
///
/// The `reader` is public so framing code can interleave its own
/// primitive reads with value decoding on the same cursor.
#[derive(Debug, Clone)]
pub struct Amf0Decoder<'a> {
    pub reader: Reader<'a>,
}

impl<'a> Amf0Decoder<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            reader: Reader::new(data),
        }
    }

    pub fn position(&self) -> usize {
        self.reader.position()
    }

    /// Decodes one value.
    pub fn read_any(&mut self) -> Result<Value, AmfError> {
        self.read_any_at(0)
    }

    /// Consumes one value without materializing it.
    pub fn skip_any(&mut self) -> Result<(), AmfError> {
        self.skip_any_at(0)
    }

    fn unknown(marker: u8, position: usize) -> AmfError {
        AmfError::UnknownMarker {
            format: WireFormat::Amf0,
            marker,
            position,
        }
    }

    fn enter(&self, depth: usize) -> Result<usize, AmfError> {
        if depth >= MAX_DEPTH {
            return Err(AmfError::NestingTooDeep {
                limit: MAX_DEPTH,
                position: self.reader.position(),
            });
        }
        Ok(depth + 1)
    }

    fn read_any_at(&mut self, depth: usize) -> Result<Value, AmfError> {
        let position = self.reader.position();
        let marker = self.reader.u8()?;
        self.read_value(marker, position, depth)
    }

    fn read_value(&mut self, marker: u8, position: usize, depth: usize) -> Result<Value, AmfError> {
        let r = &mut self.reader;
        let value = match marker {
            MARKER_NUMBER => Value::Number(r.f64()?),
            MARKER_BOOLEAN => Value::Boolean(r.u8()? != 0),
            MARKER_STRING => Value::String(r.utf8_prefixed()?),
            MARKER_OBJECT => {
                let depth = self.enter(depth)?;
                Value::Object(self.read_object_body(depth)?)
            }
            MARKER_NULL => Value::Null,
            MARKER_UNDEFINED => Value::Undefined,
            MARKER_REFERENCE => Value::Reference(r.u16()?),
            MARKER_ECMA_ARRAY => {
                // The count says nothing about the body that follows.
                r.u32()?;
                let depth = self.enter(depth)?;
                Value::Object(self.read_object_body(depth)?)
            }
            MARKER_STRICT_ARRAY => {
                let count = r.i32_len()?;
                let depth = self.enter(depth)?;
                let mut items = Vec::with_capacity(count.min(self.reader.size()));
                for _ in 0..count {
                    items.push(self.read_any_at(depth)?);
                }
                Value::Array(items)
            }
            MARKER_DATE => {
                let millis = r.f64()?;
                let timezone = r.i16()?;
                Value::Date { millis, timezone }
            }
            MARKER_LONG_STRING | MARKER_XML_DOCUMENT => {
                let size = r.i32_len()?;
                Value::String(r.utf8(size)?)
            }
            MARKER_TYPED_OBJECT => {
                let class_name = r.utf8_prefixed()?;
                let depth = self.enter(depth)?;
                let fields = self.read_object_body(depth)?;
                Value::TypedObject { class_name, fields }
            }
            MARKER_AVMPLUS => {
                amf3::skip_value(r)?;
                Value::Amf3
            }
            _ => return Err(Self::unknown(marker, position)),
        };
        Ok(value)
    }

    /// Key/value pairs up to the empty-key + end-marker sentinel.
    fn read_object_body(&mut self, depth: usize) -> Result<Vec<(String, Value)>, AmfError> {
        let mut fields = Vec::new();
        loop {
            let key = self.reader.utf8_prefixed()?;
            let position = self.reader.position();
            let marker = self.reader.u8()?;
            if key.is_empty() && marker == MARKER_OBJECT_END {
                return Ok(fields);
            }
            let value = self.read_value(marker, position, depth)?;
            insert_field(&mut fields, key, value);
        }
    }

    fn skip_any_at(&mut self, depth: usize) -> Result<(), AmfError> {
        let position = self.reader.position();
        let marker = self.reader.u8()?;
        self.skip_value(marker, position, depth)
    }

    fn skip_value(&mut self, marker: u8, position: usize, depth: usize) -> Result<(), AmfError> {
        let r = &mut self.reader;
        match marker {
            MARKER_NUMBER => r.skip(8)?,
            MARKER_BOOLEAN => r.skip(1)?,
            MARKER_STRING => skip_short_string(r)?,
            MARKER_OBJECT => {
                let depth = self.enter(depth)?;
                self.skip_object_body(depth)?
            }
            MARKER_NULL | MARKER_UNDEFINED => {}
            MARKER_REFERENCE => r.skip(2)?,
            MARKER_ECMA_ARRAY => {
                r.skip(4)?;
                let depth = self.enter(depth)?;
                self.skip_object_body(depth)?
            }
            MARKER_STRICT_ARRAY => {
                let count = r.i32_len()?;
                let depth = self.enter(depth)?;
                for _ in 0..count {
                    self.skip_any_at(depth)?;
                }
            }
            MARKER_DATE => {
                r.skip(8)?;
                r.skip(2)?;
            }
            MARKER_LONG_STRING | MARKER_XML_DOCUMENT => {
                let size = r.i32_len()?;
                r.skip(size)?;
            }
            MARKER_TYPED_OBJECT => {
                skip_short_string(r)?;
                let depth = self.enter(depth)?;
                self.skip_object_body(depth)?
            }
            MARKER_AVMPLUS => amf3::skip_value(r)?,
            _ => return Err(Self::unknown(marker, position)),
        }
        Ok(())
    }

    fn skip_object_body(&mut self, depth: usize) -> Result<(), AmfError> {
        loop {
            let key_len = self.reader.u16()?;
            self.reader.skip(key_len as usize)?;
            let position = self.reader.position();
            let marker = self.reader.u8()?;
            if key_len == 0 && marker == MARKER_OBJECT_END {
                return Ok(());
            }
            self.skip_value(marker, position, depth)?;
        }
    }
}

fn skip_short_string(reader: &mut Reader<'_>) -> Result<(), AmfError> {
    let size = reader.u16()?;
    reader.skip(size as usize)?;
    Ok(())
}
