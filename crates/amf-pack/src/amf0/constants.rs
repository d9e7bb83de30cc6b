//! AMF0 type markers.

pub const MARKER_NUMBER: u8 = 0x00;
pub const MARKER_BOOLEAN: u8 = 0x01;
pub const MARKER_STRING: u8 = 0x02;
pub const MARKER_OBJECT: u8 = 0x03;
pub const MARKER_NULL: u8 = 0x05;
pub const MARKER_UNDEFINED: u8 = 0x06;
pub const MARKER_REFERENCE: u8 = 0x07;
pub const MARKER_ECMA_ARRAY: u8 = 0x08;
/// Follows a zero-length key to close an object body.
pub const MARKER_OBJECT_END: u8 = 0x09;
pub const MARKER_STRICT_ARRAY: u8 = 0x0A;
pub const MARKER_DATE: u8 = 0x0B;
pub const MARKER_LONG_STRING: u8 = 0x0C;
pub const MARKER_XML_DOCUMENT: u8 = 0x0F;
pub const MARKER_TYPED_OBJECT: u8 = 0x10;
pub const MARKER_AVMPLUS: u8 = 0x11;

/// Largest byte length the short string marker can carry.
pub const SHORT_STRING_MAX: usize = 0xFFFF;
