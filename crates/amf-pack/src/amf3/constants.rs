//! AMF3 type markers and header bits.

pub const MARKER_UNDEFINED: u8 = 0x00;
pub const MARKER_NULL: u8 = 0x01;
pub const MARKER_FALSE: u8 = 0x02;
pub const MARKER_TRUE: u8 = 0x03;
pub const MARKER_INTEGER: u8 = 0x04;
pub const MARKER_DOUBLE: u8 = 0x05;
pub const MARKER_STRING: u8 = 0x06;
pub const MARKER_ARRAY: u8 = 0x09;
pub const MARKER_OBJECT: u8 = 0x0A;

/// Low bit of a ref-or-length header: set = inline, clear = table reference.
pub const FLAG_INLINE: u32 = 0b0001;
pub const FLAG_EXTERNALIZABLE: u32 = 0b0100;
pub const FLAG_DYNAMIC: u32 = 0b1000;
/// Sealed member count lives above the four trait flag bits.
pub const SEALED_COUNT_SHIFT: u32 = 4;

/// Largest value a U29 can carry.
pub const U29_MAX: u32 = (1 << 29) - 1;
