//! AMF value codec for amf-gate.
//!
//! - [`amf0`] decodes, skips and encodes the primary format.
//! - [`amf3`] skips values of the compact format embedded inside AMF0.
//! - [`Value`] is the decoded shape; [`Value::to_json`] and
//!   `From<serde_json::Value>` bridge it to JSON.
//!
//! Decoding is strict and single-pass: any [`AmfError`] ends the pass.
//!
//! ```
//! use amf_gate_pack::{decode_amf0, encode_amf0, Value};
//!
//! let value = Value::object([("a", 1.0)]);
//! let bytes = encode_amf0(&value);
//! assert_eq!(decode_amf0(&bytes).unwrap(), value);
//! ```

mod constants;
mod error;
mod json;
mod value;

pub mod amf0;
pub mod amf3;

pub use constants::{WireFormat, MAX_DEPTH};
pub use error::AmfError;
pub use json::EXPLICIT_TYPE_KEY;
pub use value::Value;

use amf0::{Amf0Decoder, Amf0Encoder};

/// Decodes one AMF0 value from the start of `data`.
///
/// Trailing bytes are ignored.
pub fn decode_amf0(data: &[u8]) -> Result<Value, AmfError> {
    Amf0Decoder::new(data).read_any()
}

/// Decodes one AMF0 value and also returns the number of bytes it used.
pub fn decode_amf0_with_consumed(data: &[u8]) -> Result<(Value, usize), AmfError> {
    let mut decoder = Amf0Decoder::new(data);
    let value = decoder.read_any()?;
    Ok((value, decoder.position()))
}

/// Returns the number of bytes the AMF0 value at the start of `data` spans.
pub fn skip_amf0(data: &[u8]) -> Result<usize, AmfError> {
    let mut decoder = Amf0Decoder::new(data);
    decoder.skip_any()?;
    Ok(decoder.position())
}

pub fn encode_amf0(value: &Value) -> Vec<u8> {
    Amf0Encoder::new().encode(value)
}
