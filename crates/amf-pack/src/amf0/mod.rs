//! AMF0, the primary marker-per-value format.

pub mod constants;
mod decoder;
mod encoder;

pub use decoder::Amf0Decoder;
pub use encoder::{is_list, Amf0Encoder};
