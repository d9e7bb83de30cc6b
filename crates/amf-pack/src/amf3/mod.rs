//! AMF3, the compact format AMF0 can switch into behind marker `0x11`.
//!
//! Decode-only and partial: values are skipped, never materialized.

pub mod constants;
mod skipper;

pub use skipper::{read_u29, skip_string, skip_value, StringKind};
