//! Top-level constants for amf-pack.

use std::fmt;

/// Wire format identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WireFormat {
    /// The primary, marker-per-value format used by envelopes.
    Amf0 = 0,
    /// The compact format embedded behind the AMF0 `0x11` marker.
    Amf3 = 3,
}

impl fmt::Display for WireFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WireFormat::Amf0 => f.write_str("AMF0"),
            WireFormat::Amf3 => f.write_str("AMF3"),
        }
    }
}

/// Maximum container nesting accepted by the decoders.
pub const MAX_DEPTH: usize = 256;
