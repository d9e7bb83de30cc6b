//! Codec error type.

use amf_gate_buffers::BufferError;
use thiserror::Error;

use crate::WireFormat;

/// Error type for AMF decoding.
///
/// Every variant is fatal to the current pass: the reader position after a
/// failure is not meaningful and must not be reused.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AmfError {
    #[error(transparent)]
    Buffer(#[from] BufferError),
    #[error("unknown {format} marker 0x{marker:02x} at position {position}")]
    UnknownMarker {
        format: WireFormat,
        marker: u8,
        position: usize,
    },
    #[error("values nested deeper than {limit} levels at position {position}")]
    NestingTooDeep { limit: usize, position: usize },
}

impl AmfError {
    /// Byte offset the failure was detected at.
    pub fn position(&self) -> usize {
        match self {
            AmfError::Buffer(err) => err.position(),
            AmfError::UnknownMarker { position, .. } | AmfError::NestingTooDeep { position, .. } => {
                *position
            }
        }
    }
}
