//! Binary buffer utilities for amf-gate.
//!
//! Every read is bounds-checked: a [`Reader`] never hands out partial data
//! and never moves backwards, and a [`Writer`] only appends.
//!
//! # Overview
//!
//! - [`Reader`] - Reads big-endian primitives from a byte slice with cursor tracking
//! - [`Writer`] - Appends big-endian primitives to a growing buffer
//! - [`OctetPreview`] - Lazily formats a byte slice as hex for log events
//!
//! # Example
//!
//! ```
//! use amf_gate_buffers::{Reader, Writer};
//!
//! let mut writer = Writer::new();
//! writer.u8(0x01);
//! writer.u16(0x0203);
//! writer.utf8_prefixed("hello");
//! let data = writer.flush();
//!
//! let mut reader = Reader::new(&data);
//! assert_eq!(reader.u8().unwrap(), 0x01);
//! assert_eq!(reader.u16().unwrap(), 0x0203);
//! assert_eq!(reader.utf8_prefixed().unwrap(), "hello");
//! assert!(reader.u8().is_err());
//! ```

mod print_octets;
mod reader;
mod writer;

pub use print_octets::{print_octets, OctetPreview};
pub use reader::Reader;
pub use writer::Writer;

use thiserror::Error;

/// Error type for buffer operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BufferError {
    /// Attempted to read past the end of the buffer.
    #[error("end of buffer: wanted {size} bytes at position {position}")]
    EndOfBuffer { size: usize, position: usize },
    /// A length or count field decoded to a negative value.
    #[error("negative length {length} at position {position}")]
    NegativeLength { length: i64, position: usize },
}

impl BufferError {
    /// Byte offset the failing read was attempted at.
    pub fn position(&self) -> usize {
        match self {
            BufferError::EndOfBuffer { position, .. }
            | BufferError::NegativeLength { position, .. } => *position,
        }
    }
}
