//! Decode-only walker for embedded AMF3 values.
//!
//! Consumes exactly one value and keeps nothing. Only the markers seen
//! inside AMF0 traffic are understood; anything else is fatal.
//!
//! Reference tables are not tracked. A name that arrives as a table
//! reference is assumed to be non-empty, so a run that relies on
//! back-referencing the empty string will desynchronize.

use amf_gate_buffers::Reader;

use super::constants::*;
use crate::{AmfError, WireFormat, MAX_DEPTH};

/// Reads a 1-4 byte variable-length unsigned integer.
///
/// The first three bytes contribute seven bits each while their high bit
/// signals continuation; a fourth byte contributes all eight bits.
pub fn read_u29(reader: &mut Reader<'_>) -> Result<u32, AmfError> {
    let mut value: u32 = 0;
    for _ in 0..3 {
        let byte = reader.u8()?;
        if byte & 0x80 == 0 {
            return Ok((value << 7) | u32::from(byte));
        }
        value = (value << 7) | u32::from(byte & 0x7f);
    }
    let byte = reader.u8()?;
    Ok((value << 8) | u32::from(byte))
}

/// What a string header turned out to be.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StringKind {
    /// Index into the client's string table; nothing else on the wire.
    Reference(u32),
    /// Inline bytes of the given length, already consumed.
    Inline(usize),
}

impl StringKind {
    /// Only an inline zero-length string counts as empty.
    pub fn is_empty(&self) -> bool {
        matches!(self, StringKind::Inline(0))
    }
}

/// Skips one ref-or-length string.
pub fn skip_string(reader: &mut Reader<'_>) -> Result<StringKind, AmfError> {
    let header = read_u29(reader)?;
    if header & FLAG_INLINE == 0 {
        return Ok(StringKind::Reference(header >> 1));
    }
    let length = (header >> 1) as usize;
    reader.skip(length)?;
    Ok(StringKind::Inline(length))
}

/// Skips one AMF3 value starting at its marker byte.
pub fn skip_value(reader: &mut Reader<'_>) -> Result<(), AmfError> {
    skip_value_at(reader, 0)
}

fn enter(reader: &Reader<'_>, depth: usize) -> Result<usize, AmfError> {
    if depth >= MAX_DEPTH {
        return Err(AmfError::NestingTooDeep {
            limit: MAX_DEPTH,
            position: reader.position(),
        });
    }
    Ok(depth + 1)
}

fn skip_value_at(reader: &mut Reader<'_>, depth: usize) -> Result<(), AmfError> {
    let position = reader.position();
    let marker = reader.u8()?;
    match marker {
        MARKER_UNDEFINED | MARKER_NULL | MARKER_FALSE | MARKER_TRUE => Ok(()),
        MARKER_INTEGER => read_u29(reader).map(drop),
        MARKER_DOUBLE => Ok(reader.skip(8)?),
        MARKER_STRING => skip_string(reader).map(drop),
        MARKER_ARRAY => {
            let depth = enter(reader, depth)?;
            skip_array(reader, depth)
        }
        MARKER_OBJECT => {
            let depth = enter(reader, depth)?;
            skip_object(reader, depth)
        }
        _ => Err(AmfError::UnknownMarker {
            format: WireFormat::Amf3,
            marker,
            position,
        }),
    }
}

/// Name/value pairs up to the first inline empty name.
fn skip_dynamic_members(reader: &mut Reader<'_>, depth: usize) -> Result<(), AmfError> {
    loop {
        if skip_string(reader)?.is_empty() {
            return Ok(());
        }
        skip_value_at(reader, depth)?;
    }
}

fn skip_array(reader: &mut Reader<'_>, depth: usize) -> Result<(), AmfError> {
    let header = read_u29(reader)?;
    if header & FLAG_INLINE == 0 {
        return Ok(());
    }
    let dense = header >> 1;
    skip_dynamic_members(reader, depth)?;
    for _ in 0..dense {
        skip_value_at(reader, depth)?;
    }
    Ok(())
}

fn skip_object(reader: &mut Reader<'_>, depth: usize) -> Result<(), AmfError> {
    let traits = read_u29(reader)?;
    if traits & FLAG_INLINE == 0 {
        return Ok(());
    }
    let externalizable = traits & FLAG_EXTERNALIZABLE != 0;
    let dynamic = traits & FLAG_DYNAMIC != 0;
    let sealed = traits >> SEALED_COUNT_SHIFT;

    // class name
    skip_string(reader)?;
    for _ in 0..sealed {
        skip_string(reader)?;
    }
    for _ in 0..sealed {
        skip_value_at(reader, depth)?;
    }
    if dynamic && !externalizable {
        skip_dynamic_members(reader, depth)?;
    }
    Ok(())
}
