//! Hex rendering of byte slices for diagnostics.

use std::fmt;

/// Formats a byte slice as space-separated hex, showing at most `max` bytes.
///
/// # Example
///
/// ```
/// use amf_gate_buffers::print_octets;
///
/// assert_eq!(print_octets(&[0x01, 0x02, 0x0a, 0xff], 16), "01 02 0a ff");
/// assert_eq!(print_octets(&[], 16), "");
/// ```
pub fn print_octets(octets: &[u8], max: usize) -> String {
    OctetPreview::new(octets, max).to_string()
}

/// A lazily formatted hex preview, suitable as a `tracing` field value.
///
/// Nothing is rendered unless the event is actually recorded.
#[derive(Debug, Clone, Copy)]
pub struct OctetPreview<'a> {
    octets: &'a [u8],
    max: usize,
}

impl<'a> OctetPreview<'a> {
    pub fn new(octets: &'a [u8], max: usize) -> Self {
        Self { octets, max }
    }
}

impl fmt::Display for OctetPreview<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, byte) in self.octets.iter().take(self.max).enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{:02x}", byte)?;
        }
        if self.octets.len() > self.max {
            write!(f, "... ({} more)", self.octets.len() - self.max)?;
        }
        Ok(())
    }
}
