//! Bounds-checked binary reader with cursor tracking.

use crate::BufferError;

/// A binary reader over an immutable byte slice.
///
/// The cursor only moves forward. Every read checks that the requested
/// number of bytes is available first; on failure the cursor is left where
/// it was and an [`BufferError::EndOfBuffer`] reports the attempted size and
/// position. Callers are expected to abandon the pass after an error.
///
/// # Example
///
/// ```
/// use amf_gate_buffers::Reader;
///
/// let data = [0x01, 0x02, 0x03, 0x04];
/// let mut reader = Reader::new(&data);
///
/// assert_eq!(reader.u8().unwrap(), 0x01);
/// assert_eq!(reader.u16().unwrap(), 0x0203);
/// assert_eq!(reader.size(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct Reader<'a> {
    uint8: &'a [u8],
    x: usize,
}

impl<'a> Reader<'a> {
    /// Creates a new reader positioned at the start of `uint8`.
    pub fn new(uint8: &'a [u8]) -> Self {
        Self { uint8, x: 0 }
    }

    /// Current cursor position.
    #[inline]
    pub fn position(&self) -> usize {
        self.x
    }

    /// Returns the number of remaining bytes.
    #[inline]
    pub fn size(&self) -> usize {
        self.uint8.len() - self.x
    }

    pub fn is_empty(&self) -> bool {
        self.size() == 0
    }

    #[inline]
    fn assert_size(&self, size: usize) -> Result<(), BufferError> {
        if size > self.size() {
            return Err(BufferError::EndOfBuffer {
                size,
                position: self.x,
            });
        }
        Ok(())
    }

    /// Advances the cursor by `length` bytes.
    pub fn skip(&mut self, length: usize) -> Result<(), BufferError> {
        self.assert_size(length)?;
        self.x += length;
        Ok(())
    }

    /// Returns a subslice of the given size and advances the cursor.
    pub fn buf(&mut self, size: usize) -> Result<&'a [u8], BufferError> {
        self.assert_size(size)?;
        let x = self.x;
        self.x += size;
        Ok(&self.uint8[x..self.x])
    }

    /// Returns every remaining byte and moves the cursor to the end.
    pub fn rest(&mut self) -> &'a [u8] {
        let x = self.x;
        self.x = self.uint8.len();
        &self.uint8[x..]
    }

    #[inline]
    fn array<const N: usize>(&mut self) -> Result<[u8; N], BufferError> {
        let mut out = [0u8; N];
        out.copy_from_slice(self.buf(N)?);
        Ok(out)
    }

    /// Reads an unsigned 8-bit integer.
    #[inline]
    pub fn u8(&mut self) -> Result<u8, BufferError> {
        self.assert_size(1)?;
        let val = self.uint8[self.x];
        self.x += 1;
        Ok(val)
    }

    /// Reads an unsigned 16-bit integer (big-endian).
    #[inline]
    pub fn u16(&mut self) -> Result<u16, BufferError> {
        Ok(u16::from_be_bytes(self.array()?))
    }

    /// Reads a signed 16-bit integer (big-endian).
    #[inline]
    pub fn i16(&mut self) -> Result<i16, BufferError> {
        Ok(i16::from_be_bytes(self.array()?))
    }

    /// Reads an unsigned 32-bit integer (big-endian).
    #[inline]
    pub fn u32(&mut self) -> Result<u32, BufferError> {
        Ok(u32::from_be_bytes(self.array()?))
    }

    /// Reads a signed 32-bit integer (big-endian).
    #[inline]
    pub fn i32(&mut self) -> Result<i32, BufferError> {
        Ok(i32::from_be_bytes(self.array()?))
    }

    /// Reads a 32-bit length or count stored as a signed integer.
    ///
    /// Negative values fail with [`BufferError::NegativeLength`] reported at
    /// the position of the field itself.
    pub fn i32_len(&mut self) -> Result<usize, BufferError> {
        let position = self.x;
        let length = self.i32()?;
        usize::try_from(length).map_err(|_| BufferError::NegativeLength {
            length: length.into(),
            position,
        })
    }

    /// Reads a 64-bit floating point number (big-endian).
    #[inline]
    pub fn f64(&mut self) -> Result<f64, BufferError> {
        Ok(f64::from_be_bytes(self.array()?))
    }

    /// Reads a UTF-8 string of the given size.
    ///
    /// Invalid sequences are replaced with U+FFFD rather than failing.
    pub fn utf8(&mut self, size: usize) -> Result<String, BufferError> {
        let bytes = self.buf(size)?;
        Ok(String::from_utf8_lossy(bytes).into_owned())
    }

    /// Reads a string prefixed with its 16-bit byte length.
    pub fn utf8_prefixed(&mut self) -> Result<String, BufferError> {
        let size = self.u16()? as usize;
        self.utf8(size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_u8() {
        let data = [0x01, 0x02, 0x03];
        let mut reader = Reader::new(&data);
        assert_eq!(reader.u8().unwrap(), 0x01);
        assert_eq!(reader.u8().unwrap(), 0x02);
        assert_eq!(reader.u8().unwrap(), 0x03);
        assert!(reader.is_empty());
    }

    #[test]
    fn test_u16_u32() {
        let data = [0x01, 0x02, 0x03, 0x04, 0x05, 0x06];
        let mut reader = Reader::new(&data);
        assert_eq!(reader.u16().unwrap(), 0x0102);
        assert_eq!(reader.u32().unwrap(), 0x03040506);
    }

    #[test]
    fn test_end_of_buffer_reports_size_and_position() {
        let data = [0x01, 0x02, 0x03];
        let mut reader = Reader::new(&data);
        reader.u16().unwrap();
        assert_eq!(
            reader.u32(),
            Err(BufferError::EndOfBuffer {
                size: 4,
                position: 2
            })
        );
        // A failed read never consumes.
        assert_eq!(reader.position(), 2);
    }

    #[test]
    fn test_skip_past_end() {
        let data = [0x01, 0x02];
        let mut reader = Reader::new(&data);
        assert!(reader.skip(3).is_err());
        reader.skip(2).unwrap();
        assert_eq!(reader.size(), 0);
    }

    #[test]
    fn test_negative_lengths() {
        let data = [0xff, 0xff, 0xff, 0xfe, 0x00];
        let mut reader = Reader::new(&data);
        assert_eq!(
            reader.i32_len(),
            Err(BufferError::NegativeLength {
                length: -2,
                position: 0
            })
        );
        let mut reader = Reader::new(&data[1..]);
        assert!(matches!(
            reader.i32_len(),
            Err(BufferError::NegativeLength { length: -512, .. })
        ));
    }

    #[test]
    fn test_rest() {
        let data = [0x00, 0x01, 0x02, 0x03];
        let mut reader = Reader::new(&data);
        reader.u8().unwrap();
        assert_eq!(reader.rest(), &[0x01, 0x02, 0x03]);
        assert_eq!(reader.rest(), &[] as &[u8]);
    }

    #[test]
    fn test_utf8_prefixed() {
        let data = b"\x00\x05hello\x00\x00";
        let mut reader = Reader::new(data);
        assert_eq!(reader.utf8_prefixed().unwrap(), "hello");
        assert_eq!(reader.utf8_prefixed().unwrap(), "");
    }

    #[test]
    fn test_utf8_lossy() {
        let data = [0x00, 0x02, 0xc3, 0x28];
        let mut reader = Reader::new(&data);
        assert_eq!(reader.utf8_prefixed().unwrap(), "\u{fffd}(");
    }
}
