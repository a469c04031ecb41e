use crate::error::GhostError;
use crate::types::BitSpan;
use std::io::{Read, Seek, SeekFrom};

// ─── BitRead ────────────────────────────────────────────────────────────────

/// Big-endian bit extraction over any seekable byte stream.
///
/// Bit addressing is MSB-first: bit 0 is the high bit of byte 0, and the
/// first bit read becomes the most significant bit of the result. Reads touch
/// only the minimal byte span covering the requested range; the stream cursor
/// may move.
pub trait BitRead: Read + Seek {
    /// Total stream length in bytes. Leaves the cursor at the end.
    fn byte_len(&mut self) -> Result<u64, GhostError> {
        Ok(self.seek(SeekFrom::End(0))?)
    }

    /// Read `width_bits` bits starting at absolute `offset_bits`, returned
    /// right-aligned. `width_bits == 0` yields 0.
    fn read_bits_at(&mut self, offset_bits: u64, width_bits: u32) -> Result<u64, GhostError> {
        if width_bits == 0 {
            return Ok(0);
        }
        if width_bits > 64 {
            return Err(GhostError::TooManyBits(width_bits));
        }

        let len_bytes = self.byte_len()?;
        let total_bits = len_bytes.checked_mul(8).unwrap_or(u64::MAX);
        if offset_bits
            .checked_add(width_bits as u64)
            .map_or(true, |end| end > total_bits)
        {
            return Err(GhostError::OutOfRange {
                offset_bits,
                width_bits,
                len_bytes,
            });
        }

        let byte_offset = offset_bits / 8;
        let bit_in_byte = (offset_bits % 8) as usize;
        let span_bytes = (bit_in_byte + width_bits as usize + 7) / 8;

        // 64 bits shifted by up to 7 straddle at most 9 bytes.
        let mut buf = [0u8; 9];
        self.seek(SeekFrom::Start(byte_offset))?;
        self.read_exact(&mut buf[..span_bytes])?;

        let mut value = 0u64;
        for i in 0..width_bits as usize {
            let pos = bit_in_byte + i;
            let bit = (buf[pos / 8] >> (7 - pos % 8)) & 1;
            value = (value << 1) | bit as u64;
        }

        Ok(value)
    }

    /// Fixed-width big-endian u32 at a byte offset.
    fn read_u32_at(&mut self, byte_offset: u64) -> Result<u32, GhostError> {
        Ok(self.read_bits_at(byte_offset * 8, 32)? as u32)
    }

    /// Read the value of a described field.
    fn read_span(&mut self, span: BitSpan) -> Result<u64, GhostError> {
        self.read_bits_at(span.offset_bits, span.width_bits)
    }
}

impl<T: Read + Seek> BitRead for T {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_read_bits_at_aligned() {
        let mut cur = Cursor::new(vec![0b1101_0110, 0b0011_0000]);
        assert_eq!(cur.read_bits_at(0, 8).unwrap(), 0b1101_0110);
        assert_eq!(cur.read_bits_at(8, 4).unwrap(), 0b0011);
    }

    #[test]
    fn test_read_bits_at_straddles_bytes() {
        // low nibble of byte 0, then the high bit of byte 1
        let mut cur = Cursor::new(vec![0b0000_1011, 0b1000_0000]);
        assert_eq!(cur.read_bits_at(4, 5).unwrap(), 0b1011_1);
    }

    #[test]
    fn test_read_bits_at_zero_width() {
        let mut cur = Cursor::new(vec![0xFF]);
        assert_eq!(cur.read_bits_at(0, 0).unwrap(), 0);
    }

    #[test]
    fn test_read_bits_out_of_range() {
        let mut cur = Cursor::new(vec![0xFF]);
        assert!(matches!(
            cur.read_bits_at(0, 9).unwrap_err(),
            GhostError::OutOfRange { len_bytes: 1, .. }
        ));
        assert!(matches!(
            cur.read_bits_at(8, 1).unwrap_err(),
            GhostError::OutOfRange { .. }
        ));
    }

    #[test]
    fn test_read_bits_more_than_64() {
        let mut cur = Cursor::new(vec![0xFF; 16]);
        assert!(matches!(
            cur.read_bits_at(0, 65).unwrap_err(),
            GhostError::TooManyBits(65)
        ));
    }

    #[test]
    fn test_read_bits_offset_overflow() {
        let mut cur = Cursor::new(vec![0xFF]);
        assert!(matches!(
            cur.read_bits_at(u64::MAX, 8).unwrap_err(),
            GhostError::OutOfRange { .. }
        ));
    }

    #[test]
    fn test_read_u32_at() {
        let mut cur = Cursor::new(vec![0x52, 0x4B, 0x47, 0x44, 0xAA]);
        assert_eq!(cur.read_u32_at(0).unwrap(), 0x524B_4744);
        assert_eq!(cur.read_u32_at(1).unwrap(), 0x4B47_44AA);
    }

    #[test]
    fn test_read_span() {
        let mut cur = Cursor::new(vec![0xF0]);
        assert_eq!(cur.read_span(BitSpan::new(0, 4)).unwrap(), 0xF);
        assert_eq!(cur.read_span(BitSpan::new(4, 4)).unwrap(), 0x0);
    }
}
