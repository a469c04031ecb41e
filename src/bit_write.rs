use crate::error::GhostError;
use crate::types::BitSpan;
use std::io::{Read, Seek, SeekFrom, Write};

// ─── BitWrite ───────────────────────────────────────────────────────────────

/// Big-endian bit insertion into any seekable byte stream.
///
/// A write is a read-modify-write of exactly the bytes covering the target
/// range. Every bit outside `[offset_bits, offset_bits + width_bits)` is
/// preserved bit-for-bit; this invariant is what keeps the rest of a ghost
/// payload byte-identical across an edit.
pub trait BitWrite: Read + Write + Seek {
    /// Write the low `width_bits` of `value` at absolute `offset_bits`,
    /// MSB first. `width_bits == 0` is a no-op, not an error.
    ///
    /// A value that does not fit in `width_bits` fails with
    /// [GhostError::ValueTooWide] and leaves the stream untouched.
    fn write_bits_at(
        &mut self,
        value: u64,
        offset_bits: u64,
        width_bits: u32,
    ) -> Result<(), GhostError> {
        if width_bits == 0 {
            return Ok(());
        }
        if width_bits > 64 {
            return Err(GhostError::TooManyBits(width_bits));
        }
        if width_bits < 64 && value >> width_bits != 0 {
            return Err(GhostError::ValueTooWide { value, width_bits });
        }

        let len_bytes = self.seek(SeekFrom::End(0))?;
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

        for i in 0..width_bits as usize {
            let bit = ((value >> (width_bits as usize - 1 - i)) & 1) as u8;
            let pos = bit_in_byte + i;
            let shift = 7 - pos % 8;
            buf[pos / 8] &= !(1 << shift);
            buf[pos / 8] |= bit << shift;
        }

        self.seek(SeekFrom::Start(byte_offset))?;
        self.write_all(&buf[..span_bytes])?;
        Ok(())
    }

    /// Write a value into a described field.
    fn write_span(&mut self, span: BitSpan, value: u64) -> Result<(), GhostError> {
        self.write_bits_at(value, span.offset_bits, span.width_bits)
    }
}

impl<T: Read + Write + Seek> BitWrite for T {}
