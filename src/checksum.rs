use crate::error::GhostError;
use crate::types::CRC_TRAILER_SIZE;
use once_cell::sync::Lazy;
use std::io::{Read, Seek, SeekFrom, Write};

// ─── CRC-32 ─────────────────────────────────────────────────────────────────
//
// IEEE 802.3 / zlib variant: reflected polynomial 0xEDB88320, init
// 0xFFFFFFFF, final xor 0xFFFFFFFF, table-driven one byte at a time.

const CRC32_POLY: u32 = 0xEDB8_8320;
const CHUNK_SIZE: usize = 4096;

/// Process-wide table, built on first use, immutable afterwards.
static CRC_TABLE: Lazy<[u32; 256]> = Lazy::new(|| {
    let mut table = [0u32; 256];
    for (n, entry) in table.iter_mut().enumerate() {
        let mut c = n as u32;
        for _ in 0..8 {
            c = if c & 1 != 0 { CRC32_POLY ^ (c >> 1) } else { c >> 1 };
        }
        *entry = c;
    }
    table
});

/// Fold `bytes` into a running CRC state (pre-inversion form).
#[inline]
fn update(mut crc: u32, bytes: &[u8]) -> u32 {
    for &b in bytes {
        crc = (crc >> 8) ^ CRC_TABLE[((crc ^ b as u32) & 0xFF) as usize];
    }
    crc
}

/// CRC-32 of a whole byte slice.
pub fn crc32(bytes: &[u8]) -> u32 {
    update(0xFFFF_FFFF, bytes) ^ 0xFFFF_FFFF
}

/// CRC-32 of a ghost stream, excluding the 4-byte trailer slot.
///
/// Streams in fixed-size chunks so a ghost never has to be resident in
/// memory. Fails with [GhostError::TooSmall] when the stream cannot contain
/// a trailer at all.
pub fn compute<R: Read + Seek>(stream: &mut R) -> Result<u32, GhostError> {
    let len = stream.seek(SeekFrom::End(0))?;
    if len < CRC_TRAILER_SIZE {
        return Err(GhostError::TooSmall);
    }

    stream.seek(SeekFrom::Start(0))?;
    let mut remaining = len - CRC_TRAILER_SIZE;
    let mut buf = [0u8; CHUNK_SIZE];
    let mut crc = 0xFFFF_FFFFu32;

    while remaining > 0 {
        let want = remaining.min(CHUNK_SIZE as u64) as usize;
        stream.read_exact(&mut buf[..want])?;
        crc = update(crc, &buf[..want]);
        remaining -= want as u64;
    }

    Ok(crc ^ 0xFFFF_FFFF)
}

/// Store `crc` big-endian in the last 4 bytes of the stream.
pub fn write_trailer<W: Write + Seek>(stream: &mut W, crc: u32) -> Result<(), GhostError> {
    let len = stream.seek(SeekFrom::End(0))?;
    if len < CRC_TRAILER_SIZE {
        return Err(GhostError::TooSmall);
    }
    stream.seek(SeekFrom::Start(len - CRC_TRAILER_SIZE))?;
    stream.write_all(&crc.to_be_bytes())?;
    Ok(())
}

/// Read the stored trailer value (big-endian).
pub fn read_trailer<R: Read + Seek>(stream: &mut R) -> Result<u32, GhostError> {
    let len = stream.seek(SeekFrom::End(0))?;
    if len < CRC_TRAILER_SIZE {
        return Err(GhostError::TooSmall);
    }
    let mut raw = [0u8; 4];
    stream.seek(SeekFrom::Start(len - CRC_TRAILER_SIZE))?;
    stream.read_exact(&mut raw)?;
    Ok(u32::from_be_bytes(raw))
}

/// Recompute the CRC and compare it against the stored trailer.
pub fn verify<R: Read + Seek>(stream: &mut R) -> Result<bool, GhostError> {
    let computed = compute(stream)?;
    let stored = read_trailer(stream)?;
    Ok(computed == stored)
}
