// ─── Error ──────────────────────────────────────────────────────────────────
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GhostError {
    #[error("not a ghost file: expected magic {expected:#010x}, found {found:#010x}")]
    InvalidFormat { expected: u32, found: u32 },
    #[error("bit range {offset_bits}+{width_bits} runs past the end of the stream ({len_bytes} bytes)")]
    OutOfRange {
        offset_bits: u64,
        width_bits: u32,
        len_bytes: u64,
    },
    #[error("bit width {0} exceeds the 64-bit value limit")]
    TooManyBits(u32),
    #[error("value {value} does not fit in {width_bits} bits")]
    ValueTooWide { value: u64, width_bits: u32 },
    #[error("stream too small to contain a CRC32 trailer")]
    TooSmall,
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
