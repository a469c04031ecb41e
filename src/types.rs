use std::fmt;

// ─── Magic ──────────────────────────────────────────────────────────────────
/// `"RKGD"`, big-endian. Every ghost file opens with it.
pub const GHOST_MAGIC: u32 = 0x524B_4744;

/// Trailing CRC-32 slot, big-endian, excluded from its own computation.
pub const CRC_TRAILER_SIZE: u64 = 4;

// ─── Binary Layout ──────────────────────────────────────────────────────────
//
//  ┌──────────────────────────────────────────────┐
//  │ Header (4 bytes)                             │
//  │   magic: "RKGD" = 0x524B4744 (BE)            │
//  ├──────────────────────────────────────────────┤
//  │ Finish time (bit-packed, MSB-first)          │
//  │   bit 32..39   minutes       (7 bits)        │
//  │   bit 39..46   seconds       (7 bits)        │
//  │   bit 46..56   milliseconds  (10 bits)       │
//  ├──────────────────────────────────────────────┤
//  │ Payload (opaque: inputs, Mii data, …)        │
//  ├──────────────────────────────────────────────┤
//  │ Trailer (4 bytes)                            │
//  │   crc32: u32 (BE) over all preceding bytes   │
//  └──────────────────────────────────────────────┘

/// First finish-time bit, directly after the magic.
pub const FINISH_TIME_BASE_BITS: u64 = 32;

// ─── BitSpan ────────────────────────────────────────────────────────────────

/// A sub-byte-aligned region of the stream: absolute bit offset plus width.
/// Bit 0 is the MSB of byte 0; within a span the first bit is the most
/// significant of the value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BitSpan {
    pub offset_bits: u64,
    pub width_bits: u32,
}

impl BitSpan {
    pub const fn new(offset_bits: u64, width_bits: u32) -> Self {
        Self {
            offset_bits,
            width_bits,
        }
    }

    /// First bit past the span.
    pub const fn end_bits(&self) -> u64 {
        self.offset_bits + self.width_bits as u64
    }

    /// Largest value the span can hold.
    pub const fn max_value(&self) -> u64 {
        if self.width_bits >= 64 {
            u64::MAX
        } else {
            (1u64 << self.width_bits) - 1
        }
    }
}

pub const MINUTES_SPAN: BitSpan = BitSpan::new(FINISH_TIME_BASE_BITS, 7);
pub const SECONDS_SPAN: BitSpan = BitSpan::new(FINISH_TIME_BASE_BITS + 7, 7);
pub const MILLIS_SPAN: BitSpan = BitSpan::new(FINISH_TIME_BASE_BITS + 14, 10);

// ─── FinishTime ─────────────────────────────────────────────────────────────

/// Decoded finish time of a ghost.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FinishTime {
    pub minutes: u16,
    pub seconds: u16,
    pub millis: u16,
}

impl FinishTime {
    pub const fn new(minutes: u16, seconds: u16, millis: u16) -> Self {
        Self {
            minutes,
            seconds,
            millis,
        }
    }
}

impl fmt::Display for FinishTime {
    /// Renders as `MM:SS.mmm`, e.g. `02:15.500`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}.{:03}",
            self.minutes, self.seconds, self.millis
        )
    }
}
