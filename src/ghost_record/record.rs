use crate::bit_read::BitRead;
use crate::checksum;
use crate::error::GhostError;
use crate::types::{FinishTime, GHOST_MAGIC, MILLIS_SPAN, MINUTES_SPAN, SECONDS_SPAN};
use std::fs::File;
use std::io::{Read, Seek};
use std::path::Path;

// ─── Reader ─────────────────────────────────────────────────────────────────
/// Read-only view over a ghost stream. The magic is checked on construction;
/// nothing else is decoded until asked for.
#[derive(Debug)]
pub struct GhostRecord<R> {
    stream: R,
}

impl<R: Read + Seek> GhostRecord<R> {
    /// Wrap a stream, verifying the leading `"RKGD"` magic.
    pub fn open(mut stream: R) -> Result<Self, GhostError> {
        let found = stream.read_u32_at(0)?;
        if found != GHOST_MAGIC {
            return Err(GhostError::InvalidFormat {
                expected: GHOST_MAGIC,
                found,
            });
        }
        Ok(Self { stream })
    }

    /// Decode the recorded finish time.
    pub fn finish_time(&mut self) -> Result<FinishTime, GhostError> {
        let minutes = self.stream.read_span(MINUTES_SPAN)? as u16;
        let seconds = self.stream.read_span(SECONDS_SPAN)? as u16;
        let millis = self.stream.read_span(MILLIS_SPAN)? as u16;
        Ok(FinishTime {
            minutes,
            seconds,
            millis,
        })
    }

    /// The CRC-32 value stored in the trailer.
    pub fn stored_crc(&mut self) -> Result<u32, GhostError> {
        checksum::read_trailer(&mut self.stream)
    }

    /// Recompute the CRC over the content bytes and compare with the trailer.
    pub fn crc_matches(&mut self) -> Result<bool, GhostError> {
        checksum::verify(&mut self.stream)
    }

    pub fn into_inner(self) -> R {
        self.stream
    }
}

impl GhostRecord<File> {
    /// Open a ghost file from disk, read-only.
    pub fn open_path(path: impl AsRef<Path>) -> Result<Self, GhostError> {
        Self::open(File::open(path)?)
    }
}
