//! Bit-precise editing of Mario Kart Wii ghost (`.rkg`) files.
//!
//! A ghost file opens with the `"RKGD"` magic, packs its finish time into
//! three sub-byte fields right after it, and ends in a big-endian CRC-32
//! trailer over everything before it. This crate reads and writes arbitrary
//! bit spans of a seekable stream ([bit_read], [bit_write]), maintains the
//! trailer ([checksum]), and combines both into an atomic patch of the
//! finish time on a copy of the file ([ghost_record]).
//!
//! ```
//! use rkg_ghost_module::bit_read::BitRead;
//! use std::io::Cursor;
//!
//! let mut cur = Cursor::new(vec![0x52, 0x4B, 0x47, 0x44]);
//! assert_eq!(cur.read_u32_at(0).unwrap(), 0x524B4744);
//! ```

pub mod bit_read;
pub mod bit_write;
pub mod checksum;
pub mod error;
pub mod ghost_record;
pub mod types;
