/*
seed.rs

Copyright 2025 Hervé Quatremain

This file is part of Feebas Locator.

Feebas Locator is free software: you can redistribute it and/or modify it under
the terms of the GNU General Public License as published by the Free Software
Foundation, either version 3 of the License, or (at your option) any later
version.

Feebas Locator is distributed in the hope that it will be useful, but WITHOUT
ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS
FOR A PARTICULAR PURPOSE. See the GNU General Public License for more details.

You should have received a copy of the GNU General Public License along with
Feebas Locator. If not, see <https://www.gnu.org/licenses/>.

SPDX-License-Identifier: GPL-3.0-or-later
*/

//! Read, write, parse, and format the Feebas seed.
//!
//! The seed is a little-endian integer stored at a fixed offset in the save region.
//! Users see and edit it as an hexadecimal string.
//! Parsing that string never fails: anything that is not an hexadecimal digit is ignored,
//! and an empty string is seed `0`, which is a valid seed.

use log::debug;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt;

/// Width of the seed in the save file.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum SeedWidth {
    /// 16-bit seed (Generation 3).
    Bits16,

    /// 32-bit seed (Generation 4).
    Bits32,
}

impl SeedWidth {
    /// Number of bytes used by the seed in the save region.
    pub fn bytes(self) -> usize {
        match self {
            SeedWidth::Bits16 => 2,
            SeedWidth::Bits32 => 4,
        }
    }

    /// Largest seed value.
    pub fn max_value(self) -> u32 {
        match self {
            SeedWidth::Bits16 => u32::from(u16::MAX),
            SeedWidth::Bits32 => u32::MAX,
        }
    }

    /// Maximum number of hexadecimal digits in the seed text.
    pub fn max_text_len(self) -> usize {
        self.bytes() * 2
    }

    /// Drop the bits that do not fit in the seed.
    pub fn mask(self, value: u32) -> u32 {
        value & self.max_value()
    }
}

/// Errors when accessing the seed in the save region.
#[derive(Debug, PartialEq, Eq)]
pub enum SeedError {
    /// The save region is too short to contain the seed.
    OutOfBounds {
        offset: usize,
        width: SeedWidth,
        len: usize,
    },
}

impl fmt::Display for SeedError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SeedError::OutOfBounds { offset, width, len } => write!(
                f,
                "The seed at offset {offset:#06X} ({} bytes) is outside the {len}-byte save region",
                width.bytes()
            ),
        }
    }
}

impl Error for SeedError {}

/// Return the byte range of the seed, after verifying that it fits in the buffer.
fn seed_range(
    len: usize,
    offset: usize,
    width: SeedWidth,
) -> Result<std::ops::Range<usize>, SeedError> {
    match offset.checked_add(width.bytes()) {
        Some(end) if end <= len => Ok(offset..end),
        _ => Err(SeedError::OutOfBounds { offset, width, len }),
    }
}

/// Read the seed from the save region.
///
/// # Errors
///
/// The function returns an error when the buffer is too short.
pub fn read_seed(buffer: &[u8], offset: usize, width: SeedWidth) -> Result<u32, SeedError> {
    let range: std::ops::Range<usize> = seed_range(buffer.len(), offset, width)?;
    let seed: u32 = buffer[range]
        .iter()
        .rev()
        .fold(0, |acc, byte| (acc << 8) | u32::from(*byte));
    debug!("Read seed {seed:#X} at offset {offset:#X}");
    Ok(seed)
}

/// Write the seed to the save region.
///
/// The bits of `value` that do not fit in `width` are dropped.
/// The buffer is verified before any byte is written, so either the whole seed is written or
/// the buffer is left untouched.
///
/// # Errors
///
/// The function returns an error when the buffer is too short.
pub fn write_seed(
    buffer: &mut [u8],
    offset: usize,
    width: SeedWidth,
    value: u32,
) -> Result<(), SeedError> {
    let range: std::ops::Range<usize> = seed_range(buffer.len(), offset, width)?;
    let bytes: [u8; 4] = width.mask(value).to_le_bytes();
    buffer[range].copy_from_slice(&bytes[..width.bytes()]);
    debug!("Wrote seed {:#X} at offset {offset:#X}", width.mask(value));
    Ok(())
}

/// Convert the seed text into a seed value.
///
/// Only the hexadecimal digits are kept, and only the first [`SeedWidth::max_text_len`] of
/// them, like the edit box which does not accept more characters.
/// An empty or invalid text gives seed `0`.
pub fn parse_seed_text(text: &str, width: SeedWidth) -> u32 {
    text.chars()
        .filter_map(|c| c.to_digit(16))
        .take(width.max_text_len())
        .fold(0, |acc, digit| (acc << 4) | digit)
}

/// Format the seed as upper case hexadecimal digits, without padding.
pub fn format_seed(seed: u32) -> String {
    format!("{seed:X}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_is_little_endian() {
        let buffer: [u8; 6] = [0xAA, 0x34, 0x12, 0x78, 0x56, 0xBB];
        assert_eq!(read_seed(&buffer, 1, SeedWidth::Bits16), Ok(0x1234));
        assert_eq!(read_seed(&buffer, 1, SeedWidth::Bits32), Ok(0x5678_1234));
    }

    #[test]
    fn write_only_touches_the_seed_bytes() {
        let mut buffer: [u8; 6] = [0xFF; 6];
        write_seed(&mut buffer, 2, SeedWidth::Bits16, 0xABCD_1234).unwrap();
        assert_eq!(buffer, [0xFF, 0xFF, 0x34, 0x12, 0xFF, 0xFF]);

        write_seed(&mut buffer, 1, SeedWidth::Bits32, 0x0102_0304).unwrap();
        assert_eq!(buffer, [0xFF, 0x04, 0x03, 0x02, 0x01, 0xFF]);
    }

    #[test]
    fn short_buffer_is_left_untouched() {
        let mut buffer: [u8; 3] = [1, 2, 3];
        let err: SeedError = write_seed(&mut buffer, 1, SeedWidth::Bits32, 0).unwrap_err();
        assert_eq!(
            err,
            SeedError::OutOfBounds {
                offset: 1,
                width: SeedWidth::Bits32,
                len: 3
            }
        );
        assert_eq!(buffer, [1, 2, 3]);
        assert!(read_seed(&buffer, 2, SeedWidth::Bits16).is_err());
        assert!(read_seed(&buffer, usize::MAX, SeedWidth::Bits16).is_err());
    }

    #[test]
    fn parse_ignores_garbage() {
        assert_eq!(parse_seed_text("", SeedWidth::Bits16), 0);
        assert_eq!(parse_seed_text("zz", SeedWidth::Bits16), 0);
        assert_eq!(parse_seed_text("12zz3", SeedWidth::Bits16), 0x123);
        assert_eq!(parse_seed_text(" beef ", SeedWidth::Bits16), 0xBEEF);
        assert_eq!(parse_seed_text("DEADBEEF", SeedWidth::Bits32), 0xDEAD_BEEF);
    }

    #[test]
    fn parse_stops_at_the_text_length() {
        assert_eq!(parse_seed_text("123456", SeedWidth::Bits16), 0x1234);
        assert_eq!(parse_seed_text("123456789", SeedWidth::Bits32), 0x1234_5678);
    }

    #[test]
    fn format_is_upper_case_without_padding() {
        assert_eq!(format_seed(0), "0");
        assert_eq!(format_seed(0x00AB), "AB");
        assert_eq!(format_seed(0xDEAD_BEEF), "DEADBEEF");
        assert_eq!(parse_seed_text(&format_seed(0xC0DE), SeedWidth::Bits16), 0xC0DE);
    }

    #[test]
    fn error_message_names_the_offset() {
        let err: SeedError = SeedError::OutOfBounds {
            offset: 0x2DD6,
            width: SeedWidth::Bits16,
            len: 16,
        };
        assert_eq!(
            err.to_string(),
            "The seed at offset 0x2DD6 (2 bytes) is outside the 16-byte save region"
        );
    }
}
