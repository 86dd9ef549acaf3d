// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use super::scan::ScanError;
use super::{APE_MAGIC, APE_VERSION, FOOTER_SIZE, MAX_TAG_SIZE, MIN_ITEM_SIZE};

/// Tag contains a header record in front of the items.
const FLAG_HAS_HEADER: u32 = 1 << 31;

/// Record is a header, not a footer.
const FLAG_IS_HEADER: u32 = 1 << 29;

/// Decoded tag footer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Footer {
    /// Tag version (always 2000 once parsed).
    pub version: u32,
    /// Bytes of items plus this footer.
    pub length: u32,
    /// Declared number of items.
    pub count: u32,
    /// Global tag flags.
    pub flags: u32,
}

impl Footer {
    /// Decode and validate the magic and version of a footer record.
    pub fn parse(bytes: &[u8; FOOTER_SIZE]) -> Result<Self, ScanError> {
        if &bytes[..8] != APE_MAGIC {
            return Err(ScanError::BadMagic);
        }

        let version = le_u32(bytes, 8);
        if version != APE_VERSION {
            return Err(ScanError::BadVersion(version));
        }

        Ok(Self {
            version,
            length: le_u32(bytes, 12),
            count: le_u32(bytes, 16),
            flags: le_u32(bytes, 20),
        })
    }

    /// Bounds-checked tag length.
    ///
    /// Must leave room for at least one item and stay under
    /// [`MAX_TAG_SIZE`](super::MAX_TAG_SIZE).
    pub fn tag_length(&self) -> Result<usize, ScanError> {
        let length = self.length as usize;
        if length <= FOOTER_SIZE + MIN_ITEM_SIZE || self.length > MAX_TAG_SIZE {
            return Err(ScanError::LengthOutOfRange(self.length));
        }
        Ok(length)
    }

    /// Whether the tag also carries a header record.
    pub fn has_header(&self) -> bool {
        self.flags & FLAG_HAS_HEADER != 0
    }

    /// Whether this record is the header copy rather than the footer.
    pub fn is_header(&self) -> bool {
        self.flags & FLAG_IS_HEADER != 0
    }
}

/// Read a little-endian u32 at `at`.
#[inline]
pub(super) fn le_u32(bytes: &[u8], at: usize) -> u32 {
    u32::from_le_bytes([bytes[at], bytes[at + 1], bytes[at + 2], bytes[at + 3]])
}

#[cfg(test)]
#[path = "footer_tests.rs"]
mod tests;
