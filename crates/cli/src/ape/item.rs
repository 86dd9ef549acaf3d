// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use memchr::memchr;

/// Item is read-only.
const FLAG_READ_ONLY: u32 = 1;

/// Kind of value an item holds (item flag bits 1..2).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemKind {
    /// UTF-8 text, possibly several values separated by NUL.
    Text,
    /// Opaque bytes (cover art and the like).
    Binary,
    /// UTF-8 link to external data.
    Locator,
    /// Reserved encoding.
    Reserved,
}

impl ItemKind {
    /// Decode from item flags.
    pub fn from_flags(flags: u32) -> Self {
        match (flags >> 1) & 0b11 {
            0 => ItemKind::Text,
            1 => ItemKind::Binary,
            2 => ItemKind::Locator,
            _ => ItemKind::Reserved,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ItemKind::Text => "text",
            ItemKind::Binary => "binary",
            ItemKind::Locator => "locator",
            ItemKind::Reserved => "reserved",
        }
    }
}

/// One tag item, borrowed from the scan buffer.
///
/// Only valid inside the scan callback; copy it out with
/// [`to_owned_item`](Self::to_owned_item) to keep it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagItem<'a> {
    /// Item flags.
    pub flags: u32,
    /// Key bytes, without the terminating NUL.
    pub key: &'a [u8],
    /// Raw value bytes.
    pub value: &'a [u8],
}

impl<'a> TagItem<'a> {
    /// Declared value size.
    pub fn size(&self) -> u32 {
        self.value.len() as u32
    }

    /// Key as text, if it is valid UTF-8.
    pub fn key_str(&self) -> Option<&'a str> {
        std::str::from_utf8(self.key).ok()
    }

    pub fn kind(&self) -> ItemKind {
        ItemKind::from_flags(self.flags)
    }

    pub fn read_only(&self) -> bool {
        self.flags & FLAG_READ_ONLY != 0
    }

    /// Split the value on NUL separators.
    ///
    /// Text items may hold a list (`"Rock\0Pop"`). Always yields at least
    /// one slice; no charset conversion is done.
    pub fn values(&self) -> Values<'a> {
        Values {
            rest: Some(self.value),
        }
    }

    pub fn to_owned_item(&self) -> OwnedTagItem {
        OwnedTagItem {
            flags: self.flags,
            key: self.key.to_vec(),
            value: self.value.to_vec(),
        }
    }
}

/// Iterator over NUL-separated values.
#[derive(Debug, Clone)]
pub struct Values<'a> {
    rest: Option<&'a [u8]>,
}

impl<'a> Iterator for Values<'a> {
    type Item = &'a [u8];

    fn next(&mut self) -> Option<&'a [u8]> {
        let rest = self.rest?;
        match memchr(0, rest) {
            Some(nul) => {
                self.rest = Some(&rest[nul + 1..]);
                Some(&rest[..nul])
            }
            None => {
                self.rest = None;
                Some(rest)
            }
        }
    }
}

/// A tag item that outlives the scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OwnedTagItem {
    pub flags: u32,
    pub key: Vec<u8>,
    pub value: Vec<u8>,
}

impl OwnedTagItem {
    /// Borrow as a [`TagItem`].
    pub fn as_item(&self) -> TagItem<'_> {
        TagItem {
            flags: self.flags,
            key: &self.key,
            value: &self.value,
        }
    }
}

#[cfg(test)]
#[path = "item_tests.rs"]
mod tests;
