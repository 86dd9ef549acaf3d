// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Footer validation and item walking.

use std::io;
use std::path::Path;
use std::sync::{Mutex, PoisonError};

use super::footer::{Footer, le_u32};
use super::item::{OwnedTagItem, TagItem};
use super::{FOOTER_SIZE, MIN_ITEM_SIZE};
use crate::stream::{InputStream, PositionGuard, SeekableStream};

/// Why a stream has no usable tag.
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    #[error("stream size is unknown")]
    Unsized,

    #[error("stream is not seekable")]
    Unseekable,

    #[error("stream too short for a tag footer ({size} bytes)")]
    TooShort { size: u64 },

    #[error("io error: {0}")]
    Io(#[from] io::Error),

    #[error("no APETAGEX footer")]
    BadMagic,

    #[error("unsupported tag version {0}")]
    BadVersion(u32),

    #[error("tag length {0} out of range")]
    LengthOutOfRange(u32),

    #[error("tag length {length} exceeds stream size {size}")]
    BlockBeforeStart { length: u32, size: u64 },
}

/// How the item walk ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalkEnd {
    /// Declared count reached, or too few bytes left for another item.
    Exhausted,
    /// An item's value ran past the end of the block.
    Truncated,
    /// The callback asked to stop.
    Stopped,
}

/// Result of a scan that found a tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanSummary {
    /// The validated footer.
    pub footer: Footer,
    /// Items handed to the callback.
    pub visited: u32,
    pub end: WalkEnd,
}

/// Scan the tag at the end of `stream`, calling `callback` per item.
///
/// Returns `Ok` once a valid footer and block have been read, however the
/// walk ends. The stream position is restored before returning whenever
/// the stream was touched.
pub fn try_scan<S, F>(stream: &mut S, mut callback: F) -> Result<ScanSummary, ScanError>
where
    S: InputStream + ?Sized,
    F: FnMut(&TagItem<'_>) -> bool,
{
    if !stream.known_size() {
        return Err(ScanError::Unsized);
    }
    if !stream.is_seekable() {
        return Err(ScanError::Unseekable);
    }

    let size = stream.size();
    let mut guard = PositionGuard::new(stream);

    let footer = read_footer(guard.stream(), size)?;
    let block = read_block(guard.stream(), size, &footer)?;
    let (visited, end) = walk(&block, footer.count, &mut callback);

    Ok(ScanSummary {
        footer,
        visited,
        end,
    })
}

/// Like [`try_scan`], collapsed to "a tag exists".
pub fn scan<S, F>(stream: &mut S, callback: F) -> bool
where
    S: InputStream + ?Sized,
    F: FnMut(&TagItem<'_>) -> bool,
{
    try_scan(stream, callback).is_ok()
}

/// Scan a stream shared between threads.
///
/// The lock is held for the whole scan, so concurrent scans of one
/// handle run one after another.
pub fn scan_shared<S, F>(stream: &Mutex<S>, callback: F) -> bool
where
    S: InputStream,
    F: FnMut(&TagItem<'_>) -> bool,
{
    // Every scan restores the position, so a poisoned stream is still usable
    let mut locked = stream.lock().unwrap_or_else(PoisonError::into_inner);
    scan(&mut *locked, callback)
}

/// Open `path` and scan it. The file is closed before returning.
pub fn try_scan_path<F>(path: &Path, callback: F) -> Result<ScanSummary, ScanError>
where
    F: FnMut(&TagItem<'_>) -> bool,
{
    let mut stream = SeekableStream::open(path)?;
    try_scan(&mut stream, callback)
}

/// Like [`try_scan_path`], collapsed to "a tag exists".
pub fn scan_path<F>(path: &Path, callback: F) -> bool
where
    F: FnMut(&TagItem<'_>) -> bool,
{
    try_scan_path(path, callback).is_ok()
}

/// Collect every item of the tag in `path`.
///
/// `None` when the file has no usable tag.
pub fn read_items(path: &Path) -> Option<Vec<OwnedTagItem>> {
    let mut items = Vec::new();
    let found = scan_path(path, |item| {
        items.push(item.to_owned_item());
        true
    });
    found.then_some(items)
}

fn read_footer<S: InputStream + ?Sized>(stream: &mut S, size: u64) -> Result<Footer, ScanError> {
    let start = size
        .checked_sub(FOOTER_SIZE as u64)
        .ok_or(ScanError::TooShort { size })?;
    stream.seek(start)?;

    let mut raw = [0u8; FOOTER_SIZE];
    stream.read_full(&mut raw)?;
    Footer::parse(&raw)
}

/// Read the items preceding the footer.
fn read_block<S: InputStream + ?Sized>(
    stream: &mut S,
    size: u64,
    footer: &Footer,
) -> Result<Vec<u8>, ScanError> {
    let length = footer.tag_length()?;
    let start = size
        .checked_sub(length as u64)
        .ok_or(ScanError::BlockBeforeStart {
            length: footer.length,
            size,
        })?;
    stream.seek(start)?;

    let mut block = vec![0u8; length - FOOTER_SIZE];
    stream.read_full(&mut block)?;
    Ok(block)
}

/// Walk the items in `block`.
///
/// The key scan stops at a NUL or when no more than `size` bytes are left,
/// whichever comes first. An item whose value does not fit ends the walk.
fn walk<F>(block: &[u8], count: u32, callback: &mut F) -> (u32, WalkEnd)
where
    F: FnMut(&TagItem<'_>) -> bool,
{
    // cursor + remaining == block.len() throughout
    let mut cursor = 0usize;
    let mut remaining = block.len();
    let mut visited = 0u32;

    for _ in 0..count {
        if remaining <= MIN_ITEM_SIZE {
            break;
        }

        let size = le_u32(block, cursor) as usize;
        let flags = le_u32(block, cursor + 4);
        cursor += 8;
        remaining -= 8;

        let key_start = cursor;
        while remaining > size && block[cursor] != 0 {
            cursor += 1;
            remaining -= 1;
        }
        let key = &block[key_start..cursor];

        // No room left for the key terminator
        if remaining == 0 {
            return (visited, WalkEnd::Truncated);
        }
        cursor += 1;
        remaining -= 1;

        if remaining < size {
            return (visited, WalkEnd::Truncated);
        }

        let item = TagItem {
            flags,
            key,
            value: &block[cursor..cursor + size],
        };
        visited += 1;
        if !callback(&item) {
            return (visited, WalkEnd::Stopped);
        }

        cursor += size;
        remaining -= size;
    }

    (visited, WalkEnd::Exhausted)
}

#[cfg(test)]
#[path = "scan_tests.rs"]
mod tests;
