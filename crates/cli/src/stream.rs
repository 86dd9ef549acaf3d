// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Seekable byte sources for the tag scanner.
//!
//! [`InputStream`] is the contract the scanner consumes. Files and in-memory
//! buffers are adapted with [`SeekableStream`]; other sources (network,
//! archives) implement the trait themselves.

use std::fs::File;
use std::io::{self, Read, Seek, SeekFrom};
use std::path::Path;

/// A positioned byte source.
///
/// Exclusive access is expressed through `&mut self`; share a stream
/// between callers by wrapping it in a `Mutex`.
pub trait InputStream {
    /// Whether [`size`](Self::size) is meaningful.
    fn known_size(&self) -> bool;

    /// Whether [`seek`](Self::seek) is supported.
    fn is_seekable(&self) -> bool;

    /// Total size in bytes.
    fn size(&self) -> u64;

    /// Current absolute read position.
    fn position(&self) -> u64;

    /// Move to an absolute offset.
    fn seek(&mut self, offset: u64) -> io::Result<()>;

    /// Fill `buf` completely or fail.
    fn read_full(&mut self, buf: &mut [u8]) -> io::Result<()>;
}

impl<S: InputStream + ?Sized> InputStream for &mut S {
    fn known_size(&self) -> bool {
        (**self).known_size()
    }

    fn is_seekable(&self) -> bool {
        (**self).is_seekable()
    }

    fn size(&self) -> u64 {
        (**self).size()
    }

    fn position(&self) -> u64 {
        (**self).position()
    }

    fn seek(&mut self, offset: u64) -> io::Result<()> {
        (**self).seek(offset)
    }

    fn read_full(&mut self, buf: &mut [u8]) -> io::Result<()> {
        (**self).read_full(buf)
    }
}

/// Adapter from any `Read + Seek` to [`InputStream`].
///
/// The size is measured once at construction and the position is tracked
/// locally, so `position()` never touches the underlying reader.
#[derive(Debug)]
pub struct SeekableStream<R> {
    inner: R,
    size: u64,
    position: u64,
}

impl SeekableStream<File> {
    /// Open a file for scanning.
    pub fn open(path: &Path) -> io::Result<Self> {
        Self::new(File::open(path)?)
    }
}

impl<R: Read + Seek> SeekableStream<R> {
    /// Wrap a reader, measuring its size and keeping its current position.
    pub fn new(mut inner: R) -> io::Result<Self> {
        let position = inner.stream_position()?;
        let size = inner.seek(SeekFrom::End(0))?;
        inner.seek(SeekFrom::Start(position))?;
        Ok(Self {
            inner,
            size,
            position,
        })
    }

    /// Unwrap the reader.
    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<R: Read + Seek> InputStream for SeekableStream<R> {
    fn known_size(&self) -> bool {
        true
    }

    fn is_seekable(&self) -> bool {
        true
    }

    fn size(&self) -> u64 {
        self.size
    }

    fn position(&self) -> u64 {
        self.position
    }

    fn seek(&mut self, offset: u64) -> io::Result<()> {
        self.position = self.inner.seek(SeekFrom::Start(offset))?;
        Ok(())
    }

    fn read_full(&mut self, buf: &mut [u8]) -> io::Result<()> {
        let result = self.inner.read_exact(buf);
        // read_exact leaves the cursor unspecified on failure
        self.position = self.inner.stream_position()?;
        result
    }
}

/// Restores a stream's position when dropped.
pub struct PositionGuard<'a, S: InputStream + ?Sized> {
    stream: &'a mut S,
    saved: u64,
}

impl<'a, S: InputStream + ?Sized> PositionGuard<'a, S> {
    /// Capture the current position of `stream`.
    pub fn new(stream: &'a mut S) -> Self {
        let saved = stream.position();
        Self { stream, saved }
    }

    /// The position that will be restored.
    pub fn saved(&self) -> u64 {
        self.saved
    }

    /// Access the stream while the guard is held.
    pub fn stream(&mut self) -> &mut S {
        self.stream
    }
}

impl<S: InputStream + ?Sized> Drop for PositionGuard<'_, S> {
    fn drop(&mut self) {
        // Restore errors have nowhere to go
        let _ = self.stream.seek(self.saved);
    }
}

#[cfg(test)]
#[path = "stream_tests.rs"]
mod tests;
