//! Shared unit test utilities.
//!
//! Builders for APEv2 tag bytes and stream doubles used across the
//! scanner and CLI tests.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::fs;
use std::io::{self, Cursor};
use std::path::Path;

use crate::ape::{APE_MAGIC, APE_VERSION, FOOTER_SIZE};
use crate::stream::{InputStream, SeekableStream};

/// Builds an APEv2 tag (items followed by a footer).
///
/// Footer fields default to values consistent with the items and can be
/// overridden to produce corrupt tags.
#[derive(Debug, Clone)]
pub struct TagBuilder {
    items: Vec<u8>,
    count: u32,
    magic: [u8; 8],
    version: u32,
    length: Option<u32>,
    count_override: Option<u32>,
    flags: u32,
}

impl Default for TagBuilder {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            count: 0,
            magic: *APE_MAGIC,
            version: APE_VERSION,
            length: None,
            count_override: None,
            flags: 0,
        }
    }
}

impl TagBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a text item.
    pub fn item(self, key: &str, value: &[u8]) -> Self {
        self.item_with_flags(0, key, value)
    }

    /// Append an item with explicit flags.
    pub fn item_with_flags(mut self, flags: u32, key: &str, value: &[u8]) -> Self {
        self.items
            .extend_from_slice(&(value.len() as u32).to_le_bytes());
        self.items.extend_from_slice(&flags.to_le_bytes());
        self.items.extend_from_slice(key.as_bytes());
        self.items.push(0);
        self.items.extend_from_slice(value);
        self.count += 1;
        self
    }

    /// Append raw bytes to the item area without counting an item.
    pub fn raw(mut self, bytes: &[u8]) -> Self {
        self.items.extend_from_slice(bytes);
        self
    }

    pub fn magic(mut self, magic: &[u8; 8]) -> Self {
        self.magic = *magic;
        self
    }

    pub fn version(mut self, version: u32) -> Self {
        self.version = version;
        self
    }

    /// Override the footer length field.
    pub fn length(mut self, length: u32) -> Self {
        self.length = Some(length);
        self
    }

    /// Override the footer item count.
    pub fn count(mut self, count: u32) -> Self {
        self.count_override = Some(count);
        self
    }

    pub fn flags(mut self, flags: u32) -> Self {
        self.flags = flags;
        self
    }

    /// The footer record alone.
    pub fn footer(&self) -> [u8; FOOTER_SIZE] {
        let length = self
            .length
            .unwrap_or((self.items.len() + FOOTER_SIZE) as u32);
        let count = self.count_override.unwrap_or(self.count);

        let mut footer = [0u8; FOOTER_SIZE];
        footer[..8].copy_from_slice(&self.magic);
        footer[8..12].copy_from_slice(&self.version.to_le_bytes());
        footer[12..16].copy_from_slice(&length.to_le_bytes());
        footer[16..20].copy_from_slice(&count.to_le_bytes());
        footer[20..24].copy_from_slice(&self.flags.to_le_bytes());
        footer
    }

    /// Items followed by the footer.
    pub fn build(&self) -> Vec<u8> {
        let mut tag = self.items.clone();
        tag.extend_from_slice(&self.footer());
        tag
    }

    /// `payload` followed by the tag, as a media file would be laid out.
    pub fn build_after(&self, payload: &[u8]) -> Vec<u8> {
        let mut file = payload.to_vec();
        file.extend_from_slice(&self.build());
        file
    }
}

/// In-memory stream over `bytes`.
pub fn memory_stream(bytes: Vec<u8>) -> SeekableStream<Cursor<Vec<u8>>> {
    SeekableStream::new(Cursor::new(bytes)).unwrap()
}

/// Stream double that records reads and can be made to fail.
#[derive(Debug)]
pub struct FaultyStream {
    inner: SeekableStream<Cursor<Vec<u8>>>,
    pub known_size: bool,
    pub seekable: bool,
    /// Fail the read with this index (0-based).
    pub fail_read: Option<usize>,
    /// Fail every seek.
    pub fail_seek: bool,
    /// Number of `read_full` calls made.
    pub reads: usize,
    /// Total bytes requested from `read_full`.
    pub bytes_requested: usize,
}

impl FaultyStream {
    pub fn new(bytes: Vec<u8>) -> Self {
        Self {
            inner: memory_stream(bytes),
            known_size: true,
            seekable: true,
            fail_read: None,
            fail_seek: false,
            reads: 0,
            bytes_requested: 0,
        }
    }

    /// Start at `position` instead of 0.
    pub fn at(mut self, position: u64) -> Self {
        self.inner.seek(position).unwrap();
        self
    }
}

impl InputStream for FaultyStream {
    fn known_size(&self) -> bool {
        self.known_size
    }

    fn is_seekable(&self) -> bool {
        self.seekable
    }

    fn size(&self) -> u64 {
        self.inner.size()
    }

    fn position(&self) -> u64 {
        self.inner.position()
    }

    fn seek(&mut self, offset: u64) -> io::Result<()> {
        if self.fail_seek {
            return Err(io::Error::other("seek refused"));
        }
        self.inner.seek(offset)
    }

    fn read_full(&mut self, buf: &mut [u8]) -> io::Result<()> {
        let index = self.reads;
        self.reads += 1;
        self.bytes_requested += buf.len();
        if self.fail_read == Some(index) {
            // Partially consume, like an interrupted device read
            let half = buf.len() / 2;
            let _ = self.inner.read_full(&mut buf[..half]);
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "short read"));
        }
        self.inner.read_full(buf)
    }
}

/// Write `(path, content)` pairs under `root`, creating parent directories.
pub fn create_tree(root: &Path, files: &[(&str, &str)]) {
    for (path, content) in files {
        let full_path = root.join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(full_path, content).unwrap();
    }
}
