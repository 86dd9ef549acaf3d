//! Test helpers for behavioral specifications.
//!
//! Provides the binary command and builders for media directories with
//! APEv2-tagged files.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(dead_code)]

pub use assert_cmd::prelude::*;
pub use predicates;
pub use predicates::prelude::{Predicate, PredicateBooleanExt};
use std::path::{Path, PathBuf};
use std::process::Command;

/// Returns a Command configured to run the mediascan binary
pub fn mediascan_cmd() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("mediascan"));
    cmd.env_remove("MEDIASCAN_CONFIG")
        .env_remove("MEDIASCAN_LOG")
        .env_remove("COLOR");
    cmd
}

/// APEv2 tag bytes: items followed by a footer.
#[derive(Default)]
pub struct Tag {
    items: Vec<u8>,
    count: u32,
}

impl Tag {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a UTF-8 text item.
    pub fn text(self, key: &str, value: &str) -> Self {
        self.item(0, key, value.as_bytes())
    }

    /// Append a binary item.
    pub fn binary(self, key: &str, value: &[u8]) -> Self {
        self.item(1 << 1, key, value)
    }

    fn item(mut self, flags: u32, key: &str, value: &[u8]) -> Self {
        self.items
            .extend_from_slice(&(value.len() as u32).to_le_bytes());
        self.items.extend_from_slice(&flags.to_le_bytes());
        self.items.extend_from_slice(key.as_bytes());
        self.items.push(0);
        self.items.extend_from_slice(value);
        self.count += 1;
        self
    }

    pub fn bytes(&self) -> Vec<u8> {
        let mut out = self.items.clone();
        out.extend_from_slice(b"APETAGEX");
        out.extend_from_slice(&2000u32.to_le_bytes());
        out.extend_from_slice(&(self.items.len() as u32 + 32).to_le_bytes());
        out.extend_from_slice(&self.count.to_le_bytes());
        out.extend_from_slice(&0u32.to_le_bytes());
        out.extend_from_slice(&[0; 8]);
        out
    }
}

/// Temporary media directory.
pub struct Project {
    dir: tempfile::TempDir,
}

impl Project {
    pub fn empty() -> Self {
        Self {
            dir: tempfile::tempdir().unwrap(),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write `content` to `rel`, creating parent directories.
    pub fn file(&self, rel: &str, content: impl AsRef<[u8]>) -> PathBuf {
        let path = self.dir.path().join(rel);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(&path, content).unwrap();
        path
    }

    /// Write a media file: some audio bytes followed by `tag`.
    pub fn tagged(&self, rel: &str, tag: &Tag) -> PathBuf {
        let mut content = vec![0xFF, 0xFB, 0x90, 0x00];
        content.extend_from_slice(&[0x55; 256]);
        content.extend_from_slice(&tag.bytes());
        self.file(rel, content)
    }

    /// Write the config file at the project root.
    pub fn config(&self, content: &str) -> PathBuf {
        self.file("mediascan.toml", content)
    }
}
