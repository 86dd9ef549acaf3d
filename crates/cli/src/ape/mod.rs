// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! APEv2 tag trailer scanning.
//!
//! An APEv2 tag sits at the end of a media file and is closed by a 32 byte
//! footer:
//!
//! ```text
//! [ payload ][ item ][ item ]...[ footer ]  <- EOF
//! footer = "APETAGEX" version:u32 length:u32 count:u32 flags:u32 reserved[8]
//! item   = size:u32 flags:u32 key\0 value[size]
//! ```
//!
//! All integers are little-endian. `length` covers the items and the footer.
//! A missing tag and a corrupt tag look the same to [`scan`]: both return
//! `false`. [`try_scan`] keeps the reason.

mod footer;
mod item;
mod scan;

pub use footer::Footer;
pub use item::{ItemKind, OwnedTagItem, TagItem, Values};
pub use scan::{
    ScanError, ScanSummary, WalkEnd, read_items, scan, scan_path, scan_shared, try_scan,
    try_scan_path,
};

/// Size of the footer record.
pub const FOOTER_SIZE: usize = 32;

/// Footer magic.
pub const APE_MAGIC: &[u8; 8] = b"APETAGEX";

/// The only accepted tag version (APEv2).
pub const APE_VERSION: u32 = 2000;

/// Largest tag block that will be loaded (1 MiB).
pub const MAX_TAG_SIZE: u32 = 1024 * 1024;

/// Smallest useful item: two u32 fields plus a short key.
pub const MIN_ITEM_SIZE: usize = 10;
