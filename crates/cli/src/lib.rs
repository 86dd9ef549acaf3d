pub mod ape;
pub mod cli;
pub mod color;
pub mod completions;
pub mod config;
pub mod discovery;
pub mod error;
pub mod exclude;
pub mod inspect;
pub mod output;
pub mod pattern;
pub mod stream;

pub use ape::{
    OwnedTagItem, ScanError, ScanSummary, TagItem, read_items, scan, scan_path, scan_shared,
    try_scan,
};
pub use cli::{Cli, Command, OutputFormat};
pub use config::{Config, IgnoreConfig};
pub use error::{Error, ExitCode, Result};
pub use exclude::{ExcludeList, IGNORE_FILE_NAME};
pub use pattern::{Dialect, ExtendedRegex, Glob, Pattern, PatternMatcher};
pub use stream::{InputStream, PositionGuard, SeekableStream};

#[cfg(test)]
pub mod test_utils;
