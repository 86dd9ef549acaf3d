// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Configuration parsing and validation.
//!
//! Handles mediascan.toml parsing with version validation and unknown key warnings.

mod parse;

use std::path::Path;

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::exclude::IGNORE_FILE_NAME;
use crate::pattern::DialectKind;
use parse::{unknown_keys, warn_unknown_key};

/// Minimum config structure for version checking.
#[derive(Deserialize)]
struct VersionOnly {
    version: Option<i64>,
}

/// Full configuration.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Config file version (must be 1).
    pub version: i64,

    /// Ignore-list settings.
    #[serde(default)]
    pub ignore: IgnoreConfig,

    /// Tag display settings.
    #[serde(default)]
    pub tags: TagsConfig,
}

/// `[ignore]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct IgnoreConfig {
    /// Name of the per-directory ignore file.
    #[serde(default = "IgnoreConfig::default_file")]
    pub file: String,

    /// Pattern dialect used for every ignore list.
    #[serde(default)]
    pub dialect: DialectKind,

    /// Extra patterns applied in every directory, after the file's own.
    #[serde(default)]
    pub patterns: Vec<String>,
}

impl Default for IgnoreConfig {
    fn default() -> Self {
        Self {
            file: Self::default_file(),
            dialect: DialectKind::default(),
            patterns: Vec::new(),
        }
    }
}

impl IgnoreConfig {
    pub(crate) fn default_file() -> String {
        IGNORE_FILE_NAME.to_string()
    }
}

/// `[tags]` section.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TagsConfig {
    /// Which values are printed in full.
    #[serde(default)]
    pub values: ValueDisplay,
}

/// How item values are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueDisplay {
    /// Print text values; summarize binary values by size.
    #[default]
    Text,
    /// Print every value, binary ones as hex.
    All,
}

/// Currently supported config version.
pub const SUPPORTED_VERSION: i64 = 1;

/// Known keys per table ("" is the top level).
const KNOWN_KEYS: &[(&str, &[&str])] = &[
    ("", &["version", "ignore", "tags"]),
    ("ignore", &["file", "dialect", "patterns"]),
    ("tags", &["values"]),
];

/// Load and validate config from a file path.
pub fn load(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path).map_err(|e| Error::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    parse(&content, path)
}

/// Load config with warnings for unknown keys.
pub fn load_with_warnings(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path).map_err(|e| Error::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    parse_with_warnings(&content, path)
}

/// Parse config from string content (strict mode).
pub fn parse(content: &str, path: &Path) -> Result<Config> {
    let config_err = |message: String| Error::Config {
        message,
        path: Some(path.to_path_buf()),
    };

    // First check version
    let version_check: VersionOnly =
        toml::from_str(content).map_err(|e| config_err(e.to_string()))?;

    let version = version_check
        .version
        .ok_or_else(|| config_err("missing required field: version".to_string()))?;

    if version != SUPPORTED_VERSION {
        return Err(config_err(format!(
            "unsupported config version {} (supported: {})\n  Upgrade mediascan to use this config.",
            version, SUPPORTED_VERSION
        )));
    }

    // Parse full config
    let config: Config = toml::from_str(content).map_err(|e| config_err(e.to_string()))?;

    if config.ignore.file.is_empty() || config.ignore.file.contains(['/', '\\']) {
        return Err(config_err(format!(
            "ignore.file must be a bare file name, got {:?}",
            config.ignore.file
        )));
    }

    Ok(config)
}

/// Parse config, warning on unknown keys.
pub fn parse_with_warnings(content: &str, path: &Path) -> Result<Config> {
    let config = parse(content, path)?;

    // Already parsed once, so this cannot fail on syntax
    if let Ok(table) = content.parse::<toml::Table>() {
        for key in unknown_keys(&table, KNOWN_KEYS) {
            warn_unknown_key(path, &key);
        }
    }

    tracing::debug!(
        path = %path.display(),
        dialect = %config.ignore.dialect,
        ignore_file = %config.ignore.file,
        "loaded config"
    );

    Ok(config)
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
