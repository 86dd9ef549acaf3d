// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Serializable views of tags and ignore lists for the CLI.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::ape::{self, ItemKind, TagItem, WalkEnd};
use crate::config::IgnoreConfig;
use crate::error::{Error, Result};
use crate::exclude::ExcludeList;
use crate::pattern::{Dialect, DialectKind};

/// Tag contents of one file.
#[derive(Debug, Serialize)]
pub struct FileTags {
    pub path: PathBuf,
    /// `None` when the file has no usable tag.
    pub tag: Option<TagListing>,
}

#[derive(Debug, Serialize)]
pub struct TagListing {
    /// Item count declared by the footer.
    pub declared: u32,
    /// How the item walk ended.
    pub end: &'static str,
    pub items: Vec<ItemListing>,
}

#[derive(Debug, Serialize)]
pub struct ItemListing {
    /// Key, lossily decoded.
    pub key: String,
    pub kind: &'static str,
    pub read_only: bool,
    pub size: u32,
    /// Text values (text and locator items).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub values: Option<Vec<String>>,
    /// Hex dump (binary items, when requested).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hex: Option<String>,
}

impl ItemListing {
    fn from_item(item: &TagItem<'_>, show_binary: bool) -> Self {
        let kind = item.kind();
        let (values, hex) = match kind {
            ItemKind::Text | ItemKind::Locator => (
                Some(
                    item.values()
                        .map(|v| String::from_utf8_lossy(v).into_owned())
                        .collect(),
                ),
                None,
            ),
            ItemKind::Binary | ItemKind::Reserved => (None, show_binary.then(|| hex(item.value))),
        };

        Self {
            key: String::from_utf8_lossy(item.key).into_owned(),
            kind: kind.as_str(),
            read_only: item.read_only(),
            size: item.size(),
            values,
            hex,
        }
    }
}

fn walk_end_name(end: WalkEnd) -> &'static str {
    match end {
        WalkEnd::Exhausted => "complete",
        WalkEnd::Truncated => "truncated",
        WalkEnd::Stopped => "stopped",
    }
}

fn hex(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{b:02x}")).collect()
}

/// Scan `path` and describe its tag.
pub fn inspect_tags(path: &Path, show_binary: bool) -> FileTags {
    let mut items = Vec::new();
    let result = ape::try_scan_path(path, |item| {
        items.push(ItemListing::from_item(item, show_binary));
        true
    });

    let tag = match result {
        Ok(summary) => Some(TagListing {
            declared: summary.footer.count,
            end: walk_end_name(summary.end),
            items,
        }),
        Err(err) => {
            tracing::debug!(path = %path.display(), error = %err, "no usable tag");
            None
        }
    };

    FileTags {
        path: path.to_path_buf(),
        tag,
    }
}

/// Ignore list state for one directory.
#[derive(Debug, Serialize)]
pub struct IgnoreListing {
    pub dir: PathBuf,
    pub ignore_file: PathBuf,
    /// Whether the ignore file could be opened.
    pub loaded: bool,
    pub dialect: String,
    /// Patterns in effect (file and configuration).
    pub patterns: usize,
    /// Patterns that failed to compile and never match.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub invalid: Vec<String>,
    pub entries: Vec<NameVerdict>,
}

#[derive(Debug, Serialize)]
pub struct NameVerdict {
    pub name: String,
    pub excluded: bool,
}

/// Load the ignore list of `dir` and judge `names`, or the directory's own
/// entries when `names` is empty.
pub fn inspect_ignore<D: Dialect>(
    dir: &Path,
    config: &IgnoreConfig,
    names: &[String],
) -> Result<IgnoreListing> {
    let ignore_file = dir.join(&config.file);
    let mut list = ExcludeList::<D>::new();
    let loaded = list.load_file(&ignore_file);
    list.extend_patterns(&config.patterns);

    tracing::debug!(
        file = %ignore_file.display(),
        loaded,
        patterns = list.len(),
        "ignore list ready"
    );

    let names = if names.is_empty() {
        list_dir(dir, &config.file)?
    } else {
        names.to_vec()
    };

    let entries = names
        .into_iter()
        .map(|name| NameVerdict {
            excluded: list.check(&name),
            name,
        })
        .collect();

    Ok(IgnoreListing {
        dir: dir.to_path_buf(),
        ignore_file,
        loaded,
        dialect: D::KIND.to_string(),
        patterns: list.len(),
        invalid: list.invalid_patterns().map(String::from).collect(),
        entries,
    })
}

/// Like [`inspect_ignore`], with the dialect chosen by configuration.
pub fn inspect_ignore_with(
    dir: &Path,
    config: &IgnoreConfig,
    names: &[String],
) -> Result<IgnoreListing> {
    match config.dialect {
        DialectKind::Glob => inspect_ignore::<crate::pattern::Glob>(dir, config, names),
        DialectKind::Regex => inspect_ignore::<crate::pattern::ExtendedRegex>(dir, config, names),
    }
}

/// Immediate entries of `dir`, sorted, without the ignore file itself.
fn list_dir(dir: &Path, ignore_file: &str) -> Result<Vec<String>> {
    let io_err = |source| Error::Io {
        path: dir.to_path_buf(),
        source,
    };

    let mut names = Vec::new();
    for entry in std::fs::read_dir(dir).map_err(io_err)? {
        let name = entry.map_err(io_err)?.file_name();
        if name != ignore_file {
            names.push(name.to_string_lossy().into_owned());
        }
    }
    names.sort();
    Ok(names)
}

#[cfg(test)]
#[path = "inspect_tests.rs"]
mod tests;
