//! Config file discovery.
//!
//! The search starts at the media a command works on (the `ignore`
//! directory, or the directory holding the first `tags` file) and walks up
//! to the git root, so a library keeps one `mediascan.toml` at its top
//! whatever directory the command runs from.

use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Config file name.
pub const CONFIG_FILE_NAME: &str = "mediascan.toml";

/// Directory the search starts from for `target`.
///
/// Relative targets are taken against `cwd`. A target that is not an
/// existing directory (a media file, or a missing path) starts at its
/// parent.
pub fn search_start(target: &Path, cwd: &Path) -> PathBuf {
    let target = cwd.join(target);
    if target.is_dir() {
        return target;
    }
    match target.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => cwd.to_path_buf(),
    }
}

/// Find `mediascan.toml` in `start` or its ancestors, up to the git root.
pub fn find_config(start: &Path) -> Option<PathBuf> {
    for dir in start.ancestors() {
        let candidate = dir.join(CONFIG_FILE_NAME);
        if candidate.is_file() {
            return Some(candidate);
        }
        if dir.join(".git").exists() {
            break;
        }
    }
    None
}

/// Resolve the config for a command on `target`.
///
/// Priority:
/// 1. `-C`/`--config` (or `MEDIASCAN_CONFIG`): a file, or a directory
///    holding `mediascan.toml`
/// 2. Discovery from [`search_start`] up to the git root
/// 3. None (use defaults)
pub fn resolve_config(
    explicit: Option<&Path>,
    target: &Path,
    cwd: &Path,
) -> Result<Option<PathBuf>> {
    let Some(path) = explicit else {
        return Ok(find_config(&search_start(target, cwd)));
    };

    let path = cwd.join(path);
    if path.is_dir() {
        let inner = path.join(CONFIG_FILE_NAME);
        if inner.is_file() {
            return Ok(Some(inner));
        }
        return Err(Error::Config {
            message: format!("no {} in {}", CONFIG_FILE_NAME, path.display()),
            path: Some(path),
        });
    }
    if path.is_file() {
        return Ok(Some(path));
    }
    Err(Error::Config {
        message: format!("config file not found: {}", path.display()),
        path: Some(path),
    })
}

#[cfg(test)]
#[path = "discovery_tests.rs"]
mod tests;
