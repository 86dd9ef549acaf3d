// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Pattern dialects.

use std::fmt;

use globset::{GlobBuilder, GlobMatcher};
use regex::Regex;
use serde::Deserialize;

/// Error during pattern compilation.
#[derive(Debug, thiserror::Error)]
pub enum PatternError {
    #[error("invalid glob pattern: {0}")]
    InvalidGlob(#[from] globset::Error),

    #[error("invalid regex pattern: {0}")]
    InvalidRegex(#[from] regex::Error),
}

/// A way of turning pattern text into a name matcher.
pub trait Dialect {
    /// Compiled form of a pattern.
    type Compiled: Send + Sync;

    /// Which dialect this is, for configuration and diagnostics.
    const KIND: DialectKind;

    /// Compile one pattern.
    fn compile(text: &str) -> Result<Self::Compiled, PatternError>;

    /// Test a candidate name against a compiled pattern.
    fn is_match(compiled: &Self::Compiled, name: &str) -> bool;
}

/// Shell-glob dialect.
///
/// The whole name must match. `*` also matches `/`, so a pattern written
/// for a bare file name still matches when handed a relative path.
#[derive(Debug)]
pub enum Glob {}

impl Dialect for Glob {
    type Compiled = GlobMatcher;

    const KIND: DialectKind = DialectKind::Glob;

    fn compile(text: &str) -> Result<GlobMatcher, PatternError> {
        let glob = GlobBuilder::new(text)
            .literal_separator(false)
            .backslash_escape(true)
            .build()?;
        Ok(glob.compile_matcher())
    }

    fn is_match(compiled: &GlobMatcher, name: &str) -> bool {
        compiled.is_match(name)
    }
}

/// Extended-regex dialect.
///
/// Unanchored search: a pattern matches if it matches anywhere in the
/// name. Use `^` and `$` to anchor. No capture groups are extracted.
#[derive(Debug)]
pub enum ExtendedRegex {}

impl Dialect for ExtendedRegex {
    type Compiled = Regex;

    const KIND: DialectKind = DialectKind::Regex;

    fn compile(text: &str) -> Result<Regex, PatternError> {
        Ok(Regex::new(text)?)
    }

    fn is_match(compiled: &Regex, name: &str) -> bool {
        compiled.is_match(name)
    }
}

/// Dialect selector as written in configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DialectKind {
    #[default]
    Glob,
    Regex,
}

impl fmt::Display for DialectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DialectKind::Glob => write!(f, "glob"),
            DialectKind::Regex => write!(f, "regex"),
        }
    }
}
