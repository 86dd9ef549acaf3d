// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Per-directory ignore lists.
//!
//! An ignore file holds one pattern per line. Blank lines and lines
//! starting with `#` are skipped; trailing CR/LF is stripped. Every other
//! line becomes a [`Pattern`], including lines that fail to compile (those
//! never match).

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::{Error, Result};
use crate::pattern::{Dialect, Glob, Pattern};

/// Default name of the per-directory ignore file.
pub const IGNORE_FILE_NAME: &str = ".mediaignore";

/// Ordered list of ignore patterns.
///
/// Filled once, then only queried. Order follows the file and only
/// affects how soon [`check`](Self::check) stops.
#[derive(Debug)]
pub struct ExcludeList<D: Dialect = Glob> {
    patterns: Vec<Pattern<D>>,
}

impl<D: Dialect> Default for ExcludeList<D> {
    fn default() -> Self {
        Self {
            patterns: Vec::new(),
        }
    }
}

impl<D: Dialect> ExcludeList<D> {
    /// Create an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// True when no pattern is loaded.
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Number of loaded patterns, valid or not.
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    /// Load patterns from an ignore file.
    ///
    /// Returns false only when the file cannot be opened. `\r` and `\n`
    /// are stripped from line ends, however many there are.
    pub fn load_file(&mut self, path: &Path) -> bool {
        self.try_load_file(path).is_ok()
    }

    /// Load patterns from an ignore file, returning how many were added.
    ///
    /// Fails only when the file cannot be opened. A read error after that
    /// ends the input; lines read before it stay loaded.
    pub fn try_load_file(&mut self, path: &Path) -> Result<usize> {
        let file = File::open(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let mut reader = BufReader::new(file);
        let before = self.patterns.len();
        let mut line = Vec::new();

        loop {
            line.clear();
            match reader.read_until(b'\n', &mut line) {
                // The partial line of a failed read is dropped
                Ok(0) | Err(_) => break,
                Ok(_) => self.push_line(&String::from_utf8_lossy(&line)),
            }
        }

        Ok(self.patterns.len() - before)
    }

    /// Load patterns from ignore-file text.
    pub fn load_str(&mut self, content: &str) -> usize {
        let before = self.patterns.len();
        for line in content.split_inclusive('\n') {
            self.push_line(line);
        }
        self.patterns.len() - before
    }

    /// Add patterns given one per item (e.g. from configuration).
    ///
    /// Items follow the same skipping rules as file lines.
    pub fn extend_patterns<I, S>(&mut self, patterns: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for pattern in patterns {
            self.push_line(pattern.as_ref());
        }
    }

    fn push_line(&mut self, line: &str) {
        let line = line.trim_end_matches(['\r', '\n']);
        if line.is_empty() || line.starts_with('#') {
            return;
        }
        self.patterns.push(Pattern::compile(line));
    }

    /// True when any pattern matches `name`.
    pub fn check(&self, name: &str) -> bool {
        self.patterns.iter().any(|p| p.check(name))
    }

    /// Check the final component of `path`.
    ///
    /// Paths without a file name (`/`, `..`) never match.
    pub fn check_path(&self, path: &Path) -> bool {
        path.file_name()
            .is_some_and(|name| self.check(&name.to_string_lossy()))
    }

    /// Loaded patterns in order.
    pub fn patterns(&self) -> impl Iterator<Item = &Pattern<D>> {
        self.patterns.iter()
    }

    /// Text of patterns that failed to compile.
    pub fn invalid_patterns(&self) -> impl Iterator<Item = &str> {
        self.patterns
            .iter()
            .filter(|p| !p.is_valid())
            .map(Pattern::as_str)
    }
}

#[cfg(test)]
#[path = "exclude_tests.rs"]
mod tests;
