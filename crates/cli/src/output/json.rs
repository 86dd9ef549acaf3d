// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! JSON output formatter.
//!
//! JSON is buffered and written at the end (not streamed).

use std::io::Write;

use serde::Serialize;

use crate::inspect::{FileTags, IgnoreListing};

/// JSON output formatter.
pub struct JsonFormatter<W: Write> {
    writer: W,
}

#[derive(Serialize)]
struct TagsOutput<'a> {
    files: &'a [FileTags],
}

impl<W: Write> JsonFormatter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Write `{"files": [...]}`.
    pub fn write_tags(&mut self, files: &[FileTags]) -> std::io::Result<()> {
        self.write_value(&TagsOutput { files })
    }

    pub fn write_ignore(&mut self, listing: &IgnoreListing) -> std::io::Result<()> {
        self.write_value(listing)
    }

    fn write_value<T: Serialize>(&mut self, value: &T) -> std::io::Result<()> {
        let json = serde_json::to_string_pretty(value).map_err(std::io::Error::other)?;
        writeln!(self.writer, "{}", json)?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
