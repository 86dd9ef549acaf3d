//! Text output formatter.
//!
//! Tags:
//! ```text
//! <file>
//!   <key> = <value>
//!   <key> [binary, <size> bytes]
//! <file>: no tag
//! ```
//!
//! Ignore listings:
//! ```text
//! excluded  <name>
//! kept      <name>
//! ```

use std::io::Write;

use termcolor::{ColorChoice, StandardStream, WriteColor};

use crate::color::scheme;
use crate::inspect::{FileTags, IgnoreListing, ItemListing};

/// Text output formatter with color support.
pub struct TextFormatter<W> {
    out: W,
}

impl TextFormatter<StandardStream> {
    /// Formatter writing to stdout.
    pub fn stdout(color_choice: ColorChoice) -> Self {
        Self::new(StandardStream::stdout(color_choice))
    }
}

impl<W: WriteColor> TextFormatter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Write the tag items of one file.
    pub fn write_tags(&mut self, file: &FileTags) -> std::io::Result<()> {
        self.out.set_color(&scheme::path())?;
        write!(self.out, "{}", file.path.display())?;
        self.out.reset()?;

        let Some(tag) = &file.tag else {
            write!(self.out, ": ")?;
            self.out.set_color(&scheme::warn())?;
            writeln!(self.out, "no tag")?;
            self.out.reset()?;
            return Ok(());
        };
        writeln!(self.out)?;

        for item in &tag.items {
            self.write_item(item)?;
        }

        if tag.end == "truncated" {
            self.out.set_color(&scheme::warn())?;
            writeln!(
                self.out,
                "  (truncated: {} of {} items readable)",
                tag.items.len(),
                tag.declared
            )?;
            self.out.reset()?;
        }
        Ok(())
    }

    fn write_item(&mut self, item: &ItemListing) -> std::io::Result<()> {
        write!(self.out, "  ")?;
        self.out.set_color(&scheme::key())?;
        write!(self.out, "{}", item.key)?;
        self.out.reset()?;

        match (&item.values, &item.hex) {
            (Some(values), _) => writeln!(self.out, " = {}", values.join("; "))?,
            (None, Some(hex)) => writeln!(self.out, " = {}", hex)?,
            (None, None) => {
                write!(self.out, " ")?;
                self.out.set_color(&scheme::context())?;
                writeln!(self.out, "[{}, {} bytes]", item.kind, item.size)?;
                self.out.reset()?;
            }
        }
        Ok(())
    }

    /// Write an ignore listing.
    pub fn write_ignore(&mut self, listing: &IgnoreListing, excluded_only: bool) -> std::io::Result<()> {
        for pattern in &listing.invalid {
            self.out.set_color(&scheme::warn())?;
            write!(self.out, "warning")?;
            self.out.reset()?;
            writeln!(self.out, ": pattern `{}` is invalid and never matches", pattern)?;
        }

        for entry in &listing.entries {
            if entry.excluded {
                self.out.set_color(&scheme::excluded())?;
                write!(self.out, "excluded")?;
            } else if excluded_only {
                continue;
            } else {
                self.out.set_color(&scheme::kept())?;
                write!(self.out, "kept    ")?;
            }
            self.out.reset()?;
            writeln!(self.out, "  {}", entry.name)?;
        }
        Ok(())
    }

    pub fn flush(&mut self) -> std::io::Result<()> {
        self.out.flush()
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
