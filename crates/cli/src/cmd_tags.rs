// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Tags command implementation.

use mediascan::cli::{OutputFormat, TagsArgs};
use mediascan::color::resolve_color;
use mediascan::config::{Config, ValueDisplay};
use mediascan::error::ExitCode;
use mediascan::inspect::{FileTags, inspect_tags};
use mediascan::output::{JsonFormatter, TextFormatter};

/// Run the tags command.
///
/// Exits with [`ExitCode::NotFound`] when any file has no usable tag.
pub fn run(args: &TagsArgs, config: &Config) -> anyhow::Result<ExitCode> {
    let show_binary = args.all_values || config.tags.values == ValueDisplay::All;

    let files: Vec<FileTags> = args
        .files
        .iter()
        .map(|path| inspect_tags(path, show_binary))
        .collect();

    match args.output {
        OutputFormat::Text => {
            let mut formatter = TextFormatter::stdout(resolve_color());
            for file in &files {
                formatter.write_tags(file)?;
            }
            formatter.flush()?;
        }
        OutputFormat::Json => {
            let mut formatter = JsonFormatter::new(std::io::stdout());
            formatter.write_tags(&files)?;
        }
    }

    let missing = files.iter().filter(|f| f.tag.is_none()).count();
    tracing::debug!(files = files.len(), missing, "tags command done");

    if missing > 0 {
        Ok(ExitCode::NotFound)
    } else {
        Ok(ExitCode::Success)
    }
}
