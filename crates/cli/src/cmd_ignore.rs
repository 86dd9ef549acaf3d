// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Ignore command implementation.

use mediascan::cli::{IgnoreArgs, OutputFormat};
use mediascan::color::resolve_color;
use mediascan::config::Config;
use mediascan::error::ExitCode;
use mediascan::inspect::inspect_ignore_with;
use mediascan::output::{JsonFormatter, TextFormatter};

/// Run the ignore command.
///
/// Exits with [`ExitCode::NotFound`] when the directory has no ignore file
/// and the config adds no patterns; every name is then kept.
pub fn run(args: &IgnoreArgs, config: &Config) -> anyhow::Result<ExitCode> {
    let listing = inspect_ignore_with(&args.dir, &config.ignore, &args.names)?;

    match args.output {
        OutputFormat::Text => {
            let mut formatter = TextFormatter::stdout(resolve_color());
            formatter.write_ignore(&listing, args.excluded_only)?;
            formatter.flush()?;
        }
        OutputFormat::Json => {
            let mut formatter = JsonFormatter::new(std::io::stdout());
            formatter.write_ignore(&listing)?;
        }
    }

    if !listing.loaded && config.ignore.patterns.is_empty() {
        eprintln!(
            "mediascan: no ignore file at {}",
            listing.ignore_file.display()
        );
        return Ok(ExitCode::NotFound);
    }
    Ok(ExitCode::Success)
}
