// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing with clap derive.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Ignore-list matching and APEv2 tag inspection for media libraries
#[derive(Parser)]
#[command(name = "mediascan")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Use specific config file
    #[arg(short = 'C', long = "config", global = true, env = "MEDIASCAN_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Print the APEv2 tag items of media files
    Tags(TagsArgs),
    /// Test names against a directory's ignore file
    Ignore(IgnoreArgs),
    /// Print a shell completion script
    Completions(CompletionsArgs),
}

#[derive(clap::Args)]
pub struct TagsArgs {
    /// Media files to scan
    #[arg(value_name = "FILE", required = true)]
    pub files: Vec<PathBuf>,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub output: OutputFormat,

    /// Print binary values as hex instead of a size summary
    #[arg(long)]
    pub all_values: bool,
}

#[derive(clap::Args)]
pub struct IgnoreArgs {
    /// Directory holding the ignore file
    #[arg(value_name = "DIR")]
    pub dir: PathBuf,

    /// Names to test (default: the directory's entries)
    #[arg(value_name = "NAME")]
    pub names: Vec<String>,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub output: OutputFormat,

    /// Only print excluded names
    #[arg(long)]
    pub excluded_only: bool,
}

#[derive(clap::Args)]
pub struct CompletionsArgs {
    /// Target shell
    #[arg(value_enum)]
    pub shell: clap_complete::Shell,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
