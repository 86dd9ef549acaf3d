// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! mediascan CLI entry point.

use std::path::{Path, PathBuf};

use clap::{CommandFactory, Parser};
use tracing_subscriber::{EnvFilter, fmt};

use mediascan::cli::{Cli, Command};
use mediascan::config::{self, Config};
use mediascan::discovery;
use mediascan::error::ExitCode;

mod cmd_ignore;
mod cmd_tags;

fn init_logging() {
    let filter =
        EnvFilter::try_from_env("MEDIASCAN_LOG").unwrap_or_else(|_| EnvFilter::new("off"));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    init_logging();

    let exit_code = match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("mediascan: {}", e);
            match e.downcast_ref::<mediascan::Error>() {
                Some(err) => ExitCode::from(err),
                None => ExitCode::InternalError,
            }
        }
    };

    std::process::exit(exit_code as i32);
}

fn run() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    match &cli.command {
        None => {
            // Show help for bare invocation
            Cli::command().print_help()?;
            println!();
            Ok(ExitCode::Success)
        }
        Some(Command::Tags(args)) => {
            // clap guarantees at least one file
            let target = args.files.first().map_or(Path::new("."), PathBuf::as_path);
            cmd_tags::run(args, &load_config(&cli, target)?)
        }
        Some(Command::Ignore(args)) => cmd_ignore::run(args, &load_config(&cli, &args.dir)?),
        Some(Command::Completions(args)) => {
            mediascan::completions::generate_to(args.shell, &mut std::io::stdout())?;
            Ok(ExitCode::Success)
        }
    }
}

/// Load the config named by `-C`, or discovered upward from `target`.
fn load_config(cli: &Cli, target: &Path) -> anyhow::Result<Config> {
    let cwd = std::env::current_dir()?;

    match discovery::resolve_config(cli.config.as_deref(), target, &cwd)? {
        Some(path) => {
            tracing::debug!("loading config from {}", path.display());
            Ok(config::load_with_warnings(&path)?)
        }
        None => {
            tracing::debug!("no config found, using defaults");
            Ok(Config::default())
        }
    }
}
