// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Shell completion scripts for mediascan.
//!
//! Scripts are printed rather than installed; the usual setup is
//! `mediascan completions bash > ~/.local/share/bash-completion/completions/mediascan`.

use std::io::Write;

use clap::CommandFactory;
use clap_complete::{Shell, generate};

use crate::cli::Cli;
use crate::error::{Error, Result};

/// Binary name baked into generated scripts.
const BIN_NAME: &str = "mediascan";

/// Conventional file name for the script of `shell`.
pub fn script_filename(shell: Shell) -> String {
    match shell {
        Shell::Bash => format!("{BIN_NAME}.bash"),
        Shell::Zsh => format!("_{BIN_NAME}"),
        Shell::Fish => format!("{BIN_NAME}.fish"),
        Shell::PowerShell => format!("_{BIN_NAME}.ps1"),
        Shell::Elvish => format!("{BIN_NAME}.elv"),
        _ => BIN_NAME.to_string(),
    }
}

/// Write the completion script for `shell` to `out`.
pub fn generate_to<W: Write>(shell: Shell, out: &mut W) -> Result<()> {
    let mut cmd = Cli::command();
    let mut buf = Vec::new();
    generate(shell, &mut cmd, BIN_NAME, &mut buf);

    out.write_all(&buf)
        .and_then(|()| out.flush())
        .map_err(|e| Error::Internal(format!("failed to write completion script: {e}")))
}

#[cfg(test)]
#[path = "completions_tests.rs"]
mod tests;
