// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Name patterns for ignore files.
//!
//! A pattern is compiled once by a [`Dialect`] and then only queried:
//! - [`Glob`]: shell-style wildcards via globset (default)
//! - [`ExtendedRegex`]: unanchored regex search via the regex crate
//!
//! The dialect is a type parameter, so it is fixed where an
//! [`ExcludeList`](crate::exclude::ExcludeList) is built.

pub mod dialect;
pub mod matcher;

pub use dialect::{Dialect, DialectKind, ExtendedRegex, Glob, PatternError};
pub use matcher::Pattern;

/// Pattern in the default (glob) dialect.
pub type PatternMatcher = Pattern<Glob>;

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
