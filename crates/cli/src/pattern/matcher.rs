// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Compiled name patterns.

use std::fmt;
use std::marker::PhantomData;

use super::dialect::{Dialect, PatternError};

/// One compiled ignore pattern.
///
/// A pattern that failed to compile is still a `Pattern`: it keeps its
/// text and never matches. `Pattern` is move-only; the compiled matcher
/// is owned by exactly one slot.
pub struct Pattern<D: Dialect> {
    text: String,
    compiled: Option<D::Compiled>,
    _dialect: PhantomData<fn() -> D>,
}

impl<D: Dialect> Pattern<D> {
    /// Compile pattern text. Never fails; an invalid pattern is inert.
    pub fn compile(text: &str) -> Self {
        Self {
            text: text.to_string(),
            compiled: D::compile(text).ok(),
            _dialect: PhantomData,
        }
    }

    /// Compile pattern text, reporting why it is invalid.
    pub fn try_compile(text: &str) -> Result<Self, PatternError> {
        Ok(Self {
            text: text.to_string(),
            compiled: Some(D::compile(text)?),
            _dialect: PhantomData,
        })
    }

    /// Test a name against this pattern.
    #[inline]
    pub fn check(&self, name: &str) -> bool {
        self.compiled
            .as_ref()
            .is_some_and(|compiled| D::is_match(compiled, name))
    }

    /// Whether the pattern compiled.
    pub fn is_valid(&self) -> bool {
        self.compiled.is_some()
    }

    /// The pattern text as loaded.
    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl<D: Dialect> fmt::Debug for Pattern<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pattern")
            .field("dialect", &D::KIND)
            .field("text", &self.text)
            .field("valid", &self.is_valid())
            .finish()
    }
}

#[cfg(test)]
#[path = "matcher_tests.rs"]
mod tests;
