// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Parse helper functions for configuration.

use std::path::Path;

/// Collect dotted names of keys not listed in `known`.
///
/// Tables missing from `known` are not descended into.
pub(super) fn unknown_keys(table: &toml::Table, known: &[(&str, &[&str])]) -> Vec<String> {
    let mut unknown = Vec::new();
    collect_unknown(table, "", known, &mut unknown);
    unknown
}

fn collect_unknown(
    table: &toml::Table,
    prefix: &str,
    known: &[(&str, &[&str])],
    out: &mut Vec<String>,
) {
    let Some((_, keys)) = known.iter().find(|(name, _)| *name == prefix) else {
        return;
    };

    for (key, value) in table {
        let dotted = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{}.{}", prefix, key)
        };

        if !keys.contains(&key.as_str()) {
            out.push(dotted);
            continue;
        }

        if let toml::Value::Table(inner) = value {
            collect_unknown(inner, &dotted, known, out);
        }
    }
}

/// Warn about an unrecognized config key.
pub(super) fn warn_unknown_key(path: &Path, key: &str) {
    eprintln!(
        "mediascan: warning: {}: unrecognized field `{}` (ignored)",
        path.display(),
        key
    );
}
