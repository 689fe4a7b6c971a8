// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `.env` file parsing.
//!
//! Only lines of the form `KEY=VALUE` where `KEY` matches
//! `[A-Za-z_][A-Za-z0-9_]*` are exported; comments, blank lines, and
//! anything else are silently skipped. One matched pair of outer quotes
//! is stripped from the value, matching what `export KEY='value'` would
//! have produced in a shell.

use std::path::Path;

/// Parse `.env` content into exportable key/value pairs (pure logic, no I/O).
pub fn parse(content: &str) -> Vec<(String, String)> {
    content.lines().filter_map(parse_line).collect()
}

/// Read and parse `<dir>/.env`. Returns `None` when the file is absent
/// or unreadable — a missing env file is never an error.
pub fn load(dir: &Path) -> Option<Vec<(String, String)>> {
    let content = std::fs::read_to_string(dir.join(".env")).ok()?;
    Some(parse(&content))
}

fn parse_line(line: &str) -> Option<(String, String)> {
    let line = line.strip_suffix('\r').unwrap_or(line);
    let (key, value) = line.split_once('=')?;
    if !valid_key(key) {
        return None;
    }
    Some((key.to_string(), unquote(value).to_string()))
}

fn valid_key(key: &str) -> bool {
    let mut chars = key.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    if !first.is_ascii_alphabetic() && first != '_' {
        return false;
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Strip one matched pair of outer single or double quotes.
fn unquote(value: &str) -> &str {
    let bytes = value.as_bytes();
    if bytes.len() >= 2 && (bytes[0] == b'"' || bytes[0] == b'\'') && bytes[bytes.len() - 1] == bytes[0]
    {
        &value[1..value.len() - 1]
    } else {
        value
    }
}

#[cfg(test)]
#[path = "envfile_tests.rs"]
mod tests;
