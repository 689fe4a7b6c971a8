// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use std::io::IsTerminal;

pub mod codes {
    /// Info prefix: pastel cyan / steel blue
    pub const INFO: u8 = 74;
    /// Warn prefix: amber
    pub const WARN: u8 = 178;
    /// Error prefix: red
    pub const ERROR: u8 = 160;
}

pub const RESET: &str = "\x1b[0m";

/// Determine if color output should be enabled.
///
/// Priority: `NO_COLOR=1` disables → `COLOR=1` forces → TTY check.
pub fn should_colorize() -> bool {
    if crate::env::no_color() {
        return false;
    }
    if crate::env::force_color() {
        return true;
    }
    std::io::stdout().is_terminal()
}

pub fn fg256(code: u8) -> String {
    format!("\x1b[38;5;{code}m")
}

#[cfg(test)]
#[path = "color_tests.rs"]
mod tests;
