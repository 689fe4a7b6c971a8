// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! User-facing diagnostics.
//!
//! Every line carries a severity prefix. Info and warn lines go to
//! stdout; error lines go to stderr. Warnings never stop the launch.

use crate::color::{self, codes, RESET};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Severity {
    Info,
    Warn,
    Error,
}

impl Severity {
    fn label(self) -> &'static str {
        match self {
            Severity::Info => "info:",
            Severity::Warn => "warn:",
            Severity::Error => "error:",
        }
    }

    fn code(self) -> u8 {
        match self {
            Severity::Info => codes::INFO,
            Severity::Warn => codes::WARN,
            Severity::Error => codes::ERROR,
        }
    }
}

/// Render one diagnostic line (pure, for tests).
pub fn format_line(severity: Severity, colorize: bool, msg: &str) -> String {
    if colorize {
        format!(
            "{}{}{} {}",
            color::fg256(severity.code()),
            severity.label(),
            RESET,
            msg
        )
    } else {
        format!("{} {}", severity.label(), msg)
    }
}

pub fn info(msg: &str) {
    println!(
        "{}",
        format_line(Severity::Info, color::should_colorize(), msg)
    );
}

pub fn warn(msg: &str) {
    println!(
        "{}",
        format_line(Severity::Warn, color::should_colorize(), msg)
    );
}

pub fn error(msg: &str) {
    eprintln!(
        "{}",
        format_line(Severity::Error, color::should_colorize(), msg)
    );
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
