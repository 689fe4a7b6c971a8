// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use serial_test::serial;

#[test]
fn fg256_emits_ansi_sequence() {
    assert_eq!(fg256(codes::INFO), "\x1b[38;5;74m");
    assert_eq!(fg256(codes::ERROR), "\x1b[38;5;160m");
}

#[test]
#[serial(env)]
fn no_color_disables_output() {
    std::env::set_var("NO_COLOR", "1");
    std::env::remove_var("COLOR");

    assert!(!should_colorize());

    std::env::remove_var("NO_COLOR");
}

#[test]
#[serial(env)]
fn color_forces_output() {
    std::env::remove_var("NO_COLOR");
    std::env::set_var("COLOR", "1");

    assert!(should_colorize());

    std::env::remove_var("COLOR");
}
