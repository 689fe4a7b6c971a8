// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access for the adapters crate.

use std::time::Duration;

fn parse_duration_ms(var: &str) -> Option<Duration> {
    std::env::var(var)
        .ok()
        .and_then(|s| s.parse::<u64>().ok())
        .map(Duration::from_millis)
}

/// Delay between launching the agent and the first health probe
/// (default: 2000ms).
pub fn probe_delay() -> Duration {
    parse_duration_ms("NUP_PROBE_DELAY_MS").unwrap_or(Duration::from_secs(2))
}

/// Per-probe HTTP timeout (default: 3000ms).
pub fn probe_timeout() -> Duration {
    parse_duration_ms("NUP_PROBE_TIMEOUT_MS").unwrap_or(Duration::from_secs(3))
}
