// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access for the CLI crate.

use std::path::PathBuf;

use nup_core::config::parse_flag;
use nup_core::ConfigOverrides;

fn var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|s| !s.is_empty())
}

/// Configuration layer supplied by the environment.
pub fn overrides() -> ConfigOverrides {
    ConfigOverrides {
        agent_id: var("AGENT_ID"),
        bridge_port: var("PORT"),
        ui_port: var("UI_PORT"),
        registry_url: var("REGISTRY_URL"),
        public_url: var("PUBLIC_URL"),
        use_tmux: var("USE_TMUX").map(|v| parse_flag(&v)),
        project_root: var("PROJECT_ROOT").map(PathBuf::from),
        python_bin: var("PYTHON_BIN"),
    }
}

// --- Color ---

pub fn no_color() -> bool {
    std::env::var("NO_COLOR").is_ok_and(|v| v == "1")
}

pub fn force_color() -> bool {
    std::env::var("COLOR").is_ok_and(|v| v == "1")
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;
