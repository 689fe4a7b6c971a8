// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `nup status` - report whether the agent session is alive

use anyhow::Result;
use nup_adapters::SessionAdapter;
use nup_core::LaunchConfig;

use crate::report;

pub async fn handle<S: SessionAdapter>(adapter: &S, config: &LaunchConfig) -> Result<()> {
    let session = config.session_name();
    if adapter.is_alive(&session).await? {
        report::info(&format!("session {} is running", session));
    } else {
        report::info(&format!("session {} is not running", session));
    }
    Ok(())
}

#[cfg(test)]
#[path = "status_tests.rs"]
mod tests;
