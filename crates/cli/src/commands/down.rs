// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `nup down` - stop the agent session

use anyhow::Result;
use nup_adapters::SessionAdapter;
use nup_core::LaunchConfig;

use crate::report;

pub async fn handle<S: SessionAdapter>(adapter: &S, config: &LaunchConfig) -> Result<()> {
    let session = config.session_name();
    adapter.kill(&session).await?;
    report::info(&format!("session {} stopped", session));
    Ok(())
}

#[cfg(test)]
#[path = "down_tests.rs"]
mod tests;
