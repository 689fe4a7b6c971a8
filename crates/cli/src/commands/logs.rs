// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `nup logs` - print recent output from the agent session

use anyhow::Result;
use nup_adapters::{SessionAdapter, SessionError};
use nup_core::LaunchConfig;

use crate::report;

pub async fn handle<S: SessionAdapter>(
    adapter: &S,
    config: &LaunchConfig,
    lines: u32,
) -> Result<()> {
    let session = config.session_name();
    match adapter.capture_output(&session, lines).await {
        Ok(output) => {
            print!("{}", output);
            if !output.ends_with('\n') {
                println!();
            }
            Ok(())
        }
        Err(SessionError::NotFound(name)) => {
            report::warn(&format!("session {} is not running", name));
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}

#[cfg(test)]
#[path = "logs_tests.rs"]
mod tests;
