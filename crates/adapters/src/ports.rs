// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Port reclamation strategies.
//!
//! Before launching the agent, any process still listening on the bridge
//! or UI port is killed. Two strategies exist (`lsof`, then `fuser`);
//! the first one whose tool is present on PATH is used. Reclaiming a
//! port nobody listens on is a no-op, never an error.

use crate::subprocess::{run_with_timeout, PORT_TOOL_TIMEOUT};
use async_trait::async_trait;
use thiserror::Error;
use tokio::process::Command;

/// Errors from port reclamation
#[derive(Debug, Error)]
pub enum PortError {
    #[error("{tool} failed on port {port}: {message}")]
    ToolFailed {
        tool: &'static str,
        port: String,
        message: String,
    },
}

/// One way of freeing a TCP port.
#[async_trait]
pub trait PortReclaimer: Send + Sync {
    /// Tool name, for diagnostics.
    fn name(&self) -> &'static str;

    /// Whether the underlying tool exists on this system.
    async fn is_available(&self) -> bool;

    /// Kill anything listening on `port`. Idempotent.
    async fn reclaim(&self, port: &str) -> Result<(), PortError>;
}

/// `lsof -ti tcp:<port>` to list listener PIDs, then `kill -9` each.
pub struct LsofReclaimer;

#[async_trait]
impl PortReclaimer for LsofReclaimer {
    fn name(&self) -> &'static str {
        "lsof"
    }

    async fn is_available(&self) -> bool {
        tool_exists("lsof", &["-v"]).await
    }

    async fn reclaim(&self, port: &str) -> Result<(), PortError> {
        let mut cmd = Command::new("lsof");
        cmd.args(["-ti", &format!("tcp:{}", port)]);
        let output = run_with_timeout(cmd, PORT_TOOL_TIMEOUT, "lsof port listing")
            .await
            .map_err(|e| PortError::ToolFailed {
                tool: "lsof",
                port: port.to_string(),
                message: e,
            })?;

        // Nonzero exit means no listeners - the port is already free
        if !output.status.success() {
            return Ok(());
        }

        for pid in String::from_utf8_lossy(&output.stdout).split_whitespace() {
            tracing::info!(port, pid, "killing listener");
            let mut kill = Command::new("kill");
            kill.args(["-9", pid]);
            // The process may have exited on its own in the meantime
            let _ = run_with_timeout(kill, PORT_TOOL_TIMEOUT, "kill listener").await;
        }
        Ok(())
    }
}

/// `fuser -k -n tcp <port>` kills listeners in one shot.
pub struct FuserReclaimer;

#[async_trait]
impl PortReclaimer for FuserReclaimer {
    fn name(&self) -> &'static str {
        "fuser"
    }

    async fn is_available(&self) -> bool {
        tool_exists("fuser", &["-V"]).await
    }

    async fn reclaim(&self, port: &str) -> Result<(), PortError> {
        let mut cmd = Command::new("fuser");
        cmd.args(["-k", "-n", "tcp", port]);
        // fuser exits nonzero when the port has no users - that's fine
        run_with_timeout(cmd, PORT_TOOL_TIMEOUT, "fuser kill")
            .await
            .map_err(|e| PortError::ToolFailed {
                tool: "fuser",
                port: port.to_string(),
                message: e,
            })?;
        Ok(())
    }
}

/// Pick the first strategy whose tool is installed. `None` means port
/// reclamation gets skipped with a warning upstream.
pub async fn select_reclaimer() -> Option<Box<dyn PortReclaimer>> {
    let lsof = LsofReclaimer;
    if lsof.is_available().await {
        return Some(Box::new(lsof));
    }
    let fuser = FuserReclaimer;
    if fuser.is_available().await {
        return Some(Box::new(fuser));
    }
    None
}

/// Capability probe: run the tool with its version flag and see if it
/// executes at all. A missing binary shows up as a spawn error.
async fn tool_exists(tool: &str, args: &[&str]) -> bool {
    let mut cmd = Command::new(tool);
    cmd.args(args);
    run_with_timeout(cmd, PORT_TOOL_TIMEOUT, tool).await.is_ok()
}

#[cfg(test)]
#[path = "ports_tests.rs"]
mod tests;
