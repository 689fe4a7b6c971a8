// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Tmux session adapter

use super::{SessionAdapter, SessionError};
use crate::subprocess::{run_with_timeout, TMUX_TIMEOUT};
use async_trait::async_trait;
use std::path::Path;
use tokio::process::Command;

/// Tmux-based session adapter
#[derive(Clone, Default)]
pub struct TmuxAdapter;

impl TmuxAdapter {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl SessionAdapter for TmuxAdapter {
    async fn spawn(
        &self,
        name: &str,
        cwd: &Path,
        cmd: &str,
        env: &[(String, String)],
    ) -> Result<(), SessionError> {
        // Precondition: cwd must exist
        if !cwd.exists() {
            return Err(SessionError::SpawnFailed(format!(
                "working directory does not exist: {}",
                cwd.display()
            )));
        }

        // Replace any session left over from a previous launch
        let mut cmd_has = Command::new("tmux");
        cmd_has.args(["has-session", "-t", name]);
        let existing = run_with_timeout(cmd_has, TMUX_TIMEOUT, "tmux has-session").await;

        if existing.map(|o| o.status.success()).unwrap_or(false) {
            tracing::warn!(session = name, "session already exists, killing first");
            let mut cmd_kill = Command::new("tmux");
            cmd_kill.args(["kill-session", "-t", name]);
            let _ = run_with_timeout(cmd_kill, TMUX_TIMEOUT, "tmux kill-session").await;
        }

        let mut tmux_cmd = Command::new("tmux");
        tmux_cmd
            .arg("new-session")
            .arg("-d")
            .arg("-s")
            .arg(name)
            .arg("-c")
            .arg(cwd);

        // Forward .env / venv variables into the session
        for (key, value) in env {
            tmux_cmd.arg("-e").arg(format!("{}={}", key, value));
        }

        tmux_cmd.arg(cmd);

        let output = run_with_timeout(tmux_cmd, TMUX_TIMEOUT, "tmux new-session")
            .await
            .map_err(SessionError::SpawnFailed)?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            tracing::error!(session = name, stderr = %stderr, "tmux spawn failed");
            return Err(SessionError::SpawnFailed(stderr.to_string()));
        }

        // Log stderr even on success - may contain useful warnings
        if !output.stderr.is_empty() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            tracing::warn!(session = name, stderr = %stderr, "tmux spawn stderr (non-fatal)");
        }

        Ok(())
    }

    async fn kill(&self, name: &str) -> Result<(), SessionError> {
        // Ignore failure — session might already be dead, which is fine
        let mut cmd = Command::new("tmux");
        cmd.args(["kill-session", "-t", name]);
        let _ = run_with_timeout(cmd, TMUX_TIMEOUT, "tmux kill-session").await;
        Ok(())
    }

    async fn is_alive(&self, name: &str) -> Result<bool, SessionError> {
        let mut cmd = Command::new("tmux");
        cmd.args(["has-session", "-t", name]);
        let output = run_with_timeout(cmd, TMUX_TIMEOUT, "tmux has-session")
            .await
            .map_err(SessionError::CommandFailed)?;
        Ok(output.status.success())
    }

    async fn capture_output(&self, name: &str, lines: u32) -> Result<String, SessionError> {
        let lines_arg = format!("-{}", lines);
        let mut cmd = Command::new("tmux");
        cmd.args(["capture-pane", "-t", name, "-p", "-S", &lines_arg]);
        let output = run_with_timeout(cmd, TMUX_TIMEOUT, "tmux capture-pane")
            .await
            .map_err(SessionError::CommandFailed)?;
        if !output.status.success() {
            return Err(SessionError::NotFound(name.to_string()));
        }
        Ok(String::from_utf8_lossy(&output.stdout).to_string())
    }
}

#[cfg(test)]
#[path = "tmux_tests.rs"]
mod tests;
