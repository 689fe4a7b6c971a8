// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Session supervision adapters.
//!
//! The launcher owns the derived session name (`agent_<id>`); adapters
//! treat it as an opaque identifier.

mod tmux;

pub use tmux::TmuxAdapter;

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::{FakeSessionAdapter, SessionCall};

use async_trait::async_trait;
use std::path::Path;
use thiserror::Error;

/// Errors from session operations
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("session not found: {0}")]
    NotFound(String),
    #[error("spawn failed: {0}")]
    SpawnFailed(String),
    #[error("command failed: {0}")]
    CommandFailed(String),
}

/// Supervisor for named, detached, persistent sessions.
#[async_trait]
pub trait SessionAdapter: Clone + Send + Sync + 'static {
    /// Create a detached session running `cmd` in `cwd`.
    ///
    /// Idempotent restart semantics: an existing session with the same
    /// name is killed first, so no two sessions with the name coexist.
    async fn spawn(
        &self,
        name: &str,
        cwd: &Path,
        cmd: &str,
        env: &[(String, String)],
    ) -> Result<(), SessionError>;

    /// Kill a session. Tolerates a session that is already gone.
    async fn kill(&self, name: &str) -> Result<(), SessionError>;

    /// Check whether a session is alive.
    async fn is_alive(&self, name: &str) -> Result<bool, SessionError>;

    /// Capture the last `lines` lines of session output.
    async fn capture_output(&self, name: &str, lines: u32) -> Result<String, SessionError>;
}
