// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake session adapter for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use super::{SessionAdapter, SessionError};
use async_trait::async_trait;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard};

/// Recorded session call
#[derive(Debug, Clone, PartialEq)]
pub enum SessionCall {
    Spawn {
        name: String,
        cwd: PathBuf,
        cmd: String,
        env: Vec<(String, String)>,
    },
    Kill {
        name: String,
    },
    IsAlive {
        name: String,
    },
    CaptureOutput {
        name: String,
        lines: u32,
    },
}

#[derive(Debug, Clone)]
struct FakeSession {
    alive: bool,
    output: Vec<String>,
}

#[derive(Default)]
struct FakeSessionState {
    sessions: HashMap<String, FakeSession>,
    calls: Vec<SessionCall>,
}

/// Fake session adapter for testing
#[derive(Clone, Default)]
pub struct FakeSessionAdapter {
    inner: Arc<Mutex<FakeSessionState>>,
}

impl FakeSessionAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, FakeSessionState> {
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Get all recorded calls
    pub fn calls(&self) -> Vec<SessionCall> {
        self.lock().calls.clone()
    }

    /// Set session output (for capture tests)
    pub fn set_output(&self, name: &str, output: Vec<String>) {
        if let Some(session) = self.lock().sessions.get_mut(name) {
            session.output = output;
        }
    }

    /// Add a pre-existing session by name (for liveness checks)
    pub fn add_session(&self, name: &str, alive: bool) {
        self.lock().sessions.insert(
            name.to_string(),
            FakeSession {
                alive,
                output: Vec::new(),
            },
        );
    }
}

#[async_trait]
impl SessionAdapter for FakeSessionAdapter {
    async fn spawn(
        &self,
        name: &str,
        cwd: &Path,
        cmd: &str,
        env: &[(String, String)],
    ) -> Result<(), SessionError> {
        let mut inner = self.lock();

        inner.calls.push(SessionCall::Spawn {
            name: name.to_string(),
            cwd: cwd.to_path_buf(),
            cmd: cmd.to_string(),
            env: env.to_vec(),
        });

        // Same replace-on-spawn semantics as the tmux adapter
        inner.sessions.insert(
            name.to_string(),
            FakeSession {
                alive: true,
                output: Vec::new(),
            },
        );

        Ok(())
    }

    async fn kill(&self, name: &str) -> Result<(), SessionError> {
        let mut inner = self.lock();

        inner.calls.push(SessionCall::Kill {
            name: name.to_string(),
        });

        if let Some(session) = inner.sessions.get_mut(name) {
            session.alive = false;
        }

        Ok(())
    }

    async fn is_alive(&self, name: &str) -> Result<bool, SessionError> {
        let mut inner = self.lock();

        inner.calls.push(SessionCall::IsAlive {
            name: name.to_string(),
        });

        match inner.sessions.get(name) {
            Some(session) => Ok(session.alive),
            None => Ok(false),
        }
    }

    async fn capture_output(&self, name: &str, lines: u32) -> Result<String, SessionError> {
        let mut inner = self.lock();

        inner.calls.push(SessionCall::CaptureOutput {
            name: name.to_string(),
            lines,
        });

        match inner.sessions.get(name) {
            Some(session) => {
                let start = session.output.len().saturating_sub(lines as usize);
                Ok(session.output[start..].join("\n"))
            }
            None => Err(SessionError::NotFound(name.to_string())),
        }
    }
}

#[cfg(test)]
#[path = "fake_tests.rs"]
mod tests;
