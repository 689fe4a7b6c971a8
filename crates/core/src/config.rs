// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Launch configuration record.
//!
//! Built once at startup from (defaults ← environment ← CLI flags) and
//! passed by reference to every subsequent step. Ports and URLs are
//! carried as uninterpreted strings: the launcher performs no validation
//! and malformed values flow through to tmux, the agent script, and the
//! probe URLs unchanged.

use std::path::{Path, PathBuf};

pub const DEFAULT_AGENT_ID: &str = "myagent";
pub const DEFAULT_BRIDGE_PORT: &str = "6000";
pub const DEFAULT_UI_PORT: &str = "5100";
pub const DEFAULT_REGISTRY_URL: &str = "https://chat.nanda-registry.com:6900";
pub const DEFAULT_PUBLIC_URL: &str = "https://arch-accurate-hanging-retired.trycloudflare.com";
pub const DEFAULT_PYTHON_BIN: &str = "python3";

/// Partial configuration from one source (CLI flags or environment).
///
/// `None` means "this source says nothing about the field".
#[derive(Clone, Debug, Default)]
pub struct ConfigOverrides {
    pub agent_id: Option<String>,
    pub bridge_port: Option<String>,
    pub ui_port: Option<String>,
    pub registry_url: Option<String>,
    pub public_url: Option<String>,
    pub use_tmux: Option<bool>,
    pub project_root: Option<PathBuf>,
    /// Explicit interpreter; when unset, a detected venv interpreter or
    /// [`DEFAULT_PYTHON_BIN`] is used at launch time.
    pub python_bin: Option<String>,
}

impl ConfigOverrides {
    /// Layer two sources: fields set in `self` win over `other`.
    pub fn or(self, other: ConfigOverrides) -> ConfigOverrides {
        ConfigOverrides {
            agent_id: self.agent_id.or(other.agent_id),
            bridge_port: self.bridge_port.or(other.bridge_port),
            ui_port: self.ui_port.or(other.ui_port),
            registry_url: self.registry_url.or(other.registry_url),
            public_url: self.public_url.or(other.public_url),
            use_tmux: self.use_tmux.or(other.use_tmux),
            project_root: self.project_root.or(other.project_root),
            python_bin: self.python_bin.or(other.python_bin),
        }
    }
}

/// Resolved launcher configuration. Read-only after construction.
#[derive(Clone, Debug, PartialEq)]
pub struct LaunchConfig {
    pub agent_id: String,
    pub bridge_port: String,
    pub ui_port: String,
    pub registry_url: String,
    pub public_url: String,
    pub use_tmux: bool,
    pub project_root: PathBuf,
    pub python_bin: Option<String>,
}

impl LaunchConfig {
    /// Fill unset fields with the hard-coded defaults.
    pub fn from_overrides(o: ConfigOverrides) -> LaunchConfig {
        LaunchConfig {
            agent_id: o.agent_id.unwrap_or_else(|| DEFAULT_AGENT_ID.to_string()),
            bridge_port: o
                .bridge_port
                .unwrap_or_else(|| DEFAULT_BRIDGE_PORT.to_string()),
            ui_port: o.ui_port.unwrap_or_else(|| DEFAULT_UI_PORT.to_string()),
            registry_url: o
                .registry_url
                .unwrap_or_else(|| DEFAULT_REGISTRY_URL.to_string()),
            public_url: o
                .public_url
                .unwrap_or_else(|| DEFAULT_PUBLIC_URL.to_string()),
            use_tmux: o.use_tmux.unwrap_or(true),
            project_root: o.project_root.unwrap_or_else(|| PathBuf::from(".")),
            python_bin: o.python_bin,
        }
    }

    /// Pick the interpreter: explicit override, then a detected venv's
    /// `bin/python3`, then the system default.
    pub fn interpreter(&self, venv_bin: Option<&Path>) -> String {
        if let Some(python) = &self.python_bin {
            return python.clone();
        }
        match venv_bin {
            Some(bin) => bin.join("python3").to_string_lossy().into_owned(),
            None => DEFAULT_PYTHON_BIN.to_string(),
        }
    }

    /// Session name the agent runs under in tmux mode.
    pub fn session_name(&self) -> String {
        format!("agent_{}", self.agent_id)
    }

    /// Build the agent invocation: interpreter, script, and the five
    /// flag/value pairs of the process-invocation contract.
    pub fn agent_command(&self, python: &str, script: &Path) -> AgentCommand {
        AgentCommand {
            program: python.to_string(),
            args: vec![
                script.to_string_lossy().into_owned(),
                "--id".to_string(),
                self.agent_id.clone(),
                "--port".to_string(),
                self.bridge_port.clone(),
                "--registry".to_string(),
                self.registry_url.clone(),
                "--public-url".to_string(),
                self.public_url.clone(),
                "--api-port".to_string(),
                self.ui_port.clone(),
            ],
        }
    }

    /// URL of the UI health endpoint.
    pub fn ui_health_url(&self) -> String {
        format!("http://127.0.0.1:{}/api/health", self.ui_port)
    }

    /// URL of the agent-to-agent bridge endpoint.
    pub fn bridge_url(&self) -> String {
        format!("http://127.0.0.1:{}/a2a", self.bridge_port)
    }
}

/// Parse a boolean-ish environment value. Only explicit negatives
/// disable; anything else (including garbage) leaves tmux mode on.
pub fn parse_flag(value: &str) -> bool {
    !matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "0" | "false" | "no" | "off"
    )
}

/// A fully-built agent invocation.
#[derive(Clone, Debug, PartialEq)]
pub struct AgentCommand {
    program: String,
    args: Vec<String>,
}

impl AgentCommand {
    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// Render as a single shell line for `tmux new-session`.
    pub fn shell_line(&self) -> String {
        let mut parts = Vec::with_capacity(self.args.len() + 1);
        parts.push(shell_quote(&self.program));
        for arg in &self.args {
            parts.push(shell_quote(arg));
        }
        parts.join(" ")
    }
}

/// Quote a single word for POSIX shell. Bare when it only contains
/// characters the shell treats literally; single-quoted otherwise.
fn shell_quote(word: &str) -> String {
    let bare_ok = !word.is_empty()
        && word
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "_-./:=@%+,".contains(c));
    if bare_ok {
        return word.to_string();
    }
    let mut quoted = String::with_capacity(word.len() + 2);
    quoted.push('\'');
    for c in word.chars() {
        if c == '\'' {
            quoted.push_str("'\\''");
        } else {
            quoted.push(c);
        }
    }
    quoted.push('\'');
    quoted
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
