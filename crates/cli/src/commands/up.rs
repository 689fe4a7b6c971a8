// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The launch flow: prepare the environment, free the agent's ports,
//! start the agent (tmux session or foreground exec), then report
//! health-probe outcomes.
//!
//! Only two conditions abort: a missing project root and an
//! unresolvable agent script. Everything else degrades to a warning.

use anyhow::Result;
use std::path::{Path, PathBuf};

use nup_adapters::probe::{self, ProbeReport};
use nup_adapters::{ports, SessionAdapter};
use nup_core::{envfile, resolve_script, AgentCommand, LaunchConfig, LaunchError};

use crate::report;

/// Virtualenv directories checked under the project root, in order.
const VENV_DIRS: [&str; 2] = [".venv", "venv"];

/// Everything the launch needs, computed by the pre-launch steps.
pub struct LaunchPlan {
    /// Absolute project root (the working directory after chdir).
    pub root: PathBuf,
    pub command: AgentCommand,
    /// `.env` pairs plus venv activation variables for the child.
    pub child_env: Vec<(String, String)>,
}

/// Steps 1-5 of the launch: chdir, venv detection, script resolution,
/// `.env` loading, command construction. Synchronous by design — the
/// whole flow is linear.
pub fn prepare(config: &LaunchConfig) -> Result<LaunchPlan, LaunchError> {
    if !config.project_root.is_dir() {
        return Err(LaunchError::ProjectRootMissing(config.project_root.clone()));
    }
    std::env::set_current_dir(&config.project_root)
        .map_err(|_| LaunchError::ProjectRootMissing(config.project_root.clone()))?;
    let root = std::env::current_dir()
        .map_err(|_| LaunchError::ProjectRootMissing(config.project_root.clone()))?;

    let venv = detect_venv(&root);
    match &venv {
        Some(dir) => report::info(&format!("using virtualenv at {}", dir.display())),
        None => report::warn("no virtualenv found, using system python"),
    }

    let script = resolve_script(&root).ok_or_else(|| LaunchError::ScriptNotFound {
        script: nup_core::script::SCRIPT_NAME.to_string(),
        root: root.clone(),
    })?;
    report::info(&format!("agent script: {}", script.display()));

    let mut child_env = Vec::new();
    match envfile::load(&root) {
        Some(pairs) => {
            report::info(&format!("loaded {} variables from .env", pairs.len()));
            for (key, value) in &pairs {
                std::env::set_var(key, value);
            }
            child_env.extend(pairs);
        }
        None => report::info("no .env file, skipping"),
    }

    let venv_bin = venv.as_ref().map(|dir| dir.join("bin"));
    if let Some(dir) = &venv {
        let path = std::env::var("PATH").unwrap_or_default();
        child_env.push((
            "VIRTUAL_ENV".to_string(),
            dir.to_string_lossy().into_owned(),
        ));
        child_env.push((
            "PATH".to_string(),
            format!("{}:{}", dir.join("bin").display(), path),
        ));
    }

    let python = config.interpreter(venv_bin.as_deref());
    let command = config.agent_command(&python, &script);

    Ok(LaunchPlan {
        root,
        command,
        child_env,
    })
}

/// Launch the agent per the resolved configuration.
pub async fn handle<S: SessionAdapter>(adapter: &S, config: &LaunchConfig) -> Result<()> {
    let plan = prepare(config)?;

    free_ports(config).await;

    if config.use_tmux {
        let session = config.session_name();
        match adapter
            .spawn(&session, &plan.root, &plan.command.shell_line(), &plan.child_env)
            .await
        {
            Ok(()) => report::info(&format!(
                "session {} started: {}",
                session,
                plan.command.shell_line()
            )),
            // A failed spawn is reported, not fatal - the health probes
            // below will show the agent never came up.
            Err(e) => report::warn(&format!("failed to start session {}: {}", session, e)),
        }
        verify_health(config).await;
        Ok(())
    } else {
        report::info(&format!("foreground: {}", plan.command.shell_line()));
        exec_foreground(&plan)
    }
}

/// Find the first virtualenv with an activation file under `root`.
fn detect_venv(root: &Path) -> Option<PathBuf> {
    VENV_DIRS
        .iter()
        .map(|dir| root.join(dir))
        .find(|dir| dir.join("bin/activate").is_file())
}

/// Kill whatever is still listening on the bridge and UI ports.
async fn free_ports(config: &LaunchConfig) {
    let Some(reclaimer) = ports::select_reclaimer().await else {
        report::warn("neither lsof nor fuser is available, skipping port cleanup");
        return;
    };
    for port in [&config.bridge_port, &config.ui_port] {
        report::info(&format!("freeing port {} via {}", port, reclaimer.name()));
        if let Err(e) = reclaimer.reclaim(port).await {
            report::warn(&e.to_string());
        }
    }
}

/// Probe both endpoints after the startup delay and report outcomes.
/// Never fails — probe results are diagnostics only.
async fn verify_health(config: &LaunchConfig) {
    tokio::time::sleep(nup_adapters::probe_delay()).await;

    describe(probe::probe_ui(&config.ui_health_url()).await);
    describe(probe::probe_bridge(&config.bridge_url()).await);
}

fn describe(probe: ProbeReport) {
    match &probe.outcome {
        Ok(body) if probe.is_healthy() => report::info(&format!(
            "{} responded at {}: {}",
            probe.target,
            probe.url,
            truncate(body, 200)
        )),
        Ok(_) => report::warn(&format!(
            "{} at {} returned an empty body",
            probe.target, probe.url
        )),
        Err(e) => report::warn(&format!(
            "{} probe failed at {}: {}",
            probe.target, probe.url, e
        )),
    }
}

fn truncate(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

/// Replace the launcher's process image with the agent command.
/// Only returns when exec itself fails.
fn exec_foreground(plan: &LaunchPlan) -> Result<()> {
    use std::os::unix::process::CommandExt;

    let mut cmd = std::process::Command::new(plan.command.program());
    cmd.args(plan.command.args());
    for (key, value) in &plan.child_env {
        cmd.env(key, value);
    }
    let err = cmd.exec();
    Err(anyhow::anyhow!("failed to exec agent command: {}", err))
}

#[cfg(test)]
#[path = "up_tests.rs"]
mod tests;
