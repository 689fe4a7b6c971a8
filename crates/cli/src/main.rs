// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! nup - NANDA UI-agent launcher

mod color;
mod commands;
mod env;
mod report;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use nup_adapters::TmuxAdapter;
use nup_core::{ConfigOverrides, LaunchConfig};

#[derive(Parser)]
#[command(
    name = "nup",
    version,
    about = "Launch the NANDA UI agent (tmux session or foreground)"
)]
struct Cli {
    /// Agent identifier (env: AGENT_ID)
    #[arg(long = "id", global = true)]
    agent_id: Option<String>,

    /// Agent bridge port (env: PORT)
    #[arg(long, global = true)]
    port: Option<String>,

    /// UI API port (env: UI_PORT)
    #[arg(long, global = true)]
    ui_port: Option<String>,

    /// Registry URL (env: REGISTRY_URL)
    #[arg(long, global = true)]
    registry: Option<String>,

    /// Public URL for the agent bridge (env: PUBLIC_URL)
    #[arg(long, global = true)]
    public_url: Option<String>,

    /// Project root containing the agent checkout (env: PROJECT_ROOT)
    #[arg(long, global = true)]
    root: Option<PathBuf>,

    /// Run in the foreground instead of a tmux session
    #[arg(long)]
    foreground: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Report whether the agent session is running
    Status,
    /// Print recent output from the agent session
    Logs {
        /// Number of lines to capture
        #[arg(short = 'n', long, default_value_t = 40)]
        lines: u32,
    },
    /// Stop the agent session
    Down,
}

impl Cli {
    /// Configuration layer supplied by the flags.
    fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            agent_id: self.agent_id.clone(),
            bridge_port: self.port.clone(),
            ui_port: self.ui_port.clone(),
            registry_url: self.registry.clone(),
            public_url: self.public_url.clone(),
            use_tmux: self.foreground.then_some(false),
            project_root: self.root.clone(),
            python_bin: None,
        }
    }
}

#[tokio::main]
async fn main() {
    init_tracing();

    if let Err(e) = run().await {
        report::error(&format_error(&e));
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    // Flags win over environment, environment wins over defaults.
    let config = LaunchConfig::from_overrides(cli.overrides().or(env::overrides()));
    tracing::debug!(
        agent_id = %config.agent_id,
        use_tmux = config.use_tmux,
        root = %config.project_root.display(),
        "configuration resolved"
    );
    let adapter = TmuxAdapter::new();

    match cli.command {
        None => commands::up::handle(&adapter, &config).await,
        Some(Commands::Status) => commands::status::handle(&adapter, &config).await,
        Some(Commands::Logs { lines }) => commands::logs::handle(&adapter, &config, lines).await,
        Some(Commands::Down) => commands::down::handle(&adapter, &config).await,
    }
}

/// Format an anyhow error, deduplicating the chain.
///
/// If the top-level Display already contains the source error text, we skip
/// the "Caused by" chain to avoid noisy duplicate output (common when
/// thiserror variants use `#[error("... {0}")]` with `#[from]`).
/// Otherwise we render the full chain so context isn't lost.
fn format_error(err: &anyhow::Error) -> String {
    let top = err.to_string();

    let chain_redundant = err
        .chain()
        .skip(1)
        .all(|cause| top.contains(&cause.to_string()));

    if chain_redundant {
        return top;
    }

    let mut buf = top;
    for (i, cause) in err.chain().skip(1).enumerate() {
        buf.push_str(&format!("\n\nCaused by:\n    {}: {}", i, cause));
    }
    buf
}

fn init_tracing() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;
