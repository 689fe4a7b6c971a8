// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! nup-core: Pure launcher logic for the nup CLI — configuration
//! resolution, `.env` parsing, and target script location. All raw
//! environment access lives in the CLI crate; this one stays pure.

pub mod config;
pub mod envfile;
pub mod error;
pub mod script;

pub use config::{AgentCommand, ConfigOverrides, LaunchConfig};
pub use error::LaunchError;
pub use script::resolve_script;
