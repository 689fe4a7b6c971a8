// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! Adapters for external I/O: tmux sessions, port-reclamation tools, and
//! the HTTP health probes.

mod env;
pub mod ports;
pub mod probe;
pub mod session;
pub mod subprocess;

pub use ports::{select_reclaimer, FuserReclaimer, LsofReclaimer, PortError, PortReclaimer};
pub use probe::{probe_bridge, probe_ui, ProbeReport};
pub use session::{SessionAdapter, SessionError, TmuxAdapter};

pub use env::probe_delay;

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
pub use session::{FakeSessionAdapter, SessionCall};
