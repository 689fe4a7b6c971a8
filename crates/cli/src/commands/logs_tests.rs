// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use nup_adapters::{FakeSessionAdapter, SessionCall};
use nup_core::ConfigOverrides;

#[tokio::test]
async fn logs_capture_requested_line_count() {
    let adapter = FakeSessionAdapter::new();
    adapter.add_session("agent_myagent", true);
    adapter.set_output("agent_myagent", vec!["starting".to_string()]);
    let config = LaunchConfig::from_overrides(ConfigOverrides::default());

    handle(&adapter, &config, 25).await.unwrap();

    assert_eq!(
        adapter.calls(),
        vec![SessionCall::CaptureOutput {
            name: "agent_myagent".to_string(),
            lines: 25
        }]
    );
}

#[tokio::test]
async fn logs_of_missing_session_degrade_to_warning() {
    let adapter = FakeSessionAdapter::new();
    let config = LaunchConfig::from_overrides(ConfigOverrides::default());

    // Missing session is a warning, not a failure.
    assert!(handle(&adapter, &config, 40).await.is_ok());
}
