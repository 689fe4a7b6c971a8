//! Health-probe specs
//!
//! Probe outcomes are diagnostics only: both endpoints being dead never
//! changes the exit code.

use crate::prelude::*;
use serial_test::serial;

#[test]
#[serial(tmux)]
fn failed_probes_never_change_exit_code() {
    let project = Project::with_script();
    let agent_id = format!("spec-health-{}", std::process::id());

    // Session mode with dead ports: whether the tmux spawn works or not,
    // the launch reports warnings and exits 0.
    let result = run(project
        .nup()
        .args(["--id", &agent_id])
        .args(["--port", &free_port(), "--ui-port", &free_port()]))
    .passes()
    .stdout_has("probe failed");

    // The bridge probe runs even after the UI probe fails.
    assert!(result.stdout.contains("/a2a"), "stdout:\n{}", result.stdout);

    // Cleanup: drop the session if tmux actually created one.
    run(project.nup().args(["--id", &agent_id]).arg("down")).passes();
}

#[test]
#[serial(tmux)]
fn status_and_down_target_the_derived_session() {
    let project = Project::with_script();

    if !tmux_available() {
        return;
    }

    run(project
        .nup()
        .args(["--id", "spec-status"])
        .args(["--port", &free_port(), "--ui-port", &free_port()]))
    .passes();

    run(project.nup().args(["--id", "spec-status"]).arg("status"))
        .passes()
        .stdout_has("agent_spec-status");

    run(project.nup().args(["--id", "spec-status"]).arg("down"))
        .passes()
        .stdout_has("session agent_spec-status stopped");
}

fn tmux_available() -> bool {
    std::process::Command::new("tmux")
        .arg("-V")
        .output()
        .map(|o| o.status.success())
        .unwrap_or(false)
}
