//! Foreground-mode specs
//!
//! With tmux mode off the launcher replaces itself with the agent
//! command; the stub agent echoes its arguments and exits 0.

use crate::prelude::*;

#[test]
fn foreground_flag_execs_the_agent_command() {
    let project = Project::with_script();

    run(project
        .nup()
        .arg("--foreground")
        .args(["--port", &free_port(), "--ui-port", &free_port()]))
    .passes()
    .stdout_has("stub agent")
    .stdout_has("--id myagent")
    .stdout_has("--registry https://chat.nanda-registry.com:6900");
}

#[test]
fn use_tmux_env_var_selects_foreground_mode() {
    let project = Project::with_script();

    run(project
        .nup()
        .env("USE_TMUX", "0")
        .args(["--port", &free_port(), "--ui-port", &free_port()]))
    .passes()
    .stdout_has("stub agent");
}

#[test]
fn env_file_values_reach_the_agent() {
    let project = Project::with_script();
    project.file(".env", "GREETING=hello-from-dotenv\n# comment line\n");

    run(project
        .nup()
        .arg("--foreground")
        .args(["--port", &free_port(), "--ui-port", &free_port()]))
    .passes()
    .stdout_has("loaded 1 variables from .env")
    .stdout_has("greeting=hello-from-dotenv");
}

#[test]
fn flag_overrides_win_over_environment() {
    let project = Project::with_script();

    run(project
        .nup()
        .env("AGENT_ID", "from-env")
        .arg("--foreground")
        .args(["--id", "from-flag"])
        .args(["--port", &free_port(), "--ui-port", &free_port()]))
    .passes()
    .stdout_has("--id from-flag");
}

#[test]
fn missing_venv_degrades_to_warning() {
    let project = Project::with_script();

    run(project
        .nup()
        .arg("--foreground")
        .args(["--port", &free_port(), "--ui-port", &free_port()]))
    .passes()
    .stdout_has("warn: no virtualenv found");
}
