//! Fatal-condition specs
//!
//! Exactly two conditions exit non-zero: a missing project root and an
//! unresolvable agent script.

use crate::prelude::*;

#[test]
fn missing_project_root_is_fatal() {
    let project = Project::empty();
    run(project.nup().env("PROJECT_ROOT", "/nonexistent/project/root"))
        .fails()
        .stderr_has("error:")
        .stderr_has("project directory does not exist");
}

#[test]
fn unresolvable_script_is_fatal() {
    let project = Project::empty();
    run(&mut project.nup())
        .fails()
        .stderr_has("error:")
        .stderr_has("could not locate run_ui_agent_https.py");
}

#[test]
fn script_inside_venv_does_not_count() {
    let project = Project::empty();
    project.file("venv/lib/run_ui_agent_https.py", STUB_AGENT);

    run(&mut project.nup())
        .fails()
        .stderr_has("could not locate run_ui_agent_https.py");
}
