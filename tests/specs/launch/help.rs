//! Help output specs

use crate::prelude::*;

#[test]
fn help_lists_launcher_surface() {
    let project = Project::empty();
    run(project.nup().arg("--help"))
        .passes()
        .stdout_has("Launch the NANDA UI agent")
        .stdout_has("status")
        .stdout_has("logs")
        .stdout_has("down")
        .stdout_has("--foreground");
}

#[test]
fn version_flag_works() {
    let project = Project::empty();
    run(project.nup().arg("--version")).passes().stdout_has("nup");
}
