// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fatal launcher errors.
//!
//! Exactly two conditions abort a launch; everything else in the system
//! degrades to a warning and execution continues.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LaunchError {
    #[error("project directory does not exist: {}", .0.display())]
    ProjectRootMissing(PathBuf),
    #[error("could not locate {script} anywhere under {}", .root.display())]
    ScriptNotFound { script: String, root: PathBuf },
}
