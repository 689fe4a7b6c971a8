// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Target script resolution.
//!
//! Checks a short ordered list of candidate locations first, then falls
//! back to a recursive walk of the project root that skips virtualenv
//! and vendored directories. First match wins.

use std::path::{Path, PathBuf};

/// File name of the agent entry point.
pub const SCRIPT_NAME: &str = "run_ui_agent_https.py";

/// Candidate locations relative to the project root, in priority order.
pub const CANDIDATE_PATHS: [&str; 3] = [
    "agents2/run_ui_agent_https.py",
    "agents1/run_ui_agent_https.py",
    "run_ui_agent_https.py",
];

/// Directories the fallback walk never descends into.
const SKIP_DIRS: [&str; 6] = ["venv", ".venv", "env", "node_modules", ".git", "__pycache__"];

/// Locate the agent script under `root`. Returns a path relative to
/// `root` when found via a candidate, or the walk result otherwise.
pub fn resolve_script(root: &Path) -> Option<PathBuf> {
    for candidate in CANDIDATE_PATHS {
        let path = root.join(candidate);
        if path.is_file() {
            return Some(PathBuf::from(candidate));
        }
    }
    walk(root, root)
}

/// Depth-first search for [`SCRIPT_NAME`], entries visited in name order
/// so the result is deterministic. Returns paths relative to `root`.
fn walk(root: &Path, dir: &Path) -> Option<PathBuf> {
    let entries = std::fs::read_dir(dir).ok()?;
    let mut paths: Vec<PathBuf> = entries.filter_map(|e| e.ok().map(|e| e.path())).collect();
    paths.sort();

    for path in &paths {
        if path.is_file() && path.file_name().is_some_and(|n| n == SCRIPT_NAME) {
            return path.strip_prefix(root).map(Path::to_path_buf).ok();
        }
    }
    for path in &paths {
        if !path.is_dir() {
            continue;
        }
        let skip = path
            .file_name()
            .and_then(|n| n.to_str())
            .is_some_and(|n| SKIP_DIRS.contains(&n));
        if skip {
            continue;
        }
        if let Some(found) = walk(root, path) {
            return Some(found);
        }
    }
    None
}

#[cfg(test)]
#[path = "script_tests.rs"]
mod tests;
