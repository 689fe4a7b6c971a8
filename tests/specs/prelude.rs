//! Test helpers for behavioral specifications.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic, dead_code)]

use assert_cmd::Command;
use std::path::Path;
use tempfile::TempDir;

/// Launcher configuration variables cleared for hermetic runs.
const CONFIG_VARS: [&str; 8] = [
    "AGENT_ID",
    "PORT",
    "UI_PORT",
    "REGISTRY_URL",
    "PUBLIC_URL",
    "USE_TMUX",
    "PROJECT_ROOT",
    "PYTHON_BIN",
];

/// A stub agent script runnable with `PYTHON_BIN=sh`. Echoes its
/// arguments and any `.env`-provided greeting, then exits cleanly.
pub const STUB_AGENT: &str = "echo \"stub agent $@\"\n\
    if [ -n \"$GREETING\" ]; then echo \"greeting=$GREETING\"; fi\n\
    exit 0\n";

/// Temporary project-root fixture.
pub struct Project {
    dir: TempDir,
}

impl Project {
    /// Empty project root (no agent script).
    pub fn empty() -> Self {
        Self {
            dir: tempfile::tempdir().unwrap(),
        }
    }

    /// Project root with the stub agent at the first candidate location.
    pub fn with_script() -> Self {
        let project = Self::empty();
        project.file("agents2/run_ui_agent_https.py", STUB_AGENT);
        project
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write a file relative to the project root, creating parents.
    pub fn file(&self, rel: &str, content: &str) {
        let path = self.dir.path().join(rel);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(path, content).unwrap();
    }

    /// A nup command scoped to this project: hermetic environment, no
    /// probe delay, fast probe timeout, stub interpreter, no color.
    pub fn nup(&self) -> Command {
        let mut cmd = Command::cargo_bin("nup").unwrap();
        for var in CONFIG_VARS {
            cmd.env_remove(var);
        }
        cmd.env("PROJECT_ROOT", self.dir.path())
            .env("PYTHON_BIN", "sh")
            .env("NUP_PROBE_DELAY_MS", "0")
            .env("NUP_PROBE_TIMEOUT_MS", "200")
            .env("NO_COLOR", "1");
        cmd
    }
}

/// Outcome of one nup invocation, with assertion helpers in the style
/// of the specs DSL.
pub struct RunResult {
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl RunResult {
    pub fn passes(self) -> Self {
        assert_eq!(
            self.code,
            Some(0),
            "expected success, got {:?}\nstdout:\n{}\nstderr:\n{}",
            self.code,
            self.stdout,
            self.stderr
        );
        self
    }

    pub fn fails(self) -> Self {
        assert_ne!(
            self.code,
            Some(0),
            "expected failure\nstdout:\n{}\nstderr:\n{}",
            self.stdout,
            self.stderr
        );
        self
    }

    pub fn stdout_has(self, needle: &str) -> Self {
        assert!(
            self.stdout.contains(needle),
            "stdout missing {:?}\nstdout:\n{}\nstderr:\n{}",
            needle,
            self.stdout,
            self.stderr
        );
        self
    }

    pub fn stderr_has(self, needle: &str) -> Self {
        assert!(
            self.stderr.contains(needle),
            "stderr missing {:?}\nstdout:\n{}\nstderr:\n{}",
            needle,
            self.stdout,
            self.stderr
        );
        self
    }
}

/// Run a nup command and capture its outcome.
pub fn run(cmd: &mut Command) -> RunResult {
    let output = cmd.output().unwrap();
    RunResult {
        code: output.status.code(),
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
    }
}

/// A TCP port with no listener, as a string.
pub fn free_port() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    port.to_string()
}
