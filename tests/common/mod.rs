//! Shared testing utilities for courseplan CLI tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Isolated working root for CLI and library exercises.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
}

#[allow(dead_code)]
impl TestContext {
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        Self { root }
    }

    pub fn root(&self) -> &Path {
        self.root.path()
    }

    /// Build a command for the compiled `courseplan` binary running inside the root.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("courseplan").expect("Failed to locate courseplan binary");
        cmd.current_dir(self.root()).env_remove("RUST_LOG");
        cmd
    }

    /// Write `courses.json` at the root.
    pub fn write_catalog(&self, content: &str) {
        fs::write(self.root().join("courses.json"), content).expect("Failed to write catalog");
    }

    pub fn write_config(&self, content: &str) {
        fs::write(self.root().join("courseplan.toml"), content).expect("Failed to write config");
    }

    pub fn enrollment_path(&self, user: &str) -> PathBuf {
        self.root().join(format!("{}_enrollments.json", user))
    }

    /// Enrollment list for `user` as stored on disk.
    pub fn read_enrollments(&self, user: &str) -> Vec<String> {
        let content =
            fs::read_to_string(self.enrollment_path(user)).expect("Failed to read enrollments");
        serde_json::from_str(&content).expect("Enrollment file is not a JSON string array")
    }
}

pub const CYCLIC_CATALOG: &str = r#"{
  "Intro": {"prerequisites": [], "description": "Start here"},
  "A": {"prerequisites": ["Intro", "B"], "description": "Course A"},
  "B": {"prerequisites": ["A"], "description": "Course B"}
}"#;

pub const DANGLING_CATALOG: &str = r#"{
  "Python Basics": {"prerequisites": [], "description": "Intro to Python"},
  "Machine Learning": {"prerequisites": ["Python Basics", "Statistics"], "description": "ML"}
}"#;
