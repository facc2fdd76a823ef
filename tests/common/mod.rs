//! Common test utilities for mac-latest-merge integration tests

#![allow(dead_code)]

use std::path::PathBuf;
use tempfile::TempDir;

/// A temporary directory holding input and output manifests
pub struct TestWorkspace {
    /// Temporary directory
    pub temp: TempDir,
    /// Path to workspace root
    pub path: PathBuf,
}

impl TestWorkspace {
    /// Create a new test workspace
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        Self { temp, path }
    }

    /// Write a file in workspace
    pub fn write_file(&self, path: &str, content: &str) {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }

    /// Read a file from workspace
    pub fn read_file(&self, path: &str) -> String {
        let file_path = self.path.join(path);
        std::fs::read_to_string(&file_path).expect("Failed to read file")
    }

    /// Read a file from workspace and parse it as YAML
    pub fn read_yaml(&self, path: &str) -> serde_yaml::Value {
        serde_yaml::from_str(&self.read_file(path)).expect("Failed to parse YAML")
    }

    /// Check if a file exists in workspace
    pub fn file_exists(&self, path: &str) -> bool {
        self.path.join(path).exists()
    }

    /// Absolute path of a workspace-relative file
    pub fn join(&self, path: &str) -> PathBuf {
        self.path.join(path)
    }
}

impl Default for TestWorkspace {
    fn default() -> Self {
        Self::new()
    }
}

/// Command for the real binary, run from inside the workspace
#[allow(deprecated)]
pub fn merge_cmd(workspace: &TestWorkspace) -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::cargo_bin("mac-latest-merge").expect("binary should build");
    cmd.current_dir(&workspace.path);
    cmd.env_remove("MAC_LATEST_MERGE_LOG");
    cmd
}

/// Intel manifest as electron-builder writes it
pub const INTEL_MANIFEST: &str = r"version: 1.4.2
files:
  - url: MyApp-1.4.2-mac.zip
    sha512: aW50ZWwtemlw
    size: 104857600
  - url: MyApp-1.4.2.dmg
    sha512: aW50ZWwtZG1n
    size: 109051904
path: MyApp-1.4.2-mac.zip
sha512: aW50ZWwtemlw
releaseDate: '2024-01-01T10:00:00.000Z'
";

/// ARM manifest as electron-builder writes it
pub const ARM_MANIFEST: &str = r"version: 1.4.2
files:
  - url: MyApp-1.4.2-arm64-mac.zip
    sha512: YXJtLXppcA==
    size: 99614720
  - url: MyApp-1.4.2-arm64.dmg
    sha512: YXJtLWRtZw==
    size: 103809024
path: MyApp-1.4.2-arm64-mac.zip
sha512: YXJtLXppcA==
releaseDate: '2024-02-15T08:30:00.000Z'
";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_workspace_file_operations() {
        let workspace = TestWorkspace::new();
        workspace.write_file("nested/file.yml", "a: 1\n");
        assert!(workspace.file_exists("nested/file.yml"));
        assert_eq!(workspace.read_file("nested/file.yml"), "a: 1\n");
    }
}
