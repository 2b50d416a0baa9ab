//! Test environment for isolated Sweep runs.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// Result of running a Sweep CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }

    /// Parse stdout as NDJSON
    pub fn json_events(&self) -> Vec<serde_json::Value> {
        self.stdout
            .lines()
            .filter(|l| !l.trim().is_empty())
            .map(|l| {
                serde_json::from_str(l)
                    .unwrap_or_else(|e| panic!("invalid NDJSON line {:?}: {}", l, e))
            })
            .collect()
    }
}

/// Isolated sweep root with its own user config location.
///
/// The user config path points into a separate temp directory, so a
/// developer's own `~/.config/sweep/config.toml` never leaks into tests.
pub struct TestEnv {
    pub root: TempDir,
    pub config_home: TempDir,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            root: TempDir::new().expect("Failed to create root temp dir"),
            config_home: TempDir::new().expect("Failed to create config temp dir"),
        }
    }

    /// Get path relative to the sweep root
    pub fn path(&self, relative: &str) -> PathBuf {
        self.root.path().join(relative)
    }

    /// Path of the isolated user config file (not created by default)
    pub fn user_config_path(&self) -> PathBuf {
        self.config_home.path().join("config.toml")
    }

    /// Write a file below the root, creating parent directories
    pub fn write_file(&self, relative: &str, content: &str) {
        let full_path = self.path(relative);
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create directories");
        }
        std::fs::write(&full_path, content).expect("Failed to write file");
    }

    /// Write `<root>/sweep.toml`
    pub fn write_config(&self, toml: &str) {
        self.write_file("sweep.toml", toml);
    }

    pub fn exists(&self, relative: &str) -> bool {
        self.path(relative).symlink_metadata().is_ok()
    }

    /// Run sweep with the root as working directory
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        self.run_from_with_env(self.root.path(), args, env_vars)
    }

    pub fn run_from_with_env(
        &self,
        cwd: &Path,
        args: &[&str],
        env_vars: &[(&str, &str)],
    ) -> TestResult {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_sweep"));
        cmd.current_dir(cwd)
            .args(args)
            .env_remove("SWEEP_ROOT")
            .env_remove("SWEEP_ON_FAILURE")
            .env_remove("SWEEP_COLOR")
            .env_remove("SWEEP_LOG_LEVEL")
            .env("SWEEP_USER_CONFIG_PATH", self.user_config_path())
            .env("SWEEP_NO_COLOR", "1");

        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("Failed to execute sweep");
        output_to_result(output)
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

fn output_to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}

/// Manifest config for the a.txt / b.txt / c/ scenario
pub const ABC_MANIFEST: &str = r#"
[[manifest]]
path = "a.txt"
kind = "file"

[[manifest]]
path = "b.txt"
kind = "file"

[[manifest]]
path = "c"
kind = "directory"
"#;
