//! TestWorld pattern for declarative integration test setup.
//!
//! Every world owns a temp directory with its own config file, so tests never
//! read the user's config or touch the real clipboard.

use anyhow::Result;
use assert_cmd::Command;
use serde_json::Value;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crate::fixtures::SampleFiles;

const ISOLATED_CONFIG: &str = "[clipboard]\nbackend = \"none\"\n";

/// Declarative test environment builder.
///
/// # Example
/// ```no_run
/// use inboxlens_testing::TestWorld;
/// use inboxlens_testing::fixtures::BILLING_REFUND;
///
/// let world = TestWorld::new();
/// let payload = world.sample(BILLING_REFUND).unwrap();
///
/// let result = world.run(&["show", payload.to_str().unwrap()]).unwrap();
/// assert!(result.success());
/// ```
pub struct TestWorld {
    temp_dir: TempDir,
    config_path: PathBuf,
    env_vars: HashMap<String, String>,
    samples: SampleFiles,
}

impl Default for TestWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl TestWorld {
    /// Create a new isolated test environment with the clipboard disabled.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let config_path = temp_dir.path().join("config.toml");
        std::fs::write(&config_path, ISOLATED_CONFIG).expect("Failed to write config");

        Self {
            temp_dir,
            config_path,
            env_vars: HashMap::new(),
            samples: SampleFiles::new(),
        }
    }

    /// Replace the config file contents.
    pub fn with_config(self, contents: &str) -> Self {
        std::fs::write(&self.config_path, contents).expect("Failed to write config");
        self
    }

    /// Set an environment variable for commands run in this world.
    pub fn with_env(mut self, key: &str, value: &str) -> Self {
        self.env_vars.insert(key.to_string(), value.to_string());
        self
    }

    pub fn temp_dir(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Copy a sample payload into the world and return its path.
    pub fn sample(&self, sample_name: &str) -> Result<PathBuf> {
        let dest = self.temp_dir.path().join(sample_name);
        self.samples.copy_to(sample_name, &dest)?;
        Ok(dest)
    }

    /// Write a payload file from raw text.
    pub fn write_payload(&self, name: &str, contents: &str) -> Result<PathBuf> {
        let dest = self.temp_dir.path().join(name);
        std::fs::write(&dest, contents)?;
        Ok(dest)
    }

    /// Write a payload file from a JSON value.
    pub fn write_json(&self, name: &str, value: &Value) -> Result<PathBuf> {
        self.write_payload(name, &serde_json::to_string_pretty(value)?)
    }

    /// Point a command at this world's config, directory and environment.
    pub fn configure_command<'a>(&self, cmd: &'a mut Command) -> &'a mut Command {
        cmd.arg("--config").arg(&self.config_path);
        cmd.current_dir(self.temp_dir.path());

        cmd.env_remove("RUST_LOG")
            .env_remove("INBOXLENS_CONFIG")
            .env("NO_COLOR", "1");

        for (key, value) in &self.env_vars {
            cmd.env(key, value);
        }

        cmd
    }

    /// Execute the CLI with the given arguments.
    ///
    /// Stdin is closed and empty, so commands without a payload argument
    /// resolve to the default record.
    pub fn run(&self, args: &[&str]) -> Result<CliResult> {
        self.execute(args, None)
    }

    /// Execute the CLI with `input` piped to stdin.
    pub fn run_with_stdin(&self, args: &[&str], input: &str) -> Result<CliResult> {
        self.execute(args, Some(input))
    }

    #[allow(deprecated)]
    fn execute(&self, args: &[&str], input: Option<&str>) -> Result<CliResult> {
        let mut cmd = Command::cargo_bin("inboxlens")
            .map_err(|e| anyhow::anyhow!("Failed to find inboxlens binary: {}", e))?;

        self.configure_command(&mut cmd);
        cmd.args(args);

        if let Some(input) = input {
            cmd.write_stdin(input.to_string());
        }

        let output = cmd.output()?;

        Ok(CliResult {
            status: output.status,
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        })
    }
}

/// Result of a CLI command execution.
#[derive(Debug)]
pub struct CliResult {
    pub status: std::process::ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

impl CliResult {
    pub fn success(&self) -> bool {
        self.status.success()
    }

    pub fn code(&self) -> Option<i32> {
        self.status.code()
    }

    /// Parse stdout as JSON.
    pub fn json(&self) -> Result<Value> {
        Ok(serde_json::from_str(&self.stdout)?)
    }

    pub fn stdout(&self) -> &str {
        &self.stdout
    }

    pub fn stderr(&self) -> &str {
        &self.stderr
    }
}
