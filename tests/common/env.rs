//! Test environment builder for isolated dashctl testing.
//!
//! Every run gets its own checkout directory and HOME, with `DASHCTL_*`
//! and platform token variables cleared so the host setup never leaks in.

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

/// Variables removed from every child process
const SCRUBBED_VARS: &[&str] = &[
    "DASHCTL_CONFIG",
    "DASHCTL_PLATFORM",
    "DASHCTL_APP",
    "DASHCTL_TARGET",
    "FLY_API_TOKEN",
    "CI",
    "GITHUB_ACTIONS",
];

/// Result of running a dashctl CLI command
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

    /// Parse stdout as NDJSON events
    pub fn json_events(&self) -> Vec<serde_json::Value> {
        self.stdout
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(|line| {
                serde_json::from_str(line)
                    .unwrap_or_else(|e| panic!("not JSON: {}\n{}\n{}", e, line, self.stdout))
            })
            .collect()
    }
}

/// Isolated checkout plus HOME
pub struct TestEnv {
    /// Checkout root (named so the derived app name is stable)
    pub checkout: PathBuf,
    /// Temporary HOME
    pub home_dir: TempDir,
    _root: TempDir,
    dashctl_bin: PathBuf,
}

impl TestEnv {
    /// Empty checkout named `painel-indicadores`
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp dir");
        let checkout = root.path().join("painel-indicadores");
        std::fs::create_dir_all(&checkout).expect("Failed to create checkout");
        Self {
            checkout,
            home_dir: TempDir::new().expect("Failed to create home dir"),
            _root: root,
            dashctl_bin: PathBuf::from(env!("CARGO_BIN_EXE_dashctl")),
        }
    }

    /// Checkout with a pinned manifest and the default entry point
    pub fn with_dashboard() -> Self {
        let env = Self::new();
        env.write_file("requirements.txt", super::fixtures::PINNED_MANIFEST);
        env.write_file("app/pages/dashboard.py", super::fixtures::DASHBOARD_PY);
        env
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.checkout.join(relative)
    }

    /// Write a file under the checkout
    pub fn write_file(&self, relative: &str, content: &str) {
        let full_path = self.path(relative);
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create directories");
        }
        std::fs::write(&full_path, content).expect("Failed to write file");
    }

    /// Write `dashctl.toml` at the checkout root
    pub fn write_config(&self, toml: &str) {
        self.write_file("dashctl.toml", toml);
    }

    /// Write the user config under the isolated XDG config dir
    pub fn write_user_config(&self, toml: &str) {
        let path = self.home_dir.path().join(".config/dashctl/config.toml");
        std::fs::create_dir_all(path.parent().unwrap()).expect("Failed to create config dir");
        std::fs::write(path, toml).expect("Failed to write user config");
    }

    /// Run dashctl from the checkout root
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    /// Run dashctl from the checkout root with extra env vars
    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        self.run_from_with_env(&self.checkout, args, env_vars)
    }

    pub fn run_from_with_env(
        &self,
        cwd: &Path,
        args: &[&str],
        env_vars: &[(&str, &str)],
    ) -> TestResult {
        let mut cmd = Command::new(&self.dashctl_bin);
        cmd.current_dir(cwd)
            .args(args)
            .env("HOME", self.home_dir.path())
            .env("XDG_CONFIG_HOME", self.home_dir.path().join(".config"))
            .env("NO_COLOR", "1")
            .env("LANG", "C")
            .env_remove("LC_ALL")
            .env_remove("LC_CTYPE");
        for var in SCRUBBED_VARS {
            cmd.env_remove(var);
        }
        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("Failed to execute dashctl");
        output_to_result(output)
    }

    /// Run git in the checkout, panicking on failure
    pub fn git(&self, args: &[&str]) -> String {
        git_in(&self.checkout, args)
    }

    /// Initialise a repo on `main` with a bare `origin`, everything committed and pushed
    pub fn init_git_with_remote(&self) -> PathBuf {
        let remote = self._root.path().join("origin.git");
        git_in(self._root.path(), &["init", "--bare", "-q", remote.to_str().unwrap()]);

        self.git(&["init", "-q", "-b", "main"]);
        self.git(&["config", "user.email", "ci@example.com"]);
        self.git(&["config", "user.name", "CI"]);
        self.git(&["config", "commit.gpgsign", "false"]);
        self.git(&["remote", "add", "origin", remote.to_str().unwrap()]);
        self.git(&["add", "-A"]);
        self.git(&["commit", "-q", "-m", "initial"]);
        self.git(&["push", "-q", "origin", "main"]);
        remote
    }
}

fn git_in(dir: &Path, args: &[&str]) -> String {
    let output = Command::new("git")
        .current_dir(dir)
        .args(args)
        .env("GIT_CONFIG_NOSYSTEM", "1")
        .output()
        .expect("Failed to execute git");
    assert!(
        output.status.success(),
        "git {:?} failed: {}",
        args,
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8_lossy(&output.stdout).trim().to_string()
}

fn output_to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}
