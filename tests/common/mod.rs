#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};
use tempfile::TempDir;

/// Helper struct to run resolv commands against an isolated home directory
pub struct ResolvTest {
    pub temp_dir: TempDir,
}

impl ResolvTest {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        ResolvTest { temp_dir }
    }

    pub fn home(&self) -> PathBuf {
        self.temp_dir.path().join("home")
    }

    pub fn run(&self, args: &[&str]) -> Output {
        Command::new(env!("CARGO_BIN_EXE_resolv"))
            .args(args)
            .current_dir(self.temp_dir.path())
            .env("RESOLV_HOME", self.home())
            .env_remove("RESOLV_LOG")
            .env("NO_COLOR", "1")
            .output()
            .expect("Failed to execute resolv command")
    }

    pub fn run_success(&self, args: &[&str]) -> String {
        let output = self.run(args);
        if !output.status.success() {
            panic!(
                "Command {:?} failed with status {:?}\nstdout: {}\nstderr: {}",
                args,
                output.status,
                String::from_utf8_lossy(&output.stdout),
                String::from_utf8_lossy(&output.stderr)
            );
        }
        String::from_utf8_lossy(&output.stdout).to_string()
    }

    /// Run a command that must fail; returns (stdout, stderr)
    pub fn run_failure(&self, args: &[&str]) -> (String, String) {
        let output = self.run(args);
        assert!(
            !output.status.success(),
            "Expected command {:?} to fail, but it succeeded",
            args
        );
        (
            String::from_utf8_lossy(&output.stdout).to_string(),
            String::from_utf8_lossy(&output.stderr).to_string(),
        )
    }

    pub fn run_json(&self, args: &[&str]) -> serde_json::Value {
        let stdout = self.run_success(args);
        serde_json::from_str(&stdout).expect("Failed to parse JSON output")
    }

    pub fn login(&self) {
        self.run_success(&[
            "login",
            "--email",
            "test@user.com",
            "--password",
            "password123",
        ]);
    }

    pub fn session_file(&self) -> PathBuf {
        self.home().join("session.json")
    }

    pub fn read_session(&self) -> Option<String> {
        fs::read_to_string(self.session_file()).ok()
    }

    pub fn write_config(&self, content: &str) {
        fs::create_dir_all(self.home()).expect("Failed to create home directory");
        fs::write(self.home().join("config.yaml"), content).expect("Failed to write config file");
    }
}
