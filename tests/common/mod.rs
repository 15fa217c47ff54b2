// Shared test helpers for integration tests.
// Used by cli_test.rs and cli_contract.rs.
#![allow(dead_code)]

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::NamedTempFile;

pub const ORIGINAL_CONTENT: &str = "Original Content";

pub fn binary_path() -> PathBuf {
    let path = PathBuf::from(env!("CARGO_BIN_EXE_message-shorthand"));
    assert!(path.exists(), "binary not found at {}", path.display());
    path
}

/// Runs the binary with the given args.
/// Returns (stdout, stderr, exit_code).
pub fn run_hook_args(args: &[&str]) -> (String, String, i32) {
    let output = Command::new(binary_path())
        .args(args)
        .env_remove("MESSAGE_SHORTHAND_LOG")
        .output()
        .expect("failed to execute binary");

    let stdout = String::from_utf8(output.stdout).expect("stdout not valid UTF-8");
    let stderr = String::from_utf8(output.stderr).expect("stderr not valid UTF-8");
    let exit_code = output.status.code().unwrap_or(-1);
    (stdout, stderr, exit_code)
}

/// Runs the binary against a commit message file.
pub fn run_hook(substitutions: &str, commit_msg_file: &Path) -> (String, String, i32) {
    let path = commit_msg_file.to_str().unwrap();
    run_hook_args(&[substitutions, path])
}

pub fn run_hook_with_config(
    substitutions: &str,
    commit_msg_file: &Path,
    config_content: &str,
) -> (String, String, i32) {
    let config = write_temp(config_content);
    let config_path = config.path().to_str().unwrap().to_string();
    let path = commit_msg_file.to_str().unwrap();
    run_hook_args(&["--config", &config_path, substitutions, path])
}

/// Creates a temporary commit message file holding `content`.
pub fn commit_msg_file(content: &str) -> NamedTempFile {
    write_temp(content)
}

pub fn read_file(file: &NamedTempFile) -> String {
    std::fs::read_to_string(file.path()).expect("failed to read commit message file")
}

fn write_temp(content: &str) -> NamedTempFile {
    let mut tmpfile = NamedTempFile::new().expect("failed to create temp file");
    tmpfile
        .write_all(content.as_bytes())
        .expect("failed to write temp file");
    tmpfile
}
