//! End-to-end tests for the non-interactive commands.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

fn get_regform_binary() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_regform"))
}

/// Run regform inside `dir` with global config lookups pointed into it.
fn run_regform(dir: &Path, args: &[&str]) -> std::io::Result<Output> {
    Command::new(get_regform_binary())
        .args(args)
        .current_dir(dir)
        .env("HOME", dir)
        .env("XDG_CONFIG_HOME", dir.join(".config"))
        .env_remove("REGFORM_QUIET")
        .env_remove("RUST_LOG")
        .output()
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

const VALID_FORM: &str = r#"
fullName: Ada Lovelace
email: ada@example.com
password: "abcdefg1!"
confirmPassword: "abcdefg1!"
phone: "1234567890"
gender: female
terms: true
"#;

#[test]
fn test_check_valid_file_exits_zero() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("form.yaml"), VALID_FORM).unwrap();

    let output = run_regform(tmp.path(), &["check", "form.yaml"]).unwrap();

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    let text = stdout(&output);
    assert!(text.contains("Registration successful"));
    assert!(text.contains("Email: ada@example.com"));
}

#[test]
fn test_check_invalid_flags_exit_one_with_json() {
    let tmp = TempDir::new().unwrap();

    let output = run_regform(
        tmp.path(),
        &[
            "check",
            "--full-name",
            "Ada",
            "--phone",
            "123-456-7890",
            "--format",
            "json",
        ],
    )
    .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let value: serde_json::Value = serde_json::from_str(stdout(&output).trim()).unwrap();
    assert_eq!(value["valid"], false);
    assert_eq!(value["report"]["errors"]["phone"], "10 digit number");
    assert!(value["report"]["errors"].get("fullName").is_none());
}

#[test]
fn test_project_config_changes_rules() {
    let tmp = TempDir::new().unwrap();
    fs::create_dir_all(tmp.path().join(".regform")).unwrap();
    fs::write(
        tmp.path().join(".regform/config.yaml"),
        "phone:\n  pattern: '^[0-9]{3}-[0-9]{3}-[0-9]{4}$'\n",
    )
    .unwrap();
    fs::write(
        tmp.path().join("form.yaml"),
        VALID_FORM.replace("\"1234567890\"", "\"123-456-7890\""),
    )
    .unwrap();

    let output = run_regform(tmp.path(), &["check", "form.yaml"]).unwrap();
    assert!(output.status.success(), "stdout: {}", stdout(&output));
}

#[test]
fn test_missing_explicit_config_fails() {
    let tmp = TempDir::new().unwrap();
    let output = run_regform(tmp.path(), &["--config", "absent.yaml", "strength", "x"]).unwrap();

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Config file not found"));
}

#[test]
fn test_strength_command() {
    let tmp = TempDir::new().unwrap();
    let output = run_regform(tmp.path(), &["strength", "Abcdefg1!"]).unwrap();

    assert!(output.status.success());
    assert!(stdout(&output).contains("Strong"));
}

#[test]
fn test_quiet_check_prints_only_errors() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("form.yaml"), VALID_FORM).unwrap();

    let output = run_regform(tmp.path(), &["--quiet", "check", "form.yaml"]).unwrap();
    assert!(output.status.success());
    assert!(stdout(&output).is_empty());
}

#[test]
fn test_config_command_prints_defaults() {
    let tmp = TempDir::new().unwrap();
    let output = run_regform(tmp.path(), &["config"]).unwrap();

    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.contains("!@#$%^&*"));
    assert!(text.contains("Accept terms"));
}

#[test]
fn test_check_reads_gender_in_any_case() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join("form.yaml"),
        VALID_FORM.replace("gender: female", "gender: F"),
    )
    .unwrap();

    let output = run_regform(tmp.path(), &["check", "form.yaml"]).unwrap();
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
}

#[test]
fn test_terms_flag_overrides_file() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("form.yaml"), VALID_FORM).unwrap();

    let output = run_regform(
        tmp.path(),
        &["check", "form.yaml", "--terms=false", "--format", "json"],
    )
    .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let value: serde_json::Value = serde_json::from_str(stdout(&output).trim()).unwrap();
    assert_eq!(value["report"]["errors"]["terms"], "Accept terms");
}

#[test]
fn test_strength_password_may_start_with_hyphen() {
    let tmp = TempDir::new().unwrap();
    let output = run_regform(tmp.path(), &["strength", "-Abc1!xyz"]).unwrap();

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    assert!(stdout(&output).contains("Strong"));
}
