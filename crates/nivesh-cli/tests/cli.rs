//! CLI tests that never touch the network.
//!
//! Configuration failures must surface before any request is attempted,
//! naming the specific variable at fault. Each invocation runs with a
//! cleared environment and an empty working directory so no ambient `.env`
//! or exported variable leaks in.

use std::process::{Command, Output};

fn run_isolated(args: &[&str], env: &[(&str, &str)]) -> Output {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_nivesh"));
    cmd.args(args);
    cmd.current_dir(dir.path());
    cmd.env_clear();
    for (name, value) in env {
        cmd.env(name, value);
    }
    cmd.output().expect("Failed to execute CLI")
}

fn stderr_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

#[test]
fn missing_boid_is_named() {
    let output = run_isolated(
        &["auth", "login"],
        &[("BASE_URL", "https://api.example.com/api/v1")],
    );

    assert!(!output.status.success());
    assert!(stderr_of(&output).contains("LOGIN_BOID"));
}

#[test]
fn missing_base_url_is_named() {
    let output = run_isolated(
        &["auth", "login", "--boid", "1301630054368345", "--password", "Test@123"],
        &[],
    );

    assert!(!output.status.success());
    assert!(stderr_of(&output).contains("BASE_URL"));
}

#[test]
fn invalid_base_url_is_rejected() {
    let output = run_isolated(
        &["auth", "login", "--boid", "1301630054368345", "--password", "Test@123"],
        &[("BASE_URL", "ftp://api.example.com")],
    );

    assert!(!output.status.success());
    assert!(stderr_of(&output).contains("invalid base URL"));
}

#[test]
fn drip_create_demands_enrollee_configuration() {
    // The DRIP section resolves before login, so this fails fast
    // with the variable name and no network access.
    let output = run_isolated(
        &["drip", "create"],
        &[
            ("BASE_URL", "https://api.example.com/api/v1"),
            ("LOGIN_BOID", "1301630054368345"),
            ("LOGIN_PASSWORD", "Test@123"),
        ],
    );

    assert!(!output.status.success());
    assert!(stderr_of(&output).contains("VAULT_SCHEME"));
}

#[test]
fn malformed_khalti_payload_is_rejected_at_load() {
    let output = run_isolated(
        &["khalti", "initiate"],
        &[
            ("BASE_URL", "https://api.example.com/api/v1"),
            ("LOGIN_BOID", "1301630054368345"),
            ("LOGIN_PASSWORD", "Test@123"),
            ("KHALTI_SIP_PAYLOAD", "{\"amount\": \"lots\"}"),
        ],
    );

    assert!(!output.status.success());
    assert!(stderr_of(&output).contains("KHALTI_SIP_PAYLOAD"));
}
