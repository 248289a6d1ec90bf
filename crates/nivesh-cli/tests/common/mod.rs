use std::process::{Command, Output};

/// Get live-test coordinates from the environment.
/// Returns None if not set, causing tests to be skipped.
pub fn live_api() -> Option<(String, String, String)> {
    let base_url = std::env::var("NIVESH_TEST_BASE_URL").ok()?;
    let boid = std::env::var("NIVESH_TEST_BOID").ok()?;
    let password = std::env::var("NIVESH_TEST_PASSWORD").ok()?;
    Some((base_url, boid, password))
}

/// Run the CLI binary against the given API coordinates.
pub fn run_cli_with_api(args: &[&str], base_url: &str, boid: &str, password: &str) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_nivesh"));
    cmd.args(args);
    cmd.env("BASE_URL", base_url);
    cmd.env("LOGIN_BOID", boid);
    cmd.env("LOGIN_PASSWORD", password);
    cmd.output().expect("Failed to execute CLI")
}
