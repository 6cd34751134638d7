//! The `chainflow` binary, run as a subprocess.

use std::process::{Command, Output};

use serde_json::Value;

use crate::common::TestHarness;

const FAILING_FLOW: &str = r#"
name = "needs-token"

[[steps]]
kind = "require"
id = "check-token"
key = "token"
"#;

const PASSING_FLOW: &str = r#"
name = "from-env"

[[steps]]
kind = "set"
id = "greeting"
key = "greeting"
value = "hello"
"#;

/// A command for the binary with no flow file inherited from the environment.
fn chainflow() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_chainflow"));
    cmd.env_remove("CHAINFLOW_CONFIG").env_remove("RUST_LOG");
    cmd
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).expect("stdout is UTF-8")
}

#[test]
fn test_no_arguments_runs_empty_flow() {
    let output = chainflow().output().expect("run chainflow");

    assert!(output.status.success());
    assert_eq!(
        stdout(&output).trim(),
        "chainflow: completed (0 step(s) executed)"
    );
}

#[test]
fn test_failing_flow_exits_non_zero() {
    let harness = TestHarness::new();
    let path = harness.write_flow("failing.toml", FAILING_FLOW);

    let output = chainflow()
        .arg("--config")
        .arg(&path)
        .output()
        .expect("run chainflow");

    assert!(!output.status.success());
    assert!(stdout(&output).starts_with("needs-token: failed"));
}

#[test]
fn test_json_report_on_stdout() {
    let harness = TestHarness::new();
    let path = harness.write_flow("failing.toml", FAILING_FLOW);

    let output = chainflow()
        .arg("--config")
        .arg(&path)
        .arg("--json")
        .output()
        .expect("run chainflow");

    assert!(!output.status.success());
    let report: Value = serde_json::from_str(&stdout(&output)).expect("stdout is JSON");
    assert_eq!(report["name"], "needs-token");
    assert_eq!(report["state"], "failed");
    assert_eq!(report["records"][0]["step_id"], "check-token");
}

#[test]
fn test_config_path_from_environment() {
    let harness = TestHarness::new();
    let path = harness.write_flow("from-env.toml", PASSING_FLOW);

    let output = chainflow()
        .env("CHAINFLOW_CONFIG", &path)
        .output()
        .expect("run chainflow");

    assert!(output.status.success());
    assert_eq!(
        stdout(&output).trim(),
        "from-env: completed (1 step(s) executed)"
    );
}

#[test]
fn test_missing_flow_file_exits_non_zero() {
    let harness = TestHarness::new();

    let output = chainflow()
        .arg("--config")
        .arg(harness.dir.path().join("absent.toml"))
        .output()
        .expect("run chainflow");

    assert!(!output.status.success());
    assert!(stdout(&output).is_empty());
}
