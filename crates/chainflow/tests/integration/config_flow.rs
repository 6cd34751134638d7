//! Flows loaded from TOML files.

use chainflow::{Error, FlowConfig, FlowState, StepId};
use serde_json::json;

use crate::common::TestHarness;

const PIPELINE: &str = r#"
name = "pipeline"

[[steps]]
kind = "set"
id = "source"
key = "source"
value = "inbox"

[[steps]]
kind = "require"
id = "check-source"
key = "source"

[[steps]]
kind = "set"
id = "mark-done"
key = "done"
value = true

[[steps]]
kind = "halt_when"
id = "stop"
key = "done"

[[steps]]
kind = "require"
id = "unreachable"
key = "never-set"
"#;

#[test]
fn test_flow_file_runs_until_halt() {
    let harness = TestHarness::new();
    let path = harness.write_flow("pipeline.toml", PIPELINE);

    let flow = FlowConfig::load(&path).unwrap().build().unwrap();
    let report = flow.execute().unwrap();

    assert!(report.is_success());
    assert_eq!(report.name, "pipeline");
    assert_eq!(report.halted_by, Some(StepId::new("stop")));
    assert_eq!(report.records.len(), 4);
    assert_eq!(report.context.get("source"), Some(&json!("inbox")));
    assert_eq!(
        report.context.output(&StepId::new("check-source")),
        Some(&json!("inbox"))
    );
}

#[test]
fn test_flow_file_failure_reported() {
    let harness = TestHarness::new();
    let path = harness.write_flow(
        "broken.toml",
        r#"
[[steps]]
kind = "require"
id = "needs-token"
key = "token"

[[steps]]
kind = "noop"
id = "after"
"#,
    );

    let flow = FlowConfig::load(&path).unwrap().build().unwrap();
    let report = flow.execute().unwrap();

    assert_eq!(report.state, FlowState::Failed);
    assert_eq!(report.executed_steps(), vec![&StepId::new("needs-token")]);
    assert!(!flow.run());
}

#[test]
fn test_missing_flow_file_is_io_error() {
    let harness = TestHarness::new();
    let err = FlowConfig::load(harness.dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, Error::Io(_)));
}

#[test]
fn test_malformed_flow_file_is_config_error() {
    let harness = TestHarness::new();
    let path = harness.write_flow("bad.toml", "[[steps]\nkind = ");
    let err = FlowConfig::load(&path).unwrap_err();
    assert!(matches!(err, Error::Config { .. }));
}

#[test]
fn test_report_json_contains_records() {
    let harness = TestHarness::new();
    let path = harness.write_flow("pipeline.toml", PIPELINE);
    let report = FlowConfig::load(&path)
        .unwrap()
        .build()
        .unwrap()
        .execute()
        .unwrap();

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["state"], "completed");
    assert_eq!(json["halted_by"], "stop");
    assert_eq!(json["records"].as_array().unwrap().len(), 4);
}
