//! Error handling coverage for flow construction and execution.

use chainflow::{ChainFlow, Error, FlowConfig, RetryPolicy, StepResult};
use chainflow_steps::{FnStep, Noop};

#[test]
fn test_step_failed_display_and_retryability() {
    let err = Error::step_failed("load", "disk busy", true);
    assert_eq!(err.to_string(), "Step 'load' failed: disk busy");
    assert!(err.is_retryable());
}

#[test]
fn test_duplicate_ids_are_not_retryable() {
    let flow = ChainFlow::new()
        .with_step(Noop::new("same"))
        .with_step(Noop::new("same"));
    let err = flow.execute().unwrap_err();
    assert!(!err.is_retryable());
    assert_eq!(err.to_string(), "Duplicate step: same");
}

#[test]
fn test_invalid_policy_fails_before_steps_run() {
    let flow = ChainFlow::new()
        .with_retry_policy(RetryPolicy::default().with_max_attempts(0))
        .with_step(FnStep::new("boom", |_ctx: &mut chainflow::FlowContext| {
            unreachable!("step must not run when validation fails")
        }));
    let err = flow.execute().unwrap_err();
    let Error::Validation { field, .. } = err else {
        unreachable!("Expected Validation error");
    };
    assert_eq!(field.as_deref(), Some("max_attempts"));
}

#[test]
fn test_failure_message_kept_in_record() {
    let flow = ChainFlow::new().with_step(FnStep::new(
        "explode",
        |_ctx: &mut chainflow::FlowContext| StepResult::failed("out of cheese"),
    ));
    let report = flow.execute().unwrap();
    let failed = report.failed_step().expect("a failed record");
    let Some(StepResult::Failed { error, retryable }) = &failed.result else {
        unreachable!("Expected Failed result");
    };
    assert_eq!(error, "out of cheese");
    assert!(!retryable);
}

#[test]
fn test_config_error_display() {
    let err = FlowConfig::from_toml_str("steps = 3").unwrap_err();
    assert!(err.to_string().starts_with("Configuration error: invalid flow definition"));
}
