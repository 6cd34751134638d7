//! The construction and `run` contract of `ChainFlow`.

use chainflow::{ChainFlow, FlowState, RetryPolicy};

#[test]
fn test_initialization() {
    let instance = ChainFlow::new();
    assert!(instance.is_empty());
    assert_eq!(instance.len(), 0);
    assert_eq!(instance.retry_policy(), &RetryPolicy::default());
}

#[test]
fn test_run_method() {
    let instance = ChainFlow::new();
    assert!(instance.run());
}

#[test]
fn test_run_is_repeatable() {
    let instance = ChainFlow::new();
    assert!(instance.run());
    assert!(instance.run());
}

#[test]
fn test_execute_fresh_instance() {
    let report = ChainFlow::new().execute().unwrap();
    assert_eq!(report.state, FlowState::Completed);
    assert!(report.failed_step().is_none());
    assert!(report.context.is_empty());
}

#[test]
fn test_debug_lists_steps() {
    let flow = ChainFlow::new()
        .with_name("dbg")
        .with_step(chainflow_steps::Noop::new("only"));
    let rendered = format!("{flow:?}");
    assert!(rendered.contains("dbg"));
    assert!(rendered.contains("only"));
}
