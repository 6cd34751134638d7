//! Common test utilities for ChainFlow integration tests.

use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};

use chainflow::{FlowContext, StepResult};
use chainflow_steps::FnStep;
use serde_json::json;
use tempfile::TempDir;

/// Test harness holding a scratch directory for flow files.
pub struct TestHarness {
    /// Scratch directory, removed on drop
    pub dir: TempDir,
}

impl TestHarness {
    /// Creates a harness with an empty scratch directory.
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("create temp dir"),
        }
    }

    /// Writes a flow file and returns its path.
    pub fn write_flow(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        std::fs::write(&path, contents).expect("write flow file");
        path
    }
}

impl Default for TestHarness {
    fn default() -> Self {
        Self::new()
    }
}

/// A step that fails with a retryable error until its `succeed_on`-th call.
///
/// Returns the step and a counter of how many times it ran.
pub fn flaky_step(id: &str, succeed_on: u32) -> (FnStep, Arc<AtomicU32>) {
    let calls = Arc::new(AtomicU32::new(0));
    let counter = Arc::clone(&calls);
    let step = FnStep::new(id, move |ctx: &mut FlowContext| {
        let n = counter.fetch_add(1, Ordering::SeqCst) + 1;
        if n >= succeed_on {
            ctx.insert("flaky_calls", json!(n));
            StepResult::Success(json!(n))
        } else {
            StepResult::transient(format!("attempt {n} not ready"))
        }
    });
    (step, calls)
}
