//! Closure-backed steps.

use std::fmt;

use chainflow_core::{FlowContext, Step, StepId, StepResult};
use serde_json::Value;

type StepFn = dyn Fn(&mut FlowContext) -> StepResult<Value> + Send + Sync;

/// A step backed by a closure.
///
/// # Examples
///
/// ```
/// use chainflow_steps::{FlowContext, FnStep, Step, StepResult};
/// use serde_json::json;
///
/// let double = FnStep::new("double", |ctx: &mut FlowContext| {
///     let n = ctx.get("n").and_then(|v| v.as_i64()).unwrap_or(0);
///     ctx.insert("n", json!(n * 2));
///     StepResult::Success(json!(n * 2))
/// });
///
/// let mut ctx = FlowContext::new();
/// ctx.insert("n", json!(21));
/// assert_eq!(double.execute(&mut ctx), StepResult::Success(json!(42)));
/// ```
pub struct FnStep {
    id: StepId,
    f: Box<StepFn>,
}

impl FnStep {
    /// Wraps `f` as a step named `id`.
    pub fn new<F>(id: impl Into<StepId>, f: F) -> Self
    where
        F: Fn(&mut FlowContext) -> StepResult<Value> + Send + Sync + 'static,
    {
        Self {
            id: id.into(),
            f: Box::new(f),
        }
    }
}

impl fmt::Debug for FnStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnStep").field("id", &self.id).finish_non_exhaustive()
    }
}

impl Step for FnStep {
    fn id(&self) -> StepId {
        self.id.clone()
    }

    fn execute(&self, ctx: &mut FlowContext) -> StepResult<Value> {
        (self.f)(ctx)
    }
}
