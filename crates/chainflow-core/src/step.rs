//! The step abstraction.

use serde_json::Value;

use crate::context::FlowContext;
use crate::types::{StepId, StepResult};

/// A single unit of work in a chain.
///
/// Steps are synchronous and should return promptly. A step reads and
/// writes the [`FlowContext`] of the current run and reports its outcome
/// as a [`StepResult`]. A step may be executed more than once in the same
/// run when it reports a retryable failure.
pub trait Step: Send + Sync {
    /// The ID this step is recorded under. Must be unique within a chain.
    fn id(&self) -> StepId;

    /// Runs the step against the context of the current run.
    fn execute(&self, ctx: &mut FlowContext) -> StepResult<Value>;
}

impl<S: Step + ?Sized> Step for Box<S> {
    fn id(&self) -> StepId {
        (**self).id()
    }

    fn execute(&self, ctx: &mut FlowContext) -> StepResult<Value> {
        (**self).execute(ctx)
    }
}
