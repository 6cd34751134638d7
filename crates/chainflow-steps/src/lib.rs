#![doc = include_str!("../README.md")]
#![forbid(unsafe_code)]
#![warn(missing_docs)]

//! ChainFlow Steps Library
//!
//! Step implementations for ChainFlow chains.

mod context_steps;
mod fn_step;
mod logging;

pub use context_steps::{HaltWhen, RequireKey, SetValue};
pub use fn_step::FnStep;
pub use logging::LogMessage;

// Re-export core types
pub use chainflow_core::{Error, FlowContext, Result, Step, StepId, StepResult};

use serde_json::Value;

/// A step that does nothing and always succeeds with `null`.
#[derive(Debug, Clone)]
pub struct Noop {
    id: StepId,
}

impl Noop {
    /// Creates a no-op step.
    pub fn new(id: impl Into<StepId>) -> Self {
        Self { id: id.into() }
    }
}

impl Step for Noop {
    fn id(&self) -> StepId {
        self.id.clone()
    }

    fn execute(&self, _ctx: &mut FlowContext) -> StepResult<Value> {
        StepResult::Success(Value::Null)
    }
}
