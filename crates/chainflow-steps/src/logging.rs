//! A step that reports progress through `tracing`.

use chainflow_core::{FlowContext, Step, StepId, StepResult};
use serde_json::Value;

/// Emits an `info` event and succeeds with the message.
#[derive(Debug, Clone)]
pub struct LogMessage {
    id: StepId,
    message: String,
}

impl LogMessage {
    /// Creates a logging step.
    pub fn new(id: impl Into<StepId>, message: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            message: message.into(),
        }
    }
}

impl Step for LogMessage {
    fn id(&self) -> StepId {
        self.id.clone()
    }

    fn execute(&self, ctx: &mut FlowContext) -> StepResult<Value> {
        tracing::info!(
            step_id = %self.id,
            context_values = ctx.len(),
            "{}",
            self.message
        );
        StepResult::Success(Value::String(self.message.clone()))
    }
}
