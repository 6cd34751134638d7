//! Steps that read or write the flow context.

use chainflow_core::{FlowContext, Step, StepId, StepResult};
use serde_json::Value;

/// Stores a fixed value in the context.
///
/// The step's output is the stored value.
#[derive(Debug, Clone)]
pub struct SetValue {
    id: StepId,
    key: String,
    value: Value,
}

impl SetValue {
    /// Creates a step that stores `value` under `key`.
    pub fn new(id: impl Into<StepId>, key: impl Into<String>, value: Value) -> Self {
        Self {
            id: id.into(),
            key: key.into(),
            value,
        }
    }
}

impl Step for SetValue {
    fn id(&self) -> StepId {
        self.id.clone()
    }

    fn execute(&self, ctx: &mut FlowContext) -> StepResult<Value> {
        ctx.insert(self.key.clone(), self.value.clone());
        StepResult::Success(self.value.clone())
    }
}

/// Fails the chain unless a key is present in the context.
#[derive(Debug, Clone)]
pub struct RequireKey {
    id: StepId,
    key: String,
}

impl RequireKey {
    /// Creates a step that requires `key`.
    pub fn new(id: impl Into<StepId>, key: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            key: key.into(),
        }
    }
}

impl Step for RequireKey {
    fn id(&self) -> StepId {
        self.id.clone()
    }

    fn execute(&self, ctx: &mut FlowContext) -> StepResult<Value> {
        match ctx.get(&self.key) {
            Some(value) => StepResult::Success(value.clone()),
            None => StepResult::failed(format!("required key '{}' is missing", self.key)),
        }
    }
}

/// Stops the chain when a key is present in the context.
///
/// When the key is absent the step succeeds with `null` and the chain
/// continues.
#[derive(Debug, Clone)]
pub struct HaltWhen {
    id: StepId,
    key: String,
}

impl HaltWhen {
    /// Creates a step that halts once `key` is set.
    pub fn new(id: impl Into<StepId>, key: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            key: key.into(),
        }
    }
}

impl Step for HaltWhen {
    fn id(&self) -> StepId {
        self.id.clone()
    }

    fn execute(&self, ctx: &mut FlowContext) -> StepResult<Value> {
        match ctx.get(&self.key) {
            Some(value) => StepResult::Halt {
                output: value.clone(),
                reason: format!("key '{}' is set", self.key),
            },
            None => StepResult::Success(Value::Null),
        }
    }
}
