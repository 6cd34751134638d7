//! Shared state passed along a chain.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::types::StepId;

/// State shared by the steps of a single run.
///
/// Holds free-form values that steps read and write, plus the output each
/// completed step produced. Keys are kept in sorted order so that reports
/// serialize deterministically.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FlowContext {
    #[serde(default)]
    values: BTreeMap<String, Value>,
    #[serde(default)]
    outputs: BTreeMap<StepId, Value>,
}

impl FlowContext {
    /// Creates an empty context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the value stored under `key`.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    /// Stores a value, returning the one it replaced.
    pub fn insert<K: Into<String>>(&mut self, key: K, value: Value) -> Option<Value> {
        self.values.insert(key.into(), value)
    }

    /// Removes and returns the value stored under `key`.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.values.remove(key)
    }

    /// Returns `true` if a value is stored under `key`.
    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Number of stored values (step outputs not included).
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if no values are stored.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterates over stored values in key order.
    pub fn values(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Returns the output recorded for a completed step.
    pub fn output(&self, step_id: &StepId) -> Option<&Value> {
        self.outputs.get(step_id)
    }

    /// Records a step's output.
    pub fn record_output(&mut self, step_id: StepId, value: Value) {
        self.outputs.insert(step_id, value);
    }
}
