//! TOML flow definitions.

use std::path::Path;

use chainflow_core::{Error, Result};
use chainflow_steps::{HaltWhen, LogMessage, Noop, RequireKey, SetValue};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::flow::ChainFlow;
use crate::retry::RetryPolicy;

fn default_name() -> String {
    "chainflow".to_string()
}

/// A flow described in a TOML file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FlowConfig {
    /// Flow name used in logs and reports
    #[serde(default = "default_name")]
    pub name: String,

    /// Retry policy applied to every step
    #[serde(default)]
    pub retry: RetryPolicy,

    /// Steps in execution order
    #[serde(default)]
    pub steps: Vec<StepConfig>,
}

/// One `[[steps]]` entry, selected by its `kind` field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case", deny_unknown_fields)]
pub enum StepConfig {
    /// Does nothing
    Noop {
        /// Step ID
        id: String,
    },
    /// Stores `value` under `key`
    Set {
        /// Step ID
        id: String,
        /// Context key
        key: String,
        /// Value to store. TOML datetimes are stored as RFC 3339 strings.
        value: toml::Value,
    },
    /// Fails unless `key` is present
    Require {
        /// Step ID
        id: String,
        /// Context key
        key: String,
    },
    /// Stops the chain once `key` is present
    HaltWhen {
        /// Step ID
        id: String,
        /// Context key
        key: String,
    },
    /// Emits a log event
    Log {
        /// Step ID
        id: String,
        /// Message to log
        message: String,
    },
}

impl FlowConfig {
    /// Parses a flow definition from TOML text.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        toml::from_str(s).map_err(|e| Error::config(format!("invalid flow definition: {e}")))
    }

    /// Reads and parses a flow definition file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!(path = %path.display(), "Loading flow definition");
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Builds a validated [`ChainFlow`] from this definition.
    pub fn build(&self) -> Result<ChainFlow> {
        let mut flow = ChainFlow::new()
            .with_name(self.name.clone())
            .with_retry_policy(self.retry);

        for step in &self.steps {
            match step.clone() {
                StepConfig::Noop { id } => flow.push_step(Noop::new(id)),
                StepConfig::Set { id, key, value } => {
                    let value = toml_to_json(value)
                        .map_err(|e| Error::config(format!("step '{id}': {e}")))?;
                    flow.push_step(SetValue::new(id, key, value))
                }
                StepConfig::Require { id, key } => flow.push_step(RequireKey::new(id, key)),
                StepConfig::HaltWhen { id, key } => flow.push_step(HaltWhen::new(id, key)),
                StepConfig::Log { id, message } => flow.push_step(LogMessage::new(id, message)),
            }
        }

        flow.validate()?;
        Ok(flow)
    }
}

/// Converts a TOML value into the JSON value a step stores.
fn toml_to_json(value: toml::Value) -> std::result::Result<Value, String> {
    Ok(match value {
        toml::Value::String(s) => Value::String(s),
        toml::Value::Integer(n) => Value::from(n),
        toml::Value::Float(f) => serde_json::Number::from_f64(f)
            .map(Value::Number)
            .ok_or_else(|| format!("float {f} cannot be stored"))?,
        toml::Value::Boolean(b) => Value::Bool(b),
        toml::Value::Datetime(dt) => Value::String(dt.to_string()),
        toml::Value::Array(items) => Value::Array(
            items
                .into_iter()
                .map(toml_to_json)
                .collect::<std::result::Result<_, _>>()?,
        ),
        toml::Value::Table(table) => Value::Object(
            table
                .into_iter()
                .map(|(k, v)| toml_to_json(v).map(|v| (k, v)))
                .collect::<std::result::Result<_, _>>()?,
        ),
    })
}

impl Default for FlowConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            retry: RetryPolicy::default(),
            steps: Vec::new(),
        }
    }
}
