//! Identifier types for flows and steps.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::error::{Error, Result};

/// Unique identifier for a chain flow instance.
///
/// Internally represented as a UUID v4. Every `ChainFlow` gets its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FlowId(Uuid);

impl FlowId {
    /// Creates a new random flow ID.
    ///
    /// # Examples
    ///
    /// ```
    /// use chainflow_core::FlowId;
    ///
    /// assert_ne!(FlowId::new(), FlowId::new());
    /// ```
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Returns the inner UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for FlowId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for FlowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<Uuid> for FlowId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl From<FlowId> for Uuid {
    fn from(id: FlowId) -> Self {
        id.0
    }
}

impl std::str::FromStr for FlowId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

/// Identifier of a step within a chain.
///
/// Step IDs are short human-readable names like `"load"` or `"check"`.
/// They must be unique within one chain; a step's output is recorded in
/// the [`FlowContext`](crate::FlowContext) under its ID.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StepId(String);

impl StepId {
    /// Creates a new step ID.
    ///
    /// # Examples
    ///
    /// ```
    /// use chainflow_core::StepId;
    ///
    /// let id = StepId::new("load");
    /// assert_eq!(id.as_str(), "load");
    /// ```
    pub fn new<S: Into<String>>(id: S) -> Self {
        Self(id.into())
    }

    /// Returns the step ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Checks that the ID is usable as a step name.
    ///
    /// Blank IDs are rejected.
    pub fn validate(&self) -> Result<()> {
        if self.0.trim().is_empty() {
            return Err(Error::validation_field("id", "step id must not be blank"));
        }
        Ok(())
    }
}

impl fmt::Display for StepId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for StepId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for StepId {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

impl AsRef<str> for StepId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
