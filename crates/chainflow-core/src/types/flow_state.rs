//! Flow state tracking types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::types::{StepId, StepResult};

/// The current state of a chain flow run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub enum FlowState {
    /// Flow has been created but not yet started.
    #[default]
    Pending,

    /// Flow is executing steps.
    Running,

    /// Every step ran, or a step halted the chain.
    Completed,

    /// A step failed and the chain stopped.
    Failed,
}

impl FlowState {
    /// Returns `true` if the flow is in a terminal state (Completed or Failed).
    pub fn is_terminal(&self) -> bool {
        matches!(self, FlowState::Completed | FlowState::Failed)
    }

    /// Returns `true` if the flow is running.
    pub fn is_active(&self) -> bool {
        matches!(self, FlowState::Running)
    }
}

impl std::fmt::Display for FlowState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            FlowState::Pending => "pending",
            FlowState::Running => "running",
            FlowState::Completed => "completed",
            FlowState::Failed => "failed",
        };
        f.write_str(name)
    }
}

/// Record of one step's execution within a run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StepRecord {
    /// Step that ran
    pub step_id: StepId,

    /// When the first attempt started
    pub started_at: DateTime<Utc>,

    /// When the final attempt finished (if finished)
    pub completed_at: Option<DateTime<Utc>>,

    /// Number of attempts made (1-indexed)
    pub attempts: u32,

    /// Outcome of the final attempt
    pub result: Option<StepResult<Value>>,
}

impl StepRecord {
    /// Starts a record for a step about to run.
    pub fn new(step_id: StepId) -> Self {
        Self {
            step_id,
            started_at: Utc::now(),
            completed_at: None,
            attempts: 1,
            result: None,
        }
    }

    /// Stores the final outcome and stamps the completion time.
    pub fn finish(&mut self, result: StepResult<Value>) {
        self.result = Some(result);
        self.completed_at = Some(Utc::now());
    }

    /// Returns the wall-clock time spent on this step, retries included.
    pub fn duration(&self) -> Option<chrono::Duration> {
        self.completed_at
            .map(|end| end.signed_duration_since(self.started_at))
    }

    /// Returns `true` if the step has finished.
    pub fn is_completed(&self) -> bool {
        self.completed_at.is_some()
    }

    /// Returns `true` if the step finished with a failure.
    pub fn is_failed(&self) -> bool {
        self.result.as_ref().is_some_and(StepResult::is_failed)
    }
}
