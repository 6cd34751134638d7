//! The chain runner.

use std::collections::HashSet;
use std::fmt;

use backon::BlockingRetryable;
use chainflow_core::{
    Error, FlowContext, FlowId, FlowState, Result, Step, StepId, StepRecord, StepResult,
};
use serde::{Deserialize, Serialize};

use crate::retry::RetryPolicy;

const DEFAULT_NAME: &str = "chainflow";

/// An ordered chain of steps.
///
/// A `ChainFlow` is ready to run as soon as it is constructed. Running it
/// executes each step in insertion order against a fresh [`FlowContext`].
/// The flow definition is never mutated by a run, so the same `ChainFlow`
/// can be run any number of times.
///
/// # Examples
///
/// ```
/// use chainflow::ChainFlow;
///
/// let flow = ChainFlow::new();
/// assert!(flow.is_empty());
/// assert!(flow.run());
/// ```
pub struct ChainFlow {
    id: FlowId,
    name: String,
    steps: Vec<Box<dyn Step>>,
    retry: RetryPolicy,
}

/// Outcome of one run of a [`ChainFlow`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlowReport {
    /// Flow that produced this report
    pub flow_id: FlowId,

    /// Name of the flow
    pub name: String,

    /// Final state, always terminal
    pub state: FlowState,

    /// One record per step that was executed, in execution order
    pub records: Vec<StepRecord>,

    /// Step that stopped the chain early, if any
    pub halted_by: Option<StepId>,

    /// Context as the last executed step left it
    pub context: FlowContext,
}

impl FlowReport {
    /// Returns `true` if the flow completed, including an early halt.
    pub fn is_success(&self) -> bool {
        self.state == FlowState::Completed
    }

    /// Returns the record of the step that failed the flow.
    pub fn failed_step(&self) -> Option<&StepRecord> {
        self.records.iter().rev().find(|r| r.is_failed())
    }

    /// Returns the IDs of the executed steps, in order.
    pub fn executed_steps(&self) -> Vec<&StepId> {
        self.records.iter().map(|r| &r.step_id).collect()
    }

    /// Renders the report as pretty-printed JSON.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl ChainFlow {
    /// Creates an empty flow with the default name and retry policy.
    pub fn new() -> Self {
        Self {
            id: FlowId::new(),
            name: DEFAULT_NAME.to_string(),
            steps: Vec::new(),
            retry: RetryPolicy::default(),
        }
    }

    /// Sets the flow name used in logs and reports.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Appends a step to the chain.
    pub fn with_step<S: Step + 'static>(mut self, step: S) -> Self {
        self.push_step(step);
        self
    }

    /// Appends a step to the chain.
    pub fn push_step<S: Step + 'static>(&mut self, step: S) {
        self.steps.push(Box::new(step));
    }

    /// Sets the retry policy applied to every step.
    pub fn with_retry_policy(mut self, policy: RetryPolicy) -> Self {
        self.retry = policy;
        self
    }

    /// Returns this flow's ID.
    pub fn id(&self) -> FlowId {
        self.id
    }

    /// Returns the flow name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the retry policy.
    pub fn retry_policy(&self) -> &RetryPolicy {
        &self.retry
    }

    /// Number of steps in the chain.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Returns `true` if the chain has no steps.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Returns the step IDs in execution order.
    pub fn step_ids(&self) -> Vec<StepId> {
        self.steps.iter().map(|s| s.id()).collect()
    }

    /// Checks the chain can be run: step IDs are non-blank and unique and
    /// the retry policy is usable.
    pub fn validate(&self) -> Result<()> {
        self.retry.validate()?;
        let mut seen = HashSet::with_capacity(self.steps.len());
        for id in self.step_ids() {
            id.validate()?;
            if !seen.insert(id.clone()) {
                return Err(Error::DuplicateStep {
                    id: id.to_string(),
                });
            }
        }
        Ok(())
    }

    /// Runs the chain and reports whether it completed.
    ///
    /// Returns `true` when every step ran or a step halted the chain, and
    /// `false` when a step failed or the chain is invalid. An empty chain
    /// always returns `true`.
    pub fn run(&self) -> bool {
        match self.execute() {
            Ok(report) => report.is_success(),
            Err(e) => {
                tracing::error!(flow_id = %self.id, error = %e, "Flow could not be started");
                false
            }
        }
    }

    /// Runs the chain with a fresh context and returns the full report.
    pub fn execute(&self) -> Result<FlowReport> {
        self.execute_with(FlowContext::new())
    }

    /// Runs the chain starting from `ctx`.
    ///
    /// Returns `Err` only when the chain is invalid, before any step runs.
    /// A step failure is reported through [`FlowReport::state`].
    pub fn execute_with(&self, mut ctx: FlowContext) -> Result<FlowReport> {
        self.validate()?;

        tracing::info!(
            flow_id = %self.id,
            name = %self.name,
            steps = self.steps.len(),
            "Starting flow"
        );

        let mut records = Vec::with_capacity(self.steps.len());
        let mut halted_by = None;
        let mut state = FlowState::Running;

        for step in &self.steps {
            let record = self.run_step(&**step, &mut ctx);

            match &record.result {
                Some(StepResult::Success(_)) => {}
                Some(StepResult::Halt { reason, .. }) => {
                    tracing::info!(
                        flow_id = %self.id,
                        step_id = %record.step_id,
                        reason = %reason,
                        "Step halted flow"
                    );
                    halted_by = Some(record.step_id.clone());
                }
                _ => state = FlowState::Failed,
            }

            records.push(record);
            if halted_by.is_some() || state == FlowState::Failed {
                break;
            }
        }

        if state == FlowState::Running {
            state = FlowState::Completed;
        }

        tracing::info!(
            flow_id = %self.id,
            state = %state,
            executed = records.len(),
            "Flow finished"
        );

        Ok(FlowReport {
            flow_id: self.id,
            name: self.name.clone(),
            state,
            records,
            halted_by,
            context: ctx,
        })
    }

    /// Executes one step, retrying retryable failures, and records the outcome.
    fn run_step(&self, step: &dyn Step, ctx: &mut FlowContext) -> StepRecord {
        let step_id = step.id();
        let mut record = StepRecord::new(step_id.clone());
        let mut attempts = 0u32;

        let outcome = (|| {
            attempts += 1;
            tracing::debug!(
                flow_id = %self.id,
                step_id = %step_id,
                attempt = attempts,
                "Executing step"
            );
            match step.execute(ctx) {
                StepResult::Failed { error, retryable } => {
                    Err(Error::step_failed(step_id.as_str(), error, retryable))
                }
                other => Ok(other),
            }
        })
        .retry(self.retry.backoff())
        .sleep(std::thread::sleep)
        .when(Error::is_retryable)
        .notify(|err, delay| {
            tracing::warn!(
                flow_id = %self.id,
                step_id = %step_id,
                error = %err,
                delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX),
                "Retrying step"
            );
        })
        .call();

        record.attempts = attempts;

        let result = match outcome {
            Ok(StepResult::Success(value)) => {
                ctx.record_output(step_id.clone(), value.clone());
                StepResult::Success(value)
            }
            Ok(StepResult::Halt { output, reason }) => {
                ctx.record_output(step_id.clone(), output.clone());
                StepResult::Halt { output, reason }
            }
            Ok(_) => StepResult::failed("step returned an unsupported result"),
            Err(err) => {
                let (error, retryable) = match err {
                    Error::StepFailed {
                        message, retryable, ..
                    } => (message, retryable),
                    other => (other.to_string(), other.is_retryable()),
                };
                tracing::error!(
                    flow_id = %self.id,
                    step_id = %step_id,
                    attempts,
                    error = %error,
                    "Step failed"
                );
                StepResult::Failed { error, retryable }
            }
        };

        tracing::debug!(
            flow_id = %self.id,
            step_id = %step_id,
            attempts,
            success = !result.is_failed(),
            "Step finished"
        );

        record.finish(result);
        record
    }
}

impl Default for ChainFlow {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ChainFlow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChainFlow")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("steps", &self.step_ids())
            .field("retry", &self.retry)
            .finish()
    }
}
