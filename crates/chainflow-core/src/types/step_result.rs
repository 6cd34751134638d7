//! Step execution result types.

use serde::{Deserialize, Serialize};

/// The outcome a step reports after executing.
///
/// A step either succeeds and lets the chain continue, finishes and asks
/// the chain to stop early, or fails.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub enum StepResult<T> {
    /// Step completed successfully; the chain continues.
    Success(T),

    /// Step completed and the chain should stop here.
    ///
    /// A halted chain still counts as completed.
    Halt {
        /// The output of the halting step
        output: T,
        /// Why the chain stopped
        reason: String,
    },

    /// Step failed.
    Failed {
        /// What went wrong
        error: String,
        /// Whether running the step again might succeed
        retryable: bool,
    },
}

impl<T> StepResult<T> {
    /// Creates a permanent failure.
    pub fn failed<S: Into<String>>(error: S) -> Self {
        StepResult::Failed {
            error: error.into(),
            retryable: false,
        }
    }

    /// Creates a retryable failure.
    pub fn transient<S: Into<String>>(error: S) -> Self {
        StepResult::Failed {
            error: error.into(),
            retryable: true,
        }
    }

    /// Returns `true` if the result is `Success`.
    pub fn is_success(&self) -> bool {
        matches!(self, StepResult::Success(_))
    }

    /// Returns `true` if the result is `Halt`.
    pub fn is_halt(&self) -> bool {
        matches!(self, StepResult::Halt { .. })
    }

    /// Returns `true` if the result is `Failed`.
    pub fn is_failed(&self) -> bool {
        matches!(self, StepResult::Failed { .. })
    }

    /// Returns `true` if the result is a retryable failure.
    pub fn is_retryable(&self) -> bool {
        match self {
            StepResult::Failed { retryable, .. } => *retryable,
            _ => false,
        }
    }

    /// Borrows the output of a `Success` or `Halt`.
    pub fn output(&self) -> Option<&T> {
        match self {
            StepResult::Success(value) | StepResult::Halt { output: value, .. } => Some(value),
            StepResult::Failed { .. } => None,
        }
    }

    /// Extracts the success value, panicking if not successful.
    ///
    /// # Panics
    ///
    /// Panics if the result is not `Success`.
    ///
    /// # Examples
    ///
    /// ```
    /// use chainflow_core::StepResult;
    ///
    /// let result = StepResult::Success(42);
    /// assert_eq!(result.unwrap(), 42);
    /// ```
    #[allow(clippy::panic)]
    pub fn unwrap(self) -> T {
        match self {
            StepResult::Success(value) => value,
            StepResult::Halt { reason, .. } => panic!("called `unwrap()` on Halt: {}", reason),
            StepResult::Failed { error, .. } => panic!("called `unwrap()` on Failed: {}", error),
        }
    }

    /// Returns the success value, or a default if not successful.
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            StepResult::Success(value) => value,
            _ => default,
        }
    }

    /// Returns the success value, or computes it from a closure.
    pub fn unwrap_or_else<F>(self, f: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            StepResult::Success(value) => value,
            _ => f(),
        }
    }

    /// Maps a `StepResult<T>` to `StepResult<U>` by applying a function to the output.
    pub fn map<U, F>(self, f: F) -> StepResult<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            StepResult::Success(value) => StepResult::Success(f(value)),
            StepResult::Halt { output, reason } => StepResult::Halt {
                output: f(output),
                reason,
            },
            StepResult::Failed { error, retryable } => StepResult::Failed { error, retryable },
        }
    }
}
