//! Error types for the ChainFlow core library.

/// Errors that can occur while building or executing a chain.
///
/// All error variants are marked with `#[non_exhaustive]` to allow
/// adding new error types without breaking changes.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// Flow or step validation error
    #[error("Validation error: {message}")]
    Validation {
        /// Field or aspect that failed validation
        field: Option<String>,
        /// What went wrong
        message: String,
    },

    /// I/O error (reading flow files, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {message}")]
    Config {
        /// What configuration is problematic
        message: String,
    },

    /// A step reported a failure
    #[error("Step '{step_id}' failed: {message}")]
    StepFailed {
        /// Step that failed
        step_id: String,
        /// Failure reported by the step
        message: String,
        /// Whether the step asked to be retried
        retryable: bool,
    },

    /// Two steps in the same chain share an ID
    #[error("Duplicate step: {id}")]
    DuplicateStep {
        /// The repeated step ID
        id: String,
    },
}

/// Convenience `Result` type alias for ChainFlow operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Returns whether this error is retryable.
    ///
    /// Only transient failures are retryable: I/O errors and step failures
    /// the step itself marked as retryable.
    pub fn is_retryable(&self) -> bool {
        match self {
            Error::Io(_) => true,
            Error::StepFailed { retryable, .. } => *retryable,
            Error::Validation { .. } => false,
            Error::Serialization(_) => false,
            Error::Config { .. } => false,
            Error::DuplicateStep { .. } => false,
        }
    }

    /// Creates a new validation error.
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Error::Validation {
            field: None,
            message: message.into(),
        }
    }

    /// Creates a new validation error with a field name.
    pub fn validation_field<F, M>(field: F, message: M) -> Self
    where
        F: Into<String>,
        M: Into<String>,
    {
        Error::Validation {
            field: Some(field.into()),
            message: message.into(),
        }
    }

    /// Creates a new configuration error.
    pub fn config<S: Into<String>>(message: S) -> Self {
        Error::Config {
            message: message.into(),
        }
    }

    /// Creates a new step failure.
    pub fn step_failed<I, M>(step_id: I, message: M, retryable: bool) -> Self
    where
        I: Into<String>,
        M: Into<String>,
    {
        Error::StepFailed {
            step_id: step_id.into(),
            message: message.into(),
            retryable,
        }
    }
}
