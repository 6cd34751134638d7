#![doc = include_str!("../README.md")]
#![forbid(unsafe_code)]
#![warn(missing_docs)]

//! ChainFlow Library
//!
//! The chain runner, its retry policy, and TOML flow definitions.

pub mod config;
pub mod flow;
pub mod retry;

pub use config::{FlowConfig, StepConfig};
pub use flow::{ChainFlow, FlowReport};
pub use retry::RetryPolicy;

// Re-export core types
pub use chainflow_core::{Error, FlowContext, FlowState, Result, Step, StepId, StepResult};
