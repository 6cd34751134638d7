#![doc = include_str!("../README.md")]
#![forbid(unsafe_code)]
#![warn(missing_docs)]

//! ChainFlow Core Library
//!
//! Core types, traits, and utilities shared by ChainFlow crates.

pub mod context;
pub mod error;
pub mod step;
pub mod types;

// Re-exports for convenience
pub use context::FlowContext;
pub use error::{Error, Result};
pub use step::Step;
pub use types::{FlowId, FlowState, StepId, StepRecord, StepResult};
