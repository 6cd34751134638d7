//! Core types for ChainFlow flows.

mod flow_state;
mod ids;
mod proptests;
mod step_result;

pub use flow_state::{FlowState, StepRecord};
pub use ids::{FlowId, StepId};
pub use step_result::StepResult;
