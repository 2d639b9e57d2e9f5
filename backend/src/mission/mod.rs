//! Mission module
//!
//! The `MissionEngine` state machine, its action outcomes and checkpointing.

pub mod checkpoint;
pub mod engine;
pub mod outcome;

pub use checkpoint::{AgentSnapshot, EdgeSnapshot, MissionSnapshot};
pub use engine::{MissionEngine, MissionError};
pub use outcome::{AirMove, GroundMove, QueryOutcome, QueryRefusal};
