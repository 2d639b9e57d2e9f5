//! Domain models for the mission simulator

pub mod agent;
pub mod edge;
pub mod event;
pub mod grid;
pub mod network;

// Re-exports
pub use agent::{Agent, AgentKind};
pub use edge::{EdgeId, EdgeState, HazardState, Oracle};
pub use event::{Event, EventLog};
pub use network::EdgeNetwork;
