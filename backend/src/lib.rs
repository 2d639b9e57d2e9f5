//! Mission Simulator Core - Rust Engine
//!
//! Deterministic two-agent landmine-clearance mission simulator. An
//! unmanned ground vehicle (UGV) must reach an end node across a network
//! of edges, some of which hide landmines, while an unmanned aerial
//! vehicle (UAV) scans edges so that a human and an AI oracle can be
//! consulted about them. Every action accrues a fixed time cost.
//!
//! # Architecture
//!
//! - **config**: Mission file parsing and validation
//! - **core**: Episode/step clock
//! - **costs**: Action timings and per-category cost accumulation
//! - **models**: Domain types (EdgeState, EdgeNetwork, Agent, Event)
//! - **mission**: `MissionEngine` state machine, outcomes, checkpoints
//! - **rng**: Deterministic random number generation
//!
//! # Critical Invariants
//!
//! 1. Agents only move along existing edges
//! 2. Landmines are found before they are cleared
//! 3. Total cost never decreases within an episode
//! 4. All randomness is deterministic (seeded RNG)

// Module declarations
pub mod config;
pub mod core;
pub mod costs;
pub mod mission;
pub mod models;
pub mod rng;

// Re-exports for convenience
pub use config::{EdgeConfig, MissionConfig, MissionSettings, RunMode};
pub use core::clock::EpisodeClock;
pub use costs::{ActionKind, ActionTimings, CostAccumulator};
pub use mission::{
    AirMove, GroundMove, MissionEngine, MissionError, MissionSnapshot, QueryOutcome,
    QueryRefusal,
};
pub use models::{
    agent::{Agent, AgentKind},
    edge::{EdgeId, EdgeState, HazardState, Oracle},
    event::{Event, EventLog},
    network::EdgeNetwork,
};
pub use rng::RngManager;

// FFI module (when feature enabled)
#[cfg(feature = "pyo3")]
pub mod ffi;

// PyO3 exports (when feature enabled)
#[cfg(feature = "pyo3")]
use pyo3::prelude::*;

#[cfg(feature = "pyo3")]
#[pymodule]
fn mission_simulator_core_rs(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<ffi::mission::PyMission>()?;
    Ok(())
}
