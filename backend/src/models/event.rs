//! Event logging for mission traces and auditing.
//!
//! Every action outcome produces one or more `Event`s. The engine owns an
//! `EventLog` and callers read it back; there is no process-wide logger.
//! Each event renders a human-readable trace line via `Event::message()`,
//! and the most recent line is what `MissionEngine::current_log()` returns.
//!
//! # Event Types
//!
//! - **Selection**: edge selected / not found
//! - **Oracle**: query answered / refused
//! - **Ground**: landmine detected, landmine cleared, moved
//! - **Aerial**: moved (edge scanned)
//! - **Rejection**: move rejected (either agent)
//! - **Episode**: mission success, reset, edges restored
//!
//! # Example
//!
//! ```rust
//! use mission_simulator_core_rs::models::Event;
//!
//! let event = Event::MissionSuccess {
//!     episode: 0,
//!     step: 7,
//!     node: "C".to_string(),
//! };
//!
//! assert_eq!(event.message(), "MISSION SUCCESS");
//! assert_eq!(event.step(), 7);
//! ```

use crate::mission::QueryRefusal;
use crate::models::agent::AgentKind;
use crate::models::edge::{EdgeId, Oracle};
use serde::{Deserialize, Serialize};

/// Mission event capturing one action outcome.
///
/// All events carry the episode and the step (action index within the
/// episode) at which they occurred.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    /// Edge brought into focus for querying
    EdgeSelected {
        episode: usize,
        step: usize,
        edge: EdgeId,
        node_a: String,
        node_b: String,
    },

    /// No edge connects the requested pair; selection unchanged
    EdgeNotFound {
        episode: usize,
        step: usize,
        node_a: String,
        node_b: String,
    },

    /// Oracle consulted for the selected edge
    OracleQueried {
        episode: usize,
        step: usize,
        oracle: Oracle,
        edge: EdgeId,
        origin: String,
        destination: String,
        estimate: f64,
    },

    /// Oracle query refused
    ///
    /// `endpoints` is `None` when no edge was selected.
    OracleRefused {
        episode: usize,
        step: usize,
        oracle: Oracle,
        reason: QueryRefusal,
        endpoints: Option<(String, String)>,
    },

    /// Ground agent hit a hidden landmine and was pushed back
    LandmineDetected {
        episode: usize,
        step: usize,
        edge: EdgeId,
        from: String,
        to: String,
    },

    /// Ground agent cleared a found landmine and completed the traversal
    LandmineCleared {
        episode: usize,
        step: usize,
        edge: EdgeId,
        destination: String,
    },

    /// Ground agent traversed a clear edge
    GroundMoved {
        episode: usize,
        step: usize,
        edge: EdgeId,
        destination: String,
    },

    /// Aerial agent flew over (and scanned) an edge
    AerialMoved {
        episode: usize,
        step: usize,
        edge: EdgeId,
        destination: String,
        origin: String,
        edge_destination: String,
    },

    /// Move refused: destination not adjacent, unknown, or the current node
    MoveRejected {
        episode: usize,
        step: usize,
        agent: AgentKind,
        from: String,
        destination: String,
    },

    /// Ground agent arrived at the end node
    MissionSuccess {
        episode: usize,
        step: usize,
        node: String,
    },

    /// New episode started
    EpisodeReset {
        episode: usize,
        step: usize,
        start_node: String,
        end_node: String,
    },

    /// Every edge returned to its configured state
    EdgesRestored {
        episode: usize,
        step: usize,
        edge_count: usize,
    },
}

impl Event {
    /// Episode in which this event occurred
    pub fn episode(&self) -> usize {
        match self {
            Event::EdgeSelected { episode, .. }
            | Event::EdgeNotFound { episode, .. }
            | Event::OracleQueried { episode, .. }
            | Event::OracleRefused { episode, .. }
            | Event::LandmineDetected { episode, .. }
            | Event::LandmineCleared { episode, .. }
            | Event::GroundMoved { episode, .. }
            | Event::AerialMoved { episode, .. }
            | Event::MoveRejected { episode, .. }
            | Event::MissionSuccess { episode, .. }
            | Event::EpisodeReset { episode, .. }
            | Event::EdgesRestored { episode, .. } => *episode,
        }
    }

    /// Step (action index within the episode) of this event
    pub fn step(&self) -> usize {
        match self {
            Event::EdgeSelected { step, .. }
            | Event::EdgeNotFound { step, .. }
            | Event::OracleQueried { step, .. }
            | Event::OracleRefused { step, .. }
            | Event::LandmineDetected { step, .. }
            | Event::LandmineCleared { step, .. }
            | Event::GroundMoved { step, .. }
            | Event::AerialMoved { step, .. }
            | Event::MoveRejected { step, .. }
            | Event::MissionSuccess { step, .. }
            | Event::EpisodeReset { step, .. }
            | Event::EdgesRestored { step, .. } => *step,
        }
    }

    /// Get a short description of the event type
    pub fn event_type(&self) -> &'static str {
        match self {
            Event::EdgeSelected { .. } => "EdgeSelected",
            Event::EdgeNotFound { .. } => "EdgeNotFound",
            Event::OracleQueried { .. } => "OracleQueried",
            Event::OracleRefused { .. } => "OracleRefused",
            Event::LandmineDetected { .. } => "LandmineDetected",
            Event::LandmineCleared { .. } => "LandmineCleared",
            Event::GroundMoved { .. } => "GroundMoved",
            Event::AerialMoved { .. } => "AerialMoved",
            Event::MoveRejected { .. } => "MoveRejected",
            Event::MissionSuccess { .. } => "MissionSuccess",
            Event::EpisodeReset { .. } => "EpisodeReset",
            Event::EdgesRestored { .. } => "EdgesRestored",
        }
    }

    /// Get edge ID if event relates to a specific edge
    pub fn edge_id(&self) -> Option<EdgeId> {
        match self {
            Event::EdgeSelected { edge, .. }
            | Event::OracleQueried { edge, .. }
            | Event::LandmineDetected { edge, .. }
            | Event::LandmineCleared { edge, .. }
            | Event::GroundMoved { edge, .. }
            | Event::AerialMoved { edge, .. } => Some(*edge),
            _ => None,
        }
    }

    /// True for outcomes where the requested action did not happen
    pub fn is_failure(&self) -> bool {
        matches!(
            self,
            Event::EdgeNotFound { .. } | Event::OracleRefused { .. } | Event::MoveRejected { .. }
        )
    }

    /// Human-readable trace line
    pub fn message(&self) -> String {
        match self {
            Event::EdgeSelected { node_a, node_b, .. } => {
                format!("Selected edge {}, {}", node_a, node_b)
            }
            Event::EdgeNotFound { node_a, node_b, .. } => {
                format!("Edge {}, {} could not be found", node_a, node_b)
            }
            Event::OracleQueried {
                oracle,
                origin,
                destination,
                estimate,
                ..
            } => format!(
                "{} queried for edge {}, {}. The estimate was {}.",
                oracle.label(),
                origin,
                destination,
                estimate
            ),
            Event::OracleRefused {
                oracle,
                reason,
                endpoints,
                ..
            } => match endpoints {
                Some((origin, destination)) => format!(
                    "{} could not be queried for edge {}, {}: {}.",
                    oracle.label(),
                    origin,
                    destination,
                    reason.describe(*oracle)
                ),
                None => format!(
                    "{} could not be queried: {}.",
                    oracle.label(),
                    reason.describe(*oracle)
                ),
            },
            Event::LandmineDetected { from, to, .. } => format!(
                "Landmine detected along edge {}, {}. UGV returned to original passageway. \
                 Move UGV again to clear landmine and complete traversal.",
                from, to
            ),
            Event::LandmineCleared { destination, .. } => {
                format!("Landmine cleared. UGV moved to passage {}.", destination)
            }
            Event::GroundMoved { destination, .. } => {
                format!("UGV moved to passage {}.", destination)
            }
            Event::AerialMoved {
                destination,
                origin,
                edge_destination,
                ..
            } => format!(
                "UAV moved to passage {}. Estimates can now be obtained for edge {}, {}.",
                destination, origin, edge_destination
            ),
            Event::MoveRejected {
                agent, destination, ..
            } => format!(
                "{} could not be moved to passage {}. Please check the destination exists \
                 and is adjacent to the {}'s current location",
                agent.label(),
                destination,
                agent.label()
            ),
            Event::MissionSuccess { .. } => "MISSION SUCCESS".to_string(),
            Event::EpisodeReset {
                episode,
                start_node,
                end_node,
                ..
            } => format!(
                "Episode {} started at {}, end node {}",
                episode, start_node, end_node
            ),
            Event::EdgesRestored { edge_count, .. } => {
                format!("Restored {} edges to their configured state", edge_count)
            }
        }
    }
}

/// Event log for storing and querying mission events.
///
/// This is a simple wrapper around Vec<Event> with convenience methods.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EventLog {
    events: Vec<Event>,
}

impl EventLog {
    /// Create a new empty event log
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Add an event to the log
    pub fn log(&mut self, event: Event) {
        self.events.push(event);
    }

    /// Get the number of events logged
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Check if the log is empty
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Get all events
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Most recent event
    pub fn last(&self) -> Option<&Event> {
        self.events.last()
    }

    /// Get events of a specific type
    pub fn events_of_type(&self, event_type: &str) -> Vec<&Event> {
        self.events
            .iter()
            .filter(|e| e.event_type() == event_type)
            .collect()
    }

    /// Get events for a specific edge
    pub fn events_for_edge(&self, edge: EdgeId) -> Vec<&Event> {
        self.events
            .iter()
            .filter(|e| e.edge_id() == Some(edge))
            .collect()
    }

    /// Get events of one episode
    pub fn events_in_episode(&self, episode: usize) -> Vec<&Event> {
        self.events
            .iter()
            .filter(|e| e.episode() == episode)
            .collect()
    }

    /// Clear all events
    pub fn clear(&mut self) {
        self.events.clear();
    }
}
