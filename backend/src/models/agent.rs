//! Agent model
//!
//! The mission fields two mobile units:
//! - **Ground agent (UGV)**: traverses edges, discovers and clears landmines
//! - **Aerial agent (UAV)**: flies over edges, enabling oracle queries, never
//!   interacts with hazards
//!
//! Agents only hold position. Movement rules live in `MissionEngine`.

use serde::{Deserialize, Serialize};

/// Which unit an action concerns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AgentKind {
    Ground,
    Aerial,
}

impl AgentKind {
    /// Short label used in log messages ("UGV" / "UAV")
    pub fn label(&self) -> &'static str {
        match self {
            AgentKind::Ground => "UGV",
            AgentKind::Aerial => "UAV",
        }
    }
}

/// A mobile unit and its position on the mission graph
///
/// # Example
/// ```
/// use mission_simulator_core_rs::{Agent, AgentKind};
///
/// let agent = Agent::new(AgentKind::Ground, "A".to_string());
/// assert_eq!(agent.location(), "A");
/// assert_eq!(agent.traversals(), 0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Agent {
    kind: AgentKind,

    /// Current node identifier
    location: String,

    /// Completed traversals in the current episode
    traversals: usize,
}

impl Agent {
    pub fn new(kind: AgentKind, location: String) -> Self {
        Self {
            kind,
            location,
            traversals: 0,
        }
    }

    pub fn kind(&self) -> AgentKind {
        self.kind
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn traversals(&self) -> usize {
        self.traversals
    }

    pub fn is_at(&self, node: &str) -> bool {
        self.location == node
    }

    /// Complete a traversal to `destination`
    pub(crate) fn move_to(&mut self, destination: &str) {
        self.location = destination.to_string();
        self.traversals += 1;
    }

    /// Place the agent at the start of a new episode
    pub(crate) fn place_at(&mut self, node: &str) {
        self.location = node.to_string();
        self.traversals = 0;
    }

    pub(crate) fn restore(&mut self, location: String, traversals: usize) {
        self.location = location;
        self.traversals = traversals;
    }
}
