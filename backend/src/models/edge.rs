//! Edge model
//!
//! Represents one undirected connection between two nodes of the mission graph.
//! Each edge carries:
//! - Hazard flags (present, found, cleared)
//! - Aerial scan flag
//! - One-shot oracle query flags and their estimates
//! - Opaque terrain/metadata payload
//!
//! # Hazard Lattice
//!
//! ```text
//! {none}
//! {present} -> {present, found} -> {cleared}
//! ```
//!
//! CRITICAL: Flags are only ever mutated by `MissionEngine`. Every setter here
//! is crate-private.

use crate::config::EdgeConfig;
use serde::{Deserialize, Serialize};

/// Stable index of an edge inside an `EdgeNetwork`
///
/// Edges are never relocated once the network is built, so an `EdgeId`
/// stays valid for the lifetime of the engine that issued it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EdgeId(pub(crate) usize);

impl EdgeId {
    /// Position of the edge in configuration order
    pub fn index(&self) -> usize {
        self.0
    }
}

impl std::fmt::Display for EdgeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "edge#{}", self.0)
    }
}

/// Which oracle an estimate comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Oracle {
    /// Human analyst estimate
    Human,
    /// AI model estimate
    Ai,
}

impl Oracle {
    /// Label used in log messages ("Human" / "AI")
    pub fn label(&self) -> &'static str {
        match self {
            Oracle::Human => "Human",
            Oracle::Ai => "AI",
        }
    }
}

/// Hazard state of an edge, derived from its flags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HazardState {
    /// No hazard was ever configured on this edge
    None,
    /// Hazard present, ground agent has not encountered it yet
    Hidden,
    /// Hazard encountered once, next ground move clears it
    Found,
    /// Hazard cleared
    Cleared,
}

/// Mutable per-edge mission state
///
/// # Example
/// ```
/// use mission_simulator_core_rs::config::EdgeConfig;
/// use mission_simulator_core_rs::models::edge::{EdgeState, HazardState};
///
/// let edge = EdgeState::from_config(&EdgeConfig::new("A", "B").with_landmine(true));
/// assert!(edge.connects("B", "A"));
/// assert_eq!(edge.hazard_state(), HazardState::Hidden);
/// assert!(!edge.uav_scanned());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeState {
    origin: String,
    destination: String,

    /// Terrain label (opaque)
    terrain: Option<String>,

    /// Arbitrary metadata (opaque)
    metadata: Option<serde_json::Value>,

    /// Hazard currently blocks clean traversal
    landmine_present: bool,

    /// Hazard encountered once by the ground agent, not yet cleared
    landmine_found: bool,

    landmine_cleared: bool,

    /// Aerial agent flew over this edge (precondition for oracle queries)
    uav_scanned: bool,

    human_queried: bool,
    ai_queried: bool,

    human_estimate: f64,
    ai_estimate: f64,

    /// Hazard flag as configured, used by `restore`
    configured_landmine: bool,
}

impl EdgeState {
    /// Build a pristine edge from its configuration entry
    pub fn from_config(config: &EdgeConfig) -> Self {
        Self {
            origin: config.origin.clone(),
            destination: config.destination.clone(),
            terrain: config.terrain.clone(),
            metadata: config.metadata.clone(),
            landmine_present: config.landmine,
            landmine_found: false,
            landmine_cleared: false,
            uav_scanned: false,
            human_queried: false,
            ai_queried: false,
            human_estimate: config.human_estimate,
            ai_estimate: config.ai_estimate,
            configured_landmine: config.landmine,
        }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    pub fn origin(&self) -> &str {
        &self.origin
    }

    pub fn destination(&self) -> &str {
        &self.destination
    }

    pub fn terrain(&self) -> Option<&str> {
        self.terrain.as_deref()
    }

    pub fn metadata(&self) -> Option<&serde_json::Value> {
        self.metadata.as_ref()
    }

    /// Hazard flag as written in the mission file
    pub fn configured_landmine(&self) -> bool {
        self.configured_landmine
    }

    pub fn landmine_present(&self) -> bool {
        self.landmine_present
    }

    pub fn landmine_found(&self) -> bool {
        self.landmine_found
    }

    pub fn landmine_cleared(&self) -> bool {
        self.landmine_cleared
    }

    pub fn uav_scanned(&self) -> bool {
        self.uav_scanned
    }

    pub fn human_queried(&self) -> bool {
        self.human_queried
    }

    pub fn ai_queried(&self) -> bool {
        self.ai_queried
    }

    pub fn human_estimate(&self) -> f64 {
        self.human_estimate
    }

    pub fn ai_estimate(&self) -> f64 {
        self.ai_estimate
    }

    /// Whether the given oracle was already consulted for this edge
    pub fn queried(&self, oracle: Oracle) -> bool {
        match oracle {
            Oracle::Human => self.human_queried,
            Oracle::Ai => self.ai_queried,
        }
    }

    /// Estimate held by the given oracle
    pub fn estimate(&self, oracle: Oracle) -> f64 {
        match oracle {
            Oracle::Human => self.human_estimate,
            Oracle::Ai => self.ai_estimate,
        }
    }

    /// Derived hazard state
    pub fn hazard_state(&self) -> HazardState {
        if self.landmine_cleared {
            HazardState::Cleared
        } else if self.landmine_present && self.landmine_found {
            HazardState::Found
        } else if self.landmine_present {
            HazardState::Hidden
        } else {
            HazardState::None
        }
    }

    /// True if `node` is one of the endpoints
    pub fn touches(&self, node: &str) -> bool {
        self.origin == node || self.destination == node
    }

    /// True if the unordered endpoint pair equals {a, b}
    pub fn connects(&self, a: &str, b: &str) -> bool {
        (self.origin == a && self.destination == b) || (self.origin == b && self.destination == a)
    }

    /// Endpoint opposite to `node`, if `node` is an endpoint
    pub fn other_end(&self, node: &str) -> Option<&str> {
        if self.origin == node {
            Some(&self.destination)
        } else if self.destination == node {
            Some(&self.origin)
        } else {
            None
        }
    }

    /// Checks the flag invariants, returning a description of the first violation
    pub fn check_invariants(&self) -> Result<(), String> {
        if self.landmine_cleared && !self.landmine_found {
            return Err("landmine cleared without being found".to_string());
        }
        if self.landmine_cleared && self.landmine_present {
            return Err("landmine cleared but still present".to_string());
        }
        if self.human_queried && !self.uav_scanned {
            return Err("human queried on an unscanned edge".to_string());
        }
        if self.ai_queried && !self.uav_scanned {
            return Err("AI queried on an unscanned edge".to_string());
        }
        Ok(())
    }

    // ========================================================================
    // Transitions (engine only)
    // ========================================================================

    /// {present} -> {present, found}
    pub(crate) fn discover_landmine(&mut self) {
        debug_assert!(self.landmine_present && !self.landmine_found);
        self.landmine_found = true;
    }

    /// {present, found} -> {cleared}
    pub(crate) fn clear_landmine(&mut self) {
        debug_assert!(self.landmine_present && self.landmine_found);
        self.landmine_cleared = true;
        self.landmine_present = false;
    }

    pub(crate) fn mark_scanned(&mut self) {
        self.uav_scanned = true;
    }

    pub(crate) fn mark_queried(&mut self, oracle: Oracle) {
        match oracle {
            Oracle::Human => self.human_queried = true,
            Oracle::Ai => self.ai_queried = true,
        }
    }

    /// Return every flag to its configured value
    pub(crate) fn restore(&mut self) {
        self.landmine_present = self.configured_landmine;
        self.landmine_found = false;
        self.landmine_cleared = false;
        self.uav_scanned = false;
        self.human_queried = false;
        self.ai_queried = false;
    }

    /// Overwrite flags from a checkpoint
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn apply_flags(
        &mut self,
        landmine_present: bool,
        landmine_found: bool,
        landmine_cleared: bool,
        uav_scanned: bool,
        human_queried: bool,
        ai_queried: bool,
    ) {
        self.landmine_present = landmine_present;
        self.landmine_found = landmine_found;
        self.landmine_cleared = landmine_cleared;
        self.uav_scanned = uav_scanned;
        self.human_queried = human_queried;
        self.ai_queried = ai_queried;
    }
}
