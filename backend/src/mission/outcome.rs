//! Action outcomes
//!
//! Invalid actions are routine for an exploring controller, so no action
//! returns an error. Each returns a tagged outcome instead.

use crate::models::edge::{EdgeId, Oracle};
use serde::{Deserialize, Serialize};

/// Result of `MissionEngine::move_ground`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GroundMove {
    /// Hidden landmine found; agent stayed put. Move again to clear it.
    HazardDiscovered { edge: EdgeId },

    /// Found landmine cleared and traversal completed
    HazardCleared { edge: EdgeId },

    /// Clear edge traversed
    Moved { edge: EdgeId },

    /// Not adjacent, unknown destination, or same node. Nothing changed.
    Rejected,
}

impl GroundMove {
    /// Numeric code used by scripted controllers
    ///
    /// `0` discovered, `1` cleared, `2` moved, `-1` rejected.
    pub fn code(&self) -> i32 {
        match self {
            GroundMove::HazardDiscovered { .. } => 0,
            GroundMove::HazardCleared { .. } => 1,
            GroundMove::Moved { .. } => 2,
            GroundMove::Rejected => -1,
        }
    }

    /// Edge involved, `None` when rejected
    pub fn edge(&self) -> Option<EdgeId> {
        match self {
            GroundMove::HazardDiscovered { edge }
            | GroundMove::HazardCleared { edge }
            | GroundMove::Moved { edge } => Some(*edge),
            GroundMove::Rejected => None,
        }
    }

    /// True if the ground agent changed position
    pub fn arrived(&self) -> bool {
        matches!(
            self,
            GroundMove::HazardCleared { .. } | GroundMove::Moved { .. }
        )
    }
}

/// Result of `MissionEngine::move_air`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AirMove {
    /// Edge flown over and marked scanned
    Scanned { edge: EdgeId },

    /// Not adjacent, unknown destination, or same node. Nothing changed.
    Rejected,
}

impl AirMove {
    pub fn edge(&self) -> Option<EdgeId> {
        match self {
            AirMove::Scanned { edge } => Some(*edge),
            AirMove::Rejected => None,
        }
    }
}

/// Why an oracle query was refused, in precondition order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QueryRefusal {
    NoEdgeSelected,
    NotScanned,
    AlreadyQueried,
}

impl QueryRefusal {
    /// Diagnostic fragment for log messages
    pub fn describe(&self, oracle: Oracle) -> String {
        match self {
            QueryRefusal::NoEdgeSelected => "no edge is selected".to_string(),
            QueryRefusal::NotScanned => "the UAV has not scanned this edge".to_string(),
            QueryRefusal::AlreadyQueried => {
                format!("the {} has already been queried", oracle.label())
            }
        }
    }
}

/// Result of `MissionEngine::query_ai` / `query_human`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum QueryOutcome {
    Answered { edge: EdgeId, estimate: f64 },
    Refused(QueryRefusal),
}

impl QueryOutcome {
    pub fn is_answered(&self) -> bool {
        matches!(self, QueryOutcome::Answered { .. })
    }

    pub fn estimate(&self) -> Option<f64> {
        match self {
            QueryOutcome::Answered { estimate, .. } => Some(*estimate),
            QueryOutcome::Refused(_) => None,
        }
    }
}
