//! Action Timings
//!
//! Fixed time cost charged for each kind of mission action.
//! Loaded once from the `mission` block and immutable for the run.

use crate::mission::MissionError;
use serde::{Deserialize, Serialize};

/// Kind of costed action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActionKind {
    /// Ground agent traverses an edge (or bounces off a hidden hazard)
    GroundTraversal,
    /// Ground agent clears a found hazard and completes the traversal
    HazardClear,
    /// Aerial agent flies over an edge
    AirTraversal,
    /// Human oracle consulted
    HumanEstimate,
    /// AI oracle consulted
    AiEstimate,
}

impl ActionKind {
    pub const ALL: [ActionKind; 5] = [
        ActionKind::GroundTraversal,
        ActionKind::HazardClear,
        ActionKind::AirTraversal,
        ActionKind::HumanEstimate,
        ActionKind::AiEstimate,
    ];
}

/// Timing constants of a mission
///
/// Field names on the wire follow the mission file format
/// (`"human estimate time"`, `"UGV clear time"`, ...).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ActionTimings {
    #[serde(rename = "human estimate time")]
    pub human_estimate_time: f64,

    #[serde(rename = "AI estimate time")]
    pub ai_estimate_time: f64,

    #[serde(rename = "UGV traversal time")]
    pub ugv_traversal_time: f64,

    #[serde(rename = "UGV clear time")]
    pub ugv_clear_time: f64,

    #[serde(rename = "UAV traversal time")]
    pub uav_traversal_time: f64,
}

impl Default for ActionTimings {
    fn default() -> Self {
        Self {
            human_estimate_time: 5.0,
            ai_estimate_time: 3.0,
            ugv_traversal_time: 1.0,
            ugv_clear_time: 2.0,
            uav_traversal_time: 1.0,
        }
    }
}

impl ActionTimings {
    /// Cost charged for one action of the given kind
    pub fn cost_of(&self, kind: ActionKind) -> f64 {
        match kind {
            ActionKind::GroundTraversal => self.ugv_traversal_time,
            ActionKind::HazardClear => self.ugv_clear_time,
            ActionKind::AirTraversal => self.uav_traversal_time,
            ActionKind::HumanEstimate => self.human_estimate_time,
            ActionKind::AiEstimate => self.ai_estimate_time,
        }
    }

    /// All constants must be finite and non-negative
    pub fn validate(&self) -> Result<(), MissionError> {
        for kind in ActionKind::ALL {
            let value = self.cost_of(kind);
            if !value.is_finite() || value < 0.0 {
                return Err(MissionError::InvalidConfig(format!(
                    "{:?} time must be a non-negative number, got {}",
                    kind, value
                )));
            }
        }
        Ok(())
    }
}
