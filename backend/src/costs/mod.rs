//! Cost Types
//!
//! - `ActionTimings`: fixed cost per action kind (from the mission file)
//! - `CostAccumulator`: running per-category totals for the current episode
//!
//! The mission total is always the sum of the categories.

pub mod rates;

pub use rates::{ActionKind, ActionTimings};

use serde::{Deserialize, Serialize};

/// Accumulated costs for the current episode, by category
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CostAccumulator {
    pub ground_traversal: f64,
    pub hazard_clearing: f64,
    pub air_traversal: f64,
    pub human_queries: f64,
    pub ai_queries: f64,
}

impl CostAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Charge `amount` to the category of `kind`
    pub fn add(&mut self, kind: ActionKind, amount: f64) {
        match kind {
            ActionKind::GroundTraversal => self.ground_traversal += amount,
            ActionKind::HazardClear => self.hazard_clearing += amount,
            ActionKind::AirTraversal => self.air_traversal += amount,
            ActionKind::HumanEstimate => self.human_queries += amount,
            ActionKind::AiEstimate => self.ai_queries += amount,
        }
    }

    /// Amount charged so far to the category of `kind`
    pub fn get(&self, kind: ActionKind) -> f64 {
        match kind {
            ActionKind::GroundTraversal => self.ground_traversal,
            ActionKind::HazardClear => self.hazard_clearing,
            ActionKind::AirTraversal => self.air_traversal,
            ActionKind::HumanEstimate => self.human_queries,
            ActionKind::AiEstimate => self.ai_queries,
        }
    }

    /// Total cost across all categories
    pub fn total(&self) -> f64 {
        self.ground_traversal
            + self.hazard_clearing
            + self.air_traversal
            + self.human_queries
            + self.ai_queries
    }

    /// All categories non-negative and finite
    pub fn is_valid(&self) -> bool {
        ActionKind::ALL
            .iter()
            .all(|kind| self.get(*kind).is_finite() && self.get(*kind) >= 0.0)
    }
}
