//! Mission configuration
//!
//! Loads the JSON mission file into in-memory structures:
//!
//! ```json
//! {
//!   "edges": [
//!     {"origin": "(5, 5)", "destination": "(5, 6)", "terrain": "grass",
//!      "landmine": true, "human_estimate": 4.0, "ai_estimate": 3.5}
//!   ],
//!   "mission": {
//!     "start": "(5, 5)", "end": "(9, 9)",
//!     "human estimate time": 5, "AI estimate time": 3,
//!     "UGV traversal time": 1, "UGV clear time": 2, "UAV traversal time": 1
//!   }
//! }
//! ```
//!
//! Malformed configuration is the only fatal error class of the simulator and is
//! surfaced once, at construction.

use crate::costs::ActionTimings;
use crate::mission::MissionError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// One edge entry of the mission file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeConfig {
    pub origin: String,
    pub destination: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub terrain: Option<String>,

    #[serde(default, alias = "meta", skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Value>,

    /// Hazard present on this edge
    #[serde(default, alias = "landmine_present")]
    pub landmine: bool,

    #[serde(default)]
    pub human_estimate: f64,

    #[serde(default)]
    pub ai_estimate: f64,
}

impl EdgeConfig {
    /// Hazard-free edge between `origin` and `destination`
    pub fn new(origin: impl Into<String>, destination: impl Into<String>) -> Self {
        Self {
            origin: origin.into(),
            destination: destination.into(),
            terrain: None,
            metadata: None,
            landmine: false,
            human_estimate: 0.0,
            ai_estimate: 0.0,
        }
    }

    pub fn with_landmine(mut self, landmine: bool) -> Self {
        self.landmine = landmine;
        self
    }

    pub fn with_estimates(mut self, human_estimate: f64, ai_estimate: f64) -> Self {
        self.human_estimate = human_estimate;
        self.ai_estimate = ai_estimate;
        self
    }

    pub fn with_terrain(mut self, terrain: impl Into<String>) -> Self {
        self.terrain = Some(terrain.into());
        self
    }

    pub fn with_metadata(mut self, metadata: serde_json::Value) -> Self {
        self.metadata = Some(metadata);
        self
    }
}

/// The `mission` block of the mission file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MissionSettings {
    /// Start node (evaluation mode only)
    #[serde(default)]
    pub start: Option<String>,

    /// End node (evaluation mode only)
    #[serde(default)]
    pub end: Option<String>,

    #[serde(flatten)]
    pub timings: ActionTimings,
}

/// Complete mission configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MissionConfig {
    pub edges: Vec<EdgeConfig>,
    pub mission: MissionSettings,
}

/// How start/end nodes are chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RunMode {
    /// Start/end fixed by the configuration, `reset()` is a no-op
    Evaluation,

    /// Start/end sampled from the interior nodes on every `reset()`
    Training {
        /// RNG seed for deterministic sampling
        seed: u64,
    },
}

impl RunMode {
    pub fn is_evaluation(&self) -> bool {
        matches!(self, RunMode::Evaluation)
    }
}

impl MissionConfig {
    /// Build a configuration in code
    pub fn new(edges: Vec<EdgeConfig>, timings: ActionTimings) -> Self {
        Self {
            edges,
            mission: MissionSettings {
                start: None,
                end: None,
                timings,
            },
        }
    }

    /// Set the fixed start/end pair used in evaluation mode
    pub fn with_endpoints(mut self, start: impl Into<String>, end: impl Into<String>) -> Self {
        self.mission.start = Some(start.into());
        self.mission.end = Some(end.into());
        self
    }

    /// Parse a mission file from a JSON string
    pub fn from_json_str(json: &str) -> Result<Self, MissionError> {
        serde_json::from_str(json)
            .map_err(|e| MissionError::Parse(format!("Mission config parse failed: {}", e)))
    }

    /// Read and parse a mission file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, MissionError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .map_err(|e| MissionError::Io(format!("{}: {}", path.display(), e)))?;
        Self::from_json_str(&contents)
    }

    pub fn timings(&self) -> &ActionTimings {
        &self.mission.timings
    }

    /// Validate the configuration for the given run mode
    ///
    /// Checks:
    /// - At least one edge
    /// - Every edge has two distinct, non-empty endpoints
    /// - Timing constants are finite and non-negative
    /// - In evaluation mode, start and end are set and name existing nodes
    pub fn validate(&self, mode: RunMode) -> Result<(), MissionError> {
        if self.edges.is_empty() {
            return Err(MissionError::InvalidConfig(
                "Must have at least one edge".to_string(),
            ));
        }

        let mut nodes = HashSet::new();
        for (index, edge) in self.edges.iter().enumerate() {
            if edge.origin.is_empty() || edge.destination.is_empty() {
                return Err(MissionError::InvalidConfig(format!(
                    "Edge {} has an empty endpoint",
                    index
                )));
            }
            if edge.origin == edge.destination {
                return Err(MissionError::InvalidConfig(format!(
                    "Edge {} connects {} to itself",
                    index, edge.origin
                )));
            }
            nodes.insert(edge.origin.as_str());
            nodes.insert(edge.destination.as_str());
        }

        self.mission.timings.validate()?;

        if mode.is_evaluation() {
            let start = self.mission.start.as_deref().ok_or_else(|| {
                MissionError::InvalidConfig("Evaluation mode requires a start node".to_string())
            })?;
            let end = self.mission.end.as_deref().ok_or_else(|| {
                MissionError::InvalidConfig("Evaluation mode requires an end node".to_string())
            })?;

            for node in [start, end] {
                if !nodes.contains(node) {
                    return Err(MissionError::UnknownNode(node.to_string()));
                }
            }
        }

        Ok(())
    }
}
