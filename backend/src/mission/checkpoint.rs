//! Checkpoint - Save/Load Mission State
//!
//! Serializes the complete mutable state of a `MissionEngine` so a controller
//! run can be paused and resumed.
//!
//! # Critical Invariants
//!
//! - **Determinism**: restored RNG state resumes the same episode sequence
//! - **Edge Integrity**: edge count and endpoints match the configuration
//! - **Hazard Ordering**: no snapshot may hold a cleared-but-present landmine
//! - **Static Minefield**: hazard flags only on edges configured with a landmine
//! - **Config Matching**: state can only be loaded with matching config

use crate::config::RunMode;
use crate::costs::CostAccumulator;
use crate::mission::MissionError;
use crate::models::agent::Agent;
use crate::models::edge::EdgeState;
use crate::models::event::Event;
use crate::models::network::EdgeNetwork;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

// ============================================================================
// Snapshot Structures
// ============================================================================

/// Complete mission state snapshot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MissionSnapshot {
    pub run_id: String,

    pub mode: RunMode,

    pub episode: usize,
    pub step: usize,

    pub start_node: String,
    pub end_node: String,

    pub ground: AgentSnapshot,
    pub air: AgentSnapshot,

    /// Index of the selected edge
    pub selected_edge: Option<usize>,

    pub costs: CostAccumulator,

    /// RNG state at time of snapshot (CRITICAL for determinism)
    pub rng_state: u64,

    /// Edge flags, in configuration order
    pub edges: Vec<EdgeSnapshot>,

    /// Most recent event, restored as the current log line
    #[serde(default)]
    pub last_event: Option<Event>,

    /// SHA256 hash of original config (for validation)
    pub config_hash: String,
}

/// Agent state snapshot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentSnapshot {
    pub location: String,
    pub traversals: usize,
}

impl From<&Agent> for AgentSnapshot {
    fn from(agent: &Agent) -> Self {
        AgentSnapshot {
            location: agent.location().to_string(),
            traversals: agent.traversals(),
        }
    }
}

/// Edge state snapshot
///
/// Endpoints are stored only to detect a reordered configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EdgeSnapshot {
    pub origin: String,
    pub destination: String,
    pub landmine_present: bool,
    pub landmine_found: bool,
    pub landmine_cleared: bool,
    pub uav_scanned: bool,
    pub human_queried: bool,
    pub ai_queried: bool,
}

impl From<&EdgeState> for EdgeSnapshot {
    fn from(edge: &EdgeState) -> Self {
        EdgeSnapshot {
            origin: edge.origin().to_string(),
            destination: edge.destination().to_string(),
            landmine_present: edge.landmine_present(),
            landmine_found: edge.landmine_found(),
            landmine_cleared: edge.landmine_cleared(),
            uav_scanned: edge.uav_scanned(),
            human_queried: edge.human_queried(),
            ai_queried: edge.ai_queried(),
        }
    }
}

impl EdgeSnapshot {
    fn check_flags(&self, configured_landmine: bool) -> Result<(), String> {
        let any_hazard = self.landmine_present || self.landmine_found || self.landmine_cleared;
        if any_hazard && !configured_landmine {
            return Err("hazard flags set on an edge configured without a landmine".to_string());
        }
        if self.landmine_cleared && self.landmine_present {
            return Err("cleared landmine still marked present".to_string());
        }
        if self.landmine_found && !self.landmine_present && !self.landmine_cleared {
            return Err("landmine found but neither present nor cleared".to_string());
        }
        if self.landmine_cleared && !self.landmine_found {
            return Err("landmine cleared without being found".to_string());
        }
        if (self.human_queried || self.ai_queried) && !self.uav_scanned {
            return Err("oracle queried on an unscanned edge".to_string());
        }
        Ok(())
    }
}

// ============================================================================
// Config Hashing
// ============================================================================

/// Compute deterministic SHA256 hash of config
///
/// Uses canonical JSON serialization with sorted keys so the hash does not
/// depend on map iteration order.
pub fn compute_config_hash<T: Serialize>(config: &T) -> Result<String, MissionError> {
    use serde_json::Value;
    use std::collections::BTreeMap;

    let value = serde_json::to_value(config).map_err(|e| {
        MissionError::Serialization(format!("Config serialization failed: {}", e))
    })?;

    fn canonicalize(value: Value) -> Value {
        match value {
            Value::Object(map) => {
                let sorted: BTreeMap<String, Value> =
                    map.into_iter().map(|(k, v)| (k, canonicalize(v))).collect();
                Value::Object(sorted.into_iter().collect())
            }
            Value::Array(arr) => Value::Array(arr.into_iter().map(canonicalize).collect()),
            other => other,
        }
    }

    let json = serde_json::to_string(&canonicalize(value)).map_err(|e| {
        MissionError::Serialization(format!("Config serialization failed: {}", e))
    })?;

    let mut hasher = Sha256::new();
    hasher.update(json.as_bytes());
    Ok(format!("{:x}", hasher.finalize()))
}

// ============================================================================
// Validation Functions
// ============================================================================

/// Validate snapshot integrity against the network built from config
///
/// Checks:
/// - Edge count and endpoints match
/// - Hazard flag ordering on every edge, and only on configured landmines
/// - Agent locations and start/end nodes exist
/// - Selected edge is in range
/// - Cost categories are finite and non-negative
pub fn validate_snapshot(
    snapshot: &MissionSnapshot,
    network: &EdgeNetwork,
) -> Result<(), MissionError> {
    // 1. Edge identity
    if snapshot.edges.len() != network.len() {
        return Err(MissionError::StateValidation(format!(
            "Edge count mismatch: config has {}, snapshot has {}",
            network.len(),
            snapshot.edges.len()
        )));
    }

    for (index, (saved, edge)) in snapshot.edges.iter().zip(network.edges()).enumerate() {
        if saved.origin != edge.origin() || saved.destination != edge.destination() {
            return Err(MissionError::StateValidation(format!(
                "Edge {} endpoints differ: config ({}, {}), snapshot ({}, {})",
                index,
                edge.origin(),
                edge.destination(),
                saved.origin,
                saved.destination
            )));
        }
        saved.check_flags(edge.configured_landmine()).map_err(|reason| {
            MissionError::StateValidation(format!("Edge {} invalid: {}", index, reason))
        })?;
    }

    // 2. Locations
    let locations = [
        ("start node", &snapshot.start_node),
        ("end node", &snapshot.end_node),
        ("ground agent", &snapshot.ground.location),
        ("aerial agent", &snapshot.air.location),
    ];
    for (what, node) in locations {
        if !network.contains_node(node) {
            return Err(MissionError::StateValidation(format!(
                "Unknown {} location: {}",
                what, node
            )));
        }
    }

    // 3. Selection
    if let Some(index) = snapshot.selected_edge {
        if index >= network.len() {
            return Err(MissionError::StateValidation(format!(
                "Selected edge {} out of range ({} edges)",
                index,
                network.len()
            )));
        }
    }

    // 4. Costs
    if !snapshot.costs.is_valid() {
        return Err(MissionError::StateValidation(
            "Cost categories must be finite and non-negative".to_string(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EdgeConfig;

    fn network() -> EdgeNetwork {
        EdgeNetwork::new(&[
            EdgeConfig::new("A", "B"),
            EdgeConfig::new("B", "C").with_landmine(true),
        ])
    }

    fn snapshot_for(network: &EdgeNetwork) -> MissionSnapshot {
        MissionSnapshot {
            run_id: "run".to_string(),
            mode: RunMode::Evaluation,
            episode: 0,
            step: 0,
            start_node: "A".to_string(),
            end_node: "C".to_string(),
            ground: AgentSnapshot {
                location: "A".to_string(),
                traversals: 0,
            },
            air: AgentSnapshot {
                location: "A".to_string(),
                traversals: 0,
            },
            selected_edge: None,
            costs: CostAccumulator::new(),
            rng_state: 1,
            edges: network.edges().iter().map(EdgeSnapshot::from).collect(),
            last_event: None,
            config_hash: String::new(),
        }
    }

    #[test]
    fn test_compute_config_hash_deterministic() {
        #[derive(Serialize)]
        struct TestConfig {
            value: i32,
            name: String,
        }

        let hash1 = compute_config_hash(&TestConfig {
            value: 42,
            name: "test".to_string(),
        })
        .unwrap();
        let hash2 = compute_config_hash(&TestConfig {
            value: 42,
            name: "test".to_string(),
        })
        .unwrap();

        assert_eq!(hash1, hash2, "Same config should produce same hash");
        assert_eq!(hash1.len(), 64);
    }

    #[test]
    fn test_valid_snapshot_passes() {
        let network = network();
        assert!(validate_snapshot(&snapshot_for(&network), &network).is_ok());
    }

    #[test]
    fn test_cleared_and_present_rejected() {
        let network = network();
        let mut snapshot = snapshot_for(&network);
        snapshot.edges[1].landmine_present = true;
        snapshot.edges[1].landmine_found = true;
        snapshot.edges[1].landmine_cleared = true;

        let err = validate_snapshot(&snapshot, &network).unwrap_err();
        assert!(matches!(err, MissionError::StateValidation(_)));
    }

    #[test]
    fn test_landmine_on_clear_edge_rejected() {
        let network = network();
        let mut snapshot = snapshot_for(&network);
        snapshot.edges[0].landmine_present = true;

        let err = validate_snapshot(&snapshot, &network).unwrap_err();
        assert!(err.to_string().contains("configured without a landmine"));

        let mut snapshot = snapshot_for(&network);
        snapshot.edges[0].landmine_found = true;
        snapshot.edges[0].landmine_cleared = true;
        assert!(validate_snapshot(&snapshot, &network).is_err());
    }

    #[test]
    fn test_unknown_location_rejected() {
        let network = network();
        let mut snapshot = snapshot_for(&network);
        snapshot.air.location = "Z".to_string();

        let err = validate_snapshot(&snapshot, &network).unwrap_err();
        assert!(err.to_string().contains("aerial agent"));
    }

    #[test]
    fn test_selected_edge_out_of_range() {
        let network = network();
        let mut snapshot = snapshot_for(&network);
        snapshot.selected_edge = Some(2);

        assert!(validate_snapshot(&snapshot, &network).is_err());
    }

    #[test]
    fn test_edge_count_mismatch() {
        let network = network();
        let mut snapshot = snapshot_for(&network);
        snapshot.edges.pop();

        let err = validate_snapshot(&snapshot, &network).unwrap_err();
        assert!(err.to_string().contains("Edge count mismatch"));
    }
}
