//! Mission Engine
//!
//! The mission state machine. Holds the edge network, both agents, the
//! start/end nodes, the timing constants, the running cost and the selected
//! edge, and exposes the caller-driven action API:
//!
//! ```text
//! select_edge(a, b)   focus an edge for querying
//! query_ai()          consult the AI oracle on the selected edge
//! query_human()       consult the human oracle on the selected edge
//! move_ground(dest)   UGV move (discover -> clear -> traverse)
//! move_air(dest)      UAV move (scans the edge)
//! reset()             new episode (training mode only)
//! restore_edges()     return every edge to its configured state
//! ```
//!
//! # Critical Invariants
//!
//! 1. No action moves an agent through a non-adjacent node
//! 2. Each oracle is consulted at most once per edge, only after a UAV scan
//! 3. A landmine is cleared only after it has been found
//! 4. `total_cost` never decreases within an episode; each action adds exactly
//!    its timing constant, failed actions add nothing
//!
//! # Example
//!
//! ```rust
//! use mission_simulator_core_rs::config::{EdgeConfig, MissionConfig, RunMode};
//! use mission_simulator_core_rs::costs::ActionTimings;
//! use mission_simulator_core_rs::mission::{GroundMove, MissionEngine};
//!
//! let config = MissionConfig::new(
//!     vec![EdgeConfig::new("A", "B"), EdgeConfig::new("B", "C").with_landmine(true)],
//!     ActionTimings::default(),
//! )
//! .with_endpoints("A", "C");
//!
//! let mut engine = MissionEngine::new(config, RunMode::Evaluation).unwrap();
//!
//! assert_eq!(engine.move_ground("B").code(), 2);
//! assert!(matches!(engine.move_ground("C"), GroundMove::HazardDiscovered { .. }));
//! assert!(matches!(engine.move_ground("C"), GroundMove::HazardCleared { .. }));
//! assert_eq!(engine.ground_location(), "C");
//! assert_eq!(engine.current_log(), "MISSION SUCCESS");
//! ```

use crate::config::{MissionConfig, RunMode};
use crate::core::clock::EpisodeClock;
use crate::costs::{ActionKind, ActionTimings, CostAccumulator};
use crate::mission::checkpoint::{
    compute_config_hash, validate_snapshot, AgentSnapshot, EdgeSnapshot, MissionSnapshot,
};
use crate::mission::outcome::{AirMove, GroundMove, QueryOutcome, QueryRefusal};
use crate::models::agent::{Agent, AgentKind};
use crate::models::edge::{EdgeId, EdgeState, Oracle};
use crate::models::event::{Event, EventLog};
use crate::models::grid;
use crate::models::network::EdgeNetwork;
use crate::rng::RngManager;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Mission error types
///
/// Only construction, configuration loading and checkpoint restore fail.
/// Runtime misuse of the action API is reported through outcomes instead.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MissionError {
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("Unknown node: {0}")]
    UnknownNode(String),

    #[error("I/O error: {0}")]
    Io(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("State validation error: {0}")]
    StateValidation(String),

    #[error("Config mismatch: {0}")]
    ConfigMismatch(String),
}

/// Mission state machine
///
/// Single-threaded and caller-driven: every action runs to completion and
/// touches at most one edge.
pub struct MissionEngine {
    /// Unique id of this run (carried through checkpoints)
    run_id: String,

    mode: RunMode,

    /// Edges (identity-stable) and adjacency index
    network: EdgeNetwork,

    /// Candidate start/end nodes for training episodes
    interior_nodes: Vec<String>,

    timings: ActionTimings,

    start_node: String,
    end_node: String,

    ground: Agent,
    air: Agent,

    /// Edge in focus for oracle queries (non-owning)
    selected_edge: Option<EdgeId>,

    /// Costs of the current episode
    costs: CostAccumulator,

    clock: EpisodeClock,

    /// Deterministic RNG for endpoint sampling
    rng: RngManager,

    event_log: EventLog,

    /// SHA256 of the configuration, binds checkpoints to it
    config_hash: String,
}

impl MissionEngine {
    /// Create a new engine from configuration
    ///
    /// In evaluation mode the configured start/end nodes are used. In
    /// training mode the first episode's endpoints are sampled immediately,
    /// so agent locations are always defined.
    ///
    /// # Errors
    ///
    /// * `MissionError::InvalidConfig` / `UnknownNode` - validation failed
    pub fn new(config: MissionConfig, mode: RunMode) -> Result<Self, MissionError> {
        config.validate(mode)?;

        let config_hash = compute_config_hash(&config)?;
        let network = EdgeNetwork::new(&config.edges);
        let interior_nodes = grid::interior_nodes(network.nodes());

        let mut rng = match mode {
            RunMode::Training { seed } => RngManager::new(seed),
            RunMode::Evaluation => RngManager::new(0),
        };

        let (start_node, end_node) = match mode {
            RunMode::Evaluation => {
                let start = config.mission.start.clone().ok_or_else(|| {
                    MissionError::InvalidConfig("Evaluation mode requires a start node".to_string())
                })?;
                let end = config.mission.end.clone().ok_or_else(|| {
                    MissionError::InvalidConfig("Evaluation mode requires an end node".to_string())
                })?;
                (start, end)
            }
            RunMode::Training { .. } => {
                if interior_nodes.is_empty() {
                    warn!(
                        nodes = network.nodes().len(),
                        "no interior nodes found, sampling endpoints from all nodes"
                    );
                }
                sample_endpoints(&mut rng, network.nodes(), &interior_nodes)
            }
        };

        info!(
            edges = network.len(),
            nodes = network.nodes().len(),
            interior = interior_nodes.len(),
            start = %start_node,
            end = %end_node,
            evaluation = mode.is_evaluation(),
            "mission engine created"
        );

        Ok(Self {
            run_id: uuid::Uuid::new_v4().to_string(),
            mode,
            ground: Agent::new(AgentKind::Ground, start_node.clone()),
            air: Agent::new(AgentKind::Aerial, start_node.clone()),
            network,
            interior_nodes,
            timings: config.mission.timings,
            start_node,
            end_node,
            selected_edge: None,
            costs: CostAccumulator::new(),
            clock: EpisodeClock::new(),
            rng,
            event_log: EventLog::new(),
            config_hash,
        })
    }

    /// Load a mission file and create an engine from it
    pub fn from_path(
        path: impl AsRef<std::path::Path>,
        mode: RunMode,
    ) -> Result<Self, MissionError> {
        Self::new(MissionConfig::from_path(path)?, mode)
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    pub fn run_id(&self) -> &str {
        &self.run_id
    }

    pub fn mode(&self) -> RunMode {
        self.mode
    }

    pub fn is_evaluation(&self) -> bool {
        self.mode.is_evaluation()
    }

    pub fn network(&self) -> &EdgeNetwork {
        &self.network
    }

    pub fn edges(&self) -> &[EdgeState] {
        self.network.edges()
    }

    pub fn edge(&self, id: EdgeId) -> Option<&EdgeState> {
        self.network.edge(id)
    }

    /// Look up an edge without selecting it
    pub fn find_edge(&self, a: &str, b: &str) -> Option<EdgeId> {
        self.network.find_edge(a, b)
    }

    pub fn nodes(&self) -> &[String] {
        self.network.nodes()
    }

    pub fn interior_nodes(&self) -> &[String] {
        &self.interior_nodes
    }

    pub fn timings(&self) -> &ActionTimings {
        &self.timings
    }

    pub fn start_node(&self) -> &str {
        &self.start_node
    }

    pub fn end_node(&self) -> &str {
        &self.end_node
    }

    pub fn ground_location(&self) -> &str {
        self.ground.location()
    }

    pub fn air_location(&self) -> &str {
        self.air.location()
    }

    pub fn ground_agent(&self) -> &Agent {
        &self.ground
    }

    pub fn aerial_agent(&self) -> &Agent {
        &self.air
    }

    pub fn selected_edge(&self) -> Option<EdgeId> {
        self.selected_edge
    }

    /// State of the selected edge, if any
    pub fn selected_edge_state(&self) -> Option<&EdgeState> {
        self.selected_edge.and_then(|id| self.network.edge(id))
    }

    /// Running cost of the current episode
    pub fn total_cost(&self) -> f64 {
        self.costs.total()
    }

    /// Per-category cost breakdown of the current episode
    pub fn costs(&self) -> &CostAccumulator {
        &self.costs
    }

    /// Last log message (empty before the first action)
    pub fn current_log(&self) -> String {
        self.event_log
            .last()
            .map(Event::message)
            .unwrap_or_default()
    }

    pub fn event_log(&self) -> &EventLog {
        &self.event_log
    }

    pub fn episode(&self) -> usize {
        self.clock.episode()
    }

    /// Actions taken in the current episode
    pub fn step(&self) -> usize {
        self.clock.step()
    }

    /// Ground agent stands on the end node
    ///
    /// Derived on demand; the engine keeps accepting actions after success.
    pub fn is_complete(&self) -> bool {
        self.ground.is_at(&self.end_node)
    }

    pub fn config_hash(&self) -> &str {
        &self.config_hash
    }

    // ========================================================================
    // Event Logging & Cost Accrual
    // ========================================================================

    /// Log an event to the event log
    fn log_event(&mut self, event: Event) {
        info!(
            episode = event.episode(),
            step = event.step(),
            event = event.event_type(),
            "{}",
            event.message()
        );
        self.event_log.log(event);
    }

    fn charge(&mut self, kind: ActionKind) {
        let amount = self.timings.cost_of(kind);
        self.costs.add(kind, amount);
        debug!(?kind, amount, total = self.costs.total(), "cost accrued");
    }

    /// Log mission success if the ground agent reached the end node
    fn check_success(&mut self, step: usize) {
        if self.is_complete() {
            self.log_event(Event::MissionSuccess {
                episode: self.clock.episode(),
                step,
                node: self.end_node.clone(),
            });
        }
    }

    // ========================================================================
    // Action API
    // ========================================================================

    /// Select the edge connecting `node_a` and `node_b` (either order)
    ///
    /// Returns `None` and leaves the current selection untouched if no such
    /// edge exists.
    pub fn select_edge(&mut self, node_a: &str, node_b: &str) -> Option<EdgeId> {
        let episode = self.clock.episode();
        let step = self.clock.advance_step();

        match self.network.find_edge(node_a, node_b) {
            Some(edge) => {
                self.selected_edge = Some(edge);
                self.log_event(Event::EdgeSelected {
                    episode,
                    step,
                    edge,
                    node_a: node_a.to_string(),
                    node_b: node_b.to_string(),
                });
                Some(edge)
            }
            None => {
                self.log_event(Event::EdgeNotFound {
                    episode,
                    step,
                    node_a: node_a.to_string(),
                    node_b: node_b.to_string(),
                });
                None
            }
        }
    }

    /// Consult the AI oracle on the selected edge
    pub fn query_ai(&mut self) -> QueryOutcome {
        self.query(Oracle::Ai)
    }

    /// Consult the human oracle on the selected edge
    pub fn query_human(&mut self) -> QueryOutcome {
        self.query(Oracle::Human)
    }

    /// Consult an oracle on the selected edge
    ///
    /// Preconditions, checked in order: an edge is selected, it has been
    /// scanned by the UAV, and this oracle has not been consulted for it.
    pub fn query(&mut self, oracle: Oracle) -> QueryOutcome {
        let episode = self.clock.episode();
        let step = self.clock.advance_step();

        let selected = self
            .selected_edge
            .and_then(|id| self.network.edge(id).map(|edge| (id, edge)));

        let (edge_id, endpoints, refusal, estimate) = match selected {
            None => {
                self.log_event(Event::OracleRefused {
                    episode,
                    step,
                    oracle,
                    reason: QueryRefusal::NoEdgeSelected,
                    endpoints: None,
                });
                return QueryOutcome::Refused(QueryRefusal::NoEdgeSelected);
            }
            Some((id, edge)) => {
                let refusal = if !edge.uav_scanned() {
                    Some(QueryRefusal::NotScanned)
                } else if edge.queried(oracle) {
                    Some(QueryRefusal::AlreadyQueried)
                } else {
                    None
                };
                (
                    id,
                    (edge.origin().to_string(), edge.destination().to_string()),
                    refusal,
                    edge.estimate(oracle),
                )
            }
        };

        if let Some(reason) = refusal {
            self.log_event(Event::OracleRefused {
                episode,
                step,
                oracle,
                reason,
                endpoints: Some(endpoints),
            });
            return QueryOutcome::Refused(reason);
        }

        if let Some(edge) = self.network.edge_mut(edge_id) {
            edge.mark_queried(oracle);
        }
        self.charge(match oracle {
            Oracle::Human => ActionKind::HumanEstimate,
            Oracle::Ai => ActionKind::AiEstimate,
        });

        let (origin, destination) = endpoints;
        self.log_event(Event::OracleQueried {
            episode,
            step,
            oracle,
            edge: edge_id,
            origin,
            destination,
            estimate,
        });

        QueryOutcome::Answered {
            edge: edge_id,
            estimate,
        }
    }

    /// Move the ground agent to an adjacent node
    ///
    /// A hidden landmine pushes the agent back on the first attempt and is
    /// cleared on the second; see `GroundMove` for the outcomes.
    pub fn move_ground(&mut self, destination: &str) -> GroundMove {
        let episode = self.clock.episode();
        let step = self.clock.advance_step();
        let from = self.ground.location().to_string();

        let Some(edge_id) = self.network.find_traversable(&from, destination) else {
            self.log_event(Event::MoveRejected {
                episode,
                step,
                agent: AgentKind::Ground,
                from,
                destination: destination.to_string(),
            });
            return GroundMove::Rejected;
        };

        let (present, found) = match self.network.edge(edge_id) {
            Some(edge) => (edge.landmine_present(), edge.landmine_found()),
            None => (false, false),
        };

        if present && !found {
            self.charge(ActionKind::GroundTraversal);
            if let Some(edge) = self.network.edge_mut(edge_id) {
                edge.discover_landmine();
            }
            self.log_event(Event::LandmineDetected {
                episode,
                step,
                edge: edge_id,
                from,
                to: destination.to_string(),
            });
            return GroundMove::HazardDiscovered { edge: edge_id };
        }

        let outcome = if present {
            self.charge(ActionKind::HazardClear);
            if let Some(edge) = self.network.edge_mut(edge_id) {
                edge.clear_landmine();
            }
            self.ground.move_to(destination);
            self.log_event(Event::LandmineCleared {
                episode,
                step,
                edge: edge_id,
                destination: destination.to_string(),
            });
            GroundMove::HazardCleared { edge: edge_id }
        } else {
            self.charge(ActionKind::GroundTraversal);
            self.ground.move_to(destination);
            self.log_event(Event::GroundMoved {
                episode,
                step,
                edge: edge_id,
                destination: destination.to_string(),
            });
            GroundMove::Moved { edge: edge_id }
        };

        self.check_success(step);
        outcome
    }

    /// Move the aerial agent to an adjacent node, scanning the edge
    pub fn move_air(&mut self, destination: &str) -> AirMove {
        let episode = self.clock.episode();
        let step = self.clock.advance_step();
        let from = self.air.location().to_string();

        let Some(edge_id) = self.network.find_traversable(&from, destination) else {
            self.log_event(Event::MoveRejected {
                episode,
                step,
                agent: AgentKind::Aerial,
                from,
                destination: destination.to_string(),
            });
            return AirMove::Rejected;
        };

        self.charge(ActionKind::AirTraversal);
        self.air.move_to(destination);

        let (origin, edge_destination) = match self.network.edge_mut(edge_id) {
            Some(edge) => {
                edge.mark_scanned();
                (edge.origin().to_string(), edge.destination().to_string())
            }
            None => (from, destination.to_string()),
        };

        self.log_event(Event::AerialMoved {
            episode,
            step,
            edge: edge_id,
            destination: destination.to_string(),
            origin,
            edge_destination,
        });

        AirMove::Scanned { edge: edge_id }
    }

    /// Start a new episode
    ///
    /// Training mode: samples new start/end nodes, places both agents on the
    /// start node and zeroes the cost. Edge flags are kept: the minefield is
    /// static across episodes (see `restore_edges`).
    ///
    /// Evaluation mode: no-op.
    pub fn reset(&mut self) {
        if self.mode.is_evaluation() {
            debug!("reset ignored in evaluation mode");
            return;
        }

        let (start, end) = sample_endpoints(
            &mut self.rng,
            self.network.nodes(),
            &self.interior_nodes,
        );
        self.start_node = start;
        self.end_node = end;
        self.ground.place_at(&self.start_node);
        self.air.place_at(&self.start_node);
        self.costs = CostAccumulator::new();
        self.clock.start_episode();

        self.log_event(Event::EpisodeReset {
            episode: self.clock.episode(),
            step: self.clock.step(),
            start_node: self.start_node.clone(),
            end_node: self.end_node.clone(),
        });
    }

    /// Return every edge to its configured state
    ///
    /// Clears found/cleared/scan/query flags and re-arms configured
    /// landmines. Agents, cost and the selection are untouched.
    pub fn restore_edges(&mut self) {
        let episode = self.clock.episode();
        let step = self.clock.advance_step();

        for edge in self.network.edges_mut() {
            edge.restore();
        }

        self.log_event(Event::EdgesRestored {
            episode,
            step,
            edge_count: self.network.len(),
        });
    }

    // ========================================================================
    // Checkpointing
    // ========================================================================

    /// Capture the current state as a snapshot
    pub fn snapshot(&self) -> MissionSnapshot {
        MissionSnapshot {
            run_id: self.run_id.clone(),
            mode: self.mode,
            episode: self.clock.episode(),
            step: self.clock.step(),
            start_node: self.start_node.clone(),
            end_node: self.end_node.clone(),
            ground: AgentSnapshot::from(&self.ground),
            air: AgentSnapshot::from(&self.air),
            selected_edge: self.selected_edge.map(|id| id.index()),
            costs: self.costs.clone(),
            rng_state: self.rng.get_state(),
            edges: self.network.edges().iter().map(EdgeSnapshot::from).collect(),
            last_event: self.event_log.last().cloned(),
            config_hash: self.config_hash.clone(),
        }
    }

    /// Serialize the current state to JSON
    pub fn save_state(&self) -> Result<String, MissionError> {
        serde_json::to_string(&self.snapshot()).map_err(|e| {
            MissionError::Serialization(format!("Snapshot serialization failed: {}", e))
        })
    }

    /// Rebuild an engine from a JSON snapshot and the config it was taken with
    ///
    /// # Errors
    ///
    /// * `ConfigMismatch` - snapshot was taken with a different configuration
    /// * `StateValidation` - snapshot violates an edge or location invariant
    /// * `Serialization` - malformed JSON
    pub fn load_state(config: MissionConfig, json: &str) -> Result<Self, MissionError> {
        let snapshot: MissionSnapshot = serde_json::from_str(json).map_err(|e| {
            MissionError::Serialization(format!("Snapshot deserialization failed: {}", e))
        })?;
        Self::from_snapshot(config, snapshot)
    }

    /// Rebuild an engine from a snapshot
    pub fn from_snapshot(
        config: MissionConfig,
        snapshot: MissionSnapshot,
    ) -> Result<Self, MissionError> {
        let mut engine = Self::new(config, snapshot.mode)?;

        if snapshot.config_hash != engine.config_hash {
            return Err(MissionError::ConfigMismatch(format!(
                "snapshot config hash {} does not match {}",
                snapshot.config_hash, engine.config_hash
            )));
        }

        validate_snapshot(&snapshot, &engine.network)?;

        for (edge, saved) in engine.network.edges_mut().zip(&snapshot.edges) {
            edge.apply_flags(
                saved.landmine_present,
                saved.landmine_found,
                saved.landmine_cleared,
                saved.uav_scanned,
                saved.human_queried,
                saved.ai_queried,
            );
        }

        engine.run_id = snapshot.run_id;
        engine.start_node = snapshot.start_node;
        engine.end_node = snapshot.end_node;
        engine
            .ground
            .restore(snapshot.ground.location, snapshot.ground.traversals);
        engine
            .air
            .restore(snapshot.air.location, snapshot.air.traversals);
        engine.selected_edge = snapshot.selected_edge.map(EdgeId);
        engine.costs = snapshot.costs;
        engine.clock = EpisodeClock::from_parts(snapshot.episode, snapshot.step);
        engine.rng = RngManager::new(snapshot.rng_state);
        if let Some(event) = snapshot.last_event {
            engine.event_log.log(event);
        }

        debug!(run_id = %engine.run_id, episode = engine.clock.episode(), "mission state restored");
        Ok(engine)
    }
}

/// Draw start/end nodes for a training episode
///
/// Both are drawn from `interior` (or all nodes when there are no interior
/// nodes); while they coincide, the end node is redrawn from *all* nodes.
fn sample_endpoints(rng: &mut RngManager, nodes: &[String], interior: &[String]) -> (String, String) {
    let pool = if interior.is_empty() { nodes } else { interior };

    let start = pool[rng.next_index(pool.len())].clone();
    let mut end = pool[rng.next_index(pool.len())].clone();
    while end == start {
        end = nodes[rng.next_index(nodes.len())].clone();
    }

    (start, end)
}

// Manual Debug implementation (the event log would dominate the output)
impl std::fmt::Debug for MissionEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MissionEngine")
            .field("run_id", &self.run_id)
            .field("mode", &self.mode)
            .field("episode", &self.clock.episode())
            .field("step", &self.clock.step())
            .field("ground_location", &self.ground.location())
            .field("air_location", &self.air.location())
            .field("total_cost", &self.costs.total())
            .field("num_edges", &self.network.len())
            .field("event_count", &self.event_log.len())
            .finish()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EdgeConfig;

    fn create_test_config() -> MissionConfig {
        MissionConfig::new(
            vec![
                EdgeConfig::new("A", "B"),
                EdgeConfig::new("B", "C").with_landmine(true),
            ],
            ActionTimings::default(),
        )
        .with_endpoints("A", "C")
    }

    #[test]
    fn test_engine_creation() {
        let engine = MissionEngine::new(create_test_config(), RunMode::Evaluation).unwrap();

        assert_eq!(engine.ground_location(), "A");
        assert_eq!(engine.air_location(), "A");
        assert_eq!(engine.start_node(), "A");
        assert_eq!(engine.end_node(), "C");
        assert_eq!(engine.total_cost(), 0.0);
        assert_eq!(engine.selected_edge(), None);
        assert_eq!(engine.current_log(), "");
        assert_eq!(engine.nodes(), ["A", "B", "C"]);
    }

    #[test]
    fn test_sample_endpoints_differ() {
        let nodes: Vec<String> = ["A", "B"].iter().map(|s| s.to_string()).collect();
        let mut rng = RngManager::new(7);

        for _ in 0..50 {
            let (start, end) = sample_endpoints(&mut rng, &nodes, &[]);
            assert_ne!(start, end);
        }
    }

    #[test]
    fn test_sample_endpoints_start_from_interior() {
        let nodes: Vec<String> = ["A", "B", "C", "D"].iter().map(|s| s.to_string()).collect();
        let interior = vec!["B".to_string(), "C".to_string()];
        let mut rng = RngManager::new(11);

        for _ in 0..50 {
            let (start, end) = sample_endpoints(&mut rng, &nodes, &interior);
            assert!(interior.contains(&start));
            assert_ne!(start, end);
        }
    }

    #[test]
    fn test_query_without_selection_is_guarded() {
        let mut engine = MissionEngine::new(create_test_config(), RunMode::Evaluation).unwrap();

        let outcome = engine.query_human();

        assert_eq!(outcome, QueryOutcome::Refused(QueryRefusal::NoEdgeSelected));
        assert_eq!(
            engine.current_log(),
            "Human could not be queried: no edge is selected."
        );
        assert_eq!(engine.total_cost(), 0.0);
    }

    #[test]
    fn test_steps_count_every_action() {
        let mut engine = MissionEngine::new(create_test_config(), RunMode::Evaluation).unwrap();

        engine.move_air("Z");
        engine.select_edge("A", "B");
        engine.query_ai();

        assert_eq!(engine.step(), 3);
        assert_eq!(engine.event_log().len(), 3);
    }

    #[test]
    fn test_debug_is_summary() {
        let engine = MissionEngine::new(create_test_config(), RunMode::Evaluation).unwrap();
        let debug = format!("{:?}", engine);
        assert!(debug.contains("MissionEngine"));
        assert!(debug.contains("num_edges"));
    }
}
