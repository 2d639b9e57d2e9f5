//! Edge Network
//!
//! Owns every `EdgeState` of a mission and answers adjacency questions.
//!
//! # Critical Invariants
//!
//! 1. **Identity Stability**: edges are never added, removed or reordered after
//!    construction, so `EdgeId`s stay valid
//! 2. **First Match Wins**: lookups return the earliest configured edge between
//!    two nodes (duplicates are not expected, but the order is defined)
//! 3. **Node Order**: nodes are listed in order of first appearance in the edge list

use crate::config::EdgeConfig;
use crate::models::edge::{EdgeId, EdgeState};
use std::collections::HashMap;

/// Edge collection plus incident-edge index
///
/// # Example
/// ```
/// use mission_simulator_core_rs::config::EdgeConfig;
/// use mission_simulator_core_rs::models::network::EdgeNetwork;
///
/// let network = EdgeNetwork::new(&[EdgeConfig::new("A", "B"), EdgeConfig::new("B", "C")]);
/// assert_eq!(network.nodes(), ["A", "B", "C"]);
/// assert!(network.find_edge("C", "B").is_some());
/// assert!(network.find_edge("A", "C").is_none());
/// ```
#[derive(Debug, Clone)]
pub struct EdgeNetwork {
    edges: Vec<EdgeState>,
    nodes: Vec<String>,

    /// node -> incident edge ids, in configuration order
    incident: HashMap<String, Vec<EdgeId>>,
}

impl EdgeNetwork {
    /// Build the network from configured edges
    pub fn new(configs: &[EdgeConfig]) -> Self {
        let mut edges = Vec::with_capacity(configs.len());
        let mut nodes = Vec::new();
        let mut incident: HashMap<String, Vec<EdgeId>> = HashMap::new();

        for (index, config) in configs.iter().enumerate() {
            let id = EdgeId(index);
            for node in [&config.origin, &config.destination] {
                let entry = incident.entry(node.clone()).or_insert_with(|| {
                    nodes.push(node.clone());
                    Vec::new()
                });
                if !entry.contains(&id) {
                    entry.push(id);
                }
            }
            edges.push(EdgeState::from_config(config));
        }

        Self {
            edges,
            nodes,
            incident,
        }
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    pub fn edges(&self) -> &[EdgeState] {
        &self.edges
    }

    /// Iterate edges together with their ids
    pub fn iter(&self) -> impl Iterator<Item = (EdgeId, &EdgeState)> {
        self.edges.iter().enumerate().map(|(i, e)| (EdgeId(i), e))
    }

    pub fn edge(&self, id: EdgeId) -> Option<&EdgeState> {
        self.edges.get(id.0)
    }

    pub(crate) fn edge_mut(&mut self, id: EdgeId) -> Option<&mut EdgeState> {
        self.edges.get_mut(id.0)
    }

    pub(crate) fn edges_mut(&mut self) -> impl Iterator<Item = &mut EdgeState> {
        self.edges.iter_mut()
    }

    /// Node identifiers in order of first appearance
    pub fn nodes(&self) -> &[String] {
        &self.nodes
    }

    pub fn contains_node(&self, node: &str) -> bool {
        self.incident.contains_key(node)
    }

    /// Ids of edges touching `node`, in configuration order
    pub fn incident_edges(&self, node: &str) -> &[EdgeId] {
        self.incident.get(node).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Nodes one edge away from `node`
    pub fn neighbors(&self, node: &str) -> Vec<&str> {
        self.incident_edges(node)
            .iter()
            .filter_map(|id| self.edge(*id)?.other_end(node))
            .collect()
    }

    /// First edge whose unordered endpoint pair equals {a, b}
    pub fn find_edge(&self, a: &str, b: &str) -> Option<EdgeId> {
        self.incident_edges(a)
            .iter()
            .copied()
            .find(|id| self.edges[id.0].connects(a, b))
    }

    /// First edge an agent at `from` can traverse to reach `to`
    ///
    /// Staying in place is never a traversal: `from == to` yields `None`.
    pub fn find_traversable(&self, from: &str, to: &str) -> Option<EdgeId> {
        if from == to {
            return None;
        }
        self.find_edge(from, to)
    }
}
