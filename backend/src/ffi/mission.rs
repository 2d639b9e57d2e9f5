//! PyO3 wrapper for MissionEngine
//!
//! The Python interface used by RL controllers to drive missions.

use pyo3::prelude::*;
use pyo3::types::{PyDict, PyList};

use super::types::{costs_to_py, edge_to_py, parse_mission_config};
use crate::config::{MissionConfig, RunMode};
use crate::mission::{AirMove, MissionEngine, MissionError};
use crate::models::edge::EdgeId;

fn to_py_err(err: MissionError) -> PyErr {
    match err {
        MissionError::Io(msg) => PyErr::new::<pyo3::exceptions::PyIOError, _>(msg),
        other => PyErr::new::<pyo3::exceptions::PyValueError, _>(other.to_string()),
    }
}

fn run_mode(evaluation: bool, seed: u64) -> RunMode {
    if evaluation {
        RunMode::Evaluation
    } else {
        RunMode::Training { seed }
    }
}

/// Python wrapper for the Rust mission engine
///
/// # Example (from Python)
///
/// ```python
/// from mission_simulator_core_rs import Mission
///
/// mission = Mission.from_file("missions/grid_12.json", evaluation=False, seed=7)
/// mission.move_air("(6, 7)")
/// if mission.select_edge(mission.air_location(), "(6, 7)") is not None:
///     mission.query_ai()
/// code = mission.move_ground("(6, 7)")   # 0 found, 1 cleared, 2 moved, -1 rejected
/// print(mission.total_cost(), mission.current_log())
/// ```
#[pyclass(name = "Mission")]
pub struct PyMission {
    inner: MissionEngine,
}

impl PyMission {
    fn edge_dict(&self, py: Python<'_>, id: EdgeId) -> PyResult<Option<Py<PyDict>>> {
        self.inner
            .edge(id)
            .map(|edge| edge_to_py(py, id, edge))
            .transpose()
    }
}

#[pymethods]
impl PyMission {
    /// Create a mission from a config dict shaped like a mission file
    ///
    /// Raises ValueError on invalid configuration.
    #[new]
    #[pyo3(signature = (config, evaluation = true, seed = 0))]
    fn new(config: &Bound<'_, PyDict>, evaluation: bool, seed: u64) -> PyResult<Self> {
        let rust_config = parse_mission_config(config)?;
        let inner =
            MissionEngine::new(rust_config, run_mode(evaluation, seed)).map_err(to_py_err)?;
        Ok(PyMission { inner })
    }

    /// Create a mission from a JSON mission document
    #[staticmethod]
    #[pyo3(signature = (json, evaluation = true, seed = 0))]
    fn from_json(json: &str, evaluation: bool, seed: u64) -> PyResult<Self> {
        let config = MissionConfig::from_json_str(json).map_err(to_py_err)?;
        let inner = MissionEngine::new(config, run_mode(evaluation, seed)).map_err(to_py_err)?;
        Ok(PyMission { inner })
    }

    /// Create a mission from a JSON mission file
    #[staticmethod]
    #[pyo3(signature = (path, evaluation = true, seed = 0))]
    fn from_file(path: &str, evaluation: bool, seed: u64) -> PyResult<Self> {
        let inner =
            MissionEngine::from_path(path, run_mode(evaluation, seed)).map_err(to_py_err)?;
        Ok(PyMission { inner })
    }

    // ========================================================================
    // Actions
    // ========================================================================

    /// Select the edge between two nodes; returns the edge dict or None
    fn select_edge(
        &mut self,
        py: Python<'_>,
        node_a: &str,
        node_b: &str,
    ) -> PyResult<Option<Py<PyDict>>> {
        match self.inner.select_edge(node_a, node_b) {
            Some(id) => self.edge_dict(py, id),
            None => Ok(None),
        }
    }

    /// Query the AI oracle; returns True if it answered
    fn query_ai(&mut self) -> bool {
        self.inner.query_ai().is_answered()
    }

    /// Query the human oracle; returns True if it answered
    fn query_human(&mut self) -> bool {
        self.inner.query_human().is_answered()
    }

    /// Move the UGV; returns 0 (found), 1 (cleared), 2 (moved) or -1 (rejected)
    fn move_ground(&mut self, destination: &str) -> i32 {
        self.inner.move_ground(destination).code()
    }

    /// Move the UAV; returns the scanned edge dict or None
    fn move_air(&mut self, py: Python<'_>, destination: &str) -> PyResult<Option<Py<PyDict>>> {
        match self.inner.move_air(destination) {
            AirMove::Scanned { edge } => self.edge_dict(py, edge),
            AirMove::Rejected => Ok(None),
        }
    }

    /// Start a new episode (no-op in evaluation mode)
    fn reset(&mut self) {
        self.inner.reset();
    }

    /// Return every edge to its configured state
    fn restore_edges(&mut self) {
        self.inner.restore_edges();
    }

    // ========================================================================
    // State Queries
    // ========================================================================

    fn ground_location(&self) -> String {
        self.inner.ground_location().to_string()
    }

    fn air_location(&self) -> String {
        self.inner.air_location().to_string()
    }

    fn start_node(&self) -> String {
        self.inner.start_node().to_string()
    }

    fn end_node(&self) -> String {
        self.inner.end_node().to_string()
    }

    fn total_cost(&self) -> f64 {
        self.inner.total_cost()
    }

    /// Per-category cost breakdown (plus "total")
    fn cost_breakdown(&self, py: Python<'_>) -> PyResult<Py<PyDict>> {
        costs_to_py(py, self.inner.costs())
    }

    fn current_log(&self) -> String {
        self.inner.current_log()
    }

    fn is_complete(&self) -> bool {
        self.inner.is_complete()
    }

    fn episode(&self) -> usize {
        self.inner.episode()
    }

    fn step(&self) -> usize {
        self.inner.step()
    }

    fn nodes(&self) -> Vec<String> {
        self.inner.nodes().to_vec()
    }

    fn interior_nodes(&self) -> Vec<String> {
        self.inner.interior_nodes().to_vec()
    }

    /// Nodes adjacent to `node`
    fn neighbors(&self, node: &str) -> Vec<String> {
        self.inner
            .network()
            .neighbors(node)
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    /// Currently selected edge dict, or None
    fn selected_edge(&self, py: Python<'_>) -> PyResult<Option<Py<PyDict>>> {
        match self.inner.selected_edge() {
            Some(id) => self.edge_dict(py, id),
            None => Ok(None),
        }
    }

    /// All edges as dicts, in configuration order
    fn edges(&self, py: Python<'_>) -> PyResult<Py<PyList>> {
        let list = PyList::empty_bound(py);
        for (id, edge) in self.inner.network().iter() {
            list.append(edge_to_py(py, id, edge)?)?;
        }
        Ok(list.unbind())
    }

    /// Event log as a JSON array string
    fn events_json(&self) -> PyResult<String> {
        serde_json::to_string(self.inner.event_log().events())
            .map_err(|e| PyErr::new::<pyo3::exceptions::PyValueError, _>(e.to_string()))
    }

    // ========================================================================
    // Checkpointing
    // ========================================================================

    /// Serialize the mission state to a JSON string
    fn save_state(&self) -> PyResult<String> {
        self.inner.save_state().map_err(to_py_err)
    }

    /// Restore a mission from a config dict and a saved state
    ///
    /// Raises ValueError if the state was saved with a different config.
    #[staticmethod]
    fn load_state(config: &Bound<'_, PyDict>, state_json: &str) -> PyResult<Self> {
        let rust_config = parse_mission_config(config)?;
        let inner = MissionEngine::load_state(rust_config, state_json).map_err(to_py_err)?;
        Ok(PyMission { inner })
    }

    fn __repr__(&self) -> String {
        format!(
            "Mission(episode={}, ugv={}, uav={}, cost={})",
            self.inner.episode(),
            self.inner.ground_location(),
            self.inner.air_location(),
            self.inner.total_cost()
        )
    }
}
