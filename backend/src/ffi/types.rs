//! Type conversion utilities for FFI boundary
//!
//! Converts between Rust types and PyO3-compatible types (PyDict, PyList).

use pyo3::prelude::*;
use pyo3::types::{PyDict, PyList};

use crate::config::{EdgeConfig, MissionConfig, MissionSettings};
use crate::costs::{ActionTimings, CostAccumulator};
use crate::models::edge::{EdgeId, EdgeState};

// ========================================================================
// PyDict Extraction Helpers
// ========================================================================

/// Fetch a required field from a Python dict without converting it.
///
/// # Errors
/// Returns PyValueError if the field is missing.
fn required_item<'py>(dict: &Bound<'py, PyDict>, key: &str) -> PyResult<Bound<'py, PyAny>> {
    dict.get_item(key)?.ok_or_else(|| {
        PyErr::new::<pyo3::exceptions::PyValueError, _>(format!(
            "Missing required field '{}'",
            key
        ))
    })
}

/// Extract a required field from a Python dict.
fn extract_required<T>(dict: &Bound<'_, PyDict>, key: &str) -> PyResult<T>
where
    T: for<'py> FromPyObject<'py>,
{
    required_item(dict, key)?.extract()
}

/// Extract an optional field from a Python dict.
///
/// Errors only if type conversion fails, not if the field is missing.
fn extract_optional<T>(dict: &Bound<'_, PyDict>, key: &str) -> PyResult<Option<T>>
where
    T: for<'py> FromPyObject<'py>,
{
    match dict.get_item(key)? {
        Some(value) if !value.is_none() => Ok(Some(value.extract()?)),
        _ => Ok(None),
    }
}

/// Extract a field with a default value if missing.
fn extract_with_default<T>(dict: &Bound<'_, PyDict>, key: &str, default: T) -> PyResult<T>
where
    T: for<'py> FromPyObject<'py>,
{
    Ok(extract_optional(dict, key)?.unwrap_or(default))
}

// ========================================================================
// Configuration Parsers
// ========================================================================

/// Convert a Python dict shaped like a mission file into `MissionConfig`
///
/// ```python
/// {
///     "edges": [{"origin": "A", "destination": "B", "landmine": False,
///                "human_estimate": 0.2, "ai_estimate": 0.4,
///                "metadata": {"width": 2}}],
///     "mission": {"start": "A", "end": "B",
///                 "human estimate time": 5, "AI estimate time": 3,
///                 "UGV traversal time": 1, "UGV clear time": 2,
///                 "UAV traversal time": 1},
/// }
/// ```
pub fn parse_mission_config(py_config: &Bound<'_, PyDict>) -> PyResult<MissionConfig> {
    let py_edges = required_item(py_config, "edges")?.downcast_into::<PyList>()?;
    let mut edges = Vec::with_capacity(py_edges.len());
    for item in py_edges.iter() {
        let edge_dict = item.downcast_into::<PyDict>()?;
        edges.push(parse_edge_config(&edge_dict)?);
    }

    let mission = required_item(py_config, "mission")?.downcast_into::<PyDict>()?;
    let timings = ActionTimings {
        human_estimate_time: extract_required(&mission, "human estimate time")?,
        ai_estimate_time: extract_required(&mission, "AI estimate time")?,
        ugv_traversal_time: extract_required(&mission, "UGV traversal time")?,
        ugv_clear_time: extract_required(&mission, "UGV clear time")?,
        uav_traversal_time: extract_required(&mission, "UAV traversal time")?,
    };

    Ok(MissionConfig {
        edges,
        mission: MissionSettings {
            start: extract_optional(&mission, "start")?,
            end: extract_optional(&mission, "end")?,
            timings,
        },
    })
}

fn parse_edge_config(py_edge: &Bound<'_, PyDict>) -> PyResult<EdgeConfig> {
    let landmine = match extract_optional::<bool>(py_edge, "landmine")? {
        Some(flag) => flag,
        None => extract_with_default(py_edge, "landmine_present", false)?,
    };

    let mut edge = EdgeConfig::new(
        extract_required::<String>(py_edge, "origin")?,
        extract_required::<String>(py_edge, "destination")?,
    )
    .with_landmine(landmine)
    .with_estimates(
        extract_with_default(py_edge, "human_estimate", 0.0)?,
        extract_with_default(py_edge, "ai_estimate", 0.0)?,
    );
    edge.terrain = extract_optional(py_edge, "terrain")?;
    edge.metadata = match optional_item(py_edge, "metadata")? {
        Some(value) => Some(py_to_json(&value)?),
        None => optional_item(py_edge, "meta")?
            .map(|value| py_to_json(&value))
            .transpose()?,
    };
    Ok(edge)
}

/// Fetch an optional field, treating `None` as missing.
fn optional_item<'py>(dict: &Bound<'py, PyDict>, key: &str) -> PyResult<Option<Bound<'py, PyAny>>> {
    Ok(dict.get_item(key)?.filter(|value| !value.is_none()))
}

/// Convert an arbitrary JSON-compatible Python object through `json.dumps`.
fn py_to_json(value: &Bound<'_, PyAny>) -> PyResult<serde_json::Value> {
    let text: String = value
        .py()
        .import_bound("json")?
        .call_method1("dumps", (value,))?
        .extract()?;
    serde_json::from_str(&text).map_err(|e| {
        PyErr::new::<pyo3::exceptions::PyValueError, _>(format!("Invalid edge metadata: {}", e))
    })
}

// ========================================================================
// Result Converters
// ========================================================================

/// Convert an edge to a Python dict
///
/// Query-gated estimates are exposed only after the matching oracle has
/// been consulted.
pub fn edge_to_py(py: Python<'_>, id: EdgeId, edge: &EdgeState) -> PyResult<Py<PyDict>> {
    let dict = PyDict::new_bound(py);
    dict.set_item("id", id.index())?;
    dict.set_item("origin", edge.origin())?;
    dict.set_item("destination", edge.destination())?;
    dict.set_item("terrain", edge.terrain())?;
    dict.set_item("landmine_found", edge.landmine_found())?;
    dict.set_item("landmine_cleared", edge.landmine_cleared())?;
    dict.set_item("uav_scanned", edge.uav_scanned())?;
    dict.set_item("human_queried", edge.human_queried())?;
    dict.set_item("ai_queried", edge.ai_queried())?;
    dict.set_item(
        "human_estimate",
        edge.human_queried().then(|| edge.human_estimate()),
    )?;
    dict.set_item("ai_estimate", edge.ai_queried().then(|| edge.ai_estimate()))?;
    Ok(dict.unbind())
}

/// Convert the cost breakdown to a Python dict
pub fn costs_to_py(py: Python<'_>, costs: &CostAccumulator) -> PyResult<Py<PyDict>> {
    let dict = PyDict::new_bound(py);
    dict.set_item("ground_traversal", costs.ground_traversal)?;
    dict.set_item("hazard_clearing", costs.hazard_clearing)?;
    dict.set_item("air_traversal", costs.air_traversal)?;
    dict.set_item("human_queries", costs.human_queries)?;
    dict.set_item("ai_queries", costs.ai_queries)?;
    dict.set_item("total", costs.total())?;
    Ok(dict.unbind())
}
