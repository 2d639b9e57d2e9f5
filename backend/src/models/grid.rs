//! Grid layout helpers
//!
//! Node identifiers of generated grid missions embed their coordinates,
//! e.g. `"(12, 7)"` or `"node(12,7)"`. Training episodes start and end on
//! *interior* nodes, at least five cells away from the grid boundary.

use regex::Regex;
use std::sync::OnceLock;

/// Minimum distance from the boundary for a node to count as interior
pub const INTERIOR_MARGIN: i64 = 5;

fn coordinate_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"\(\s*(0|[1-9]\d{0,2}|1000)\s*,\s*(0|[1-9]\d{0,2}|1000)\s*\)")
            .expect("coordinate pattern is a valid regex")
    })
}

/// Extract the first `(x, y)` pair (each in 0..=1000) embedded in a node identifier
///
/// # Example
/// ```
/// use mission_simulator_core_rs::models::grid::parse_coordinates;
///
/// assert_eq!(parse_coordinates("(12, 7)"), Some((12, 7)));
/// assert_eq!(parse_coordinates("depot"), None);
/// ```
pub fn parse_coordinates(node: &str) -> Option<(i64, i64)> {
    let captures = coordinate_pattern().captures(node)?;
    let x = captures.get(1)?.as_str().parse().ok()?;
    let y = captures.get(2)?.as_str().parse().ok()?;
    Some((x, y))
}

/// Nodes whose coordinates lie at least `INTERIOR_MARGIN` cells inside the grid
///
/// The grid is assumed square with side `floor(sqrt(node_count))`. Nodes
/// without embedded coordinates are never interior. Order follows `nodes`.
pub fn interior_nodes(nodes: &[String]) -> Vec<String> {
    let side = (nodes.len() as f64).sqrt() as i64;
    let low = INTERIOR_MARGIN;
    let high = side - INTERIOR_MARGIN;

    nodes
        .iter()
        .filter(|node| match parse_coordinates(node) {
            Some((x, y)) => (low..=high).contains(&x) && (low..=high).contains(&y),
            None => false,
        })
        .cloned()
        .collect()
}
