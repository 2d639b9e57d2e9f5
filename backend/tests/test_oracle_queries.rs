//! Oracle Query Tests
//!
//! Selection, scan gating and one-shot semantics of the human and AI
//! oracles.
//!
//! Critical invariants tested:
//! - Queries require a selected, scanned edge
//! - Each oracle answers at most once per edge
//! - Refused queries add no cost

use mission_simulator_core_rs::{
    ActionTimings, EdgeConfig, MissionConfig, MissionEngine, Oracle, QueryOutcome, QueryRefusal,
    RunMode,
};

// ============================================================================
// Test Helpers
// ============================================================================

fn create_engine() -> MissionEngine {
    let config = MissionConfig::new(
        vec![
            EdgeConfig::new("A", "B").with_estimates(0.25, 0.75),
            EdgeConfig::new("B", "C")
                .with_landmine(true)
                .with_estimates(4.0, 3.5),
        ],
        ActionTimings::default(),
    )
    .with_endpoints("A", "C");
    MissionEngine::new(config, RunMode::Evaluation).expect("Failed to create engine")
}

/// Engine with edge A-B scanned and selected
fn create_scanned_engine() -> MissionEngine {
    let mut engine = create_engine();
    engine.move_air("B");
    engine.select_edge("A", "B").expect("edge A-B exists");
    engine
}

// ============================================================================
// Selection
// ============================================================================

#[test]
fn test_select_edge_either_order() {
    let mut engine = create_engine();

    let forward = engine.select_edge("A", "B");
    let backward = engine.select_edge("B", "A");

    assert!(forward.is_some());
    assert_eq!(forward, backward);
    assert_eq!(engine.selected_edge(), forward);
    assert_eq!(engine.current_log(), "Selected edge B, A");
}

#[test]
fn test_failed_selection_keeps_previous() {
    let mut engine = create_engine();
    let selected = engine.select_edge("A", "B");

    assert_eq!(engine.select_edge("A", "C"), None);

    assert_eq!(engine.selected_edge(), selected);
    assert_eq!(engine.current_log(), "Edge A, C could not be found");
}

#[test]
fn test_selection_is_free() {
    let mut engine = create_engine();
    engine.select_edge("A", "B");
    engine.select_edge("X", "Y");
    assert_eq!(engine.total_cost(), 0.0);
}

// ============================================================================
// Query Preconditions
// ============================================================================

#[test]
fn test_query_requires_selection() {
    let mut engine = create_engine();
    engine.move_air("B");

    assert_eq!(
        engine.query_ai(),
        QueryOutcome::Refused(QueryRefusal::NoEdgeSelected)
    );
    assert_eq!(
        engine.current_log(),
        "AI could not be queried: no edge is selected."
    );
    assert_eq!(engine.total_cost(), 1.0);
}

#[test]
fn test_query_requires_scan() {
    let mut engine = create_engine();
    engine.select_edge("A", "B");

    assert_eq!(
        engine.query_human(),
        QueryOutcome::Refused(QueryRefusal::NotScanned)
    );
    assert_eq!(
        engine.current_log(),
        "Human could not be queried for edge A, B: the UAV has not scanned this edge."
    );
    assert_eq!(engine.total_cost(), 0.0);
}

#[test]
fn test_ai_query_answers_with_estimate() {
    let mut engine = create_scanned_engine();
    let edge = engine.selected_edge().unwrap();

    let outcome = engine.query_ai();

    assert_eq!(outcome, QueryOutcome::Answered { edge, estimate: 0.75 });
    assert!(engine.edge(edge).unwrap().ai_queried());
    assert!(!engine.edge(edge).unwrap().human_queried());
    assert_eq!(engine.total_cost(), 1.0 + 3.0);
    assert_eq!(
        engine.current_log(),
        "AI queried for edge A, B. The estimate was 0.75."
    );
}

#[test]
fn test_human_query_answers_with_estimate() {
    let mut engine = create_scanned_engine();

    assert_eq!(engine.query_human().estimate(), Some(0.25));
    assert_eq!(engine.costs().human_queries, 5.0);
}

#[test]
fn test_second_query_same_oracle_refused() {
    let mut engine = create_scanned_engine();
    engine.query_ai();
    let cost = engine.total_cost();

    assert_eq!(
        engine.query_ai(),
        QueryOutcome::Refused(QueryRefusal::AlreadyQueried)
    );
    assert_eq!(engine.total_cost(), cost);
}

#[test]
fn test_oracles_are_independent() {
    let mut engine = create_scanned_engine();

    assert!(engine.query_ai().is_answered());
    assert!(engine.query_human().is_answered());
    assert!(!engine.query(Oracle::Human).is_answered());
    assert_eq!(engine.total_cost(), 1.0 + 3.0 + 5.0);
}

#[test]
fn test_query_scanned_from_far_side() {
    let mut engine = create_engine();
    engine.move_air("B");
    engine.move_air("C");
    engine.select_edge("C", "B");

    assert_eq!(engine.query_ai().estimate(), Some(3.5));
}

#[test]
fn test_query_events_recorded() {
    let mut engine = create_scanned_engine();
    engine.query_ai();
    engine.query_ai();

    let log = engine.event_log();
    assert_eq!(log.events_of_type("OracleQueried").len(), 1);
    assert_eq!(log.events_of_type("OracleRefused").len(), 1);

    let edge = engine.selected_edge().unwrap();
    assert!(log.events_for_edge(edge).len() >= 3);
}
