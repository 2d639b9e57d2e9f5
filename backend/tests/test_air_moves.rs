//! Aerial Move Tests
//!
//! UAV movement ignores landmines and marks traversed edges as scanned.

use mission_simulator_core_rs::{
    ActionTimings, AirMove, EdgeConfig, HazardState, MissionConfig, MissionEngine, RunMode,
};

fn create_engine() -> MissionEngine {
    let config = MissionConfig::new(
        vec![
            EdgeConfig::new("A", "B").with_landmine(true),
            EdgeConfig::new("B", "C"),
        ],
        ActionTimings::default(),
    )
    .with_endpoints("A", "C");
    MissionEngine::new(config, RunMode::Evaluation).expect("Failed to create engine")
}

#[test]
fn test_air_move_scans_edge() {
    let mut engine = create_engine();

    let outcome = engine.move_air("B");

    let AirMove::Scanned { edge } = outcome else {
        panic!("expected a scan, got {:?}", outcome);
    };
    assert_eq!(engine.air_location(), "B");
    assert_eq!(engine.ground_location(), "A");
    assert!(engine.edge(edge).unwrap().uav_scanned());
    assert_eq!(engine.total_cost(), 1.0);
}

#[test]
fn test_air_move_ignores_landmines() {
    let mut engine = create_engine();

    engine.move_air("B");

    let edge = engine.find_edge("A", "B").unwrap();
    assert_eq!(engine.edge(edge).unwrap().hazard_state(), HazardState::Hidden);
    assert_eq!(engine.costs().hazard_clearing, 0.0);
}

#[test]
fn test_failed_air_move_mutates_nothing() {
    let mut engine = create_engine();
    let edges_before: Vec<_> = engine.edges().to_vec();

    assert_eq!(engine.move_air("C"), AirMove::Rejected);
    assert_eq!(engine.move_air("A"), AirMove::Rejected);
    assert_eq!(engine.move_air("nowhere"), AirMove::Rejected);

    assert_eq!(engine.air_location(), "A");
    assert_eq!(engine.total_cost(), 0.0);
    assert_eq!(engine.edges(), edges_before.as_slice());
    assert_eq!(engine.aerial_agent().traversals(), 0);
}

#[test]
fn test_air_move_log_message() {
    let mut engine = create_engine();

    engine.move_air("B");
    engine.move_air("C");

    assert_eq!(
        engine.current_log(),
        "UAV moved to passage C. Estimates can now be obtained for edge B, C."
    );
}

#[test]
fn test_rescanning_charges_again() {
    let mut engine = create_engine();

    engine.move_air("B");
    engine.move_air("A");
    engine.move_air("B");

    assert_eq!(engine.total_cost(), 3.0);
    assert_eq!(engine.costs().air_traversal, 3.0);
}
