//! Checkpoint Tests - Save/Load Mission State
//!
//! Critical invariants tested:
//! - Determinism: restored training engine produces identical episodes
//! - Edge integrity: flags, selection and costs survive a round trip
//! - Config matching: reject state from a different config
//! - Validation: corrupted snapshots are refused

use mission_simulator_core_rs::{
    ActionTimings, EdgeConfig, MissionConfig, MissionEngine, MissionError, MissionSnapshot,
    RunMode,
};

// ============================================================================
// Test Helpers
// ============================================================================

fn create_test_config() -> MissionConfig {
    MissionConfig::new(
        vec![
            EdgeConfig::new("A", "B").with_estimates(0.5, 0.6),
            EdgeConfig::new("B", "C").with_landmine(true),
            EdgeConfig::new("C", "D"),
        ],
        ActionTimings::default(),
    )
    .with_endpoints("A", "D")
}

fn grid_config(side: usize) -> MissionConfig {
    let node = |x: usize, y: usize| format!("({}, {})", x, y);
    let mut edges = Vec::new();
    for x in 0..side {
        for y in 0..side {
            if x + 1 < side {
                edges.push(EdgeConfig::new(node(x, y), node(x + 1, y)));
            }
            if y + 1 < side {
                edges.push(EdgeConfig::new(node(x, y), node(x, y + 1)));
            }
        }
    }
    MissionConfig::new(edges, ActionTimings::default())
}

/// Engine part-way through a mission
fn create_progressed_engine() -> MissionEngine {
    let mut engine = MissionEngine::new(create_test_config(), RunMode::Evaluation)
        .expect("Failed to create test engine");
    engine.move_air("B");
    engine.select_edge("A", "B");
    engine.query_ai();
    engine.move_ground("B");
    engine.move_ground("C");
    engine
}

// ============================================================================
// Round Trip
// ============================================================================

#[test]
fn test_save_load_preserves_state() {
    let engine = create_progressed_engine();
    let json = engine.save_state().expect("save should succeed");

    let restored = MissionEngine::load_state(create_test_config(), &json)
        .expect("load should succeed");

    assert_eq!(restored.run_id(), engine.run_id());
    assert_eq!(restored.ground_location(), "B");
    assert_eq!(restored.air_location(), "B");
    assert_eq!(restored.total_cost(), engine.total_cost());
    assert_eq!(restored.costs(), engine.costs());
    assert_eq!(restored.selected_edge(), engine.selected_edge());
    assert_eq!(restored.edges(), engine.edges());
    assert_eq!(restored.step(), engine.step());
    assert_eq!(restored.ground_agent().traversals(), 1);
    assert_eq!(restored.current_log(), engine.current_log());
    assert_eq!(restored.event_log().len(), 1);
}

#[test]
fn test_save_load_keeps_last_log_line() {
    let config = create_test_config();
    let mut engine = MissionEngine::new(config.clone(), RunMode::Evaluation).unwrap();
    engine.move_ground("B");
    assert_eq!(engine.current_log(), "UGV moved to passage B.");

    let restored = MissionEngine::load_state(config.clone(), &engine.save_state().unwrap()).unwrap();
    assert_eq!(restored.current_log(), "UGV moved to passage B.");

    let fresh = MissionEngine::new(config.clone(), RunMode::Evaluation).unwrap();
    let restored = MissionEngine::load_state(config, &fresh.save_state().unwrap()).unwrap();
    assert_eq!(restored.current_log(), "");
}

#[test]
fn test_snapshot_cannot_arm_unconfigured_landmine() {
    let engine = create_progressed_engine();
    let mut snapshot = engine.snapshot();
    snapshot.edges[2].landmine_present = true;

    let err = MissionEngine::from_snapshot(create_test_config(), snapshot).unwrap_err();
    assert!(matches!(err, MissionError::StateValidation(_)));
}

#[test]
fn test_restored_engine_continues_mission() {
    let engine = create_progressed_engine();
    let json = engine.save_state().unwrap();
    let mut restored = MissionEngine::load_state(create_test_config(), &json).unwrap();

    // Landmine on B-C was found before the snapshot, so this clears it
    assert_eq!(restored.move_ground("C").code(), 1);
    assert_eq!(restored.move_ground("D").code(), 2);
    assert!(restored.is_complete());
    assert_eq!(
        restored.query_ai(),
        mission_simulator_core_rs::QueryOutcome::Refused(
            mission_simulator_core_rs::QueryRefusal::AlreadyQueried
        )
    );
}

#[test]
fn test_restored_training_engine_is_deterministic() {
    let mut original = MissionEngine::new(grid_config(12), RunMode::Training { seed: 99 }).unwrap();
    original.reset();
    original.reset();

    let json = original.save_state().unwrap();
    let mut restored = MissionEngine::load_state(grid_config(12), &json).unwrap();

    assert_eq!(restored.episode(), original.episode());
    assert_eq!(restored.start_node(), original.start_node());
    for _ in 0..10 {
        original.reset();
        restored.reset();
        assert_eq!(restored.start_node(), original.start_node());
        assert_eq!(restored.end_node(), original.end_node());
    }
}

// ============================================================================
// Rejections
// ============================================================================

#[test]
fn test_load_with_different_config_rejected() {
    let engine = create_progressed_engine();
    let json = engine.save_state().unwrap();

    let other = MissionConfig::new(
        vec![EdgeConfig::new("A", "B"), EdgeConfig::new("B", "C")],
        ActionTimings::default(),
    )
    .with_endpoints("A", "C");

    let result = MissionEngine::load_state(other, &json);
    assert!(matches!(result, Err(MissionError::ConfigMismatch(_))));
}

#[test]
fn test_malformed_snapshot_rejected() {
    let result = MissionEngine::load_state(create_test_config(), "{not json");
    assert!(matches!(result, Err(MissionError::Serialization(_))));
}

#[test]
fn test_corrupted_edge_flags_rejected() {
    let engine = create_progressed_engine();
    let mut snapshot: MissionSnapshot = serde_json::from_str(&engine.save_state().unwrap()).unwrap();
    snapshot.edges[0].landmine_cleared = true;

    let result = MissionEngine::from_snapshot(create_test_config(), snapshot);
    assert!(matches!(result, Err(MissionError::StateValidation(_))));
}

#[test]
fn test_unknown_agent_location_rejected() {
    let engine = create_progressed_engine();
    let mut snapshot = engine.snapshot();
    snapshot.ground.location = "Q".to_string();

    let err = MissionEngine::from_snapshot(create_test_config(), snapshot).unwrap_err();
    assert!(matches!(err, MissionError::StateValidation(_)));
    assert!(err.to_string().contains("ground agent"));
}

#[test]
fn test_snapshot_json_contains_config_hash() {
    let engine = create_progressed_engine();
    let json = engine.save_state().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["config_hash"], engine.config_hash());
    assert_eq!(value["edges"].as_array().unwrap().len(), 3);
}
