//! Configuration Tests
//!
//! Mission file parsing and construction-time validation.

use mission_simulator_core_rs::{
    ActionTimings, EdgeConfig, MissionConfig, MissionEngine, MissionError, RunMode,
};
use std::io::Write;

const MISSION_JSON: &str = r#"{
    "edges": [
        {"origin": "(5, 5)", "destination": "(5, 6)", "terrain": "grass",
         "landmine": true, "human_estimate": 4.0, "ai_estimate": 3.5},
        {"origin": "(5, 6)", "destination": "(6, 6)", "meta": {"width": 2}}
    ],
    "mission": {
        "start": "(5, 5)", "end": "(6, 6)",
        "human estimate time": 5, "AI estimate time": 3,
        "UGV traversal time": 1, "UGV clear time": 2, "UAV traversal time": 1
    }
}"#;

#[test]
fn test_engine_from_json() {
    let config = MissionConfig::from_json_str(MISSION_JSON).unwrap();
    let engine = MissionEngine::new(config, RunMode::Evaluation).unwrap();

    assert_eq!(engine.nodes().len(), 3);
    assert_eq!(engine.start_node(), "(5, 5)");
    assert_eq!(engine.end_node(), "(6, 6)");
    assert_eq!(engine.timings().human_estimate_time, 5.0);
    assert_eq!(engine.timings().ugv_clear_time, 2.0);

    let first = &engine.edges()[0];
    assert_eq!(first.terrain(), Some("grass"));
    assert!(first.landmine_present());
    assert_eq!(first.ai_estimate(), 3.5);

    let second = &engine.edges()[1];
    assert!(!second.landmine_present());
    assert_eq!(second.human_estimate(), 0.0);
    assert!(second.metadata().is_some());
}

#[test]
fn test_engine_from_path() {
    let path = std::env::temp_dir().join(format!("mission-{}.json", std::process::id()));
    {
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(MISSION_JSON.as_bytes()).unwrap();
    }

    let engine = MissionEngine::from_path(&path, RunMode::Evaluation);
    std::fs::remove_file(&path).ok();

    assert!(engine.is_ok());
}

#[test]
fn test_missing_file_is_io_error() {
    let result = MissionEngine::from_path("/definitely/not/here.json", RunMode::Evaluation);
    assert!(matches!(result, Err(MissionError::Io(_))));
}

#[test]
fn test_malformed_json_is_parse_error() {
    let result = MissionConfig::from_json_str("{\"edges\": [");
    assert!(matches!(result, Err(MissionError::Parse(_))));
}

#[test]
fn test_unknown_start_node_rejected() {
    let config = MissionConfig::new(vec![EdgeConfig::new("A", "B")], ActionTimings::default())
        .with_endpoints("Z", "B");

    let result = MissionEngine::new(config, RunMode::Evaluation);

    assert_eq!(result.unwrap_err(), MissionError::UnknownNode("Z".to_string()));
}

#[test]
fn test_evaluation_requires_endpoints() {
    let config = MissionConfig::new(vec![EdgeConfig::new("A", "B")], ActionTimings::default());

    let result = MissionEngine::new(config.clone(), RunMode::Evaluation);
    assert!(matches!(result, Err(MissionError::InvalidConfig(_))));

    assert!(MissionEngine::new(config, RunMode::Training { seed: 1 }).is_ok());
}

#[test]
fn test_negative_timing_rejected() {
    let timings = ActionTimings {
        ugv_clear_time: -1.0,
        ..ActionTimings::default()
    };
    let config = MissionConfig::new(vec![EdgeConfig::new("A", "B")], timings)
        .with_endpoints("A", "B");

    let err = MissionEngine::new(config, RunMode::Evaluation).unwrap_err();
    assert!(matches!(err, MissionError::InvalidConfig(_)));
}

#[test]
fn test_empty_network_rejected() {
    let config = MissionConfig::new(Vec::new(), ActionTimings::default());
    let err = MissionEngine::new(config, RunMode::Training { seed: 1 }).unwrap_err();
    assert!(err.to_string().contains("at least one edge"));
}

#[test]
fn test_run_ids_unique() {
    let config = MissionConfig::from_json_str(MISSION_JSON).unwrap();
    let a = MissionEngine::new(config.clone(), RunMode::Evaluation).unwrap();
    let b = MissionEngine::new(config, RunMode::Evaluation).unwrap();

    assert_ne!(a.run_id(), b.run_id());
    assert_eq!(a.config_hash(), b.config_hash());
}

#[test]
fn test_builder_config_hashes_like_json_config() {
    let parsed = MissionConfig::from_json_str(MISSION_JSON).unwrap();
    let built = MissionConfig::new(
        vec![
            EdgeConfig::new("(5, 5)", "(5, 6)")
                .with_terrain("grass")
                .with_landmine(true)
                .with_estimates(4.0, 3.5),
            EdgeConfig::new("(5, 6)", "(6, 6)").with_metadata(serde_json::json!({"width": 2})),
        ],
        ActionTimings {
            human_estimate_time: 5.0,
            ai_estimate_time: 3.0,
            ugv_traversal_time: 1.0,
            ugv_clear_time: 2.0,
            uav_traversal_time: 1.0,
        },
    )
    .with_endpoints("(5, 5)", "(6, 6)");

    let a = MissionEngine::new(parsed, RunMode::Evaluation).unwrap();
    let b = MissionEngine::new(built.clone(), RunMode::Evaluation).unwrap();
    assert_eq!(a.config_hash(), b.config_hash());

    let json = a.save_state().unwrap();
    assert!(MissionEngine::load_state(built, &json).is_ok());
}

#[test]
fn test_bundled_missions_load() {
    let root = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("../missions");

    let diamond = MissionEngine::from_path(root.join("diamond.json"), RunMode::Evaluation).unwrap();
    assert_eq!(diamond.nodes().len(), 4);
    assert_eq!(diamond.end_node(), "C");

    let grid = MissionEngine::from_path(root.join("grid_12.json"), RunMode::Training { seed: 3 })
        .unwrap();
    assert_eq!(grid.nodes().len(), 144);
    assert_eq!(grid.edges().len(), 264);
    assert_eq!(grid.interior_nodes().len(), 9);
}
