//! Mission scripts
//!
//! One action per line:
//!
//! ```text
//! # comment
//! air (5, 6)
//! select (5, 5) | (5, 6)
//! query ai
//! ground (5, 6)
//! status
//! ```
//!
//! `ground`/`air` take the rest of the line as the node id. `select` takes
//! two node ids separated by `|`, or by whitespace when neither contains
//! spaces.

use mission_simulator_core_rs::{AirMove, GroundMove, MissionEngine, Oracle, QueryOutcome};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptCommand {
    Select(String, String),
    Query(Oracle),
    Ground(String),
    Air(String),
    Reset,
    Restore,
    Status,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScriptError {
    #[error("line {line}: unknown command '{command}'")]
    UnknownCommand { line: usize, command: String },

    #[error("line {line}: {message}")]
    BadArguments { line: usize, message: String },
}

/// Parse one script line; `Ok(None)` for blank lines and comments
pub fn parse_line(line_no: usize, line: &str) -> Result<Option<ScriptCommand>, ScriptError> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let (keyword, rest) = match line.split_once(char::is_whitespace) {
        Some((keyword, rest)) => (keyword, rest.trim()),
        None => (line, ""),
    };

    let bad = |message: &str| ScriptError::BadArguments {
        line: line_no,
        message: message.to_string(),
    };

    let command = match keyword.to_ascii_lowercase().as_str() {
        "select" => {
            let (a, b) = split_pair(rest).ok_or_else(|| bad("select needs two node ids"))?;
            ScriptCommand::Select(a, b)
        }
        "query" => match rest.to_ascii_lowercase().as_str() {
            "ai" => ScriptCommand::Query(Oracle::Ai),
            "human" => ScriptCommand::Query(Oracle::Human),
            _ => return Err(bad("query expects 'ai' or 'human'")),
        },
        "ground" | "air" => {
            if rest.is_empty() {
                return Err(bad("move needs a destination node"));
            }
            if keyword.eq_ignore_ascii_case("ground") {
                ScriptCommand::Ground(rest.to_string())
            } else {
                ScriptCommand::Air(rest.to_string())
            }
        }
        "reset" => ScriptCommand::Reset,
        "restore" => ScriptCommand::Restore,
        "status" => ScriptCommand::Status,
        _ => {
            return Err(ScriptError::UnknownCommand {
                line: line_no,
                command: keyword.to_string(),
            })
        }
    };

    Ok(Some(command))
}

fn split_pair(rest: &str) -> Option<(String, String)> {
    if let Some((a, b)) = rest.split_once('|') {
        let (a, b) = (a.trim(), b.trim());
        return (!a.is_empty() && !b.is_empty()).then(|| (a.to_string(), b.to_string()));
    }

    let mut parts = rest.split_whitespace();
    match (parts.next(), parts.next(), parts.next()) {
        (Some(a), Some(b), None) => Some((a.to_string(), b.to_string())),
        _ => None,
    }
}

/// Apply a command and describe its outcome in one line
pub fn execute(engine: &mut MissionEngine, command: &ScriptCommand) -> String {
    match command {
        ScriptCommand::Select(a, b) => match engine.select_edge(a, b) {
            Some(edge) => format!("selected {}", edge),
            None => "no such edge".to_string(),
        },
        ScriptCommand::Query(oracle) => {
            let outcome = engine.query(*oracle);
            match outcome {
                QueryOutcome::Answered { estimate, .. } => {
                    format!("{} estimate {}", oracle.label(), estimate)
                }
                QueryOutcome::Refused(reason) => {
                    format!("{} refused: {}", oracle.label(), reason.describe(*oracle))
                }
            }
        }
        ScriptCommand::Ground(node) => {
            let outcome = engine.move_ground(node);
            let label = match outcome {
                GroundMove::HazardDiscovered { .. } => "landmine found",
                GroundMove::HazardCleared { .. } => "landmine cleared",
                GroundMove::Moved { .. } => "moved",
                GroundMove::Rejected => "rejected",
            };
            format!("UGV {} (code {})", label, outcome.code())
        }
        ScriptCommand::Air(node) => match engine.move_air(node) {
            AirMove::Scanned { edge } => format!("UAV scanned {}", edge),
            AirMove::Rejected => "UAV rejected".to_string(),
        },
        ScriptCommand::Reset => {
            engine.reset();
            format!(
                "episode {}: {} -> {}",
                engine.episode(),
                engine.start_node(),
                engine.end_node()
            )
        }
        ScriptCommand::Restore => {
            engine.restore_edges();
            format!("restored {} edges", engine.edges().len())
        }
        ScriptCommand::Status => status_line(engine),
    }
}

/// Trace lines of the events logged after the first `seen` events
pub fn messages_since(engine: &MissionEngine, seen: usize) -> Vec<String> {
    engine
        .event_log()
        .events()
        .iter()
        .skip(seen)
        .map(|event| event.message())
        .collect()
}

/// Agent positions, goal and cost
pub fn status_line(engine: &MissionEngine) -> String {
    format!(
        "episode {} step {} | UGV {} | UAV {} | goal {} | cost {}{}",
        engine.episode(),
        engine.step(),
        engine.ground_location(),
        engine.air_location(),
        engine.end_node(),
        engine.total_cost(),
        if engine.is_complete() { " | COMPLETE" } else { "" }
    )
}
