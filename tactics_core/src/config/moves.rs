//! Move set configuration loading

use super::ConfigError;
use crate::candidate::Candidate;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// Container for move configurations
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoveSetConfig {
    #[serde(rename = "moves")]
    pub moves: Vec<Candidate>,
}

fn validate_moves(moves: Vec<Candidate>) -> Result<Vec<Candidate>, ConfigError> {
    let mut seen = HashSet::new();
    for mv in &moves {
        if mv.id.is_empty() {
            return Err(ConfigError::ValidationError(format!(
                "move '{}' has an empty id",
                mv.name
            )));
        }
        if !seen.insert(mv.id.as_str()) {
            return Err(ConfigError::ValidationError(format!(
                "duplicate move id '{}'",
                mv.id
            )));
        }
        if !mv.base_power.is_finite() || mv.base_power < 0.0 {
            return Err(ConfigError::ValidationError(format!(
                "move '{}' has invalid base_power {}",
                mv.id, mv.base_power
            )));
        }
    }
    Ok(moves)
}

/// Load a move set from a TOML file
pub fn load_move_set(path: &Path) -> Result<Vec<Candidate>, ConfigError> {
    let config: MoveSetConfig = super::load_toml(path)?;
    validate_moves(config.moves)
}

/// Load a move set from a TOML string
pub fn parse_move_set(content: &str) -> Result<Vec<Candidate>, ConfigError> {
    let config: MoveSetConfig = super::parse_toml(content)?;
    validate_moves(config.moves)
}

/// Get the default move set
pub fn default_moves() -> Vec<Candidate> {
    let toml = include_str!("../../config/moves.toml");
    parse_move_set(toml).unwrap_or_else(|err| {
        tracing::warn!("Embedded move set failed to load ({}), using Struggle only", err);
        vec![Candidate::struggle()]
    })
}
