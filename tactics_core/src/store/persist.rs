//! Save/resume of per-combatant persistent state

use super::{Memory, PersonalityProfile};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// State persistence error
#[derive(Error, Debug)]
pub enum StateError {
    #[error("Failed to access state file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to (de)serialize state: {0}")]
    Json(#[from] serde_json::Error),
}

/// Everything that survives a save/resume: personality and memory
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CombatantState {
    pub personality: PersonalityProfile,
    pub memory: Memory,
}

impl CombatantState {
    /// Serialize to a JSON string
    pub fn to_json(&self) -> Result<String, StateError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Deserialize from a JSON string, clamping traits back into range
    pub fn from_json(content: &str) -> Result<Self, StateError> {
        let mut state: CombatantState = serde_json::from_str(content)?;
        state.personality.sanitize();
        Ok(state)
    }
}

/// Write a state file
pub fn save_state(path: &Path, state: &CombatantState) -> Result<(), StateError> {
    fs::write(path, state.to_json()?)?;
    Ok(())
}

/// Read a state file
pub fn load_state(path: &Path) -> Result<CombatantState, StateError> {
    let content = fs::read_to_string(path)?;
    CombatantState::from_json(&content)
}
