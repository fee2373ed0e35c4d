//! Memory - What a combatant has learned during the battle

use crate::types::Effectiveness;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Accumulated outcome of one of our own moves
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveEffectiveness {
    /// Sum of effectiveness values over every use
    pub total_effectiveness: i32,
    /// Number of times the move was used
    pub uses: u32,
}

impl MoveEffectiveness {
    /// Record one use
    pub fn record(&mut self, outcome: Option<Effectiveness>) {
        self.uses += 1;
        self.total_effectiveness += Effectiveness::value_of(outcome);
    }

    /// Average effectiveness per use (0 if unused)
    pub fn average(&self) -> f64 {
        if self.uses == 0 {
            0.0
        } else {
            self.total_effectiveness as f64 / self.uses as f64
        }
    }
}

/// Running tally of the opponent's play style
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpponentModel {
    pub aggressive_count: u32,
    pub defensive_count: u32,
    pub is_turtling: bool,
}

/// Normalized view of the opponent model
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct OpponentProfile {
    /// Fraction of observed moves that were aggressive
    pub aggression: f64,
    /// Fraction of observed moves that were defensive
    pub defensiveness: f64,
}

/// Per-combatant battle memory
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Memory {
    /// Outcome history of our own moves
    pub self_move_effectiveness: HashMap<String, MoveEffectiveness>,
    /// What we have seen the opponent do
    pub opponent_model: OpponentModel,
    /// Remaining cooldown turns per move
    pub move_cooldowns: HashMap<String, u32>,
    /// Remaining turns before another reposition
    pub reposition_cooldown: u32,
}

impl Memory {
    /// Create an empty memory
    pub fn new() -> Self {
        Self::default()
    }

    /// Average effectiveness of a move (0 if never used)
    pub fn effectiveness_score(&self, move_id: &str) -> f64 {
        self.self_move_effectiveness
            .get(move_id)
            .map(|e| e.average())
            .unwrap_or(0.0)
    }

    /// Times we used a move
    pub fn uses(&self, move_id: &str) -> u32 {
        self.self_move_effectiveness
            .get(move_id)
            .map(|e| e.uses)
            .unwrap_or(0)
    }

    /// Check if a move is cooling down
    pub fn is_on_cooldown(&self, move_id: &str) -> bool {
        self.cooldown(move_id) > 0
    }

    /// Remaining cooldown of a move
    pub fn cooldown(&self, move_id: &str) -> u32 {
        self.move_cooldowns.get(move_id).copied().unwrap_or(0)
    }

    /// Put a move on cooldown
    pub fn set_cooldown(&mut self, move_id: &str, turns: u32) {
        self.move_cooldowns.insert(move_id.to_string(), turns);
    }

    /// Decrement every move cooldown by one, stopping at zero
    pub fn tick_cooldowns(&mut self) {
        for turns in self.move_cooldowns.values_mut() {
            *turns = turns.saturating_sub(1);
        }
    }

    /// Decrement the reposition cooldown by one, stopping at zero
    pub fn tick_reposition_cooldown(&mut self) {
        self.reposition_cooldown = self.reposition_cooldown.saturating_sub(1);
    }

    /// Check if repositioning is cooling down
    pub fn can_reposition(&self) -> bool {
        self.reposition_cooldown == 0
    }

    /// Normalized opponent profile (both 0 with no observations)
    pub fn opponent_profile(&self) -> OpponentProfile {
        let model = &self.opponent_model;
        let total = model.aggressive_count + model.defensive_count;
        if total == 0 {
            return OpponentProfile::default();
        }
        OpponentProfile {
            aggression: model.aggressive_count as f64 / total as f64,
            defensiveness: model.defensive_count as f64 / total as f64,
        }
    }

    /// Forget everything (new battle)
    pub fn reset(&mut self) {
        *self = Memory::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_effectiveness_score() {
        let mut memory = Memory::new();
        assert_eq!(memory.effectiveness_score("jab"), 0.0);

        let entry = memory.self_move_effectiveness.entry("jab".to_string()).or_default();
        entry.record(Some(Effectiveness::Strong));
        entry.record(Some(Effectiveness::Weak));
        entry.record(None);

        assert_eq!(memory.uses("jab"), 3);
        assert!((memory.effectiveness_score("jab") - 1.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_cooldown_never_negative() {
        let mut memory = Memory::new();
        memory.set_cooldown("heavy_slam", 2);
        memory.reposition_cooldown = 2;

        for _ in 0..3 {
            memory.tick_cooldowns();
            memory.tick_reposition_cooldown();
        }

        assert_eq!(memory.cooldown("heavy_slam"), 0);
        assert_eq!(memory.reposition_cooldown, 0);
        assert!(!memory.is_on_cooldown("heavy_slam"));
        assert!(memory.can_reposition());
    }

    #[test]
    fn test_opponent_profile() {
        let mut memory = Memory::new();
        assert_eq!(memory.opponent_profile(), OpponentProfile::default());

        memory.opponent_model.aggressive_count = 3;
        memory.opponent_model.defensive_count = 1;
        let profile = memory.opponent_profile();
        assert!((profile.aggression - 0.75).abs() < f64::EPSILON);
        assert!((profile.defensiveness - 0.25).abs() < f64::EPSILON);
    }

    #[test]
    fn test_reset() {
        let mut memory = Memory::new();
        memory.opponent_model.aggressive_count = 5;
        memory.set_cooldown("jab", 1);
        memory.reset();
        assert_eq!(memory, Memory::default());
    }
}
