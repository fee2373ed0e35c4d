//! Combatant - One side of a battle and its move history

use crate::candidate::Candidate;
use crate::store::{CombatantState, Memory, PersonalityProfile};
use crate::types::{Effectiveness, MoveCategory};
use serde::{Deserialize, Serialize};

/// Current battle stats, owned by the host battle loop
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BattleStats {
    pub health: f64,
    pub max_health: f64,
    pub defense: f64,
    /// Primary resource (energy, focus...) spent by moves
    pub resource: u32,
}

impl Default for BattleStats {
    fn default() -> Self {
        BattleStats {
            health: 100.0,
            max_health: 100.0,
            defense: 20.0,
            resource: 0,
        }
    }
}

impl BattleStats {
    /// Check if the combatant can still act
    pub fn is_alive(&self) -> bool {
        self.health > 0.0
    }
}

/// A resolved move in a combatant's history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoveRecord {
    pub move_id: String,
    pub category: MoveCategory,
    /// Outcome as reported by the resolver (None if unknown)
    pub outcome: Option<Effectiveness>,
    pub damage_dealt: f64,
}

/// What the resolver reports back after applying a chosen move
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionOutcome {
    pub candidate: Candidate,
    pub effectiveness: Option<Effectiveness>,
    pub damage_dealt: f64,
}

impl ActionOutcome {
    /// Create an outcome for a resolved candidate
    pub fn new(candidate: Candidate, effectiveness: Option<Effectiveness>, damage_dealt: f64) -> Self {
        ActionOutcome {
            candidate,
            effectiveness,
            damage_dealt,
        }
    }
}

/// A combatant: stats, personality, memory and history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Combatant {
    pub name: String,
    pub stats: BattleStats,
    pub personality: PersonalityProfile,
    pub memory: Memory,
    pub history: Vec<MoveRecord>,
}

impl Combatant {
    /// Create a combatant with default stats, personality and empty memory
    pub fn new(name: impl Into<String>) -> Self {
        Combatant {
            name: name.into(),
            stats: BattleStats::default(),
            personality: PersonalityProfile::default(),
            memory: Memory::default(),
            history: Vec::new(),
        }
    }

    /// Builder: set stats
    pub fn with_stats(mut self, stats: BattleStats) -> Self {
        self.stats = stats;
        self
    }

    /// Builder: set personality
    pub fn with_personality(mut self, personality: PersonalityProfile) -> Self {
        self.personality = personality;
        self
    }

    /// Builder: set health
    pub fn with_health(mut self, health: f64) -> Self {
        self.stats.health = health;
        self
    }

    /// The most recent resolved move
    pub fn last_move(&self) -> Option<&MoveRecord> {
        self.history.last()
    }

    /// Move ids, oldest first
    pub fn move_names(&self) -> Vec<&str> {
        self.history.iter().map(|r| r.move_id.as_str()).collect()
    }

    /// Number of trailing defensive moves in a row
    pub fn consecutive_defensive_turns(&self) -> u32 {
        self.history
            .iter()
            .rev()
            .take_while(|r| r.category.is_defensive())
            .count() as u32
    }

    /// Append a resolved move to the history
    pub fn record(&mut self, outcome: &ActionOutcome) {
        self.history.push(MoveRecord {
            move_id: outcome.candidate.id.clone(),
            category: outcome.candidate.category,
            outcome: outcome.effectiveness,
            damage_dealt: outcome.damage_dealt,
        });
    }

    /// The persistent part of this combatant
    pub fn state(&self) -> CombatantState {
        CombatantState {
            personality: self.personality.clone(),
            memory: self.memory.clone(),
        }
    }

    /// Restore personality and memory from saved state
    pub fn restore(&mut self, state: CombatantState) {
        self.personality = state.personality;
        self.memory = state.memory;
    }
}
