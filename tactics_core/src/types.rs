//! Core enumerations shared across the decision pipeline

use serde::{Deserialize, Serialize};

/// Broad category of a move, used by the scorer and the opponent model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MoveCategory {
    /// Direct damage
    Attack,
    /// Raises own defense or recovers
    DefensiveBuff,
    /// Setup, debuffs, anything non-damaging
    Utility,
    /// High-commitment closing move
    Finisher,
    /// Repositioning (dash, sidestep, retreat)
    Reposition,
}

impl MoveCategory {
    /// Whether the opponent model counts this as aggression
    pub fn is_aggressive(&self) -> bool {
        matches!(self, MoveCategory::Attack | MoveCategory::Finisher)
    }

    /// Whether the opponent model counts this as defensive play
    pub fn is_defensive(&self) -> bool {
        matches!(self, MoveCategory::DefensiveBuff)
    }
}

/// Tags attached to moves for situational weighting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MoveTag {
    HighDamage,
    Pierce,
    MultiHit,
    Melee,
    Ranged,
    Heal,
    Stun,
    Buff,
    Debuff,
}

/// How well a resolved move landed, as reported by the resolver
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Effectiveness {
    Weak,
    Normal,
    Strong,
    Critical,
}

impl Effectiveness {
    /// Numeric value accumulated into move effectiveness memory
    pub fn value(&self) -> i32 {
        match self {
            Effectiveness::Weak => -1,
            Effectiveness::Normal => 1,
            Effectiveness::Strong => 2,
            Effectiveness::Critical => 3,
        }
    }

    /// Numeric value of an optional outcome (unknown outcomes count as 0)
    pub fn value_of(outcome: Option<Effectiveness>) -> i32 {
        outcome.map(|e| e.value()).unwrap_or(0)
    }

    /// Strong or better
    pub fn is_strong_or_better(&self) -> bool {
        matches!(self, Effectiveness::Strong | Effectiveness::Critical)
    }
}
