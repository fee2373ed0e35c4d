//! Candidate - A move a combatant could take this turn

use crate::types::{MoveCategory, MoveTag};
use serde::{Deserialize, Serialize};

/// Identifier of the terminal fallback move
pub const STRUGGLE_ID: &str = "struggle";

/// Describes a single move
/// Loaded from TOML configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    /// Unique move identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Move category
    pub category: MoveCategory,
    /// Base power before the target's defense is applied
    #[serde(default)]
    pub base_power: f64,
    /// Primary resource spent when used
    #[serde(default)]
    pub resource_cost: u32,
    /// Tags for situational weighting
    #[serde(default)]
    pub tags: Vec<MoveTag>,
    /// Only usable when the finisher condition holds
    #[serde(default)]
    pub finisher: Option<FinisherCondition>,
    /// Maximum uses per battle (None = unlimited)
    #[serde(default)]
    pub max_uses: Option<u32>,
}

/// Condition under which a finisher becomes legal
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FinisherCondition {
    /// Opponent health must be strictly below this value
    pub opponent_health_below: f64,
}

impl FinisherCondition {
    /// Check the condition against the opponent's current health
    pub fn is_met(&self, opponent_health: f64) -> bool {
        opponent_health < self.opponent_health_below
    }
}

impl Candidate {
    /// Create a candidate with no tags, cost or limits
    pub fn new(id: impl Into<String>, name: impl Into<String>, category: MoveCategory, base_power: f64) -> Self {
        Candidate {
            id: id.into(),
            name: name.into(),
            category,
            base_power,
            resource_cost: 0,
            tags: Vec::new(),
            finisher: None,
            max_uses: None,
        }
    }

    /// The terminal fallback move, always available
    pub fn struggle() -> Self {
        Candidate::new(STRUGGLE_ID, "Struggle", MoveCategory::Attack, 10.0)
    }

    /// Builder: add a tag
    pub fn with_tag(mut self, tag: MoveTag) -> Self {
        if !self.tags.contains(&tag) {
            self.tags.push(tag);
        }
        self
    }

    /// Builder: set resource cost
    pub fn with_cost(mut self, cost: u32) -> Self {
        self.resource_cost = cost;
        self
    }

    /// Builder: set finisher condition
    pub fn with_finisher(mut self, opponent_health_below: f64) -> Self {
        self.finisher = Some(FinisherCondition { opponent_health_below });
        self
    }

    /// Builder: limit uses
    pub fn with_max_uses(mut self, max_uses: u32) -> Self {
        self.max_uses = Some(max_uses);
        self
    }

    /// Check if the move carries a tag
    pub fn has_tag(&self, tag: MoveTag) -> bool {
        self.tags.contains(&tag)
    }

    /// Check if this is the terminal fallback move
    pub fn is_struggle(&self) -> bool {
        self.id == STRUGGLE_ID
    }

    /// Check if this is a reposition-type move
    pub fn is_reposition(&self) -> bool {
        self.category == MoveCategory::Reposition
    }
}
