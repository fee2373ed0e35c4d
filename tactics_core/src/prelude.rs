//! Prelude module for convenient imports
//!
//! ```rust
//! use tactics_core::prelude::*;
//! ```

// Core types
pub use crate::candidate::Candidate;
pub use crate::combatant::{ActionOutcome, BattleStats, Combatant};
pub use crate::types::{Effectiveness, MoveCategory, MoveTag};

// Pipeline
pub use crate::engine::{LearnReport, TacticsEngine};
pub use crate::meta::MetaState;
pub use crate::selection::{Decision, SelectionMethod, SelectionOptions};

// Store
pub use crate::store::{CombatantState, Memory, PersonalityProfile, PersonalityTrait};

// Config
pub use crate::config::{default_moves, default_personalities, TacticsTuning};
