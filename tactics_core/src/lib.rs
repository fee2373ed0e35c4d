//! tactics_core - Adaptive combat decision core for non-player combatants
//!
//! This library provides:
//! - Meta-state assessment: per-turn tactical/emotional snapshot
//! - Pattern detection: repeating move cycles at the tail of a history
//! - Move scoring: desirability + reasons for every legal candidate
//! - Move selection: deterministic argmax or truncated-softmax sampling
//! - Personality & memory: per-combatant state that learns from outcomes

pub mod candidate;
pub mod combatant;
pub mod config;
pub mod engine;
pub mod meta;
pub mod prelude;
pub mod scoring;
pub mod selection;
pub mod store;
pub mod types;

// Re-export core types for convenience
pub use candidate::{Candidate, FinisherCondition};
pub use combatant::{ActionOutcome, BattleStats, Combatant, MoveRecord};
pub use config::{default_moves, default_personalities, TacticsTuning};
pub use engine::{decide, learn, LearnReport, TacticsEngine};
pub use meta::{assess, detect_patterns, MetaState, PatternReport};
pub use scoring::ScoredCandidate;
pub use selection::{Decision, SelectionMethod, SelectionOptions, WeightedCandidate};
pub use store::{CombatantState, Memory, PersonalityProfile};
pub use types::{Effectiveness, MoveCategory, MoveTag};
