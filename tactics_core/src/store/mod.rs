//! Personality & memory store - persistent per-combatant state

mod adapt;
mod memory;
mod persist;
mod personality;

pub use adapt::{adapt_personality, update_memory, DriftCause, PersonalityDrift};
pub use memory::{Memory, MoveEffectiveness, OpponentModel, OpponentProfile};
pub use persist::{load_state, save_state, CombatantState, StateError};
pub use personality::{PersonalityProfile, PersonalityTrait, TRAIT_CEILING};
