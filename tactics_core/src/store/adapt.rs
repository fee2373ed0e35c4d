//! Post-resolution mutators: memory update and personality drift

use crate::combatant::Combatant;
use crate::config::AdaptationTuning;
use crate::types::Effectiveness;
use serde::{Deserialize, Serialize};

use super::personality::PersonalityTrait;

/// Ceiling for outcome-driven drift
const DRIFT_CEILING: f64 = 1.0;

/// Why a drift happened
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DriftCause {
    /// Two weak outcomes in a row
    WeakStreak,
    /// Two strong-or-better outcomes in a row
    StrongStreak,
}

/// A personality change triggered by an outcome streak
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonalityDrift {
    pub cause: DriftCause,
    /// Applied (post-clamp) changes per trait
    pub changes: Vec<(PersonalityTrait, f64)>,
}

/// Fold the last resolved turn into memory
///
/// Must run once per turn, after the combatant's own move has been recorded.
pub fn update_memory(combatant: &mut Combatant, opponent: &Combatant, tuning: &AdaptationTuning) {
    combatant.memory.tick_cooldowns();

    if let Some(last) = combatant.history.last() {
        let memory = &mut combatant.memory;
        memory
            .self_move_effectiveness
            .entry(last.move_id.clone())
            .or_default()
            .record(last.outcome);

        if last.outcome == Some(Effectiveness::Weak) {
            memory.set_cooldown(&last.move_id, tuning.weak_move_cooldown);
        }
        if last.category == crate::types::MoveCategory::Reposition {
            memory.reposition_cooldown = tuning.reposition_cooldown;
        }
    }

    combatant.memory.tick_reposition_cooldown();

    let model = &mut combatant.memory.opponent_model;
    if let Some(theirs) = opponent.last_move() {
        if theirs.category.is_aggressive() {
            model.aggressive_count += 1;
        } else if theirs.category.is_defensive() {
            model.defensive_count += 1;
        }
    }
    model.is_turtling = opponent.consecutive_defensive_turns() >= tuning.turtling_threshold;
}

/// Drift personality traits on outcome streaks
///
/// Looks at the last two resolved outcomes; returns the drift if one happened.
pub fn adapt_personality(combatant: &mut Combatant, tuning: &AdaptationTuning) -> Option<PersonalityDrift> {
    let n = combatant.history.len();
    if n < 2 {
        return None;
    }
    let (prev, last) = (combatant.history[n - 2].outcome, combatant.history[n - 1].outcome);

    let drift = match (prev, last) {
        (Some(Effectiveness::Weak), Some(Effectiveness::Weak)) => {
            let p = &mut combatant.personality;
            PersonalityDrift {
                cause: DriftCause::WeakStreak,
                changes: vec![
                    (
                        PersonalityTrait::Creativity,
                        p.nudge(PersonalityTrait::Creativity, tuning.creativity_drift, DRIFT_CEILING),
                    ),
                    (
                        PersonalityTrait::RiskTolerance,
                        p.nudge(PersonalityTrait::RiskTolerance, tuning.risk_tolerance_drift, DRIFT_CEILING),
                    ),
                ],
            }
        }
        (Some(a), Some(b)) if a.is_strong_or_better() && b.is_strong_or_better() => {
            let p = &mut combatant.personality;
            PersonalityDrift {
                cause: DriftCause::StrongStreak,
                changes: vec![(
                    PersonalityTrait::Aggression,
                    p.nudge(PersonalityTrait::Aggression, tuning.aggression_drift, DRIFT_CEILING),
                )],
            }
        }
        _ => return None,
    };

    tracing::info!(
        "{} personality drift ({:?}): {:?}",
        combatant.name,
        drift.cause,
        drift.changes
    );
    Some(drift)
}
