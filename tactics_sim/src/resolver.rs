//! Toy resolver: applies a chosen move and reports how well it landed

use rand::Rng;
use tactics_core::{ActionOutcome, Candidate, Combatant, Effectiveness, MoveCategory, MoveTag};

/// Resource regained at the end of every action
pub const RESOURCE_REGEN: u32 = 1;
/// Defense gained from a defensive buff
pub const GUARD_DEFENSE: f64 = 15.0;
/// Health restored by a healing buff
pub const HEAL_AMOUNT: f64 = 18.0;

/// Resolve `mv` by `me` against `opponent`, mutating both
pub fn resolve(mv: &Candidate, me: &mut Combatant, opponent: &mut Combatant, rng: &mut impl Rng) -> ActionOutcome {
    me.stats.resource = me.stats.resource.saturating_sub(mv.resource_cost) + RESOURCE_REGEN;

    let (effectiveness, damage) = match mv.category {
        MoveCategory::Attack | MoveCategory::Finisher => {
            let effective_defense = if mv.has_tag(MoveTag::Pierce) {
                opponent.stats.defense * 0.5
            } else {
                opponent.stats.defense
            };
            let net = (mv.base_power - effective_defense).max(1.0);
            let effectiveness = roll_effectiveness(net / mv.base_power.max(1.0), rng);
            let damage = net * damage_factor(effectiveness) * 0.4;
            opponent.stats.health = (opponent.stats.health - damage).max(0.0);
            (Some(effectiveness), damage)
        }
        MoveCategory::DefensiveBuff => {
            if mv.has_tag(MoveTag::Heal) {
                me.stats.health = (me.stats.health + HEAL_AMOUNT).min(me.stats.max_health);
            } else {
                me.stats.defense += GUARD_DEFENSE;
            }
            (Some(Effectiveness::Normal), 0.0)
        }
        MoveCategory::Utility => {
            opponent.stats.defense = (opponent.stats.defense - 5.0).max(0.0);
            (Some(Effectiveness::Normal), 0.0)
        }
        MoveCategory::Reposition => (None, 0.0),
    };

    ActionOutcome::new(mv.clone(), effectiveness, damage)
}

/// Better penetration (net / raw power) shifts the roll toward strong hits
fn roll_effectiveness(penetration: f64, rng: &mut impl Rng) -> Effectiveness {
    let roll: f64 = rng.gen::<f64>() * 0.6 + penetration.clamp(0.0, 1.0) * 0.4;
    if roll < 0.25 {
        Effectiveness::Weak
    } else if roll < 0.65 {
        Effectiveness::Normal
    } else if roll < 0.92 {
        Effectiveness::Strong
    } else {
        Effectiveness::Critical
    }
}

fn damage_factor(effectiveness: Effectiveness) -> f64 {
    match effectiveness {
        Effectiveness::Weak => 0.5,
        Effectiveness::Normal => 1.0,
        Effectiveness::Strong => 1.4,
        Effectiveness::Critical => 2.0,
    }
}
