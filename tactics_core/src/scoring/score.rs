//! Scoring rules: category base score, meta-state bonuses, memory and
//! personality terms

use super::ScoredCandidate;
use crate::candidate::Candidate;
use crate::combatant::Combatant;
use crate::config::{ScoringWeights, NEUTRAL_TRAIT};
use crate::meta::MetaState;
use crate::types::{MoveCategory, MoveTag};
use rand::Rng;

/// Uniform draw in `[lo, hi)`
///
/// An empty range yields `lo`; a range too wide to sample yields its midpoint.
fn jitter(rng: &mut impl Rng, lo: f64, hi: f64) -> f64 {
    if hi <= lo {
        lo
    } else if (hi - lo).is_finite() {
        rng.gen_range(lo..hi)
    } else {
        lo / 2.0 + hi / 2.0
    }
}

/// Score a single candidate
///
/// Legality (cost, cooldown, uses, finisher condition) is assumed to have
/// been checked already.
pub fn score(
    candidate: &Candidate,
    me: &Combatant,
    opponent: &Combatant,
    meta: &MetaState,
    weights: &ScoringWeights,
    rng: &mut impl Rng,
) -> ScoredCandidate {
    let mut scored = ScoredCandidate::new(candidate.clone());

    // === Base score ===
    match candidate.category {
        MoveCategory::Attack => {
            let net_power = (candidate.base_power - opponent.stats.defense).max(1.0);
            let base = weights.attack_scale * net_power / opponent.stats.health.max(1.0);
            let noise = jitter(rng, 0.0, weights.attack_jitter);
            scored.add(base + noise, format!("base:attack={:.2}", base + noise));
        }
        MoveCategory::DefensiveBuff => {
            let (base, tag) = if me.stats.health < weights.defensive_low_health_threshold {
                (weights.defensive_low_health_score, "base:defensive_low_health")
            } else if me.stats.defense > weights.over_defended_threshold {
                (weights.over_defended_score, "base:defensive_over_defended")
            } else {
                (weights.defensive_default_score, "base:defensive")
            };
            scored.add(base, format!("{}={:.2}", tag, base));
        }
        _ => {
            let base = weights.other_base_score + jitter(rng, 0.0, weights.other_jitter);
            scored.add(base, format!("base:other={:.2}", base));
        }
    }

    // === Meta-state bonuses ===
    let bonuses = [
        (meta.stuck_loop, weights.pattern_break_bonus, "bonus:pattern_break"),
        (meta.escalation_needed, weights.escalation_bonus, "bonus:escalation"),
        (meta.finishing_time, weights.finisher_bonus, "bonus:finisher"),
        (meta.desperate, weights.desperation_bonus, "bonus:desperation"),
        (meta.timeout_pressure, weights.timeout_bonus, "bonus:timeout"),
        (meta.stalemate, weights.stalemate_bonus, "bonus:stalemate"),
        (meta.bored, weights.boredom_bonus, "bonus:boredom"),
        (meta.frustrated, weights.frustration_bonus, "bonus:frustration"),
    ];
    for (active, amount, tag) in bonuses {
        if active {
            scored.add(amount, format!("{}=+{:.0}", tag, amount));
        }
    }

    // === Memory-informed terms ===
    let bias = me.personality.signature_bias(&candidate.id);
    if bias != 0.0 {
        let amount = bias * weights.signature_bias_scale;
        scored.add(amount, format!("memory:signature={:+.2}", amount));
    }

    if me.memory.uses(&candidate.id) > 0 {
        let amount = me.memory.effectiveness_score(&candidate.id) * weights.learned_effectiveness_scale;
        scored.add(amount, format!("memory:learned={:+.2}", amount));
    }

    if me.last_move().map(|m| m.move_id == candidate.id).unwrap_or(false) {
        let amount = -me.personality.anti_repeater * weights.anti_repeat_penalty;
        scored.add(amount, format!("memory:anti_repeat={:+.2}", amount));
    }

    let punishes_turtle = matches!(candidate.category, MoveCategory::Attack | MoveCategory::Finisher)
        && (candidate.has_tag(MoveTag::Pierce) || candidate.has_tag(MoveTag::HighDamage));
    if me.memory.opponent_model.is_turtling && punishes_turtle {
        let amount = me.personality.opportunism * weights.turtle_punish_scale;
        scored.add(amount, format!("memory:turtle_punish={:+.2}", amount));
    }

    // === Personality-informed terms ===
    let p = &me.personality;
    let risky = candidate.has_tag(MoveTag::HighDamage) || candidate.base_power >= weights.risky_power_threshold;
    let traits = [
        (candidate.category.is_aggressive(), p.aggression, weights.aggression_scale, "trait:aggression"),
        (candidate.category.is_defensive(), p.defensive_bias, weights.defensive_bias_scale, "trait:defensive_bias"),
        (
            matches!(candidate.category, MoveCategory::DefensiveBuff | MoveCategory::Reposition),
            p.patience,
            weights.patience_scale,
            "trait:patience",
        ),
        (
            matches!(candidate.category, MoveCategory::Utility | MoveCategory::Reposition),
            p.creativity,
            weights.creativity_scale,
            "trait:creativity",
        ),
        (risky, p.risk_tolerance, weights.risk_tolerance_scale, "trait:risk_tolerance"),
    ];
    for (applies, value, scale, tag) in traits {
        let amount = (value - NEUTRAL_TRAIT) * scale;
        if applies && amount != 0.0 {
            scored.add(amount, format!("{}={:+.2}", tag, amount));
        }
    }

    // === Tie-break jitter and clamp ===
    let noise = jitter(rng, -weights.tie_break_jitter, weights.tie_break_jitter);
    if noise != 0.0 {
        scored.add(noise, format!("jitter={:+.2}", noise));
    }

    if !scored.score.is_finite() || scored.score < 0.0 {
        scored.score = 0.0;
        scored.reasons.push("clamped:0".to_string());
    }

    scored
}

/// Score every candidate independently, preserving order
pub fn score_all(
    candidates: &[Candidate],
    me: &Combatant,
    opponent: &Combatant,
    meta: &MetaState,
    weights: &ScoringWeights,
    rng: &mut impl Rng,
) -> Vec<ScoredCandidate> {
    candidates
        .iter()
        .map(|c| score(c, me, opponent, meta, weights, rng))
        .collect()
}
