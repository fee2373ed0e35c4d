//! Score → weight transform with situational multipliers

use crate::candidate::Candidate;
use crate::config::SelectionTuning;
use crate::meta::MetaState;
use crate::scoring::ScoredCandidate;
use crate::types::MoveTag;
use serde::{Deserialize, Serialize};

/// Fallback marker carried by the terminal fallback
pub const FALLBACK_REASON: &str = "fallback:no-legal-candidates";

/// A candidate with its sampling weight
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightedCandidate {
    pub candidate: Candidate,
    /// Never negative
    pub weight: f64,
    pub reasons: Vec<String>,
}

impl WeightedCandidate {
    /// The terminal fallback (Struggle, weight 1.0)
    pub fn fallback() -> Self {
        WeightedCandidate {
            candidate: Candidate::struggle(),
            weight: 1.0,
            reasons: vec![FALLBACK_REASON.to_string()],
        }
    }

    /// Weight usable for sampling (non-finite counts as zero)
    pub fn effective_weight(&self) -> f64 {
        if self.weight.is_finite() && self.weight > 0.0 {
            self.weight
        } else {
            0.0
        }
    }
}

/// Convert one scored candidate into a weighted candidate
pub fn weigh(scored: &ScoredCandidate, meta: &MetaState, tuning: &SelectionTuning) -> WeightedCandidate {
    let power = scored.candidate.base_power;
    let mut weight = if scored.score.is_finite() {
        scored.score.max(tuning.min_weight)
    } else {
        tuning.min_weight
    };
    let mut reasons = scored.reasons.clone();

    let multipliers = [
        (
            meta.bored && power > tuning.bored_power_threshold,
            tuning.bored_multiplier,
            "weight:bored_power",
        ),
        (
            meta.desperate && power > tuning.desperate_power_threshold,
            tuning.desperate_multiplier,
            "weight:desperate_power",
        ),
        (
            meta.finishing_time && power > tuning.finishing_power_threshold,
            tuning.finishing_multiplier,
            "weight:finishing_power",
        ),
        (
            meta.frustrated && scored.candidate.has_tag(MoveTag::HighDamage),
            tuning.frustrated_high_damage_multiplier,
            "weight:frustrated_high_damage",
        ),
        (
            meta.stuck_loop && power > tuning.stuck_loop_power_threshold,
            tuning.stuck_loop_multiplier,
            "weight:stuck_loop_power",
        ),
    ];
    for (applies, factor, tag) in multipliers {
        if applies {
            weight *= factor;
            reasons.push(format!("{}=x{:.1}", tag, factor));
        }
    }

    WeightedCandidate {
        candidate: scored.candidate.clone(),
        weight: weight.max(0.0),
        reasons,
    }
}

/// Weigh every scored candidate, preserving order
pub fn compute_weights(
    scored: &[ScoredCandidate],
    meta: &MetaState,
    tuning: &SelectionTuning,
) -> Vec<WeightedCandidate> {
    scored.iter().map(|s| weigh(s, meta, tuning)).collect()
}
