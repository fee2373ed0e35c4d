//! Move selection - turn scores into a single decision

mod softmax;
mod weights;

pub use softmax::{sample_index, softmax, temperature, top_k_indices};
pub use weights::{compute_weights, weigh, WeightedCandidate, FALLBACK_REASON};

use crate::candidate::Candidate;
use crate::config::SelectionTuning;
use crate::meta::MetaState;
use crate::scoring::ScoredCandidate;
use crate::store::PersonalityProfile;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// How the final move was picked
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionMethod {
    /// Argmax over weights
    Deterministic,
    /// Sampled from the truncated softmax (or uniform when no weight is positive)
    Probabilistic,
    /// No legal candidates; Struggle was used
    Fallback,
}

/// Per-call selection overrides
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionOptions {
    /// Sample even when predictability would make the pick deterministic
    pub force_random: bool,
}

/// The chosen move and why
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Decision {
    pub chosen: Candidate,
    /// Probability the chosen move had (1.0 when deterministic)
    pub probability: f64,
    /// Softmax temperature (0 when deterministic)
    pub temperature: f64,
    pub method: SelectionMethod,
    /// Reasons of the winning candidate, then the selection tag
    pub reasons: Vec<String>,
    /// Meta-state the decision was made under
    pub meta: MetaState,
}

impl Decision {
    /// The terminal fallback decision (never fails)
    pub fn fallback(meta: MetaState) -> Self {
        let weighted = WeightedCandidate::fallback();
        Decision {
            chosen: weighted.candidate,
            probability: 1.0,
            temperature: 0.0,
            method: SelectionMethod::Fallback,
            reasons: weighted.reasons,
            meta,
        }
    }

    /// Check if this is the terminal fallback
    pub fn is_fallback(&self) -> bool {
        self.method == SelectionMethod::Fallback
    }

    /// Get a one-line summary for logs
    pub fn summary(&self) -> String {
        let mut parts = vec![
            format!("{} ({})", self.chosen.name, self.chosen.id),
            format!("{:?}", self.method).to_lowercase(),
            format!("p={:.2}", self.probability),
        ];

        if self.temperature > 0.0 {
            parts.push(format!("T={:.2}", self.temperature));
        }

        let flags = self.meta.active_flags();
        if !flags.is_empty() {
            parts.push(format!("[{}]", flags.join(",")));
        }

        parts.join(", ")
    }
}

/// Pick a move from scored candidates using thread-local randomness
pub fn select(
    scored: &[ScoredCandidate],
    personality: &PersonalityProfile,
    meta: &MetaState,
    tuning: &SelectionTuning,
    options: SelectionOptions,
) -> Decision {
    let mut rng = rand::thread_rng();
    select_with_rng(scored, personality, meta, tuning, options, &mut rng)
}

/// Pick a move with a provided RNG (for deterministic testing)
pub fn select_with_rng(
    scored: &[ScoredCandidate],
    personality: &PersonalityProfile,
    meta: &MetaState,
    tuning: &SelectionTuning,
    options: SelectionOptions,
    rng: &mut impl Rng,
) -> Decision {
    if scored.is_empty() {
        tracing::warn!("No legal candidates, falling back to Struggle");
        return Decision::fallback(*meta);
    }

    let weighted = compute_weights(scored, meta, tuning);
    let weights: Vec<f64> = weighted.iter().map(|w| w.effective_weight()).collect();

    // Step 1: Determinism gate
    if personality.predictability >= tuning.deterministic_threshold && !options.force_random {
        let best = top_k_indices(&weights, 1)[0];
        return finish(&weighted[best], 1.0, 0.0, SelectionMethod::Deterministic, "select:deterministic", meta);
    }

    let temp = temperature(personality.predictability, tuning);

    // Step 2: Nothing positive to sample from
    if weights.iter().all(|w| *w <= 0.0) {
        tracing::warn!("No candidate has positive weight, sampling uniformly");
        let pick = rng.gen_range(0..weighted.len());
        let probability = 1.0 / weighted.len() as f64;
        return finish(&weighted[pick], probability, temp, SelectionMethod::Probabilistic, "select:uniform", meta);
    }

    // Step 3: Softmax over the top candidates
    let top = top_k_indices(&weights, tuning.top_k.max(1));
    let top_weights: Vec<f64> = top.iter().map(|&i| weights[i]).collect();
    let probabilities = softmax(&top_weights, temp);
    let slot = sample_index(&probabilities, rng);

    finish(
        &weighted[top[slot]],
        probabilities[slot],
        temp,
        SelectionMethod::Probabilistic,
        "select:softmax",
        meta,
    )
}

fn finish(
    winner: &WeightedCandidate,
    probability: f64,
    temperature: f64,
    method: SelectionMethod,
    tag: &str,
    meta: &MetaState,
) -> Decision {
    let mut reasons = winner.reasons.clone();
    reasons.push(format!("{} w={:.2} p={:.2}", tag, winner.weight, probability));
    Decision {
        chosen: winner.candidate.clone(),
        probability,
        temperature,
        method,
        reasons,
        meta: *meta,
    }
}
