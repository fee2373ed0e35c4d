//! Move scoring - desirability of each legal candidate

mod score;

pub use score::{score, score_all};

use crate::candidate::Candidate;
use serde::{Deserialize, Serialize};

/// A candidate with its score and the reasons behind it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredCandidate {
    pub candidate: Candidate,
    /// Never negative
    pub score: f64,
    /// Contributing terms in the order they were applied
    pub reasons: Vec<String>,
}

impl ScoredCandidate {
    /// Start a scored candidate at zero
    pub fn new(candidate: Candidate) -> Self {
        ScoredCandidate {
            candidate,
            score: 0.0,
            reasons: Vec::new(),
        }
    }

    /// Add a term and record why
    pub fn add(&mut self, amount: f64, reason: String) {
        self.score += amount;
        self.reasons.push(reason);
    }
}
