//! Decision engine - the two entry points used by the host battle loop
//!
//! Per turn, for each combatant:
//! 1. Host filters the move set down to legal candidates
//! 2. [`TacticsEngine::decide`] picks one
//! 3. Host resolves it
//! 4. [`TacticsEngine::learn`] folds the outcome back into memory/personality

use crate::candidate::Candidate;
use crate::combatant::{ActionOutcome, Combatant};
use crate::config::{ConfigError, TacticsTuning};
use crate::meta::assess;
use crate::scoring::score_all;
use crate::selection::{select_with_rng, Decision, SelectionOptions};
use crate::store::{adapt_personality, update_memory, PersonalityDrift};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// What changed during a learn step
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LearnReport {
    /// Personality drift, if an outcome streak triggered one
    pub drift: Option<PersonalityDrift>,
}

/// Decision core configured with a set of tuning constants
#[derive(Debug, Clone, Default)]
pub struct TacticsEngine {
    tuning: TacticsTuning,
}

impl TacticsEngine {
    /// Create an engine with the default tuning
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an engine with validated custom tuning
    pub fn with_tuning(tuning: TacticsTuning) -> Result<Self, ConfigError> {
        tuning.validate()?;
        Ok(TacticsEngine { tuning })
    }

    /// Get the tuning in use
    pub fn tuning(&self) -> &TacticsTuning {
        &self.tuning
    }

    /// Choose a move using thread-local randomness
    pub fn decide(&self, me: &Combatant, opponent: &Combatant, legal: &[Candidate], turn: u32) -> Decision {
        let mut rng = rand::thread_rng();
        self.decide_with_rng(me, opponent, legal, turn, &mut rng)
    }

    /// Choose a move with a provided RNG (for deterministic testing)
    pub fn decide_with_rng(
        &self,
        me: &Combatant,
        opponent: &Combatant,
        legal: &[Candidate],
        turn: u32,
        rng: &mut impl Rng,
    ) -> Decision {
        self.decide_with_options(me, opponent, legal, turn, SelectionOptions::default(), rng)
    }

    /// Choose a move with explicit selection overrides
    pub fn decide_with_options(
        &self,
        me: &Combatant,
        opponent: &Combatant,
        legal: &[Candidate],
        turn: u32,
        options: SelectionOptions,
        rng: &mut impl Rng,
    ) -> Decision {
        let meta = assess(me, opponent, turn);
        tracing::debug!(
            "{} turn {} meta: urgency {} flags {:?}",
            me.name,
            turn,
            meta.urgency(),
            meta.active_flags()
        );

        let scored = score_all(legal, me, opponent, &meta, &self.tuning.scoring, rng);
        let decision = select_with_rng(&scored, &me.personality, &meta, &self.tuning.selection, options, rng);

        tracing::debug!("{} chose {}", me.name, decision.summary());
        decision
    }

    /// Record a resolved outcome, update memory, then adapt personality
    ///
    /// Call exactly once per turn, after the combatant's own move resolved.
    pub fn learn(&self, me: &mut Combatant, opponent: &Combatant, outcome: &ActionOutcome) -> LearnReport {
        me.record(outcome);
        update_memory(me, opponent, &self.tuning.adaptation);
        let drift = adapt_personality(me, &self.tuning.adaptation);
        LearnReport { drift }
    }
}

/// Choose a move with the default tuning
pub fn decide(me: &Combatant, opponent: &Combatant, legal: &[Candidate], turn: u32) -> Decision {
    TacticsEngine::default().decide(me, opponent, legal, turn)
}

/// Learn from an outcome with the default tuning
pub fn learn(me: &mut Combatant, opponent: &Combatant, outcome: &ActionOutcome) -> LearnReport {
    TacticsEngine::default().learn(me, opponent, outcome)
}
