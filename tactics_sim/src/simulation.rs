//! Duel simulation: drives two combatants through the decision core

use crate::legality::legal_moves;
use crate::resolver::resolve;
use rand::Rng;
use tactics_core::{Candidate, Combatant, Decision, Effectiveness, TacticsEngine};

/// One resolved action
#[derive(Debug, Clone)]
pub struct TurnLog {
    pub turn: u32,
    pub actor: String,
    pub decision: Decision,
    pub effectiveness: Option<Effectiveness>,
    pub damage: f64,
    /// Whether the action triggered personality drift
    pub drifted: bool,
}

/// Result of a duel
#[derive(Debug, Clone)]
pub struct DuelSimulation {
    pub turns: u32,
    pub winner: Option<String>,
    pub log: Vec<TurnLog>,
}

impl DuelSimulation {
    /// Run a duel until one side drops or `max_turns` is reached
    ///
    /// Both combatants are mutated in place so their learned state can be saved.
    pub fn run(
        engine: &TacticsEngine,
        moves: &[Candidate],
        first: &mut Combatant,
        second: &mut Combatant,
        max_turns: u32,
        rng: &mut impl Rng,
    ) -> Self {
        let mut result = DuelSimulation {
            turns: 0,
            winner: None,
            log: Vec::new(),
        };

        'battle: for turn in 1..=max_turns {
            result.turns = turn;
            for side in 0..2 {
                let (me, opponent) = if side == 0 {
                    (&mut *first, &mut *second)
                } else {
                    (&mut *second, &mut *first)
                };

                let legal = legal_moves(me, opponent, moves);
                let decision = engine.decide_with_rng(me, opponent, &legal, turn, rng);
                let outcome = resolve(&decision.chosen, me, opponent, rng);
                let report = engine.learn(me, opponent, &outcome);

                tracing::info!(
                    "turn {:>2} {:<10} {:<16} {:>5.1} dmg  {:?}  ({} hp vs {} hp)",
                    turn,
                    me.name,
                    decision.chosen.name,
                    outcome.damage_dealt,
                    outcome.effectiveness,
                    me.stats.health.round(),
                    opponent.stats.health.round()
                );

                result.log.push(TurnLog {
                    turn,
                    actor: me.name.clone(),
                    effectiveness: outcome.effectiveness,
                    damage: outcome.damage_dealt,
                    drifted: report.drift.is_some(),
                    decision,
                });

                if !opponent.stats.is_alive() {
                    result.winner = Some(me.name.clone());
                    break 'battle;
                }
            }
        }

        result
    }

    /// Total damage dealt by a combatant
    pub fn damage_by(&self, name: &str) -> f64 {
        self.log
            .iter()
            .filter(|l| l.actor == name)
            .map(|l| l.damage)
            .sum()
    }

    /// Number of actions that caused personality drift
    pub fn drift_count(&self) -> usize {
        self.log.iter().filter(|l| l.drifted).count()
    }
}
