//! Toy legality gate: filters the full move set down to what can be used now

use tactics_core::{Candidate, Combatant};

/// Moves `me` may use this turn against `opponent`
///
/// Checks resource cost, move cooldown, remaining uses, finisher condition
/// and reposition cooldown.
pub fn legal_moves(me: &Combatant, opponent: &Combatant, moves: &[Candidate]) -> Vec<Candidate> {
    moves
        .iter()
        .filter(|m| is_legal(m, me, opponent))
        .cloned()
        .collect()
}

fn is_legal(mv: &Candidate, me: &Combatant, opponent: &Combatant) -> bool {
    if mv.resource_cost > me.stats.resource {
        return false;
    }
    if me.memory.is_on_cooldown(&mv.id) {
        return false;
    }
    if let Some(max) = mv.max_uses {
        if me.memory.uses(&mv.id) >= max {
            return false;
        }
    }
    if let Some(condition) = mv.finisher {
        if !condition.is_met(opponent.stats.health) {
            return false;
        }
    }
    !mv.is_reposition() || me.memory.can_reposition()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tactics_core::MoveCategory;

    #[test]
    fn test_resource_and_finisher_gates() {
        let mut me = Combatant::new("me");
        let mut them = Combatant::new("them");
        let moves = vec![
            Candidate::new("jab", "Jab", MoveCategory::Attack, 30.0),
            Candidate::new("slam", "Slam", MoveCategory::Attack, 70.0).with_cost(2),
            Candidate::new("execute", "Execute", MoveCategory::Finisher, 95.0)
                .with_cost(3)
                .with_finisher(30.0),
        ];

        me.stats.resource = 2;
        let ids: Vec<String> = legal_moves(&me, &them, &moves).into_iter().map(|m| m.id).collect();
        assert_eq!(ids, vec!["jab", "slam"]);

        me.stats.resource = 5;
        them.stats.health = 20.0;
        assert_eq!(legal_moves(&me, &them, &moves).len(), 3);
    }

    #[test]
    fn test_cooldown_and_uses_gates() {
        let mut me = Combatant::new("me");
        let them = Combatant::new("them");
        let moves = vec![
            Candidate::new("jab", "Jab", MoveCategory::Attack, 30.0),
            Candidate::new("wind", "Wind", MoveCategory::DefensiveBuff, 0.0).with_max_uses(1),
            Candidate::new("sidestep", "Sidestep", MoveCategory::Reposition, 0.0),
        ];

        me.memory.set_cooldown("jab", 1);
        me.memory.self_move_effectiveness.entry("wind".to_string()).or_default().record(None);
        me.memory.reposition_cooldown = 1;

        assert!(legal_moves(&me, &them, &moves).is_empty());
    }
}
