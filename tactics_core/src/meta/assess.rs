//! Meta-state assessor - per-turn tactical/emotional snapshot

use super::pattern::detect_patterns;
use crate::combatant::Combatant;
use serde::{Deserialize, Serialize};

/// Ephemeral snapshot recomputed on every decision, never persisted
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MetaState {
    pub bored: bool,
    pub frustrated: bool,
    pub desperate: bool,
    pub stuck_loop: bool,
    pub escalation_needed: bool,
    pub timeout_pressure: bool,
    pub stalemate: bool,
    pub finishing_time: bool,
    /// 0..=10
    pub boredom_level: u32,
    /// 0..=10
    pub frustration_level: u32,
}

/// Derive the meta-state for `me` facing `opponent` on `turn`
pub fn assess(me: &Combatant, opponent: &Combatant, turn: u32) -> MetaState {
    let boredom_level = (turn / 3).min(10);
    let frustration_level = (turn / 5).min(10);
    let names = me.move_names();
    let stuck_loop = detect_patterns(names.as_slice()).stuck_loop;

    let my_health = me.stats.health;
    let their_health = opponent.stats.health;

    let desperate = my_health < 20.0 || their_health < 20.0;

    MetaState {
        bored: boredom_level > 3 || stuck_loop,
        frustrated: frustration_level > 2 || (turn > 20 && my_health < 50.0),
        desperate,
        stuck_loop,
        escalation_needed: turn > 35 || desperate || stuck_loop,
        timeout_pressure: turn > 45,
        stalemate: turn > 20 && (my_health - their_health).abs() < 10.0,
        finishing_time: their_health < 30.0 && me.stats.resource >= 3,
        boredom_level,
        frustration_level,
    }
}

impl MetaState {
    /// Single urgency ordinal, highest-priority flag wins
    pub fn urgency(&self) -> u8 {
        if self.desperate {
            10
        } else if self.finishing_time {
            9
        } else if self.timeout_pressure {
            8
        } else if self.escalation_needed {
            7
        } else if self.frustrated {
            6
        } else if self.stalemate {
            5
        } else if self.bored {
            4
        } else {
            2
        }
    }

    pub fn should_be_aggressive(&self) -> bool {
        self.desperate
            || self.finishing_time
            || self.timeout_pressure
            || self.escalation_needed
            || self.frustrated
    }

    pub fn should_prioritize_variety(&self) -> bool {
        self.bored || self.stuck_loop || self.stalemate
    }

    /// Names of the set flags, for structured logging
    pub fn active_flags(&self) -> Vec<&'static str> {
        [
            (self.bored, "bored"),
            (self.frustrated, "frustrated"),
            (self.desperate, "desperate"),
            (self.stuck_loop, "stuck_loop"),
            (self.escalation_needed, "escalation_needed"),
            (self.timeout_pressure, "timeout_pressure"),
            (self.stalemate, "stalemate"),
            (self.finishing_time, "finishing_time"),
        ]
        .into_iter()
        .filter_map(|(set, name)| set.then_some(name))
        .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::candidate::Candidate;
    use crate::combatant::ActionOutcome;
    use crate::types::MoveCategory;

    fn pair(my_health: f64, their_health: f64) -> (Combatant, Combatant) {
        (
            Combatant::new("me").with_health(my_health),
            Combatant::new("them").with_health(their_health),
        )
    }

    #[test]
    fn test_neutral_early_turn() {
        let (me, them) = pair(100.0, 80.0);
        let meta = assess(&me, &them, 1);
        assert_eq!(meta.active_flags(), Vec::<&str>::new());
        assert_eq!(meta.urgency(), 2);
        assert!(!meta.should_be_aggressive());
        assert!(!meta.should_prioritize_variety());
    }

    #[test]
    fn test_escalation_boundary() {
        let (me, them) = pair(100.0, 60.0);
        assert!(assess(&me, &them, 36).escalation_needed);
        assert!(!assess(&me, &them, 34).escalation_needed);
        assert!(!assess(&me, &them, 35).escalation_needed);
    }

    #[test]
    fn test_levels_saturate() {
        let (me, them) = pair(100.0, 60.0);
        let meta = assess(&me, &them, 100);
        assert_eq!(meta.boredom_level, 10);
        assert_eq!(meta.frustration_level, 10);
        assert!(meta.timeout_pressure);
    }

    #[test]
    fn test_boredom_and_frustration_thresholds() {
        let (me, them) = pair(100.0, 60.0);
        // turn 12: boredom 4, frustration 2
        let meta = assess(&me, &them, 12);
        assert!(meta.bored);
        assert!(!meta.frustrated);
        // turn 15: frustration 3
        assert!(assess(&me, &them, 15).frustrated);
        // turn 11: boredom 3
        assert!(!assess(&me, &them, 11).bored);
    }

    #[test]
    fn test_desperate_either_side() {
        let (me, them) = pair(15.0, 90.0);
        assert!(assess(&me, &them, 1).desperate);
        let (me, them) = pair(90.0, 15.0);
        let meta = assess(&me, &them, 1);
        assert!(meta.desperate);
        assert!(meta.escalation_needed);
        assert_eq!(meta.urgency(), 10);
    }

    #[test]
    fn test_stalemate() {
        let (me, them) = pair(55.0, 60.0);
        assert!(assess(&me, &them, 21).stalemate);
        assert!(!assess(&me, &them, 20).stalemate);
        let (me, them) = pair(40.0, 60.0);
        assert!(!assess(&me, &them, 21).stalemate);
    }

    #[test]
    fn test_finishing_time_needs_resource() {
        let (mut me, them) = pair(80.0, 25.0);
        me.stats.resource = 2;
        assert!(!assess(&me, &them, 1).finishing_time);
        me.stats.resource = 3;
        let meta = assess(&me, &them, 1);
        assert!(meta.finishing_time);
        assert_eq!(meta.urgency(), 9);
    }

    #[test]
    fn test_stuck_loop_from_history() {
        let (mut me, them) = pair(100.0, 80.0);
        for id in ["jab", "guard_up", "jab", "guard_up"] {
            me.record(&ActionOutcome::new(
                Candidate::new(id, id, MoveCategory::Attack, 30.0),
                None,
                0.0,
            ));
        }
        let meta = assess(&me, &them, 4);
        assert!(meta.stuck_loop);
        assert!(meta.bored);
        assert!(meta.escalation_needed);
        assert!(meta.should_prioritize_variety());
    }

    #[test]
    fn test_urgency_priority_order() {
        let mut meta = MetaState {
            bored: true,
            ..Default::default()
        };
        assert_eq!(meta.urgency(), 4);
        assert!(!meta.should_be_aggressive());
        meta.stalemate = true;
        assert_eq!(meta.urgency(), 5);
        meta.frustrated = true;
        assert_eq!(meta.urgency(), 6);
        assert!(meta.should_be_aggressive());
        meta.escalation_needed = true;
        assert_eq!(meta.urgency(), 7);
        meta.timeout_pressure = true;
        assert_eq!(meta.urgency(), 8);
        meta.finishing_time = true;
        assert_eq!(meta.urgency(), 9);
        meta.desperate = true;
        assert_eq!(meta.urgency(), 10);
    }

    #[test]
    fn test_should_be_aggressive_from_assess() {
        let (me, them) = pair(100.0, 60.0);
        assert!(!assess(&me, &them, 10).should_be_aggressive());
        // late turn
        assert!(assess(&me, &them, 36).should_be_aggressive());
        // opponent nearly down
        let (me, them) = pair(100.0, 15.0);
        assert!(assess(&me, &them, 1).should_be_aggressive());
    }
}
