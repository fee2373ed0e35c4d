//! Tuning constants for scoring, selection and adaptation
//!
//! The scoring bonuses are hand-tuned; battle balance depends on their
//! relative ordering, so the defaults below must stay in sync with the
//! named constants.

use super::ConfigError;
use serde::{Deserialize, Serialize};

// === Base scores ===
pub const ATTACK_SCALE: f64 = 8.0;
pub const ATTACK_JITTER: f64 = 2.0;
pub const DEFENSIVE_LOW_HEALTH_THRESHOLD: f64 = 25.0;
pub const DEFENSIVE_LOW_HEALTH_SCORE: f64 = 12.0;
pub const OVER_DEFENDED_THRESHOLD: f64 = 100.0;
pub const OVER_DEFENDED_SCORE: f64 = 2.0;
pub const DEFENSIVE_DEFAULT_SCORE: f64 = 6.0;
pub const OTHER_BASE_SCORE: f64 = 5.0;
pub const OTHER_JITTER: f64 = 3.0;

// === Meta-state bonuses ===
pub const PATTERN_BREAK_BONUS: f64 = 15.0;
pub const ESCALATION_BONUS: f64 = 20.0;
pub const FINISHER_BONUS: f64 = 25.0;
pub const DESPERATION_BONUS: f64 = 18.0;
pub const TIMEOUT_BONUS: f64 = 22.0;
pub const STALEMATE_BONUS: f64 = 16.0;
pub const BOREDOM_BONUS: f64 = 12.0;
pub const FRUSTRATION_BONUS: f64 = 14.0;
pub const TIE_BREAK_JITTER: f64 = 1.0;

// === Memory-informed terms ===
pub const SIGNATURE_BIAS_SCALE: f64 = 10.0;
pub const LEARNED_EFFECTIVENESS_SCALE: f64 = 2.0;
pub const ANTI_REPEAT_PENALTY: f64 = 8.0;
pub const TURTLE_PUNISH_SCALE: f64 = 10.0;

// === Personality-informed terms (centered on a neutral 0.5 trait) ===
pub const NEUTRAL_TRAIT: f64 = 0.5;
pub const AGGRESSION_SCALE: f64 = 10.0;
pub const DEFENSIVE_BIAS_SCALE: f64 = 10.0;
pub const PATIENCE_SCALE: f64 = 6.0;
pub const CREATIVITY_SCALE: f64 = 8.0;
pub const RISK_TOLERANCE_SCALE: f64 = 10.0;
pub const RISKY_POWER_THRESHOLD: f64 = 60.0;

/// Upper bound for every jitter half-width
pub const MAX_JITTER: f64 = 1.0e6;

// === Selection ===
pub const MIN_WEIGHT: f64 = 0.1;
pub const BORED_POWER_THRESHOLD: f64 = 40.0;
pub const BORED_MULTIPLIER: f64 = 1.5;
pub const DESPERATE_POWER_THRESHOLD: f64 = 60.0;
pub const DESPERATE_MULTIPLIER: f64 = 2.0;
pub const FINISHING_POWER_THRESHOLD: f64 = 60.0;
pub const FINISHING_MULTIPLIER: f64 = 2.2;
pub const FRUSTRATED_HIGH_DAMAGE_MULTIPLIER: f64 = 1.8;
pub const STUCK_LOOP_POWER_THRESHOLD: f64 = 40.0;
pub const STUCK_LOOP_MULTIPLIER: f64 = 1.6;
pub const DETERMINISTIC_THRESHOLD: f64 = 0.95;
pub const TEMPERATURE_SPAN: f64 = 1.5;
pub const TEMPERATURE_FLOOR: f64 = 0.5;
pub const SOFTMAX_TOP_K: usize = 3;

// === Adaptation ===
pub const WEAK_MOVE_COOLDOWN: u32 = 2;
pub const REPOSITION_COOLDOWN: u32 = 2;
pub const TURTLING_THRESHOLD: u32 = 2;
pub const CREATIVITY_DRIFT: f64 = 0.15;
pub const RISK_TOLERANCE_DRIFT: f64 = 0.1;
pub const AGGRESSION_DRIFT: f64 = 0.1;

/// All tunables, loadable from TOML
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TacticsTuning {
    pub scoring: ScoringWeights,
    pub selection: SelectionTuning,
    pub adaptation: AdaptationTuning,
}

impl TacticsTuning {
    /// Reject values that would break the pipeline's invariants
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.scoring.validate()?;
        self.selection.validate()?;
        self.adaptation.validate()
    }
}

fn ensure_non_negative(name: &str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(format!(
            "{} must be a finite non-negative number, got {}",
            name, value
        )))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringWeights {
    /// Attack score = scale * max(1, power - defense) / opponent health
    pub attack_scale: f64,
    pub attack_jitter: f64,
    pub defensive_low_health_threshold: f64,
    pub defensive_low_health_score: f64,
    pub over_defended_threshold: f64,
    pub over_defended_score: f64,
    pub defensive_default_score: f64,
    pub other_base_score: f64,
    pub other_jitter: f64,

    pub pattern_break_bonus: f64,
    pub escalation_bonus: f64,
    pub finisher_bonus: f64,
    pub desperation_bonus: f64,
    pub timeout_bonus: f64,
    pub stalemate_bonus: f64,
    pub boredom_bonus: f64,
    pub frustration_bonus: f64,
    /// Half-width of the final symmetric jitter
    pub tie_break_jitter: f64,

    pub signature_bias_scale: f64,
    pub learned_effectiveness_scale: f64,
    pub anti_repeat_penalty: f64,
    pub turtle_punish_scale: f64,

    pub aggression_scale: f64,
    pub defensive_bias_scale: f64,
    pub patience_scale: f64,
    pub creativity_scale: f64,
    pub risk_tolerance_scale: f64,
    /// Base power at or above which a move counts as risky
    pub risky_power_threshold: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        ScoringWeights {
            attack_scale: ATTACK_SCALE,
            attack_jitter: ATTACK_JITTER,
            defensive_low_health_threshold: DEFENSIVE_LOW_HEALTH_THRESHOLD,
            defensive_low_health_score: DEFENSIVE_LOW_HEALTH_SCORE,
            over_defended_threshold: OVER_DEFENDED_THRESHOLD,
            over_defended_score: OVER_DEFENDED_SCORE,
            defensive_default_score: DEFENSIVE_DEFAULT_SCORE,
            other_base_score: OTHER_BASE_SCORE,
            other_jitter: OTHER_JITTER,
            pattern_break_bonus: PATTERN_BREAK_BONUS,
            escalation_bonus: ESCALATION_BONUS,
            finisher_bonus: FINISHER_BONUS,
            desperation_bonus: DESPERATION_BONUS,
            timeout_bonus: TIMEOUT_BONUS,
            stalemate_bonus: STALEMATE_BONUS,
            boredom_bonus: BOREDOM_BONUS,
            frustration_bonus: FRUSTRATION_BONUS,
            tie_break_jitter: TIE_BREAK_JITTER,
            signature_bias_scale: SIGNATURE_BIAS_SCALE,
            learned_effectiveness_scale: LEARNED_EFFECTIVENESS_SCALE,
            anti_repeat_penalty: ANTI_REPEAT_PENALTY,
            turtle_punish_scale: TURTLE_PUNISH_SCALE,
            aggression_scale: AGGRESSION_SCALE,
            defensive_bias_scale: DEFENSIVE_BIAS_SCALE,
            patience_scale: PATIENCE_SCALE,
            creativity_scale: CREATIVITY_SCALE,
            risk_tolerance_scale: RISK_TOLERANCE_SCALE,
            risky_power_threshold: RISKY_POWER_THRESHOLD,
        }
    }
}

impl ScoringWeights {
    /// Same weights with every jitter term disabled (for reproducible scoring)
    pub fn without_jitter(&self) -> Self {
        ScoringWeights {
            attack_jitter: 0.0,
            other_jitter: 0.0,
            tie_break_jitter: 0.0,
            ..self.clone()
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("scoring.attack_jitter", self.attack_jitter),
            ("scoring.other_jitter", self.other_jitter),
            ("scoring.tie_break_jitter", self.tie_break_jitter),
        ] {
            ensure_non_negative(name, value)?;
            if value > MAX_JITTER {
                return Err(ConfigError::ValidationError(format!(
                    "{} must be at most {}, got {}",
                    name, MAX_JITTER, value
                )));
            }
        }
        for (name, value) in [
            ("scoring.attack_scale", self.attack_scale),
            ("scoring.aggression_scale", self.aggression_scale),
            ("scoring.defensive_bias_scale", self.defensive_bias_scale),
            ("scoring.patience_scale", self.patience_scale),
            ("scoring.creativity_scale", self.creativity_scale),
            ("scoring.risk_tolerance_scale", self.risk_tolerance_scale),
            ("scoring.risky_power_threshold", self.risky_power_threshold),
        ] {
            ensure_non_negative(name, value)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectionTuning {
    /// Floor applied to every score before multipliers
    pub min_weight: f64,
    pub bored_power_threshold: f64,
    pub bored_multiplier: f64,
    pub desperate_power_threshold: f64,
    pub desperate_multiplier: f64,
    pub finishing_power_threshold: f64,
    pub finishing_multiplier: f64,
    pub frustrated_high_damage_multiplier: f64,
    pub stuck_loop_power_threshold: f64,
    pub stuck_loop_multiplier: f64,
    /// Predictability at or above which selection is an argmax
    pub deterministic_threshold: f64,
    pub temperature_span: f64,
    pub temperature_floor: f64,
    /// Softmax only considers this many top-weighted candidates
    pub top_k: usize,
}

impl Default for SelectionTuning {
    fn default() -> Self {
        SelectionTuning {
            min_weight: MIN_WEIGHT,
            bored_power_threshold: BORED_POWER_THRESHOLD,
            bored_multiplier: BORED_MULTIPLIER,
            desperate_power_threshold: DESPERATE_POWER_THRESHOLD,
            desperate_multiplier: DESPERATE_MULTIPLIER,
            finishing_power_threshold: FINISHING_POWER_THRESHOLD,
            finishing_multiplier: FINISHING_MULTIPLIER,
            frustrated_high_damage_multiplier: FRUSTRATED_HIGH_DAMAGE_MULTIPLIER,
            stuck_loop_power_threshold: STUCK_LOOP_POWER_THRESHOLD,
            stuck_loop_multiplier: STUCK_LOOP_MULTIPLIER,
            deterministic_threshold: DETERMINISTIC_THRESHOLD,
            temperature_span: TEMPERATURE_SPAN,
            temperature_floor: TEMPERATURE_FLOOR,
            top_k: SOFTMAX_TOP_K,
        }
    }
}

impl SelectionTuning {
    fn validate(&self) -> Result<(), ConfigError> {
        if !(self.min_weight.is_finite() && self.min_weight > 0.0) {
            return Err(ConfigError::ValidationError(format!(
                "selection.min_weight must be positive, got {}",
                self.min_weight
            )));
        }
        if !(self.temperature_floor.is_finite() && self.temperature_floor > 0.0) {
            return Err(ConfigError::ValidationError(format!(
                "selection.temperature_floor must be positive, got {}",
                self.temperature_floor
            )));
        }
        if self.top_k == 0 {
            return Err(ConfigError::ValidationError(
                "selection.top_k must be at least 1".to_string(),
            ));
        }
        ensure_non_negative("selection.temperature_span", self.temperature_span)?;
        ensure_non_negative("selection.deterministic_threshold", self.deterministic_threshold)?;
        for (name, value) in [
            ("selection.bored_multiplier", self.bored_multiplier),
            ("selection.desperate_multiplier", self.desperate_multiplier),
            ("selection.finishing_multiplier", self.finishing_multiplier),
            ("selection.frustrated_high_damage_multiplier", self.frustrated_high_damage_multiplier),
            ("selection.stuck_loop_multiplier", self.stuck_loop_multiplier),
        ] {
            ensure_non_negative(name, value)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdaptationTuning {
    pub weak_move_cooldown: u32,
    pub reposition_cooldown: u32,
    /// Consecutive defensive turns before the opponent counts as turtling
    pub turtling_threshold: u32,
    pub creativity_drift: f64,
    pub risk_tolerance_drift: f64,
    pub aggression_drift: f64,
}

impl Default for AdaptationTuning {
    fn default() -> Self {
        AdaptationTuning {
            weak_move_cooldown: WEAK_MOVE_COOLDOWN,
            reposition_cooldown: REPOSITION_COOLDOWN,
            turtling_threshold: TURTLING_THRESHOLD,
            creativity_drift: CREATIVITY_DRIFT,
            risk_tolerance_drift: RISK_TOLERANCE_DRIFT,
            aggression_drift: AGGRESSION_DRIFT,
        }
    }
}

impl AdaptationTuning {
    fn validate(&self) -> Result<(), ConfigError> {
        ensure_non_negative("adaptation.creativity_drift", self.creativity_drift)?;
        ensure_non_negative("adaptation.risk_tolerance_drift", self.risk_tolerance_drift)?;
        ensure_non_negative("adaptation.aggression_drift", self.aggression_drift)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_tuning_matches_constants() {
        let tuning = TacticsTuning::default();
        assert!((tuning.scoring.finisher_bonus - 25.0).abs() < f64::EPSILON);
        assert!((tuning.scoring.pattern_break_bonus - 15.0).abs() < f64::EPSILON);
        assert!((tuning.selection.deterministic_threshold - 0.95).abs() < f64::EPSILON);
        assert_eq!(tuning.selection.top_k, 3);
        assert_eq!(tuning.adaptation.weak_move_cooldown, 2);
        assert!(tuning.validate().is_ok());
    }

    #[test]
    fn test_validation_bounds_jitter() {
        let mut tuning = TacticsTuning::default();
        tuning.scoring.tie_break_jitter = 1e308;
        assert!(matches!(tuning.validate(), Err(ConfigError::ValidationError(_))));

        tuning.scoring.tie_break_jitter = MAX_JITTER;
        assert!(tuning.validate().is_ok());

        tuning.scoring.attack_jitter = MAX_JITTER * 2.0;
        assert!(tuning.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_negative_trait_scale() {
        let mut tuning = TacticsTuning::default();
        tuning.scoring.creativity_scale = -1.0;
        assert!(tuning.validate().is_err());
    }

    #[test]
    fn test_bonus_ordering_preserved() {
        let s = ScoringWeights::default();
        let ordered = [
            s.finisher_bonus,
            s.timeout_bonus,
            s.escalation_bonus,
            s.desperation_bonus,
            s.stalemate_bonus,
            s.pattern_break_bonus,
            s.frustration_bonus,
            s.boredom_bonus,
        ];
        assert!(ordered.windows(2).all(|w| w[0] > w[1]));
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let toml = r#"
[scoring]
finisher_bonus = 30.0

[selection]
top_k = 2
"#;

        let tuning: TacticsTuning = toml::from_str(toml).unwrap();
        assert!((tuning.scoring.finisher_bonus - 30.0).abs() < f64::EPSILON);
        assert!((tuning.scoring.escalation_bonus - 20.0).abs() < f64::EPSILON);
        assert_eq!(tuning.selection.top_k, 2);
        assert_eq!(tuning.adaptation, AdaptationTuning::default());
    }

    #[test]
    fn test_validation_rejects_zero_top_k() {
        let mut tuning = TacticsTuning::default();
        tuning.selection.top_k = 0;
        assert!(matches!(tuning.validate(), Err(ConfigError::ValidationError(_))));
    }

    #[test]
    fn test_validation_rejects_negative_jitter() {
        let mut tuning = TacticsTuning::default();
        tuning.scoring.tie_break_jitter = -1.0;
        assert!(tuning.validate().is_err());
    }

    #[test]
    fn test_without_jitter() {
        let s = ScoringWeights::default().without_jitter();
        assert_eq!(s.attack_jitter, 0.0);
        assert_eq!(s.other_jitter, 0.0);
        assert_eq!(s.tie_break_jitter, 0.0);
        assert_eq!(s.finisher_bonus, FINISHER_BONUS);
    }
}
