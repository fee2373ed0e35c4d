//! PersonalityProfile - Long-lived behavioral traits of a combatant

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Upper bound for explicit trait adjustments
pub const TRAIT_CEILING: f64 = 1.5;

/// Named personality traits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PersonalityTrait {
    Aggression,
    Patience,
    RiskTolerance,
    Opportunism,
    Creativity,
    DefensiveBias,
    AntiRepeater,
    Predictability,
}

impl PersonalityTrait {
    /// Get all traits
    pub fn all() -> &'static [PersonalityTrait] {
        &[
            PersonalityTrait::Aggression,
            PersonalityTrait::Patience,
            PersonalityTrait::RiskTolerance,
            PersonalityTrait::Opportunism,
            PersonalityTrait::Creativity,
            PersonalityTrait::DefensiveBias,
            PersonalityTrait::AntiRepeater,
            PersonalityTrait::Predictability,
        ]
    }
}

/// Trait profile of a combatant
///
/// Traits conventionally sit in `[0, 1]`. Outcome-driven drift clamps to that
/// range; explicit adjustments may push up to [`TRAIT_CEILING`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersonalityProfile {
    pub aggression: f64,
    pub patience: f64,
    pub risk_tolerance: f64,
    pub opportunism: f64,
    pub creativity: f64,
    pub defensive_bias: f64,
    pub anti_repeater: f64,
    /// 0 = fully random selection, >= 0.95 = deterministic argmax
    pub predictability: f64,
    /// Per-move preference added to the move's score
    pub signature_move_bias: HashMap<String, f64>,
}

impl Default for PersonalityProfile {
    fn default() -> Self {
        PersonalityProfile {
            aggression: 0.5,
            patience: 0.5,
            risk_tolerance: 0.5,
            opportunism: 0.5,
            creativity: 0.5,
            defensive_bias: 0.5,
            anti_repeater: 0.5,
            predictability: 0.5,
            signature_move_bias: HashMap::new(),
        }
    }
}

impl PersonalityProfile {
    /// Create a balanced profile (every trait 0.5)
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a trait value
    pub fn get(&self, t: PersonalityTrait) -> f64 {
        match t {
            PersonalityTrait::Aggression => self.aggression,
            PersonalityTrait::Patience => self.patience,
            PersonalityTrait::RiskTolerance => self.risk_tolerance,
            PersonalityTrait::Opportunism => self.opportunism,
            PersonalityTrait::Creativity => self.creativity,
            PersonalityTrait::DefensiveBias => self.defensive_bias,
            PersonalityTrait::AntiRepeater => self.anti_repeater,
            PersonalityTrait::Predictability => self.predictability,
        }
    }

    fn slot(&mut self, t: PersonalityTrait) -> &mut f64 {
        match t {
            PersonalityTrait::Aggression => &mut self.aggression,
            PersonalityTrait::Patience => &mut self.patience,
            PersonalityTrait::RiskTolerance => &mut self.risk_tolerance,
            PersonalityTrait::Opportunism => &mut self.opportunism,
            PersonalityTrait::Creativity => &mut self.creativity,
            PersonalityTrait::DefensiveBias => &mut self.defensive_bias,
            PersonalityTrait::AntiRepeater => &mut self.anti_repeater,
            PersonalityTrait::Predictability => &mut self.predictability,
        }
    }

    /// Add `delta` to a trait, clamping into `[0, max]`. Returns the applied change.
    pub fn nudge(&mut self, t: PersonalityTrait, delta: f64, max: f64) -> f64 {
        let slot = self.slot(t);
        let before = *slot;
        let after = if (before + delta).is_finite() {
            (before + delta).clamp(0.0, max)
        } else {
            before
        };
        *slot = after;
        after - before
    }

    /// Explicit adjustment, clamped to `[0, TRAIT_CEILING]`
    pub fn adjust_trait(&mut self, t: PersonalityTrait, delta: f64) -> f64 {
        self.nudge(t, delta, TRAIT_CEILING)
    }

    /// Builder: set a trait (clamped to `[0, TRAIT_CEILING]`)
    pub fn with_trait(mut self, t: PersonalityTrait, value: f64) -> Self {
        let current = self.get(t);
        self.adjust_trait(t, value - current);
        self
    }

    /// Builder: add a signature move bias
    pub fn with_signature(mut self, move_id: impl Into<String>, bias: f64) -> Self {
        self.signature_move_bias.insert(move_id.into(), bias);
        self
    }

    /// Bias for a move (0 if none)
    pub fn signature_bias(&self, move_id: &str) -> f64 {
        self.signature_move_bias.get(move_id).copied().unwrap_or(0.0)
    }

    /// Clamp every trait into `[0, TRAIT_CEILING]` (used after deserializing)
    pub fn sanitize(&mut self) {
        for &t in PersonalityTrait::all() {
            let slot = self.slot(t);
            *slot = if slot.is_finite() { slot.clamp(0.0, TRAIT_CEILING) } else { 0.5 };
        }
        self.signature_move_bias.retain(|_, v| v.is_finite());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_balanced() {
        let p = PersonalityProfile::new();
        for &t in PersonalityTrait::all() {
            assert!((p.get(t) - 0.5).abs() < f64::EPSILON);
        }
    }

    #[test]
    fn test_nudge_clamps() {
        let mut p = PersonalityProfile::new();
        let applied = p.nudge(PersonalityTrait::Creativity, 0.8, 1.0);
        assert!((applied - 0.5).abs() < 1e-9);
        assert!((p.creativity - 1.0).abs() < f64::EPSILON);

        let applied = p.nudge(PersonalityTrait::Patience, -2.0, 1.0);
        assert!((applied + 0.5).abs() < 1e-9);
        assert_eq!(p.patience, 0.0);
    }

    #[test]
    fn test_adjust_trait_allows_ceiling() {
        let mut p = PersonalityProfile::new();
        p.adjust_trait(PersonalityTrait::Aggression, 0.8);
        assert!((p.aggression - 1.3).abs() < 1e-9);
        p.adjust_trait(PersonalityTrait::Aggression, 0.8);
        assert!((p.aggression - TRAIT_CEILING).abs() < f64::EPSILON);
    }

    #[test]
    fn test_nan_delta_ignored() {
        let mut p = PersonalityProfile::new();
        p.nudge(PersonalityTrait::Opportunism, f64::NAN, 1.0);
        assert!((p.opportunism - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_signature_bias() {
        let p = PersonalityProfile::new().with_signature("heavy_slam", 0.4);
        assert!((p.signature_bias("heavy_slam") - 0.4).abs() < f64::EPSILON);
        assert_eq!(p.signature_bias("jab"), 0.0);
    }

    #[test]
    fn test_sanitize() {
        let mut p = PersonalityProfile::new();
        p.predictability = 7.0;
        p.patience = -1.0;
        p.creativity = f64::NAN;
        p.sanitize();
        assert_eq!(p.predictability, TRAIT_CEILING);
        assert_eq!(p.patience, 0.0);
        assert!((p.creativity - 0.5).abs() < f64::EPSILON);
    }
}
