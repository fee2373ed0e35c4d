//! Temperature, truncated softmax and cumulative sampling

use crate::config::SelectionTuning;
use rand::Rng;

/// Smallest temperature used as a divisor
const MIN_TEMPERATURE: f64 = 1e-6;

/// Softmax temperature for a predictability trait
///
/// `(1 - clamp(p, 0, 1)) * span + floor`: 2.0 at p = 0, 0.5 at p = 1
pub fn temperature(predictability: f64, tuning: &SelectionTuning) -> f64 {
    let p = if predictability.is_finite() {
        predictability.clamp(0.0, 1.0)
    } else {
        0.0
    };
    (1.0 - p) * tuning.temperature_span + tuning.temperature_floor
}

/// Numerically stable softmax (max-subtracted)
///
/// Returns an empty vector for empty input.
pub fn softmax(weights: &[f64], temperature: f64) -> Vec<f64> {
    if weights.is_empty() {
        return Vec::new();
    }
    let t = temperature.max(MIN_TEMPERATURE);
    let max = weights.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let exps: Vec<f64> = weights.iter().map(|w| ((w - max) / t).exp()).collect();
    let sum: f64 = exps.iter().sum();
    if !(sum.is_finite() && sum > 0.0) {
        let uniform = 1.0 / weights.len() as f64;
        return vec![uniform; weights.len()];
    }
    exps.into_iter().map(|e| e / sum).collect()
}

/// Indices of the `k` largest weights, highest first (ties keep input order)
pub fn top_k_indices(weights: &[f64], k: usize) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..weights.len()).collect();
    indices.sort_by(|&a, &b| weights[b].total_cmp(&weights[a]));
    indices.truncate(k);
    indices
}

/// Draw an index from a probability vector
///
/// Rounding shortfalls land on the last entry. Panics-free for any input;
/// returns 0 for an empty vector.
pub fn sample_index(probabilities: &[f64], rng: &mut impl Rng) -> usize {
    if probabilities.is_empty() {
        return 0;
    }
    let draw: f64 = rng.gen();
    let mut cumulative = 0.0;
    for (i, p) in probabilities.iter().enumerate() {
        cumulative += p;
        if draw < cumulative {
            return i;
        }
    }
    probabilities.len() - 1
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_temperature_endpoints() {
        let tuning = SelectionTuning::default();
        assert!((temperature(0.0, &tuning) - 2.0).abs() < 1e-9);
        assert!((temperature(1.0, &tuning) - 0.5).abs() < 1e-9);
        assert!((temperature(0.5, &tuning) - 1.25).abs() < 1e-9);
        // Out of range is clamped
        assert!((temperature(1.4, &tuning) - 0.5).abs() < 1e-9);
        assert!((temperature(-3.0, &tuning) - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_softmax_prefers_heavier() {
        let p = softmax(&[10.0, 5.0, 1.0], 1.0);
        assert!(p[0] > p[1] && p[1] > p[2]);
        assert!((p.iter().sum::<f64>() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_softmax_equal_weights_uniform() {
        let p = softmax(&[3.0, 3.0, 3.0], 0.5);
        for v in p {
            assert!((v - 1.0 / 3.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_softmax_huge_weights_stable() {
        let p = softmax(&[1e300, 1e300 - 1.0, 0.0], 0.5);
        assert!(p.iter().all(|v| v.is_finite()));
        assert!((p.iter().sum::<f64>() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_top_k_stable_ties() {
        let idx = top_k_indices(&[1.0, 5.0, 5.0, 3.0, 0.5], 3);
        assert_eq!(idx, vec![1, 2, 3]);
        assert_eq!(top_k_indices(&[2.0], 3), vec![0]);
    }

    #[test]
    fn test_sample_index_rounding_falls_back_to_last() {
        let mut rng = StdRng::seed_from_u64(9);
        // Sums to less than 1: any draw past the sum lands on the last entry
        let probs = [0.0, 0.0, 0.0];
        assert_eq!(sample_index(&probs, &mut rng), 2);
        assert_eq!(sample_index(&[], &mut rng), 0);
    }

    #[test]
    fn test_sample_index_distribution() {
        let mut rng = StdRng::seed_from_u64(42);
        let probs = [0.7, 0.2, 0.1];
        let mut counts = [0usize; 3];
        for _ in 0..10_000 {
            counts[sample_index(&probs, &mut rng)] += 1;
        }
        assert!(counts[0] > 6_500 && counts[0] < 7_500);
        assert!(counts[2] > 700 && counts[2] < 1_300);
    }

    proptest! {
        #[test]
        fn prop_softmax_sums_to_one(
            weights in prop::collection::vec(0.0f64..500.0, 1..12),
            temp in 0.01f64..5.0,
        ) {
            let p = softmax(&weights, temp);
            prop_assert_eq!(p.len(), weights.len());
            prop_assert!((p.iter().sum::<f64>() - 1.0).abs() < 1e-3);
            prop_assert!(p.iter().all(|v| *v >= 0.0));
        }

        #[test]
        fn prop_temperature_non_increasing(a in 0.0f64..=1.0, b in 0.0f64..=1.0) {
            let tuning = SelectionTuning::default();
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(temperature(hi, &tuning) <= temperature(lo, &tuning));
        }
    }
}
