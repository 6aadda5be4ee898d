//! Fitness evaluation.
//!
//! [`FitnessEvaluator`] is the seam between the generic loop and the scoring
//! model. [`SurrogateEvaluator`] is the built-in model: a noisy stand-in for
//! classifier accuracy plus a sparsity penalty.

use super::types::{FeatureMask, MAX_PENALTY};
use crate::dataset::Dataset;
use rand::Rng;

/// Scores one feature mask against a dataset. Lower is better.
///
/// Evaluators may be stochastic: the runner calls `evaluate` exactly once
/// per individual per generation and never re-scores.
///
/// `Sync` is required because the runner may evaluate in parallel.
pub trait FitnessEvaluator: Sync {
    /// Returns the fitness of `mask`, drawing any noise from `rng`.
    ///
    /// A mask with no active genes should score [`MAX_PENALTY`].
    fn evaluate<R: Rng>(&self, mask: &FeatureMask, dataset: &Dataset, rng: &mut R) -> f64;
}

/// Surrogate model of prediction error with a feature-count penalty.
///
/// For `k` active features out of `F`:
///
/// ```text
/// accuracy = base_accuracy + U(-noise_amplitude, noise_amplitude) - k * per_feature_cost
/// fitness  = (1 - accuracy) + (k / F) * penalty_weight
/// ```
///
/// A mask with `k == 0` scores [`MAX_PENALTY`] without consuming randomness.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SurrogateEvaluator {
    /// Accuracy attributed to a subset before noise and per-feature cost.
    pub base_accuracy: f64,

    /// Half-width of the uniform accuracy noise. `0.0` disables noise.
    pub noise_amplitude: f64,

    /// Accuracy lost per active feature.
    pub per_feature_cost: f64,

    /// Weight of the fraction of features used.
    pub penalty_weight: f64,
}

impl Default for SurrogateEvaluator {
    fn default() -> Self {
        Self {
            base_accuracy: 0.90,
            noise_amplitude: 0.05,
            per_feature_cost: 0.001,
            penalty_weight: 0.2,
        }
    }
}

impl SurrogateEvaluator {
    /// Deterministic variant of the default model.
    pub fn without_noise() -> Self {
        Self {
            noise_amplitude: 0.0,
            ..Self::default()
        }
    }

    /// Sets the noise amplitude.
    pub fn with_noise_amplitude(mut self, amplitude: f64) -> Self {
        self.noise_amplitude = amplitude.abs();
        self
    }
}

impl FitnessEvaluator for SurrogateEvaluator {
    fn evaluate<R: Rng>(&self, mask: &FeatureMask, dataset: &Dataset, rng: &mut R) -> f64 {
        let active = mask.active_count();
        if active == 0 {
            return MAX_PENALTY;
        }

        let noise = if self.noise_amplitude > 0.0 {
            rng.random_range(-self.noise_amplitude..self.noise_amplitude)
        } else {
            0.0
        };
        let accuracy = self.base_accuracy + noise - active as f64 * self.per_feature_cost;

        let proportion = active as f64 / dataset.feature_count() as f64;
        let penalty = proportion * self.penalty_weight;

        (1.0 - accuracy) + penalty
    }
}
