//! Initial population.

use super::types::FeatureMask;
use rand::Rng;

/// Creates `population_size` random masks of length `feature_count`.
///
/// Each gene is an independent fair coin flip.
pub fn initialize_population<R: Rng>(
    population_size: usize,
    feature_count: usize,
    rng: &mut R,
) -> Vec<FeatureMask> {
    (0..population_size)
        .map(|_| random_mask(feature_count, rng))
        .collect()
}

/// One mask with independently uniform genes.
pub fn random_mask<R: Rng>(feature_count: usize, rng: &mut R) -> FeatureMask {
    FeatureMask::new((0..feature_count).map(|_| rng.random_bool(0.5)).collect())
}
