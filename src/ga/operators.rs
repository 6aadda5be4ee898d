//! Binary genetic operators for feature masks.
//!
//! Both operators return a new owned [`FeatureMask`]; parents, elites and
//! previously stored masks are never modified.
//!
//! # Crossover Operators
//!
//! - [`uniform_crossover`]: per-gene coin flip between two parents — O(F)
//!
//! # Mutation Operators
//!
//! - [`bit_flip_mutation`]: independent per-gene complement — O(F)
//!
//! # References
//!
//! - Syswerda (1989), "Uniform Crossover in Genetic Algorithms"

use super::types::FeatureMask;
use rand::Rng;

/// Uniform crossover producing one child.
///
/// With probability `1 - crossover_rate` the child is a copy of `parent1`
/// and `parent2` is ignored. Otherwise each gene is taken from `parent1` or
/// `parent2` with equal probability.
///
/// # Panics
/// Panics if parents have different lengths.
pub fn uniform_crossover<R: Rng>(
    parent1: &FeatureMask,
    parent2: &FeatureMask,
    crossover_rate: f64,
    rng: &mut R,
) -> FeatureMask {
    assert_eq!(
        parent1.len(),
        parent2.len(),
        "parents must have equal length"
    );

    if !rng.random_bool(crossover_rate) {
        return parent1.clone();
    }

    let genes = parent1
        .genes()
        .iter()
        .zip(parent2.genes())
        .map(|(&a, &b)| if rng.random_bool(0.5) { a } else { b })
        .collect();
    FeatureMask::new(genes)
}

/// Bit-flip mutation: complement each gene with probability `mutation_rate`.
///
/// Takes the mask by value, so callers holding a shared mask must clone it
/// first.
pub fn bit_flip_mutation<R: Rng>(
    mut mask: FeatureMask,
    mutation_rate: f64,
    rng: &mut R,
) -> FeatureMask {
    for gene in mask.genes_mut() {
        if rng.random_bool(mutation_rate) {
            *gene = !*gene;
        }
    }
    mask
}
