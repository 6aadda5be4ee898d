//! Tournament selection.
//!
//! Scores live in an array index-aligned with the population, so selection
//! works on indices and never touches fitness twice.
//!
//! # References
//!
//! - Blickle & Thiele (1996), "A Comparison of Selection Schemes used in
//!   Evolutionary Algorithms"

use super::types::FeatureMask;
use rand::seq::index;
use rand::Rng;

/// Tournament selection: draw `k` distinct indices, return the best.
///
/// Participants are sampled uniformly without replacement from
/// `0..scores.len()`. Among equal minima the first-drawn participant wins.
///
/// # Complexity
/// O(k) per selection
///
/// # Panics
/// Panics if `scores` is empty or `k` is not within `1..=scores.len()`.
pub fn tournament<R: Rng>(scores: &[f64], k: usize, rng: &mut R) -> usize {
    let n = scores.len();
    assert!(n > 0, "cannot select from empty population");
    assert!(
        (1..=n).contains(&k),
        "tournament size must be within 1..=population size"
    );

    let mut participants = index::sample(rng, n, k).into_iter();
    // k >= 1, so at least one participant exists.
    let mut best_idx = participants.next().unwrap_or(0);
    for idx in participants {
        if scores[idx] < scores[best_idx] {
            best_idx = idx;
        }
    }
    best_idx
}

/// Runs a tournament and returns the winning mask.
///
/// The result borrows from `population`; the caller copies it before
/// modifying.
pub fn select_parent<'a, R: Rng>(
    population: &'a [FeatureMask],
    scores: &[f64],
    k: usize,
    rng: &mut R,
) -> &'a FeatureMask {
    assert_eq!(
        population.len(),
        scores.len(),
        "scores must be index-aligned with the population"
    );
    &population[tournament(scores, k, rng)]
}
