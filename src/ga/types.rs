//! Core data types: the feature mask and the best-so-far record.

use std::fmt;

/// Fitness assigned to a mask with no active features.
///
/// Selecting zero features cannot be scored, so such a mask is never
/// preferred over any mask with a finite score.
pub const MAX_PENALTY: f64 = f64::INFINITY;

/// A candidate feature subset: one inclusion gene per feature.
///
/// The length is fixed at construction. Every operator in this crate
/// produces a new owned mask and never shares storage with its inputs.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FeatureMask {
    genes: Vec<bool>,
}

impl FeatureMask {
    /// Creates a mask from explicit genes.
    pub fn new(genes: Vec<bool>) -> Self {
        Self { genes }
    }

    /// All-zero mask of the given length.
    pub fn empty(len: usize) -> Self {
        Self {
            genes: vec![false; len],
        }
    }

    /// All-one mask of the given length.
    pub fn full(len: usize) -> Self {
        Self {
            genes: vec![true; len],
        }
    }

    /// Builds a mask from `0`/`1` values; any non-zero value counts as `1`.
    pub fn from_bits(bits: &[u8]) -> Self {
        Self {
            genes: bits.iter().map(|&b| b != 0).collect(),
        }
    }

    /// Number of genes (F).
    pub fn len(&self) -> usize {
        self.genes.len()
    }

    /// Returns `true` if the mask has no genes at all.
    pub fn is_empty(&self) -> bool {
        self.genes.is_empty()
    }

    /// The genes as a slice.
    pub fn genes(&self) -> &[bool] {
        &self.genes
    }

    /// Mutable access for in-place operators working on an owned copy.
    pub(crate) fn genes_mut(&mut self) -> &mut [bool] {
        &mut self.genes
    }

    /// Gene at position `i`.
    pub fn get(&self, i: usize) -> bool {
        self.genes[i]
    }

    /// Count of active (selected) features.
    pub fn active_count(&self) -> usize {
        self.genes.iter().filter(|&&g| g).count()
    }

    /// Indices of the active features, ascending.
    pub fn active_indices(&self) -> Vec<usize> {
        self.genes
            .iter()
            .enumerate()
            .filter_map(|(i, &g)| g.then_some(i))
            .collect()
    }

    /// The genes as `0`/`1` values.
    pub fn to_bits(&self) -> Vec<u8> {
        self.genes.iter().map(|&g| u8::from(g)).collect()
    }

    /// Bitwise complement.
    pub fn complement(&self) -> Self {
        Self {
            genes: self.genes.iter().map(|&g| !g).collect(),
        }
    }
}

impl fmt::Display for FeatureMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &g in &self.genes {
            f.write_str(if g { "1" } else { "0" })?;
        }
        Ok(())
    }
}

/// The best mask seen so far in a run, with the score it was given.
///
/// Holds an independent copy of the mask. Starts as an all-zero mask scored
/// [`MAX_PENALTY`], so a run whose every individual is degenerate still
/// returns a well-formed (degenerate) result.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BestSoFar {
    /// Best mask found.
    pub mask: FeatureMask,

    /// Score the mask received in the generation it was found.
    pub fitness: f64,
}

impl BestSoFar {
    /// Initial record for masks of length `feature_count`.
    pub fn new(feature_count: usize) -> Self {
        Self {
            mask: FeatureMask::empty(feature_count),
            fitness: MAX_PENALTY,
        }
    }

    /// Replaces the record if `fitness` is strictly better.
    ///
    /// Returns `true` when the record changed.
    pub fn offer(&mut self, mask: &FeatureMask, fitness: f64) -> bool {
        if fitness < self.fitness {
            self.mask = mask.clone();
            self.fitness = fitness;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_active_count_and_indices() {
        let m = FeatureMask::from_bits(&[1, 0, 1, 1, 0]);
        assert_eq!(m.len(), 5);
        assert_eq!(m.active_count(), 3);
        assert_eq!(m.active_indices(), vec![0, 2, 3]);
        assert_eq!(m.to_bits(), vec![1, 0, 1, 1, 0]);
    }

    #[test]
    fn test_complement() {
        let m = FeatureMask::from_bits(&[1, 0, 0]);
        assert_eq!(m.complement().to_bits(), vec![0, 1, 1]);
        assert_eq!(m.complement().complement(), m);
    }

    #[test]
    fn test_display() {
        let m = FeatureMask::from_bits(&[0, 1, 1, 0]);
        assert_eq!(m.to_string(), "0110");
    }

    #[test]
    fn test_empty_and_full() {
        assert_eq!(FeatureMask::empty(4).active_count(), 0);
        assert_eq!(FeatureMask::full(4).active_count(), 4);
        assert!(FeatureMask::new(vec![]).is_empty());
    }

    #[test]
    fn test_best_so_far_strict_improvement() {
        let mut best = BestSoFar::new(3);
        assert_eq!(best.fitness, MAX_PENALTY);
        assert_eq!(best.mask.active_count(), 0);

        let a = FeatureMask::from_bits(&[1, 0, 0]);
        assert!(best.offer(&a, 0.5));
        assert_eq!(best.mask, a);

        // Equal score does not replace.
        let b = FeatureMask::from_bits(&[0, 1, 0]);
        assert!(!best.offer(&b, 0.5));
        assert_eq!(best.mask, a);

        assert!(!best.offer(&b, 0.7));
        assert!(best.offer(&b, 0.4));
        assert_eq!(best.mask, b);
    }

    #[test]
    fn test_best_so_far_ignores_penalty() {
        let mut best = BestSoFar::new(2);
        assert!(!best.offer(&FeatureMask::full(2), MAX_PENALTY));
        assert_eq!(best.mask, FeatureMask::empty(2));
    }

    #[test]
    fn test_best_so_far_is_independent_copy() {
        let mut best = BestSoFar::new(3);
        let mut source = FeatureMask::from_bits(&[1, 1, 0]);
        best.offer(&source, 0.1);
        source.genes_mut()[0] = false;
        assert_eq!(best.mask.to_bits(), vec![1, 1, 0]);
    }
}
