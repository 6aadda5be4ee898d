//! Dataset context handed to the fitness evaluator.
//!
//! The search treats the dataset as a constant-shape context: the surrogate
//! fitness only reads [`Dataset::feature_count`]. Samples and labels are kept
//! so that a real evaluator can be plugged in behind
//! [`FitnessEvaluator`](crate::ga::FitnessEvaluator).

use rand::Rng;

/// A labelled sample matrix with `sample_count` rows and `feature_count`
/// columns.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Dataset {
    samples: Vec<Vec<f64>>,
    labels: Vec<u8>,
    feature_count: usize,
}

impl Dataset {
    /// Creates a dataset from row-major samples and one label per row.
    ///
    /// # Panics
    /// Panics if rows have differing lengths or the label count differs from
    /// the row count.
    pub fn new(samples: Vec<Vec<f64>>, labels: Vec<u8>) -> Self {
        assert_eq!(
            samples.len(),
            labels.len(),
            "one label is required per sample"
        );
        let feature_count = samples.first().map_or(0, Vec::len);
        assert!(
            samples.iter().all(|row| row.len() == feature_count),
            "all samples must have the same number of features"
        );
        Self {
            samples,
            labels,
            feature_count,
        }
    }

    /// Creates an empty dataset that only carries a feature count.
    ///
    /// Enough for the surrogate evaluator, which never reads sample values.
    pub fn shape_only(feature_count: usize) -> Self {
        Self {
            samples: Vec::new(),
            labels: Vec::new(),
            feature_count,
        }
    }

    /// Generates a random binary-classification dataset.
    ///
    /// Feature values are drawn from `Uniform[0, 1)`, labels from `{0, 1}`.
    pub fn simulated<R: Rng>(sample_count: usize, feature_count: usize, rng: &mut R) -> Self {
        let samples = (0..sample_count)
            .map(|_| (0..feature_count).map(|_| rng.random::<f64>()).collect())
            .collect();
        let labels = (0..sample_count)
            .map(|_| rng.random_range(0..=1u8))
            .collect();
        Self {
            samples,
            labels,
            feature_count,
        }
    }

    /// Number of rows.
    pub fn sample_count(&self) -> usize {
        self.samples.len()
    }

    /// Number of columns, i.e. candidate features.
    pub fn feature_count(&self) -> usize {
        self.feature_count
    }

    /// Row-major sample matrix.
    pub fn samples(&self) -> &[Vec<f64>] {
        &self.samples
    }

    /// Class label per row.
    pub fn labels(&self) -> &[u8] {
        &self.labels
    }

    /// Collects column `j` across all rows.
    ///
    /// # Panics
    /// Panics if `j >= feature_count()`.
    pub fn column(&self, j: usize) -> Vec<f64> {
        assert!(j < self.feature_count, "column index out of range");
        self.samples.iter().map(|row| row[j]).collect()
    }
}
