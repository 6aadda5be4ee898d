//! Evolutionary feature-subset selection.
//!
//! Searches the space of binary inclusion masks over `F` candidate features
//! for the mask minimizing a cost that combines a (surrogate) prediction
//! error and a sparsity penalty.
//!
//! - [`ga`]: the generational genetic algorithm (tournament selection,
//!   uniform crossover, bit-flip mutation, elitism, best-so-far tracking)
//! - [`dataset`]: the dataset context handed to the fitness evaluator
//! - [`random`]: seeded generator handles for reproducible runs
//! - [`error`]: configuration errors
//!
//! # Example
//!
//! ```
//! use u_featsel::dataset::Dataset;
//! use u_featsel::ga::{GaConfig, GaRunner, SurrogateEvaluator};
//!
//! let config = GaConfig::default().with_seed(42);
//! let dataset = Dataset::shape_only(config.feature_count);
//! let result = GaRunner::run(&SurrogateEvaluator::default(), &dataset, &config).unwrap();
//! assert_eq!(result.best.len(), 45);
//! assert_eq!(result.generations, 50);
//! ```

pub mod dataset;
pub mod error;
pub mod ga;
pub mod random;
