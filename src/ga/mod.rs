//! Genetic Algorithm for feature-subset selection.
//!
//! Individuals are [`FeatureMask`]s: one inclusion gene per candidate
//! feature. Scoring is delegated to a [`FitnessEvaluator`]; the built-in
//! [`SurrogateEvaluator`] combines a simulated error term with a sparsity
//! penalty. Lower fitness is better.
//!
//! # Key Types
//!
//! - [`GaConfig`]: Run parameters (N, F, G, rates, tournament size, elites)
//! - [`GaRunner`]: Executes the generational loop
//! - [`GaResult`]: Best mask found, with per-generation statistics
//!
//! # Operators
//!
//! - [`initialize_population`]: Uniform random masks
//! - [`tournament`]: Tournament selection without replacement
//! - [`uniform_crossover`]: Per-gene parent choice, one child
//! - [`bit_flip_mutation`]: Independent per-gene complement
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*
//! - Yang & Honavar (1998), "Feature Subset Selection Using a Genetic Algorithm"

mod config;
mod evaluator;
mod operators;
mod population;
mod runner;
mod selection;
mod types;

pub use config::GaConfig;
pub use evaluator::{FitnessEvaluator, SurrogateEvaluator};
pub use operators::{bit_flip_mutation, uniform_crossover};
pub use population::{initialize_population, random_mask};
pub use runner::{GaResult, GaRunner, GenerationStats};
pub use selection::{select_parent, tournament};
pub use types::{BestSoFar, FeatureMask, MAX_PENALTY};
