//! Error types for u-featsel.
//!
//! Only configuration can fail. Everything downstream of a validated
//! [`GaConfig`](crate::ga::GaConfig) is infallible.

use thiserror::Error;

/// A run parameter is outside its valid range.
///
/// Returned by [`GaConfig::validate`](crate::ga::GaConfig::validate) and by
/// the runner before the first generation starts.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    /// Population size N must be positive.
    #[error("population_size must be at least 1")]
    EmptyPopulation,

    /// Gene count F must be positive.
    #[error("feature_count must be at least 1")]
    NoFeatures,

    /// Generation count G must be positive.
    #[error("max_generations must be at least 1")]
    NoGenerations,

    /// A probability parameter lies outside `[0, 1]` (or is NaN).
    #[error("{name} must be within [0, 1], got {value}")]
    RateOutOfRange { name: &'static str, value: f64 },

    /// Tournament size must satisfy `1 <= T <= N`.
    #[error("tournament_size must be within 1..={population}, got {size}")]
    TournamentSize { size: usize, population: usize },

    /// Elite count must satisfy `E <= N`.
    #[error("elite_count must not exceed population_size {population}, got {elites}")]
    EliteCount { elites: usize, population: usize },

    /// Progress reports need a positive interval.
    #[error("report_interval must be at least 1")]
    ZeroReportInterval,

    /// The dataset's shape disagrees with the configured gene count.
    #[error("dataset has {actual} features but feature_count is {expected}")]
    FeatureCountMismatch { expected: usize, actual: usize },
}
