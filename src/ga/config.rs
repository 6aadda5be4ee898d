//! GA configuration.
//!
//! [`GaConfig`] holds all parameters that control the evolutionary loop.
//! It is built once before a run and read-only afterwards.

use crate::error::ConfigError;

/// Configuration for the feature-selection GA.
///
/// # Defaults
///
/// ```
/// use u_featsel::ga::GaConfig;
///
/// let config = GaConfig::default();
/// assert_eq!(config.population_size, 30);
/// assert_eq!(config.feature_count, 45);
/// assert_eq!(config.max_generations, 50);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_featsel::ga::GaConfig;
///
/// let config = GaConfig::default()
///     .with_population_size(60)
///     .with_tournament_size(4)
///     .with_elite_count(3)
///     .with_mutation_rate(0.02)
///     .with_seed(7);
/// assert!(config.validate().is_ok());
/// ```
///
/// Builders store values as given; out-of-range values are reported by
/// [`validate`](Self::validate) rather than silently clamped.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaConfig {
    /// Number of individuals in every generation (N).
    pub population_size: usize,

    /// Number of candidate features, i.e. genes per individual (F).
    pub feature_count: usize,

    /// Number of generations to run (G). There is no early stop.
    pub max_generations: usize,

    /// Probability of recombining two parents (Pc).
    ///
    /// When crossover is not applied, a copy of the first parent is used.
    pub crossover_rate: f64,

    /// Per-gene probability of flipping a bit (Pm).
    pub mutation_rate: f64,

    /// Number of distinct individuals drawn per tournament (T).
    pub tournament_size: usize,

    /// Number of top individuals copied unchanged into the next generation (E).
    pub elite_count: usize,

    /// Random seed for reproducibility.
    ///
    /// `None` draws a seed from OS entropy; the drawn seed is logged.
    pub seed: Option<u64>,

    /// Emit an `info` progress line every this many generations.
    ///
    /// The final generation is always reported.
    pub report_interval: usize,

    /// Whether to evaluate individuals in parallel using rayon.
    ///
    /// Only effective with the `parallel` feature. Results are identical to
    /// sequential evaluation for the same seed.
    pub parallel: bool,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 30,
            feature_count: 45,
            max_generations: 50,
            crossover_rate: 0.8,
            mutation_rate: 0.05,
            tournament_size: 3,
            elite_count: 2,
            seed: None,
            report_interval: 10,
            parallel: false,
        }
    }
}

impl GaConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the number of candidate features.
    pub fn with_feature_count(mut self, n: usize) -> Self {
        self.feature_count = n;
        self
    }

    /// Sets the number of generations.
    pub fn with_max_generations(mut self, n: usize) -> Self {
        self.max_generations = n;
        self
    }

    /// Sets the crossover rate.
    pub fn with_crossover_rate(mut self, rate: f64) -> Self {
        self.crossover_rate = rate;
        self
    }

    /// Sets the per-gene mutation rate.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate;
        self
    }

    /// Sets the tournament size.
    pub fn with_tournament_size(mut self, k: usize) -> Self {
        self.tournament_size = k;
        self
    }

    /// Sets the number of elites.
    pub fn with_elite_count(mut self, n: usize) -> Self {
        self.elite_count = n;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets the progress report interval.
    pub fn with_report_interval(mut self, every: usize) -> Self {
        self.report_interval = every;
        self
    }

    /// Enables or disables parallel evaluation.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Small preset for smoke runs and deterministic scenarios.
    ///
    /// - Population: 10, Features: 5, Generations: 5
    /// - Crossover always applied, no mutation
    /// - Tournament: 2, Elites: 1
    pub fn quick() -> Self {
        Self {
            population_size: 10,
            feature_count: 5,
            max_generations: 5,
            crossover_rate: 1.0,
            mutation_rate: 0.0,
            tournament_size: 2,
            elite_count: 1,
            report_interval: 1,
            ..Self::default()
        }
    }

    /// Validates the configuration.
    ///
    /// Checks `N > 0`, `F > 0`, `G >= 1`, `Pc, Pm in [0, 1]`,
    /// `1 <= T <= N`, `E <= N` and a positive report interval.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.population_size == 0 {
            return Err(ConfigError::EmptyPopulation);
        }
        if self.feature_count == 0 {
            return Err(ConfigError::NoFeatures);
        }
        if self.max_generations == 0 {
            return Err(ConfigError::NoGenerations);
        }
        check_rate("crossover_rate", self.crossover_rate)?;
        check_rate("mutation_rate", self.mutation_rate)?;
        if self.tournament_size == 0 || self.tournament_size > self.population_size {
            return Err(ConfigError::TournamentSize {
                size: self.tournament_size,
                population: self.population_size,
            });
        }
        if self.elite_count > self.population_size {
            return Err(ConfigError::EliteCount {
                elites: self.elite_count,
                population: self.population_size,
            });
        }
        if self.report_interval == 0 {
            return Err(ConfigError::ZeroReportInterval);
        }
        Ok(())
    }
}

fn check_rate(name: &'static str, value: f64) -> Result<(), ConfigError> {
    // NaN fails the range check.
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::RateOutOfRange { name, value })
    }
}
