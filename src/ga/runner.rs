//! GA evolutionary loop execution.
//!
//! [`GaRunner`] orchestrates the complete evolutionary process, once per
//! generation:
//! evaluation → ranking → elitism → best tracking → selection → crossover →
//! mutation → replacement → reporting.

use super::config::GaConfig;
use super::evaluator::FitnessEvaluator;
use super::operators::{bit_flip_mutation, uniform_crossover};
use super::population::initialize_population;
use super::selection::select_parent;
use super::types::{BestSoFar, FeatureMask, MAX_PENALTY};
use crate::dataset::Dataset;
use crate::error::ConfigError;
use crate::random::{create_rng, derive_seeds, entropy_seed};
use rand::Rng;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Result of a GA optimization run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaResult {
    /// The best mask found during the entire run.
    pub best: FeatureMask,

    /// Score the best mask received when it was found.
    pub best_fitness: f64,

    /// Number of active features in `best`.
    pub active_features: usize,

    /// Total number of generations executed (always `max_generations`).
    pub generations: usize,

    /// Seed the run was driven by; replaying it reproduces the result.
    pub seed: u64,

    /// Best-so-far fitness at the end of each generation.
    pub fitness_history: Vec<f64>,

    /// Per-generation statistics, in order.
    pub history: Vec<GenerationStats>,
}

/// Snapshot of one completed generation.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GenerationStats {
    /// 1-based generation index.
    pub generation: usize,

    /// Best-so-far fitness after this generation.
    pub best_fitness: f64,

    /// Best score within this generation.
    pub generation_best_fitness: f64,

    /// Mean of the finite scores in this generation ([`MAX_PENALTY`] if none).
    pub mean_fitness: f64,

    /// Active features of the best-so-far mask.
    pub best_active_features: usize,

    /// The generation's score array, index-aligned with its population.
    pub scores: Vec<f64>,
}

/// Executes the GA evolutionary loop.
///
/// # Usage
///
/// ```
/// use u_featsel::dataset::Dataset;
/// use u_featsel::ga::{GaConfig, GaRunner, SurrogateEvaluator};
///
/// let config = GaConfig::quick().with_seed(42);
/// let dataset = Dataset::shape_only(config.feature_count);
/// let result = GaRunner::run(&SurrogateEvaluator::default(), &dataset, &config).unwrap();
/// println!("Best fitness: {:.4}", result.best_fitness);
/// ```
pub struct GaRunner;

impl GaRunner {
    /// Runs the GA optimization.
    ///
    /// # Errors
    /// Returns [`ConfigError`] if the configuration is invalid or the dataset
    /// does not have `config.feature_count` features. Nothing is evaluated in
    /// that case.
    pub fn run<E: FitnessEvaluator>(
        evaluator: &E,
        dataset: &Dataset,
        config: &GaConfig,
    ) -> Result<GaResult, ConfigError> {
        Self::run_with_observer(evaluator, dataset, config, |_| {})
    }

    /// Runs the GA, calling `observer` after every generation.
    pub fn run_with_observer<E, F>(
        evaluator: &E,
        dataset: &Dataset,
        config: &GaConfig,
        mut observer: F,
    ) -> Result<GaResult, ConfigError>
    where
        E: FitnessEvaluator,
        F: FnMut(&GenerationStats),
    {
        config.validate()?;
        if dataset.feature_count() != config.feature_count {
            return Err(ConfigError::FeatureCountMismatch {
                expected: config.feature_count,
                actual: dataset.feature_count(),
            });
        }

        let seed = config.seed.unwrap_or_else(entropy_seed);
        let mut rng = create_rng(seed);
        log::info!(
            "starting feature selection: population={} features={} generations={} \
             crossover={} mutation={} tournament={} elites={} seed={}",
            config.population_size,
            config.feature_count,
            config.max_generations,
            config.crossover_rate,
            config.mutation_rate,
            config.tournament_size,
            config.elite_count,
            seed
        );

        // 1. Initialize population
        let mut population = initialize_population(
            config.population_size,
            config.feature_count,
            &mut rng,
        );

        let mut best = BestSoFar::new(config.feature_count);
        let mut fitness_history = Vec::with_capacity(config.max_generations);
        let mut history = Vec::with_capacity(config.max_generations);

        // 2. Evolutionary loop
        for gen in 0..config.max_generations {
            // One evaluation per individual; the full array is built before
            // anything reads it.
            let scores = evaluate_population(
                evaluator,
                dataset,
                &population,
                config.parallel,
                &mut rng,
            );

            let ranked = rank_by_fitness(&scores);
            let leader = ranked[0];
            if best.offer(&population[leader], scores[leader]) {
                log::debug!(
                    "generation {}: new best {:.6} with {} features",
                    gen + 1,
                    best.fitness,
                    best.mask.active_count()
                );
            }

            let stats = GenerationStats {
                generation: gen + 1,
                best_fitness: best.fitness,
                generation_best_fitness: scores[leader],
                mean_fitness: finite_mean(&scores),
                best_active_features: best.mask.active_count(),
                scores,
            };

            population = next_generation(&population, &stats.scores, &ranked, config, &mut rng);
            debug_assert_eq!(population.len(), config.population_size);

            report(&stats, config);
            observer(&stats);
            fitness_history.push(best.fitness);
            history.push(stats);
        }

        log::info!(
            "feature selection finished: fitness={:.4} features={}/{}",
            best.fitness,
            best.mask.active_count(),
            config.feature_count
        );

        Ok(GaResult {
            active_features: best.mask.active_count(),
            best_fitness: best.fitness,
            best: best.mask,
            generations: config.max_generations,
            seed,
            fitness_history,
            history,
        })
    }
}

/// Evaluate all individuals in the population.
///
/// Each individual gets its own generator seeded from `rng` in population
/// order, so parallel and sequential evaluation yield identical scores.
fn evaluate_population<E: FitnessEvaluator, R: Rng>(
    evaluator: &E,
    dataset: &Dataset,
    population: &[FeatureMask],
    parallel: bool,
    rng: &mut R,
) -> Vec<f64> {
    let seeds = derive_seeds(rng, population.len());
    score_all(evaluator, dataset, population, &seeds, parallel)
}

#[cfg(feature = "parallel")]
fn score_all<E: FitnessEvaluator>(
    evaluator: &E,
    dataset: &Dataset,
    population: &[FeatureMask],
    seeds: &[u64],
    parallel: bool,
) -> Vec<f64> {
    if parallel {
        population
            .par_iter()
            .zip(seeds.par_iter())
            .map(|(mask, &seed)| evaluator.evaluate(mask, dataset, &mut create_rng(seed)))
            .collect()
    } else {
        population
            .iter()
            .zip(seeds)
            .map(|(mask, &seed)| evaluator.evaluate(mask, dataset, &mut create_rng(seed)))
            .collect()
    }
}

#[cfg(not(feature = "parallel"))]
fn score_all<E: FitnessEvaluator>(
    evaluator: &E,
    dataset: &Dataset,
    population: &[FeatureMask],
    seeds: &[u64],
    _parallel: bool,
) -> Vec<f64> {
    population
        .iter()
        .zip(seeds)
        .map(|(mask, &seed)| evaluator.evaluate(mask, dataset, &mut create_rng(seed)))
        .collect()
}

/// Population indices sorted by ascending score.
///
/// Stable: equal scores keep their population order.
pub(crate) fn rank_by_fitness(scores: &[f64]) -> Vec<usize> {
    let mut ranked: Vec<usize> = (0..scores.len()).collect();
    ranked.sort_by(|&a, &b| scores[a].total_cmp(&scores[b]));
    ranked
}

/// Builds the next population: elites first, then offspring.
pub(crate) fn next_generation<R: Rng>(
    population: &[FeatureMask],
    scores: &[f64],
    ranked: &[usize],
    config: &GaConfig,
    rng: &mut R,
) -> Vec<FeatureMask> {
    // Elite preservation
    let mut next_gen: Vec<FeatureMask> = ranked[..config.elite_count]
        .iter()
        .map(|&i| population[i].clone())
        .collect();

    // Generate offspring
    while next_gen.len() < config.population_size {
        let parent1 = select_parent(population, scores, config.tournament_size, rng);
        let parent2 = select_parent(population, scores, config.tournament_size, rng);
        let child = uniform_crossover(parent1, parent2, config.crossover_rate, rng);
        next_gen.push(bit_flip_mutation(child, config.mutation_rate, rng));
    }

    next_gen
}

fn finite_mean(scores: &[f64]) -> f64 {
    let (sum, count) = scores
        .iter()
        .filter(|s| s.is_finite())
        .fold((0.0, 0usize), |(sum, n), &s| (sum + s, n + 1));
    if count == 0 {
        MAX_PENALTY
    } else {
        sum / count as f64
    }
}

fn report(stats: &GenerationStats, config: &GaConfig) {
    let gen = stats.generation;
    if gen % config.report_interval == 0 || gen == config.max_generations {
        log::info!(
            "generation {}/{} | best fitness: {:.4} | features: {}",
            gen,
            config.max_generations,
            stats.best_fitness,
            stats.best_active_features
        );
    } else {
        log::debug!(
            "generation {}/{} | best fitness: {:.4} | generation best: {:.4} | mean: {:.4}",
            gen,
            config.max_generations,
            stats.best_fitness,
            stats.generation_best_fitness,
            stats.mean_fitness
        );
    }
}

// ============================================================================
// Tests
// ============================================================================
