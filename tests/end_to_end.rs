//! End-to-end runs of the feature-selection GA.

use rand::Rng;
use u_featsel::dataset::Dataset;
use u_featsel::error::ConfigError;
use u_featsel::ga::{
    FeatureMask, FitnessEvaluator, GaConfig, GaResult, GaRunner, SurrogateEvaluator, MAX_PENALTY,
};
use u_featsel::random::create_rng;

fn run_quick(seed: u64) -> (GaResult, Vec<Vec<f64>>) {
    let config = GaConfig::quick().with_seed(seed);
    let dataset = Dataset::shape_only(config.feature_count);
    let mut scores = Vec::new();
    let result = GaRunner::run_with_observer(
        &SurrogateEvaluator::default(),
        &dataset,
        &config,
        |stats| scores.push(stats.scores.clone()),
    )
    .unwrap();
    (result, scores)
}

#[test]
fn same_seed_is_bit_identical() {
    let (a, scores_a) = run_quick(2024);
    let (b, scores_b) = run_quick(2024);

    assert_eq!(a.best, b.best);
    assert_eq!(a.best_fitness.to_bits(), b.best_fitness.to_bits());
    assert_eq!(scores_a.len(), 5);
    assert_eq!(scores_a, scores_b);
    for (x, y) in a.history.iter().zip(&b.history) {
        assert_eq!(x, y);
    }
}

#[test]
fn different_seeds_diverge() {
    let (_, scores_a) = run_quick(1);
    let (_, scores_b) = run_quick(2);
    assert_ne!(scores_a, scores_b);
}

#[test]
fn quick_scenario_shapes() {
    let (result, scores) = run_quick(99);
    assert_eq!(result.generations, 5);
    assert_eq!(result.best.len(), 5);
    assert!(scores.iter().all(|gen| gen.len() == 10));
    assert_eq!(result.active_features, result.best.active_count());
}

#[test]
fn noiseless_fitness_matches_formula() {
    let mask = FeatureMask::new((0..45).map(|i| i % 4 == 0 && i < 40).collect());
    assert_eq!(mask.active_count(), 10);

    let dataset = Dataset::simulated(100, 45, &mut create_rng(0));
    let fitness =
        SurrogateEvaluator::without_noise().evaluate(&mask, &dataset, &mut create_rng(1));
    let expected = (1.0 - (0.90 - 10.0 * 0.001)) + (10.0 / 45.0) * 0.2;
    assert!((fitness - expected).abs() < 1e-12);
}

#[test]
fn degenerate_mask_scores_penalty_for_any_dataset() {
    let eval = SurrogateEvaluator::default();
    let mut rng = create_rng(5);
    for (samples, features) in [(0, 3), (10, 7), (100, 45)] {
        let dataset = Dataset::simulated(samples, features, &mut rng);
        let score = eval.evaluate(&FeatureMask::empty(features), &dataset, &mut rng);
        assert_eq!(score, MAX_PENALTY);
    }
}

#[test]
fn default_run_on_simulated_dataset() {
    let config = GaConfig::default().with_seed(42);
    let dataset = Dataset::simulated(100, config.feature_count, &mut create_rng(42));
    let result = GaRunner::run(&SurrogateEvaluator::default(), &dataset, &config).unwrap();

    assert_eq!(result.generations, 50);
    assert!(result.best_fitness.is_finite());
    assert!(result.active_features >= 1);
    // A random mask (about 22 of 45 features) scores about 0.22 without noise.
    assert!(
        result.best_fitness < 0.2,
        "expected the search to beat random subsets, got {}",
        result.best_fitness
    );
}

#[test]
fn best_so_far_is_monotone() {
    let config = GaConfig::default().with_seed(77).with_max_generations(100);
    let dataset = Dataset::shape_only(config.feature_count);
    let result = GaRunner::run(&SurrogateEvaluator::default(), &dataset, &config).unwrap();
    for w in result.fitness_history.windows(2) {
        assert!(w[1] <= w[0]);
    }
}

#[test]
fn invalid_configurations_fail_fast() {
    let dataset = Dataset::shape_only(45);
    let eval = SurrogateEvaluator::default();
    let cases = [
        GaConfig::default().with_population_size(0),
        GaConfig::default().with_max_generations(0),
        GaConfig::default().with_crossover_rate(1.01),
        GaConfig::default().with_mutation_rate(-0.5),
        GaConfig::default().with_tournament_size(31),
        GaConfig::default().with_elite_count(31),
    ];
    for config in cases {
        let mut generations = 0;
        let result = GaRunner::run_with_observer(&eval, &dataset, &config, |_| generations += 1);
        assert!(result.is_err(), "expected {config:?} to be rejected");
        assert_eq!(generations, 0);
    }

    let config = GaConfig::default().with_feature_count(0);
    assert_eq!(
        GaRunner::run(&eval, &Dataset::shape_only(0), &config).unwrap_err(),
        ConfigError::NoFeatures
    );
}

/// Counts how often it is called.
struct CountingEvaluator {
    calls: std::sync::atomic::AtomicUsize,
}

impl FitnessEvaluator for CountingEvaluator {
    fn evaluate<R: Rng>(&self, mask: &FeatureMask, _: &Dataset, rng: &mut R) -> f64 {
        self.calls
            .fetch_add(1, std::sync::atomic::Ordering::Relaxed);
        if mask.active_count() == 0 {
            MAX_PENALTY
        } else {
            rng.random::<f64>()
        }
    }
}

#[test]
fn one_evaluation_per_individual_per_generation() {
    let config = GaConfig::default()
        .with_population_size(12)
        .with_max_generations(9)
        .with_seed(3);
    let eval = CountingEvaluator {
        calls: std::sync::atomic::AtomicUsize::new(0),
    };
    GaRunner::run(&eval, &Dataset::shape_only(config.feature_count), &config).unwrap();
    assert_eq!(
        eval.calls.load(std::sync::atomic::Ordering::Relaxed),
        12 * 9
    );
}

#[test]
fn whole_population_elite_with_tournament_of_all() {
    let config = GaConfig::default()
        .with_population_size(6)
        .with_feature_count(4)
        .with_tournament_size(6)
        .with_elite_count(6)
        .with_max_generations(3)
        .with_seed(8);
    let dataset = Dataset::shape_only(4);
    let result = GaRunner::run(&SurrogateEvaluator::default(), &dataset, &config).unwrap();
    assert_eq!(result.generations, 3);
    assert_eq!(result.best.len(), 4);
}
