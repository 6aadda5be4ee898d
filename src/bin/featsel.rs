//! featsel CLI: evolutionary feature-subset selection on a simulated dataset.
//!
//! Options:
//!   --population=<N>     Individuals per generation (default: 30)
//!   --features=<F>       Candidate features (default: 45)
//!   --generations=<G>    Generations to run (default: 50)
//!   --crossover=<Pc>     Crossover probability (default: 0.8)
//!   --mutation=<Pm>      Per-gene mutation probability (default: 0.05)
//!   --tournament=<T>     Tournament size (default: 3)
//!   --elite=<E>          Elites carried per generation (default: 2)
//!   --seed=<S>           Random seed (default: drawn from OS entropy)
//!   --samples=<M>        Rows in the simulated dataset (default: 100)
//!   --report-every=<K>   Progress line every K generations (default: 10)
//!   --quick              Start from the small preset instead of the defaults
//!
//! Set RUST_LOG=debug for per-generation detail.

use std::process;

use u_featsel::dataset::Dataset;
use u_featsel::ga::{GaConfig, GaRunner, SurrogateEvaluator};
use u_featsel::random::{create_rng, entropy_seed};

const DEFAULT_SAMPLES: usize = 100;

/// CLI configuration parsed from command-line arguments.
struct CliConfig {
    ga: GaConfig,
    samples: usize,
}

fn parse_args() -> Result<CliConfig, String> {
    let args: Vec<String> = std::env::args().skip(1).collect();

    let mut ga = if args.iter().any(|a| a == "--quick") {
        GaConfig::quick()
    } else {
        GaConfig::default()
    };
    let mut samples = DEFAULT_SAMPLES;

    for arg in &args {
        if arg == "--quick" {
            continue;
        }
        let (key, value) = arg
            .split_once('=')
            .ok_or_else(|| format!("expected --key=value, got '{arg}'"))?;
        match key {
            "--population" => ga.population_size = parse_value(key, value)?,
            "--features" => ga.feature_count = parse_value(key, value)?,
            "--generations" => ga.max_generations = parse_value(key, value)?,
            "--crossover" => ga.crossover_rate = parse_value(key, value)?,
            "--mutation" => ga.mutation_rate = parse_value(key, value)?,
            "--tournament" => ga.tournament_size = parse_value(key, value)?,
            "--elite" => ga.elite_count = parse_value(key, value)?,
            "--seed" => ga.seed = Some(parse_value(key, value)?),
            "--samples" => samples = parse_value(key, value)?,
            "--report-every" => ga.report_interval = parse_value(key, value)?,
            _ => return Err(format!("unknown option '{key}'")),
        }
    }

    Ok(CliConfig { ga, samples })
}

fn parse_value<T: std::str::FromStr>(key: &str, value: &str) -> Result<T, String> {
    value
        .parse()
        .map_err(|_| format!("invalid value '{value}' for {key}"))
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut cli = match parse_args() {
        Ok(c) => c,
        Err(e) => {
            log::error!("{e}");
            process::exit(1);
        }
    };

    if let Err(e) = cli.ga.validate() {
        log::error!("Invalid configuration: {e}");
        process::exit(1);
    }

    // Pin the seed so dataset generation and the search replay together.
    let seed = *cli.ga.seed.get_or_insert_with(entropy_seed);
    let mut data_rng = create_rng(seed ^ 0x5EED_DA7A);
    let dataset = Dataset::simulated(cli.samples, cli.ga.feature_count, &mut data_rng);
    log::info!(
        "Simulated dataset: {} samples x {} features.",
        dataset.sample_count(),
        dataset.feature_count()
    );

    println!("Starting optimization...");
    let interval = cli.ga.report_interval;
    let total = cli.ga.max_generations;
    let result = GaRunner::run_with_observer(
        &SurrogateEvaluator::default(),
        &dataset,
        &cli.ga,
        |stats| {
            if stats.generation % interval == 0 {
                println!(
                    "Generation {}/{} | Best fitness: {:.4} | Features: {}",
                    stats.generation, total, stats.best_fitness, stats.best_active_features
                );
            }
        },
    );

    let result = match result {
        Ok(r) => r,
        Err(e) => {
            log::error!("Run aborted: {e}");
            process::exit(1);
        }
    };

    println!();
    println!("--- Final Result ---");
    println!("Best feature subset: {}", result.best);
    println!("Selected features: {:?}", result.best.active_indices());
    println!("Number of selected features: {}", result.active_features);
    println!("Final fitness: {:.4}", result.best_fitness);
    println!("Seed: {}", result.seed);
}
