//! Benchmark command
//!
//! Plays the solver against many secrets in parallel and aggregates the
//! outcome. Every game gets its own solver; the opening guess is computed
//! once and shared.

use super::SolverConfig;
use super::solve::solve_word;
use crate::core::Word;
use crate::solver::{FirstGuessCache, Solver, Strategy, StrategyType};
use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Benchmark options
#[derive(Debug, Clone, Default)]
pub struct BenchmarkConfig {
    /// Opening guess to use instead of the solver's choice
    pub forced_first: Option<Word>,
    pub show_progress: bool,
}

/// Outcome of one benchmark game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOutcome {
    pub target: Word,
    pub guesses: usize,
    pub success: bool,
}

/// Result of a benchmark run
#[derive(Debug, Clone)]
pub struct BenchmarkResult {
    pub strategy: &'static str,
    pub first_guess: Option<Word>,
    pub total_words: usize,
    pub solved: usize,
    /// Secrets not found within the turn budget
    pub failed: Vec<Word>,
    pub total_guesses: usize,
    /// Mean guesses over every game, failures included
    pub average_guesses: f64,
    pub min_guesses: usize,
    pub max_guesses: usize,
    /// Guess count to number of solved games
    pub distribution: BTreeMap<usize, usize>,
    pub duration: Duration,
    pub words_per_second: f64,
}

impl BenchmarkResult {
    /// Aggregate per-game outcomes
    #[must_use]
    pub fn from_outcomes(
        strategy: &'static str,
        first_guess: Option<Word>,
        outcomes: &[GameOutcome],
        duration: Duration,
    ) -> Self {
        let total_words = outcomes.len();
        let total_guesses: usize = outcomes.iter().map(|o| o.guesses).sum();

        let mut distribution = BTreeMap::new();
        let mut failed = Vec::new();
        for outcome in outcomes {
            if outcome.success {
                *distribution.entry(outcome.guesses).or_insert(0) += 1;
            } else {
                failed.push(outcome.target);
            }
        }

        let secs = duration.as_secs_f64();

        Self {
            strategy,
            first_guess,
            total_words,
            solved: total_words - failed.len(),
            failed,
            total_guesses,
            average_guesses: if total_words == 0 {
                0.0
            } else {
                total_guesses as f64 / total_words as f64
            },
            min_guesses: outcomes.iter().map(|o| o.guesses).min().unwrap_or(0),
            max_guesses: outcomes.iter().map(|o| o.guesses).max().unwrap_or(0),
            distribution,
            duration,
            words_per_second: if secs > 0.0 {
                total_words as f64 / secs
            } else {
                0.0
            },
        }
    }

    /// Fraction of games won, in percent
    #[must_use]
    pub fn success_rate(&self) -> f64 {
        if self.total_words == 0 {
            return 0.0;
        }
        self.solved as f64 / self.total_words as f64 * 100.0
    }
}

/// Pick the benchmark secrets: all solutions, or a seeded random sample
#[must_use]
pub fn sample_targets(solutions: &[Word], sample: Option<usize>, seed: Option<u64>) -> Vec<Word> {
    match sample {
        Some(amount) if amount < solutions.len() => {
            let mut rng = match seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_rng(&mut rand::rng()),
            };
            solutions.choose_multiple(&mut rng, amount).copied().collect()
        }
        _ => solutions.to_vec(),
    }
}

/// Play every target with a fresh copy of `template`
///
/// # Errors
///
/// Returns an error if a target is not a solution or the solver fails
/// mid-game.
pub fn run_benchmark<S: Strategy>(
    template: &Solver<'_, S>,
    cache: &FirstGuessCache,
    targets: &[Word],
    config: &BenchmarkConfig,
) -> Result<BenchmarkResult> {
    let start = Instant::now();

    let opening = match config.forced_first {
        Some(word) => Some(word),
        None if targets.is_empty() => None,
        None => Some(cache.first_guess(template).context("no opening guess")?),
    };

    let pb = if config.show_progress {
        let pb = ProgressBar::new(targets.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")?
                .progress_chars("█▓▒░"),
        );
        pb.set_message(template.strategy().name());
        pb
    } else {
        ProgressBar::hidden()
    };

    let outcomes = targets
        .par_iter()
        .map(|&target| -> Result<GameOutcome> {
            let mut solver = Solver::with_strategy(
                template.strategy(),
                template.solutions(),
                Some(template.guess_pool()),
            )?
            .with_hard_mode(template.hard_mode())
            .with_max_turns(template.max_turns());

            let result = solve_word(target, &mut solver, opening)
                .with_context(|| format!("benchmark game for '{target}'"))?;
            pb.inc(1);

            Ok(GameOutcome {
                target,
                guesses: result.steps.len(),
                success: result.success,
            })
        })
        .collect::<Result<Vec<_>>>();

    pb.finish_and_clear();

    Ok(BenchmarkResult::from_outcomes(
        template.strategy().name(),
        opening,
        &outcomes?,
        start.elapsed(),
    ))
}

/// Benchmark each strategy on the same targets, best average first
///
/// # Errors
///
/// Propagates the first failing benchmark.
pub fn compare_strategies(
    strategies: &[StrategyType],
    base: SolverConfig,
    solutions: &[Word],
    guess_pool: Option<&[Word]>,
    targets: &[Word],
    config: &BenchmarkConfig,
) -> Result<Vec<BenchmarkResult>> {
    let cache = FirstGuessCache::new();

    let mut results = strategies
        .iter()
        .map(|&strategy| {
            let solver = SolverConfig { strategy, ..base }.build(solutions, guess_pool)?;
            run_benchmark(&solver, &cache, targets, config)
        })
        .collect::<Result<Vec<_>>>()?;

    results.sort_by(|a, b| {
        a.average_guesses
            .total_cmp(&b.average_guesses)
            .then(b.solved.cmp(&a.solved))
    });

    Ok(results)
}
