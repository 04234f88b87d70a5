//! Guess scoring strategies
//!
//! Defines the Strategy trait and concrete implementations. Every strategy
//! returns a score where higher is better; selection and tie-breaking live in
//! `selection`.

use super::engine::SolverError;
use super::entropy::{GuessMetrics, shannon_entropy};
use crate::core::{ALPHABET_SIZE, WORD_LENGTH, Word, bucket_sizes};
use rayon::prelude::*;
use rustc_hash::FxHashSet;
use std::str::FromStr;

/// Turn information handed to turn-aware strategies
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnContext {
    /// 1-based turn about to be played
    pub turn: usize,
    /// Turn budget for the game
    pub max_turns: usize,
}

impl TurnContext {
    #[must_use]
    pub const fn new(turn: usize, max_turns: usize) -> Self {
        Self { turn, max_turns }
    }

    /// Turns left including the current one
    #[must_use]
    pub const fn turns_left(self) -> usize {
        (self.max_turns + 1).saturating_sub(self.turn)
    }
}

/// A scoring function over (guess, remaining candidates, turn)
pub trait Strategy: Send + Sync {
    /// Name used on the command line and as part of cache keys
    fn name(&self) -> &'static str;

    /// Score a single guess against the remaining candidates
    fn score(&self, guess: &Word, candidates: &[Word], ctx: TurnContext) -> f64;

    /// Score every word of the pool, in pool order
    ///
    /// The default evaluates guesses in parallel; the output order always
    /// matches `pool`.
    fn score_pool(&self, pool: &[Word], candidates: &[Word], ctx: TurnContext) -> Vec<f64> {
        pool.par_iter()
            .map(|guess| self.score(guess, candidates, ctx))
            .collect()
    }
}

impl<S: Strategy + ?Sized> Strategy for &S {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn score(&self, guess: &Word, candidates: &[Word], ctx: TurnContext) -> f64 {
        (**self).score(guess, candidates, ctx)
    }

    fn score_pool(&self, pool: &[Word], candidates: &[Word], ctx: TurnContext) -> Vec<f64> {
        (**self).score_pool(pool, candidates, ctx)
    }
}

/// Pure entropy maximization strategy
///
/// Scores a guess by the Shannon entropy of its feedback distribution.
#[derive(Debug, Clone, Copy, Default)]
pub struct EntropyStrategy;

impl Strategy for EntropyStrategy {
    fn name(&self) -> &'static str {
        "entropy"
    }

    fn score(&self, guess: &Word, candidates: &[Word], _ctx: TurnContext) -> f64 {
        if candidates.len() <= 1 {
            return 0.0;
        }
        shannon_entropy(&bucket_sizes(guess, candidates))
    }
}

/// Minimize the expected size of the remaining candidate set
///
/// E[|S'|] = Σ c² / n, negated so higher is better.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExpectedSizeStrategy;

impl Strategy for ExpectedSizeStrategy {
    fn name(&self) -> &'static str {
        "expected-size"
    }

    fn score(&self, guess: &Word, candidates: &[Word], _ctx: TurnContext) -> f64 {
        if candidates.len() <= 1 {
            return 0.0;
        }
        -GuessMetrics::from_buckets(&bucket_sizes(guess, candidates)).expected_remaining
    }
}

/// Pure minimax strategy
///
/// Minimizes the worst-case bucket size, negated so higher is better.
#[derive(Debug, Clone, Copy, Default)]
pub struct MinimaxStrategy;

impl Strategy for MinimaxStrategy {
    fn name(&self) -> &'static str {
        "minimax"
    }

    fn score(&self, guess: &Word, candidates: &[Word], _ctx: TurnContext) -> f64 {
        if candidates.is_empty() {
            return 0.0;
        }
        -(bucket_sizes(guess, candidates).max_bucket() as f64)
    }
}

/// Turn-aware hybrid: entropy early, minimax for the last two turns
///
/// Adds a tiny bonus to guesses that are themselves candidates.
#[derive(Debug, Clone, Copy, Default)]
pub struct HybridStrategy;

impl HybridStrategy {
    const CANDIDATE_BONUS: f64 = 1e-6;
}

impl Strategy for HybridStrategy {
    fn name(&self) -> &'static str {
        "hybrid"
    }

    fn score(&self, guess: &Word, candidates: &[Word], ctx: TurnContext) -> f64 {
        let base = if ctx.turns_left() <= 2 {
            MinimaxStrategy.score(guess, candidates, ctx)
        } else {
            EntropyStrategy.score(guess, candidates, ctx)
        };

        if candidates.contains(guess) {
            base + Self::CANDIDATE_BONUS
        } else {
            base
        }
    }
}

/// Letter-frequency heuristic
///
/// Cheap to evaluate: letter statistics are gathered once per pool instead of
/// bucketing every candidate per guess.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrequencyStrategy;

impl FrequencyStrategy {
    const POSITION_WEIGHT: f64 = 1.0;
    const PRESENCE_WEIGHT: f64 = 0.5;
    const DUPLICATE_PENALTY: f64 = 0.3;
    const CANDIDATE_BONUS: f64 = 0.1;
}

/// Positional and presence letter frequencies over a candidate set
struct LetterStats {
    positional: [[u32; ALPHABET_SIZE]; WORD_LENGTH],
    presence: [u32; ALPHABET_SIZE],
    total: f64,
}

impl LetterStats {
    fn gather(candidates: &[Word]) -> Self {
        let mut positional = [[0u32; ALPHABET_SIZE]; WORD_LENGTH];
        let mut presence = [0u32; ALPHABET_SIZE];

        for word in candidates {
            for (pos, &ch) in word.bytes().iter().enumerate() {
                positional[pos][usize::from(ch - b'a')] += 1;
            }
            for (idx, &count) in word.letter_counts().iter().enumerate() {
                if count > 0 {
                    presence[idx] += 1;
                }
            }
        }

        Self {
            positional,
            presence,
            total: candidates.len() as f64,
        }
    }

    fn score(&self, guess: &Word, is_candidate: bool) -> f64 {
        if self.total == 0.0 {
            return 0.0;
        }

        let mut score = 0.0;
        let mut seen = [false; ALPHABET_SIZE];

        for (pos, &ch) in guess.bytes().iter().enumerate() {
            let idx = usize::from(ch - b'a');
            score += FrequencyStrategy::POSITION_WEIGHT * f64::from(self.positional[pos][idx])
                / self.total;
            if !seen[idx] {
                score += FrequencyStrategy::PRESENCE_WEIGHT * f64::from(self.presence[idx])
                    / self.total;
                seen[idx] = true;
            }
        }

        let duplicates = WORD_LENGTH - guess.distinct_letters();
        score -= FrequencyStrategy::DUPLICATE_PENALTY * duplicates as f64;

        if is_candidate {
            score += FrequencyStrategy::CANDIDATE_BONUS;
        }

        score
    }
}

impl Strategy for FrequencyStrategy {
    fn name(&self) -> &'static str {
        "frequency"
    }

    fn score(&self, guess: &Word, candidates: &[Word], _ctx: TurnContext) -> f64 {
        LetterStats::gather(candidates).score(guess, candidates.contains(guess))
    }

    fn score_pool(&self, pool: &[Word], candidates: &[Word], _ctx: TurnContext) -> Vec<f64> {
        let stats = LetterStats::gather(candidates);
        let candidate_set: FxHashSet<&Word> = candidates.iter().collect();

        pool.par_iter()
            .map(|guess| stats.score(guess, candidate_set.contains(guess)))
            .collect()
    }
}

/// Enum wrapper for all strategy types
///
/// Allows runtime selection of strategy while maintaining static dispatch.
#[derive(Debug, Clone, Copy, Default)]
pub enum StrategyType {
    /// Pure entropy maximization (default)
    #[default]
    Entropy,
    /// Minimize expected remaining candidates
    ExpectedSize,
    /// Minimize worst-case remaining candidates
    Minimax,
    /// Entropy early, minimax late
    Hybrid,
    /// Letter-frequency heuristic
    Frequency,
}

impl StrategyType {
    /// Every strategy, in display order
    pub const ALL: [Self; 5] = [
        Self::Entropy,
        Self::ExpectedSize,
        Self::Minimax,
        Self::Hybrid,
        Self::Frequency,
    ];

    /// Create strategy from name string
    ///
    /// Supported names: "entropy", "expected-size" (or "expected_size"),
    /// "minimax", "hybrid", "frequency".
    ///
    /// # Errors
    /// Returns `SolverError::UnknownStrategy` for any other name.
    pub fn from_name(name: &str) -> Result<Self, SolverError> {
        match name.trim().to_ascii_lowercase().as_str() {
            "entropy" => Ok(Self::Entropy),
            "expected-size" | "expected_size" => Ok(Self::ExpectedSize),
            "minimax" => Ok(Self::Minimax),
            "hybrid" => Ok(Self::Hybrid),
            "frequency" => Ok(Self::Frequency),
            _ => Err(SolverError::UnknownStrategy(name.to_string())),
        }
    }

    /// Names of every strategy, for help output
    #[must_use]
    pub fn names() -> Vec<&'static str> {
        Self::ALL.iter().map(|s| s.name()).collect()
    }
}

impl FromStr for StrategyType {
    type Err = SolverError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}

impl Strategy for StrategyType {
    fn name(&self) -> &'static str {
        match self {
            Self::Entropy => EntropyStrategy.name(),
            Self::ExpectedSize => ExpectedSizeStrategy.name(),
            Self::Minimax => MinimaxStrategy.name(),
            Self::Hybrid => HybridStrategy.name(),
            Self::Frequency => FrequencyStrategy.name(),
        }
    }

    fn score(&self, guess: &Word, candidates: &[Word], ctx: TurnContext) -> f64 {
        match self {
            Self::Entropy => EntropyStrategy.score(guess, candidates, ctx),
            Self::ExpectedSize => ExpectedSizeStrategy.score(guess, candidates, ctx),
            Self::Minimax => MinimaxStrategy.score(guess, candidates, ctx),
            Self::Hybrid => HybridStrategy.score(guess, candidates, ctx),
            Self::Frequency => FrequencyStrategy.score(guess, candidates, ctx),
        }
    }

    fn score_pool(&self, pool: &[Word], candidates: &[Word], ctx: TurnContext) -> Vec<f64> {
        match self {
            Self::Entropy => EntropyStrategy.score_pool(pool, candidates, ctx),
            Self::ExpectedSize => ExpectedSizeStrategy.score_pool(pool, candidates, ctx),
            Self::Minimax => MinimaxStrategy.score_pool(pool, candidates, ctx),
            Self::Hybrid => HybridStrategy.score_pool(pool, candidates, ctx),
            Self::Frequency => FrequencyStrategy.score_pool(pool, candidates, ctx),
        }
    }
}
