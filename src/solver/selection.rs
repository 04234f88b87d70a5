//! Guess selection and tie-breaking
//!
//! Scores are computed by a `Strategy` (possibly in parallel); picking the
//! winner is a sequential walk in pool order so the result is deterministic.
//!
//! Ordering rules:
//! 1. Higher score wins
//! 2. On an exact tie, a guess that is itself a remaining candidate wins
//! 3. Otherwise the guess seen first in pool order wins

use super::strategy::{Strategy, TurnContext};
use crate::core::Word;
use rustc_hash::FxHashSet;
use std::cmp::Ordering;

/// A guess together with its strategy score
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredGuess {
    pub word: Word,
    pub score: f64,
    /// Whether the guess could itself be the secret
    pub is_candidate: bool,
}

impl ScoredGuess {
    /// Whether `self` should be preferred over `other` (earlier in pool order)
    fn beats(&self, other: &Self) -> bool {
        self.score > other.score
            || (self.score == other.score && self.is_candidate && !other.is_candidate)
    }
}

fn scored_pool<S: Strategy + ?Sized>(
    strategy: &S,
    pool: &[Word],
    candidates: &[Word],
    ctx: TurnContext,
) -> Vec<ScoredGuess> {
    let candidate_set: FxHashSet<&Word> = candidates.iter().collect();
    let scores = strategy.score_pool(pool, candidates, ctx);

    pool.iter()
        .zip(scores)
        .map(|(word, score)| ScoredGuess {
            word: *word,
            score,
            is_candidate: candidate_set.contains(word),
        })
        .collect()
}

/// Select the best guess from `pool` for the remaining `candidates`
///
/// Returns `None` if the guess pool is empty.
///
/// # Examples
/// ```
/// use wordle_rescue::core::Word;
/// use wordle_rescue::solver::{EntropyStrategy, TurnContext, select_guess};
///
/// let pool: Vec<Word> = ["aaaaa", "aeros"].iter().map(|w| Word::new(w).unwrap()).collect();
/// let candidates: Vec<Word> = ["slate", "irate", "crate", "grate"]
///     .iter()
///     .map(|w| Word::new(w).unwrap())
///     .collect();
///
/// let best = select_guess(&EntropyStrategy, &pool, &candidates, TurnContext::new(1, 6)).unwrap();
/// assert_eq!(best.word.text(), "aeros");
/// ```
pub fn select_guess<S: Strategy + ?Sized>(
    strategy: &S,
    pool: &[Word],
    candidates: &[Word],
    ctx: TurnContext,
) -> Option<ScoredGuess> {
    scored_pool(strategy, pool, candidates, ctx)
        .into_iter()
        .fold(None, |best, current| match best {
            Some(best) if !current.beats(&best) => Some(best),
            _ => Some(current),
        })
}

/// The `limit` best guesses, best first, using the same ordering rules as
/// `select_guess`
pub fn rank_guesses<S: Strategy + ?Sized>(
    strategy: &S,
    pool: &[Word],
    candidates: &[Word],
    ctx: TurnContext,
    limit: usize,
) -> Vec<ScoredGuess> {
    let mut scored: Vec<(usize, ScoredGuess)> = scored_pool(strategy, pool, candidates, ctx)
        .into_iter()
        .enumerate()
        .collect();

    scored.sort_by(|(ia, a), (ib, b)| compare_scored(a, b).then_with(|| ia.cmp(ib)));

    scored
        .into_iter()
        .take(limit)
        .map(|(_, guess)| guess)
        .collect()
}

/// Compare two scored guesses with the selection ordering (best first)
#[must_use]
pub fn compare_scored(a: &ScoredGuess, b: &ScoredGuess) -> Ordering {
    b.score
        .total_cmp(&a.score)
        .then_with(|| b.is_candidate.cmp(&a.is_candidate))
}
