//! Memoized opening guesses
//!
//! The turn-1 guess depends only on the solver configuration, and computing
//! it is by far the most expensive call of a game. `FirstGuessCache` keeps
//! one answer per configuration so repeated games and benchmarks skip it.

use super::engine::{Solver, SolverError};
use super::strategy::Strategy;
use crate::core::Word;
use rustc_hash::{FxHashMap, FxHasher};
use std::hash::{Hash, Hasher};
use std::sync::RwLock;

type Buckets = FxHashMap<u64, Vec<Entry>>;

/// Thread-safe map from solver configuration to its opening guess
///
/// Concurrent misses for the same configuration may compute the guess more
/// than once; the results are identical.
#[derive(Debug, Default)]
pub struct FirstGuessCache {
    entries: RwLock<Buckets>,
}

/// A cached opening together with the full configuration it was computed for
#[derive(Debug)]
struct Entry {
    strategy: &'static str,
    hard_mode: bool,
    max_turns: usize,
    solutions: Vec<Word>,
    guess_pool: Vec<Word>,
    word: Word,
}

impl Entry {
    fn new<S: Strategy>(solver: &Solver<'_, S>, word: Word) -> Self {
        Self {
            strategy: solver.strategy().name(),
            hard_mode: solver.hard_mode(),
            max_turns: solver.max_turns(),
            solutions: solver.solutions().to_vec(),
            guess_pool: solver.guess_pool().to_vec(),
            word,
        }
    }

    fn matches<S: Strategy>(&self, solver: &Solver<'_, S>) -> bool {
        self.strategy == solver.strategy().name()
            && self.hard_mode == solver.hard_mode()
            && self.max_turns == solver.max_turns()
            && self.solutions == solver.solutions()
            && self.guess_pool == solver.guess_pool()
    }
}

impl FirstGuessCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The turn-1 guess for `solver`'s configuration
    ///
    /// The solver's current history is ignored.
    ///
    /// # Errors
    /// Propagates errors from [`Solver::best_guess`].
    pub fn first_guess<S: Strategy>(&self, solver: &Solver<'_, S>) -> Result<Word, SolverError> {
        let key = pool_key(solver);

        if let Some(word) = self.lookup(key, solver) {
            return Ok(word);
        }

        let word = if solver.is_fresh() {
            solver.best_guess(1)?
        } else {
            let fresh = Solver::with_strategy(
                solver.strategy(),
                solver.solutions(),
                Some(solver.guess_pool()),
            )?
            .with_hard_mode(solver.hard_mode())
            .with_max_turns(solver.max_turns());
            fresh.best_guess(1)?
        };

        let mut entries = self.write();
        let bucket = entries.entry(key).or_default();
        if !bucket.iter().any(|entry| entry.matches(solver)) {
            bucket.push(Entry::new(solver, word));
        }
        Ok(word)
    }

    /// Best guess for `turn`, served from the cache while `solver` is fresh
    ///
    /// # Errors
    /// Propagates errors from [`Solver::best_guess`].
    pub fn best_guess<S: Strategy>(
        &self,
        solver: &Solver<'_, S>,
        turn: usize,
    ) -> Result<Word, SolverError> {
        if solver.is_fresh() {
            self.first_guess(solver)
        } else {
            solver.best_guess(turn)
        }
    }

    /// Precompute the opening guess for `solver`'s configuration
    ///
    /// # Errors
    /// Propagates errors from [`Solver::best_guess`].
    pub fn warm<S: Strategy>(&self, solver: &Solver<'_, S>) -> Result<(), SolverError> {
        self.first_guess(solver).map(|_| ())
    }

    /// Number of cached configurations
    #[must_use]
    pub fn len(&self) -> usize {
        self.read().values().map(Vec::len).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        self.write().clear();
    }

    fn lookup<S: Strategy>(&self, key: u64, solver: &Solver<'_, S>) -> Option<Word> {
        self.read()
            .get(&key)?
            .iter()
            .find(|entry| entry.matches(solver))
            .map(|entry| entry.word)
    }

    // Entries are inserted whole, so a poisoned map is still consistent
    fn read(&self) -> std::sync::RwLockReadGuard<'_, Buckets> {
        self.entries
            .read()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, Buckets> {
        self.entries
            .write()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

/// Hash of everything the opening guess depends on
///
/// Only selects a bucket; hits are confirmed against the stored configuration.
fn pool_key<S: Strategy>(solver: &Solver<'_, S>) -> u64 {
    let mut hasher = FxHasher::default();
    solver.strategy().name().hash(&mut hasher);
    solver.hard_mode().hash(&mut hasher);
    solver.max_turns().hash(&mut hasher);
    solver.solutions().hash(&mut hasher);
    solver.guess_pool().hash(&mut hasher);
    hasher.finish()
}
