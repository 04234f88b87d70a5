//! Main Wordle solver interface
//!
//! A `Solver` owns the remaining candidates and the turn history; the word
//! lists themselves are borrowed. Feeding the same history through `update`
//! or `replay` always lands in the same state.

use super::selection::select_guess;
use super::strategy::{EntropyStrategy, Strategy, TurnContext};
use crate::core::{Pattern, PatternError, Word, WordError, filter_candidates};
use rustc_hash::FxHashSet;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Default turn budget of a game
pub const DEFAULT_MAX_TURNS: usize = 6;

/// Errors raised by the solver
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolverError {
    /// No candidate is consistent with the feedback seen so far
    #[error("no candidates remain after {turns_played} turn(s)")]
    Exhausted { turns_played: usize },
    #[error("solution set is empty")]
    EmptySolutions,
    #[error("guess pool is empty")]
    EmptyGuessPool,
    #[error("duplicate word in word list: {0}")]
    DuplicateWord(Word),
    #[error("unknown strategy: {0}")]
    UnknownStrategy(String),
}

/// Errors raised while parsing a `word:feedback` turn
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TurnParseError {
    #[error("expected WORD:FEEDBACK, got '{0}'")]
    MissingSeparator(String),
    #[error(transparent)]
    Word(#[from] WordError),
    #[error(transparent)]
    Pattern(#[from] PatternError),
}

/// One played turn: the guess and the feedback it received
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Turn {
    pub guess: Word,
    pub pattern: Pattern,
}

impl Turn {
    #[must_use]
    pub const fn new(guess: Word, pattern: Pattern) -> Self {
        Self { guess, pattern }
    }

    /// The turn produced by guessing `guess` against `secret`
    #[must_use]
    pub fn observe(guess: Word, secret: &Word) -> Self {
        Self::new(guess, Pattern::calculate(&guess, secret))
    }
}

impl fmt::Display for Turn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.guess, self.pattern)
    }
}

impl FromStr for Turn {
    type Err = TurnParseError;

    /// Parse `crane:--y-g` or `crane=00102`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (word, feedback) = s
            .trim()
            .split_once([':', '='])
            .ok_or_else(|| TurnParseError::MissingSeparator(s.to_string()))?;

        Ok(Self::new(word.trim().parse()?, feedback.trim().parse()?))
    }
}

/// Parse a history of turns separated by whitespace or commas
///
/// # Errors
/// Returns the first token that fails to parse.
///
/// # Examples
/// ```
/// use wordle_rescue::solver::parse_history;
///
/// let history = parse_history("crane:--y-g, slate=00222").unwrap();
/// assert_eq!(history.len(), 2);
/// assert_eq!(history[1].pattern.value(), 26);
/// ```
pub fn parse_history(text: &str) -> Result<Vec<Turn>, TurnParseError> {
    text.split(|c: char| c.is_whitespace() || c == ',')
        .filter(|token| !token.is_empty())
        .map(str::parse::<Turn>)
        .collect()
}

/// Coarse state of a solver
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolverState {
    /// No turns played yet
    Fresh,
    /// Candidates remain and the last guess was not correct
    InProgress,
    /// The last feedback was all exact for a remaining candidate
    Solved,
    /// The history is contradictory: no candidate fits
    Exhausted,
}

/// Main Wordle solver
///
/// Coordinates candidate narrowing and guess selection with a given strategy.
pub struct Solver<'a, S: Strategy = EntropyStrategy> {
    strategy: S,
    solutions: &'a [Word],
    guess_pool: &'a [Word],
    candidates: Vec<Word>,
    history: Vec<Turn>,
    hard_mode: bool,
    /// Guess pool narrowed by the history, maintained only in hard mode
    hard_pool: Vec<Word>,
    max_turns: usize,
}

impl<'a> Solver<'a, EntropyStrategy> {
    /// Create an entropy solver over `solutions`
    ///
    /// Without an explicit `guess_pool` the solutions double as the pool.
    ///
    /// # Errors
    /// See [`Solver::with_strategy`].
    pub fn new(solutions: &'a [Word], guess_pool: Option<&'a [Word]>) -> Result<Self, SolverError> {
        Self::with_strategy(EntropyStrategy, solutions, guess_pool)
    }
}

impl<'a, S: Strategy> Solver<'a, S> {
    /// Create a solver with the given strategy and word lists
    ///
    /// # Errors
    /// - `EmptySolutions` if `solutions` is empty
    /// - `EmptyGuessPool` if an explicit pool is empty
    /// - `DuplicateWord` if either list repeats a word
    pub fn with_strategy(
        strategy: S,
        solutions: &'a [Word],
        guess_pool: Option<&'a [Word]>,
    ) -> Result<Self, SolverError> {
        if solutions.is_empty() {
            return Err(SolverError::EmptySolutions);
        }
        ensure_unique(solutions)?;

        let guess_pool = match guess_pool {
            Some([]) => return Err(SolverError::EmptyGuessPool),
            Some(pool) => {
                ensure_unique(pool)?;
                pool
            }
            None => solutions,
        };

        Ok(Self {
            strategy,
            solutions,
            guess_pool,
            candidates: solutions.to_vec(),
            history: Vec::new(),
            hard_mode: false,
            hard_pool: Vec::new(),
            max_turns: DEFAULT_MAX_TURNS,
        })
    }

    /// Only suggest guesses consistent with every feedback seen so far
    #[must_use]
    pub fn with_hard_mode(mut self, hard_mode: bool) -> Self {
        self.hard_mode = hard_mode;
        self.reset();
        self
    }

    /// Turn budget handed to turn-aware strategies
    #[must_use]
    pub fn with_max_turns(mut self, max_turns: usize) -> Self {
        self.max_turns = max_turns.max(1);
        self
    }

    /// Best guess for the 1-based `turn`
    ///
    /// With two candidates left the first one (in solution-set order) is
    /// guessed outright: it wins immediately half the time and the other
    /// guess cannot do better.
    ///
    /// # Errors
    /// `Exhausted` when no candidate remains.
    pub fn best_guess(&self, turn: usize) -> Result<Word, SolverError> {
        match self.candidates.as_slice() {
            [] => Err(SolverError::Exhausted {
                turns_played: self.history.len(),
            }),
            [only] | [only, _] => Ok(*only),
            candidates => {
                let ctx = TurnContext::new(turn, self.max_turns);
                select_guess(&self.strategy, self.active_pool(), candidates, ctx)
                    .map(|scored| scored.word)
                    .ok_or(SolverError::EmptyGuessPool)
            }
        }
    }

    /// Record the feedback for `guess` and narrow the candidates
    pub fn update(&mut self, guess: Word, pattern: Pattern) {
        self.candidates = filter_candidates(&self.candidates, &guess, pattern)
            .copied()
            .collect();

        if self.hard_mode {
            self.hard_pool = filter_candidates(&self.hard_pool, &guess, pattern)
                .copied()
                .collect();
        }

        self.history.push(Turn::new(guess, pattern));
    }

    /// Forget every turn; strategy, pool and hard mode are kept
    pub fn reset(&mut self) {
        self.candidates = self.solutions.to_vec();
        self.history.clear();
        self.hard_pool = if self.hard_mode {
            self.guess_pool.to_vec()
        } else {
            Vec::new()
        };
    }

    /// Rebuild the state from an externally supplied history
    pub fn replay(&mut self, turns: &[Turn]) {
        self.reset();
        for turn in turns {
            self.update(turn.guess, turn.pattern);
        }
    }

    /// Drop the last turn, returning it
    ///
    /// This is the recovery path after a mistyped feedback exhausts the
    /// candidates.
    pub fn undo(&mut self) -> Option<Turn> {
        let mut history = std::mem::take(&mut self.history);
        let last = history.pop()?;
        self.replay(&history);
        Some(last)
    }

    /// Number of remaining candidates
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.candidates.len()
    }

    /// Remaining candidates, in solution-set order
    #[must_use]
    pub fn candidates(&self) -> &[Word] {
        &self.candidates
    }

    #[must_use]
    pub fn history(&self) -> &[Turn] {
        &self.history
    }

    #[must_use]
    pub fn turns_played(&self) -> usize {
        self.history.len()
    }

    #[must_use]
    pub const fn solutions(&self) -> &'a [Word] {
        self.solutions
    }

    #[must_use]
    pub const fn guess_pool(&self) -> &'a [Word] {
        self.guess_pool
    }

    #[must_use]
    pub const fn strategy(&self) -> &S {
        &self.strategy
    }

    #[must_use]
    pub const fn hard_mode(&self) -> bool {
        self.hard_mode
    }

    #[must_use]
    pub const fn max_turns(&self) -> usize {
        self.max_turns
    }

    /// True until the first `update`
    #[must_use]
    pub fn is_fresh(&self) -> bool {
        self.history.is_empty()
    }

    #[must_use]
    pub fn state(&self) -> SolverState {
        match self.history.last() {
            None => SolverState::Fresh,
            Some(_) if self.candidates.is_empty() => SolverState::Exhausted,
            Some(turn) if turn.pattern.is_perfect() => SolverState::Solved,
            Some(_) => SolverState::InProgress,
        }
    }

    /// Pool the next guess is drawn from
    ///
    /// In hard mode this is the narrowed pool, falling back to the candidates
    /// when no pool word fits the history.
    fn active_pool(&self) -> &[Word] {
        if !self.hard_mode {
            self.guess_pool
        } else if self.hard_pool.is_empty() {
            &self.candidates
        } else {
            &self.hard_pool
        }
    }
}

fn ensure_unique(words: &[Word]) -> Result<(), SolverError> {
    let mut seen = FxHashSet::default();
    match words.iter().find(|word| !seen.insert(*word)) {
        Some(duplicate) => Err(SolverError::DuplicateWord(*duplicate)),
        None => Ok(()),
    }
}
