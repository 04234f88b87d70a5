//! Game referee
//!
//! Holds the secret, scores guesses and enforces the turn limit, the allowed
//! word list and hard mode.

mod hard_mode;

pub use hard_mode::{HardModeConstraints, HardModeViolation};

use crate::core::{Pattern, Word};
use crate::solver::{DEFAULT_MAX_TURNS, Solver, SolverError, Strategy};
use rustc_hash::FxHashSet;
use thiserror::Error;

/// Errors from submitting a guess
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("game is already over")]
    Finished,
    #[error("'{0}' is not in the word list")]
    NotAllowed(Word),
    #[error("hard mode: {0}")]
    HardMode(#[from] HardModeViolation),
}

/// Errors from letting a solver play a game
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlayError {
    #[error(transparent)]
    Game(#[from] GameError),
    #[error(transparent)]
    Solver(#[from] SolverError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

/// A scored guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuessResult {
    pub guess: Word,
    pub pattern: Pattern,
    /// 1-based turn the guess was played on
    pub turn: usize,
}

impl GuessResult {
    #[must_use]
    pub const fn is_correct(&self) -> bool {
        self.pattern.is_perfect()
    }
}

/// A single game against a known secret
#[derive(Debug, Clone)]
pub struct Game {
    secret: Word,
    max_turns: usize,
    hard_mode: bool,
    allowed: Option<FxHashSet<Word>>,
    results: Vec<GuessResult>,
    constraints: HardModeConstraints,
}

impl Game {
    #[must_use]
    pub fn new(secret: Word) -> Self {
        Self {
            secret,
            max_turns: DEFAULT_MAX_TURNS,
            hard_mode: false,
            allowed: None,
            results: Vec::with_capacity(DEFAULT_MAX_TURNS),
            constraints: HardModeConstraints::new(),
        }
    }

    #[must_use]
    pub fn with_max_turns(mut self, max_turns: usize) -> Self {
        self.max_turns = max_turns.max(1);
        self
    }

    #[must_use]
    pub const fn with_hard_mode(mut self, hard_mode: bool) -> Self {
        self.hard_mode = hard_mode;
        self
    }

    /// Only accept guesses from `words` (the secret is always accepted)
    #[must_use]
    pub fn with_allowed<'w>(mut self, words: impl IntoIterator<Item = &'w Word>) -> Self {
        let mut allowed: FxHashSet<Word> = words.into_iter().copied().collect();
        allowed.insert(self.secret);
        self.allowed = Some(allowed);
        self
    }

    /// Submit a guess
    ///
    /// # Errors
    /// - `Finished` once the game is won or lost
    /// - `NotAllowed` for words outside the allowed list
    /// - `HardMode` when hard mode is on and the guess ignores revealed letters
    pub fn guess(&mut self, guess: Word) -> Result<GuessResult, GameError> {
        if self.status() != GameStatus::InProgress {
            return Err(GameError::Finished);
        }

        if self
            .allowed
            .as_ref()
            .is_some_and(|allowed| !allowed.contains(&guess))
        {
            return Err(GameError::NotAllowed(guess));
        }

        if self.hard_mode {
            self.constraints.check(&guess)?;
        }

        let pattern = Pattern::calculate(&guess, &self.secret);
        self.constraints.absorb(&guess, pattern);

        let result = GuessResult {
            guess,
            pattern,
            turn: self.results.len() + 1,
        };
        self.results.push(result);
        Ok(result)
    }

    /// Let `solver` play until the game ends
    ///
    /// The solver is reset first.
    ///
    /// # Errors
    /// A solver error (e.g. exhausted candidates when the secret is not in its
    /// solution set) or a referee rejection of the solver's guess.
    pub fn play_with<S: Strategy>(
        &mut self,
        solver: &mut Solver<'_, S>,
    ) -> Result<GameStatus, PlayError> {
        solver.reset();

        while self.status() == GameStatus::InProgress {
            let guess = solver.best_guess(self.turns_used() + 1)?;
            let result = self.guess(guess)?;
            solver.update(result.guess, result.pattern);
        }

        Ok(self.status())
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        match self.results.last() {
            Some(last) if last.is_correct() => GameStatus::Won,
            _ if self.results.len() >= self.max_turns => GameStatus::Lost,
            _ => GameStatus::InProgress,
        }
    }

    #[must_use]
    pub const fn secret(&self) -> Word {
        self.secret
    }

    #[must_use]
    pub fn turns_used(&self) -> usize {
        self.results.len()
    }

    #[must_use]
    pub fn turns_remaining(&self) -> usize {
        self.max_turns.saturating_sub(self.results.len())
    }

    #[must_use]
    pub fn guesses(&self) -> &[GuessResult] {
        &self.results
    }

    #[must_use]
    pub const fn max_turns(&self) -> usize {
        self.max_turns
    }

    #[must_use]
    pub const fn hard_mode(&self) -> bool {
        self.hard_mode
    }

    /// Constraints revealed so far, for hints
    #[must_use]
    pub const fn constraints(&self) -> &HardModeConstraints {
        &self.constraints
    }
}
