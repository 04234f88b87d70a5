//! Word solving command
//!
//! Plays the solver against a known target word and records every step.

use crate::core::{Pattern, Word};
use crate::game::{Game, GameStatus};
use crate::solver::entropy::{GuessMetrics, calculate_metrics};
use crate::solver::{Solver, Strategy};
use anyhow::{Context, Result, bail};

/// Result of solving a word
#[derive(Debug, Clone)]
pub struct SolveResult {
    pub target: Word,
    pub success: bool,
    pub steps: Vec<GuessStep>,
}

/// A single guess step in the solution
#[derive(Debug, Clone)]
pub struct GuessStep {
    pub word: Word,
    pub pattern: Pattern,
    pub candidates_before: usize,
    pub candidates_after: usize,
    /// Metrics of the guess against the candidates it faced; `None` when only
    /// one candidate was left
    pub metrics: Option<GuessMetrics>,
}

impl GuessStep {
    /// Bits actually gained by this guess
    #[must_use]
    pub fn information_gained(&self) -> Option<f64> {
        (self.candidates_after > 0)
            .then(|| (self.candidates_before as f64 / self.candidates_after as f64).log2())
    }
}

/// Solve `target` with `solver`, optionally forcing the opening guess
///
/// The solver is reset first and left in its final state.
///
/// # Errors
///
/// Returns an error if:
/// - The target is not in the solver's solution set
/// - The solver runs out of candidates
/// - The referee rejects a guess
pub fn solve_word<S: Strategy>(
    target: Word,
    solver: &mut Solver<'_, S>,
    forced_first: Option<Word>,
) -> Result<SolveResult> {
    if !solver.solutions().contains(&target) {
        bail!("'{target}' is not in the solution list");
    }

    solver.reset();
    let mut game = Game::new(target)
        .with_max_turns(solver.max_turns())
        .with_hard_mode(solver.hard_mode());
    let mut steps = Vec::with_capacity(solver.max_turns());

    while game.status() == GameStatus::InProgress {
        let turn = game.turns_used() + 1;
        let candidates_before = solver.remaining();

        let guess = match forced_first {
            Some(forced) if turn == 1 => forced,
            _ => solver
                .best_guess(turn)
                .with_context(|| format!("solver failed on turn {turn}"))?,
        };

        let metrics =
            (candidates_before > 1).then(|| calculate_metrics(&guess, solver.candidates()));

        let result = game
            .guess(guess)
            .with_context(|| format!("'{guess}' rejected on turn {turn}"))?;
        solver.update(result.guess, result.pattern);

        steps.push(GuessStep {
            word: guess,
            pattern: result.pattern,
            candidates_before,
            candidates_after: solver.remaining(),
            metrics,
        });
    }

    Ok(SolveResult {
        target,
        success: game.status() == GameStatus::Won,
        steps,
    })
}
