//! Rescue command
//!
//! Rebuilds solver state from a game played elsewhere and suggests how to
//! continue it.

use crate::core::Word;
use crate::solver::entropy::{GuessMetrics, calculate_metrics};
use crate::solver::{FirstGuessCache, Solver, SolverError, SolverState, Strategy, Turn, parse_history};
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// How many candidates a report lists
pub const SHOWN_CANDIDATES: usize = 10;

/// State of a rescued game
#[derive(Debug, Clone)]
pub struct RescueReport {
    pub turns_played: usize,
    pub remaining: usize,
    /// Up to `SHOWN_CANDIDATES` remaining candidates
    pub candidates: Vec<Word>,
    pub solved: bool,
    /// Next guess, absent once solved
    pub suggestion: Option<Word>,
    pub metrics: Option<GuessMetrics>,
    /// Turns left in the budget
    pub turns_left: usize,
}

/// Replay `history` into `solver` and suggest the next guess
///
/// # Errors
/// `SolverError::Exhausted` when the history is contradictory, which usually
/// means a feedback was mistyped.
pub fn rescue<S: Strategy>(
    solver: &mut Solver<'_, S>,
    cache: &FirstGuessCache,
    history: &[Turn],
) -> Result<RescueReport, SolverError> {
    solver.replay(history);

    let turns_played = solver.turns_played();
    let solved = solver.state() == SolverState::Solved;

    let suggestion = if solved {
        None
    } else {
        Some(cache.best_guess(solver, turns_played + 1)?)
    };

    let metrics = suggestion
        .filter(|_| solver.remaining() > 1)
        .map(|guess| calculate_metrics(&guess, solver.candidates()));

    Ok(RescueReport {
        turns_played,
        remaining: solver.remaining(),
        candidates: solver
            .candidates()
            .iter()
            .take(SHOWN_CANDIDATES)
            .copied()
            .collect(),
        solved,
        suggestion,
        metrics,
        turns_left: solver.max_turns().saturating_sub(turns_played),
    })
}

/// Read a history file: `word:feedback` tokens separated by whitespace,
/// commas or newlines. Lines starting with `#` are ignored.
///
/// # Errors
/// Unreadable file or a malformed token.
pub fn load_history(path: &Path) -> Result<Vec<Turn>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read history file {}", path.display()))?;

    let body: String = text
        .lines()
        .filter(|line| !line.trim_start().starts_with('#'))
        .collect::<Vec<_>>()
        .join("\n");

    parse_history(&body).with_context(|| format!("invalid history in {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Pattern;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(w).unwrap()).collect()
    }

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    fn solutions() -> Vec<Word> {
        words(&[
            "crane", "slate", "trace", "crate", "react", "grate", "irate", "stare", "roast",
            "toast", "beast",
        ])
    }

    #[test]
    fn fresh_rescue_suggests_opening() {
        let solutions = solutions();
        let mut solver = Solver::new(&solutions, None).unwrap();
        let cache = FirstGuessCache::new();

        let report = rescue(&mut solver, &cache, &[]).unwrap();

        assert_eq!(report.turns_played, 0);
        assert_eq!(report.remaining, solutions.len());
        assert_eq!(report.candidates.len(), SHOWN_CANDIDATES);
        assert_eq!(report.suggestion, Some(solver.best_guess(1).unwrap()));
        assert_eq!(cache.len(), 1);
        assert_eq!(report.turns_left, 6);
    }

    #[test]
    fn rescue_narrows_to_consistent_candidates() {
        let solutions = solutions();
        let mut solver = Solver::new(&solutions, None).unwrap();
        let history = [Turn::observe(word("crane"), &word("toast"))];

        let report = rescue(&mut solver, &FirstGuessCache::new(), &history).unwrap();

        assert_eq!(report.turns_played, 1);
        assert!(report.candidates.contains(&word("toast")));
        for candidate in &report.candidates {
            assert_eq!(Pattern::calculate(&word("crane"), candidate), history[0].pattern);
        }
        assert!(report.suggestion.is_some());
        assert!(!report.solved);
    }

    #[test]
    fn solved_history_has_no_suggestion() {
        let solutions = solutions();
        let mut solver = Solver::new(&solutions, None).unwrap();
        let history = [
            Turn::observe(word("crane"), &word("slate")),
            Turn::new(word("slate"), Pattern::PERFECT),
        ];

        let report = rescue(&mut solver, &FirstGuessCache::new(), &history).unwrap();

        assert!(report.solved);
        assert_eq!(report.suggestion, None);
        assert_eq!(report.candidates, [word("slate")]);
    }

    #[test]
    fn contradictory_history_is_exhausted() {
        let solutions = solutions();
        let mut solver = Solver::new(&solutions, None).unwrap();
        let history = parse_history("crane:ggggg").unwrap();
        let typo = parse_history("slate:22222").unwrap();

        let mut both = history.clone();
        both.extend(typo);

        let err = rescue(&mut solver, &FirstGuessCache::new(), &both).unwrap_err();
        assert_eq!(err, SolverError::Exhausted { turns_played: 2 });
        assert_eq!(solver.remaining(), 0);
    }

    #[test]
    fn load_history_skips_comments() {
        let path = std::env::temp_dir().join(format!(
            "wordle_rescue_history_{}.txt",
            std::process::id()
        ));
        fs::write(&path, "# monday\ncrane:--y-g\nslate=00222, irate:22222\n").unwrap();

        let history = load_history(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(history.len(), 3);
        assert_eq!(history[0].guess, word("crane"));
        assert!(history[2].pattern.is_perfect());
    }

    #[test]
    fn load_history_reports_bad_tokens() {
        let path = std::env::temp_dir().join(format!(
            "wordle_rescue_bad_history_{}.txt",
            std::process::id()
        ));
        fs::write(&path, "crane:--y-q\n").unwrap();

        let result = load_history(&path);
        fs::remove_file(&path).unwrap();

        assert!(result.is_err());
    }
}
