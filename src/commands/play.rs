//! Play command
//!
//! The user guesses a random secret; the referee checks every guess and the
//! solver offers hints on request.

use super::prompt_line;
use crate::core::Word;
use crate::game::{Game, GameStatus};
use crate::output::formatters::colored_pattern;
use crate::solver::{FirstGuessCache, Solver, Strategy};
use anyhow::Result;
use colored::Colorize;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use std::io::{BufRead, Write};

/// Draw a secret from `solutions`, reproducibly when `seed` is given
#[must_use]
pub fn pick_secret(solutions: &[Word], seed: Option<u64>) -> Option<Word> {
    match seed {
        Some(seed) => solutions.choose(&mut StdRng::seed_from_u64(seed)).copied(),
        None => solutions.choose(&mut rand::rng()).copied(),
    }
}

/// Run one game on the terminal
///
/// The solver tracks the game so `hint` always reflects the feedback so far.
///
/// # Errors
///
/// Returns an error on I/O failure or if the solver cannot produce a hint.
pub fn run_play<S: Strategy, R: BufRead, W: Write>(
    game: &mut Game,
    solver: &mut Solver<'_, S>,
    cache: &FirstGuessCache,
    input: &mut R,
    output: &mut W,
) -> Result<GameStatus> {
    solver.reset();

    writeln!(output, "\n{}", "Wordle Rescue - Play".bright_cyan().bold())?;
    writeln!(
        output,
        "Guess the {}-turn secret. Type 'hint' for a suggestion, 'quit' to give up.{}\n",
        game.max_turns(),
        if game.hard_mode() { " Hard mode is on." } else { "" }
    )?;

    while game.status() == GameStatus::InProgress {
        let prompt = format!("Guess {}/{}", game.turns_used() + 1, game.max_turns());
        let Some(line) = prompt_line(input, output, &prompt)? else {
            break;
        };

        match line.to_lowercase().as_str() {
            "quit" | "q" | "exit" => break,
            "hint" | "h" => {
                let turn = game.turns_used() + 1;
                match cache.best_guess(solver, turn) {
                    Ok(hint) => writeln!(
                        output,
                        "Hint: {} ({} candidates left)",
                        hint.text().to_uppercase().bright_yellow(),
                        solver.remaining()
                    )?,
                    Err(e) => writeln!(output, "No hint available: {e}")?,
                }
            }
            text => {
                let guess = match Word::new(text) {
                    Ok(word) => word,
                    Err(e) => {
                        writeln!(output, "{}", format!("Invalid word: {e}").red())?;
                        continue;
                    }
                };

                match game.guess(guess) {
                    Ok(result) => {
                        solver.update(result.guess, result.pattern);
                        writeln!(output, "  {}", colored_pattern(&result.guess, result.pattern))?;
                    }
                    Err(e) => writeln!(output, "{}", e.to_string().red())?,
                }
            }
        }
    }

    match game.status() {
        GameStatus::Won => writeln!(
            output,
            "\n{}",
            format!("Solved in {}/{}!", game.turns_used(), game.max_turns())
                .green()
                .bold()
        )?,
        GameStatus::Lost | GameStatus::InProgress => writeln!(
            output,
            "\nThe word was {}",
            game.secret().text().to_uppercase().bright_yellow().bold()
        )?,
    }

    Ok(game.status())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(w).unwrap()).collect()
    }

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    fn play(game: &mut Game, solutions: &[Word], script: &str) -> (GameStatus, String) {
        let mut solver = Solver::new(solutions, None).unwrap();
        let mut input = Cursor::new(script.as_bytes().to_vec());
        let mut output = Vec::new();
        let status = run_play(
            game,
            &mut solver,
            &FirstGuessCache::new(),
            &mut input,
            &mut output,
        )
        .unwrap();
        (status, String::from_utf8(output).unwrap())
    }

    #[test]
    fn pick_secret_is_reproducible() {
        let solutions = words(&["crane", "slate", "irate", "trace", "toast"]);

        let first = pick_secret(&solutions, Some(7)).unwrap();
        assert_eq!(pick_secret(&solutions, Some(7)), Some(first));
        assert!(solutions.contains(&first));
        assert!(pick_secret(&[], Some(7)).is_none());
    }

    #[test]
    fn guessing_the_secret_wins() {
        let solutions = words(&["crane", "slate", "irate"]);
        let mut game = Game::new(word("slate")).with_allowed(&solutions);

        let (status, output) = play(&mut game, &solutions, "crane\nslate\n");

        assert_eq!(status, GameStatus::Won);
        assert!(output.contains("Solved in 2/6!"));
    }

    #[test]
    fn invalid_and_disallowed_words_do_not_use_turns() {
        let solutions = words(&["crane", "slate", "irate"]);
        let mut game = Game::new(word("irate")).with_allowed(&solutions);

        let (status, output) = play(&mut game, &solutions, "abc\nzzzzz\nirate\n");

        assert_eq!(status, GameStatus::Won);
        assert_eq!(game.turns_used(), 1);
        assert!(output.contains("Invalid word"));
        assert!(output.contains("not in the word list"));
    }

    #[test]
    fn hint_follows_feedback() {
        let solutions = words(&["crane", "slate", "irate"]);
        let mut game = Game::new(word("slate"));

        // After CRANE only SLATE fits
        let (_, output) = play(&mut game, &solutions, "crane\nhint\nquit\n");

        assert!(output.contains("SLATE"));
        assert!(output.contains("(1 candidates left)"));
    }

    #[test]
    fn quitting_reveals_the_secret() {
        let solutions = words(&["crane", "slate", "irate"]);
        let mut game = Game::new(word("irate"));

        let (status, output) = play(&mut game, &solutions, "quit\n");

        assert_eq!(status, GameStatus::InProgress);
        assert!(output.contains("The word was"));
        assert!(output.contains("IRATE"));
    }
}
