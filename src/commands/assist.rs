//! Interactive assistant
//!
//! Line-based helper for a game played elsewhere: suggests a guess, takes the
//! feedback, and lets the user undo mistakes or override the guess.

use super::prompt_line;
use crate::core::{Pattern, Word};
use crate::output::formatters::{colored_pattern, pattern_to_emoji};
use crate::solver::entropy::calculate_metrics;
use crate::solver::{FirstGuessCache, Solver, SolverState, Strategy, Turn};
use anyhow::Result;
use colored::Colorize;
use std::io::{BufRead, Write};

/// Outcome of an assist session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AssistSummary {
    pub games_started: usize,
    pub games_solved: usize,
}

enum Input {
    Quit,
    NewGame,
    Undo,
    Feedback(Turn),
    Invalid,
}

fn parse_input(line: &str, suggestion: Option<Word>) -> Input {
    let lower = line.to_lowercase();
    match lower.as_str() {
        "quit" | "q" | "exit" => Input::Quit,
        "new" | "n" => Input::NewGame,
        "undo" | "u" => Input::Undo,
        "win" | "correct" | "solved" => suggestion
            .map(|guess| Input::Feedback(Turn::new(guess, Pattern::PERFECT)))
            .unwrap_or(Input::Invalid),
        _ => {
            // "word feedback" overrides the suggested guess like "word:feedback"
            let override_text = lower.split_whitespace().collect::<Vec<_>>().join(":");
            if let Ok(turn) = override_text.parse::<Turn>() {
                return Input::Feedback(turn);
            }
            match (suggestion, lower.parse::<Pattern>()) {
                (Some(guess), Ok(pattern)) => Input::Feedback(Turn::new(guess, pattern)),
                _ => Input::Invalid,
            }
        }
    }
}

/// Run the interactive assistant until `quit` or end of input
///
/// # Errors
///
/// Returns an error on I/O failure or if the solver cannot suggest a guess
/// for a consistent state.
pub fn run_assist<S: Strategy, R: BufRead, W: Write>(
    solver: &mut Solver<'_, S>,
    cache: &FirstGuessCache,
    input: &mut R,
    output: &mut W,
) -> Result<AssistSummary> {
    writeln!(output, "\n{}", "Wordle Rescue - Assist Mode".bright_cyan().bold())?;
    writeln!(output, "After each guess, enter the feedback pattern:")?;
    writeln!(output, "  G/g/2/🟩 green, Y/y/1/🟨 yellow, -/_/0/⬛ gray")?;
    writeln!(output, "  'win' if the suggestion was right")?;
    writeln!(output, "  'WORD FEEDBACK' if you played a different word")?;
    writeln!(output, "Commands: 'undo', 'new', 'quit'\n")?;

    let mut summary = AssistSummary {
        games_started: 1,
        games_solved: 0,
    };
    // Set after a win until the next game receives input
    let mut between_games = false;
    solver.reset();

    loop {
        let turn = solver.turns_played() + 1;

        let suggestion = if solver.state() == SolverState::Exhausted {
            writeln!(
                output,
                "{}",
                "no words match, check your input".red().bold()
            )?;
            writeln!(output, "Type 'undo' to go back, or 'new' to start over.")?;
            None
        } else {
            let guess = cache.best_guess(solver, turn)?;
            print_suggestion(output, solver, guess, turn)?;
            Some(guess)
        };

        let Some(line) = prompt_line(input, output, "Feedback")? else {
            return Ok(summary);
        };

        match parse_input(&line, suggestion) {
            Input::Quit => return Ok(summary),
            Input::NewGame => {
                solver.reset();
                summary.games_started += 1;
                between_games = false;
                writeln!(output, "\nNew game started!\n")?;
            }
            Input::Undo => match solver.undo() {
                Some(undone) => writeln!(output, "Undone: {undone}\n")?,
                None => writeln!(output, "Nothing to undo!\n")?,
            },
            Input::Feedback(turn) => {
                if between_games {
                    summary.games_started += 1;
                    between_games = false;
                }
                solver.update(turn.guess, turn.pattern);
                if solver.state() == SolverState::Solved {
                    summary.games_solved += 1;
                    print_solved(output, solver)?;
                    solver.reset();
                    between_games = true;
                }
            }
            Input::Invalid => {
                writeln!(
                    output,
                    "Invalid input! Use G/Y/-, 'win', 'WORD FEEDBACK' or a command\n"
                )?;
            }
        }
    }
}

fn print_suggestion<S: Strategy, W: Write>(
    output: &mut W,
    solver: &Solver<'_, S>,
    guess: Word,
    turn: usize,
) -> Result<()> {
    let remaining = solver.remaining();
    writeln!(output, "{}", "─".repeat(60).cyan())?;
    writeln!(output, "Turn {turn}: {remaining} candidates remaining")?;
    writeln!(output, "{}", "─".repeat(60).cyan())?;
    writeln!(
        output,
        "Suggested guess: {}",
        guess.text().to_uppercase().bright_yellow().bold()
    )?;

    if remaining > 1 {
        let metrics = calculate_metrics(&guess, solver.candidates());
        writeln!(output, "   Entropy:          {:.3} bits", metrics.entropy)?;
        writeln!(
            output,
            "   Expected remain:  {:.1} candidates",
            metrics.expected_remaining
        )?;
        writeln!(output, "   Worst case:       {} candidates", metrics.max_partition)?;
    }

    if (2..=10).contains(&remaining) {
        writeln!(output, "Remaining candidates:")?;
        for candidate in solver.candidates() {
            writeln!(output, "  • {}", candidate.text().to_uppercase())?;
        }
    }
    writeln!(output)?;
    Ok(())
}

fn print_solved<S: Strategy, W: Write>(output: &mut W, solver: &Solver<'_, S>) -> Result<()> {
    let turns = solver.turns_played();
    writeln!(output, "\n{}", "═".repeat(60).bright_cyan())?;
    writeln!(
        output,
        "{}",
        format!(
            "Solved in {turns} {}!",
            if turns == 1 { "guess" } else { "guesses" }
        )
        .bright_green()
        .bold()
    )?;
    for (i, turn) in solver.history().iter().enumerate() {
        writeln!(
            output,
            "  {}. {} {}",
            i + 1,
            colored_pattern(&turn.guess, turn.pattern),
            pattern_to_emoji(turn.pattern)
        )?;
    }
    writeln!(output, "{}", "═".repeat(60).bright_cyan())?;
    writeln!(output, "\nNew game started!\n")?;
    Ok(())
}
