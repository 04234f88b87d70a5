//! Command implementations
//!
//! Each command returns a plain result struct; printing lives in `output`.
//! Interactive commands take their input and output streams as parameters.

pub mod analyze;
pub mod assist;
pub mod benchmark;
pub mod play;
pub mod rescue;
pub mod solve;

pub use analyze::{AnalysisResult, analyze_word};
pub use assist::run_assist;
pub use benchmark::{
    BenchmarkConfig, BenchmarkResult, compare_strategies, run_benchmark, sample_targets,
};
pub use play::{pick_secret, run_play};
pub use rescue::{RescueReport, load_history, rescue};
pub use solve::{GuessStep, SolveResult, solve_word};

use crate::core::Word;
use crate::solver::{DEFAULT_MAX_TURNS, Solver, SolverError, StrategyType};
use std::io::{self, BufRead, Write};

/// Solver settings shared by every command
#[derive(Debug, Clone, Copy)]
pub struct SolverConfig {
    pub strategy: StrategyType,
    pub hard_mode: bool,
    pub max_turns: usize,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            strategy: StrategyType::default(),
            hard_mode: false,
            max_turns: DEFAULT_MAX_TURNS,
        }
    }
}

impl SolverConfig {
    /// Build a solver over `solutions` with this configuration
    ///
    /// # Errors
    /// Invalid word lists, see [`Solver::with_strategy`].
    pub fn build<'a>(
        &self,
        solutions: &'a [Word],
        guess_pool: Option<&'a [Word]>,
    ) -> Result<Solver<'a, StrategyType>, SolverError> {
        Ok(Solver::with_strategy(self.strategy, solutions, guess_pool)?
            .with_hard_mode(self.hard_mode)
            .with_max_turns(self.max_turns))
    }
}

/// Print a prompt and read one trimmed line
///
/// Returns `None` at end of input.
pub(crate) fn prompt_line<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> io::Result<Option<String>> {
    write!(output, "{prompt}: ")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
