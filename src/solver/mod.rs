//! Wordle solving algorithms
//!
//! Scoring strategies, guess selection and the stateful `Solver` that narrows
//! candidates as feedback arrives.

mod cache;
mod engine;
pub mod entropy;
pub mod selection;
pub mod strategy;

pub use cache::FirstGuessCache;
pub use engine::{
    DEFAULT_MAX_TURNS, Solver, SolverError, SolverState, Turn, TurnParseError, parse_history,
};
pub use entropy::{GuessMetrics, calculate_entropy, calculate_metrics};
pub use selection::{ScoredGuess, rank_guesses, select_guess};
pub use strategy::{
    EntropyStrategy, ExpectedSizeStrategy, FrequencyStrategy, HybridStrategy, MinimaxStrategy,
    Strategy, StrategyType, TurnContext,
};
