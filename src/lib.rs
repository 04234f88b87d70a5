//! Wordle Rescue
//!
//! An entropy-driven Wordle solver whose state can be rebuilt from any
//! guess/feedback history, so a game already in progress can be rescued.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use wordle_rescue::core::{Pattern, Word};
//! use wordle_rescue::solver::Solver;
//!
//! let solutions: Vec<Word> = ["crane", "slate", "irate"]
//!     .iter()
//!     .map(|w| Word::new(w).unwrap())
//!     .collect();
//!
//! let mut solver = Solver::new(&solutions, None).unwrap();
//! let guess = solver.best_guess(1).unwrap();
//!
//! // Feedback observed in the real game
//! let pattern = Pattern::calculate(&guess, &Word::new("slate").unwrap());
//! solver.update(guess, pattern);
//! println!("{} candidates left", solver.remaining());
//! ```

// Core domain types
pub mod core;

// Solving algorithms
pub mod solver;

// Game referee and hard-mode rules
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
