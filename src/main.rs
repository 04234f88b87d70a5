//! Wordle Rescue - CLI
//!
//! Entropy-driven Wordle solver that can pick up a game already in progress.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::io;
use std::path::PathBuf;
use wordle_rescue::{
    commands::{
        BenchmarkConfig, SolverConfig, analyze_word, compare_strategies, load_history,
        pick_secret, rescue, run_assist, run_benchmark, run_play, sample_targets, solve_word,
    },
    core::Word,
    game::Game,
    output::{
        print_analysis_result, print_benchmark_result, print_comparison, print_rescue_report,
        print_solve_result,
    },
    solver::{
        DEFAULT_MAX_TURNS, FirstGuessCache, SolverError, Strategy, StrategyType, parse_history,
    },
    wordlists::{ListOrigin, WordLists, WordSource},
};

#[derive(Parser)]
#[command(
    name = "wordle_rescue",
    about = "Entropy-driven Wordle solver: suggests guesses and rescues games in progress",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Strategy: entropy (default), expected-size, minimax, hybrid, frequency
    #[arg(short, long, global = true, default_value = "entropy", value_parser = StrategyType::from_name)]
    strategy: StrategyType,

    /// Solution list, one word per line (default: embedded list)
    #[arg(long, global = true)]
    solutions: Option<PathBuf>,

    /// Extra allowed guesses, one word per line (default: embedded list)
    #[arg(long, global = true)]
    allowed: Option<PathBuf>,

    /// Only guess words that could be the answer
    #[arg(long, global = true)]
    solutions_only: bool,

    /// Every guess must reuse all revealed hints
    #[arg(long, global = true)]
    hard_mode: bool,

    /// Turn budget per game
    #[arg(short = 'T', long, global = true, default_value_t = DEFAULT_MAX_TURNS)]
    max_turns: usize,

    /// Suppress progress bars and notes
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve a known target word and show every step
    Solve {
        /// The target word to solve
        word: String,

        /// Show candidate counts and information gained per turn
        #[arg(short, long)]
        verbose: bool,

        /// Force the opening guess
        #[arg(short, long)]
        first: Option<String>,
    },

    /// Resume a game from its guesses so far, e.g. `crane:--y-g slate:00222`
    Rescue {
        /// Turns as WORD:FEEDBACK (feedback: G/Y/-, 2/1/0 or tile emoji)
        turns: Vec<String>,

        /// Read turns from a file (one or more per line, `#` comments)
        #[arg(long)]
        file: Option<PathBuf>,
    },

    /// Interactive helper for a game played elsewhere (default)
    Assist,

    /// Play against a random secret with solver hints
    Play {
        /// Seed for a reproducible secret
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Analyze a word against the full candidate set
    Analyze {
        /// Word to analyze
        word: String,

        /// Number of ranked guesses to show
        #[arg(short = 'n', long, default_value = "10")]
        top: usize,
    },

    /// Benchmark solver performance
    Benchmark {
        /// Number of random words to test (default: every solution)
        #[arg(short = 'n', long)]
        sample: Option<usize>,

        /// Seed for the sample
        #[arg(long)]
        seed: Option<u64>,

        /// Force the opening guess
        #[arg(short, long)]
        first: Option<String>,
    },

    /// Benchmark several strategies on the same words
    Compare {
        /// Comma-separated strategies (default: all)
        #[arg(long, value_delimiter = ',', value_parser = StrategyType::from_name)]
        strategies: Vec<StrategyType>,

        /// Number of random words to test (default: every solution)
        #[arg(short = 'n', long)]
        sample: Option<usize>,

        /// Seed for the sample
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let lists = WordLists::resolve(&WordSource {
        solutions: cli.solutions.clone(),
        allowed: cli.allowed.clone(),
        ..WordSource::default()
    })?;

    if !cli.quiet && lists.solutions_origin == ListOrigin::SystemDictionary {
        eprintln!(
            "{}",
            format!(
                "note: using {} five-letter words from the system dictionary",
                lists.solutions.len()
            )
            .yellow()
        );
    }

    if !cli.quiet && !cli.solutions_only && !lists.has_extended_pool() {
        eprintln!(
            "{}",
            "note: no allowed guesses beyond the solutions, guessing from the solutions only"
                .yellow()
        );
    }

    let pool = if cli.solutions_only {
        lists.solutions_only()
    } else {
        lists.guess_pool()
    };
    let config = SolverConfig {
        strategy: cli.strategy,
        hard_mode: cli.hard_mode,
        max_turns: cli.max_turns,
    };
    let mut solver = config.build(&lists.solutions, Some(pool.as_slice()))?;
    let cache = FirstGuessCache::new();

    // Default to Assist mode if no command given
    match cli.command.unwrap_or(Commands::Assist) {
        Commands::Solve {
            word,
            verbose,
            first,
        } => {
            let target = Word::new(&word)?;
            let first = first.as_deref().map(Word::new).transpose()?;
            let result = solve_word(target, &mut solver, first)?;
            print_solve_result(&result, verbose);
        }
        Commands::Rescue { turns, file } => {
            let mut history = match file {
                Some(path) => load_history(&path)?,
                None => Vec::new(),
            };
            history.extend(parse_history(&turns.join(" ")).context("invalid turn")?);

            match rescue(&mut solver, &cache, &history) {
                Ok(report) => print_rescue_report(&report),
                Err(SolverError::Exhausted { .. }) => bail!("no words match, check your input"),
                Err(e) => return Err(e.into()),
            }
        }
        Commands::Assist => {
            let summary = run_assist(
                &mut solver,
                &cache,
                &mut io::stdin().lock(),
                &mut io::stdout(),
            )?;
            if !cli.quiet {
                println!(
                    "\nSolved {} of {} games. Goodbye!",
                    summary.games_solved, summary.games_started
                );
            }
        }
        Commands::Play { seed } => {
            let secret = pick_secret(&lists.solutions, seed).context("solution list is empty")?;
            let mut game = Game::new(secret)
                .with_max_turns(cli.max_turns)
                .with_hard_mode(cli.hard_mode)
                .with_allowed(&pool);

            run_play(
                &mut game,
                &mut solver,
                &cache,
                &mut io::stdin().lock(),
                &mut io::stdout(),
            )?;
        }
        Commands::Analyze { word, top } => {
            let word = Word::new(&word)?;
            let result = analyze_word(
                word,
                solver.guess_pool(),
                &lists.solutions,
                solver.strategy(),
                top,
            )?;
            print_analysis_result(&result);
        }
        Commands::Benchmark {
            sample,
            seed,
            first,
        } => {
            let targets = sample_targets(&lists.solutions, sample, seed);
            let bench = BenchmarkConfig {
                forced_first: first.as_deref().map(Word::new).transpose()?,
                show_progress: !cli.quiet,
            };

            if !cli.quiet {
                println!(
                    "Running benchmark on {} words with {}...",
                    targets.len(),
                    cli.strategy.name().bright_yellow()
                );
            }

            let result = run_benchmark(&solver, &cache, &targets, &bench)?;
            print_benchmark_result(&result, cli.max_turns);
        }
        Commands::Compare {
            strategies,
            sample,
            seed,
        } => {
            let strategies = if strategies.is_empty() {
                StrategyType::ALL.to_vec()
            } else {
                strategies
            };
            let targets = sample_targets(&lists.solutions, sample, seed);
            let bench = BenchmarkConfig {
                forced_first: None,
                show_progress: !cli.quiet,
            };

            if !cli.quiet {
                println!(
                    "Comparing {} strategies on {} words...",
                    strategies.len(),
                    targets.len()
                );
            }

            let results = compare_strategies(
                &strategies,
                config,
                &lists.solutions,
                Some(pool.as_slice()),
                &targets,
                &bench,
            )?;
            print_comparison(&results);
        }
    }

    Ok(())
}
