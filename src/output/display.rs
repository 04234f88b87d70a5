//! Display functions for command results

use super::formatters::{colored_pattern, entropy_bar, pattern_to_emoji};
use crate::commands::{AnalysisResult, BenchmarkResult, RescueReport, SolveResult};
use colored::Colorize;

/// Print the result of solving a word
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {}",
        result.target.text().to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.steps.iter().enumerate() {
        println!(
            "\nTurn {}: {} {}",
            i + 1,
            colored_pattern(&step.word, step.pattern),
            pattern_to_emoji(step.pattern)
        );

        if verbose {
            println!(
                "  Candidates: {} → {}",
                step.candidates_before, step.candidates_after
            );

            if let Some(metrics) = step.metrics {
                println!("  Entropy:    {:.3} bits", metrics.entropy);
                println!("  Expected:   {:.1} candidates", metrics.expected_remaining);
            }
            if let Some(gained) = step.information_gained() {
                println!(
                    "  Info gained: {gained:.3} bits ({:.1}x reduction)",
                    gained.exp2()
                );
            }
        }
    }

    println!();
    if result.success {
        println!(
            "{}",
            format!("✅ Solved in {} guesses!", result.steps.len())
                .green()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!("❌ Failed to solve in {} guesses", result.steps.len())
                .red()
                .bold()
        );
    }
}

/// Print the state of a rescued game
pub fn print_rescue_report(report: &RescueReport) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "After {} {}: {} candidates remaining",
        report.turns_played,
        if report.turns_played == 1 { "turn" } else { "turns" },
        report.remaining.to_string().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    if report.solved {
        println!("{}", "Already solved!".green().bold());
        return;
    }

    let list: Vec<String> = report
        .candidates
        .iter()
        .map(|w| w.text().to_uppercase())
        .collect();
    let hidden = report.remaining.saturating_sub(report.candidates.len());
    if hidden == 0 {
        println!("Candidates: {}", list.join(", "));
    } else {
        println!("Candidates: {}, ... ({hidden} more)", list.join(", "));
    }

    if let Some(suggestion) = report.suggestion {
        println!(
            "\nNext guess: {}",
            suggestion.text().to_uppercase().bright_green().bold()
        );
    }
    if let Some(metrics) = report.metrics {
        println!("   Entropy:          {:.3} bits", metrics.entropy);
        println!(
            "   Expected remain:  {:.1} candidates",
            metrics.expected_remaining
        );
        println!("   Worst case:       {} candidates", metrics.max_partition);
    }

    if report.turns_left == 0 {
        println!("{}", "No turns left in the budget.".yellow());
    } else {
        println!("   Turns left:       {}", report.turns_left);
    }
}

/// Print the result of word analysis
pub fn print_analysis_result(result: &AnalysisResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "ENTROPY ANALYSIS:".bright_cyan().bold(),
        result.word.text().to_uppercase().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    let bar = entropy_bar(result.metrics.entropy, 30);

    println!("\n📊 Against {} possible answers:", result.total_candidates);
    println!(
        "   Entropy:     [{}] {}",
        bar.green(),
        format!("{:.3} bits", result.metrics.entropy).bright_yellow()
    );
    println!("   Info gain:   {:.1}x reduction", result.expected_reduction);
    println!(
        "   Expected:    {:.1} candidates remain",
        result.metrics.expected_remaining
    );
    println!(
        "   Worst case:  {} candidates in {} groups",
        result.metrics.max_partition, result.metrics.partitions
    );
    if result.is_candidate {
        println!("   {}", "Could be the answer".green());
    }

    println!("\n🧩 {}", "Largest groups:".bright_cyan().bold());
    for (pattern, members) in &result.largest_buckets {
        let shown: Vec<String> = members
            .iter()
            .take(8)
            .map(|w| w.text().to_uppercase())
            .collect();
        let more = if members.len() > shown.len() { ", ..." } else { "" };
        println!(
            "   {} {:4}  {}{more}",
            pattern_to_emoji(*pattern),
            members.len(),
            shown.join(", ")
        );
    }

    if !result.top_guesses.is_empty() {
        println!("\n🏆 {}", "Top guesses:".bright_cyan().bold());
        for (rank, guess) in result.top_guesses.iter().enumerate() {
            let marker = if guess.is_candidate { "*" } else { " " };
            println!(
                "   {:2}. {}{marker} {:.4}",
                rank + 1,
                guess.word.text().to_uppercase(),
                guess.score
            );
        }
        println!("   (* could be the answer)");
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult, max_turns: usize) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} ({}) ",
        "BENCHMARK RESULTS".bright_cyan().bold(),
        result.strategy
    );
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    if let Some(first) = result.first_guess {
        println!("   First guess:      {}", first.text().to_uppercase());
    }
    println!("   Words tested:     {}", result.total_words);
    println!(
        "   Solved:           {} ({:.1}%)",
        result.solved,
        result.success_rate()
    );
    println!(
        "   Average guesses:  {}",
        format!("{:.3}", result.average_guesses)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Best case:        {}",
        format!("{}", result.min_guesses).green()
    );
    println!(
        "   Worst case:       {}",
        format!("{}", result.max_guesses).yellow()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Words/second:     {:.1}", result.words_per_second);

    if result.total_words == 0 {
        return;
    }

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    for guess_count in 1..=max_turns {
        let count = result.distribution.get(&guess_count).copied().unwrap_or(0);
        print_distribution_row(&guess_count.to_string(), count, result.total_words);
    }
    if !result.failed.is_empty() {
        print_distribution_row("X", result.failed.len(), result.total_words);

        let failed: Vec<String> = result
            .failed
            .iter()
            .take(20)
            .map(|w| w.text().to_uppercase())
            .collect();
        println!("\n❌ {} {}", "Failed:".red().bold(), failed.join(", "));
    }
}

fn print_distribution_row(label: &str, count: usize, total: usize) {
    let pct = (count as f64 / total as f64) * 100.0;
    let bar_width = (pct / 2.5) as usize;
    let bar = format!(
        "{}{}",
        "█".repeat(bar_width).green(),
        "░".repeat(40_usize.saturating_sub(bar_width)).bright_black()
    );
    println!("   {label}: {bar} {count:4} ({pct:5.1}%)");
}

/// Print strategies side by side, best first
pub fn print_comparison(results: &[BenchmarkResult]) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "STRATEGY COMPARISON".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!(
        "\n   {:<14} {:>8} {:>8} {:>6} {:>6} {:>9}",
        "Strategy", "Average", "Solved", "Worst", "Open", "Time"
    );
    println!("   {}", "─".repeat(56).bright_black());

    for (rank, result) in results.iter().enumerate() {
        let name = format!("{:<14}", result.strategy);
        let name = if rank == 0 {
            name.bright_green().bold()
        } else {
            name.normal()
        };
        println!(
            "   {name} {:>8.3} {:>7.1}% {:>6} {:>6} {:>8.2}s",
            result.average_guesses,
            result.success_rate(),
            result.max_guesses,
            result
                .first_guess
                .map_or_else(|| "-".to_string(), |w| w.text().to_uppercase()),
            result.duration.as_secs_f64()
        );
    }
}
