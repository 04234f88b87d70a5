//! Word analysis command
//!
//! Analyzes the information content of a specific word against the current
//! candidates and ranks the best alternatives.

use crate::core::{Pattern, Word, bucket_by_pattern};
use crate::solver::entropy::{GuessMetrics, calculate_metrics};
use crate::solver::{DEFAULT_MAX_TURNS, ScoredGuess, Strategy, TurnContext, rank_guesses};
use anyhow::{Result, bail};

/// How many of the largest feedback groups an analysis keeps
pub const SHOWN_BUCKETS: usize = 5;

/// Result of analyzing a word
#[derive(Debug, Clone)]
pub struct AnalysisResult {
    pub word: Word,
    pub metrics: GuessMetrics,
    /// 2^entropy: the effective number of equally likely outcomes
    pub expected_reduction: f64,
    pub total_candidates: usize,
    /// Whether the word could itself be the answer
    pub is_candidate: bool,
    /// Largest feedback groups, biggest first
    pub largest_buckets: Vec<(Pattern, Vec<Word>)>,
    /// Best guesses by the active strategy
    pub top_guesses: Vec<ScoredGuess>,
}

/// Analyze `word` against `candidates` and rank the `top` best guesses from
/// `pool`
///
/// # Errors
///
/// Returns an error if the word is not in the guess pool or there are no
/// candidates.
pub fn analyze_word<S: Strategy>(
    word: Word,
    pool: &[Word],
    candidates: &[Word],
    strategy: &S,
    top: usize,
) -> Result<AnalysisResult> {
    if !pool.contains(&word) {
        bail!("'{word}' is not in the word list");
    }
    if candidates.is_empty() {
        bail!("no candidates to analyze against");
    }

    let metrics = calculate_metrics(&word, candidates);

    let mut buckets: Vec<(Pattern, Vec<Word>)> = bucket_by_pattern(&word, candidates)
        .into_iter()
        .map(|(pattern, members)| (pattern, members.into_iter().copied().collect()))
        .collect();
    buckets.sort_by(|(pa, a), (pb, b)| b.len().cmp(&a.len()).then(pa.cmp(pb)));
    buckets.truncate(SHOWN_BUCKETS);

    let ctx = TurnContext::new(1, DEFAULT_MAX_TURNS);
    let top_guesses = rank_guesses(strategy, pool, candidates, ctx, top);

    Ok(AnalysisResult {
        word,
        metrics,
        expected_reduction: metrics.entropy.exp2(),
        total_candidates: candidates.len(),
        is_candidate: candidates.contains(&word),
        largest_buckets: buckets,
        top_guesses,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::{EntropyStrategy, MinimaxStrategy};

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(w).unwrap()).collect()
    }

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    fn candidates() -> Vec<Word> {
        words(&["irate", "crate", "grate", "slate", "trace", "react"])
    }

    fn candidates_with(extra: &str) -> Vec<Word> {
        let mut pool = candidates();
        pool.push(word(extra));
        pool
    }

    #[test]
    fn analyze_valid_word() {
        let candidates = candidates();
        let pool = candidates_with("crane");
        let result = analyze_word(word("crane"), &pool, &candidates, &EntropyStrategy, 3).unwrap();

        assert_eq!(result.word, word("crane"));
        assert!(result.metrics.entropy > 0.0);
        assert!(result.expected_reduction >= 1.0);
        assert_eq!(result.total_candidates, 6);
        assert!(!result.is_candidate);
        assert_eq!(result.top_guesses.len(), 3);
    }

    #[test]
    fn analyze_word_outside_pool() {
        let candidates = candidates();
        let result = analyze_word(word("zzzzz"), &candidates, &candidates, &EntropyStrategy, 3);
        assert!(result.is_err());
    }

    #[test]
    fn analyze_without_candidates() {
        let pool = candidates();
        assert!(analyze_word(word("crate"), &pool, &[], &EntropyStrategy, 3).is_err());
    }

    #[test]
    fn largest_buckets_come_first() {
        let candidates = candidates();
        let pool = candidates_with("crane");
        let result = analyze_word(word("crane"), &pool, &candidates, &EntropyStrategy, 1).unwrap();

        // CRANE cannot tell IRATE from GRATE
        let (pattern, members) = &result.largest_buckets[0];
        assert_eq!(members, &words(&["irate", "grate"]));
        assert_eq!(pattern.value(), 74);
        assert_eq!(result.metrics.max_partition, 2);

        let sizes: Vec<usize> = result.largest_buckets.iter().map(|(_, m)| m.len()).collect();
        assert!(sizes.windows(2).all(|pair| pair[0] >= pair[1]));
        let total: usize = sizes.iter().sum();
        assert_eq!(total, candidates.len());
    }

    #[test]
    fn entropy_properties() {
        let candidates = candidates();
        let result =
            analyze_word(word("slate"), &candidates, &candidates, &MinimaxStrategy, 10).unwrap();

        assert!(result.metrics.entropy >= 0.0);
        assert!(result.metrics.entropy <= (candidates.len() as f64).log2());
        assert!(result.metrics.expected_remaining <= candidates.len() as f64);
        assert!(result.is_candidate);
        assert_eq!(result.top_guesses.len(), candidates.len());
    }
}
