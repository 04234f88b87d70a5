//! Shannon entropy calculation for Wordle patterns
//!
//! Given a guess and set of candidates, computes the expected information gain.

use crate::core::{BucketCounts, Word, bucket_sizes};

/// Comprehensive metrics for evaluating a guess
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GuessMetrics {
    /// Shannon entropy (expected information gain in bits)
    pub entropy: f64,
    /// Expected number of remaining candidates after this guess
    pub expected_remaining: f64,
    /// Maximum partition size (worst-case remaining candidates)
    pub max_partition: usize,
    /// Number of distinct feedback patterns
    pub partitions: usize,
}

impl GuessMetrics {
    /// Derive all metrics from a bucket tally
    #[must_use]
    pub fn from_buckets(buckets: &BucketCounts) -> Self {
        let total = buckets.total();
        if total == 0 {
            return Self {
                entropy: 0.0,
                expected_remaining: 0.0,
                max_partition: 0,
                partitions: 0,
            };
        }

        let sum_sq: usize = buckets.sizes().map(|c| c * c).sum();

        Self {
            entropy: shannon_entropy(buckets),
            expected_remaining: sum_sq as f64 / total as f64,
            max_partition: buckets.max_bucket(),
            partitions: buckets.distinct(),
        }
    }
}

/// Calculate Shannon entropy for a guess against candidates
///
/// Returns the expected information gain in bits.
///
/// # Formula
/// H(X) = -Σ p(x) * log₂(p(x))
///
/// where p(x) is the probability of observing pattern x.
///
/// # Examples
/// ```
/// use wordle_rescue::core::Word;
/// use wordle_rescue::solver::entropy::calculate_entropy;
///
/// let guess = Word::new("crane").unwrap();
/// let candidates = [
///     Word::new("slate").unwrap(),
///     Word::new("irate").unwrap(),
/// ];
///
/// let entropy = calculate_entropy(&guess, &candidates);
/// assert!(entropy > 0.0 && entropy <= 1.0); // log2(2) = 1 bit max
/// ```
#[must_use]
pub fn calculate_entropy(guess: &Word, candidates: &[Word]) -> f64 {
    if candidates.is_empty() {
        return 0.0;
    }

    shannon_entropy(&bucket_sizes(guess, candidates))
}

/// Calculate Shannon entropy from pattern distribution
///
/// H = -Σ p * log₂(p)
///
/// Bucket sizes are summed in ascending order, so two guesses whose bucket
/// sizes form the same multiset score bit-identically and tie exactly.
///
/// # Properties
/// - Returns 0.0 for certain outcome (one pattern with p=1)
/// - Maximized for uniform distribution
/// - Always in range [0, log₂(n)] for n patterns
#[must_use]
pub fn shannon_entropy(buckets: &BucketCounts) -> f64 {
    let total = buckets.total() as f64;

    if total == 0.0 {
        return 0.0;
    }

    let mut sizes: Vec<usize> = buckets.sizes().collect();
    sizes.sort_unstable();

    sizes
        .into_iter()
        .map(|count| {
            let p = count as f64 / total;
            -p * p.log2()
        })
        .sum()
}

/// Calculate comprehensive metrics for a guess
///
/// Returns entropy, expected remaining candidates, and max partition size.
#[must_use]
pub fn calculate_metrics(guess: &Word, candidates: &[Word]) -> GuessMetrics {
    GuessMetrics::from_buckets(&bucket_sizes(guess, candidates))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(w).unwrap()).collect()
    }

    #[test]
    fn entropy_uniform_distribution() {
        // Every candidate lands in its own bucket: log2(4) = 2 bits
        let guess = Word::new("slate").unwrap();
        let candidates = words(&["slate", "zzzzz", "plate", "crane"]);
        let buckets = bucket_sizes(&guess, &candidates);
        assert_eq!(buckets.distinct(), 4);

        let entropy = shannon_entropy(&buckets);
        assert!((entropy - 2.0).abs() < 1e-9);
    }

    #[test]
    fn entropy_certain_outcome() {
        // All produce same pattern (all gray) = 0 bits
        let guess = Word::new("zzzzz").unwrap();
        let candidates = words(&["aaaaa", "bbbbb", "ccccc"]);

        let entropy = calculate_entropy(&guess, &candidates);
        assert!(entropy.abs() < 1e-12);
    }

    #[test]
    fn entropy_perfect_split() {
        // Two patterns, equal probability = 1 bit
        let guess = Word::new("slate").unwrap();
        let candidates = words(&["slate", "zzzzz"]);

        let entropy = calculate_entropy(&guess, &candidates);
        assert!((entropy - 1.0).abs() < 1e-12);
    }

    #[test]
    fn entropy_bounds() {
        let guess = Word::new("crane").unwrap();
        let candidates = words(&["slate", "irate", "trace", "raise", "crate", "grate"]);
        let buckets = bucket_sizes(&guess, &candidates);

        let entropy = shannon_entropy(&buckets);
        assert!(entropy >= 0.0);
        assert!(entropy <= (buckets.distinct() as f64).log2() + 1e-12);
    }

    #[test]
    fn entropy_empty_candidates() {
        let guess = Word::new("crane").unwrap();
        assert!(calculate_entropy(&guess, &[]).abs() < f64::EPSILON);
    }

    #[test]
    fn entropy_same_bucket_multiset_ties_exactly() {
        // Both guesses split into sizes {1, 2, 3}, but in different pattern order
        let candidates = words(&["aaaaa", "bxxxx", "byyyy", "czzzz", "cwwww", "cvvvv"]);
        let a = bucket_sizes(&Word::new("bcqqq").unwrap(), &candidates);
        let b = bucket_sizes(&Word::new("cbqqq").unwrap(), &candidates);

        assert_eq!(a.sizes().collect::<Vec<_>>(), [1, 3, 2]);
        assert_eq!(b.sizes().collect::<Vec<_>>(), [1, 2, 3]);
        assert_eq!(
            shannon_entropy(&a).to_bits(),
            shannon_entropy(&b).to_bits()
        );
    }

    #[test]
    fn metrics_real_words() {
        let guess = Word::new("crane").unwrap();
        let candidates = words(&["slate", "plate", "crate", "crane"]);

        let metrics = calculate_metrics(&guess, &candidates);

        // SLATE and PLATE share a bucket: sizes {2, 1, 1}
        assert_eq!(metrics.partitions, 3);
        assert_eq!(metrics.max_partition, 2);
        assert!((metrics.expected_remaining - 1.5).abs() < 1e-12);
        assert!((metrics.entropy - 1.5).abs() < 1e-12);
    }

    #[test]
    fn metrics_empty_candidates() {
        let guess = Word::new("crane").unwrap();
        let metrics = calculate_metrics(&guess, &[]);
        assert_eq!(metrics.max_partition, 0);
        assert_eq!(metrics.partitions, 0);
        assert!(metrics.entropy.abs() < f64::EPSILON);
    }
}
