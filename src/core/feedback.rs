//! Bulk feedback operations over candidate lists
//!
//! `bucket_sizes` is the hot loop of guess scoring: it runs once per
//! (guess, remaining candidates) pair, so it tallies into a fixed 243-slot
//! array instead of a map.

use super::{Pattern, Word};
use rustc_hash::FxHashMap;

/// Count of candidates per feedback pattern for one guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BucketCounts {
    counts: [u32; Pattern::COUNT],
    total: usize,
}

impl BucketCounts {
    /// Number of candidates that produce `pattern`
    #[inline]
    #[must_use]
    pub const fn get(&self, pattern: Pattern) -> usize {
        self.counts[pattern.index()] as usize
    }

    /// Total number of candidates tallied
    #[inline]
    #[must_use]
    pub const fn total(&self) -> usize {
        self.total
    }

    /// Number of non-empty buckets
    #[must_use]
    pub fn distinct(&self) -> usize {
        self.counts.iter().filter(|&&c| c > 0).count()
    }

    /// Size of the largest bucket (worst case remaining)
    #[must_use]
    pub fn max_bucket(&self) -> usize {
        self.counts.iter().copied().max().unwrap_or(0) as usize
    }

    /// Non-empty buckets in pattern order
    pub fn iter(&self) -> impl Iterator<Item = (Pattern, usize)> + '_ {
        self.counts
            .iter()
            .enumerate()
            .filter(|&(_, &count)| count > 0)
            .map(|(idx, &count)| (Pattern::new(idx as u8), count as usize))
    }

    /// Sizes of the non-empty buckets in pattern order
    pub fn sizes(&self) -> impl Iterator<Item = usize> + '_ {
        self.counts
            .iter()
            .filter(|&&count| count > 0)
            .map(|&count| count as usize)
    }
}

/// Tally the feedback patterns `guess` produces against every candidate
///
/// # Examples
/// ```
/// use wordle_rescue::core::{Pattern, Word, bucket_sizes};
///
/// let guess = Word::new("crane").unwrap();
/// let candidates = [
///     Word::new("crane").unwrap(),
///     Word::new("slate").unwrap(),
///     Word::new("plate").unwrap(),
/// ];
///
/// let buckets = bucket_sizes(&guess, &candidates);
/// assert_eq!(buckets.total(), 3);
/// assert_eq!(buckets.get(Pattern::PERFECT), 1);
/// assert_eq!(buckets.distinct(), 2); // SLATE and PLATE look alike
/// ```
#[must_use]
pub fn bucket_sizes(guess: &Word, candidates: &[Word]) -> BucketCounts {
    let mut counts = [0u32; Pattern::COUNT];

    for candidate in candidates {
        counts[Pattern::calculate(guess, candidate).index()] += 1;
    }

    BucketCounts {
        counts,
        total: candidates.len(),
    }
}

/// Group candidates by the pattern they produce with `guess`
///
/// Allocates per bucket; use `bucket_sizes` when only counts are needed.
#[must_use]
pub fn bucket_by_pattern<'c>(
    guess: &Word,
    candidates: &'c [Word],
) -> FxHashMap<Pattern, Vec<&'c Word>> {
    let mut groups: FxHashMap<Pattern, Vec<&'c Word>> = FxHashMap::default();

    for candidate in candidates {
        groups
            .entry(Pattern::calculate(guess, candidate))
            .or_default()
            .push(candidate);
    }

    groups
}

/// Candidates consistent with observing `pattern` after guessing `guess`
///
/// The iterator is lazy and preserves candidate order. Cloning it restarts
/// the scan from the current position without sharing state.
///
/// # Examples
/// ```
/// use wordle_rescue::core::{Pattern, Word, filter_candidates};
///
/// let candidates: Vec<Word> = ["crate", "grate", "slate", "trace"]
///     .iter()
///     .map(|w| Word::new(w).unwrap())
///     .collect();
/// let guess = Word::new("crane").unwrap();
/// let observed = Pattern::calculate(&guess, &Word::new("grate").unwrap());
///
/// let remaining: Vec<&str> = filter_candidates(&candidates, &guess, observed)
///     .map(Word::text)
///     .collect();
/// assert_eq!(remaining, ["grate"]);
/// ```
pub fn filter_candidates<'c>(
    candidates: &'c [Word],
    guess: &Word,
    pattern: Pattern,
) -> impl Iterator<Item = &'c Word> + Clone + 'c {
    let guess = *guess;
    candidates
        .iter()
        .filter(move |candidate| Pattern::calculate(&guess, candidate) == pattern)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(w).unwrap()).collect()
    }

    #[test]
    fn bucket_sizes_sum_to_candidate_count() {
        let candidates = words(&["slate", "irate", "trace", "raise", "crane", "world"]);
        let guess = Word::new("crane").unwrap();

        let buckets = bucket_sizes(&guess, &candidates);

        assert_eq!(buckets.total(), candidates.len());
        assert_eq!(buckets.sizes().sum::<usize>(), candidates.len());
        assert_eq!(
            buckets.iter().map(|(_, c)| c).sum::<usize>(),
            candidates.len()
        );
    }

    #[test]
    fn bucket_sizes_perfect_bucket_at_most_one() {
        let candidates = words(&["slate", "irate", "crane", "trace"]);
        let guess = Word::new("crane").unwrap();

        let buckets = bucket_sizes(&guess, &candidates);
        assert_eq!(buckets.get(Pattern::PERFECT), 1);

        let outsider = Word::new("pious").unwrap();
        assert_eq!(bucket_sizes(&outsider, &candidates).get(Pattern::PERFECT), 0);
    }

    #[test]
    fn bucket_sizes_all_same_pattern() {
        let candidates = words(&["aaaaa", "bbbbb", "ccccc"]);
        let guess = Word::new("zzzzz").unwrap();

        let buckets = bucket_sizes(&guess, &candidates);
        assert_eq!(buckets.distinct(), 1);
        assert_eq!(buckets.max_bucket(), 3);
        assert_eq!(buckets.get(Pattern::new(0)), 3);
    }

    #[test]
    fn bucket_sizes_empty_candidates() {
        let guess = Word::new("crane").unwrap();
        let buckets = bucket_sizes(&guess, &[]);
        assert_eq!(buckets.total(), 0);
        assert_eq!(buckets.distinct(), 0);
        assert_eq!(buckets.max_bucket(), 0);
    }

    #[test]
    fn bucket_by_pattern_matches_sizes() {
        let candidates = words(&["slate", "plate", "crate", "crane", "world"]);
        let guess = Word::new("crane").unwrap();

        let groups = bucket_by_pattern(&guess, &candidates);
        let sizes = bucket_sizes(&guess, &candidates);

        assert_eq!(groups.len(), sizes.distinct());
        for (pattern, members) in &groups {
            assert_eq!(members.len(), sizes.get(*pattern));
        }
    }

    #[test]
    fn filter_candidates_is_sound_and_stable() {
        let candidates = words(&["crate", "slate", "grate", "trace", "irate", "plate"]);
        let guess = Word::new("crane").unwrap();
        let secret = Word::new("slate").unwrap();
        let observed = Pattern::calculate(&guess, &secret);

        let filtered: Vec<Word> = filter_candidates(&candidates, &guess, observed)
            .copied()
            .collect();

        assert!(filtered.contains(&secret));
        for c in &filtered {
            assert_eq!(Pattern::calculate(&guess, c), observed);
        }

        // Stable: same relative order as the input
        let positions: Vec<usize> = filtered
            .iter()
            .map(|w| candidates.iter().position(|c| c == w).unwrap())
            .collect();
        assert!(positions.windows(2).all(|p| p[0] < p[1]));
    }

    #[test]
    fn filter_candidates_is_idempotent() {
        let candidates = words(&["crate", "slate", "grate", "trace", "irate", "plate"]);
        let guess = Word::new("trace").unwrap();
        let observed = Pattern::calculate(&guess, &Word::new("grate").unwrap());

        let once: Vec<Word> = filter_candidates(&candidates, &guess, observed)
            .copied()
            .collect();
        let twice: Vec<Word> = filter_candidates(&once, &guess, observed)
            .copied()
            .collect();

        assert_eq!(once, twice);
    }

    #[test]
    fn filter_candidates_is_restartable() {
        let candidates = words(&["crate", "grate", "irate"]);
        let guess = Word::new("crane").unwrap();
        let observed = Pattern::calculate(&guess, &Word::new("grate").unwrap());

        let iter = filter_candidates(&candidates, &guess, observed);
        let first: Vec<&Word> = iter.clone().collect();
        let second: Vec<&Word> = iter.collect();

        assert_eq!(first, second);
        assert_eq!(first.len(), 2); // GRATE and IRATE look alike to CRANE
    }

    #[test]
    fn filter_candidates_impossible_pattern_yields_nothing() {
        let candidates = words(&["crate", "grate", "irate"]);
        let guess = Word::new("zzzzz").unwrap();

        assert_eq!(
            filter_candidates(&candidates, &guess, Pattern::PERFECT).count(),
            0
        );
    }
}
