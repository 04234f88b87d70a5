//! Core domain types for Wordle
//!
//! Words, feedback patterns and the bulk operations over candidate lists.
//! Everything here is pure and stateless.

mod feedback;
mod pattern;
mod word;

pub use feedback::{BucketCounts, bucket_by_pattern, bucket_sizes, filter_candidates};
pub use pattern::{Pattern, PatternError, Tile};
pub use word::{ALPHABET_SIZE, WORD_LENGTH, Word, WordError};
