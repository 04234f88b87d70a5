//! Word list loading utilities
//!
//! Every loader keeps the first occurrence of a word and drops later
//! duplicates, so the result can be handed straight to a `Solver`.

use crate::core::Word;
use rustc_hash::FxHashSet;
use std::fs;
use std::io;
use std::path::Path;

/// Load words from a file, one per line
///
/// Lines are trimmed and lowercased; blank and invalid lines are skipped.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use wordle_rescue::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/answers.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let content = fs::read_to_string(path)?;
    Ok(parse_words(&content))
}

/// Parse newline-separated words
///
/// # Examples
/// ```
/// use wordle_rescue::wordlists::loader::parse_words;
///
/// let words = parse_words("crane\n  SLATE \n\nnot-a-word\ncrane\n");
/// let texts: Vec<&str> = words.iter().map(|w| w.text()).collect();
/// assert_eq!(texts, ["crane", "slate"]);
/// ```
#[must_use]
pub fn parse_words(text: &str) -> Vec<Word> {
    dedup_valid(text.lines().map(str::trim).filter(|line| !line.is_empty()))
}

/// Convert embedded string slice to Word vector
///
/// # Examples
/// ```
/// use wordle_rescue::wordlists::loader::words_from_slice;
///
/// let words = words_from_slice(&["crane", "slate", "toolong"]);
/// assert_eq!(words.len(), 2);
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    dedup_valid(slice.iter().copied())
}

fn dedup_valid<'s>(items: impl Iterator<Item = &'s str>) -> Vec<Word> {
    let mut seen = FxHashSet::default();
    items
        .filter_map(|item| Word::new(item).ok())
        .filter(|word| seen.insert(*word))
        .collect()
}
