//! Wordle word representation
//!
//! A Word is five validated lowercase ASCII letters packed into a byte array.
//! It is `Copy`, so candidate lists are plain `Vec<Word>`.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Number of letters in every word
pub const WORD_LENGTH: usize = 5;

/// Number of letters in the alphabet
pub const ALPHABET_SIZE: usize = 26;

/// A 5-letter Wordle word
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Word([u8; WORD_LENGTH]);

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("word must be exactly 5 letters, got {0}")]
    InvalidLength(usize),
    #[error("word must contain only ASCII letters")]
    NonAscii,
    #[error("word contains invalid characters")]
    InvalidCharacters,
}

impl Word {
    /// Create a new Word from a string
    ///
    /// Input is lowercased before validation.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Length is not exactly 5
    /// - Contains non-ASCII characters
    /// - Contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use wordle_rescue::core::Word;
    ///
    /// let word = Word::new("CRANE").unwrap();
    /// assert_eq!(word.text(), "crane");
    ///
    /// assert!(Word::new("too long").is_err());
    /// assert!(Word::new("sh0rt").is_err());
    /// ```
    pub fn new(text: impl AsRef<str>) -> Result<Self, WordError> {
        let text = text.as_ref();

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        let bytes: [u8; WORD_LENGTH] = text
            .as_bytes()
            .try_into()
            .map_err(|_| WordError::InvalidLength(text.len()))?;

        let mut letters = [0u8; WORD_LENGTH];
        for (slot, byte) in letters.iter_mut().zip(bytes) {
            let lower = byte.to_ascii_lowercase();
            if !lower.is_ascii_lowercase() {
                return Err(WordError::InvalidCharacters);
            }
            *slot = lower;
        }

        Ok(Self(letters))
    }

    /// Get the word as a string slice
    ///
    /// # Panics
    /// Never: construction guarantees ASCII bytes.
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        std::str::from_utf8(&self.0).expect("word bytes are validated ASCII")
    }

    /// Get the word as a byte array
    #[inline]
    #[must_use]
    pub const fn bytes(&self) -> &[u8; WORD_LENGTH] {
        &self.0
    }

    /// Per-letter counts indexed by `letter - b'a'`
    #[inline]
    #[must_use]
    pub fn letter_counts(&self) -> [u8; ALPHABET_SIZE] {
        let mut counts = [0u8; ALPHABET_SIZE];
        for &ch in &self.0 {
            counts[letter_index(ch)] += 1;
        }
        counts
    }

    /// Number of distinct letters in the word
    #[must_use]
    pub fn distinct_letters(&self) -> usize {
        self.letter_counts().iter().filter(|&&c| c > 0).count()
    }
}

/// Index of a lowercase ASCII letter in a 26-entry table
#[inline]
pub(crate) const fn letter_index(letter: u8) -> usize {
    (letter - b'a') as usize
}

impl FromStr for Word {
    type Err = WordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<&str> for Word {
    type Error = WordError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}

impl fmt::Debug for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Word({:?})", self.text())
    }
}
