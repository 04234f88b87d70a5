//! Wordle feedback pattern calculation and representation
//!
//! A pattern encodes the feedback from a guess using base-3 encoding:
//! - 0 = Absent (letter not in word, or all copies already claimed)
//! - 1 = Present (letter in word, wrong position)
//! - 2 = Correct (letter in correct position)
//!
//! The pattern is stored as a single u8 value (0-242). The leftmost letter is
//! the most significant digit: `d0*81 + d1*27 + d2*9 + d3*3 + d4`.

use super::word::{ALPHABET_SIZE, WORD_LENGTH, Word, letter_index};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Feedback for a single letter position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Tile {
    /// Letter not in word (gray)
    Absent = 0,
    /// Letter in word, wrong position (yellow)
    Present = 1,
    /// Letter in correct position (green)
    Correct = 2,
}

impl Tile {
    /// Base-3 digit of this tile
    #[inline]
    #[must_use]
    pub const fn digit(self) -> u8 {
        self as u8
    }

    const fn from_digit(digit: u8) -> Self {
        match digit {
            2 => Self::Correct,
            1 => Self::Present,
            _ => Self::Absent,
        }
    }

    /// Emoji glyph used in shareable renderings
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬛',
        }
    }

    /// Parse a single feedback glyph
    ///
    /// Accepts digits, G/Y/B letters, dash-style grays and tile emoji.
    #[must_use]
    pub const fn from_char(ch: char) -> Option<Self> {
        match ch {
            '2' | 'G' | 'g' | '🟩' => Some(Self::Correct),
            '1' | 'Y' | 'y' | '🟨' => Some(Self::Present),
            '0' | 'B' | 'b' | '-' | '_' | '.' | '⬛' | '⬜' => Some(Self::Absent),
            _ => None,
        }
    }
}

/// Error type for invalid pattern input
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatternError {
    #[error("pattern must have exactly 5 tiles, got {0}")]
    InvalidLength(usize),
    #[error("invalid feedback tile {0:?} (use 0/1/2, B/Y/G, '-' or tile emoji)")]
    InvalidTile(char),
    #[error("pattern value {0} is out of range (0-242)")]
    OutOfRange(u8),
}

/// Feedback pattern for a Wordle guess
///
/// Represents the colored feedback as a single byte value.
/// Value range: 0-242 (3^5 - 1 = 243 possible patterns)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pattern(u8);

impl Pattern {
    /// All greens (perfect match)
    pub const PERFECT: Self = Self(242); // 2×81 + 2×27 + 2×9 + 2×3 + 2

    /// Number of distinct patterns (3^5)
    pub const COUNT: usize = 243;

    /// Create a new pattern from a raw value
    ///
    /// # Panics
    /// Panics if value >= 243. Use `Pattern::try_from` for untrusted input.
    #[inline]
    #[must_use]
    pub const fn new(value: u8) -> Self {
        assert!(value < 243, "Pattern value must be < 243");
        Self(value)
    }

    /// Build a pattern from per-position tiles, leftmost first
    #[must_use]
    pub fn from_tiles(tiles: [Tile; WORD_LENGTH]) -> Self {
        Self(encode(&tiles.map(Tile::digit)))
    }

    /// Get the raw pattern value (0-242)
    #[inline]
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Bucket index for table lookups
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Check if this is a perfect match (all greens)
    #[inline]
    #[must_use]
    pub const fn is_perfect(self) -> bool {
        self.0 == Self::PERFECT.0
    }

    /// Calculate the pattern when `guess` is guessed and `secret` is the target
    ///
    /// This implements Wordle's exact feedback rules, including proper handling
    /// of duplicate letters.
    ///
    /// # Algorithm
    /// 1. First pass: Mark all exact matches (greens) and remove from available pool
    /// 2. Second pass, left to right: Mark present-but-wrong-position (yellows)
    ///    while the letter still has supply in the pool
    /// 3. Encode as base-3 number, most significant digit first
    ///
    /// # Examples
    /// ```
    /// use wordle_rescue::core::{Word, Pattern};
    ///
    /// let guess = Word::new("crane").unwrap();
    /// let secret = Word::new("slate").unwrap();
    /// let pattern = Pattern::calculate(&guess, &secret);
    ///
    /// // C(gray) R(gray) A(green) N(gray) E(green)
    /// // 0×81 + 0×27 + 2×9 + 0×3 + 2 = 20
    /// assert_eq!(pattern.value(), 20);
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, secret: &Word) -> Self {
        let guess = guess.bytes();
        let secret = secret.bytes();
        let mut result = [0u8; WORD_LENGTH];
        let mut available = [0u8; ALPHABET_SIZE];

        for &ch in secret {
            available[letter_index(ch)] += 1;
        }

        // First pass: greens consume supply before any yellow can
        for i in 0..WORD_LENGTH {
            if guess[i] == secret[i] {
                result[i] = Tile::Correct.digit();
                available[letter_index(guess[i])] -= 1;
            }
        }

        // Second pass: yellows, leftmost guess position claims first
        for i in 0..WORD_LENGTH {
            if result[i] == 0 {
                let slot = &mut available[letter_index(guess[i])];
                if *slot > 0 {
                    result[i] = Tile::Present.digit();
                    *slot -= 1;
                }
            }
        }

        Self(encode(&result))
    }

    /// Decode into base-3 digits, leftmost position first
    #[must_use]
    pub const fn digits(self) -> [u8; WORD_LENGTH] {
        let mut digits = [0u8; WORD_LENGTH];
        let mut val = self.0;
        let mut i = WORD_LENGTH;
        while i > 0 {
            i -= 1;
            digits[i] = val % 3;
            val /= 3;
        }
        digits
    }

    /// Decode into per-position tiles, leftmost first
    #[must_use]
    pub fn tiles(self) -> [Tile; WORD_LENGTH] {
        self.digits().map(Tile::from_digit)
    }

    /// Count the number of green feedback squares
    #[must_use]
    pub fn count_greens(self) -> usize {
        self.digits().iter().filter(|&&d| d == 2).count()
    }

    /// Count the number of yellow feedback squares
    #[must_use]
    pub fn count_yellows(self) -> usize {
        self.digits().iter().filter(|&&d| d == 1).count()
    }

    /// Convert pattern to emoji string, e.g. "⬛🟨🟩⬛⬛"
    ///
    /// # Examples
    /// ```
    /// use wordle_rescue::core::Pattern;
    ///
    /// let p: Pattern = "GY-GY".parse().unwrap();
    /// assert_eq!(p.to_emoji(), "🟩🟨⬛🟩🟨");
    /// ```
    #[must_use]
    pub fn to_emoji(self) -> String {
        self.tiles().iter().map(|t| t.emoji()).collect()
    }

    /// Convert pattern to a compact digit string, e.g. "01200"
    #[must_use]
    pub fn to_compact(self) -> String {
        self.digits().iter().map(|&d| char::from(b'0' + d)).collect()
    }
}

fn encode(digits: &[u8; WORD_LENGTH]) -> u8 {
    digits.iter().fold(0, |acc, &d| acc * 3 + d)
}

impl TryFrom<u8> for Pattern {
    type Error = PatternError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if usize::from(value) < Self::COUNT {
            Ok(Self(value))
        } else {
            Err(PatternError::OutOfRange(value))
        }
    }
}

/// Parse a pattern from a string like "GY-GY", "21020" or "🟩🟨⬛🟩🟨"
impl FromStr for Pattern {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let count = s.chars().count();
        if count != WORD_LENGTH {
            return Err(PatternError::InvalidLength(count));
        }

        let mut tiles = [Tile::Absent; WORD_LENGTH];
        for (slot, ch) in tiles.iter_mut().zip(s.chars()) {
            *slot = Tile::from_char(ch).ok_or(PatternError::InvalidTile(ch))?;
        }

        Ok(Self::from_tiles(tiles))
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_compact())
    }
}
