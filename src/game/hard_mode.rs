//! Hard mode rules
//!
//! Every exact letter must stay in place and every revealed letter must be
//! reused at least as many times as it was revealed in a single guess.

use crate::core::{ALPHABET_SIZE, Pattern, Tile, WORD_LENGTH, Word};
use thiserror::Error;

/// Why a guess breaks hard mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HardModeViolation {
    /// `position` is 1-based
    #[error("letter {position} must be '{letter}'")]
    MissingGreen { position: usize, letter: char },
    #[error("guess must contain '{letter}' at least {required} time(s)")]
    MissingLetter { letter: char, required: u8 },
}

/// Constraints accumulated from the feedback seen so far
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HardModeConstraints {
    greens: [Option<u8>; WORD_LENGTH],
    min_counts: [u8; ALPHABET_SIZE],
}

impl HardModeConstraints {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold the feedback of one guess into the constraints
    pub fn absorb(&mut self, guess: &Word, pattern: Pattern) {
        let mut revealed = [0u8; ALPHABET_SIZE];

        for (pos, (&letter, tile)) in guess.bytes().iter().zip(pattern.tiles()).enumerate() {
            match tile {
                Tile::Correct => {
                    self.greens[pos] = Some(letter);
                    revealed[usize::from(letter - b'a')] += 1;
                }
                Tile::Present => revealed[usize::from(letter - b'a')] += 1,
                Tile::Absent => {}
            }
        }

        for (min, seen) in self.min_counts.iter_mut().zip(revealed) {
            *min = (*min).max(seen);
        }
    }

    /// Check `word` against the constraints
    ///
    /// Misplaced greens are reported before missing letters.
    ///
    /// # Errors
    /// The first violated rule.
    pub fn check(&self, word: &Word) -> Result<(), HardModeViolation> {
        for (pos, (&green, &have)) in self.greens.iter().zip(word.bytes()).enumerate() {
            if let Some(letter) = green.filter(|&letter| letter != have) {
                return Err(HardModeViolation::MissingGreen {
                    position: pos + 1,
                    letter: char::from(letter),
                });
            }
        }

        let counts = word.letter_counts();
        for (idx, (&required, &have)) in self.min_counts.iter().zip(&counts).enumerate() {
            if have < required {
                return Err(HardModeViolation::MissingLetter {
                    letter: char::from(b'a' + idx as u8),
                    required,
                });
            }
        }

        Ok(())
    }

    /// Whether nothing has been revealed yet
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.greens.iter().all(Option::is_none) && self.min_counts.iter().all(|&c| c == 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    fn constraints(guess: &str, secret: &str) -> HardModeConstraints {
        let mut constraints = HardModeConstraints::new();
        let guess = word(guess);
        constraints.absorb(&guess, Pattern::calculate(&guess, &word(secret)));
        constraints
    }

    #[test]
    fn nothing_revealed_allows_anything() {
        let constraints = constraints("crane", "pious");
        assert!(constraints.is_empty());
        assert_eq!(constraints.check(&word("zzzzz")), Ok(()));
    }

    #[test]
    fn greens_must_stay_in_place() {
        let constraints = constraints("crate", "crane");

        assert_eq!(constraints.check(&word("crane")), Ok(()));
        assert_eq!(
            constraints.check(&word("trace")),
            Err(HardModeViolation::MissingGreen {
                position: 1,
                letter: 'c'
            })
        );
    }

    #[test]
    fn yellows_must_be_reused() {
        // SPEED against ABIDE reveals one E and the D
        let constraints = constraints("speed", "abide");

        assert_eq!(constraints.check(&word("aided")), Ok(()));
        assert_eq!(
            constraints.check(&word("crane")),
            Err(HardModeViolation::MissingLetter {
                letter: 'd',
                required: 1
            })
        );
    }

    #[test]
    fn repeated_letters_need_every_revealed_copy() {
        // EERIE against LEVER: yellow E, green E, yellow R
        let constraints = constraints("eerie", "lever");

        assert_eq!(constraints.check(&word("never")), Ok(()));
        assert_eq!(constraints.check(&word("rebel")), Ok(()));
        assert_eq!(
            constraints.check(&word("remix")),
            Err(HardModeViolation::MissingLetter {
                letter: 'e',
                required: 2
            })
        );
    }

    #[test]
    fn constraints_accumulate_across_guesses() {
        let secret = word("lever");
        let mut constraints = HardModeConstraints::new();
        for guess in [word("eerie"), word("never")] {
            constraints.absorb(&guess, Pattern::calculate(&guess, &secret));
        }

        // NEVER fixed the V and R
        assert!(constraints.check(&word("rebel")).is_err());
        assert_eq!(constraints.check(&secret), Ok(()));
    }
}
