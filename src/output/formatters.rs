//! Formatting utilities for terminal output

use crate::core::{Pattern, Tile, Word};
use colored::Colorize;

/// Format a pattern as emoji string
#[must_use]
pub fn pattern_to_emoji(pattern: Pattern) -> String {
    pattern.to_emoji()
}

/// Render a guess as colored tiles, one letter per tile
#[must_use]
pub fn colored_pattern(word: &Word, pattern: Pattern) -> String {
    word.text()
        .chars()
        .zip(pattern.tiles())
        .map(|(ch, tile)| {
            let letter = format!(" {} ", ch.to_ascii_uppercase());
            let tile = match tile {
                Tile::Correct => letter.black().on_green(),
                Tile::Present => letter.black().on_yellow(),
                Tile::Absent => letter.white().on_bright_black(),
            };
            tile.bold().to_string()
        })
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max).max(0.0) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format entropy as a bar scaled to the most bits a guess can carry
#[must_use]
pub fn entropy_bar(entropy: f64, width: usize) -> String {
    // log2 of the number of feedback patterns
    let max_entropy = (Pattern::COUNT as f64).log2();
    create_progress_bar(entropy, max_entropy, width)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pattern_to_emoji_all_gray() {
        let pattern = Pattern::new(0);
        assert_eq!(pattern_to_emoji(pattern), "⬛⬛⬛⬛⬛");
    }

    #[test]
    fn pattern_to_emoji_all_green() {
        assert_eq!(pattern_to_emoji(Pattern::PERFECT), "🟩🟩🟩🟩🟩");
    }

    #[test]
    fn pattern_to_emoji_mixed() {
        let pattern: Pattern = "--y-g".parse().unwrap();
        assert_eq!(pattern_to_emoji(pattern), "⬛⬛🟨⬛🟩");
    }

    #[test]
    fn colored_pattern_keeps_letters_in_order() {
        let word = Word::new("crane").unwrap();
        let rendered = colored_pattern(&word, "--y-g".parse().unwrap());

        let positions: Vec<usize> = ["C", "R", "A", "N", "E"]
            .iter()
            .map(|letter| rendered.find(letter).unwrap())
            .collect();
        assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn progress_bar_empty() {
        assert_eq!(create_progress_bar(0.0, 100.0, 10), "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        assert_eq!(create_progress_bar(100.0, 100.0, 10), "██████████");
    }

    #[test]
    fn progress_bar_half() {
        assert_eq!(create_progress_bar(50.0, 100.0, 10), "█████░░░░░");
    }

    #[test]
    fn progress_bar_clamps() {
        assert_eq!(create_progress_bar(150.0, 100.0, 4), "████");
        assert_eq!(create_progress_bar(-1.0, 100.0, 4), "░░░░");
        assert_eq!(create_progress_bar(1.0, 0.0, 4), "░░░░");
    }

    #[test]
    fn entropy_bar_scales_to_pattern_count() {
        let max = (Pattern::COUNT as f64).log2();
        assert_eq!(entropy_bar(max, 8), "████████");
        assert_eq!(entropy_bar(0.0, 8), "░░░░░░░░");
    }
}
