//! Word lists for Wordle solving
//!
//! Lists come from explicit files, from the lists embedded at build time, or
//! as a last resort from the system dictionary.

mod embedded;
pub mod loader;

pub use embedded::{ALLOWED, ALLOWED_COUNT, ANSWERS, ANSWERS_COUNT, has_answers};

use crate::core::Word;
use loader::{load_from_file, words_from_slice};
use rustc_hash::FxHashSet;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Dictionary consulted when nothing else provides solutions
pub const SYSTEM_DICTIONARY: &str = "/usr/share/dict/words";

#[derive(Debug, Error)]
pub enum WordListError {
    #[error("failed to read word list {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("word list {} contains no valid 5-letter words", path.display())]
    Empty { path: PathBuf },
    #[error("no solution list available: pass --solutions <PATH> or build with data/answers.txt")]
    Unavailable,
}

/// Where a list was loaded from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListOrigin {
    File(PathBuf),
    Embedded,
    /// Handed in directly by the caller
    Provided,
    SystemDictionary,
    /// No allowed list: the solutions double as guesses
    None,
}

/// Requested list locations
#[derive(Debug, Clone)]
pub struct WordSource {
    pub solutions: Option<PathBuf>,
    pub allowed: Option<PathBuf>,
    pub system_dictionary: PathBuf,
}

impl Default for WordSource {
    fn default() -> Self {
        Self {
            solutions: None,
            allowed: None,
            system_dictionary: PathBuf::from(SYSTEM_DICTIONARY),
        }
    }
}

/// Solution words plus extra allowed guesses
#[derive(Debug, Clone)]
pub struct WordLists {
    pub solutions: Vec<Word>,
    pub allowed: Vec<Word>,
    pub solutions_origin: ListOrigin,
    pub allowed_origin: ListOrigin,
}

impl WordLists {
    /// Lists built from in-memory words
    #[must_use]
    pub fn new(solutions: Vec<Word>, allowed: Vec<Word>) -> Self {
        let allowed_origin = if allowed.is_empty() {
            ListOrigin::None
        } else {
            ListOrigin::Provided
        };
        Self {
            solutions,
            allowed,
            solutions_origin: ListOrigin::Provided,
            allowed_origin,
        }
    }

    /// The lists embedded at build time
    #[must_use]
    pub fn embedded() -> Self {
        let mut lists = Self::new(words_from_slice(ANSWERS), words_from_slice(ALLOWED));
        lists.solutions_origin = ListOrigin::Embedded;
        if !lists.allowed.is_empty() {
            lists.allowed_origin = ListOrigin::Embedded;
        }
        lists
    }

    /// Resolve lists following the fallback chain
    ///
    /// Solutions: explicit file, then the embedded list, then the system
    /// dictionary. Allowed guesses: explicit file, then the embedded list,
    /// else none.
    ///
    /// # Errors
    /// An explicit file that cannot be read or holds no valid words, or no
    /// solution source at all.
    pub fn resolve(source: &WordSource) -> Result<Self, WordListError> {
        let (solutions, solutions_origin) = match &source.solutions {
            Some(path) => (read_list(path)?, ListOrigin::File(path.clone())),
            None if has_answers() => (words_from_slice(ANSWERS), ListOrigin::Embedded),
            None => match load_from_file(&source.system_dictionary) {
                Ok(words) if !words.is_empty() => (words, ListOrigin::SystemDictionary),
                _ => return Err(WordListError::Unavailable),
            },
        };

        let (allowed, allowed_origin) = match &source.allowed {
            Some(path) => (read_list(path)?, ListOrigin::File(path.clone())),
            None if ALLOWED_COUNT > 0 => (words_from_slice(ALLOWED), ListOrigin::Embedded),
            None => (Vec::new(), ListOrigin::None),
        };

        Ok(Self {
            solutions,
            allowed,
            solutions_origin,
            allowed_origin,
        })
    }

    /// Sorted union of solutions and allowed guesses
    #[must_use]
    pub fn guess_pool(&self) -> Vec<Word> {
        let mut pool: Vec<Word> = self
            .solutions
            .iter()
            .chain(&self.allowed)
            .copied()
            .collect();
        pool.sort_unstable();
        pool.dedup();
        pool
    }

    /// Guess pool restricted to the solutions
    #[must_use]
    pub fn solutions_only(&self) -> Vec<Word> {
        self.solutions.clone()
    }

    /// Whether an allowed list beyond the solutions is present
    #[must_use]
    pub fn has_extended_pool(&self) -> bool {
        let solutions: FxHashSet<&Word> = self.solutions.iter().collect();
        self.allowed.iter().any(|word| !solutions.contains(word))
    }
}

fn read_list(path: &Path) -> Result<Vec<Word>, WordListError> {
    let words = load_from_file(path).map_err(|source| WordListError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    if words.is_empty() {
        return Err(WordListError::Empty {
            path: path.to_path_buf(),
        });
    }

    Ok(words)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(w).unwrap()).collect()
    }

    fn temp_file(name: &str, contents: &str) -> PathBuf {
        let path =
            std::env::temp_dir().join(format!("wordle_rescue_{}_{name}", std::process::id()));
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn answers_count_matches_const() {
        assert_eq!(ANSWERS.len(), ANSWERS_COUNT);
        assert_eq!(ALLOWED.len(), ALLOWED_COUNT);
    }

    #[test]
    fn embedded_answers_are_valid_words() {
        for &word in ANSWERS {
            assert!(Word::new(word).is_ok(), "Word '{word}' is not a valid word");
        }
        assert_eq!(WordLists::embedded().solutions.len(), ANSWERS_COUNT);
    }

    #[test]
    fn guess_pool_is_sorted_union() {
        let lists = WordLists::new(
            words(&["slate", "crane"]),
            words(&["aeros", "crane", "zesty"]),
        );

        let pool_words = lists.guess_pool();
        let pool: Vec<&str> = pool_words.iter().map(Word::text).collect();
        assert_eq!(pool, ["aeros", "crane", "slate", "zesty"]);
        assert!(lists.has_extended_pool());
    }

    #[test]
    fn allowed_subset_of_solutions_adds_nothing() {
        let lists = WordLists::new(words(&["slate", "crane"]), words(&["crane"]));
        assert!(!lists.has_extended_pool());
        assert_eq!(lists.guess_pool(), words(&["crane", "slate"]));
        assert_eq!(lists.solutions_only(), words(&["slate", "crane"]));
    }

    #[test]
    fn resolve_prefers_explicit_files() {
        let solutions = temp_file("solutions.txt", "crane\nslate\nirate\n");
        let allowed = temp_file("allowed.txt", "aeros\n");

        let lists = WordLists::resolve(&WordSource {
            solutions: Some(solutions.clone()),
            allowed: Some(allowed.clone()),
            ..WordSource::default()
        })
        .unwrap();

        fs::remove_file(&solutions).unwrap();
        fs::remove_file(&allowed).unwrap();

        assert_eq!(lists.solutions.len(), 3);
        assert_eq!(lists.allowed, words(&["aeros"]));
        assert_eq!(lists.solutions_origin, ListOrigin::File(solutions));
        assert_eq!(lists.guess_pool().len(), 4);
    }

    #[test]
    fn resolve_rejects_empty_file() {
        let empty = temp_file("empty.txt", "not-a-word\n\n");

        let result = WordLists::resolve(&WordSource {
            solutions: Some(empty.clone()),
            ..WordSource::default()
        });
        fs::remove_file(&empty).unwrap();

        assert!(matches!(result, Err(WordListError::Empty { .. })));
    }

    #[test]
    fn resolve_reports_missing_file() {
        let result = WordLists::resolve(&WordSource {
            solutions: Some(PathBuf::from("/nonexistent/wordle_rescue/answers.txt")),
            ..WordSource::default()
        });
        assert!(matches!(result, Err(WordListError::Io { .. })));
    }

    #[test]
    fn resolve_falls_back_to_system_dictionary() {
        let dictionary = temp_file("dict.txt", "Crane\nslate\naardvark\nirate\n");

        let result = WordLists::resolve(&WordSource {
            system_dictionary: dictionary.clone(),
            ..WordSource::default()
        });
        fs::remove_file(&dictionary).unwrap();

        let lists = result.unwrap();
        if has_answers() {
            assert_eq!(lists.solutions_origin, ListOrigin::Embedded);
        } else {
            assert_eq!(lists.solutions_origin, ListOrigin::SystemDictionary);
            assert_eq!(lists.solutions, words(&["crane", "slate", "irate"]));
        }
    }

    #[test]
    fn resolve_without_any_source_fails() {
        let result = WordLists::resolve(&WordSource {
            system_dictionary: PathBuf::from("/nonexistent/wordle_rescue/dict"),
            ..WordSource::default()
        });

        if has_answers() {
            assert!(result.is_ok());
        } else {
            assert!(matches!(result, Err(WordListError::Unavailable)));
        }
    }
}
