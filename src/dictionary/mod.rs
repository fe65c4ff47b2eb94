use std::collections::HashSet;
use std::path::Path;
use tokio::fs;
use anyhow::{Context, Result};

/// Answers "is this a real word in language L?"
///
/// Lookups are expected to be case-insensitive and local.
pub trait DictionaryChecker: Send + Sync {
    fn is_valid(&self, word: &str, language: &str) -> bool;
}

impl<F> DictionaryChecker for F
where
    F: Fn(&str, &str) -> bool + Send + Sync,
{
    fn is_valid(&self, word: &str, language: &str) -> bool {
        self(word, language)
    }
}

/// Word list backed dictionary for a single language
#[derive(Debug)]
pub struct Dictionary {
    language: String,
    words: HashSet<String>,
}

impl Dictionary {
    /// Load dictionary from a newline-delimited file
    pub async fn load<P: AsRef<Path>>(path: P, language: &str) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .await
            .with_context(|| format!("failed to read dictionary {}", path.display()))?;
        let dictionary = Self::from_words(language, content.lines());

        tracing::info!(
            "Loaded {} '{}' words into dictionary",
            dictionary.len(),
            dictionary.language()
        );

        Ok(dictionary)
    }

    /// Build a dictionary from an iterator of words
    pub fn from_words<I, S>(language: &str, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|word| word.as_ref().trim().to_lowercase())
            .filter(|word| !word.is_empty())
            .collect();

        Self {
            language: language.to_lowercase(),
            words,
        }
    }

    /// Create an empty dictionary
    pub fn empty(language: &str) -> Self {
        Self {
            language: language.to_lowercase(),
            words: HashSet::new(),
        }
    }

    /// Check if a word exists in the dictionary
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(&word.trim().to_lowercase())
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    /// Get the number of words in the dictionary
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check if dictionary is empty
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl DictionaryChecker for Dictionary {
    fn is_valid(&self, word: &str, language: &str) -> bool {
        self.language.eq_ignore_ascii_case(language) && self.contains(word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tokio_test::{assert_err, assert_ok};

    #[test]
    fn test_empty_dictionary() {
        let dict = Dictionary::empty("en");
        assert!(dict.is_empty());
        assert!(!dict.contains("test"));
        assert!(!dict.is_valid("test", "en"));
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let dict = Dictionary::from_words("en", ["Silk", "WORM", "  milk  ", ""]);
        assert_eq!(dict.len(), 3);
        assert!(dict.contains("silk"));
        assert!(dict.contains("Worm"));
        assert!(dict.is_valid("MILK", "EN"));
    }

    #[test]
    fn test_other_language_is_rejected() {
        let dict = Dictionary::from_words("en", ["silk"]);
        assert!(!dict.is_valid("silk", "fr"));
    }

    #[test]
    fn test_closure_checker() {
        let checker = |word: &str, _language: &str| word.len() > 3;
        assert!(checker.is_valid("silk", "en"));
        assert!(!checker.is_valid("ilk", "en"));
    }

    #[tokio::test]
    async fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "silk\nworm\n\nmilk").unwrap();

        let dict = assert_ok!(Dictionary::load(file.path(), "en").await);
        assert_eq!(dict.len(), 3);
        assert_eq!(dict.language(), "en");
        assert!(dict.is_valid("worm", "en"));
    }

    #[tokio::test]
    async fn test_load_missing_file() {
        assert_err!(Dictionary::load("/nonexistent/dictionary.txt", "en").await);
    }

    #[tokio::test]
    async fn test_bundled_dictionary_knows_start_words() {
        let dict = assert_ok!(
            Dictionary::load(concat!(env!("CARGO_MANIFEST_DIR"), "/dictionary.txt"), "en").await
        );
        let list = assert_ok!(
            crate::words::WordList::from_file(concat!(env!("CARGO_MANIFEST_DIR"), "/start.txt")).await
        );

        assert!(!list.is_empty());
        for root in list.words() {
            assert!(dict.is_valid(root, "en"), "'{}' missing from dictionary.txt", root);
        }
        for word in ["silk", "worm", "milk", "ilk"] {
            assert!(dict.is_valid(word, "en"));
        }
    }
}
