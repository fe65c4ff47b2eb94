/// Root word used when the word list is empty or failed to load
pub const DEFAULT_ROOT_WORD: &str = "silkworm";
pub const DEFAULT_MIN_WORD_LENGTH: usize = 3;
pub const DEFAULT_LANGUAGE: &str = "en";

/// Tunables for a round
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundRules {
    /// Shortest accepted answer, in characters
    pub min_word_length: usize,
    /// Language passed to the dictionary checker
    pub language: String,
    pub default_root_word: String,
}

impl Default for RoundRules {
    fn default() -> Self {
        Self {
            min_word_length: DEFAULT_MIN_WORD_LENGTH,
            language: DEFAULT_LANGUAGE.to_string(),
            default_root_word: DEFAULT_ROOT_WORD.to_string(),
        }
    }
}

impl RoundRules {
    /// The fallback root word, normalized. Never empty.
    pub fn fallback_root_word(&self) -> String {
        let word = normalize_word(&self.default_root_word);
        if word.is_empty() {
            DEFAULT_ROOT_WORD.to_string()
        } else {
            word
        }
    }
}

/// Lowercase and strip surrounding whitespace
pub fn normalize_word(raw: &str) -> String {
    raw.trim().to_lowercase()
}
