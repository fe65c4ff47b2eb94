use serde::{Deserialize, Serialize};

/// A used word as the host displays it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsedWordEntry {
    pub word: String,
    /// Letter count, shown as the row badge
    pub letters: usize,
    /// Spoken description, e.g. "silk, 4 letters"
    pub label: String,
}

impl UsedWordEntry {
    pub fn new(word: &str) -> Self {
        let letters = word.chars().count();
        Self {
            word: word.to_string(),
            letters,
            label: format!("{}, {} letters", word, letters),
        }
    }
}

/// Read-only view of a round for rendering
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundSnapshot {
    pub root_word: String,
    /// Most recent first
    pub used_words: Vec<UsedWordEntry>,
    pub score: u32,
}
