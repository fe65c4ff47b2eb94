use std::path::Path;
use tokio::fs;
use anyhow::{Context, Result};

/// Supplies the pool of candidate root words
pub trait WordListSource: Send + Sync {
    fn load(&self) -> Result<Vec<String>>;
}

/// Root word candidates read from a newline-delimited list (e.g. `start.txt`)
#[derive(Debug, Clone, Default)]
pub struct WordList {
    words: Vec<String>,
}

impl WordList {
    /// Load the word list from a file
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .await
            .with_context(|| format!("failed to read word list {}", path.display()))?;
        let list = Self::from_lines(content.lines());

        tracing::info!("Loaded {} root word candidates", list.len());

        Ok(list)
    }

    /// Trimmed, lowercased, blank lines dropped
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = lines
            .into_iter()
            .map(|line| line.as_ref().trim().to_lowercase())
            .filter(|word| !word.is_empty())
            .collect();

        Self { words }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl WordListSource for WordList {
    fn load(&self) -> Result<Vec<String>> {
        Ok(self.words().to_vec())
    }
}
