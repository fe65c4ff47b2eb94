use std::collections::HashMap;

/// Multiset of the letters available in a root word.
///
/// Each letter may be spent as many times as it occurs in the source word.
#[derive(Debug, Clone, Default)]
pub struct LetterBag {
    counts: HashMap<char, usize>,
}

impl LetterBag {
    /// Build a bag from every character of `word`
    pub fn from_word(word: &str) -> Self {
        let mut counts = HashMap::new();
        for ch in word.chars() {
            *counts.entry(ch).or_insert(0) += 1;
        }
        Self { counts }
    }

    /// Remove one occurrence of `letter`. Returns false if none is left.
    pub fn take(&mut self, letter: char) -> bool {
        match self.counts.get_mut(&letter) {
            Some(count) if *count > 0 => {
                *count -= 1;
                true
            }
            _ => false,
        }
    }
}

/// Check whether `word` can be spelled from the letters of `root`.
///
/// Walks the candidate in order and spends one letter per character,
/// stopping at the first letter the root cannot supply.
pub fn can_spell(word: &str, root: &str) -> bool {
    let mut bag = LetterBag::from_word(root);
    word.chars().all(|ch| bag.take(ch))
}
