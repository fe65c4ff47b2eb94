pub struct Scorer;

impl Scorer {
    /// Points for an accepted word: one per character
    pub fn score(word: &str) -> u32 {
        word.chars().count() as u32
    }
}
