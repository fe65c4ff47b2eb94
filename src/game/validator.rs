use crate::{
    dictionary::DictionaryChecker,
    game::{rules::RoundRules, round::Round, WordError},
    utils::letters::can_spell,
};

/// Runs the acceptance checks for a normalized word against a round.
///
/// Checks run in a fixed order and the first failure is reported:
/// originality, feasibility, realness, not the root word, minimum length.
pub struct WordValidator<'a, C: DictionaryChecker + ?Sized> {
    checker: &'a C,
    rules: &'a RoundRules,
}

impl<'a, C: DictionaryChecker + ?Sized> WordValidator<'a, C> {
    pub fn new(checker: &'a C, rules: &'a RoundRules) -> Self {
        Self { checker, rules }
    }

    pub fn validate(&self, word: &str, round: &Round) -> Result<(), WordError> {
        if !Self::is_original(word, round) {
            return Err(WordError::DuplicateWord);
        }

        if !Self::is_possible(word, round) {
            return Err(WordError::LettersUnavailable {
                root: round.root_word().to_string(),
            });
        }

        if !self.is_real(word, round) {
            return Err(WordError::NotARealWord);
        }

        if Self::is_root_word(word, round) {
            return Err(WordError::IsRootWord);
        }

        if self.is_too_short(word) {
            return Err(WordError::TooShort {
                min_length: self.rules.min_word_length,
            });
        }

        Ok(())
    }

    fn is_original(word: &str, round: &Round) -> bool {
        !round.contains(word)
    }

    fn is_possible(word: &str, round: &Round) -> bool {
        can_spell(word, round.root_word())
    }

    /// The root word comes from the curated start list, so it counts as known
    /// vocabulary even if the checker has never heard of it. This lets the
    /// root word always reach the start-word check.
    fn is_real(&self, word: &str, round: &Round) -> bool {
        word == round.root_word() || self.checker.is_valid(word, &self.rules.language)
    }

    fn is_root_word(word: &str, round: &Round) -> bool {
        word == round.root_word()
    }

    fn is_too_short(&self, word: &str) -> bool {
        word.chars().count() < self.rules.min_word_length
    }
}
