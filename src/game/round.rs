use crate::{
    dictionary::DictionaryChecker,
    game::{
        rules::{normalize_word, RoundRules},
        Scorer, SubmitOutcome, WordError, WordValidator,
    },
    models::{RoundSnapshot, UsedWordEntry},
};

/// One play session scoped by a single root word.
///
/// `used_words` is kept most-recent-first and `score` always equals the sum
/// of their lengths. The only mutation is [`Round::submit`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Round {
    root_word: String,
    used_words: Vec<String>,
    score: u32,
}

impl Round {
    pub fn new(root_word: impl AsRef<str>) -> Self {
        Self {
            root_word: normalize_word(root_word.as_ref()),
            used_words: Vec::new(),
            score: 0,
        }
    }

    pub fn root_word(&self) -> &str {
        &self.root_word
    }

    /// Accepted words, most recent first
    pub fn used_words(&self) -> &[String] {
        &self.used_words
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn contains(&self, word: &str) -> bool {
        self.used_words.iter().any(|used| used == word)
    }

    /// Normalize `raw`, validate it and record it if every check passes.
    ///
    /// Blank input is ignored. On rejection the round is left untouched.
    pub fn submit<C: DictionaryChecker + ?Sized>(
        &mut self,
        raw: &str,
        checker: &C,
        rules: &RoundRules,
    ) -> Result<SubmitOutcome, WordError> {
        let word = normalize_word(raw);
        if word.is_empty() {
            return Ok(SubmitOutcome::Empty);
        }

        WordValidator::new(checker, rules).validate(&word, self)?;

        let points = Scorer::score(&word);
        self.used_words.insert(0, word.clone());
        self.score += points;

        Ok(SubmitOutcome::Accepted {
            word,
            points,
            score: self.score,
        })
    }

    /// Display rows for the used words, most recent first
    pub fn entries(&self) -> Vec<UsedWordEntry> {
        self.used_words
            .iter()
            .map(|word| UsedWordEntry::new(word))
            .collect()
    }

    pub fn snapshot(&self) -> RoundSnapshot {
        RoundSnapshot {
            root_word: self.root_word.clone(),
            used_words: self.entries(),
            score: self.score,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::Dictionary;
    use proptest::prelude::*;
    use std::collections::HashMap;

    fn dictionary() -> Dictionary {
        Dictionary::from_words(
            "en",
            ["silk", "worm", "worms", "milk", "ilk", "sworn", "apple", "peel", "pale", "leap"],
        )
    }

    #[test]
    fn test_silkworm_scenario() {
        let dict = dictionary();
        let rules = RoundRules::default();
        let mut round = Round::new("silkworm");

        assert_eq!(
            round.submit("silk", &dict, &rules),
            Ok(SubmitOutcome::Accepted {
                word: "silk".to_string(),
                points: 4,
                score: 4
            })
        );
        assert_eq!(round.used_words(), ["silk"]);

        assert_eq!(round.submit("silk", &dict, &rules), Err(WordError::DuplicateWord));
        assert_eq!(round.score(), 4);

        assert_eq!(round.submit("silkworm", &dict, &rules), Err(WordError::IsRootWord));

        // "sworn" needs an 'n' the root does not have
        assert!(matches!(
            round.submit("sworn", &dict, &rules),
            Err(WordError::LettersUnavailable { .. })
        ));

        assert!(round.submit("worm", &dict, &rules).is_ok());
        assert_eq!(round.score(), 8);
        assert_eq!(round.used_words(), ["worm", "silk"]);
    }

    #[test]
    fn test_apple_peel_is_not_possible() {
        let dict = dictionary();
        let rules = RoundRules::default();
        let mut round = Round::new("apple");

        assert_eq!(
            round.submit("peel", &dict, &rules),
            Err(WordError::LettersUnavailable {
                root: "apple".to_string()
            })
        );
        assert!(round.submit("pale", &dict, &rules).is_ok());
    }

    #[test]
    fn test_input_is_normalized() {
        let dict = dictionary();
        let rules = RoundRules::default();
        let mut round = Round::new("silkworm");

        let outcome = round.submit("  MILK\n", &dict, &rules).unwrap();
        assert_eq!(
            outcome,
            SubmitOutcome::Accepted {
                word: "milk".to_string(),
                points: 4,
                score: 4
            }
        );
        assert_eq!(round.submit("Milk", &dict, &rules), Err(WordError::DuplicateWord));
    }

    #[test]
    fn test_blank_input_is_ignored() {
        let dict = dictionary();
        let rules = RoundRules::default();
        let mut round = Round::new("silkworm");
        let before = round.clone();

        assert_eq!(round.submit("", &dict, &rules), Ok(SubmitOutcome::Empty));
        assert_eq!(round.submit(" \t\n", &dict, &rules), Ok(SubmitOutcome::Empty));
        assert_eq!(round, before);
    }

    #[test]
    fn test_rejection_is_repeatable_and_pure() {
        let dict = dictionary();
        let rules = RoundRules::default();
        let mut round = Round::new("silkworm");
        round.submit("silk", &dict, &rules).unwrap();
        let before = round.clone();

        for word in ["zzz", "lorm", "silkworm", "ilk!", "silk"] {
            let first = round.submit(word, &dict, &rules);
            let second = round.submit(word, &dict, &rules);
            assert!(first.is_err());
            assert_eq!(first, second);
            assert_eq!(round, before);
        }
    }

    #[test]
    fn test_entries_and_snapshot() {
        let dict = dictionary();
        let rules = RoundRules::default();
        let mut round = Round::new("silkworm");
        round.submit("ilk", &dict, &rules).unwrap();
        round.submit("worms", &dict, &rules).unwrap();

        let snapshot = round.snapshot();
        assert_eq!(snapshot.root_word, "silkworm");
        assert_eq!(snapshot.score, 8);
        assert_eq!(snapshot.used_words.len(), 2);
        assert_eq!(snapshot.used_words[0].word, "worms");
        assert_eq!(snapshot.used_words[0].letters, 5);
        assert_eq!(snapshot.used_words[0].label, "worms, 5 letters");
        assert_eq!(snapshot.used_words[1].label, "ilk, 3 letters");
    }

    fn letter_counts(word: &str) -> HashMap<char, usize> {
        let mut counts = HashMap::new();
        for ch in word.chars() {
            *counts.entry(ch).or_insert(0) += 1;
        }
        counts
    }

    proptest! {
        #[test]
        fn prop_round_invariants_hold(
            root in "[a-e]{1,8}",
            attempts in proptest::collection::vec("[a-f]{0,6}", 0..40),
        ) {
            // Every string is "real", so only letters, root, length and duplicates matter
            let checker = |_: &str, _: &str| true;
            let rules = RoundRules::default();
            let mut round = Round::new(&root);

            for attempt in &attempts {
                let before = round.clone();
                match round.submit(attempt, &checker, &rules) {
                    Ok(SubmitOutcome::Accepted { word, points, score }) => {
                        prop_assert_eq!(points as usize, word.chars().count());
                        prop_assert_eq!(score, before.score() + points);
                        prop_assert_eq!(round.used_words().first(), Some(&word));
                    }
                    Ok(SubmitOutcome::Empty) | Err(_) => {
                        prop_assert_eq!(&round, &before);
                    }
                }
            }

            let total: usize = round.used_words().iter().map(|w| w.chars().count()).sum();
            prop_assert_eq!(round.score() as usize, total);

            let root_counts = letter_counts(round.root_word());
            for word in round.used_words() {
                prop_assert_ne!(word, round.root_word());
                prop_assert!(word.chars().count() >= rules.min_word_length);
                for (ch, n) in letter_counts(word) {
                    prop_assert!(root_counts.get(&ch).copied().unwrap_or(0) >= n);
                }
            }

            let mut unique = round.used_words().to_vec();
            unique.sort();
            unique.dedup();
            prop_assert_eq!(unique.len(), round.used_words().len());
        }

        #[test]
        fn prop_root_word_always_rejected(root in "[a-z]{1,10}", known in any::<bool>()) {
            let checker = move |_: &str, _: &str| known;
            let rules = RoundRules::default();
            let mut round = Round::new(&root);
            prop_assert_eq!(round.submit(&root, &checker, &rules), Err(WordError::IsRootWord));
        }

        #[test]
        fn prop_used_word_always_duplicate(root in "[a-z]{3,10}") {
            let checker = |_: &str, _: &str| true;
            let rules = RoundRules::default();
            let mut round = Round::new(&root);
            let word: String = root.chars().take(3).collect();
            if word != root {
                prop_assert!(round.submit(&word, &checker, &rules).is_ok());
                prop_assert_eq!(round.submit(&word, &checker, &rules), Err(WordError::DuplicateWord));
            }
        }
    }
}
