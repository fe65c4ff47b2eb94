use rand::{rngs::StdRng, seq::IndexedRandom, Rng, SeedableRng};

use crate::{
    dictionary::DictionaryChecker,
    game::{
        rules::{normalize_word, RoundRules},
        Round, SubmitOutcome, WordError,
    },
    words::WordListSource,
};

/// Lifecycle of an engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundPhase {
    /// No round has been started yet
    Idle,
    Active,
}

/// Owns the current round and dispatches the two player actions:
/// starting a round and submitting a word.
///
/// Root word selection draws from the injected RNG so tests can seed it.
pub struct RoundEngine<R = StdRng> {
    rng: R,
    rules: RoundRules,
    round: Option<Round>,
}

impl RoundEngine<StdRng> {
    /// Engine seeded from the operating system
    pub fn new(rules: RoundRules) -> Self {
        Self::with_rng(StdRng::from_os_rng(), rules)
    }

    /// Deterministic engine for a fixed seed
    pub fn seeded(seed: u64, rules: RoundRules) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed), rules)
    }
}

impl<R: Rng> RoundEngine<R> {
    pub fn with_rng(rng: R, rules: RoundRules) -> Self {
        Self {
            rng,
            rules,
            round: None,
        }
    }

    pub fn phase(&self) -> RoundPhase {
        match self.round {
            Some(_) => RoundPhase::Active,
            None => RoundPhase::Idle,
        }
    }

    /// The round in progress, if any
    pub fn round(&self) -> Option<&Round> {
        self.round.as_ref()
    }

    /// Start (or restart) a round with a root word picked uniformly from
    /// `candidates`. Blank candidates are skipped; with nothing left the
    /// configured default word is used. Any previous round is discarded.
    pub fn start_round<I, S>(&mut self, candidates: I) -> &Round
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let pool: Vec<String> = candidates
            .into_iter()
            .map(|candidate| normalize_word(candidate.as_ref()))
            .filter(|candidate| !candidate.is_empty())
            .collect();

        let root_word = match pool.choose(&mut self.rng) {
            Some(word) => word.clone(),
            None => {
                tracing::warn!(
                    "No root word candidates available, falling back to '{}'",
                    self.rules.fallback_root_word()
                );
                self.rules.fallback_root_word()
            }
        };

        tracing::info!(
            "Starting round with root word '{}' ({} candidates)",
            root_word,
            pool.len()
        );

        self.round.insert(Round::new(root_word))
    }

    /// Load candidates from `source` and start a round. A failed load is
    /// treated like an empty list.
    pub fn start_round_from(&mut self, source: &dyn WordListSource) -> &Round {
        let candidates = source.load().unwrap_or_else(|e| {
            tracing::warn!("Failed to load root word candidates: {:#}", e);
            Vec::new()
        });
        self.start_round(candidates)
    }

    /// Submit a word to the current round.
    ///
    /// Fails with [`WordError::RoundNotStarted`] while idle. Never changes
    /// the phase.
    pub fn submit<C: DictionaryChecker + ?Sized>(
        &mut self,
        raw: &str,
        checker: &C,
    ) -> Result<SubmitOutcome, WordError> {
        let round = self.round.as_mut().ok_or(WordError::RoundNotStarted)?;
        let result = round.submit(raw, checker, &self.rules);

        match &result {
            Ok(SubmitOutcome::Accepted { word, score, .. }) => {
                tracing::debug!("Accepted '{}', score now {}", word, score);
            }
            Ok(SubmitOutcome::Empty) => {}
            Err(e) => {
                tracing::debug!("Rejected '{}': {} ({})", raw.trim(), e.title(), e.kind());
            }
        }

        result
    }
}
