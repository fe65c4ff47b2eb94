use thiserror::Error;

/// Result of a submission that did not fail validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Input was blank after normalization; nothing happened
    Empty,
    Accepted {
        word: String,
        /// Points earned by this word
        points: u32,
        /// Round score after the word was added
        score: u32,
    },
}

/// Why a submitted word was rejected.
///
/// The `Display` text is the message shown to the player; `title()` is the
/// heading that goes with it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("Be more original!")]
    DuplicateWord,
    #[error("You can't spell that word from '{root}'!")]
    LettersUnavailable { root: String },
    #[error("You can't just make them up!")]
    NotARealWord,
    #[error("You can't use the start word")]
    IsRootWord,
    #[error("Your answer must have at least {min_length} letters")]
    TooShort { min_length: usize },
    #[error("Start a new round before submitting words")]
    RoundNotStarted,
}

impl WordError {
    pub fn title(&self) -> &'static str {
        match self {
            Self::DuplicateWord => "Word used already",
            Self::LettersUnavailable { .. } => "Word not possible",
            Self::NotARealWord => "Word not recognised",
            Self::IsRootWord => "Start word used",
            Self::TooShort { .. } => "Word too short",
            Self::RoundNotStarted => "No round in progress",
        }
    }

    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Stable machine-readable identifier
    pub fn kind(&self) -> &'static str {
        match self {
            Self::DuplicateWord => "duplicate_word",
            Self::LettersUnavailable { .. } => "letters_unavailable",
            Self::NotARealWord => "not_a_real_word",
            Self::IsRootWord => "is_root_word",
            Self::TooShort { .. } => "too_short",
            Self::RoundNotStarted => "round_not_started",
        }
    }
}
