// Round engine and word rules

pub mod engine;
pub mod outcome;
pub mod round;
pub mod rules;
pub mod scorer;
pub mod validator;

pub use engine::{RoundEngine, RoundPhase};
pub use outcome::{SubmitOutcome, WordError};
pub use round::Round;
pub use rules::RoundRules;
pub use scorer::Scorer;
pub use validator::WordValidator;
