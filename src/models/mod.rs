pub mod round;

pub use round::{RoundSnapshot, UsedWordEntry};
