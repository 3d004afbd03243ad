mod challenge;
mod difficulty;
mod problem;
mod settings;

pub use challenge::{CHALLENGE_COUNT, ChallengeSet, PROBLEMS_PER_OPERATION};
pub use difficulty::{Difficulty, DifficultyParseError};
pub use problem::{Operation, Problem};
pub use settings::{GameSettings, SettingsError};
