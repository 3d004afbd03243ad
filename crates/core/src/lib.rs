#![forbid(unsafe_code)]

pub mod answer;
pub mod generator;
pub mod model;
pub mod random;

pub use answer::{AnswerError, INVALID_NUMBER_MESSAGE, parse_answer};
pub use generator::{generate, generate_with_thread_rng};
pub use random::{RandomSource, ScriptedRandom};
