//! Shared error types for the services crate.

use thiserror::Error;

use escape_core::AnswerError;

use crate::audio::Cue;

/// Errors emitted when submitting an answer.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SubmitError {
    #[error(transparent)]
    Invalid(#[from] AnswerError),
    #[error("no session is running")]
    NotActive,
    #[error("current problem is already solved")]
    AlreadySolved,
}

/// Errors emitted by a `CueSink`.
///
/// These are logged by the session and never reach the player.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CueError {
    #[error("sound cue {0} is unavailable")]
    Unavailable(Cue),
    #[error("sound cue {cue} failed to play: {reason}")]
    Playback { cue: Cue, reason: String },
}
