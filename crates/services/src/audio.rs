//! Sound cue capability.
//!
//! The session never talks to an audio device directly. It hands named cues
//! to a `CueSink`; playback is fire-and-forget and failures are only logged.

use std::fmt;
use std::sync::{Mutex, PoisonError};

use crate::error::CueError;

/// Named audio feedback event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cue {
    Correct,
    Wrong,
    Victory,
}

impl Cue {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Cue::Correct => "correct",
            Cue::Wrong => "wrong",
            Cue::Victory => "victory",
        }
    }

    /// Conventional asset location for hosts that load cues from files.
    #[must_use]
    pub fn asset_path(self) -> &'static str {
        match self {
            Cue::Correct => "/sounds/correct.mp3",
            Cue::Wrong => "/sounds/wrong.mp3",
            Cue::Victory => "/sounds/victory.mp3",
        }
    }
}

impl fmt::Display for Cue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Plays named cues on behalf of a session.
pub trait CueSink: Send + Sync {
    /// Starts playback of `cue` without waiting for it to finish.
    ///
    /// # Errors
    ///
    /// Returns `CueError` if the cue cannot be played.
    fn play(&self, cue: Cue) -> Result<(), CueError>;
}

/// Discards every cue.
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentCueSink;

impl CueSink for SilentCueSink {
    fn play(&self, _cue: Cue) -> Result<(), CueError> {
        Ok(())
    }
}

/// Writes each cue to the `log` facade instead of a speaker.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogCueSink;

impl CueSink for LogCueSink {
    fn play(&self, cue: Cue) -> Result<(), CueError> {
        log::info!("cue: {cue} ({})", cue.asset_path());
        Ok(())
    }
}

/// Remembers every cue it receives, optionally failing each one.
#[derive(Debug, Default)]
pub struct RecordingCueSink {
    played: Mutex<Vec<Cue>>,
    fail: bool,
}

impl RecordingCueSink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A sink that records cues but reports every playback as unavailable.
    #[must_use]
    pub fn failing() -> Self {
        Self {
            played: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    #[must_use]
    pub fn played(&self) -> Vec<Cue> {
        self.played
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl CueSink for RecordingCueSink {
    fn play(&self, cue: Cue) -> Result<(), CueError> {
        self.played
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(cue);
        if self.fail {
            return Err(CueError::Unavailable(cue));
        }
        Ok(())
    }
}
