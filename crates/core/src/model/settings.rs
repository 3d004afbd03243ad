use std::time::Duration;

use thiserror::Error;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SettingsError {
    #[error("session length must be > 0 seconds")]
    ZeroSessionSeconds,

    #[error("points per solved problem must be > 0")]
    ZeroPointsPerSolve,

    #[error("advance delay must be > 0 ms")]
    ZeroAdvanceDelay,
}

//
// ─── SETTINGS ──────────────────────────────────────────────────────────────────
//

/// Tunable rules for a game session.
///
/// Controls the countdown length, scoring and the pause between a correct
/// answer and the next problem.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameSettings {
    session_secs: u32,
    points_per_solve: u32,
    completion_bonus: u32,
    advance_delay_ms: u64,
}

impl Default for GameSettings {
    /// One minute on the clock, 10 points per problem, 20 bonus points for
    /// clearing the room and a 1.5 second pause before the next problem.
    fn default() -> Self {
        Self {
            session_secs: 60,
            points_per_solve: 10,
            completion_bonus: 20,
            advance_delay_ms: 1_500,
        }
    }
}

impl GameSettings {
    /// Creates custom game settings.
    ///
    /// # Errors
    ///
    /// Returns `SettingsError` if the session length, points per solve or
    /// advance delay is zero. A zero completion bonus is allowed.
    pub fn new(
        session_secs: u32,
        points_per_solve: u32,
        completion_bonus: u32,
        advance_delay_ms: u64,
    ) -> Result<Self, SettingsError> {
        if session_secs == 0 {
            return Err(SettingsError::ZeroSessionSeconds);
        }
        if points_per_solve == 0 {
            return Err(SettingsError::ZeroPointsPerSolve);
        }
        if advance_delay_ms == 0 {
            return Err(SettingsError::ZeroAdvanceDelay);
        }

        Ok(Self {
            session_secs,
            points_per_solve,
            completion_bonus,
            advance_delay_ms,
        })
    }

    // Accessors
    #[must_use]
    pub fn session_secs(&self) -> u32 {
        self.session_secs
    }

    #[must_use]
    pub fn points_per_solve(&self) -> u32 {
        self.points_per_solve
    }

    #[must_use]
    pub fn completion_bonus(&self) -> u32 {
        self.completion_bonus
    }

    #[must_use]
    pub fn advance_delay(&self) -> Duration {
        Duration::from_millis(self.advance_delay_ms)
    }
}
