/// Why a session stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndReason {
    /// Every problem was solved before the countdown ran out.
    AllSolved,
    /// The countdown reached zero first.
    TimedOut,
}

/// Lifecycle of a single session.
///
/// `Ended` is terminal: only a restart (explicit, via start, or via a
/// difficulty change) leaves it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SessionPhase {
    #[default]
    NotStarted,
    Active,
    Ended(EndReason),
}

impl SessionPhase {
    #[must_use]
    pub fn is_active(self) -> bool {
        matches!(self, SessionPhase::Active)
    }

    #[must_use]
    pub fn end_reason(self) -> Option<EndReason> {
        match self {
            SessionPhase::Ended(reason) => Some(reason),
            SessionPhase::NotStarted | SessionPhase::Active => None,
        }
    }

    /// Which screen the view should render for this phase.
    ///
    /// A timeout drops back to the entry screen; only clearing the room
    /// shows the victory screen.
    #[must_use]
    pub fn screen(self) -> Screen {
        match self {
            SessionPhase::NotStarted | SessionPhase::Ended(EndReason::TimedOut) => Screen::Entry,
            SessionPhase::Active => Screen::Playing,
            SessionPhase::Ended(EndReason::AllSolved) => Screen::Victory,
        }
    }
}

/// Top-level screen the view renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Difficulty picker, sound toggle and start button.
    Entry,
    /// Current problem, answer field, hint and reward.
    Playing,
    /// Final score and a play-again button.
    Victory,
}
