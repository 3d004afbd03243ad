use std::time::Duration;

/// Handle for the deferred "show next problem" step after a correct answer.
///
/// A ticket is bound to the session that issued it. Restarting bumps the
/// session generation, so tickets from an older session can never move the
/// index of a newer one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdvanceTicket {
    generation: u64,
    from_index: usize,
    delay: Duration,
}

impl AdvanceTicket {
    pub(crate) fn new(generation: u64, from_index: usize, delay: Duration) -> Self {
        Self {
            generation,
            from_index,
            delay,
        }
    }

    /// Session generation that issued this ticket.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Index of the problem that was just solved.
    #[must_use]
    pub fn from_index(&self) -> usize {
        self.from_index
    }

    /// Index the session moves to when the ticket is redeemed.
    #[must_use]
    pub fn to_index(&self) -> usize {
        self.from_index + 1
    }

    /// How long the host should wait before redeeming the ticket.
    #[must_use]
    pub fn delay(&self) -> Duration {
        self.delay
    }
}
