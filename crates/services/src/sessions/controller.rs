use std::fmt;
use std::sync::Arc;

use rand::SeedableRng;
use rand::rngs::StdRng;

use escape_core::model::{ChallengeSet, Difficulty, GameSettings, Problem};
use escape_core::{RandomSource, generate, parse_answer};

use super::advance::AdvanceTicket;
use super::progress::SessionProgress;
use super::state::{EndReason, Screen, SessionPhase};
use super::view::SessionView;
use crate::audio::{Cue, CueSink};
use crate::error::SubmitError;

/// Prompt shown after a parsed but wrong answer.
pub const RETRY_MESSAGE: &str = "Oops! That's not quite right. Try again or ask for a hint.";

//
// ─── OUTCOMES ──────────────────────────────────────────────────────────────────
//

/// Result of submitting the answer field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Problem solved; the next one appears once `advance` is redeemed.
    Correct {
        reward: String,
        points_awarded: u32,
        advance: AdvanceTicket,
    },
    /// The final problem was solved and the session is over.
    Completed {
        reward: String,
        points_awarded: u32,
        final_score: u32,
    },
    /// Parsed, but wrong. Nothing changed.
    Incorrect,
}

impl SubmitOutcome {
    /// Text for a blocking prompt, if this outcome needs one.
    #[must_use]
    pub fn prompt(&self) -> Option<&'static str> {
        match self {
            SubmitOutcome::Incorrect => Some(RETRY_MESSAGE),
            SubmitOutcome::Correct { .. } | SubmitOutcome::Completed { .. } => None,
        }
    }
}

/// Result of one elapsed countdown second.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// No session is running; nothing changed.
    Idle,
    Running { remaining_secs: u32 },
    /// The countdown hit zero and the session ended.
    Expired,
}

//
// ─── CONTROLLER ────────────────────────────────────────────────────────────────
//

/// Owns all mutable state of a game session.
///
/// Every transition is a plain method call, so the controller is fully
/// deterministic: the host decides when a second has elapsed (`tick`) and
/// when a deferred advance is due (`advance`). Generation randomness and
/// audio playback are injected.
pub struct SessionController {
    settings: GameSettings,
    difficulty: Difficulty,
    challenges: ChallengeSet,
    current: usize,
    solved: Vec<bool>,
    score: u32,
    remaining_secs: u32,
    hint_visible: bool,
    last_reward: Option<String>,
    answer_input: String,
    phase: SessionPhase,
    sound_enabled: bool,
    generation: u64,
    pending_advance: Option<AdvanceTicket>,
    rng: Box<dyn RandomSource + Send>,
    cues: Arc<dyn CueSink>,
}

impl SessionController {
    /// Creates a controller on the entry screen with a freshly generated set.
    #[must_use]
    pub fn new(
        difficulty: Difficulty,
        settings: GameSettings,
        mut rng: Box<dyn RandomSource + Send>,
        cues: Arc<dyn CueSink>,
    ) -> Self {
        let challenges = generate(difficulty, rng.as_mut());
        let solved = vec![false; challenges.len()];

        Self {
            settings,
            difficulty,
            challenges,
            current: 0,
            solved,
            score: 0,
            remaining_secs: settings.session_secs(),
            hint_visible: false,
            last_reward: None,
            answer_input: String::new(),
            phase: SessionPhase::NotStarted,
            sound_enabled: true,
            generation: 0,
            pending_advance: None,
            rng,
            cues,
        }
    }

    /// Creates a controller seeded from the operating system.
    #[must_use]
    pub fn with_os_rng(
        difficulty: Difficulty,
        settings: GameSettings,
        cues: Arc<dyn CueSink>,
    ) -> Self {
        Self::new(difficulty, settings, Box::new(StdRng::from_os_rng()), cues)
    }

    //
    // ─── TRANSITIONS ───────────────────────────────────────────────────────────
    //

    /// Starts a session unless one is already running.
    ///
    /// Returns false, leaving everything untouched, while a session is active.
    pub fn start(&mut self) -> bool {
        if self.phase.is_active() {
            return false;
        }
        self.begin_session();
        true
    }

    /// Throws away the current session and starts a fresh one.
    pub fn restart(&mut self) {
        self.begin_session();
    }

    /// Switches difficulty; always restarts, whatever the current phase.
    pub fn select_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
        self.begin_session();
    }

    /// Flips the sound flag and returns the new value.
    pub fn toggle_sound(&mut self) -> bool {
        self.sound_enabled = !self.sound_enabled;
        self.sound_enabled
    }

    pub fn set_answer_input(&mut self, text: impl Into<String>) {
        self.answer_input = text.into();
    }

    /// Shows or hides the hint for the current problem.
    ///
    /// Does nothing outside an active session or once the current problem is
    /// solved. Returns whether the hint is visible afterwards.
    pub fn toggle_hint(&mut self) -> bool {
        if !self.phase.is_active() || self.current_is_solved() {
            return self.hint_visible;
        }
        self.hint_visible = !self.hint_visible;
        self.hint_visible
    }

    /// Checks the answer field against the current problem.
    ///
    /// # Errors
    ///
    /// Returns `SubmitError::NotActive` outside an active session,
    /// `SubmitError::AlreadySolved` while waiting for the next problem, and
    /// `SubmitError::Invalid` when the field is not a whole number. None of
    /// these change any state.
    pub fn submit(&mut self) -> Result<SubmitOutcome, SubmitError> {
        if !self.phase.is_active() {
            return Err(SubmitError::NotActive);
        }
        if self.current_is_solved() {
            return Err(SubmitError::AlreadySolved);
        }
        let candidate = parse_answer(&self.answer_input)?;
        let Some(problem) = self.challenges.get(self.current) else {
            return Err(SubmitError::NotActive);
        };

        if !problem.is_answered_by(candidate) {
            self.emit(Cue::Wrong);
            return Ok(SubmitOutcome::Incorrect);
        }

        let reward = problem.reward().to_owned();
        self.emit(Cue::Correct);
        self.solved[self.current] = true;
        self.last_reward = Some(reward.clone());
        self.hint_visible = false;
        self.answer_input.clear();

        let mut points_awarded = self.settings.points_per_solve();
        if self.solved.iter().all(|solved| *solved) {
            if self.remaining_secs > 0 {
                points_awarded = points_awarded.saturating_add(self.settings.completion_bonus());
            }
            self.score = self.score.saturating_add(points_awarded);
            self.finish(EndReason::AllSolved);
            return Ok(SubmitOutcome::Completed {
                reward,
                points_awarded,
                final_score: self.score,
            });
        }

        self.score = self.score.saturating_add(points_awarded);
        let ticket = AdvanceTicket::new(
            self.generation,
            self.current,
            self.settings.advance_delay(),
        );
        self.pending_advance = Some(ticket);
        Ok(SubmitOutcome::Correct {
            reward,
            points_awarded,
            advance: ticket,
        })
    }

    /// Moves on to the next problem if `ticket` is still the pending one.
    ///
    /// Returns false for tickets from an earlier session or ones already
    /// cancelled by a restart or the session ending.
    pub fn advance(&mut self, ticket: AdvanceTicket) -> bool {
        if !self.phase.is_active() || self.pending_advance != Some(ticket) {
            log::debug!(
                "ignoring stale advance ticket (generation {}, current {})",
                ticket.generation(),
                self.generation
            );
            return false;
        }
        if ticket.to_index() >= self.challenges.len() {
            self.pending_advance = None;
            return false;
        }

        self.pending_advance = None;
        self.current = ticket.to_index();
        self.last_reward = None;
        self.hint_visible = false;
        log::debug!(
            "advanced to problem {}/{}",
            self.current + 1,
            self.challenges.len()
        );
        true
    }

    /// Accounts for one elapsed second of the countdown.
    pub fn tick(&mut self) -> TickOutcome {
        if !self.phase.is_active() {
            return TickOutcome::Idle;
        }

        self.remaining_secs = self.remaining_secs.saturating_sub(1);
        if self.remaining_secs == 0 {
            self.finish(EndReason::TimedOut);
            return TickOutcome::Expired;
        }
        TickOutcome::Running {
            remaining_secs: self.remaining_secs,
        }
    }

    fn begin_session(&mut self) {
        self.pending_advance = None;
        self.generation += 1;
        self.challenges = generate(self.difficulty, self.rng.as_mut());
        self.solved = vec![false; self.challenges.len()];
        self.current = 0;
        self.score = 0;
        self.remaining_secs = self.settings.session_secs();
        self.hint_visible = false;
        self.last_reward = None;
        self.answer_input.clear();
        self.phase = SessionPhase::Active;

        log::info!(
            "session {} started: difficulty={}, problems={}, seconds={}",
            self.generation,
            self.difficulty,
            self.challenges.len(),
            self.remaining_secs
        );
    }

    fn finish(&mut self, reason: EndReason) {
        self.phase = SessionPhase::Ended(reason);
        self.pending_advance = None;
        self.emit(Cue::Victory);

        log::info!(
            "session {} ended: reason={reason:?}, score={}, solved={}/{}",
            self.generation,
            self.score,
            self.progress().solved,
            self.challenges.len()
        );
    }

    fn emit(&self, cue: Cue) {
        if !self.sound_enabled {
            return;
        }
        if let Err(err) = self.cues.play(cue) {
            log::warn!("{err}");
        }
    }

    fn current_is_solved(&self) -> bool {
        self.solved.get(self.current).copied().unwrap_or(false)
    }

    //
    // ─── ACCESSORS ─────────────────────────────────────────────────────────────
    //

    #[must_use]
    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    #[must_use]
    pub fn screen(&self) -> Screen {
        self.phase.screen()
    }

    /// True on the playing and victory screens.
    #[must_use]
    pub fn is_started(&self) -> bool {
        self.screen() != Screen::Entry
    }

    #[must_use]
    pub fn settings(&self) -> &GameSettings {
        &self.settings
    }

    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    #[must_use]
    pub fn challenges(&self) -> &ChallengeSet {
        &self.challenges
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn current_problem(&self) -> Option<&Problem> {
        self.challenges.get(self.current)
    }

    #[must_use]
    pub fn solved(&self) -> &[bool] {
        &self.solved
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn remaining_secs(&self) -> u32 {
        self.remaining_secs
    }

    #[must_use]
    pub fn hint_visible(&self) -> bool {
        self.hint_visible
    }

    #[must_use]
    pub fn last_reward(&self) -> Option<&str> {
        self.last_reward.as_deref()
    }

    #[must_use]
    pub fn answer_input(&self) -> &str {
        &self.answer_input
    }

    #[must_use]
    pub fn sound_enabled(&self) -> bool {
        self.sound_enabled
    }

    /// Number of sessions started so far; bumped on every (re)start.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    #[must_use]
    pub fn pending_advance(&self) -> Option<AdvanceTicket> {
        self.pending_advance
    }

    #[must_use]
    pub fn progress(&self) -> SessionProgress {
        SessionProgress::from_flags(&self.solved)
    }

    /// Read-only snapshot for the view layer.
    #[must_use]
    pub fn view(&self) -> SessionView {
        SessionView::from_controller(self)
    }
}

impl fmt::Debug for SessionController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionController")
            .field("difficulty", &self.difficulty)
            .field("phase", &self.phase)
            .field("generation", &self.generation)
            .field("current", &self.current)
            .field("score", &self.score)
            .field("remaining_secs", &self.remaining_secs)
            .field("pending_advance", &self.pending_advance)
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
