//! Tokio host loop for a `SessionController`.
//!
//! The controller itself never sleeps. `GameDriver` owns the two timers a
//! running game needs: the one-second countdown and the short pause before
//! the next problem appears. Both are aborted on restart, so a new session
//! never inherits ticks or advances from an old one.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use escape_core::model::Difficulty;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior, interval_at};

use crate::error::SubmitError;
use crate::sessions::{AdvanceTicket, SessionController, SessionView, SubmitOutcome, TickOutcome};

const TICK: Duration = Duration::from_secs(1);

fn lock(controller: &Mutex<SessionController>) -> MutexGuard<'_, SessionController> {
    controller.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Drives a session in real time on the current tokio runtime.
///
/// Every method that may spawn a timer must be called from within a runtime.
pub struct GameDriver {
    controller: Arc<Mutex<SessionController>>,
    countdown: Option<JoinHandle<()>>,
    advance: Option<JoinHandle<()>>,
}

impl GameDriver {
    #[must_use]
    pub fn new(controller: SessionController) -> Self {
        Self {
            controller: Arc::new(Mutex::new(controller)),
            countdown: None,
            advance: None,
        }
    }

    /// Shared handle to the controller, e.g. for a view that polls snapshots.
    #[must_use]
    pub fn controller(&self) -> Arc<Mutex<SessionController>> {
        Arc::clone(&self.controller)
    }

    #[must_use]
    pub fn view(&self) -> SessionView {
        lock(&self.controller).view()
    }

    /// True while a countdown task is armed and still running.
    #[must_use]
    pub fn is_counting_down(&self) -> bool {
        self.countdown
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }

    /// Starts a session; does nothing while one is already running.
    pub fn start(&mut self) {
        let started = lock(&self.controller).start();
        if started {
            self.rearm();
        }
    }

    pub fn restart(&mut self) {
        lock(&self.controller).restart();
        self.rearm();
    }

    pub fn select_difficulty(&mut self, difficulty: Difficulty) {
        lock(&self.controller).select_difficulty(difficulty);
        self.rearm();
    }

    pub fn toggle_sound(&self) -> bool {
        lock(&self.controller).toggle_sound()
    }

    pub fn toggle_hint(&self) -> bool {
        lock(&self.controller).toggle_hint()
    }

    pub fn set_answer_input(&self, text: impl Into<String>) {
        lock(&self.controller).set_answer_input(text);
    }

    /// Submits the answer field and arms or disarms timers accordingly.
    ///
    /// # Errors
    ///
    /// Propagates `SubmitError` from the controller.
    pub fn submit(&mut self) -> Result<SubmitOutcome, SubmitError> {
        let outcome = lock(&self.controller).submit()?;
        match &outcome {
            SubmitOutcome::Correct { advance, .. } => self.schedule_advance(*advance),
            SubmitOutcome::Completed { .. } => self.stop_countdown(),
            SubmitOutcome::Incorrect => {}
        }
        Ok(outcome)
    }

    /// Stops both timers without touching session state.
    pub fn shutdown(&mut self) {
        self.cancel_advance();
        self.stop_countdown();
    }

    fn rearm(&mut self) {
        self.cancel_advance();
        self.stop_countdown();
        if lock(&self.controller).phase().is_active() {
            self.countdown = Some(spawn_countdown(Arc::clone(&self.controller)));
        }
    }

    fn schedule_advance(&mut self, ticket: AdvanceTicket) {
        self.cancel_advance();
        let controller = Arc::clone(&self.controller);
        self.advance = Some(tokio::spawn(async move {
            tokio::time::sleep(ticket.delay()).await;
            if !lock(&controller).advance(ticket) {
                log::debug!("advance to problem {} dropped", ticket.to_index() + 1);
            }
        }));
    }

    fn cancel_advance(&mut self) {
        if let Some(handle) = self.advance.take() {
            handle.abort();
        }
    }

    fn stop_countdown(&mut self) {
        if let Some(handle) = self.countdown.take() {
            handle.abort();
        }
    }
}

impl Drop for GameDriver {
    fn drop(&mut self) {
        self.shutdown();
    }
}

fn spawn_countdown(controller: Arc<Mutex<SessionController>>) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = interval_at(Instant::now() + TICK, TICK);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        loop {
            ticker.tick().await;
            let outcome = lock(&controller).tick();
            match outcome {
                TickOutcome::Running { remaining_secs } => {
                    log::debug!("{remaining_secs}s left");
                }
                TickOutcome::Expired | TickOutcome::Idle => break,
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use escape_core::ScriptedRandom;
    use escape_core::model::GameSettings;

    use crate::audio::SilentCueSink;
    use crate::sessions::{EndReason, SessionPhase};

    fn driver() -> GameDriver {
        GameDriver::new(SessionController::new(
            Difficulty::Easy,
            GameSettings::default(),
            Box::new(ScriptedRandom::new(vec![3])),
            Arc::new(SilentCueSink),
        ))
    }

    fn submit_correct(driver: &mut GameDriver) -> SubmitOutcome {
        let answer = {
            let controller = driver.controller();
            let guard = lock(&controller);
            guard.current_problem().unwrap().answer()
        };
        driver.set_answer_input(answer.to_string());
        driver.submit().unwrap()
    }

    async fn sleep_ms(ms: u64) {
        tokio::time::sleep(Duration::from_millis(ms)).await;
    }

    #[tokio::test(start_paused = true)]
    async fn countdown_ticks_once_per_second() {
        let mut driver = driver();
        driver.start();
        assert!(driver.is_counting_down());

        sleep_ms(10_500).await;
        assert_eq!(driver.view().remaining_secs, 50);
    }

    #[tokio::test(start_paused = true)]
    async fn countdown_expiry_ends_session() {
        let mut driver = driver();
        driver.start();

        sleep_ms(61_000).await;
        let view = driver.view();
        assert_eq!(view.phase, SessionPhase::Ended(EndReason::TimedOut));
        assert_eq!(view.remaining_secs, 0);
        assert_eq!(view.score, 0);
        assert!(!view.started);
        assert!(!driver.is_counting_down());
    }

    #[tokio::test(start_paused = true)]
    async fn correct_answer_advances_after_delay() {
        let mut driver = driver();
        driver.start();
        assert!(matches!(
            submit_correct(&mut driver),
            SubmitOutcome::Correct { .. }
        ));

        sleep_ms(1_000).await;
        assert_eq!(driver.view().current_index, 0);
        assert!(driver.view().last_reward.is_some());

        sleep_ms(1_000).await;
        let view = driver.view();
        assert_eq!(view.current_index, 1);
        assert!(view.last_reward.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn restart_cancels_scheduled_advance() {
        let mut driver = driver();
        driver.start();
        submit_correct(&mut driver);
        driver.restart();

        sleep_ms(2_500).await;
        let view = driver.view();
        assert_eq!(view.current_index, 0);
        assert_eq!(view.score, 0);
        assert_eq!(view.remaining_secs, 58);
    }

    #[tokio::test(start_paused = true)]
    async fn restarting_never_duplicates_the_countdown() {
        let mut driver = driver();
        driver.start();
        sleep_ms(500).await;
        driver.restart();
        driver.select_difficulty(Difficulty::Medium);

        sleep_ms(3_200).await;
        assert_eq!(driver.view().remaining_secs, 57);
    }

    #[tokio::test(start_paused = true)]
    async fn start_during_pending_advance_keeps_the_advance() {
        let mut driver = driver();
        driver.start();
        submit_correct(&mut driver);
        driver.start();

        sleep_ms(2_000).await;
        let view = driver.view();
        assert_eq!(view.phase, SessionPhase::Active);
        assert_eq!(view.current_index, 1);
        assert!(view.problem.is_some_and(|problem| !problem.solved));
        assert!(matches!(
            submit_correct(&mut driver),
            SubmitOutcome::Correct { .. }
        ));
    }

    #[tokio::test(start_paused = true)]
    async fn repeated_start_does_not_reset_the_countdown() {
        let mut driver = driver();
        driver.start();
        for _ in 0..15 {
            sleep_ms(900).await;
            driver.start();
        }

        // 13.5 s since the first start.
        assert_eq!(driver.view().remaining_secs, 47);
        assert!(driver.is_counting_down());
    }

    #[tokio::test(start_paused = true)]
    async fn completing_the_room_stops_the_clock() {
        let mut driver = driver();
        driver.start();

        for _ in 0..8 {
            submit_correct(&mut driver);
            sleep_ms(1_600).await;
        }
        let outcome = submit_correct(&mut driver);
        assert!(matches!(
            outcome,
            SubmitOutcome::Completed {
                final_score: 110,
                ..
            }
        ));
        assert!(!driver.is_counting_down());

        let remaining = driver.view().remaining_secs;
        sleep_ms(5_000).await;
        let view = driver.view();
        assert_eq!(view.remaining_secs, remaining);
        assert_eq!(view.phase, SessionPhase::Ended(EndReason::AllSolved));
        assert!(view.all_solved());
    }
}
