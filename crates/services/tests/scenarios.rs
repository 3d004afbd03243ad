use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use escape_core::RandomSource;
use escape_core::model::{CHALLENGE_COUNT, Difficulty, GameSettings};
use rand::SeedableRng;
use rand::rngs::StdRng;
use services::{
    Cue, CueSink, EndReason, RecordingCueSink, Screen, SessionController, SessionPhase,
    SubmitOutcome, TickOutcome,
};

/// Seeded generator that counts how many draws generation asked for.
struct CountingRandom {
    inner: StdRng,
    draws: Arc<AtomicUsize>,
}

impl RandomSource for CountingRandom {
    fn below(&mut self, upper: u32) -> u32 {
        self.draws.fetch_add(1, Ordering::SeqCst);
        self.inner.below(upper)
    }
}

fn build(seed: u64, sink: &Arc<RecordingCueSink>) -> (SessionController, Arc<AtomicUsize>) {
    let draws = Arc::new(AtomicUsize::new(0));
    let rng = CountingRandom {
        inner: StdRng::seed_from_u64(seed),
        draws: Arc::clone(&draws),
    };
    let controller = SessionController::new(
        Difficulty::Easy,
        GameSettings::default(),
        Box::new(rng),
        Arc::clone(sink) as Arc<dyn CueSink>,
    );
    (controller, draws)
}

fn answer_current(controller: &mut SessionController) -> SubmitOutcome {
    let answer = controller.current_problem().unwrap().answer();
    controller.set_answer_input(answer.to_string());
    controller.submit().unwrap()
}

#[test]
fn easy_room_solved_before_timeout_scores_110() {
    let sink = Arc::new(RecordingCueSink::new());
    let (mut controller, _) = build(11, &sink);
    controller.select_difficulty(Difficulty::Easy);

    for index in 0..CHALLENGE_COUNT {
        assert_eq!(controller.current_index(), index);
        let score_before = controller.score();
        // A few seconds pass on every problem.
        for _ in 0..3 {
            controller.tick();
        }

        match answer_current(&mut controller) {
            SubmitOutcome::Correct { advance, .. } => {
                assert_eq!(controller.score(), score_before + 10);
                assert!(controller.solved()[index]);
                assert!(controller.advance(advance));
            }
            SubmitOutcome::Completed { final_score, .. } => {
                assert_eq!(index, CHALLENGE_COUNT - 1);
                assert_eq!(final_score, score_before + 10 + 20);
            }
            SubmitOutcome::Incorrect => panic!("answer should have been accepted"),
        }
    }

    let view = controller.view();
    assert_eq!(view.screen, Screen::Victory);
    assert_eq!(view.phase, SessionPhase::Ended(EndReason::AllSolved));
    assert_eq!(view.score, 110);
    assert!(view.all_solved());
    assert_eq!(view.remaining_secs, 60 - 27);

    let played = sink.played();
    assert_eq!(played.len(), CHALLENGE_COUNT + 1);
    assert!(played[..CHALLENGE_COUNT].iter().all(|cue| *cue == Cue::Correct));
    assert_eq!(played[CHALLENGE_COUNT], Cue::Victory);
}

#[test]
fn idle_player_times_out_without_victory() {
    let sink = Arc::new(RecordingCueSink::new());
    let (mut controller, _) = build(5, &sink);
    controller.start();

    let mut previous = controller.remaining_secs();
    loop {
        match controller.tick() {
            TickOutcome::Running { remaining_secs } => {
                assert_eq!(remaining_secs, previous - 1);
                previous = remaining_secs;
            }
            TickOutcome::Expired => break,
            TickOutcome::Idle => panic!("session stopped before the countdown ended"),
        }
    }

    let view = controller.view();
    assert_eq!(view.phase, SessionPhase::Ended(EndReason::TimedOut));
    assert_eq!(view.screen, Screen::Entry);
    assert_eq!(view.score, 0);
    assert_eq!(view.remaining_secs, 0);
    assert!(view.solved.iter().all(|solved| !solved));
    assert!(!view.all_solved());
}

#[test]
fn non_integer_input_never_changes_progress() {
    let sink = Arc::new(RecordingCueSink::new());
    let (mut controller, _) = build(3, &sink);
    controller.start();
    answer_current(&mut controller);
    let before = controller.view();

    for raw in ["", "  ", "abc", "1.5", "7 8", "0x10"] {
        controller.set_answer_input(raw);
        assert!(controller.submit().is_err());
    }

    let after = controller.view();
    assert_eq!(after.score, before.score);
    assert_eq!(after.solved, before.solved);
    assert_eq!(after.current_index, before.current_index);
}

#[test]
fn restart_resets_everything_and_regenerates() {
    let sink = Arc::new(RecordingCueSink::new());
    let (mut controller, draws) = build(21, &sink);
    let construction_draws = draws.load(Ordering::SeqCst);
    assert!(construction_draws > 0);

    controller.start();
    controller.tick();
    controller.toggle_hint();
    let SubmitOutcome::Correct { advance, .. } = answer_current(&mut controller) else {
        panic!("expected a correct outcome");
    };
    assert!(controller.advance(advance));
    controller.toggle_hint();

    let draws_before = draws.load(Ordering::SeqCst);
    let generation_before = controller.generation();
    controller.restart();

    assert!(draws.load(Ordering::SeqCst) > draws_before);
    assert_eq!(controller.generation(), generation_before + 1);
    let view = controller.view();
    assert_eq!(view.score, 0);
    assert_eq!(view.current_index, 0);
    assert_eq!(view.remaining_secs, 60);
    assert_eq!(view.solved, vec![false; CHALLENGE_COUNT]);
    assert!(!view.hint_visible);
    assert!(view.last_reward.is_none());
    assert_eq!(view.phase, SessionPhase::Active);
}
