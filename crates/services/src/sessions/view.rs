use escape_core::model::Difficulty;

use super::controller::SessionController;
use super::progress::SessionProgress;
use super::state::{Screen, SessionPhase};

/// The problem currently on screen.
///
/// Carries no answer; the view only ever needs the question and hint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProblemView {
    /// One-based position in the challenge set.
    pub number: usize,
    pub question: String,
    /// Present only while the hint is toggled on and the problem is unsolved.
    pub hint: Option<String>,
    pub solved: bool,
}

/// Presentation-agnostic snapshot of a session.
///
/// Rebuilt after every state change; the view renders from this alone and
/// never reaches into the controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionView {
    pub screen: Screen,
    pub phase: SessionPhase,
    pub difficulty: Difficulty,
    pub current_index: usize,
    pub total: usize,
    pub solved: Vec<bool>,
    pub score: u32,
    pub remaining_secs: u32,
    pub hint_visible: bool,
    pub last_reward: Option<String>,
    pub started: bool,
    pub sound_enabled: bool,
    pub answer_input: String,
    /// Set only on the playing screen.
    pub problem: Option<ProblemView>,
}

impl SessionView {
    #[must_use]
    pub fn from_controller(controller: &SessionController) -> Self {
        let screen = controller.screen();
        let current_index = controller.current_index();
        let solved = controller.solved().to_vec();
        let current_solved = solved.get(current_index).copied().unwrap_or(false);

        let problem = if screen == Screen::Playing {
            controller.current_problem().map(|problem| ProblemView {
                number: current_index + 1,
                question: problem.question().to_owned(),
                hint: (controller.hint_visible() && !current_solved)
                    .then(|| problem.hint().to_owned()),
                solved: current_solved,
            })
        } else {
            None
        };

        Self {
            screen,
            phase: controller.phase(),
            difficulty: controller.difficulty(),
            current_index,
            total: controller.challenges().len(),
            solved,
            score: controller.score(),
            remaining_secs: controller.remaining_secs(),
            hint_visible: controller.hint_visible(),
            last_reward: controller.last_reward().map(str::to_owned),
            started: controller.is_started(),
            sound_enabled: controller.sound_enabled(),
            answer_input: controller.answer_input().to_owned(),
            problem,
        }
    }

    #[must_use]
    pub fn difficulty_label(&self) -> &'static str {
        self.difficulty.display_name()
    }

    /// E.g. "Challenge 3 of 9".
    #[must_use]
    pub fn progress_label(&self) -> String {
        format!("Challenge {} of {}", self.current_index + 1, self.total)
    }

    #[must_use]
    pub fn progress(&self) -> SessionProgress {
        SessionProgress::from_flags(&self.solved)
    }

    #[must_use]
    pub fn all_solved(&self) -> bool {
        self.progress().is_complete
    }
}
