mod advance;
mod controller;
mod progress;
mod state;
mod view;

// Public API of the session subsystem.
pub use crate::error::SubmitError;
pub use advance::AdvanceTicket;
pub use controller::{RETRY_MESSAGE, SessionController, SubmitOutcome, TickOutcome};
pub use progress::SessionProgress;
pub use state::{EndReason, Screen, SessionPhase};
pub use view::{ProblemView, SessionView};
