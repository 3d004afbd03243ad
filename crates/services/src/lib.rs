#![forbid(unsafe_code)]

pub mod audio;
pub mod driver;
pub mod error;
pub mod sessions;

pub use audio::{Cue, CueSink, LogCueSink, RecordingCueSink, SilentCueSink};
pub use driver::GameDriver;
pub use error::{CueError, SubmitError};

pub use sessions::{
    AdvanceTicket, EndReason, ProblemView, RETRY_MESSAGE, Screen, SessionController,
    SessionPhase, SessionProgress, SessionView, SubmitOutcome, TickOutcome,
};
