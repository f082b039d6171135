//! Form state and the submission state machine.

mod form;
mod outcome;
mod submission;

pub use form::{ApiError, FormState};
pub use outcome::SubmissionResult;
pub use submission::{Phase, SubmissionController};
