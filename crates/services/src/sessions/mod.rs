mod progress;
mod service;
mod view;
mod workflow;

// Public API of the quiz session subsystem.
pub use crate::error::QuizError;
pub use progress::SessionProgress;
pub use service::{AdvanceOutcome, QuizPhase, QuizSession};
pub use view::{QuestionView, QuizSnapshot};
pub use workflow::{QuizAnswerResult, QuizCoordinator};
