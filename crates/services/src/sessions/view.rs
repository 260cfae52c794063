use serde::{Deserialize, Serialize};

use prep_core::model::{RoleId, SessionId};
use prep_core::scoring;

use super::service::{QuizPhase, QuizSession};

/// The question as the presentation layer should render it.
///
/// `number` is 1-based so it drops straight into "Question N of N".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionView {
    pub prompt: String,
    pub options: Vec<String>,
    pub number: usize,
    pub total: usize,
}

/// Presentation-agnostic snapshot of a quiz session.
///
/// This is intentionally **not** a UI view-model:
/// - no pre-formatted strings
/// - no localization assumptions
///
/// The UI decides how to render phases, percentages, and option labels.
/// Note the correct answer index is deliberately absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizSnapshot {
    pub session_id: SessionId,
    pub phase: QuizPhase,
    pub selected_role: Option<RoleId>,
    pub question: Option<QuestionView>,
    pub pending_answer: Option<usize>,
    pub score: u32,
    pub progress_percent: Option<u8>,
}

impl QuizSnapshot {
    /// Project a session into its renderable snapshot.
    #[must_use]
    pub fn of(session: &QuizSession) -> Self {
        let question = session.current_question().map(|q| QuestionView {
            prompt: q.prompt().to_string(),
            options: q.options().to_vec(),
            number: session.current_index() + 1,
            total: session.total_questions(),
        });

        let progress_percent = session
            .progress_ratio()
            .map(|ratio| (ratio * 100.0).round() as u8);

        Self {
            session_id: session.id(),
            phase: session.phase(),
            selected_role: session.selected_role().cloned(),
            question,
            pending_answer: session.pending_answer(),
            score: session.score(),
            progress_percent,
        }
    }

    /// Rounded percentage for a completed snapshot's score.
    #[must_use]
    pub fn score_percent(&self) -> u8 {
        let total = self.question.as_ref().map_or(0, |q| q.total);
        scoring::percent(self.score, u32::try_from(total).unwrap_or(u32::MAX))
    }
}
