use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use prep_core::model::{Question, ResultSummary, RoleId, SessionId, SummaryError};

use super::progress::SessionProgress;
use crate::error::QuizError;

//
// ─── PHASE ─────────────────────────────────────────────────────────────────────
//

/// Lifecycle phase of a quiz session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum QuizPhase {
    #[default]
    NotStarted,
    InProgress,
    Completed,
}

/// What a single `advance` did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdvanceOutcome {
    pub was_correct: bool,
    pub is_complete: bool,
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// One user's run through a role's question sequence.
///
/// All quiz state lives here and changes only through the transition
/// methods, so a score bump can never be observed without its matching
/// position update. Every precondition violation is a recoverable
/// [`QuizError`]; nothing in this type panics on caller sequencing
/// mistakes.
#[derive(Clone, PartialEq)]
pub struct QuizSession {
    id: SessionId,
    selected_role: Option<RoleId>,
    questions: Vec<Question>,
    current: usize,
    pending_answer: Option<usize>,
    score: u32,
    phase: QuizPhase,
    started_at: Option<DateTime<Utc>>,
    completed_at: Option<DateTime<Utc>>,
}

impl QuizSession {
    /// A fresh, empty session with no role selected.
    #[must_use]
    pub fn new() -> Self {
        Self {
            id: SessionId::new(),
            selected_role: None,
            questions: Vec::new(),
            current: 0,
            pending_answer: None,
            score: 0,
            phase: QuizPhase::NotStarted,
            started_at: None,
            completed_at: None,
        }
    }

    //
    // ─── TRANSITIONS ───────────────────────────────────────────────────────
    //

    /// Record the role this session will practice for.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::AlreadyStarted` unless the session is still in
    /// `NotStarted`; the role is immutable once a run has begun.
    pub fn select_role(&mut self, role: RoleId) -> Result<(), QuizError> {
        if self.phase != QuizPhase::NotStarted {
            return Err(QuizError::AlreadyStarted);
        }
        self.selected_role = Some(role);
        Ok(())
    }

    /// Start (or retake) a run with the given question sequence.
    ///
    /// Snapshots the questions and zeroes all counters, so calling this
    /// again after completion gives a clean retake with no stale score.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::NoRoleSelected` if no role was selected,
    /// `QuizError::AlreadyStarted` while a run is in progress, and
    /// `QuizError::EmptyQuestionSet` for an empty question list.
    pub fn start(
        &mut self,
        questions: Vec<Question>,
        now: DateTime<Utc>,
    ) -> Result<(), QuizError> {
        if self.selected_role.is_none() {
            return Err(QuizError::NoRoleSelected);
        }
        if self.phase == QuizPhase::InProgress {
            return Err(QuizError::AlreadyStarted);
        }
        if questions.is_empty() {
            return Err(QuizError::EmptyQuestionSet);
        }

        self.id = SessionId::new();
        self.questions = questions;
        self.current = 0;
        self.pending_answer = None;
        self.score = 0;
        self.phase = QuizPhase::InProgress;
        self.started_at = Some(now);
        self.completed_at = None;
        Ok(())
    }

    /// Pick an answer for the current question without committing it.
    ///
    /// Calling again overwrites the previous pick; nothing is scored until
    /// [`advance`](Self::advance).
    ///
    /// # Errors
    ///
    /// Returns `QuizError::NotInProgress` outside a run and
    /// `QuizError::AnswerOutOfRange` for an invalid option index.
    pub fn select_answer(&mut self, index: usize) -> Result<(), QuizError> {
        if self.phase != QuizPhase::InProgress {
            return Err(QuizError::NotInProgress);
        }
        let Some(question) = self.questions.get(self.current) else {
            return Err(QuizError::NotInProgress);
        };
        if index >= question.option_count() {
            return Err(QuizError::AnswerOutOfRange {
                index,
                len: question.option_count(),
            });
        }
        self.pending_answer = Some(index);
        Ok(())
    }

    /// Commit the pending answer: score it, then move on or complete.
    ///
    /// Score and position are derived from one snapshot of the pending
    /// answer and current index; no intermediate state is observable. On
    /// the last question the phase flips to `Completed` and the index stays
    /// put so "Question N of N" still renders.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::NotInProgress` outside a run and
    /// `QuizError::NoAnswerSelected` when nothing is pending.
    pub fn advance(&mut self, now: DateTime<Utc>) -> Result<AdvanceOutcome, QuizError> {
        if self.phase != QuizPhase::InProgress {
            return Err(QuizError::NotInProgress);
        }
        let Some(pending) = self.pending_answer else {
            return Err(QuizError::NoAnswerSelected);
        };
        let Some(question) = self.questions.get(self.current) else {
            return Err(QuizError::NotInProgress);
        };

        let was_correct = question.is_correct(pending);
        if was_correct {
            self.score += 1;
        }
        self.pending_answer = None;

        if self.current + 1 >= self.questions.len() {
            self.phase = QuizPhase::Completed;
            self.completed_at = Some(now);
        } else {
            self.current += 1;
        }

        Ok(AdvanceOutcome {
            was_correct,
            is_complete: self.phase == QuizPhase::Completed,
        })
    }

    /// Discard the session entirely: role, questions, counters, timestamps.
    ///
    /// Valid from any phase; the session returns to `NotStarted` as if
    /// freshly created.
    pub fn exit(&mut self) {
        *self = Self::new();
    }

    //
    // ─── QUERIES ───────────────────────────────────────────────────────────
    //

    #[must_use]
    pub fn id(&self) -> SessionId {
        self.id
    }

    #[must_use]
    pub fn phase(&self) -> QuizPhase {
        self.phase
    }

    #[must_use]
    pub fn selected_role(&self) -> Option<&RoleId> {
        self.selected_role.as_ref()
    }

    /// The question currently shown. Still the last question after
    /// completion, `None` before a run starts.
    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        self.questions.get(self.current)
    }

    /// Zero-based index of the current question.
    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn pending_answer(&self) -> Option<usize> {
        self.pending_answer
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn total_questions(&self) -> usize {
        self.questions.len()
    }

    /// Number of questions already committed.
    #[must_use]
    pub fn answered_count(&self) -> usize {
        if self.phase == QuizPhase::Completed {
            self.questions.len()
        } else {
            self.current
        }
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.phase == QuizPhase::Completed
    }

    #[must_use]
    pub fn started_at(&self) -> Option<DateTime<Utc>> {
        self.started_at
    }

    #[must_use]
    pub fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    /// `(current + 1) / total`, or `None` before any questions are loaded.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn progress_ratio(&self) -> Option<f64> {
        if self.questions.is_empty() {
            return None;
        }
        Some((self.current + 1) as f64 / self.questions.len() as f64)
    }

    /// Aggregated progress counters for display.
    #[must_use]
    pub fn progress(&self) -> SessionProgress {
        SessionProgress {
            total: self.questions.len(),
            answered: self.answered_count(),
            remaining: self.questions.len().saturating_sub(self.answered_count()),
            is_complete: self.is_complete(),
        }
    }

    /// Final result of a completed run.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::NotCompleted` unless the phase is `Completed`.
    pub fn result_summary(&self) -> Result<ResultSummary, QuizError> {
        if self.phase != QuizPhase::Completed {
            return Err(QuizError::NotCompleted);
        }
        let role = self
            .selected_role
            .clone()
            .ok_or(QuizError::NoRoleSelected)?;
        let started_at = self.started_at.ok_or(QuizError::NotCompleted)?;
        let completed_at = self.completed_at.ok_or(QuizError::NotCompleted)?;
        let total = u32::try_from(self.questions.len()).map_err(|_| {
            QuizError::Summary(SummaryError::TooManyQuestions {
                len: self.questions.len(),
            })
        })?;

        Ok(ResultSummary::new(
            role,
            started_at,
            completed_at,
            self.score,
            total,
        )?)
    }
}

impl Default for QuizSession {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for QuizSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuizSession")
            .field("id", &self.id)
            .field("selected_role", &self.selected_role)
            .field("questions_len", &self.questions.len())
            .field("current", &self.current)
            .field("pending_answer", &self.pending_answer)
            .field("score", &self.score)
            .field("phase", &self.phase)
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
