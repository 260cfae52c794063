use std::sync::Arc;

use rand::seq::SliceRandom;

use prep_core::Clock;
use prep_core::model::{Question, ResultSummary, RoleId};

use super::service::QuizSession;
use super::view::QuizSnapshot;
use crate::catalog::RoleCatalog;
use crate::error::{CatalogError, QuizError};

/// Result of committing one answer through the coordinator.
#[derive(Debug, Clone, PartialEq)]
pub struct QuizAnswerResult {
    pub was_correct: bool,
    pub is_complete: bool,
    /// Present exactly when the answer completed the run.
    pub summary: Option<ResultSummary>,
}

/// Orchestrates quiz runs: resolves questions from the catalog, supplies
/// time from the clock, and hands back sessions and snapshots.
///
/// The coordinator is stateless; the [`QuizSession`] it returns is the
/// single owner of all run state.
#[derive(Clone)]
pub struct QuizCoordinator {
    catalog: Arc<RoleCatalog>,
    clock: Clock,
    shuffle: bool,
}

impl QuizCoordinator {
    #[must_use]
    pub fn new(catalog: Arc<RoleCatalog>, clock: Clock) -> Self {
        Self {
            catalog,
            clock,
            shuffle: false,
        }
    }

    /// Enable or disable shuffling of the resolved question order at start.
    /// Off by default; the catalog order is the canonical one.
    #[must_use]
    pub fn with_shuffle(mut self, shuffle: bool) -> Self {
        self.shuffle = shuffle;
        self
    }

    #[must_use]
    pub fn catalog(&self) -> &RoleCatalog {
        &self.catalog
    }

    /// Start a new session for the given role.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::UnknownRole` for a role the catalog does not
    /// list, and propagates session start failures.
    pub fn start_session(&self, role_id: &RoleId) -> Result<QuizSession, QuizError> {
        if !self.catalog.contains(role_id) {
            return Err(CatalogError::UnknownRole(role_id.clone()).into());
        }

        let mut session = QuizSession::new();
        session.select_role(role_id.clone())?;
        session.start(self.resolve_questions(role_id), self.clock.now())?;
        Ok(session)
    }

    /// Commit the pending answer on `session`.
    ///
    /// When the answer completes the run, the result summary is built and
    /// returned alongside the outcome.
    ///
    /// # Errors
    ///
    /// Propagates `QuizError` for sequencing violations.
    pub fn advance(&self, session: &mut QuizSession) -> Result<QuizAnswerResult, QuizError> {
        let outcome = session.advance(self.clock.now())?;
        let summary = if outcome.is_complete {
            Some(session.result_summary()?)
        } else {
            None
        };

        Ok(QuizAnswerResult {
            was_correct: outcome.was_correct,
            is_complete: outcome.is_complete,
            summary,
        })
    }

    /// Restart the run for the role `session` already has selected,
    /// re-resolving the question sequence and zeroing all counters.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::NoRoleSelected` for a session with no role and
    /// `QuizError::AlreadyStarted` while a run is still in progress.
    pub fn retake(&self, session: &mut QuizSession) -> Result<(), QuizError> {
        let role_id = session
            .selected_role()
            .cloned()
            .ok_or(QuizError::NoRoleSelected)?;
        session.start(self.resolve_questions(&role_id), self.clock.now())
    }

    /// Current renderable snapshot of `session`.
    #[must_use]
    pub fn snapshot(&self, session: &QuizSession) -> QuizSnapshot {
        QuizSnapshot::of(session)
    }

    fn resolve_questions(&self, role_id: &RoleId) -> Vec<Question> {
        let mut questions = self.catalog.questions_for(role_id).to_vec();
        if self.shuffle {
            let mut rng = rand::rng();
            questions.as_mut_slice().shuffle(&mut rng);
        }
        questions
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
