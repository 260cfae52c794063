//! Shared error types for the services crate.

use thiserror::Error;

use prep_core::model::{RoleId, SummaryError};

/// Errors emitted while building or querying the role catalog.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CatalogError {
    #[error("catalog default question set cannot be empty")]
    EmptyDefaultSet,

    #[error("question set for role `{0}` is empty")]
    EmptySet(RoleId),

    #[error("duplicate role id `{0}` in catalog")]
    DuplicateRole(RoleId),

    #[error("unknown role id `{0}`")]
    UnknownRole(RoleId),
}

/// Sequencing and state errors from the quiz session machine.
///
/// Every variant is a recoverable rejection; the caller may re-check the
/// session state and retry.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuizError {
    #[error("no role selected")]
    NoRoleSelected,

    #[error("session has already started")]
    AlreadyStarted,

    #[error("session is not in progress")]
    NotInProgress,

    #[error("no answer selected for the current question")]
    NoAnswerSelected,

    #[error("answer index {index} out of range for {len} options")]
    AnswerOutOfRange { index: usize, len: usize },

    #[error("session is not complete")]
    NotCompleted,

    #[error("no questions available for session")]
    EmptyQuestionSet,

    #[error(transparent)]
    Summary(#[from] SummaryError),

    #[error(transparent)]
    Catalog(#[from] CatalogError),
}
