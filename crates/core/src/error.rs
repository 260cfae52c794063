use thiserror::Error;

use crate::model::{AnalysisError, CompanyError, IdError, QuestionError, RoleError, SummaryError};

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Id(#[from] IdError),

    #[error(transparent)]
    Role(#[from] RoleError),

    #[error(transparent)]
    Question(#[from] QuestionError),

    #[error(transparent)]
    Summary(#[from] SummaryError),

    #[error(transparent)]
    Analysis(#[from] AnalysisError),

    #[error(transparent)]
    Company(#[from] CompanyError),
}
