#![forbid(unsafe_code)]

pub mod analysis_service;
pub mod catalog;
pub mod error;
pub mod insights_service;
pub mod sessions;

pub use prep_core::Clock;

pub use error::{CatalogError, QuizError};

pub use analysis_service::{AnalysisService, DEFAULT_ANALYSIS_DELAY};
pub use catalog::RoleCatalog;
pub use insights_service::InsightsService;
pub use sessions::{
    AdvanceOutcome, QuizAnswerResult, QuizCoordinator, QuizPhase, QuizSession, QuizSnapshot,
    SessionProgress,
};
