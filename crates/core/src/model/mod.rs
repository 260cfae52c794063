mod analysis;
mod company;
mod ids;
mod question;
mod role;
mod summary;

pub use ids::{CompanyId, IdError, RoleId, SessionId};

pub use analysis::{AnalysisError, AnalysisReport, AnalysisRequest};
pub use company::{Company, CompanyError, JobOpening};
pub use question::{MIN_OPTIONS, Question, QuestionError};
pub use role::{Role, RoleError};
pub use summary::{ResultSummary, SummaryError};
