use serde::{Deserialize, Serialize};
use thiserror::Error;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum AnalysisError {
    #[error("no resume file provided")]
    MissingResume,

    #[error("job title is required")]
    MissingJobTitle,

    #[error("job description is required")]
    MissingJobDescription,
}

//
// ─── REQUEST ───────────────────────────────────────────────────────────────────
//

/// Validated input for a resume analysis run.
///
/// All three fields must be present; the file itself is never opened or
/// parsed, only its name travels with the request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisRequest {
    resume_file: String,
    job_title: String,
    job_description: String,
}

impl AnalysisRequest {
    /// Create a request, requiring every field to be non-empty after trimming.
    ///
    /// # Errors
    ///
    /// Returns the `AnalysisError` variant for the first missing field.
    pub fn new(
        resume_file: impl Into<String>,
        job_title: impl Into<String>,
        job_description: impl Into<String>,
    ) -> Result<Self, AnalysisError> {
        let resume_file = resume_file.into();
        let job_title = job_title.into();
        let job_description = job_description.into();

        if resume_file.trim().is_empty() {
            return Err(AnalysisError::MissingResume);
        }
        if job_title.trim().is_empty() {
            return Err(AnalysisError::MissingJobTitle);
        }
        if job_description.trim().is_empty() {
            return Err(AnalysisError::MissingJobDescription);
        }

        Ok(Self {
            resume_file,
            job_title,
            job_description,
        })
    }

    #[must_use]
    pub fn resume_file(&self) -> &str {
        &self.resume_file
    }

    #[must_use]
    pub fn job_title(&self) -> &str {
        &self.job_title
    }

    #[must_use]
    pub fn job_description(&self) -> &str {
        &self.job_description
    }
}

//
// ─── REPORT ────────────────────────────────────────────────────────────────────
//

/// Outcome of a resume analysis run.
///
/// Scores are percentages in `0..=100`. Plain data for the presentation
/// layer; no invariants beyond what the producing service guarantees.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub match_score: u8,
    pub matching_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub suggestions: Vec<String>,
    pub ats_score: u8,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_requires_resume_file() {
        let err = AnalysisRequest::new("", "Engineer", "desc").unwrap_err();
        assert_eq!(err, AnalysisError::MissingResume);
    }

    #[test]
    fn request_requires_job_title() {
        let err = AnalysisRequest::new("cv.pdf", "  ", "desc").unwrap_err();
        assert_eq!(err, AnalysisError::MissingJobTitle);
    }

    #[test]
    fn request_requires_job_description() {
        let err = AnalysisRequest::new("cv.pdf", "Engineer", "").unwrap_err();
        assert_eq!(err, AnalysisError::MissingJobDescription);
    }

    #[test]
    fn complete_request_validates() {
        let request = AnalysisRequest::new("cv.pdf", "Engineer", "Build things").unwrap();
        assert_eq!(request.resume_file(), "cv.pdf");
        assert_eq!(request.job_title(), "Engineer");
    }
}
