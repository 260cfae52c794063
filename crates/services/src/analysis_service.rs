use std::time::Duration;

use prep_core::model::{AnalysisReport, AnalysisRequest};

/// How long the mock analysis takes by default.
pub const DEFAULT_ANALYSIS_DELAY: Duration = Duration::from_secs(2);

/// Mock resume analyzer.
///
/// Real analysis is a non-goal: this service waits for a configurable
/// delay and resolves to a fixed report. The work is cancellable by
/// dropping the future; a caller that navigates away simply never reads
/// the result. Input validation happens earlier, when the
/// [`AnalysisRequest`] is constructed.
#[derive(Debug, Clone)]
pub struct AnalysisService {
    delay: Duration,
}

impl AnalysisService {
    #[must_use]
    pub fn new() -> Self {
        Self {
            delay: DEFAULT_ANALYSIS_DELAY,
        }
    }

    /// Override the simulated analysis delay. Tests use `Duration::ZERO`.
    #[must_use]
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    #[must_use]
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Run the analysis: wait out the delay, then return the canned report.
    ///
    /// The request content does not influence the outcome.
    pub async fn analyze(&self, _request: &AnalysisRequest) -> AnalysisReport {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        canned_report()
    }
}

impl Default for AnalysisService {
    fn default() -> Self {
        Self::new()
    }
}

fn canned_report() -> AnalysisReport {
    let strings = |items: &[&str]| -> Vec<String> {
        items.iter().map(|s| (*s).to_string()).collect()
    };

    AnalysisReport {
        match_score: 78,
        matching_skills: strings(&[
            "JavaScript",
            "React",
            "TypeScript",
            "Node.js",
            "Problem Solving",
        ]),
        missing_skills: strings(&["AWS", "Docker", "Kubernetes", "GraphQL"]),
        suggestions: strings(&[
            "Add more quantifiable achievements to demonstrate impact",
            "Include specific technologies mentioned in job description",
            "Optimize keywords for ATS compatibility",
            "Add a professional summary at the top",
        ]),
        ats_score: 85,
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> AnalysisRequest {
        AnalysisRequest::new("resume.pdf", "Senior Software Engineer", "Build things").unwrap()
    }

    #[tokio::test]
    async fn analysis_resolves_to_fixed_report() {
        let service = AnalysisService::new().with_delay(Duration::ZERO);
        let report = service.analyze(&request()).await;

        assert_eq!(report.match_score, 78);
        assert_eq!(report.ats_score, 85);
        assert_eq!(report.matching_skills.len(), 5);
        assert_eq!(report.missing_skills.len(), 4);
        assert_eq!(report.suggestions.len(), 4);
    }

    #[tokio::test]
    async fn report_is_independent_of_request_content() {
        let service = AnalysisService::new().with_delay(Duration::ZERO);
        let other = AnalysisRequest::new("cv.docx", "Data Scientist", "Model things").unwrap();

        assert_eq!(service.analyze(&request()).await, service.analyze(&other).await);
    }

    #[tokio::test(start_paused = true)]
    async fn analysis_waits_out_the_delay() {
        let service = AnalysisService::new();
        let req = request();
        let work = service.analyze(&req);
        tokio::pin!(work);

        // Nothing resolves before the simulated delay elapses.
        let early = tokio::time::timeout(Duration::from_millis(500), work.as_mut()).await;
        assert!(early.is_err());

        let report = work.await;
        assert_eq!(report.match_score, 78);
    }
}
