use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::ids::RoleId;
use crate::scoring::{self, Tier};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SummaryError {
    #[error("completed_at is before started_at")]
    InvalidTimeRange,

    #[error("score ({score}) exceeds total questions ({total})")]
    ScoreExceedsTotal { score: u32, total: u32 },

    #[error("summary requires at least one question")]
    NoQuestions,

    #[error("too many questions for a single session: {len}")]
    TooManyQuestions { len: usize },
}

/// Aggregate result for a completed quiz run.
///
/// The tier is derived once at construction so every reader sees the same
/// classification for a given `(score, total)` pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultSummary {
    role_id: RoleId,
    started_at: DateTime<Utc>,
    completed_at: DateTime<Utc>,
    score: u32,
    total: u32,
    tier: Tier,
}

impl ResultSummary {
    /// Build a summary, checking that the counts and timestamps line up.
    ///
    /// # Errors
    ///
    /// Returns `SummaryError::NoQuestions` for a zero total,
    /// `SummaryError::ScoreExceedsTotal` if the score is impossible, and
    /// `SummaryError::InvalidTimeRange` if completion precedes the start.
    pub fn new(
        role_id: RoleId,
        started_at: DateTime<Utc>,
        completed_at: DateTime<Utc>,
        score: u32,
        total: u32,
    ) -> Result<Self, SummaryError> {
        if total == 0 {
            return Err(SummaryError::NoQuestions);
        }
        if score > total {
            return Err(SummaryError::ScoreExceedsTotal { score, total });
        }
        if completed_at < started_at {
            return Err(SummaryError::InvalidTimeRange);
        }

        Ok(Self {
            role_id,
            started_at,
            completed_at,
            score,
            total,
            tier: Tier::classify(score, total),
        })
    }

    #[must_use]
    pub fn role_id(&self) -> &RoleId {
        &self.role_id
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    #[must_use]
    pub fn completed_at(&self) -> DateTime<Utc> {
        self.completed_at
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn total(&self) -> u32 {
        self.total
    }

    #[must_use]
    pub fn tier(&self) -> Tier {
        self.tier
    }

    /// Score as a rounded percentage for display.
    #[must_use]
    pub fn percent(&self) -> u8 {
        scoring::percent(self.score, self.total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::fixed_now;

    fn role() -> RoleId {
        RoleId::new("software").unwrap()
    }

    #[test]
    fn summary_derives_tier_and_percent() {
        let now = fixed_now();
        let summary = ResultSummary::new(role(), now, now, 7, 10).unwrap();
        assert_eq!(summary.tier(), Tier::Strong);
        assert_eq!(summary.percent(), 70);
    }

    #[test]
    fn score_above_total_is_rejected() {
        let now = fixed_now();
        let err = ResultSummary::new(role(), now, now, 3, 2).unwrap_err();
        assert_eq!(err, SummaryError::ScoreExceedsTotal { score: 3, total: 2 });
    }

    #[test]
    fn completion_before_start_is_rejected() {
        let now = fixed_now();
        let earlier = now - chrono::Duration::minutes(5);
        let err = ResultSummary::new(role(), now, earlier, 1, 2).unwrap_err();
        assert_eq!(err, SummaryError::InvalidTimeRange);
    }

    #[test]
    fn zero_questions_is_rejected() {
        let now = fixed_now();
        let err = ResultSummary::new(role(), now, now, 0, 0).unwrap_err();
        assert_eq!(err, SummaryError::NoQuestions);
    }
}
