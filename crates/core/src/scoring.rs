use serde::{Deserialize, Serialize};

//
// ─── SCORING TIERS ─────────────────────────────────────────────────────────────
//

/// Numerator of the inclusive `Strong` threshold (7/10 of the total).
pub const STRONG_THRESHOLD_NUM: u64 = 7;
/// Denominator of the inclusive `Strong` threshold.
pub const STRONG_THRESHOLD_DEN: u64 = 10;

/// Qualitative bucket summarizing a completed session's score ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tier {
    /// Every question answered correctly.
    Perfect,
    /// At least 70% of questions answered correctly.
    Strong,
    /// Below the 70% threshold.
    NeedsPractice,
}

impl Tier {
    /// Classify a `(score, total)` pair into a tier.
    ///
    /// The 70% boundary is inclusive and compared in exact integer
    /// arithmetic, so `7/10` classifies as `Strong`. A zero total can never
    /// be perfect and classifies as `NeedsPractice`.
    #[must_use]
    pub fn classify(score: u32, total: u32) -> Self {
        if total == 0 {
            return Self::NeedsPractice;
        }
        if score >= total {
            return Self::Perfect;
        }
        if u64::from(score) * STRONG_THRESHOLD_DEN >= u64::from(total) * STRONG_THRESHOLD_NUM {
            return Self::Strong;
        }
        Self::NeedsPractice
    }

    /// One-line feedback shown on the results screen for this tier.
    #[must_use]
    pub fn feedback(&self) -> &'static str {
        match self {
            Tier::Perfect => "Perfect score! You're well prepared for this role.",
            Tier::Strong => "Great job! You have a strong understanding of the fundamentals.",
            Tier::NeedsPractice => "Keep practicing! Review the topics and try again.",
        }
    }
}

/// Score ratio as a rounded percentage in `0..=100`.
///
/// Returns 0 when `total` is zero.
#[must_use]
pub fn percent(score: u32, total: u32) -> u8 {
    if total == 0 {
        return 0;
    }
    let ratio = f64::from(score.min(total)) / f64::from(total);
    (ratio * 100.0).round() as u8
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
