/// How far through the question sequence a run has gotten.
///
/// `answered` counts committed answers only; a pending, uncommitted pick
/// does not move these counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionProgress {
    pub total: usize,
    pub answered: usize,
    pub remaining: usize,
    pub is_complete: bool,
}
