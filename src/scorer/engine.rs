use super::types::ScoringMode;
use crate::baseline::BaselineTable;

/// Expected putts minus actual putts. Positive beats the baseline.
pub fn strokes_gained(baseline: &BaselineTable, distance_ft: u32, putts: u32) -> f64 {
    baseline.lookup(distance_ft) - putts as f64
}

/// `(putts - 1) + offset`, where the offset comes from what the first putt
/// was for. Simulated GIR holes resolve to Birdie and missed greens to Par,
/// which reduces to `putts - 2` and `putts - 1`.
pub fn compute_score_to_par(mode: ScoringMode, putts: u32) -> i32 {
    putts as i32 - 1 + mode.putt_for().offset()
}
