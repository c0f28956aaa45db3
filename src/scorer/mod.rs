pub mod engine;
pub mod types;

pub use self::engine::{compute_score_to_par, strokes_gained};
pub use self::types::{HoleResult, PuttFor, ScoringMode};
use crate::baseline::BaselineTable;

/// Pure per-hole scoring against a baseline table.
#[derive(Debug, Clone, Default)]
pub struct Scorer {
    pub baseline: BaselineTable,
}

impl Scorer {
    pub fn new(baseline: BaselineTable) -> Self {
        Self { baseline }
    }

    pub fn expected_putts(&self, distance_ft: u32) -> f64 {
        self.baseline.lookup(distance_ft)
    }

    pub fn score_hole(
        &self,
        hole: u8,
        distance_ft: u32,
        putts: u32,
        mode: ScoringMode,
    ) -> HoleResult {
        HoleResult {
            hole,
            distance_ft,
            putts,
            mode,
            strokes_gained: strokes_gained(&self.baseline, distance_ft, putts),
            score_to_par: compute_score_to_par(mode, putts),
        }
    }
}
