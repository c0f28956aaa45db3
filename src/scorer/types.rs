use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

/// What the first putt on a hole was "for", as recorded on course.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString, Serialize, Deserialize,
)]
#[strum(ascii_case_insensitive)]
pub enum PuttFor {
    Eagle,
    Birdie,
    Par,
    Bogey,
    #[strum(to_string = "Double Bogey", serialize = "DoubleBogey")]
    #[serde(rename = "Double Bogey")]
    DoubleBogey,
}

impl PuttFor {
    pub fn offset(self) -> i32 {
        match self {
            Self::Eagle => -2,
            Self::Birdie => -1,
            Self::Par => 0,
            Self::Bogey => 1,
            Self::DoubleBogey => 2,
        }
    }
}

/// Hole context that selects the score-to-par formula.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum ScoringMode {
    /// Practice simulation: green hit in regulation or not.
    Simulated { gir: bool },
    /// Real round: the recorded putt context.
    OnCourse { putt_for: PuttFor },
}

impl ScoringMode {
    /// A GIR putt is for birdie, a missed green leaves a putt for par.
    pub fn putt_for(self) -> PuttFor {
        match self {
            Self::Simulated { gir: true } => PuttFor::Birdie,
            Self::Simulated { gir: false } => PuttFor::Par,
            Self::OnCourse { putt_for } => putt_for,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HoleResult {
    pub hole: u8,
    pub distance_ft: u32,
    pub putts: u32,
    pub mode: ScoringMode,
    pub strokes_gained: f64,
    pub score_to_par: i32,
}
