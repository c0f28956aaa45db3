use crate::error::{PfResult, PuttForgeError};
use crate::scorer::{HoleResult, PuttFor, Scorer, ScoringMode};
use chrono::{Local, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;
use strum_macros::{Display, EnumString};
use tracing::debug;

pub const HOLES_PER_ROUND: usize = 18;
pub const DISTANCE_RANGE: RangeInclusive<u32> = 1..=100;
pub const PUTTS_RANGE: RangeInclusive<u32> = 1..=10;

pub const DEFAULT_DISTANCE_FT: u32 = 10;
pub const DEFAULT_PUTTS: u32 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, Serialize, Deserialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum SessionType {
    Simulated,
    OnCourse,
}

/// In-progress input for one hole. Scoreable once both distance and putts are set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HoleRecord {
    pub hole: u8,
    pub distance_ft: Option<u32>,
    pub putts: Option<u32>,
    pub mode: ScoringMode,
}

impl HoleRecord {
    pub fn is_scoreable(&self) -> bool {
        self.distance_ft.is_some() && self.putts.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoundResult {
    pub holes: Vec<HoleResult>,
    pub total_sg: f64,
    pub total_score_to_par: i32,
}

impl RoundResult {
    pub fn summary(&self, session_type: SessionType, date: NaiveDateTime) -> RoundSummary {
        RoundSummary {
            date,
            total_sg: round2(self.total_sg),
            score_to_par: self.total_score_to_par,
            session_type,
        }
    }

    /// Summary stamped with the current local time, to the second.
    pub fn summary_now(&self, session_type: SessionType) -> RoundSummary {
        let now = Local::now().naive_local();
        self.summary(session_type, now.with_nanosecond(0).unwrap_or(now))
    }
}

/// The only record persisted long-term: one row per saved round.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoundSummary {
    #[serde(with = "crate::store::date_format")]
    pub date: NaiveDateTime,
    #[serde(serialize_with = "crate::store::two_decimals")]
    pub total_sg: f64,
    pub score_to_par: i32,
    #[serde(rename = "type")]
    pub session_type: SessionType,
}

pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Scores every hole in order and sums the results. Refuses to score
/// anything if a hole is missing its distance or putts.
pub fn aggregate<F>(records: &[HoleRecord], score_fn: F) -> PfResult<RoundResult>
where
    F: Fn(u8, u32, u32, ScoringMode) -> HoleResult,
{
    let missing: Vec<u8> = records
        .iter()
        .filter(|r| !r.is_scoreable())
        .map(|r| r.hole)
        .collect();
    if !missing.is_empty() {
        return Err(PuttForgeError::IncompleteInput { holes: missing });
    }

    let mut holes = Vec::with_capacity(records.len());
    let mut total_sg = 0.0;
    let mut total_score_to_par = 0;

    for r in records {
        if let (Some(distance), Some(putts)) = (r.distance_ft, r.putts) {
            let result = score_fn(r.hole, distance, putts, r.mode);
            total_sg += result.strokes_gained;
            total_score_to_par += result.score_to_par;
            holes.push(result);
        }
    }

    debug!(
        "Aggregated {} holes: SG {:+.2}, to par {:+}",
        holes.len(),
        total_sg,
        total_score_to_par
    );

    Ok(RoundResult {
        holes,
        total_sg,
        total_score_to_par,
    })
}

fn check_range(field: &str, value: u32, range: &RangeInclusive<u32>) -> PfResult<()> {
    if range.contains(&value) {
        Ok(())
    } else {
        Err(PuttForgeError::Validation(format!(
            "{} must be between {} and {}, got {}",
            field,
            range.start(),
            range.end(),
            value
        )))
    }
}

/// One round's worth of hole inputs, indexed by hole number (1-18).
/// Lives from round start until the round is scored and summarised.
#[derive(Debug, Clone, PartialEq)]
pub struct RoundCard {
    session_type: SessionType,
    holes: Vec<HoleRecord>,
}

impl RoundCard {
    /// Simulated card from per-hole `(gir, distance)` pairs. Putts start unset.
    pub fn simulated(holes: &[(bool, u32)]) -> PfResult<Self> {
        if holes.len() != HOLES_PER_ROUND {
            return Err(PuttForgeError::Validation(format!(
                "A round has {} holes, got {}",
                HOLES_PER_ROUND,
                holes.len()
            )));
        }
        let mut records = Vec::with_capacity(HOLES_PER_ROUND);
        for (i, &(gir, distance)) in holes.iter().enumerate() {
            check_range("Distance (ft)", distance, &DISTANCE_RANGE)?;
            records.push(HoleRecord {
                hole: i as u8 + 1,
                distance_ft: Some(distance),
                putts: None,
                mode: ScoringMode::Simulated { gir },
            });
        }
        Ok(Self {
            session_type: SessionType::Simulated,
            holes: records,
        })
    }

    /// On-course card with every hole at 10 ft, 2 putts, putt for par.
    pub fn on_course() -> Self {
        let holes = (1..=HOLES_PER_ROUND as u8)
            .map(|hole| HoleRecord {
                hole,
                distance_ft: Some(DEFAULT_DISTANCE_FT),
                putts: Some(DEFAULT_PUTTS),
                mode: ScoringMode::OnCourse {
                    putt_for: PuttFor::Par,
                },
            })
            .collect();
        Self {
            session_type: SessionType::OnCourse,
            holes,
        }
    }

    pub fn session_type(&self) -> SessionType {
        self.session_type
    }

    pub fn holes(&self) -> &[HoleRecord] {
        &self.holes
    }

    pub fn hole(&self, hole: u8) -> Option<&HoleRecord> {
        self.holes.get((hole as usize).checked_sub(1)?)
    }

    fn hole_mut(&mut self, hole: u8) -> PfResult<&mut HoleRecord> {
        (hole as usize)
            .checked_sub(1)
            .and_then(|idx| self.holes.get_mut(idx))
            .ok_or_else(|| {
                PuttForgeError::Validation(format!(
                    "Hole must be between 1 and {}, got {}",
                    HOLES_PER_ROUND, hole
                ))
            })
    }

    pub fn set_distance(&mut self, hole: u8, distance_ft: Option<u32>) -> PfResult<()> {
        if let Some(d) = distance_ft {
            check_range("Distance (ft)", d, &DISTANCE_RANGE)?;
        }
        self.hole_mut(hole)?.distance_ft = distance_ft;
        Ok(())
    }

    pub fn set_putts(&mut self, hole: u8, putts: Option<u32>) -> PfResult<()> {
        if let Some(p) = putts {
            check_range("Putts", p, &PUTTS_RANGE)?;
        }
        self.hole_mut(hole)?.putts = putts;
        Ok(())
    }

    pub fn set_all_putts(&mut self, putts: &[u32]) -> PfResult<()> {
        if putts.len() != self.holes.len() {
            return Err(PuttForgeError::Validation(format!(
                "Expected putts for {} holes, got {}",
                self.holes.len(),
                putts.len()
            )));
        }
        for (i, &p) in putts.iter().enumerate() {
            self.set_putts(i as u8 + 1, Some(p))?;
        }
        Ok(())
    }

    pub fn set_putt_for(&mut self, hole: u8, putt_for: PuttFor) -> PfResult<()> {
        if self.session_type != SessionType::OnCourse {
            return Err(PuttForgeError::Validation(
                "Putt context can only be set on an on-course card".to_string(),
            ));
        }
        self.hole_mut(hole)?.mode = ScoringMode::OnCourse { putt_for };
        Ok(())
    }

    pub fn missing_holes(&self) -> Vec<u8> {
        self.holes
            .iter()
            .filter(|h| !h.is_scoreable())
            .map(|h| h.hole)
            .collect()
    }

    pub fn score(&self, scorer: &Scorer) -> PfResult<RoundResult> {
        aggregate(&self.holes, |hole, distance, putts, mode| {
            scorer.score_hole(hole, distance, putts, mode)
        })
    }
}
