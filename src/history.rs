use crate::round::{RoundSummary, SessionType};
use chrono::NaiveDateTime;
use serde::Serialize;

/// Trend charts need at least this many sessions.
pub const MIN_TREND_SESSIONS: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TrendPoint {
    #[serde(serialize_with = "crate::store::date_format::serialize")]
    pub date: NaiveDateTime,
    pub total_sg: f64,
    pub score_to_par: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistoryReport {
    /// Newest first.
    pub sessions: Vec<RoundSummary>,
    /// Oldest first. Empty below [`MIN_TREND_SESSIONS`].
    pub trend: Vec<TrendPoint>,
    pub average_sg: Option<f64>,
    pub average_score_to_par: Option<f64>,
}

impl HistoryReport {
    pub fn build(mut sessions: Vec<RoundSummary>, filter: Option<SessionType>) -> Self {
        if let Some(kind) = filter {
            sessions.retain(|s| s.session_type == kind);
        }
        // Stable sort keeps file order for equal timestamps.
        sessions.sort_by(|a, b| b.date.cmp(&a.date));

        let trend = if sessions.len() >= MIN_TREND_SESSIONS {
            sessions
                .iter()
                .rev()
                .map(|s| TrendPoint {
                    date: s.date,
                    total_sg: s.total_sg,
                    score_to_par: s.score_to_par,
                })
                .collect()
        } else {
            Vec::new()
        };

        let n = sessions.len() as f64;
        let (average_sg, average_score_to_par) = if sessions.is_empty() {
            (None, None)
        } else {
            (
                Some(sessions.iter().map(|s| s.total_sg).sum::<f64>() / n),
                Some(sessions.iter().map(|s| s.score_to_par as f64).sum::<f64>() / n),
            )
        };

        Self {
            sessions,
            trend,
            average_sg,
            average_score_to_par,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    pub fn has_trend(&self) -> bool {
        !self.trend.is_empty()
    }
}
