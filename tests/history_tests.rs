use chrono::{NaiveDate, NaiveDateTime};
use puttforge::history::HistoryReport;
use puttforge::round::{RoundSummary, SessionType};

const EPS: f64 = 1e-9;

fn at(day: u32, hour: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 7, day)
        .unwrap()
        .and_hms_opt(hour, 0, 0)
        .unwrap()
}

fn session(date: NaiveDateTime, total_sg: f64, score_to_par: i32, kind: SessionType) -> RoundSummary {
    RoundSummary {
        date,
        total_sg,
        score_to_par,
        session_type: kind,
    }
}

#[test]
fn test_empty_history() {
    let report = HistoryReport::build(Vec::new(), None);
    assert!(report.is_empty());
    assert!(!report.has_trend());
    assert_eq!(report.average_sg, None);
    assert_eq!(report.average_score_to_par, None);
}

#[test]
fn test_single_session_has_no_trend() {
    let report = HistoryReport::build(
        vec![session(at(1, 9), 1.5, -1, SessionType::OnCourse)],
        None,
    );
    assert!(!report.has_trend());
    assert_eq!(report.average_sg, Some(1.5));
    assert_eq!(report.average_score_to_par, Some(-1.0));
}

#[test]
fn test_log_newest_first_trend_oldest_first() {
    let sessions = vec![
        session(at(2, 9), 1.0, 0, SessionType::Simulated),
        session(at(1, 9), -2.0, 3, SessionType::OnCourse),
        session(at(3, 9), 0.5, 1, SessionType::Simulated),
    ];
    let report = HistoryReport::build(sessions, None);

    let log: Vec<NaiveDateTime> = report.sessions.iter().map(|s| s.date).collect();
    assert_eq!(log, vec![at(3, 9), at(2, 9), at(1, 9)]);

    let trend: Vec<NaiveDateTime> = report.trend.iter().map(|p| p.date).collect();
    assert_eq!(trend, vec![at(1, 9), at(2, 9), at(3, 9)]);

    assert!((report.average_sg.unwrap() - (-0.5 / 3.0)).abs() < EPS);
    assert!((report.average_score_to_par.unwrap() - 4.0 / 3.0).abs() < EPS);
}

#[test]
fn test_filter_by_session_type() {
    let sessions = vec![
        session(at(1, 9), 1.0, 0, SessionType::Simulated),
        session(at(2, 9), -1.0, 2, SessionType::OnCourse),
        session(at(3, 9), 3.0, -2, SessionType::Simulated),
    ];
    let report = HistoryReport::build(sessions, Some(SessionType::Simulated));
    assert_eq!(report.sessions.len(), 2);
    assert!(report
        .sessions
        .iter()
        .all(|s| s.session_type == SessionType::Simulated));
    assert_eq!(report.average_sg, Some(2.0));
    assert_eq!(report.average_score_to_par, Some(-1.0));
}

#[test]
fn test_trend_and_log_dates_serialize_alike() {
    let sessions = vec![
        session(at(1, 10), 1.0, 0, SessionType::Simulated),
        session(at(2, 10), -1.0, 2, SessionType::OnCourse),
    ];
    let report = HistoryReport::build(sessions, None);
    let value = serde_json::to_value(&report).unwrap();

    let log_date = value["sessions"][1]["date"].as_str().unwrap();
    let trend_date = value["trend"][0]["date"].as_str().unwrap();
    assert_eq!(log_date, "2025-07-01 10:00:00");
    assert_eq!(trend_date, log_date);
}
