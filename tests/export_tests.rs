use puttforge::export::{detail_to_string, export_detail, fmt_sg, fmt_to_par};
use puttforge::round::{RoundCard, SessionType};
use puttforge::scorer::{PuttFor, Scorer};
use std::fs;

fn scored_on_course() -> puttforge::round::RoundResult {
    let mut card = RoundCard::on_course();
    card.set_putt_for(1, PuttFor::DoubleBogey).unwrap();
    card.set_distance(1, Some(3)).unwrap();
    card.set_putts(1, Some(1)).unwrap();
    card.score(&Scorer::default()).unwrap()
}

#[test]
fn test_signed_formatting() {
    assert_eq!(fmt_sg(0.05), "+0.05");
    assert_eq!(fmt_sg(-1.456), "-1.46");
    assert_eq!(fmt_to_par(0), "+0");
    assert_eq!(fmt_to_par(-2), "-2");
    assert_eq!(fmt_to_par(3), "+3");
}

#[test]
fn test_on_course_export_has_putt_context() {
    let csv = detail_to_string(&scored_on_course(), SessionType::OnCourse).unwrap();
    let mut lines = csv.lines();
    assert_eq!(
        lines.next().unwrap(),
        "Hole,Distance (ft),Putts,Initial Putt For,SG,Score to Par"
    );
    assert_eq!(lines.next().unwrap(), "1,3,1,Double Bogey,+0.05,+2");
    assert_eq!(lines.next().unwrap(), "2,10,2,Par,-0.55,+1");
    assert_eq!(csv.lines().count(), 19);
}

#[test]
fn test_simulated_export_columns() {
    let holes: Vec<(bool, u32)> = (0..18).map(|i| (i < 9, 9)).collect();
    let mut card = RoundCard::simulated(&holes).unwrap();
    card.set_all_putts(&[1; 18]).unwrap();
    let result = card.score(&Scorer::default()).unwrap();

    let csv = detail_to_string(&result, SessionType::Simulated).unwrap();
    let mut lines = csv.lines();
    assert_eq!(lines.next().unwrap(), "Hole,Distance (ft),Putts,SG,Score to Par");
    assert_eq!(lines.next().unwrap(), "1,9,1,+0.45,-1");
    assert_eq!(csv.lines().last().unwrap(), "18,9,1,+0.45,+0");
}

#[test]
fn test_export_to_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sg_putting_results.csv");
    let result = scored_on_course();
    export_detail(&path, &result, SessionType::OnCourse).unwrap();

    let content = fs::read_to_string(&path).unwrap();
    assert_eq!(content, detail_to_string(&result, SessionType::OnCourse).unwrap());
}
