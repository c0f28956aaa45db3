use puttforge::baseline::BaselineTable;
use puttforge::scorer::{compute_score_to_par, strokes_gained, PuttFor, Scorer, ScoringMode};
use rstest::rstest;
use std::str::FromStr;
use strum::IntoEnumIterator;

const EPS: f64 = 1e-9;

// --- SIMULATED MODE ---
#[rstest]
#[case(true, 1, -1)] // Birdie putt holed
#[case(true, 2, 0)]
#[case(true, 3, 1)]
#[case(false, 1, 0)] // Par putt holed
#[case(false, 2, 1)]
#[case(false, 3, 2)]
fn test_simulated_score_to_par(#[case] gir: bool, #[case] putts: u32, #[case] expected: i32) {
    let mode = ScoringMode::Simulated { gir };
    assert_eq!(compute_score_to_par(mode, putts), expected);
}

// --- ON-COURSE MODE ---
#[rstest]
#[case(PuttFor::Par, 2, 1)]
#[case(PuttFor::Birdie, 1, -1)]
#[case(PuttFor::Eagle, 1, -2)]
#[case(PuttFor::Eagle, 2, -1)]
#[case(PuttFor::Par, 1, 0)]
#[case(PuttFor::Bogey, 1, 1)]
#[case(PuttFor::DoubleBogey, 3, 4)]
fn test_on_course_score_to_par(#[case] putt_for: PuttFor, #[case] putts: u32, #[case] expected: i32) {
    let mode = ScoringMode::OnCourse { putt_for };
    assert_eq!(compute_score_to_par(mode, putts), expected);
}

#[test]
fn test_simulated_matches_equivalent_context() {
    for putts in 1..=10 {
        assert_eq!(
            compute_score_to_par(ScoringMode::Simulated { gir: true }, putts),
            compute_score_to_par(
                ScoringMode::OnCourse {
                    putt_for: PuttFor::Birdie
                },
                putts
            )
        );
        assert_eq!(
            compute_score_to_par(ScoringMode::Simulated { gir: false }, putts),
            compute_score_to_par(
                ScoringMode::OnCourse {
                    putt_for: PuttFor::Par
                },
                putts
            )
        );
    }
}

#[rstest]
#[case(3, 1, 0.05)] // 1.05 - 1
#[case(10, 2, -0.55)] // 1.45 - 2
#[case(50, 2, 0.20)]
#[case(1, 1, 0.0)]
fn test_strokes_gained(#[case] distance: u32, #[case] putts: u32, #[case] expected: f64) {
    let baseline = BaselineTable::default();
    let sg = strokes_gained(&baseline, distance, putts);
    assert!((sg - expected).abs() < EPS, "got {}, expected {}", sg, expected);
}

#[test]
fn test_score_hole_fills_result() {
    let scorer = Scorer::default();
    let res = scorer.score_hole(
        7,
        20,
        3,
        ScoringMode::OnCourse {
            putt_for: PuttFor::Bogey,
        },
    );
    assert_eq!(res.hole, 7);
    assert_eq!(res.distance_ft, 20);
    assert_eq!(res.putts, 3);
    assert_eq!(res.score_to_par, 3);
    // 20 ft ties 19/21 -> 19 ft (1.85)
    assert!((res.strokes_gained - (1.85 - 3.0)).abs() < EPS);
}

#[test]
fn test_putt_for_parsing_and_display() {
    assert_eq!(PuttFor::from_str("Double Bogey").unwrap(), PuttFor::DoubleBogey);
    assert_eq!(PuttFor::from_str("doublebogey").unwrap(), PuttFor::DoubleBogey);
    assert_eq!(PuttFor::from_str("birdie").unwrap(), PuttFor::Birdie);
    assert!(PuttFor::from_str("albatross").is_err());

    let labels: Vec<String> = PuttFor::iter().map(|p| p.to_string()).collect();
    assert_eq!(labels, vec!["Eagle", "Birdie", "Par", "Bogey", "Double Bogey"]);
}

#[test]
fn test_offsets_are_consecutive() {
    let offsets: Vec<i32> = PuttFor::iter().map(PuttFor::offset).collect();
    assert_eq!(offsets, vec![-2, -1, 0, 1, 2]);
}
