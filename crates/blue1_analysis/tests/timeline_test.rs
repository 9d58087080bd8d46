//! Tests for the cross-level score timeline.

use blue1_analysis::{score_series, TimelineScale};
use blue1_core::Match;
use serde_json::json;

fn make_match(level: &str, set: u32, number: u32, red_score: i64) -> Match {
    let key = if level == "qm" {
        format!("2023test_qm{number}")
    } else {
        format!("2023test_{level}{set}m{number}")
    };
    Match::from_json(&json!({
        "key": key,
        "event_key": "2023test",
        "comp_level": level,
        "set_number": set,
        "match_number": number,
        "alliances": {
            "red": { "team_keys": ["frc1", "frc2", "frc3"], "score": red_score },
            "blue": { "team_keys": ["frc4", "frc5", "frc6"], "score": 0 }
        },
        "winning_alliance": "red"
    }))
    .unwrap()
}

fn event() -> Vec<Match> {
    vec![
        make_match("qm", 1, 1, 10),
        make_match("qm", 1, 2, 20),
        make_match("qm", 1, 3, -1),
        make_match("sf", 1, 1, 30),
        make_match("sf", 2, 1, 40),
        make_match("sf", 4, 1, 50),
        make_match("f", 1, 1, 60),
        make_match("f", 1, 2, 70),
    ]
}

#[test]
fn test_scale_uses_last_sequence_numbers() {
    let scale = TimelineScale::from_event_matches(&event());

    // the unplayed qm3 still extends the qualification block
    assert_eq!(*scale.last_qualification(), 3);
    assert_eq!(*scale.last_semifinal(), 4);
}

#[test]
fn test_positions_follow_levels() {
    let scale = TimelineScale::from_event_matches(&event());

    assert_eq!(scale.position(&make_match("qm", 1, 2, 0)), 2);
    assert_eq!(scale.position(&make_match("sf", 2, 1, 0)), 5);
    assert_eq!(scale.position(&make_match("qf", 2, 1, 0)), 5);
    assert_eq!(scale.position(&make_match("f", 1, 2, 0)), 9);
}

#[test]
fn test_score_series_skips_unplayed_and_absent() {
    let matches = event();
    let scale = TimelineScale::from_event_matches(&matches);

    let series = score_series(2, &matches, &scale);
    let points: Vec<(u32, u32)> = series.iter().map(|p| (*p.position(), *p.score())).collect();

    assert_eq!(
        points,
        vec![(1, 10), (2, 20), (4, 30), (5, 40), (7, 50), (8, 60), (9, 70)]
    );
    assert_eq!(series[0].match_key(), "2023test_qm1");
    assert!(score_series(99, &matches, &scale).is_empty());
}

#[test]
fn test_qualification_only_event() {
    let matches = vec![make_match("qm", 1, 1, 10), make_match("qm", 1, 2, 20)];
    let scale = TimelineScale::from_event_matches(&matches);

    assert_eq!(*scale.last_semifinal(), 0);
    assert_eq!(scale.position(&matches[1]), 2);
}

#[test]
fn test_positions_saturate_on_huge_events() {
    let matches = vec![
        make_match("qm", 65535, 65535, 10),
        make_match("sf", 65535, 65535, 20),
        make_match("f", 65535, 65535, 30),
    ];
    let scale = TimelineScale::from_event_matches(&matches);

    assert_eq!(scale.position(&matches[0]), 65535 * 65535);
    assert_eq!(scale.position(&matches[1]), u32::MAX);
    assert_eq!(scale.position(&matches[2]), u32::MAX);
}
