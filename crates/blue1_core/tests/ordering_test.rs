//! Tests for match ordering.

use blue1_core::{match_cmp, sort_matches, sorted_matches, CompLevel, Match};
use serde_json::json;
use std::cmp::Ordering;

fn make_match(level: &str, set: u32, number: u32, played: bool) -> Match {
    let score = if played { 50 } else { -1 };
    let key = if level == "qm" {
        format!("2023cabl_qm{number}")
    } else {
        format!("2023cabl_{level}{set}m{number}")
    };
    Match::from_json(&json!({
        "key": key,
        "event_key": "2023cabl",
        "comp_level": level,
        "set_number": set,
        "match_number": number,
        "alliances": {
            "red": { "team_keys": ["frc1", "frc2", "frc3"], "score": score },
            "blue": { "team_keys": ["frc4", "frc5", "frc6"], "score": score }
        }
    }))
    .unwrap()
}

fn keys(matches: &[Match]) -> Vec<&str> {
    matches.iter().map(|m| m.key().as_str()).collect()
}

#[test]
fn test_levels_group_in_play_order() {
    let sorted = sorted_matches(vec![
        make_match("f", 1, 1, true),
        make_match("qm", 1, 2, true),
        make_match("sf", 2, 1, true),
        make_match("qm", 1, 1, true),
        make_match("sf", 1, 1, true),
    ]);

    assert_eq!(
        keys(&sorted),
        vec![
            "2023cabl_qm1",
            "2023cabl_qm2",
            "2023cabl_sf1m1",
            "2023cabl_sf2m1",
            "2023cabl_f1m1",
        ]
    );
}

#[test]
fn test_unplayed_matches_come_first() {
    let sorted = sorted_matches(vec![
        make_match("qm", 1, 1, true),
        make_match("qm", 1, 40, false),
        make_match("qm", 1, 2, true),
        make_match("qm", 1, 39, false),
    ]);

    assert_eq!(
        keys(&sorted),
        vec!["2023cabl_qm39", "2023cabl_qm40", "2023cabl_qm1", "2023cabl_qm2"]
    );
    assert!(!sorted[0].was_played());
    assert!(sorted[2].was_played());
}

#[test]
fn test_sorting_is_idempotent() {
    let mut matches = vec![
        make_match("sf", 3, 1, true),
        make_match("qm", 1, 12, true),
        make_match("f", 1, 2, false),
        make_match("qf", 2, 2, true),
        make_match("qm", 1, 3, true),
    ];
    sort_matches(&mut matches);
    let once: Vec<String> = matches.iter().map(|m| m.key().clone()).collect();
    sort_matches(&mut matches);
    let twice: Vec<String> = matches.iter().map(|m| m.key().clone()).collect();

    assert_eq!(once, twice);
    for pair in matches.windows(2) {
        assert_ne!(match_cmp(&pair[0], &pair[1]), Ordering::Greater);
    }
}

#[test]
fn test_level_wins_over_sequence_number() {
    // A final's sequence number is small, but it still follows every semifinal.
    let semi = make_match("sf", 13, 1, true);
    let last_final = make_match("f", 1, 3, true);
    assert_eq!(semi.overall_sequence_number(), 13);
    assert_eq!(last_final.overall_sequence_number(), 3);
    assert_eq!(match_cmp(&semi, &last_final), Ordering::Less);
}

#[test]
fn test_equal_position_keeps_input_order() {
    // sf2m3 and sf3m2 share sequence number 6.
    let sorted = sorted_matches(vec![
        make_match("sf", 2, 3, true),
        make_match("sf", 3, 2, true),
    ]);
    assert_eq!(keys(&sorted), vec!["2023cabl_sf2m3", "2023cabl_sf3m2"]);
    assert_eq!(match_cmp(&sorted[0], &sorted[1]), Ordering::Equal);
}

#[test]
fn test_comp_level_order() {
    assert!(CompLevel::Qualification < CompLevel::EighthFinal);
    assert!(CompLevel::EighthFinal < CompLevel::QuarterFinal);
    assert!(CompLevel::QuarterFinal < CompLevel::SemiFinal);
    assert!(CompLevel::SemiFinal < CompLevel::Final);
}
