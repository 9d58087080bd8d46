//! Tests for team assessments.

use blue1_analysis::{assess_season, assess_team};
use blue1_core::Match;
use serde_json::json;

fn played(number: u32, red: [u32; 3], red_score: i64, blue: [u32; 3], blue_score: i64) -> Match {
    played_at("2023test", number, red, red_score, blue, blue_score)
}

fn played_at(
    event: &str,
    number: u32,
    red: [u32; 3],
    red_score: i64,
    blue: [u32; 3],
    blue_score: i64,
) -> Match {
    let winner = match red_score.cmp(&blue_score) {
        std::cmp::Ordering::Greater => "red",
        std::cmp::Ordering::Less => "blue",
        std::cmp::Ordering::Equal => "",
    };
    let keys = |teams: [u32; 3]| teams.map(|t| format!("frc{t}"));
    Match::from_json(&json!({
        "key": format!("{event}_qm{number}"),
        "event_key": event,
        "comp_level": "qm",
        "set_number": 1,
        "match_number": number,
        "alliances": {
            "red": { "team_keys": keys(red), "score": red_score },
            "blue": { "team_keys": keys(blue), "score": blue_score }
        },
        "winning_alliance": winner
    }))
    .unwrap()
}

fn season() -> Vec<Match> {
    vec![
        played(1, [1, 2, 3], 50, [4, 5, 6], 40),
        played(2, [4, 5, 6], 60, [1, 7, 8], 30),
        played(3, [1, 5, 7], 70, [2, 3, 4], 70),
        played(4, [1, 2, 3], -1, [4, 5, 6], -1),
        played(5, [2, 3, 4], 80, [5, 6, 7], 20),
    ]
}

#[test]
fn test_assessment_statistics() {
    let assessment = assess_team(1, &season()).unwrap();

    assert_eq!(*assessment.team(), 1);
    assert_eq!(*assessment.games(), 3);
    assert_eq!(*assessment.wins(), 1);
    assert!((assessment.win_rate() - 1.0 / 3.0).abs() < 1e-9);
    assert_eq!(*assessment.average_score(), 50.0);
    assert_eq!(*assessment.score_spread(), 40);
    assert_eq!(*assessment.median_score(), 50);
}

#[test]
fn test_even_count_takes_upper_median() {
    let mut matches = season();
    matches.push(played(6, [1, 2, 3], 90, [4, 5, 6], 10));

    let assessment = assess_team(1, &matches).unwrap();

    assert_eq!(*assessment.games(), 4);
    assert_eq!(*assessment.wins(), 2);
    assert_eq!(*assessment.win_rate(), 0.5);
    assert_eq!(*assessment.average_score(), 60.0);
    assert_eq!(*assessment.score_spread(), 60);
    assert_eq!(*assessment.median_score(), 70);
}

#[test]
fn test_tie_is_not_a_win() {
    let matches = [played(1, [1, 2, 3], 70, [4, 5, 6], 70)];

    let assessment = assess_team(4, &matches).unwrap();

    assert_eq!(*assessment.wins(), 0);
    assert_eq!(*assessment.score_spread(), 0);
}

#[test]
fn test_no_played_matches_is_none() {
    assert!(assess_team(1, &[]).is_none());
    assert!(assess_team(1, &[played(4, [1, 2, 3], -1, [4, 5, 6], -1)]).is_none());
    assert!(assess_team(9999, &season()).is_none());
}

#[test]
fn test_display_lists_statistics() {
    let text = assess_team(1, &season()).unwrap().to_string();

    assert!(text.starts_with("Team 1"));
    assert!(text.contains("Games:         3"));
    assert!(text.contains("Win rate:      33.3%"));
    assert!(text.contains("Median score:  50"));
}

#[test]
fn test_season_is_assessed_per_event() {
    let mut matches = season();
    matches.push(played_at("2023other", 1, [1, 9, 10], 100, [11, 12, 13], 90));
    matches.push(played_at("2023other", 2, [1, 9, 10], -1, [11, 12, 13], -1));
    matches.push(played_at("2023absent", 1, [1, 9, 10], -1, [11, 12, 13], -1));

    let by_event = assess_season(1, &matches);

    let events: Vec<&str> = by_event.keys().map(String::as_str).collect();
    assert_eq!(events, ["2023other", "2023test"]);
    assert_eq!(*by_event["2023test"].games(), 3);
    assert_eq!(*by_event["2023other"].games(), 1);
    assert_eq!(*by_event["2023other"].wins(), 1);
    assert_eq!(*by_event["2023other"].median_score(), 100);
}
