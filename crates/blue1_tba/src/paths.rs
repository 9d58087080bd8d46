//! Request paths, relative to the API root.
//!
//! Paths double as cache keys, so each logical request must always build
//! the same string.
//!
//! ```
//! use blue1_tba::paths;
//!
//! assert_eq!(paths::team(254), "team/frc254");
//! assert_eq!(paths::team_event_matches(254, "2023cabl"), "team/frc254/event/2023cabl/matches");
//! assert_eq!(paths::event_rankings("2023cabl"), "event/2023cabl/rankings");
//! ```

use blue1_core::team_key;

/// API status.
pub const STATUS: &str = "status";

/// Full team record.
pub fn team(team: u32) -> String {
    format!("team/{}", team_key(team))
}

/// A team's matches at one event.
pub fn team_event_matches(team: u32, event: &str) -> String {
    format!("team/{}/event/{event}/matches", team_key(team))
}

/// A team's matches across a season.
pub fn team_matches(team: u32, year: i32) -> String {
    format!("team/{}/matches/{year}", team_key(team))
}

/// A team's status at every event of a season.
pub fn team_events_statuses(team: u32, year: i32) -> String {
    format!("team/{}/events/{year}/statuses", team_key(team))
}

/// A team's status at one event.
pub fn team_event_status(team: u32, event: &str) -> String {
    format!("team/{}/event/{event}/status", team_key(team))
}

/// Full event record.
pub fn event(event: &str) -> String {
    format!("event/{event}")
}

/// Every match at an event.
pub fn event_matches(event: &str) -> String {
    format!("event/{event}/matches")
}

/// Reduced records of every team at an event.
pub fn event_teams(event: &str) -> String {
    format!("event/{event}/teams/simple")
}

/// Official ranking table of an event.
pub fn event_rankings(event: &str) -> String {
    format!("event/{event}/rankings")
}

/// Full match record.
pub fn match_detail(match_key: &str) -> String {
    format!("match/{match_key}")
}
