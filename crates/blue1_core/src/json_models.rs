//! JSON deserialization models for The Blue Alliance API v3.
//!
//! These structs mirror the provider's wire format and are deliberately
//! permissive: they only require what serde can check structurally. Semantic
//! validation (team key syntax, alliance sizes, sentinel scores) happens in
//! the `TryFrom` conversions to the domain types in `conversions`.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// JSON model for a team (`team/frc{n}`, or one entry of `event/{event}/teams/simple`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, derive_getters::Getters)]
pub struct TeamJson {
    /// Canonical key, `frc<number>` (required)
    pub(crate) key: String,
    /// Team number (required)
    pub(crate) team_number: u32,

    /// Nickname (e.g. "The Cheesy Poofs")
    #[serde(default)]
    pub(crate) nickname: Option<String>,
    /// Full sponsor name
    #[serde(default)]
    pub(crate) name: Option<String>,
    /// City
    #[serde(default)]
    pub(crate) city: Option<String>,
    /// State or province
    #[serde(default)]
    pub(crate) state_prov: Option<String>,
    /// Country
    #[serde(default)]
    pub(crate) country: Option<String>,
    /// First year the team competed
    #[serde(default)]
    pub(crate) rookie_year: Option<i32>,
    /// Team website
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) website: Option<String>,
}

/// JSON model for an event (`event/{key}`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, derive_getters::Getters)]
pub struct EventJson {
    /// Event key, `<year><event_code>` (required)
    pub(crate) key: String,
    /// Official name (required)
    pub(crate) name: String,
    /// Event code without the year (required)
    pub(crate) event_code: String,
    /// Season year (required)
    pub(crate) year: i32,

    /// First day of the event
    #[serde(default)]
    pub(crate) start_date: Option<NaiveDate>,
    /// Last day of the event
    #[serde(default)]
    pub(crate) end_date: Option<NaiveDate>,
    /// City
    #[serde(default)]
    pub(crate) city: Option<String>,
    /// State or province
    #[serde(default)]
    pub(crate) state_prov: Option<String>,
    /// Country
    #[serde(default)]
    pub(crate) country: Option<String>,
    /// Human readable event type ("Regional", "District", ...)
    #[serde(default)]
    pub(crate) event_type_string: Option<String>,
    /// Numeric playoff format
    #[serde(default)]
    pub(crate) playoff_type: Option<i32>,
    /// Human readable playoff format
    #[serde(default)]
    pub(crate) playoff_type_string: Option<String>,
}

/// JSON model for one alliance inside a match.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, derive_getters::Getters)]
pub struct AllianceJson {
    /// Team keys in station order (required)
    pub(crate) team_keys: Vec<String>,
    /// Alliance score, `-1` or null while unplayed
    #[serde(default)]
    pub(crate) score: Option<i32>,
}

/// JSON model for the red/blue alliance pair.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, derive_getters::Getters)]
pub struct AlliancesJson {
    /// Red alliance (required)
    pub(crate) red: AllianceJson,
    /// Blue alliance (required)
    pub(crate) blue: AllianceJson,
}

/// The only part of a year-specific score breakdown blue1 reads.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default, derive_getters::Getters)]
pub struct AllianceBreakdownJson {
    /// Ranking points awarded to the alliance
    #[serde(default)]
    pub(crate) rp: Option<i32>,
}

/// JSON model for a match score breakdown.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default, derive_getters::Getters)]
pub struct ScoreBreakdownJson {
    /// Red breakdown
    #[serde(default)]
    pub(crate) red: Option<AllianceBreakdownJson>,
    /// Blue breakdown
    #[serde(default)]
    pub(crate) blue: Option<AllianceBreakdownJson>,
}

/// JSON model for a match video link.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, derive_getters::Getters)]
pub struct MatchVideoJson {
    /// Host ("youtube", "tba")
    #[serde(rename = "type")]
    pub(crate) kind: String,
    /// Host-specific key
    pub(crate) key: String,
}

/// JSON model for a match (`match/{key}`, `event/{key}/matches`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, derive_getters::Getters)]
pub struct MatchJson {
    /// Match key, e.g. `2023cabl_qm12` (required)
    pub(crate) key: String,
    /// Owning event key (required)
    pub(crate) event_key: String,
    /// Competition level code: qm, ef, qf, sf, f (required)
    pub(crate) comp_level: String,
    /// Set number (required)
    pub(crate) set_number: u32,
    /// Match number within the set (required)
    pub(crate) match_number: u32,
    /// Alliances (required)
    pub(crate) alliances: AlliancesJson,

    /// "red", "blue", or empty for ties and unplayed matches
    #[serde(default)]
    pub(crate) winning_alliance: Option<String>,
    /// Per-alliance breakdown, null until published
    #[serde(default)]
    pub(crate) score_breakdown: Option<ScoreBreakdownJson>,
    /// Match videos
    #[serde(default)]
    pub(crate) videos: Vec<MatchVideoJson>,
    /// Scheduled start, unix seconds
    #[serde(default)]
    pub(crate) time: Option<i64>,
    /// Actual start, unix seconds
    #[serde(default)]
    pub(crate) actual_time: Option<i64>,
}

/// JSON model for one row of `event/{key}/rankings`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, derive_getters::Getters)]
pub struct RankingJson {
    /// Current rank (required)
    pub(crate) rank: u32,
    /// Team key (required)
    pub(crate) team_key: String,
}

/// JSON model for `event/{key}/rankings`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, derive_getters::Getters)]
pub struct RankingsJson {
    /// Ranking rows, null before the first qualification match
    #[serde(default)]
    pub(crate) rankings: Option<Vec<RankingJson>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_team_simple() {
        let json = r#"{
            "key": "frc254",
            "team_number": 254,
            "nickname": "The Cheesy Poofs",
            "name": "NASA Ames Research Center",
            "city": "San Jose",
            "state_prov": "California",
            "country": "USA"
        }"#;

        let team: TeamJson = serde_json::from_str(json).unwrap();
        assert_eq!(team.key, "frc254");
        assert_eq!(team.team_number, 254);
        assert_eq!(team.rookie_year, None);
    }

    #[test]
    fn test_deserialize_team_missing_number() {
        let json = r#"{ "key": "frc254" }"#;
        assert!(serde_json::from_str::<TeamJson>(json).is_err());
    }

    #[test]
    fn test_deserialize_event_dates() {
        let json = r#"{
            "key": "2023cabl",
            "name": "Beach Blitz",
            "event_code": "cabl",
            "year": 2023,
            "start_date": "2023-10-07",
            "end_date": "2023-10-07"
        }"#;

        let event: EventJson = serde_json::from_str(json).unwrap();
        assert_eq!(event.start_date, NaiveDate::from_ymd_opt(2023, 10, 7));
        assert_eq!(event.playoff_type, None);
    }

    #[test]
    fn test_deserialize_match_without_breakdown() {
        let json = r#"{
            "key": "2023cabl_qm1",
            "event_key": "2023cabl",
            "comp_level": "qm",
            "set_number": 1,
            "match_number": 1,
            "alliances": {
                "red": { "team_keys": ["frc1", "frc2", "frc3"], "score": -1 },
                "blue": { "team_keys": ["frc4", "frc5", "frc6"], "score": -1 }
            },
            "winning_alliance": "",
            "score_breakdown": null
        }"#;

        let m: MatchJson = serde_json::from_str(json).unwrap();
        assert_eq!(m.alliances.red.score, Some(-1));
        assert!(m.score_breakdown.is_none());
        assert!(m.videos.is_empty());
    }

    #[test]
    fn test_deserialize_breakdown_ignores_unknown_fields() {
        let json = r#"{
            "red": { "rp": 3, "autoPoints": 12, "sustainabilityBonusAchieved": true },
            "blue": { "totalPoints": 40 }
        }"#;

        let breakdown: ScoreBreakdownJson = serde_json::from_str(json).unwrap();
        assert_eq!(breakdown.red.unwrap().rp, Some(3));
        assert_eq!(breakdown.blue.unwrap().rp, None);
    }
}
