//! Competition entities for blue1.
//!
//! This crate turns raw The Blue Alliance API records into validated
//! [`Team`], [`Event`] and [`Match`] values and defines the ordering of
//! matches used as a time axis by downstream analysis.
//!
//! Records are parsed in two steps, mirroring the provider's wire format
//! first and validating second:
//! - `*Json` models deserialize with serde and only check structure
//! - `TryFrom` conversions enforce the semantic invariants and fail with a
//!   malformed record error instead of defaulting a required field

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod alliance;
mod conversions;
mod event;
mod json_models;
mod level;
mod matches;
mod ordering;
mod rankings;
mod team;

pub use alliance::{Alliance, AllianceColor, ALLIANCE_SIZE};
pub use conversions::{MAX_MATCH_NUMBER, UNPLAYED_SCORE};
pub use event::Event;
pub use json_models::{
    AllianceBreakdownJson, AllianceJson, AlliancesJson, EventJson, MatchJson, MatchVideoJson,
    RankingJson, RankingsJson, ScoreBreakdownJson, TeamJson,
};
pub use level::CompLevel;
pub use matches::{Match, MatchVideo};
pub use ordering::{match_cmp, sort_matches, sorted_matches};
pub use rankings::EventRanking;
pub use team::{team_key, team_number_from_key, Team, TEAM_KEY_PREFIX};
