//! Analysis over validated competition entities.
//!
//! - [`replay`] reconstructs a team's qualification rank after every match
//! - [`assess_team`] summarizes a team's results at an event
//! - [`assess_season`] does the same for each event of a season
//! - [`TimelineScale`] lays matches of every level on one x-axis
//! - [`RankWatcher`] detects changes between ranking table polls
//!
//! Everything here is synchronous and deterministic. Fetching belongs to
//! `blue1_tba`.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod assessment;
mod replay;
mod timeline;
mod watch;

pub use assessment::{assess_season, assess_team, TeamAssessment};
pub use replay::{replay, replay_event, RankTrajectory};
pub use timeline::{score_series, TimelinePoint, TimelineScale};
pub use watch::{RankChange, RankWatcher, Standings};
