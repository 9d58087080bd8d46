//! One x-axis for matches of every level.
//!
//! Overall sequence numbers restart at each level, so playoff matches are
//! shifted past the end of qualifications, and finals past the end of the
//! semifinals as well.

use blue1_core::{CompLevel, Match};
use derive_getters::Getters;
use serde::Serialize;

/// Offsets derived from an event's full match list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Getters)]
pub struct TimelineScale {
    /// Highest qualification sequence number
    last_qualification: u32,
    /// Highest semifinal sequence number
    last_semifinal: u32,
}

impl TimelineScale {
    /// Build the scale from every match of an event, played or not.
    pub fn from_event_matches(matches: &[Match]) -> Self {
        let last_of = |level: CompLevel| {
            matches
                .iter()
                .filter(|m| *m.comp_level() == level)
                .map(Match::overall_sequence_number)
                .max()
                .unwrap_or(0)
        };
        Self {
            last_qualification: last_of(CompLevel::Qualification),
            last_semifinal: last_of(CompLevel::SemiFinal),
        }
    }

    /// Position of `m` on the axis, saturating at `u32::MAX`.
    pub fn position(&self, m: &Match) -> u32 {
        let sequence = m.overall_sequence_number();
        match m.comp_level() {
            CompLevel::Qualification => sequence,
            CompLevel::Final => sequence
                .saturating_add(self.last_qualification)
                .saturating_add(self.last_semifinal),
            _ => sequence.saturating_add(self.last_qualification),
        }
    }
}

/// A team's score at one point on the axis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Getters)]
pub struct TimelinePoint {
    /// Position from [`TimelineScale::position`]
    position: u32,
    /// Alliance score of the team
    score: u32,
    /// Match the point comes from
    match_key: String,
}

/// Points for every played match of `team`, in the order given.
pub fn score_series(team: u32, matches: &[Match], scale: &TimelineScale) -> Vec<TimelinePoint> {
    matches
        .iter()
        .filter(|m| m.was_played())
        .filter_map(|m| {
            m.score_for(team).map(|score| TimelinePoint {
                position: scale.position(m),
                score,
                match_key: m.key().clone(),
            })
        })
        .collect()
}
