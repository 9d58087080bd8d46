//! Alliances.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Number of teams on an alliance.
pub const ALLIANCE_SIZE: usize = 3;

/// Alliance color.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    strum::EnumString,
    strum::Display,
    strum::AsRefStr,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum AllianceColor {
    /// Red alliance
    Red,
    /// Blue alliance
    Blue,
}

/// One side of a match.
///
/// Scores and ranking points are `None` until published. Scores are never
/// negative: the provider's `-1` placeholder is normalized away during
/// validation.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct Alliance {
    color: AllianceColor,
    teams: [u32; ALLIANCE_SIZE],
    score: Option<u32>,
    ranking_points: Option<u32>,
}

impl Alliance {
    pub(crate) fn new(
        color: AllianceColor,
        teams: [u32; ALLIANCE_SIZE],
        score: Option<u32>,
        ranking_points: Option<u32>,
    ) -> Self {
        Self {
            color,
            teams,
            score,
            ranking_points,
        }
    }

    /// Whether `team` plays on this alliance.
    pub fn contains(&self, team: u32) -> bool {
        self.teams.contains(&team)
    }
}
