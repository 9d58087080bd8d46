//! Matches and their derived facts.

use crate::{Alliance, AllianceColor, CompLevel, MatchJson};
use blue1_error::{Blue1Result, RecordError, RecordErrorKind};
use derive_getters::Getters;
use serde_json::Value as JsonValue;

/// A video of a match.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct MatchVideo {
    kind: String,
    key: String,
}

impl MatchVideo {
    pub(crate) fn new(kind: String, key: String) -> Self {
        Self { kind, key }
    }

    /// Watch URL, for hosts with a known URL scheme.
    pub fn url(&self) -> Option<String> {
        match self.kind.as_str() {
            "youtube" => Some(format!("https://www.youtube.com/watch?v={}", self.key)),
            _ => None,
        }
    }
}

/// A single match at an event.
///
/// # Examples
///
/// ```
/// use blue1_core::{AllianceColor, Match};
/// use serde_json::json;
///
/// let record = json!({
///     "key": "2023cabl_qm3",
///     "event_key": "2023cabl",
///     "comp_level": "qm",
///     "set_number": 1,
///     "match_number": 3,
///     "alliances": {
///         "red": { "team_keys": ["frc254", "frc1678", "frc971"], "score": 120 },
///         "blue": { "team_keys": ["frc7042", "frc4414", "frc118"], "score": 98 }
///     },
///     "winning_alliance": "red",
///     "score_breakdown": { "red": { "rp": 3 }, "blue": { "rp": 1 } }
/// });
///
/// let m = Match::from_json(&record).unwrap();
/// assert!(m.was_played());
/// assert_eq!(m.score_for(7042), Some(98));
/// assert_eq!(m.alliance_of(254), Some(AllianceColor::Red));
/// assert_eq!(m.overall_sequence_number(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct Match {
    key: String,
    event_key: String,
    comp_level: CompLevel,
    set_number: u32,
    match_number: u32,
    red: Alliance,
    blue: Alliance,
    winning_alliance: Option<AllianceColor>,
    videos: Vec<MatchVideo>,
    scheduled_time: Option<i64>,
    actual_time: Option<i64>,
}

impl Match {
    /// Build a match from a raw API record.
    ///
    /// # Errors
    ///
    /// Returns a malformed record error for missing fields, unknown
    /// competition levels, bad team keys, or alliances that are not two
    /// disjoint groups of three.
    #[track_caller]
    pub fn from_json(value: &JsonValue) -> Blue1Result<Self> {
        let record: MatchJson = serde_json::from_value(value.clone()).map_err(|e| {
            RecordError::new(RecordErrorKind::Shape {
                entity: "match",
                reason: e.to_string(),
            })
        })?;
        Self::try_from(record)
    }

    #[allow(clippy::too_many_arguments)]
    pub(crate) fn from_parts(
        key: String,
        event_key: String,
        comp_level: CompLevel,
        set_number: u32,
        match_number: u32,
        red: Alliance,
        blue: Alliance,
        winning_alliance: Option<AllianceColor>,
        videos: Vec<MatchVideo>,
        scheduled_time: Option<i64>,
        actual_time: Option<i64>,
    ) -> Self {
        Self {
            key,
            event_key,
            comp_level,
            set_number,
            match_number,
            red,
            blue,
            winning_alliance,
            videos,
            scheduled_time,
            actual_time,
        }
    }

    /// The alliance of the given color.
    pub fn alliance(&self, color: AllianceColor) -> &Alliance {
        match color {
            AllianceColor::Red => &self.red,
            AllianceColor::Blue => &self.blue,
        }
    }

    /// Both alliances, red first.
    pub fn alliances(&self) -> [&Alliance; 2] {
        [&self.red, &self.blue]
    }

    /// A match is played once both alliance scores are posted.
    pub fn was_played(&self) -> bool {
        self.red.score().is_some() && self.blue.score().is_some()
    }

    /// Which alliance `team` played on, if any.
    pub fn alliance_of(&self, team: u32) -> Option<AllianceColor> {
        self.alliances()
            .into_iter()
            .find(|alliance| alliance.contains(team))
            .map(|alliance| *alliance.color())
    }

    /// Score of the alliance `team` played on.
    pub fn score_for(&self, team: u32) -> Option<u32> {
        self.alliance_of(team)
            .and_then(|color| *self.alliance(color).score())
    }

    /// Ranking points awarded to the alliance `team` played on.
    pub fn ranking_points_for(&self, team: u32) -> Option<u32> {
        self.alliance_of(team)
            .and_then(|color| *self.alliance(color).ranking_points())
    }

    /// Whether `team` won. `None` if the team sat out or the match is unplayed.
    ///
    /// A tie has no winning alliance and counts as a loss for both sides.
    pub fn did_team_win(&self, team: u32) -> Option<bool> {
        if !self.was_played() {
            return None;
        }
        let color = self.alliance_of(team)?;
        Some(self.winning_alliance == Some(color))
    }

    /// Whether `team` and `other` faced each other in this match.
    pub fn contains_opponent(&self, team: u32, other: u32) -> bool {
        match (self.alliance_of(team), self.alliance_of(other)) {
            (Some(a), Some(b)) => a != b,
            _ => false,
        }
    }

    /// `set_number * match_number`.
    ///
    /// Only monotonic within a single competition level: qualification
    /// matches (always set 1) reduce to their match number, while playoff
    /// matches fold set and match together. Combine with the level for a
    /// total order; see [`crate::match_cmp`].
    ///
    /// Both factors are at most [`crate::MAX_MATCH_NUMBER`], so the product
    /// fits.
    pub fn overall_sequence_number(&self) -> u32 {
        self.set_number * self.match_number
    }

    /// Short name, e.g. "Qualification 12" or "Semifinal 3 Match 1".
    pub fn display_name(&self) -> String {
        if self.comp_level.is_qualification() {
            format!("{} {}", self.comp_level.label(), self.match_number)
        } else {
            format!(
                "{} {} Match {}",
                self.comp_level.label(),
                self.set_number,
                self.match_number
            )
        }
    }
}

impl std::fmt::Display for Match {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let score = |alliance: &Alliance| {
            alliance
                .score()
                .map(|s| s.to_string())
                .unwrap_or_else(|| "-".to_string())
        };
        let teams = |alliance: &Alliance| {
            alliance
                .teams()
                .iter()
                .map(|t| t.to_string())
                .collect::<Vec<_>>()
                .join(" ")
        };
        write!(
            f,
            "{}: red [{}] {} - {} [{}] blue",
            self.display_name(),
            teams(&self.red),
            score(&self.red),
            score(&self.blue),
            teams(&self.blue)
        )
    }
}
