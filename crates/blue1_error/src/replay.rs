//! Ranking replay error types.

/// Replay input that violates the engine's preconditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum ReplayErrorKind {
    /// The target team is not part of the replayed team set
    #[display("Target team {} is not in the event team list", _0)]
    TargetNotInEvent(u32),
    /// A match lists a team that is not part of the replayed team set
    #[display("Team {} in match {} is not in the event team list", team, match_key)]
    UnknownTeam {
        /// Team number
        team: u32,
        /// Match key
        match_key: String,
    },
    /// An unplayed match reached the replay loop
    #[display("Match {} has not been played", _0)]
    UnplayedMatch(String),
    /// A qualification match carries no ranking point breakdown
    #[display("Match {} has no ranking point breakdown", _0)]
    MissingRankingPoints(String),
}

/// Replay error with location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Replay Error: {} at line {} in {}", kind, line, file)]
pub struct ReplayError {
    kind: ReplayErrorKind,
    line: u32,
    file: &'static str,
}

impl ReplayError {
    /// Create a new replay error with caller location tracking.
    #[track_caller]
    pub fn new(kind: ReplayErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Get the error kind.
    pub fn kind(&self) -> &ReplayErrorKind {
        &self.kind
    }
}
