//! Ranking replay.
//!
//! Qualification rankings are ordered by average ranking points per match
//! played. Replaying the qualification schedule one match at a time yields
//! where a team stood after each match, which the provider only reports for
//! the present.

use blue1_core::{sorted_matches, AllianceColor, Match};
use blue1_error::{Blue1Result, ReplayError, ReplayErrorKind};
use derive_getters::Getters;
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::instrument;

/// Cumulative ranking points and matches played for one team.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct RankState {
    points: u32,
    played: u32,
}

impl RankState {
    fn record(&mut self, points: u32) {
        self.points += points;
        self.played += 1;
    }

    fn average(&self) -> f64 {
        if self.played == 0 {
            0.0
        } else {
            f64::from(self.points) / f64::from(self.played)
        }
    }
}

/// A team's rank and ranking point average after each qualification match.
///
/// Both series have one entry per qualification match replayed, in the
/// order the matches were given.
#[derive(Debug, Clone, PartialEq, Serialize, Getters)]
pub struct RankTrajectory {
    /// Team the trajectory belongs to
    team: u32,
    /// Keys of the replayed matches
    match_keys: Vec<String>,
    /// Rank after each match, 1 is best
    ranks: Vec<u32>,
    /// Average ranking points after each match
    rp_averages: Vec<f64>,
}

impl RankTrajectory {
    /// Number of matches replayed.
    pub fn len(&self) -> usize {
        self.ranks.len()
    }

    /// Whether no match was replayed.
    pub fn is_empty(&self) -> bool {
        self.ranks.is_empty()
    }

    /// Rank after the last replayed match.
    pub fn final_rank(&self) -> Option<u32> {
        self.ranks.last().copied()
    }
}

/// Replay `qual_matches` in the given order and track `target`.
///
/// After each match every team on an alliance gains that alliance's
/// ranking points and one match played. The target's rank is one plus the
/// number of teams with a strictly greater average, so ties share the best
/// rank. Teams that have not played yet average zero. Matches that are not
/// qualification matches are skipped.
///
/// # Errors
///
/// Returns a replay error if `target` is not in `teams`, or if a
/// qualification match is unplayed, lacks a ranking point breakdown, or
/// lists a team that is not in `teams`.
///
/// # Examples
///
/// ```
/// use blue1_analysis::replay;
/// use blue1_core::Match;
/// use serde_json::json;
///
/// let qm1 = Match::from_json(&json!({
///     "key": "2023cabl_qm1",
///     "event_key": "2023cabl",
///     "comp_level": "qm",
///     "set_number": 1,
///     "match_number": 1,
///     "alliances": {
///         "red": { "team_keys": ["frc1", "frc2", "frc3"], "score": 40 },
///         "blue": { "team_keys": ["frc4", "frc5", "frc6"], "score": 10 }
///     },
///     "winning_alliance": "red",
///     "score_breakdown": { "red": { "rp": 2 }, "blue": { "rp": 0 } }
/// })).unwrap();
///
/// let trajectory = replay(&[1, 2, 3, 4, 5, 6], &[qm1], 4).unwrap();
/// assert_eq!(trajectory.ranks(), &vec![4]);
/// assert_eq!(trajectory.rp_averages(), &vec![0.0]);
/// ```
#[instrument(skip(teams, qual_matches), fields(teams = teams.len(), matches = qual_matches.len()))]
pub fn replay(teams: &[u32], qual_matches: &[Match], target: u32) -> Blue1Result<RankTrajectory> {
    let mut states: BTreeMap<u32, RankState> =
        teams.iter().map(|team| (*team, RankState::default())).collect();
    if !states.contains_key(&target) {
        return Err(ReplayError::new(ReplayErrorKind::TargetNotInEvent(target)).into());
    }

    let mut match_keys = Vec::with_capacity(qual_matches.len());
    let mut ranks = Vec::with_capacity(qual_matches.len());
    let mut rp_averages = Vec::with_capacity(qual_matches.len());

    for m in qual_matches {
        if !m.comp_level().is_qualification() {
            tracing::debug!(match_key = %m.key(), "Skipping playoff match");
            continue;
        }
        if !m.was_played() {
            return Err(ReplayError::new(ReplayErrorKind::UnplayedMatch(m.key().clone())).into());
        }

        for color in [AllianceColor::Red, AllianceColor::Blue] {
            let alliance = m.alliance(color);
            let Some(points) = *alliance.ranking_points() else {
                return Err(
                    ReplayError::new(ReplayErrorKind::MissingRankingPoints(m.key().clone())).into(),
                );
            };
            for team in alliance.teams() {
                let Some(state) = states.get_mut(team) else {
                    return Err(ReplayError::new(ReplayErrorKind::UnknownTeam {
                        team: *team,
                        match_key: m.key().clone(),
                    })
                    .into());
                };
                state.record(points);
            }
        }

        let average = states
            .get(&target)
            .map(RankState::average)
            .unwrap_or_default();
        let ahead = states
            .values()
            .filter(|state| state.average() > average)
            .count();
        match_keys.push(m.key().clone());
        ranks.push(1 + ahead as u32);
        rp_averages.push(average);
    }

    tracing::debug!(replayed = ranks.len(), final_rank = ?ranks.last(), "Replay finished");
    Ok(RankTrajectory {
        team: target,
        match_keys,
        ranks,
        rp_averages,
    })
}

/// Replay an event's full match list.
///
/// Keeps only played qualification matches and puts them in play order.
/// Ranking point breakdowns are published after scores, so the replay stops
/// at the first played match without one and covers the prefix before it.
///
/// # Errors
///
/// Returns a replay error if `target` is not in `teams` or a match lists a
/// team that is not.
pub fn replay_event(teams: &[u32], matches: &[Match], target: u32) -> Blue1Result<RankTrajectory> {
    let quals = sorted_matches(
        matches
            .iter()
            .filter(|m| m.comp_level().is_qualification() && m.was_played())
            .cloned()
            .collect(),
    );

    let published = quals
        .iter()
        .position(|m| m.alliances().iter().any(|a| a.ranking_points().is_none()))
        .unwrap_or(quals.len());
    if let Some(pending) = quals.get(published) {
        tracing::warn!(
            match_key = %pending.key(),
            skipped = quals.len() - published,
            "Ranking points not published yet, replaying up to the previous match"
        );
    }

    replay(teams, &quals[..published], target)
}
