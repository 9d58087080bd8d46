//! Per-team result summaries.

use blue1_core::Match;
use derive_getters::Getters;
use serde::Serialize;
use std::collections::BTreeMap;

/// A team's record over a set of matches.
#[derive(Debug, Clone, PartialEq, Serialize, Getters)]
pub struct TeamAssessment {
    /// Team number
    team: u32,
    /// Played matches the team took part in
    games: u32,
    /// Matches won; ties are not wins
    wins: u32,
    /// `wins / games`
    win_rate: f64,
    /// Mean alliance score
    average_score: f64,
    /// Highest minus lowest alliance score
    score_spread: u32,
    /// Middle alliance score; the upper of the two for an even count
    median_score: u32,
}

/// Summarize `team`'s played matches.
///
/// Matches the team sat out and unplayed matches are ignored. Returns
/// `None` when nothing is left to summarize.
pub fn assess_team(team: u32, matches: &[Match]) -> Option<TeamAssessment> {
    let mut scores = Vec::new();
    let mut wins = 0;
    for m in matches {
        if let (Some(score), Some(won)) = (m.score_for(team), m.did_team_win(team)) {
            scores.push(score);
            if won {
                wins += 1;
            }
        }
    }
    if scores.is_empty() {
        return None;
    }

    scores.sort_unstable();
    let games = scores.len() as u32;
    let total: u64 = scores.iter().map(|s| u64::from(*s)).sum();
    let lowest = scores[0];
    let highest = scores[scores.len() - 1];

    Some(TeamAssessment {
        team,
        games,
        wins,
        win_rate: f64::from(wins) / f64::from(games),
        average_score: total as f64 / f64::from(games),
        score_spread: highest - lowest,
        median_score: scores[scores.len() / 2],
    })
}

/// Summarize `team`'s season, one assessment per event key.
///
/// Events where the team has no played matches are left out.
pub fn assess_season(team: u32, matches: &[Match]) -> BTreeMap<String, TeamAssessment> {
    let mut by_event: BTreeMap<&str, Vec<Match>> = BTreeMap::new();
    for m in matches {
        by_event.entry(m.event_key()).or_default().push(m.clone());
    }
    by_event
        .into_iter()
        .filter_map(|(event, matches)| {
            assess_team(team, &matches).map(|assessment| (event.to_string(), assessment))
        })
        .collect()
}

impl std::fmt::Display for TeamAssessment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Team {}", self.team)?;
        writeln!(f, "  Games:         {}", self.games)?;
        writeln!(f, "  Wins:          {}", self.wins)?;
        writeln!(f, "  Win rate:      {:.1}%", self.win_rate * 100.0)?;
        writeln!(f, "  Average score: {:.2}", self.average_score)?;
        writeln!(f, "  Score spread:  {}", self.score_spread)?;
        write!(f, "  Median score:  {}", self.median_score)
    }
}
