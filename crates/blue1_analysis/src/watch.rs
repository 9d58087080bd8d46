//! Ranking change detection between polls.

use blue1_core::EventRanking;
use derive_getters::Getters;
use serde::Serialize;
use std::collections::BTreeMap;

/// Team number to rank.
pub type Standings = BTreeMap<u32, u32>;

/// A reported difference between two ranking polls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Getters)]
pub struct RankChange {
    /// Team being watched, if any
    team: Option<u32>,
    /// Watched team's rank at the last report
    previous_rank: Option<u32>,
    /// Watched team's rank now
    current_rank: Option<u32>,
    /// Full table now
    standings: Standings,
}

/// Compares successive ranking tables of one event.
///
/// Without a team every change to the table is reported. With a team only
/// changes to that team's rank are, and other movement is folded into the
/// next report. The first observation is always reported.
///
/// # Examples
///
/// ```
/// use blue1_analysis::RankWatcher;
/// use blue1_core::EventRanking;
///
/// let mut watcher = RankWatcher::new(Some(7042));
/// let first = [EventRanking::new(1, 254), EventRanking::new(2, 7042)];
/// assert!(watcher.observe(&first).is_some());
/// assert!(watcher.observe(&first).is_none());
///
/// let swapped = [EventRanking::new(1, 7042), EventRanking::new(2, 254)];
/// let change = watcher.observe(&swapped).unwrap();
/// assert_eq!(*change.previous_rank(), Some(2));
/// assert_eq!(*change.current_rank(), Some(1));
/// ```
#[derive(Debug, Clone, Default)]
pub struct RankWatcher {
    team: Option<u32>,
    previous: Option<Standings>,
}

impl RankWatcher {
    /// Watch the whole table, or only `team`.
    pub fn new(team: Option<u32>) -> Self {
        Self {
            team,
            previous: None,
        }
    }

    /// The table at the last report.
    pub fn previous(&self) -> Option<&Standings> {
        self.previous.as_ref()
    }

    /// Compare `rankings` with the last report and return a change if one
    /// should be reported. The stored table only advances on a report.
    pub fn observe(&mut self, rankings: &[EventRanking]) -> Option<RankChange> {
        let current: Standings = rankings
            .iter()
            .map(|ranking| (*ranking.team(), *ranking.rank()))
            .collect();

        if self.previous.as_ref() == Some(&current) {
            return None;
        }

        let rank_in = |standings: Option<&Standings>| {
            self.team
                .and_then(|team| standings.and_then(|s| s.get(&team).copied()))
        };
        let previous_rank = rank_in(self.previous.as_ref());
        let current_rank = rank_in(Some(&current));

        if self.previous.is_some() && self.team.is_some() && previous_rank == current_rank {
            tracing::debug!(team = ?self.team, "Table moved without changing the watched rank");
            return None;
        }

        tracing::info!(team = ?self.team, ?previous_rank, ?current_rank, "Rankings changed");
        self.previous = Some(current.clone());
        Some(RankChange {
            team: self.team,
            previous_rank,
            current_rank,
            standings: current,
        })
    }
}
