//! Event ranking tables.

use crate::{team_number_from_key, RankingsJson};
use blue1_error::{Blue1Result, RecordError, RecordErrorKind};
use derive_getters::Getters;
use serde_json::Value as JsonValue;

/// One row of an event's official ranking table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Getters)]
pub struct EventRanking {
    rank: u32,
    team: u32,
}

impl EventRanking {
    /// Create a ranking row.
    pub fn new(rank: u32, team: u32) -> Self {
        Self { rank, team }
    }

    /// Parse an `event/{key}/rankings` payload, sorted by rank.
    ///
    /// A null ranking table (no qualification match played yet) yields an
    /// empty list.
    ///
    /// # Errors
    ///
    /// Returns a malformed record error for shape errors or bad team keys.
    #[track_caller]
    pub fn list_from_json(value: &JsonValue) -> Blue1Result<Vec<EventRanking>> {
        let record: RankingsJson = serde_json::from_value(value.clone()).map_err(|e| {
            RecordError::new(RecordErrorKind::Shape {
                entity: "rankings",
                reason: e.to_string(),
            })
        })?;

        let mut rows = record
            .rankings
            .unwrap_or_default()
            .into_iter()
            .map(|row| Ok(EventRanking::new(row.rank, team_number_from_key(&row.team_key)?)))
            .collect::<Blue1Result<Vec<_>>>()?;
        rows.sort();
        Ok(rows)
    }
}
