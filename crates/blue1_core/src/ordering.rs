//! Match ordering used as a time axis.
//!
//! Unplayed matches come first, then matches by competition level, then by
//! [`Match::overall_sequence_number`] within a level. Matches that share
//! level and sequence number compare equal; a stable sort keeps their input
//! order, so sorting is idempotent.

use crate::Match;
use std::cmp::Ordering;

/// Compare two matches by when they happen at an event.
///
/// ```
/// use blue1_core::{match_cmp, Match};
/// use serde_json::json;
/// use std::cmp::Ordering;
///
/// let record = |level: &str, set: u32, number: u32| json!({
///     "key": format!("2023cabl_{level}{set}m{number}"),
///     "event_key": "2023cabl",
///     "comp_level": level,
///     "set_number": set,
///     "match_number": number,
///     "alliances": {
///         "red": { "team_keys": ["frc1", "frc2", "frc3"], "score": 10 },
///         "blue": { "team_keys": ["frc4", "frc5", "frc6"], "score": 20 }
///     }
/// });
///
/// let qual = Match::from_json(&record("qm", 1, 80)).unwrap();
/// let semi = Match::from_json(&record("sf", 1, 1)).unwrap();
/// assert_eq!(match_cmp(&qual, &semi), Ordering::Less);
/// ```
pub fn match_cmp(a: &Match, b: &Match) -> Ordering {
    // false < true puts unplayed matches first
    a.was_played()
        .cmp(&b.was_played())
        .then_with(|| a.comp_level().cmp(b.comp_level()))
        .then_with(|| a.overall_sequence_number().cmp(&b.overall_sequence_number()))
}

/// Sort matches in place with [`match_cmp`].
pub fn sort_matches(matches: &mut [Match]) {
    matches.sort_by(match_cmp);
}

/// Return the matches sorted with [`match_cmp`].
pub fn sorted_matches(mut matches: Vec<Match>) -> Vec<Match> {
    sort_matches(&mut matches);
    matches
}
