//! Teams.

use crate::TeamJson;
use blue1_error::{Blue1Result, RecordError, RecordErrorKind};
use derive_getters::Getters;
use serde_json::Value as JsonValue;

/// Prefix of every team key.
pub const TEAM_KEY_PREFIX: &str = "frc";

/// An FRC team.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct Team {
    number: u32,
    nickname: Option<String>,
    name: Option<String>,
    city: Option<String>,
    state_prov: Option<String>,
    country: Option<String>,
    rookie_year: Option<i32>,
    website: Option<String>,
}

impl Team {
    /// Build a team from a raw API record.
    ///
    /// # Errors
    ///
    /// Returns a malformed record error if required fields are missing or
    /// the key does not match the team number.
    #[track_caller]
    pub fn from_json(value: &JsonValue) -> Blue1Result<Self> {
        let record: TeamJson = serde_json::from_value(value.clone()).map_err(|e| {
            RecordError::new(RecordErrorKind::Shape {
                entity: "team",
                reason: e.to_string(),
            })
        })?;
        Self::try_from(record)
    }

    /// Canonical key, `frc<number>`.
    pub fn key(&self) -> String {
        team_key(self.number)
    }

    /// Comma separated city / state / country, skipping unknown parts.
    pub fn location(&self) -> Option<String> {
        let parts: Vec<&str> = [&self.city, &self.state_prov, &self.country]
            .into_iter()
            .filter_map(|p| p.as_deref())
            .filter(|p| !p.is_empty())
            .collect();
        if parts.is_empty() {
            None
        } else {
            Some(parts.join(", "))
        }
    }

    pub(crate) fn from_parts(record: TeamJson) -> Self {
        Self {
            number: record.team_number,
            nickname: record.nickname,
            name: record.name,
            city: record.city,
            state_prov: record.state_prov,
            country: record.country,
            rookie_year: record.rookie_year,
            website: record.website,
        }
    }
}

impl std::fmt::Display for Team {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.nickname {
            Some(nickname) => write!(f, "{} - {}", self.number, nickname),
            None => write!(f, "{}", self.number),
        }
    }
}

/// Format a team number as its API key.
///
/// ```
/// assert_eq!(blue1_core::team_key(7042), "frc7042");
/// ```
pub fn team_key(number: u32) -> String {
    format!("{TEAM_KEY_PREFIX}{number}")
}

/// Parse a team key (`frc254`) into its number.
///
/// # Errors
///
/// Returns a malformed record error for keys without the `frc` prefix or
/// with a non-numeric suffix.
///
/// ```
/// use blue1_core::team_number_from_key;
///
/// assert_eq!(team_number_from_key("frc254").unwrap(), 254);
/// assert!(team_number_from_key("254").is_err());
/// assert!(team_number_from_key("frcB").is_err());
/// ```
#[track_caller]
pub fn team_number_from_key(key: &str) -> Blue1Result<u32> {
    let digits = key
        .strip_prefix(TEAM_KEY_PREFIX)
        .ok_or_else(|| RecordError::invalid("team", "key", format!("'{key}' lacks the frc prefix")))?;
    let number = digits
        .parse::<u32>()
        .map_err(|e| RecordError::invalid("team", "key", format!("'{key}': {e}")))?;
    Ok(number)
}
