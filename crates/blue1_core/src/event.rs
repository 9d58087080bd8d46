//! Events.

use crate::EventJson;
use blue1_error::{Blue1Result, RecordError, RecordErrorKind};
use chrono::NaiveDate;
use derive_getters::Getters;
use serde_json::Value as JsonValue;

/// An FRC event (regional, district event, championship division, ...).
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct Event {
    key: String,
    name: String,
    event_code: String,
    year: i32,
    start_date: Option<NaiveDate>,
    end_date: Option<NaiveDate>,
    city: Option<String>,
    state_prov: Option<String>,
    country: Option<String>,
    event_type: Option<String>,
    playoff_type: Option<i32>,
    playoff_format: Option<String>,
}

impl Event {
    /// Build an event from a raw API record.
    ///
    /// # Errors
    ///
    /// Returns a malformed record error if required fields are missing, the
    /// key is not `<year><event_code>`, or the dates are reversed.
    #[track_caller]
    pub fn from_json(value: &JsonValue) -> Blue1Result<Self> {
        let record: EventJson = serde_json::from_value(value.clone()).map_err(|e| {
            RecordError::new(RecordErrorKind::Shape {
                entity: "event",
                reason: e.to_string(),
            })
        })?;
        Self::try_from(record)
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

    pub(crate) fn from_parts(record: EventJson) -> Self {
        Self {
            key: record.key,
            name: record.name,
            event_code: record.event_code,
            year: record.year,
            start_date: record.start_date,
            end_date: record.end_date,
            city: record.city,
            state_prov: record.state_prov,
            country: record.country,
            event_type: record.event_type_string,
            playoff_type: record.playoff_type,
            playoff_format: record.playoff_type_string,
        }
    }
}

impl std::fmt::Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.key)?;
        if let (Some(start), Some(end)) = (self.start_date, self.end_date) {
            write!(f, ", {start} to {end}")?;
        }
        Ok(())
    }
}
