//! Competition levels.

use serde::{Deserialize, Serialize};

/// Stage of an event a match belongs to.
///
/// Variants are declared in play order, so the derived `Ord` is the order
/// matches happen at an event: qualifications, then each playoff round.
///
/// # Examples
///
/// ```
/// use blue1_core::CompLevel;
/// use std::str::FromStr;
///
/// assert_eq!(CompLevel::from_str("sf").unwrap(), CompLevel::SemiFinal);
/// assert!(CompLevel::Qualification < CompLevel::Final);
/// assert_eq!(CompLevel::Final.to_string(), "f");
/// ```
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
pub enum CompLevel {
    /// Qualification match, counts toward rankings
    #[strum(serialize = "qm")]
    #[serde(rename = "qm")]
    Qualification,
    /// Eighth-final (pre-2023 large playoff brackets)
    #[strum(serialize = "ef")]
    #[serde(rename = "ef")]
    EighthFinal,
    /// Quarterfinal (pre-2023 playoff brackets)
    #[strum(serialize = "qf")]
    #[serde(rename = "qf")]
    QuarterFinal,
    /// Semifinal (double elimination rounds since 2023)
    #[strum(serialize = "sf")]
    #[serde(rename = "sf")]
    SemiFinal,
    /// Final
    #[strum(serialize = "f")]
    #[serde(rename = "f")]
    Final,
}

impl CompLevel {
    /// Whether matches at this level award ranking points.
    pub fn is_qualification(&self) -> bool {
        matches!(self, CompLevel::Qualification)
    }

    /// Human readable name.
    pub fn label(&self) -> &'static str {
        match self {
            CompLevel::Qualification => "Qualification",
            CompLevel::EighthFinal => "Eighth-final",
            CompLevel::QuarterFinal => "Quarterfinal",
            CompLevel::SemiFinal => "Semifinal",
            CompLevel::Final => "Final",
        }
    }
}
