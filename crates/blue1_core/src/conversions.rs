//! Conversions between provider JSON models and validated domain types.
//!
//! `TryFrom` runs every semantic check a record must pass before it becomes
//! a domain value. The reverse `From` impls rebuild a wire record, restoring
//! the provider's `-1` placeholder for unposted scores.

use crate::{
    team_key, team_number_from_key, Alliance, AllianceBreakdownJson, AllianceColor, AllianceJson,
    AlliancesJson, CompLevel, Event, EventJson, Match, MatchJson, MatchVideo, MatchVideoJson,
    ScoreBreakdownJson, Team, TeamJson, ALLIANCE_SIZE,
};
use blue1_error::{Blue1Error, Blue1Result, RecordError};
use std::collections::HashSet;
use std::str::FromStr;

/// Placeholder the provider uses for scores that have not been posted.
pub const UNPLAYED_SCORE: i32 = -1;

/// Largest accepted set or match number. Keeps their product, and a
/// timeline position built from a few of them, within `u32`.
pub const MAX_MATCH_NUMBER: u32 = u16::MAX as u32;

impl TryFrom<TeamJson> for Team {
    type Error = Blue1Error;

    fn try_from(json: TeamJson) -> Blue1Result<Self> {
        let expected = team_key(json.team_number);
        if json.key != expected {
            return Err(RecordError::invalid(
                "team",
                "key",
                format!("'{}' does not match team number {}", json.key, json.team_number),
            )
            .into());
        }
        Ok(Team::from_parts(json))
    }
}

impl From<&Team> for TeamJson {
    fn from(team: &Team) -> Self {
        TeamJson {
            key: team.key(),
            team_number: *team.number(),
            nickname: team.nickname().clone(),
            name: team.name().clone(),
            city: team.city().clone(),
            state_prov: team.state_prov().clone(),
            country: team.country().clone(),
            rookie_year: *team.rookie_year(),
            website: team.website().clone(),
        }
    }
}

impl TryFrom<EventJson> for Event {
    type Error = Blue1Error;

    fn try_from(json: EventJson) -> Blue1Result<Self> {
        let expected = format!("{}{}", json.year, json.event_code);
        if !json.key.eq_ignore_ascii_case(&expected) {
            return Err(RecordError::invalid(
                "event",
                "key",
                format!("'{}' is not year + event code ('{}')", json.key, expected),
            )
            .into());
        }
        if let (Some(start), Some(end)) = (json.start_date, json.end_date)
            && end < start
        {
            return Err(RecordError::invalid(
                "event",
                "end_date",
                format!("{end} is before start date {start}"),
            )
            .into());
        }
        Ok(Event::from_parts(json))
    }
}

impl From<&Event> for EventJson {
    fn from(event: &Event) -> Self {
        EventJson {
            key: event.key().clone(),
            name: event.name().clone(),
            event_code: event.event_code().clone(),
            year: *event.year(),
            start_date: *event.start_date(),
            end_date: *event.end_date(),
            city: event.city().clone(),
            state_prov: event.state_prov().clone(),
            country: event.country().clone(),
            event_type_string: event.event_type().clone(),
            playoff_type: *event.playoff_type(),
            playoff_type_string: event.playoff_format().clone(),
        }
    }
}

/// Normalize a posted score: negative values mean "not posted".
fn normalize_score(score: Option<i32>) -> Option<u32> {
    score.and_then(|s| u32::try_from(s).ok())
}

/// Ranking points from an alliance breakdown, if published.
#[track_caller]
fn ranking_points(
    breakdown: Option<&AllianceBreakdownJson>,
    color: AllianceColor,
) -> Blue1Result<Option<u32>> {
    match breakdown.and_then(|b| b.rp) {
        None => Ok(None),
        Some(rp) => u32::try_from(rp).map(Some).map_err(|_| {
            RecordError::invalid(
                "match",
                format!("score_breakdown.{color}.rp"),
                format!("negative ranking points {rp}"),
            )
            .into()
        }),
    }
}

#[track_caller]
fn alliance_from_json(
    json: &AllianceJson,
    color: AllianceColor,
    breakdown: Option<&AllianceBreakdownJson>,
) -> Blue1Result<Alliance> {
    if json.team_keys.len() != ALLIANCE_SIZE {
        return Err(RecordError::invalid(
            "match",
            format!("alliances.{color}.team_keys"),
            format!("expected {ALLIANCE_SIZE} teams, found {}", json.team_keys.len()),
        )
        .into());
    }

    let mut teams = [0u32; ALLIANCE_SIZE];
    for (slot, key) in teams.iter_mut().zip(&json.team_keys) {
        *slot = team_number_from_key(key)?;
    }

    let unique: HashSet<u32> = teams.iter().copied().collect();
    if unique.len() != ALLIANCE_SIZE {
        return Err(RecordError::invalid(
            "match",
            format!("alliances.{color}.team_keys"),
            "a team is listed twice",
        )
        .into());
    }

    Ok(Alliance::new(
        color,
        teams,
        normalize_score(json.score),
        ranking_points(breakdown, color)?,
    ))
}

impl TryFrom<MatchJson> for Match {
    type Error = Blue1Error;

    fn try_from(json: MatchJson) -> Blue1Result<Self> {
        let comp_level = CompLevel::from_str(&json.comp_level).map_err(|_| {
            RecordError::invalid(
                "match",
                "comp_level",
                format!("unknown competition level '{}'", json.comp_level),
            )
        })?;

        let numbers = [
            ("set_number", json.set_number),
            ("match_number", json.match_number),
        ];
        for (field, value) in numbers {
            if value > MAX_MATCH_NUMBER {
                return Err(RecordError::invalid(
                    "match",
                    field,
                    format!("{value} is larger than {MAX_MATCH_NUMBER}"),
                )
                .into());
            }
        }

        let breakdown = json.score_breakdown.as_ref();
        let red = alliance_from_json(
            &json.alliances.red,
            AllianceColor::Red,
            breakdown.and_then(|b| b.red.as_ref()),
        )?;
        let blue = alliance_from_json(
            &json.alliances.blue,
            AllianceColor::Blue,
            breakdown.and_then(|b| b.blue.as_ref()),
        )?;

        if let Some(shared) = red.teams().iter().find(|t| blue.contains(**t)) {
            return Err(RecordError::invalid(
                "match",
                "alliances",
                format!("team {shared} is on both alliances"),
            )
            .into());
        }

        let winning_alliance = match json.winning_alliance.as_deref() {
            None | Some("") => None,
            Some(color) => Some(AllianceColor::from_str(color).map_err(|_| {
                RecordError::invalid(
                    "match",
                    "winning_alliance",
                    format!("unknown alliance '{color}'"),
                )
            })?),
        };

        let videos = json
            .videos
            .into_iter()
            .map(|v| MatchVideo::new(v.kind, v.key))
            .collect();

        Ok(Match::from_parts(
            json.key,
            json.event_key,
            comp_level,
            json.set_number,
            json.match_number,
            red,
            blue,
            winning_alliance,
            videos,
            json.time,
            json.actual_time,
        ))
    }
}

fn alliance_to_json(alliance: &Alliance) -> AllianceJson {
    AllianceJson {
        team_keys: alliance.teams().iter().map(|t| team_key(*t)).collect(),
        score: Some(
            alliance
                .score()
                .and_then(|s| i32::try_from(s).ok())
                .unwrap_or(UNPLAYED_SCORE),
        ),
    }
}

impl From<&Match> for MatchJson {
    fn from(m: &Match) -> Self {
        let breakdown = |alliance: &Alliance| {
            alliance.ranking_points().map(|rp| AllianceBreakdownJson {
                rp: i32::try_from(rp).ok(),
            })
        };
        let red_breakdown = breakdown(m.red());
        let blue_breakdown = breakdown(m.blue());
        let score_breakdown = if red_breakdown.is_none() && blue_breakdown.is_none() {
            None
        } else {
            Some(ScoreBreakdownJson {
                red: red_breakdown,
                blue: blue_breakdown,
            })
        };

        MatchJson {
            key: m.key().clone(),
            event_key: m.event_key().clone(),
            comp_level: m.comp_level().to_string(),
            set_number: *m.set_number(),
            match_number: *m.match_number(),
            alliances: AlliancesJson {
                red: alliance_to_json(m.red()),
                blue: alliance_to_json(m.blue()),
            },
            winning_alliance: Some(
                m.winning_alliance()
                    .map(|c| c.to_string())
                    .unwrap_or_default(),
            ),
            score_breakdown,
            videos: m
                .videos()
                .iter()
                .map(|v| MatchVideoJson {
                    kind: v.kind().clone(),
                    key: v.key().clone(),
                })
                .collect(),
            time: *m.scheduled_time(),
            actual_time: *m.actual_time(),
        }
    }
}
