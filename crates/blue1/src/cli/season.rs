//! Season-wide views of a team.

use super::commands::OutputFormat;
use super::output::{missing, print_json};
use blue1::{assess_season, Blue1Result, TbaClient};
use serde_json::{json, Value as JsonValue};
use tracing::instrument;

/// Show a team's record at each event of a season.
#[instrument(skip(client, format))]
pub async fn team_season(
    client: &TbaClient,
    team: u32,
    year: i32,
    format: OutputFormat,
) -> Blue1Result<()> {
    let Some(matches) = client.get_team_matches(team, year).await else {
        missing(format!("{year} matches for team {team}"));
    };
    let by_event = assess_season(team, &matches);

    match format {
        OutputFormat::Json => {
            print_json(&json!({ "team": team, "year": year, "events": by_event }))?;
        }
        OutputFormat::Text => {
            if by_event.is_empty() {
                println!("No played matches for team {} in {}", team, year);
                return Ok(());
            }
            for (event, assessment) in &by_event {
                println!("{}", event);
                println!("{}", assessment);
                println!();
            }
        }
    }
    Ok(())
}

/// Show a team's status at an event as the provider summarizes it.
#[instrument(skip(client, format))]
pub async fn team_status(
    client: &TbaClient,
    team: u32,
    event: &str,
    format: OutputFormat,
) -> Blue1Result<()> {
    let Some(status) = client.get_team_event_status(team, event).await else {
        missing(format!("status for team {team} at {event}"));
    };

    match format {
        OutputFormat::Json => print_json(&status)?,
        OutputFormat::Text => match status_line(&status) {
            Some(line) => println!("{}", line),
            None => println!("No status for team {} at {}", team, event),
        },
    }
    Ok(())
}

/// Show a team's status at each event of a season.
#[instrument(skip(client, format))]
pub async fn team_statuses(
    client: &TbaClient,
    team: u32,
    year: i32,
    format: OutputFormat,
) -> Blue1Result<()> {
    let Some(statuses) = client.get_team_events_statuses(team, year).await else {
        missing(format!("{year} statuses for team {team}"));
    };

    match format {
        OutputFormat::Json => print_json(&statuses)?,
        OutputFormat::Text => {
            let Some(by_event) = statuses.as_object().filter(|map| !map.is_empty()) else {
                println!("No events for team {} in {}", team, year);
                return Ok(());
            };
            for (event, status) in by_event {
                let line = status_line(status).unwrap_or_else(|| "no status yet".to_string());
                println!("{:<12} {}", event, line);
            }
        }
    }
    Ok(())
}

/// The provider's one-line summary with its HTML markup removed.
///
/// `None` for a null status or one without a summary.
fn status_line(status: &JsonValue) -> Option<String> {
    let summary = status.get("overall_status_str")?.as_str()?;
    let mut line = String::with_capacity(summary.len());
    let mut in_tag = false;
    for c in summary.chars() {
        match c {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => line.push(c),
            _ => {}
        }
    }
    let line = line.trim();
    (!line.is_empty()).then(|| line.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_line_strips_markup() {
        let status = json!({
            "qual": { "ranking": { "rank": 3 } },
            "overall_status_str": "Team <b>7042</b> was <b>Rank 3/40</b> with a record of <b>8-2-0</b>."
        });
        assert_eq!(
            status_line(&status).as_deref(),
            Some("Team 7042 was Rank 3/40 with a record of 8-2-0.")
        );
    }

    #[test]
    fn test_status_line_absent() {
        assert_eq!(status_line(&JsonValue::Null), None);
        assert_eq!(status_line(&json!({ "qual": null })), None);
        assert_eq!(status_line(&json!({ "overall_status_str": "<b></b>" })), None);
    }
}
