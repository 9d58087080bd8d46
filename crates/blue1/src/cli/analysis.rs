//! Commands built on `blue1_analysis`.

use super::commands::OutputFormat;
use super::output::{missing, print_json};
use blue1::{
    assess_team, replay_event, score_series, Blue1Result, Match, MatchJson, TbaClient,
    TimelineScale,
};
use serde_json::json;
use tracing::instrument;

/// Show a team's played matches at an event and its record.
#[instrument(skip(client, format))]
pub async fn team_event(
    client: &TbaClient,
    team: u32,
    event: &str,
    format: OutputFormat,
) -> Blue1Result<()> {
    let Some(matches) = client.get_team_event_matches(team, event).await else {
        missing(format!("matches for team {team} at {event}"));
    };
    let played: Vec<&Match> = matches.iter().filter(|m| m.was_played()).collect();
    let assessment = assess_team(team, &matches);

    match format {
        OutputFormat::Json => {
            let records: Vec<MatchJson> = played.iter().map(|m| MatchJson::from(*m)).collect();
            print_json(&json!({
                "team": team,
                "event": event,
                "matches": records,
                "assessment": assessment,
            }))?;
        }
        OutputFormat::Text => {
            if played.is_empty() {
                println!("No played matches for team {} at {}", team, event);
                return Ok(());
            }
            for m in &played {
                println!("{}", m);
            }
            if let Some(assessment) = assessment {
                println!();
                println!("{}", assessment);
            }
        }
    }
    Ok(())
}

/// Replay an event's qualifications and show a team's rank after each one.
#[instrument(skip(client, format))]
pub async fn rank_history(
    client: &TbaClient,
    team: u32,
    event: &str,
    format: OutputFormat,
) -> Blue1Result<()> {
    let Some(teams) = client.get_event_teams(event).await else {
        missing(format!("team list for event {event}"));
    };
    let Some(matches) = client.get_event_matches(event).await else {
        missing(format!("matches for event {event}"));
    };

    let trajectory = replay_event(&teams, &matches, team)?;

    match format {
        OutputFormat::Json => {
            print_json(&json!({
                "event": event,
                "team": team,
                "matches": trajectory.match_keys(),
                "ranks": trajectory.ranks(),
                "rp_averages": trajectory.rp_averages(),
            }))?;
        }
        OutputFormat::Text => {
            if trajectory.is_empty() {
                println!("No qualification results published for {} yet", event);
                return Ok(());
            }
            println!("Team {} at {} ({} teams)", team, event, teams.len());
            let rows = trajectory
                .match_keys()
                .iter()
                .zip(trajectory.ranks())
                .zip(trajectory.rp_averages());
            for ((key, rank), average) in rows {
                let name = matches
                    .iter()
                    .find(|m| m.key() == key)
                    .map(Match::display_name)
                    .unwrap_or_else(|| key.clone());
                println!("  After {:<18} rank {:>3}  avg RP {:.2}", name, rank, average);
            }
        }
    }
    Ok(())
}

/// Put two teams' scores at an event on one timeline.
#[instrument(skip(client, format))]
pub async fn compare(
    client: &TbaClient,
    team: u32,
    other: u32,
    event: &str,
    format: OutputFormat,
) -> Blue1Result<()> {
    let Some(event_matches) = client.get_event_matches(event).await else {
        missing(format!("matches for event {event}"));
    };
    let scale = TimelineScale::from_event_matches(&event_matches);

    let mut reports = Vec::new();
    for number in [team, other] {
        let Some(matches) = client.get_team_event_matches(number, event).await else {
            missing(format!("matches for team {number} at {event}"));
        };
        reports.push((
            number,
            score_series(number, &matches, &scale),
            assess_team(number, &matches),
        ));
    }

    match format {
        OutputFormat::Json => {
            let teams: Vec<_> = reports
                .iter()
                .map(|(number, series, assessment)| {
                    json!({ "team": number, "series": series, "assessment": assessment })
                })
                .collect();
            print_json(&json!({ "event": event, "scale": scale, "teams": teams }))?;
        }
        OutputFormat::Text => {
            for (number, series, assessment) in &reports {
                println!("Team {} at {}", number, event);
                for point in series {
                    println!("  {:>4}  {:>4}  {}", point.position(), point.score(), point.match_key());
                }
                match assessment {
                    Some(assessment) => println!("{}", assessment),
                    None => println!("  No played matches"),
                }
                println!();
            }
        }
    }
    Ok(())
}
