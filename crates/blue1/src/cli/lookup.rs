//! Single record lookups.

use super::commands::OutputFormat;
use super::output::{missing, print_json};
use blue1::{Blue1Result, EventJson, MatchJson, TbaClient, TeamJson};
use serde_json::json;

/// Show a team.
pub async fn team(client: &TbaClient, number: u32, format: OutputFormat) -> Blue1Result<()> {
    let Some(team) = client.get_team(number).await else {
        missing(format!("team {number}"));
    };

    match format {
        OutputFormat::Json => print_json(&TeamJson::from(&team))?,
        OutputFormat::Text => {
            println!("{}", team);
            if let Some(name) = team.name() {
                println!("  Name: {}", name);
            }
            if let Some(location) = team.location() {
                println!("  Location: {}", location);
            }
            if let Some(year) = team.rookie_year() {
                println!("  Rookie year: {}", year);
            }
            if let Some(website) = team.website() {
                println!("  Website: {}", website);
            }
        }
    }
    Ok(())
}

/// Show an event.
pub async fn event(client: &TbaClient, key: &str, format: OutputFormat) -> Blue1Result<()> {
    let Some(event) = client.get_event(key).await else {
        missing(format!("event {key}"));
    };

    match format {
        OutputFormat::Json => print_json(&EventJson::from(&event))?,
        OutputFormat::Text => println!("{}", event),
    }
    Ok(())
}

/// Show a match.
pub async fn show_match(client: &TbaClient, key: &str, format: OutputFormat) -> Blue1Result<()> {
    let Some(m) = client.get_match(key).await else {
        missing(format!("match {key}"));
    };

    match format {
        OutputFormat::Json => print_json(&MatchJson::from(&m))?,
        OutputFormat::Text => {
            println!("{}", m);
            for url in m.videos().iter().filter_map(|video| video.url()) {
                println!("  Video: {}", url);
            }
        }
    }
    Ok(())
}

/// List an event's matches.
pub async fn event_matches(
    client: &TbaClient,
    key: &str,
    include_unplayed: bool,
    format: OutputFormat,
) -> Blue1Result<()> {
    let Some(matches) = client.get_event_matches(key).await else {
        missing(format!("matches for event {key}"));
    };
    let shown: Vec<_> = matches
        .iter()
        .filter(|m| include_unplayed || m.was_played())
        .collect();

    match format {
        OutputFormat::Json => {
            let records: Vec<MatchJson> = shown.iter().map(|m| MatchJson::from(*m)).collect();
            print_json(&records)?;
        }
        OutputFormat::Text => {
            for m in &shown {
                println!("{}", m);
            }
            println!("Total: {} matches", shown.len());
        }
    }
    Ok(())
}

/// Show an event's ranking table.
pub async fn event_rankings(client: &TbaClient, key: &str, format: OutputFormat) -> Blue1Result<()> {
    let Some(rankings) = client.get_event_rankings(key).await else {
        missing(format!("rankings for event {key}"));
    };

    match format {
        OutputFormat::Json => {
            let rows: Vec<_> = rankings
                .iter()
                .map(|r| json!({ "rank": r.rank(), "team": r.team() }))
                .collect();
            print_json(&rows)?;
        }
        OutputFormat::Text => {
            if rankings.is_empty() {
                println!("No rankings published for {} yet", key);
            } else {
                println!("Rank  Team");
                for r in &rankings {
                    println!("{:>4}  {}", r.rank(), r.team());
                }
            }
        }
    }
    Ok(())
}

/// Report whether the API answers.
pub async fn status(client: &TbaClient, format: OutputFormat) -> Blue1Result<()> {
    let up = client.api_is_up().await;

    match format {
        OutputFormat::Json => print_json(&json!({ "up": up }))?,
        OutputFormat::Text => {
            if up {
                println!("The Blue Alliance API is up");
            } else {
                println!("The Blue Alliance API is unreachable");
            }
        }
    }
    Ok(())
}
