//! blue1 CLI binary.
//!
//! This binary provides command-line access to blue1's functionality:
//! - Look up teams, events, matches and rankings through the cache
//! - Replay qualification rankings and compare teams
//! - Inspect and control the response cache

use blue1::{init_logging, Blue1Config, LogConfig, TbaClient};
use clap::Parser;
use std::time::Duration;

mod cli;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use cli::{Cli, Commands};

    // A missing .env file is fine
    let _ = dotenvy::dotenv();

    // Parse command-line arguments
    let cli = Cli::parse();

    init_logging(&LogConfig {
        verbose: cli.verbose,
        format: cli.log_format.into(),
        ..LogConfig::default()
    })?;

    let config = match &cli.config {
        Some(path) => Blue1Config::from_file(path)?,
        None => Blue1Config::load()?,
    };
    let format = cli.format;

    if !cli.command.needs_api() {
        match cli.command {
            Commands::CacheStats => cli::cache_stats(&config, format).await?,
            Commands::SetTtl { amount, unit } => {
                cli::set_ttl(&config, &amount, &unit, format).await?
            }
            Commands::ClearTtl => cli::clear_ttl(&config, format).await?,
            _ => {}
        }
        return Ok(());
    }

    let client = TbaClient::from_config(&config).await?;

    // Execute the requested command
    match cli.command {
        Commands::Team { team } => cli::team(&client, team, format).await?,
        Commands::Event { event } => cli::event(&client, &event, format).await?,
        Commands::Match { match_key } => cli::show_match(&client, &match_key, format).await?,
        Commands::EventMatches { event, all } => {
            cli::event_matches(&client, &event, all, format).await?
        }
        Commands::EventRankings { event } => cli::event_rankings(&client, &event, format).await?,
        Commands::TeamEvent { team, event } => {
            cli::team_event(&client, team, &event, format).await?
        }
        Commands::TeamSeason { team, year } => {
            cli::team_season(&client, team, year, format).await?
        }
        Commands::TeamStatus { team, event } => {
            cli::team_status(&client, team, &event, format).await?
        }
        Commands::TeamStatuses { team, year } => {
            cli::team_statuses(&client, team, year, format).await?
        }
        Commands::RankHistory { team, event } => {
            cli::rank_history(&client, team, &event, format).await?
        }
        Commands::Compare { team, other, event } => {
            cli::compare(&client, team, other, &event, format).await?
        }
        Commands::Status => cli::status(&client, format).await?,
        Commands::WatchRanks {
            event,
            team,
            interval,
        } => {
            cli::watch_ranks(&client, &event, team, Duration::from_secs(interval), format).await?
        }
        Commands::CacheStats | Commands::SetTtl { .. } | Commands::ClearTtl => {}
    }

    let stats = client.stats().snapshot();
    tracing::debug!(
        hits = stats.hits,
        misses = stats.misses,
        hit_rate = ?stats.hit_rate,
        "Cache usage"
    );

    Ok(())
}
