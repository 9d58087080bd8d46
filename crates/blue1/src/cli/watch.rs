//! Ranking watcher loop.

use super::commands::OutputFormat;
use super::output::print_json;
use blue1::{Blue1Result, CacheStatsSnapshot, RankChange, RankWatcher, TbaClient};
use std::time::Duration;
use tracing::{info, instrument, warn};

/// Poll `event`'s rankings every `interval` until Ctrl-C.
///
/// Polls go through the cache, so a change shows up at most one expiration
/// time after the provider publishes it.
#[instrument(skip(client, format))]
pub async fn watch_ranks(
    client: &TbaClient,
    event: &str,
    team: Option<u32>,
    interval: Duration,
    format: OutputFormat,
) -> Blue1Result<()> {
    let mut watcher = RankWatcher::new(team);
    info!("Watching rankings, press Ctrl-C to stop");

    loop {
        match client.get_event_rankings(event).await {
            Some(rankings) => {
                if let Some(change) = watcher.observe(&rankings) {
                    report(event, &change, format)?;
                }
            }
            None => warn!("Rankings unavailable, retrying next poll"),
        }

        tokio::select! {
            _ = tokio::time::sleep(interval) => {}
            _ = tokio::signal::ctrl_c() => {
                info!("Stopping watcher");
                return report_usage(&client.stats().snapshot(), format);
            }
        }
    }
}

fn report(event: &str, change: &RankChange, format: OutputFormat) -> Blue1Result<()> {
    match format {
        OutputFormat::Json => print_json(change),
        OutputFormat::Text => {
            match (change.team(), change.previous_rank(), change.current_rank()) {
                (Some(team), Some(before), Some(now)) => {
                    println!("Team {} moved from rank {} to {} at {}", team, before, now, event)
                }
                (Some(team), None, Some(now)) => {
                    println!("Team {} is ranked {} at {}", team, now, event)
                }
                (Some(team), _, None) => println!("Team {} is not ranked at {}", team, event),
                (None, _, _) => {
                    println!("Rankings at {}:", event);
                    let mut rows: Vec<(u32, u32)> = change
                        .standings()
                        .iter()
                        .map(|(team, rank)| (*rank, *team))
                        .collect();
                    rows.sort_unstable();
                    for (rank, team) in rows {
                        println!("{:>4}  {}", rank, team);
                    }
                }
            }
            Ok(())
        }
    }
}

fn report_usage(usage: &CacheStatsSnapshot, format: OutputFormat) -> Blue1Result<()> {
    match format {
        OutputFormat::Json => print_json(usage),
        OutputFormat::Text => {
            println!("{}", usage_line(usage));
            Ok(())
        }
    }
}

fn usage_line(usage: &CacheStatsSnapshot) -> String {
    match usage.hit_rate {
        Some(rate) => format!(
            "Cache: {} hits, {} misses, hit rate {:.2}%",
            usage.hits,
            usage.misses,
            rate * 100.0
        ),
        None => "Cache: no cached requests (caching disabled or nothing fetched)".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use blue1::CacheStats;

    #[test]
    fn test_usage_line() {
        let stats = CacheStats::new();
        assert!(usage_line(&stats.snapshot()).contains("no cached requests"));

        stats.record_hit();
        stats.record_hit();
        stats.record_hit();
        stats.record_miss();
        assert_eq!(
            usage_line(&stats.snapshot()),
            "Cache: 3 hits, 1 misses, hit rate 75.00%"
        );
    }
}
