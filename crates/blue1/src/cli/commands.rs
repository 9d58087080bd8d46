//! CLI command definitions.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// blue1 - The Blue Alliance lookups, ranking replay and cache control
#[derive(Parser, Debug)]
#[command(name = "blue1")]
#[command(about = "The Blue Alliance lookups, ranking replay and cache control", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(long, global = true, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Log line format
    #[arg(long, global = true, value_enum, default_value = "text")]
    pub log_format: LogFormatArg,

    /// Read configuration from this file instead of the user and working
    /// directory files
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show a team
    Team {
        /// Team number, e.g. 7042
        team: u32,
    },

    /// Show an event
    Event {
        /// Event key, e.g. 2023cabl
        event: String,
    },

    /// Show a match
    Match {
        /// Match key, e.g. 2023cabl_qm12
        match_key: String,
    },

    /// List an event's matches in play order
    EventMatches {
        /// Event key
        event: String,

        /// Include matches that have not been played
        #[arg(long)]
        all: bool,
    },

    /// Show an event's current ranking table
    EventRankings {
        /// Event key
        event: String,
    },

    /// Show a team's matches and record at an event
    TeamEvent {
        /// Team number
        team: u32,

        /// Event key
        event: String,
    },

    /// Show a team's record at each event of a season
    TeamSeason {
        /// Team number
        team: u32,

        /// Season year, e.g. 2023
        year: i32,
    },

    /// Show a team's status at an event
    TeamStatus {
        /// Team number
        team: u32,

        /// Event key
        event: String,
    },

    /// Show a team's status at each event of a season
    TeamStatuses {
        /// Team number
        team: u32,

        /// Season year
        year: i32,
    },

    /// Replay qualifications and show a team's rank after each match
    RankHistory {
        /// Team number
        team: u32,

        /// Event key
        event: String,
    },

    /// Compare two teams' scores at an event on one timeline
    Compare {
        /// First team number
        team: u32,

        /// Second team number
        other: u32,

        /// Event key
        event: String,
    },

    /// Check whether The Blue Alliance API is reachable
    Status,

    /// Show cache size and expiration time
    CacheStats,

    /// Set the cache expiration time, e.g. `set-ttl 2 hours`
    SetTtl {
        /// Whole number of units
        amount: String,

        /// days, hours, minutes or seconds (singular or first letter also work)
        unit: String,
    },

    /// Disable caching until an expiration time is set again
    ClearTtl,

    /// Poll an event's rankings and print changes until interrupted
    WatchRanks {
        /// Event key
        event: String,

        /// Only report changes to this team's rank
        #[arg(long)]
        team: Option<u32>,

        /// Seconds between polls
        #[arg(long, default_value = "300")]
        interval: u64,
    },
}

impl Commands {
    /// Whether the command talks to The Blue Alliance.
    ///
    /// Cache maintenance commands work without an API token.
    pub fn needs_api(&self) -> bool {
        !matches!(self, Commands::CacheStats | Commands::SetTtl { .. } | Commands::ClearTtl)
    }
}

/// Output format options
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable format
    Text,
    /// JSON format
    Json,
}

/// Log format options
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogFormatArg {
    /// Human-readable lines
    Text,
    /// JSON lines
    Json,
}

impl From<LogFormatArg> for blue1::LogFormat {
    fn from(arg: LogFormatArg) -> Self {
        match arg {
            LogFormatArg::Text => blue1::LogFormat::Text,
            LogFormatArg::Json => blue1::LogFormat::Json,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_rank_history() {
        let cli = Cli::try_parse_from(["blue1", "rank-history", "7042", "2023cabl"]).unwrap();
        match cli.command {
            Commands::RankHistory { team, event } => {
                assert_eq!(team, 7042);
                assert_eq!(event, "2023cabl");
            }
            other => panic!("unexpected command {other:?}"),
        }
        assert_eq!(cli.format, OutputFormat::Text);
        assert!(!cli.verbose);
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli =
            Cli::try_parse_from(["blue1", "team", "254", "--format", "json", "-v"]).unwrap();
        assert_eq!(cli.format, OutputFormat::Json);
        assert!(cli.verbose);
    }

    #[test]
    fn test_watch_defaults() {
        let cli = Cli::try_parse_from(["blue1", "watch-ranks", "2023cabl"]).unwrap();
        match cli.command {
            Commands::WatchRanks {
                event,
                team,
                interval,
            } => {
                assert_eq!(event, "2023cabl");
                assert_eq!(team, None);
                assert_eq!(interval, 300);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_cache_commands_need_no_api() {
        let cli = Cli::try_parse_from(["blue1", "set-ttl", "2", "hours"]).unwrap();
        assert!(!cli.command.needs_api());

        let cli = Cli::try_parse_from(["blue1", "status"]).unwrap();
        assert!(cli.command.needs_api());
    }

    #[test]
    fn test_parse_team_season() {
        let cli = Cli::try_parse_from(["blue1", "team-season", "7042", "2023"]).unwrap();
        match cli.command {
            Commands::TeamSeason { team, year } => {
                assert_eq!(team, 7042);
                assert_eq!(year, 2023);
            }
            other => panic!("unexpected command {other:?}"),
        }
        assert!(cli.command.needs_api());

        let cli = Cli::try_parse_from(["blue1", "team-statuses", "254", "2024"]).unwrap();
        assert!(matches!(cli.command, Commands::TeamStatuses { team: 254, year: 2024 }));
    }

    #[test]
    fn test_bad_team_number_is_rejected() {
        assert!(Cli::try_parse_from(["blue1", "team", "frc254"]).is_err());
    }
}
