//! Command-line interface module.
//!
//! This module provides the CLI structure and command handlers for the blue1 binary.

mod analysis;
mod cache;
mod commands;
mod lookup;
mod output;
mod season;
mod watch;

pub use analysis::{compare, rank_history, team_event};
pub use cache::{cache_stats, clear_ttl, set_ttl};
pub use commands::{Cli, Commands};
pub use lookup::{event, event_matches, event_rankings, show_match, status, team};
pub use season::{team_season, team_status, team_statuses};
pub use watch::watch_ranks;
