//! Chiplead - leaderboards and statistics for a poker tournament league.
//!
//! The league's records live behind a REST API as separate collections
//! (tournaments, schedules, played games, finishing positions, players,
//! standings, points tables and prizes). Chiplead fetches the slice each view
//! needs and joins it client-side into leaderboards, player careers, game
//! results, schedules and tournament summaries. It never writes.
//!
//! # Architecture
//!
//! - [`domain`] - Records as ingested, view models, identifiers and money
//! - [`port`] - The [`RecordSource`](port::RecordSource) trait
//! - [`application`] - Snapshot fetching, the aggregation engine and
//!   latest-request-wins refresh
//! - [`adapter`] - The league REST client and the CLI
//! - [`infrastructure`] - Configuration and logging
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use chiplead::adapter::outbound::league_api::LeagueApiClient;
//! use chiplead::application::LeagueReports;
//! use chiplead::domain::{LeaderboardMetric, TieBreak, TournamentId};
//! use chiplead::infrastructure::config::settings::Config;
//!
//! # async fn run() -> chiplead::error::Result<()> {
//! let config = Config::load("config.toml")?;
//! let client = LeagueApiClient::from_config(&config.api)?;
//! let reports = LeagueReports::new(Arc::new(client), config.organization_id());
//!
//! let board = reports
//!     .leaderboard(&TournamentId::from("7"), LeaderboardMetric::Points, TieBreak::Source)
//!     .await;
//! println!("{} players", board.entries.len());
//! # Ok(())
//! # }
//! ```

pub mod adapter;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod port;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;
