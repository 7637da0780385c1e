//! Command-line interface definitions.
//!
//! Defines the CLI structure for chiplead using `clap`. Every report command
//! is read-only; `config` manages the local configuration file.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use super::paths;
use crate::domain::{LeaderboardMetric, TieBreak};

/// Leaderboards and statistics for a poker tournament league
#[derive(Parser, Debug)]
#[command(name = "chiplead")]
#[command(version)]
pub struct Cli {
    /// Path to the configuration file
    #[arg(short, long, global = true, default_value_os_t = paths::default_config())]
    pub config: PathBuf,

    /// Color output mode [auto, always, never]
    #[arg(
        long,
        global = true,
        default_value = "auto",
        hide_possible_values = true
    )]
    pub color: ColorChoice,

    /// JSON output for scripting
    #[arg(long, global = true)]
    pub json: bool,

    /// Decrease output verbosity
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase output verbosity
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Color output mode for terminal rendering.
#[derive(Clone, Copy, Debug, Default, clap::ValueEnum)]
pub enum ColorChoice {
    /// Detect automatically
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Parse an id argument, rejecting blank values.
fn id_arg(raw: &str) -> Result<String, String> {
    let id = raw.trim();
    if id.is_empty() {
        return Err("id must not be empty".to_string());
    }
    Ok(id.to_string())
}

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the organization's tournaments
    Tournaments,

    /// Rank a tournament's players
    Leaderboard(LeaderboardArgs),

    /// Show a player's per-tournament and career statistics
    Player(PlayerArgs),

    /// Show the results of one scheduled game
    Game(GameArgs),

    /// Show a tournament's schedule
    Schedule(TournamentArg),

    /// Show a tournament's headline numbers and points leader
    Summary(TournamentArg),

    /// Show a player's cumulative points through a tournament
    Progression(ProgressionArgs),

    /// Manage configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

/// Subcommands for `chiplead config`.
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Generate a new configuration file from template.
    Init(ConfigInitArgs),
    /// Display the effective configuration with defaults applied.
    Show,
    /// Validate a configuration file for correctness.
    Validate,
}

/// Arguments for the `leaderboard` subcommand.
#[derive(Parser, Debug)]
pub struct LeaderboardArgs {
    /// Tournament id.
    #[arg(value_parser = id_arg)]
    pub tournament: String,

    /// Metric to rank by [points, winnings, knockouts, bounties].
    #[arg(long, default_value = "points")]
    pub by: LeaderboardMetric,

    /// Order of players level on the metric [source, name].
    #[arg(long, default_value = "source")]
    pub tie_break: TieBreak,

    /// Refresh every SECS seconds until interrupted.
    #[arg(long, value_name = "SECS", value_parser = clap::value_parser!(u64).range(1..))]
    pub watch: Option<u64>,
}

/// Arguments for the `player` subcommand.
#[derive(Parser, Debug)]
pub struct PlayerArgs {
    /// Player id.
    #[arg(value_parser = id_arg)]
    pub player: String,

    /// Limit the game history to one tournament.
    #[arg(short, long, value_parser = id_arg)]
    pub tournament: Option<String>,

    /// Also list every resolved game.
    #[arg(long)]
    pub history: bool,
}

/// Arguments for the `game` subcommand.
#[derive(Parser, Debug)]
pub struct GameArgs {
    /// Scheduled game id.
    #[arg(value_parser = id_arg)]
    pub schedule: String,
}

/// Arguments for the `progression` subcommand.
#[derive(Parser, Debug)]
pub struct ProgressionArgs {
    /// Player id.
    #[arg(value_parser = id_arg)]
    pub player: String,
    /// Tournament id.
    #[arg(value_parser = id_arg)]
    pub tournament: String,
}

/// Shared argument for commands scoped to one tournament.
#[derive(Parser, Debug)]
pub struct TournamentArg {
    /// Tournament id.
    #[arg(value_parser = id_arg)]
    pub tournament: String,
}

/// Arguments for the `config init` subcommand.
#[derive(Parser, Debug)]
pub struct ConfigInitArgs {
    /// Overwrite the file if it already exists.
    #[arg(long)]
    pub force: bool,
}
