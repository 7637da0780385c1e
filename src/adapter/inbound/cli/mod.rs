//! CLI module graph.

pub mod command;
pub mod config;
pub mod format;
pub mod game;
pub mod leaderboard;
pub mod output;
pub mod paths;
pub mod player;
pub mod progression;
pub mod run;
pub mod schedule;
pub mod summary;
pub mod tournaments;
