//! Pure aggregation over a [`LeagueSnapshot`](crate::application::snapshot::LeagueSnapshot).
//!
//! Every function builds its own lookup maps and returns a fresh view model.

pub mod history;
pub mod leaderboard;
pub mod lookup;
pub mod results;
pub mod schedule;
pub mod statistics;
pub mod summary;

pub use history::{game_history, points_progression};
pub use leaderboard::{rank_leaderboard, sort_entries};
pub use lookup::{LookupMaps, UNKNOWN_PLAYER};
pub use results::resolve_game_results;
pub use schedule::build_schedule;
pub use statistics::{average_points, career_stats, tournament_stats};
pub use summary::{sort_tournaments, summarize_tournament};
