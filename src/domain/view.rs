//! View models produced by the aggregation engine.
//!
//! Every type here is computed fresh from a snapshot and serializable for
//! `--json` output. Position-derived fields use `None` as the "no data"
//! sentinel; prizes use `None` for "no prize record" so an explicit $0 prize
//! stays distinguishable.

use chrono::{NaiveDate, NaiveTime};
use serde::Serialize;

use super::id::{GameId, ParticipationId, PlayerId, ScheduleId, TournamentId};
use super::metric::LeaderboardMetric;
use super::money::{Money, Points};

/// One resolved game in a player's history.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GameHistoryEntry {
    pub participation_id: ParticipationId,
    pub tournament_id: Option<TournamentId>,
    pub game_id: GameId,
    pub schedule_id: ScheduleId,
    pub game_date: NaiveDate,
    pub week_number: Option<u32>,
    pub position: u32,
    pub points: Points,
    pub prize: Option<Money>,
    pub knockouts: u32,
}

/// A player's games in date order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct GameHistory(Vec<GameHistoryEntry>);

impl GameHistory {
    #[must_use]
    pub fn new(entries: Vec<GameHistoryEntry>) -> Self {
        Self(entries)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, GameHistoryEntry> {
        self.0.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Finishing positions in history order.
    pub fn positions(&self) -> impl Iterator<Item = u32> + '_ {
        self.0.iter().map(|entry| entry.position)
    }
}

impl IntoIterator for GameHistory {
    type Item = GameHistoryEntry;
    type IntoIter = std::vec::IntoIter<GameHistoryEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a GameHistory {
    type Item = &'a GameHistoryEntry;
    type IntoIter = std::slice::Iter<'a, GameHistoryEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// One player's numbers in one tournament.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TournamentStats {
    pub tournament_id: TournamentId,
    pub tournament_name: Option<String>,
    pub games_played: u32,
    pub total_points: Points,
    pub total_earnings: Money,
    pub knockouts: u32,
    pub bounties: Money,
    pub best_position: Option<u32>,
    pub average_points: f64,
    /// Games that resolved into history; may trail `games_played`.
    pub resolved_games: usize,
}

/// One player's numbers across every tournament they have a standing in.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CareerStats {
    pub player_id: PlayerId,
    pub display_name: String,
    pub tournaments: Vec<TournamentStats>,
    pub games_played: u32,
    pub total_points: Points,
    pub total_earnings: Money,
    pub knockouts: u32,
    pub bounties: Money,
    pub best_position: Option<u32>,
    pub worst_position: Option<u32>,
    pub average_position: Option<f64>,
}

/// A ranked leaderboard line.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LeaderboardEntry {
    pub rank: usize,
    pub player_id: PlayerId,
    pub display_name: String,
    pub nickname: Option<String>,
    /// False when the standing referenced a player missing from the directory.
    pub known_player: bool,
    pub games_played: u32,
    pub points: Points,
    pub winnings: Money,
    pub knockouts: u32,
    pub bounties: Money,
    pub average_points: f64,
}

/// A ranked leaderboard for one tournament.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Leaderboard {
    pub tournament_id: TournamentId,
    pub metric: LeaderboardMetric,
    pub entries: Vec<LeaderboardEntry>,
}

/// One finisher in a single game.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GameResultRow {
    pub position: u32,
    pub player_id: PlayerId,
    pub display_name: String,
    pub points: Points,
    pub prize: Option<Money>,
    pub knockouts: u32,
}

/// Results table of one scheduled game.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GameResults {
    pub schedule_id: ScheduleId,
    pub game_id: Option<GameId>,
    pub tournament_id: Option<TournamentId>,
    pub game_date: Option<NaiveDate>,
    pub week_number: Option<u32>,
    pub config_name: Option<String>,
    pub player_count: Option<u32>,
    pub rows: Vec<GameResultRow>,
    /// Sum of the rows' prizes, never a stored total.
    pub prize_pool: Money,
}

/// One line of a tournament schedule.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScheduleEntry {
    pub schedule_id: ScheduleId,
    pub date: Option<NaiveDate>,
    pub time: Option<NaiveTime>,
    pub week_number: Option<u32>,
    pub status: Option<String>,
    pub config_name: Option<String>,
    pub max_buy_in: Option<Money>,
    pub bounty: Option<Money>,
    pub game_id: Option<GameId>,
    pub player_count: Option<u32>,
}

impl ScheduleEntry {
    #[must_use]
    pub fn is_played(&self) -> bool {
        self.game_id.is_some()
    }
}

/// Headline numbers for one tournament.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TournamentSummary {
    pub tournament_id: TournamentId,
    pub name: Option<String>,
    pub scheduled_games: usize,
    pub played_games: usize,
    pub unique_players: usize,
    pub total_prize_money: Money,
    pub average_field_size: f64,
    pub points_leader: Option<LeaderboardEntry>,
}

/// One point of a cumulative points chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProgressionPoint {
    pub game_date: NaiveDate,
    pub week_number: Option<u32>,
    pub points: Points,
    pub cumulative_points: Points,
}
