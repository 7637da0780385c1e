//! League records as consumed by the aggregation engine.
//!
//! These are read-only snapshots of what the record source returned. Required
//! fields are plain values; anything the source may omit is an `Option`.
//! Nothing in the crate mutates or writes these back.

use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;
use serde::Serialize;

use super::id::{
    GameConfigId, GameId, OrganizationId, ParticipationId, PlayerId, PointsTableId, ScheduleId,
    TournamentId,
};
use super::money::{Money, Points};

/// A league tournament (season).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tournament {
    pub id: TournamentId,
    pub organization_id: OrganizationId,
    pub name: String,
    pub active: bool,
    pub start_date: Option<NaiveDate>,
    pub points_table_id: Option<PointsTableId>,
}

/// One calendar slot in a tournament. May never have been played.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScheduledGame {
    pub id: ScheduleId,
    /// Canonical tournament link, whichever spelling the source used.
    pub tournament_id: Option<TournamentId>,
    pub game_config_id: Option<GameConfigId>,
    pub date: Option<NaiveDate>,
    pub time: Option<NaiveTime>,
    pub week_number: Option<u32>,
    pub status: Option<String>,
}

/// Buy-in structure of a scheduled game.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GameConfig {
    pub id: GameConfigId,
    pub name: String,
    pub entry_fee: Money,
    pub rebuy_count: u32,
    pub rebuy_amount: Money,
    pub addon_count: u32,
    pub addon_amount: Money,
    pub bounty_amount: Money,
}

impl GameConfig {
    /// Most a single player can put in: entry plus every allowed rebuy and add-on.
    #[must_use]
    pub fn max_buy_in(&self) -> Money {
        self.entry_fee
            + self.rebuy_amount * Decimal::from(self.rebuy_count)
            + self.addon_amount * Decimal::from(self.addon_count)
    }
}

/// An actual instance of a scheduled game.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayedGame {
    pub id: GameId,
    pub tournament_id: Option<TournamentId>,
    pub schedule_id: Option<ScheduleId>,
    pub player_count: Option<u32>,
}

/// One player's row in one played game.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Participation {
    pub id: ParticipationId,
    pub tournament_id: Option<TournamentId>,
    pub played_game_id: Option<GameId>,
    pub player_id: PlayerId,
    /// Governs every derived points and prize lookup.
    pub finish_position: Option<u32>,
    pub knockouts: u32,
}

/// A league member.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Player {
    pub id: PlayerId,
    pub organization_id: Option<OrganizationId>,
    pub first_name: String,
    pub last_name: String,
    pub nickname: Option<String>,
}

impl Player {
    /// Name shown in tables: "First Last", falling back to the nickname.
    #[must_use]
    pub fn display_name(&self) -> String {
        let full = format!("{} {}", self.first_name.trim(), self.last_name.trim());
        let full = full.trim();
        if !full.is_empty() {
            return full.to_string();
        }
        match self.nickname.as_deref().map(str::trim) {
            Some(nick) if !nick.is_empty() => nick.to_string(),
            _ => self.id.to_string(),
        }
    }
}

/// Trusted per-tournament per-player rollup maintained by the source.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Standing {
    pub tournament_id: TournamentId,
    pub player_id: PlayerId,
    pub games_played: u32,
    pub total_points: Points,
    pub total_earnings: Money,
    pub knockouts: u32,
    pub bounties: Money,
}

/// Points awarded for one finishing position in one points table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PointLevel {
    pub points_table_id: PointsTableId,
    pub position: u32,
    pub points: Points,
}

/// Money paid for one finishing position in one played game.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PrizeRecord {
    pub played_game_id: GameId,
    pub place: u32,
    pub amount: Money,
}
