//! Wire rows of the league REST API.
//!
//! The API is loosely typed: ids come as numbers or strings, numeric columns
//! may be null or quoted, and the schedule table spells its tournament column
//! two ways. Each row type accepts all of that and converts into a domain
//! record, so untyped JSON never leaves this module.

use std::str::FromStr;

use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;
use serde::de::{self, DeserializeOwned, Deserializer};
use serde::Deserialize;
use serde_json::Value;
use tracing::warn;

use crate::domain::{
    GameConfig, GameConfigId, GameId, Money, OrganizationId, Participation, ParticipationId,
    PlayedGame, Player, PlayerId, PointLevel, Points, PointsTableId, PrizeRecord, ScheduleId,
    ScheduledGame, Standing, Tournament, TournamentId,
};

fn id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(de::Error::custom(format!("expected id, found {other}"))),
    }
}

fn opt_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(None),
        Value::String(s) if s.is_empty() => Ok(None),
        Value::String(s) => Ok(Some(s)),
        Value::Number(n) => Ok(Some(n.to_string())),
        other => Err(de::Error::custom(format!("expected id, found {other}"))),
    }
}

fn integer(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.fract() == 0.0).map(|f| f as i64)),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn opt_u32<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(integer(&value).and_then(|n| u32::try_from(n).ok()))
}

fn count<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    opt_u32(deserializer).map(Option::unwrap_or_default)
}

fn opt_points<'de, D>(deserializer: D) -> Result<Option<Points>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(integer(&value))
}

fn points<'de, D>(deserializer: D) -> Result<Points, D::Error>
where
    D: Deserializer<'de>,
{
    opt_points(deserializer).map(Option::unwrap_or_default)
}

fn parse_decimal(raw: &str) -> Option<Decimal> {
    let raw = raw.trim();
    Decimal::from_str(raw)
        .or_else(|_| Decimal::from_scientific(raw))
        .ok()
}

fn money<'de, D>(deserializer: D) -> Result<Money, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(Decimal::ZERO),
        Value::Number(n) => parse_decimal(&n.to_string())
            .ok_or_else(|| de::Error::custom(format!("invalid amount {n}"))),
        Value::String(s) if s.trim().is_empty() => Ok(Decimal::ZERO),
        Value::String(s) => {
            parse_decimal(&s).ok_or_else(|| de::Error::custom(format!("invalid amount {s:?}")))
        }
        other => Err(de::Error::custom(format!("expected amount, found {other}"))),
    }
}

fn opt_flag<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Bool(b) => Some(b),
        Value::Number(n) => Some(n.as_i64().is_some_and(|n| n != 0)),
        Value::String(s) => Some(matches!(s.trim(), "true" | "t" | "1")),
        _ => None,
    })
}

/// Accepts `YYYY-MM-DD` and timestamps whose first ten characters are one.
fn opt_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => s
            .get(..10)
            .and_then(|day| NaiveDate::parse_from_str(day, "%Y-%m-%d").ok()),
        _ => None,
    })
}

fn opt_time<'de, D>(deserializer: D) -> Result<Option<NaiveTime>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => NaiveTime::parse_from_str(&s, "%H:%M:%S")
            .or_else(|_| NaiveTime::parse_from_str(&s, "%H:%M"))
            .ok(),
        _ => None,
    })
}

fn opt_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) if !s.trim().is_empty() => Some(s),
        _ => None,
    })
}

fn text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    opt_text(deserializer).map(Option::unwrap_or_default)
}

/// Convert a collection row by row. A row that fails to decode is logged
/// and skipped; the rest of the collection survives.
pub fn decode_rows<R, T>(resource: &'static str, rows: Vec<Value>) -> Vec<T>
where
    R: DeserializeOwned,
    T: From<R>,
{
    rows.into_iter()
        .enumerate()
        .filter_map(|(index, row)| match serde_json::from_value::<R>(row) {
            Ok(row) => Some(T::from(row)),
            Err(err) => {
                warn!(resource, index, error = %err, "Skipping malformed row");
                None
            }
        })
        .collect()
}

#[derive(Debug, Deserialize)]
pub struct TournamentRow {
    #[serde(deserialize_with = "id")]
    pub id: String,
    #[serde(default, deserialize_with = "opt_id")]
    pub organization_id: Option<String>,
    #[serde(default, deserialize_with = "text")]
    pub name: String,
    #[serde(default, deserialize_with = "opt_flag")]
    pub is_active: Option<bool>,
    #[serde(default, deserialize_with = "opt_flag")]
    pub active: Option<bool>,
    #[serde(default, deserialize_with = "opt_date")]
    pub start_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "opt_id")]
    pub points_table_id: Option<String>,
}

impl From<TournamentRow> for Tournament {
    fn from(row: TournamentRow) -> Self {
        Self {
            id: TournamentId::new(row.id),
            organization_id: OrganizationId::new(row.organization_id.unwrap_or_default()),
            name: row.name,
            active: row.is_active.or(row.active).unwrap_or(false),
            start_date: row.start_date,
            points_table_id: row.points_table_id.map(PointsTableId::new),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ScheduleRow {
    #[serde(deserialize_with = "id")]
    pub id: String,
    #[serde(default, deserialize_with = "opt_id")]
    pub tournament_id: Option<String>,
    /// Misspelled column still written by older clients.
    #[serde(default, deserialize_with = "opt_id")]
    pub tournamnet_id: Option<String>,
    #[serde(default, deserialize_with = "opt_id")]
    pub game_config_id: Option<String>,
    #[serde(default, deserialize_with = "opt_date")]
    pub game_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "opt_date")]
    pub date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "opt_time")]
    pub game_time: Option<NaiveTime>,
    #[serde(default, deserialize_with = "opt_time")]
    pub time: Option<NaiveTime>,
    #[serde(default, deserialize_with = "opt_u32")]
    pub week_number: Option<u32>,
    #[serde(default, deserialize_with = "opt_text")]
    pub status: Option<String>,
}

impl From<ScheduleRow> for ScheduledGame {
    fn from(row: ScheduleRow) -> Self {
        Self {
            id: ScheduleId::new(row.id),
            tournament_id: row
                .tournament_id
                .or(row.tournamnet_id)
                .map(TournamentId::new),
            game_config_id: row.game_config_id.map(GameConfigId::new),
            date: row.game_date.or(row.date),
            time: row.game_time.or(row.time),
            week_number: row.week_number,
            status: row.status,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct GameConfigRow {
    #[serde(deserialize_with = "id")]
    pub id: String,
    #[serde(default, deserialize_with = "text")]
    pub name: String,
    #[serde(default, deserialize_with = "money")]
    pub entry_fee: Money,
    #[serde(default, deserialize_with = "count")]
    pub rebuy_count: u32,
    #[serde(default, deserialize_with = "money")]
    pub rebuy_amount: Money,
    #[serde(default, deserialize_with = "count")]
    pub addon_count: u32,
    #[serde(default, deserialize_with = "money")]
    pub addon_amount: Money,
    #[serde(default, deserialize_with = "money")]
    pub bounty_amount: Money,
}

impl From<GameConfigRow> for GameConfig {
    fn from(row: GameConfigRow) -> Self {
        Self {
            id: GameConfigId::new(row.id),
            name: row.name,
            entry_fee: row.entry_fee,
            rebuy_count: row.rebuy_count,
            rebuy_amount: row.rebuy_amount,
            addon_count: row.addon_count,
            addon_amount: row.addon_amount,
            bounty_amount: row.bounty_amount,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct PointLevelRow {
    #[serde(deserialize_with = "id")]
    pub points_table_id: String,
    #[serde(default, deserialize_with = "count")]
    pub position: u32,
    #[serde(default, deserialize_with = "points")]
    pub points: Points,
}

impl From<PointLevelRow> for PointLevel {
    fn from(row: PointLevelRow) -> Self {
        Self {
            points_table_id: PointsTableId::new(row.points_table_id),
            position: row.position,
            points: row.points,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct GameRow {
    #[serde(deserialize_with = "id")]
    pub id: String,
    #[serde(default, deserialize_with = "opt_id")]
    pub tournament_id: Option<String>,
    #[serde(default, deserialize_with = "opt_id")]
    pub schedule_id: Option<String>,
    #[serde(default, deserialize_with = "opt_u32")]
    pub player_count: Option<u32>,
}

impl From<GameRow> for PlayedGame {
    fn from(row: GameRow) -> Self {
        Self {
            id: GameId::new(row.id),
            tournament_id: row.tournament_id.map(TournamentId::new),
            schedule_id: row.schedule_id.map(ScheduleId::new),
            player_count: row.player_count,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct GamePlayerRow {
    #[serde(deserialize_with = "id")]
    pub id: String,
    #[serde(default, deserialize_with = "opt_id")]
    pub tournament_id: Option<String>,
    #[serde(default, deserialize_with = "opt_id")]
    pub game_id: Option<String>,
    #[serde(deserialize_with = "id")]
    pub player_id: String,
    #[serde(default, deserialize_with = "opt_u32")]
    pub finish_position: Option<u32>,
    #[serde(default, deserialize_with = "opt_u32")]
    pub position: Option<u32>,
    #[serde(default, deserialize_with = "count")]
    pub knockouts: u32,
}

impl From<GamePlayerRow> for Participation {
    fn from(row: GamePlayerRow) -> Self {
        Self {
            id: ParticipationId::new(row.id),
            tournament_id: row.tournament_id.map(TournamentId::new),
            played_game_id: row.game_id.map(GameId::new),
            player_id: PlayerId::new(row.player_id),
            // Position 0 is how some clients record "did not finish".
            finish_position: row
                .finish_position
                .or(row.position)
                .filter(|p| *p > 0),
            knockouts: row.knockouts,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct PlayerRow {
    #[serde(deserialize_with = "id")]
    pub id: String,
    #[serde(default, deserialize_with = "opt_id")]
    pub organization_id: Option<String>,
    #[serde(default, deserialize_with = "text")]
    pub first_name: String,
    #[serde(default, deserialize_with = "text")]
    pub last_name: String,
    #[serde(default, deserialize_with = "opt_text")]
    pub nickname: Option<String>,
}

impl From<PlayerRow> for Player {
    fn from(row: PlayerRow) -> Self {
        Self {
            id: PlayerId::new(row.id),
            organization_id: row.organization_id.map(OrganizationId::new),
            first_name: row.first_name,
            last_name: row.last_name,
            nickname: row.nickname,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct TournamentPlayerRow {
    #[serde(deserialize_with = "id")]
    pub tournament_id: String,
    #[serde(deserialize_with = "id")]
    pub player_id: String,
    #[serde(default, deserialize_with = "count")]
    pub games_played: u32,
    #[serde(default, deserialize_with = "points")]
    pub total_points: Points,
    #[serde(default, deserialize_with = "money")]
    pub total_earnings: Money,
    #[serde(default, deserialize_with = "count")]
    pub knockouts: u32,
    #[serde(default, deserialize_with = "money")]
    pub bounties: Money,
}

impl From<TournamentPlayerRow> for Standing {
    fn from(row: TournamentPlayerRow) -> Self {
        Self {
            tournament_id: TournamentId::new(row.tournament_id),
            player_id: PlayerId::new(row.player_id),
            games_played: row.games_played,
            total_points: row.total_points,
            total_earnings: row.total_earnings,
            knockouts: row.knockouts,
            bounties: row.bounties,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct GamePrizeRow {
    #[serde(deserialize_with = "id")]
    pub game_id: String,
    #[serde(default, deserialize_with = "opt_u32")]
    pub position: Option<u32>,
    #[serde(default, deserialize_with = "opt_u32")]
    pub place: Option<u32>,
    #[serde(default, deserialize_with = "money")]
    pub amount: Money,
}

impl From<GamePrizeRow> for PrizeRecord {
    fn from(row: GamePrizeRow) -> Self {
        Self {
            played_game_id: GameId::new(row.game_id),
            place: row.position.or(row.place).unwrap_or_default(),
            amount: row.amount,
        }
    }
}
