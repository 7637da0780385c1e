//! Builders for league records used across tests.
//!
//! Every builder uses organization `org` and fills optional fields with the
//! values a well-formed record would carry, so tests only spell out what
//! they assert on.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::domain::{
    GameConfig, GameConfigId, GameId, Money, OrganizationId, Participation, ParticipationId,
    PlayedGame, Player, PlayerId, PointLevel, PointsTableId, PrizeRecord, ScheduleId,
    ScheduledGame, Standing, Tournament, TournamentId,
};

/// Organization every builder assigns.
pub const ORG: &str = "org";

/// Parse a `YYYY-MM-DD` date, panicking on malformed test input.
pub fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("test date must be YYYY-MM-DD")
}

pub fn tournament(id: &str, points_table: Option<&str>) -> Tournament {
    Tournament {
        id: TournamentId::from(id),
        organization_id: OrganizationId::from(ORG),
        name: format!("Tournament {id}"),
        active: true,
        start_date: None,
        points_table_id: points_table.map(PointsTableId::from),
    }
}

pub fn schedule(id: &str, tournament: Option<&str>, game_date: Option<&str>) -> ScheduledGame {
    ScheduledGame {
        id: ScheduleId::from(id),
        tournament_id: tournament.map(TournamentId::from),
        game_config_id: None,
        date: game_date.map(date),
        time: None,
        week_number: None,
        status: None,
    }
}

pub fn game_config(id: &str, name: &str, entry_fee: Money) -> GameConfig {
    GameConfig {
        id: GameConfigId::from(id),
        name: name.to_string(),
        entry_fee,
        rebuy_count: 0,
        rebuy_amount: Decimal::ZERO,
        addon_count: 0,
        addon_amount: Decimal::ZERO,
        bounty_amount: Decimal::ZERO,
    }
}

pub fn played_game(id: &str, tournament: Option<&str>, schedule: Option<&str>) -> PlayedGame {
    PlayedGame {
        id: GameId::from(id),
        tournament_id: tournament.map(TournamentId::from),
        schedule_id: schedule.map(ScheduleId::from),
        player_count: None,
    }
}

pub fn participation(
    id: &str,
    tournament: &str,
    game: &str,
    player: &str,
    position: Option<u32>,
) -> Participation {
    Participation {
        id: ParticipationId::from(id),
        tournament_id: Some(TournamentId::from(tournament)),
        played_game_id: Some(GameId::from(game)),
        player_id: PlayerId::from(player),
        finish_position: position,
        knockouts: 0,
    }
}

pub fn player(id: &str, first: &str, last: &str) -> Player {
    Player {
        id: PlayerId::from(id),
        organization_id: Some(OrganizationId::from(ORG)),
        first_name: first.to_string(),
        last_name: last.to_string(),
        nickname: None,
    }
}

pub fn standing(tournament: &str, player: &str, games_played: u32, total_points: i64) -> Standing {
    Standing {
        tournament_id: TournamentId::from(tournament),
        player_id: PlayerId::from(player),
        games_played,
        total_points,
        total_earnings: Decimal::ZERO,
        knockouts: 0,
        bounties: Decimal::ZERO,
    }
}

pub fn point_level(table: &str, position: u32, points: i64) -> PointLevel {
    PointLevel {
        points_table_id: PointsTableId::from(table),
        position,
        points,
    }
}

/// Points table `{1→50, 2→30, 3→20}`.
pub fn standard_points(table: &str) -> Vec<PointLevel> {
    vec![
        point_level(table, 1, 50),
        point_level(table, 2, 30),
        point_level(table, 3, 20),
    ]
}

pub fn prize(game: &str, place: u32, amount: Money) -> PrizeRecord {
    PrizeRecord {
        played_game_id: GameId::from(game),
        place,
        amount,
    }
}
