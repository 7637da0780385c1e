//! Results table of a single scheduled game.

use super::history::participation_tournament;
use super::lookup::LookupMaps;
use crate::application::snapshot::LeagueSnapshot;
use crate::domain::money::total_prizes;
use crate::domain::{GameResultRow, GameResults, ScheduleId};

/// Resolve the finishers of the game played for `schedule_id`.
///
/// Rows without a finishing position are dropped; the rest are ordered by
/// position. The prize pool is the sum of the rows' prizes. An unplayed or
/// unknown schedule yields an empty table.
pub fn resolve_game_results(snapshot: &LeagueSnapshot, schedule_id: &ScheduleId) -> GameResults {
    let maps = LookupMaps::build(snapshot);
    let schedule = maps.schedules.get(schedule_id).copied();
    let game = maps.played_by_schedule.get(schedule_id).copied();

    let mut rows: Vec<GameResultRow> = match game {
        Some(game) => snapshot
            .participations
            .iter()
            .filter(|p| p.played_game_id.as_ref() == Some(&game.id))
            .filter_map(|p| {
                let position = p.finish_position?;
                let tournament_id = participation_tournament(&maps, p);
                let (display_name, _, _) = maps.player_identity(&p.player_id);
                Some(GameResultRow {
                    position,
                    player_id: p.player_id.clone(),
                    display_name,
                    points: maps.points_for(tournament_id.as_ref(), position),
                    prize: maps.prizes.prize(&game.id, position),
                    knockouts: p.knockouts,
                })
            })
            .collect(),
        None => Vec::new(),
    };
    rows.sort_by_key(|row| row.position);

    let prize_pool = total_prizes(rows.iter().map(|row| &row.prize));
    let config_name = schedule
        .and_then(|s| s.game_config_id.as_ref())
        .and_then(|id| maps.game_configs.get(id))
        .map(|c| c.name.clone());

    GameResults {
        schedule_id: schedule_id.clone(),
        game_id: game.map(|g| g.id.clone()),
        tournament_id: game
            .and_then(|g| g.tournament_id.clone())
            .or_else(|| schedule.and_then(|s| s.tournament_id.clone())),
        game_date: schedule.and_then(|s| s.date),
        week_number: schedule.and_then(|s| s.week_number),
        config_name,
        player_count: game.and_then(|g| g.player_count),
        rows,
        prize_pool,
    }
}
