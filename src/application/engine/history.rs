//! Per-player game history.
//!
//! Joins participation → played game → schedule for the date, and position →
//! points table / prize records for the outcome. Rows that cannot be dated or
//! have no finishing position are left out.

use tracing::trace;

use super::lookup::LookupMaps;
use crate::application::snapshot::LeagueSnapshot;
use crate::domain::{
    GameHistory, GameHistoryEntry, Participation, PlayerId, ProgressionPoint, TournamentId,
};

/// Tournament a participation belongs to.
///
/// Uses the participation's own link, then its played game's, then the
/// schedule's.
pub fn participation_tournament(
    maps: &LookupMaps<'_>,
    participation: &Participation,
) -> Option<TournamentId> {
    if let Some(id) = &participation.tournament_id {
        return Some(id.clone());
    }
    let game = maps.played_games.get(participation.played_game_id.as_ref()?)?;
    maps.game_tournament(game).cloned()
}

fn resolve_entry(maps: &LookupMaps<'_>, participation: &Participation) -> Option<GameHistoryEntry> {
    let game = maps.played_games.get(participation.played_game_id.as_ref()?)?;
    let schedule = maps.schedules.get(game.schedule_id.as_ref()?)?;
    let game_date = schedule.date?;
    let position = participation.finish_position?;
    let tournament_id = participation_tournament(maps, participation);

    Some(GameHistoryEntry {
        participation_id: participation.id.clone(),
        points: maps.points_for(tournament_id.as_ref(), position),
        prize: maps.prizes.prize(&game.id, position),
        tournament_id,
        game_id: game.id.clone(),
        schedule_id: schedule.id.clone(),
        game_date,
        week_number: schedule.week_number,
        position,
        knockouts: participation.knockouts,
    })
}

/// Resolve one player's games in ascending date order.
///
/// Scoped to `tournament_id` when given, otherwise across every tournament.
/// Games on the same date keep their participation order.
pub fn resolve_history(
    maps: &LookupMaps<'_>,
    participations: &[Participation],
    player_id: &PlayerId,
    tournament_id: Option<&TournamentId>,
) -> GameHistory {
    let mut skipped = 0usize;
    let mut entries: Vec<GameHistoryEntry> = participations
        .iter()
        .filter(|p| &p.player_id == player_id)
        .filter(|p| {
            tournament_id.map_or(true, |t| {
                participation_tournament(maps, p).as_ref() == Some(t)
            })
        })
        .filter_map(|p| {
            let entry = resolve_entry(maps, p);
            if entry.is_none() {
                skipped += 1;
            }
            entry
        })
        .collect();

    if skipped > 0 {
        trace!(player = %player_id, skipped, "Participations without date or position left out of history");
    }

    entries.sort_by_key(|entry| entry.game_date);
    GameHistory::new(entries)
}

/// Build lookup maps for the snapshot and resolve one player's history.
pub fn game_history(
    snapshot: &LeagueSnapshot,
    player_id: &PlayerId,
    tournament_id: Option<&TournamentId>,
) -> GameHistory {
    let maps = LookupMaps::build(snapshot);
    resolve_history(&maps, &snapshot.participations, player_id, tournament_id)
}

/// Cumulative points after each game, for charting.
pub fn points_progression(history: &GameHistory) -> Vec<ProgressionPoint> {
    history
        .iter()
        .scan(0, |total, entry| {
            *total += entry.points;
            Some(ProgressionPoint {
                game_date: entry.game_date,
                week_number: entry.week_number,
                points: entry.points,
                cumulative_points: *total,
            })
        })
        .collect()
}
