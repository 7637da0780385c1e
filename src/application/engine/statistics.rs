//! Per-tournament and career statistics for one player.
//!
//! Counters (games, points, earnings, knockouts, bounties) come from the
//! trusted standings. Position-derived fields are always recomputed from the
//! resolved game history, so a standing without any resolvable games keeps
//! its totals but reports no position data.

use rust_decimal::Decimal;

use super::history::resolve_history;
use super::lookup::LookupMaps;
use crate::application::snapshot::LeagueSnapshot;
use crate::domain::{CareerStats, GameHistory, PlayerId, Points, Standing, TournamentStats};

/// Average points per game, 0 when no games were played.
#[must_use]
pub fn average_points(total_points: Points, games_played: u32) -> f64 {
    if games_played == 0 {
        0.0
    } else {
        total_points as f64 / f64::from(games_played)
    }
}

/// Best (lowest), worst (highest) and mean of a set of finishing positions.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PositionSummary {
    pub best: Option<u32>,
    pub worst: Option<u32>,
    pub average: Option<f64>,
}

impl PositionSummary {
    pub fn from_positions(positions: impl IntoIterator<Item = u32>) -> Self {
        let mut count = 0u32;
        let mut sum = 0u64;
        let mut best: Option<u32> = None;
        let mut worst: Option<u32> = None;

        for position in positions {
            count += 1;
            sum += u64::from(position);
            best = Some(best.map_or(position, |b| b.min(position)));
            worst = Some(worst.map_or(position, |w| w.max(position)));
        }

        let average = (count > 0).then(|| sum as f64 / f64::from(count));
        Self {
            best,
            worst,
            average,
        }
    }
}

/// Stats for one standing row, given the player's history in that tournament.
pub fn tournament_stats(
    maps: &LookupMaps<'_>,
    standing: &Standing,
    history: &GameHistory,
) -> TournamentStats {
    TournamentStats {
        tournament_id: standing.tournament_id.clone(),
        tournament_name: maps.tournament_name(&standing.tournament_id),
        games_played: standing.games_played,
        total_points: standing.total_points,
        total_earnings: standing.total_earnings,
        knockouts: standing.knockouts,
        bounties: standing.bounties,
        best_position: PositionSummary::from_positions(history.positions()).best,
        average_points: average_points(standing.total_points, standing.games_played),
        resolved_games: history.len(),
    }
}

/// Roll a player's standings and histories up across every tournament.
///
/// Tournaments are listed in standing order. Totals are sums of the
/// standings; best, worst and average position come from the pooled
/// per-game positions, not from the per-tournament summaries.
pub fn career_stats(snapshot: &LeagueSnapshot, player_id: &PlayerId) -> CareerStats {
    let maps = LookupMaps::build(snapshot);
    let (display_name, _, _) = maps.player_identity(player_id);

    let mut tournaments = Vec::new();
    let mut pooled: Vec<u32> = Vec::new();

    for standing in snapshot
        .standings
        .iter()
        .filter(|s| &s.player_id == player_id)
    {
        let history = resolve_history(
            &maps,
            &snapshot.participations,
            player_id,
            Some(&standing.tournament_id),
        );
        pooled.extend(history.positions());
        tournaments.push(tournament_stats(&maps, standing, &history));
    }

    let positions = PositionSummary::from_positions(pooled);

    CareerStats {
        player_id: player_id.clone(),
        display_name,
        games_played: tournaments.iter().map(|t| t.games_played).sum(),
        total_points: tournaments.iter().map(|t| t.total_points).sum(),
        total_earnings: tournaments.iter().map(|t| t.total_earnings).sum::<Decimal>(),
        knockouts: tournaments.iter().map(|t| t.knockouts).sum(),
        bounties: tournaments.iter().map(|t| t.bounties).sum::<Decimal>(),
        best_position: positions.best,
        worst_position: positions.worst,
        average_position: positions.average,
        tournaments,
    }
}
