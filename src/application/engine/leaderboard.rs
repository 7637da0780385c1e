//! Tournament leaderboard ranking.

use std::cmp::Ordering;

use super::lookup::index_by;
use super::lookup::UNKNOWN_PLAYER;
use super::statistics::average_points;
use crate::domain::{
    Leaderboard, LeaderboardEntry, LeaderboardMetric, Player, Standing, TieBreak, TournamentId,
};

/// Descending comparison of two entries on one metric.
fn compare_desc(metric: LeaderboardMetric, a: &LeaderboardEntry, b: &LeaderboardEntry) -> Ordering {
    match metric {
        LeaderboardMetric::Points => b.points.cmp(&a.points),
        LeaderboardMetric::Winnings => b.winnings.cmp(&a.winnings),
        LeaderboardMetric::Knockouts => b.knockouts.cmp(&a.knockouts),
        LeaderboardMetric::Bounties => b.bounties.cmp(&a.bounties),
    }
}

/// Sort entries by `metric` and renumber ranks from 1.
///
/// The sort is stable: with [`TieBreak::Source`] level entries keep their
/// current order, so re-sorting an already sorted board is a no-op.
pub fn sort_entries(entries: &mut [LeaderboardEntry], metric: LeaderboardMetric, tie_break: TieBreak) {
    match tie_break {
        TieBreak::Source => entries.sort_by(|a, b| compare_desc(metric, a, b)),
        TieBreak::Name => entries.sort_by(|a, b| {
            compare_desc(metric, a, b).then_with(|| {
                a.display_name
                    .to_lowercase()
                    .cmp(&b.display_name.to_lowercase())
            })
        }),
    }
    for (idx, entry) in entries.iter_mut().enumerate() {
        entry.rank = idx + 1;
    }
}

/// Rank every standing of one tournament.
///
/// Standings whose player is missing from the directory are ranked under a
/// placeholder identity instead of being dropped.
pub fn rank_leaderboard(
    standings: &[Standing],
    players: &[Player],
    tournament_id: &TournamentId,
    metric: LeaderboardMetric,
    tie_break: TieBreak,
) -> Leaderboard {
    let directory = index_by(players, |p| Some(&p.id));

    let mut entries: Vec<LeaderboardEntry> = standings
        .iter()
        .filter(|s| &s.tournament_id == tournament_id)
        .map(|standing| {
            let player = directory.get(&standing.player_id);
            LeaderboardEntry {
                rank: 0,
                player_id: standing.player_id.clone(),
                display_name: player
                    .map_or_else(|| UNKNOWN_PLAYER.to_string(), |p| p.display_name()),
                nickname: player.and_then(|p| p.nickname.clone()),
                known_player: player.is_some(),
                games_played: standing.games_played,
                points: standing.total_points,
                winnings: standing.total_earnings,
                knockouts: standing.knockouts,
                bounties: standing.bounties,
                average_points: average_points(standing.total_points, standing.games_played),
            }
        })
        .collect();

    sort_entries(&mut entries, metric, tie_break);

    Leaderboard {
        tournament_id: tournament_id.clone(),
        metric,
        entries,
    }
}
