//! Tournament directory ordering and per-tournament headline numbers.

use std::cmp::Ordering;
use std::collections::HashSet;

use rust_decimal::Decimal;

use super::leaderboard::rank_leaderboard;
use super::lookup::LookupMaps;
use crate::application::snapshot::LeagueSnapshot;
use crate::domain::{
    GameId, LeaderboardMetric, PlayedGame, TieBreak, Tournament, TournamentId, TournamentSummary,
};

/// Order tournaments active first, then by start date descending.
///
/// Tournaments without a start date trail their group.
pub fn sort_tournaments(tournaments: &mut [Tournament]) {
    tournaments.sort_by(|a, b| {
        b.active.cmp(&a.active).then_with(|| match (a.start_date, b.start_date) {
            (Some(x), Some(y)) => y.cmp(&x),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        })
    });
}

/// Field size of a game: its recorded player count, else its participation rows.
fn field_size(snapshot: &LeagueSnapshot, game: &PlayedGame) -> u32 {
    game.player_count.unwrap_or_else(|| {
        let rows = snapshot
            .participations
            .iter()
            .filter(|p| p.played_game_id.as_ref() == Some(&game.id))
            .count();
        u32::try_from(rows).unwrap_or(u32::MAX)
    })
}

pub fn summarize_tournament(
    snapshot: &LeagueSnapshot,
    tournament_id: &TournamentId,
) -> TournamentSummary {
    let maps = LookupMaps::build(snapshot);

    let games: Vec<&PlayedGame> = snapshot
        .played_games
        .iter()
        .filter(|g| maps.game_tournament(g) == Some(tournament_id))
        .collect();
    let game_ids: HashSet<&GameId> = games.iter().map(|g| &g.id).collect();

    let unique_players = snapshot
        .participations
        .iter()
        .filter(|p| p.played_game_id.as_ref().is_some_and(|g| game_ids.contains(g)))
        .map(|p| &p.player_id)
        .collect::<HashSet<_>>()
        .len();

    let total_prize_money: Decimal = snapshot
        .prizes
        .iter()
        .filter(|p| game_ids.contains(&p.played_game_id))
        .map(|p| p.amount)
        .sum();

    let average_field_size = if games.is_empty() {
        0.0
    } else {
        let seats: u64 = games.iter().map(|g| u64::from(field_size(snapshot, g))).sum();
        seats as f64 / games.len() as f64
    };

    let leaderboard = rank_leaderboard(
        &snapshot.standings,
        &snapshot.players,
        tournament_id,
        LeaderboardMetric::Points,
        TieBreak::Source,
    );

    TournamentSummary {
        tournament_id: tournament_id.clone(),
        name: maps.tournament_name(tournament_id),
        scheduled_games: snapshot
            .schedules
            .iter()
            .filter(|s| s.tournament_id.as_ref() == Some(tournament_id))
            .count(),
        played_games: games.len(),
        unique_players,
        total_prize_money,
        average_field_size,
        points_leader: leaderboard.entries.into_iter().next(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testkit::league::sample_league;
    use crate::testkit::records::{date, participation, played_game, schedule, tournament};
    use rust_decimal_macros::dec;

    #[test]
    fn summary_of_sample_tournament() {
        let league = sample_league();
        let summary = summarize_tournament(&league, &TournamentId::from("t1"));

        assert_eq!(summary.name.as_deref(), Some("Spring League"));
        assert_eq!(summary.scheduled_games, 3);
        assert_eq!(summary.played_games, 2);
        assert_eq!(summary.unique_players, 3);
        assert_eq!(summary.total_prize_money, dec!(270));
        assert_eq!(summary.average_field_size, 3.0);
        let leader = summary.points_leader.expect("leader");
        assert_eq!(leader.player_id.as_str(), "p2");
        assert_eq!(leader.rank, 1);
    }

    #[test]
    fn games_linked_through_their_schedule_count_as_played() {
        let mut league = sample_league();
        league.schedules.push(schedule("s5", Some("t1"), Some("2024-01-29")));
        league.played_games.push(played_game("g5", None, Some("s5")));
        let mut row = participation("r9", "t1", "g5", "p3", Some(1));
        row.tournament_id = None;
        league.participations.push(row);

        let summary = summarize_tournament(&league, &TournamentId::from("t1"));

        assert_eq!(summary.scheduled_games, 4);
        assert_eq!(summary.played_games, 3);
        assert_eq!(summary.unique_players, 3);
    }

    #[test]
    fn empty_tournament_has_zeroed_summary() {
        let snapshot = LeagueSnapshot {
            tournaments: vec![tournament("t9", None)],
            ..Default::default()
        };
        let summary = summarize_tournament(&snapshot, &TournamentId::from("t9"));

        assert_eq!(summary.played_games, 0);
        assert_eq!(summary.average_field_size, 0.0);
        assert_eq!(summary.total_prize_money, Decimal::ZERO);
        assert!(summary.points_leader.is_none());
    }

    #[test]
    fn field_size_falls_back_to_participation_rows() {
        let snapshot = LeagueSnapshot {
            played_games: vec![played_game("g1", Some("t1"), None)],
            participations: vec![
                participation("a", "t1", "g1", "p1", Some(1)),
                participation("b", "t1", "g1", "p2", Some(2)),
            ],
            ..Default::default()
        };
        let summary = summarize_tournament(&snapshot, &TournamentId::from("t1"));
        assert_eq!(summary.average_field_size, 2.0);
    }

    #[test]
    fn directory_lists_active_then_newest() {
        let mut old = tournament("old", None);
        old.start_date = Some(date("2022-01-01"));
        let mut new = tournament("new", None);
        new.start_date = Some(date("2024-01-01"));
        let mut done = tournament("done", None);
        done.active = false;
        done.start_date = Some(date("2025-01-01"));
        let undated = tournament("undated", None);

        let mut list = vec![done, old, undated, new];
        sort_tournaments(&mut list);

        let ids: Vec<_> = list.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["new", "old", "undated", "done"]);
    }
}
