//! End-to-end report tests over an in-memory league.

use std::sync::Arc;
use std::time::Duration;

use rust_decimal_macros::dec;

use chiplead::adapter::outbound::league_api::dto::{decode_rows, ScheduleRow};
use chiplead::application::engine::UNKNOWN_PLAYER;
use chiplead::application::{LatestView, LeagueReports};
use chiplead::domain::{
    LeaderboardMetric, OrganizationId, PlayerId, ScheduleId, ScheduledGame, TieBreak,
    TournamentId,
};
use chiplead::testkit::league::sample_league;
use chiplead::testkit::records::{participation, played_game, ORG};
use chiplead::testkit::source::InMemorySource;

fn league() -> (Arc<InMemorySource>, LeagueReports) {
    let source = Arc::new(InMemorySource::new(sample_league()));
    let reports = LeagueReports::new(source.clone(), OrganizationId::from(ORG));
    (source, reports)
}

fn spring() -> TournamentId {
    TournamentId::from("t1")
}

fn ranked_ids(board: &chiplead::domain::Leaderboard) -> Vec<&str> {
    board.entries.iter().map(|e| e.player_id.as_str()).collect()
}

#[tokio::test]
async fn leaderboard_ranks_by_each_metric() {
    let (_, reports) = league();

    let by_points = reports
        .leaderboard(&spring(), LeaderboardMetric::Points, TieBreak::Source)
        .await;
    assert_eq!(ranked_ids(&by_points), vec!["p2", "p1", "p3"]);
    assert_eq!(by_points.entries[0].rank, 1);
    assert_eq!(by_points.entries[0].display_name, "Alan Turing");

    let by_knockouts = reports
        .leaderboard(&spring(), LeaderboardMetric::Knockouts, TieBreak::Source)
        .await;
    assert_eq!(ranked_ids(&by_knockouts), vec!["p1", "p2", "p3"]);
}

#[tokio::test]
async fn leaderboard_survives_missing_player_directory() {
    let (source, reports) = league();
    source.fail("players");

    let board = reports
        .leaderboard(&spring(), LeaderboardMetric::Points, TieBreak::Source)
        .await;

    assert_eq!(board.entries.len(), 3);
    assert!(board
        .entries
        .iter()
        .all(|e| !e.known_player && e.display_name == UNKNOWN_PLAYER));
}

#[tokio::test]
async fn game_results_join_points_and_prizes() {
    let (_, reports) = league();
    let results = reports.game_results(&ScheduleId::from("s2")).await;

    let finishers: Vec<_> = results
        .rows
        .iter()
        .map(|r| (r.player_id.as_str(), r.position, r.points, r.prize))
        .collect();
    assert_eq!(
        finishers,
        vec![("p2", 1, 50, Some(dec!(120))), ("p1", 3, 20, None)]
    );
    assert_eq!(results.prize_pool, dec!(120));
}

#[tokio::test]
async fn player_career_spans_tournaments() {
    let (_, reports) = league();
    let career = reports.career(&PlayerId::from("p1")).await;

    assert_eq!(career.display_name, "Ada Lovelace");
    assert_eq!(career.tournaments.len(), 2);
    assert_eq!(career.total_points, 100);
    assert_eq!(career.best_position, Some(1));
    assert_eq!(career.worst_position, Some(3));
    assert_eq!(career.average_position, Some(2.0));
}

#[tokio::test]
async fn history_narrows_to_one_tournament() {
    let (_, reports) = league();
    let history = reports
        .history(&PlayerId::from("p1"), Some(&spring()))
        .await;

    let positions: Vec<_> = history.positions().collect();
    assert_eq!(positions, vec![1, 3]);
}

#[tokio::test]
async fn schedule_lists_unplayed_games() {
    let (_, reports) = league();
    let entries = reports.schedule(&spring()).await;

    let played: Vec<_> = entries.iter().map(|e| e.is_played()).collect();
    assert_eq!(played, vec![true, true, false]);
    assert_eq!(entries[2].status.as_deref(), Some("scheduled"));
}

#[tokio::test]
async fn summary_headlines() {
    let (_, reports) = league();
    let summary = reports.summary(&spring()).await;

    assert_eq!(summary.scheduled_games, 3);
    assert_eq!(summary.played_games, 2);
    assert_eq!(summary.unique_players, 3);
    assert_eq!(summary.total_prize_money, dec!(270));
    assert_eq!(
        summary.points_leader.map(|l| l.player_id),
        Some(PlayerId::from("p2"))
    );
}

#[tokio::test]
async fn schedule_with_misspelled_tournament_column_reaches_reports() {
    let (source, reports) = league();
    let wire: Vec<serde_json::Value> = serde_json::from_str(
        r#"[{"id": "s5", "tournament_id": null, "tournamnet_id": "t1", "game_date": "2024-01-26", "week_number": 4}]"#,
    )
    .unwrap();
    let schedules: Vec<ScheduledGame> = decode_rows::<ScheduleRow, _>("schedules", wire);
    assert_eq!(schedules.len(), 1);

    source.update(|league| {
        league.schedules.extend(schedules);
        league.played_games.push(played_game("g5", None, Some("s5")));
        let mut row = participation("r9", "t1", "g5", "p1", Some(2));
        row.tournament_id = None;
        league.participations.push(row);
    });

    let summary = reports.summary(&spring()).await;
    assert_eq!(summary.scheduled_games, 4);
    assert_eq!(summary.played_games, 3);

    let history = reports
        .history(&PlayerId::from("p1"), Some(&spring()))
        .await;
    let positions: Vec<_> = history.positions().collect();
    assert_eq!(positions, vec![1, 3, 2]);
}

#[tokio::test]
async fn newer_refresh_wins_over_slower_older_one() {
    let (source, reports) = league();
    source.push_delay("tournament_players", Duration::from_millis(80));
    let view = LatestView::new();
    let tournament = spring();

    let (older, newer) = tokio::join!(
        reports.refresh_leaderboard(&view, &tournament, LeaderboardMetric::Points, TieBreak::Source),
        reports.refresh_leaderboard(&view, &tournament, LeaderboardMetric::Winnings, TieBreak::Source),
    );

    assert!(older.is_none());
    assert_eq!(
        newer.map(|b| b.metric),
        Some(LeaderboardMetric::Winnings)
    );
}
