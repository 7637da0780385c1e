//! Report service: fetches a scoped snapshot and hands it to the engine.
//!
//! Fetches for one view run concurrently in two phases. The first phase
//! loads everything addressable by organization, tournament or player; the
//! second loads point levels and prizes, whose ids are only known once the
//! first phase is in. A failed fetch is logged and treated as an empty
//! collection so the rest of the view still renders.

use std::collections::HashSet;
use std::future::Future;
use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, info, warn};

use super::engine::{
    build_schedule, career_stats, game_history, points_progression, rank_leaderboard,
    resolve_game_results, sort_tournaments, summarize_tournament,
};
use super::snapshot::{LeagueSnapshot, SnapshotScope};
use super::supersession::LatestView;
use crate::domain::{
    CareerStats, GameHistory, GameResults, Leaderboard, LeaderboardMetric, OrganizationId,
    PlayerId, ProgressionPoint, ScheduleEntry, ScheduleId, TieBreak, Tournament, TournamentId,
    TournamentSummary,
};
use crate::error::Result;
use crate::port::outbound::record_source::{RecordQuery, RecordSource};

/// Await a fetch, degrading failure to an empty collection.
async fn fetch_or_empty<T>(resource: &'static str, fetch: impl Future<Output = Result<Vec<T>>>) -> Vec<T> {
    match fetch.await {
        Ok(rows) => {
            debug!(resource, rows = rows.len(), "Fetched collection");
            rows
        }
        Err(e) => {
            warn!(resource, error = %e, "Fetch failed, continuing with empty collection");
            Vec::new()
        }
    }
}

/// Career numbers plus the game history behind them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerReport {
    pub career: CareerStats,
    pub history: GameHistory,
}

/// Read-only league reports for one organization.
pub struct LeagueReports {
    source: Arc<dyn RecordSource>,
    organization_id: OrganizationId,
}

impl LeagueReports {
    pub fn new(source: Arc<dyn RecordSource>, organization_id: OrganizationId) -> Self {
        Self {
            source,
            organization_id,
        }
    }

    #[must_use]
    pub fn organization_id(&self) -> &OrganizationId {
        &self.organization_id
    }

    fn query(&self, scope: &SnapshotScope) -> RecordQuery {
        RecordQuery::organization(self.organization_id.clone())
            .with_tournament(scope.tournament_id.clone())
            .with_player(scope.player_id.clone())
    }

    /// Fetch every collection the scope needs, filtered client-side.
    pub async fn snapshot(&self, scope: &SnapshotScope) -> LeagueSnapshot {
        let query = self.query(scope);
        let source = self.source.as_ref();
        debug!(
            source = source.source_name(),
            tournament = ?scope.tournament_id,
            player = ?scope.player_id,
            "Loading snapshot"
        );

        let (tournaments, schedules, game_configs, players, standings, participations, played_games) = tokio::join!(
            fetch_or_empty("tournaments", source.tournaments(&query)),
            fetch_or_empty("schedules", source.schedules(&query)),
            fetch_or_empty("game_configs", source.game_configs(&query)),
            fetch_or_empty("players", source.players(&query)),
            fetch_or_empty("tournament_players", source.standings(&query)),
            fetch_or_empty("game_players", source.participations(&query)),
            fetch_or_empty("games", source.played_games(&query)),
        );

        let mut snapshot = LeagueSnapshot {
            tournaments,
            schedules,
            game_configs,
            players,
            standings,
            participations,
            played_games,
            ..LeagueSnapshot::default()
        };
        snapshot.retain_scope(&self.organization_id, scope);

        let table_ids = snapshot.points_table_ids();
        let game_ids = snapshot.prize_game_ids(scope);
        let levels_query = RecordQuery::organization(self.organization_id.clone())
            .with_points_tables(table_ids.clone());
        let prizes_query = RecordQuery::organization(self.organization_id.clone())
            .with_played_games(game_ids.clone());

        let (mut point_levels, mut prizes) = tokio::join!(
            async {
                if table_ids.is_empty() {
                    Vec::new()
                } else {
                    fetch_or_empty("point_levels", source.point_levels(&levels_query)).await
                }
            },
            async {
                if game_ids.is_empty() {
                    Vec::new()
                } else {
                    fetch_or_empty("game_prizes", source.prizes(&prizes_query)).await
                }
            },
        );

        let table_ids: HashSet<_> = table_ids.iter().collect();
        let game_ids: HashSet<_> = game_ids.iter().collect();
        point_levels.retain(|l| table_ids.contains(&l.points_table_id));
        prizes.retain(|p| game_ids.contains(&p.played_game_id));
        snapshot.point_levels = point_levels;
        snapshot.prizes = prizes;

        snapshot
    }

    /// Tournament directory, active first then newest.
    pub async fn tournaments(&self) -> Vec<Tournament> {
        let query = RecordQuery::organization(self.organization_id.clone());
        let mut tournaments = fetch_or_empty("tournaments", self.source.tournaments(&query)).await;
        tournaments.retain(|t| t.organization_id == self.organization_id);
        sort_tournaments(&mut tournaments);
        tournaments
    }

    /// Rank one tournament's standings. Only standings and players are fetched.
    pub async fn leaderboard(
        &self,
        tournament_id: &TournamentId,
        metric: LeaderboardMetric,
        tie_break: TieBreak,
    ) -> Leaderboard {
        let scope = SnapshotScope::tournament(tournament_id.clone());
        let query = self.query(&scope);
        let (players, standings) = tokio::join!(
            fetch_or_empty("players", self.source.players(&query)),
            fetch_or_empty("tournament_players", self.source.standings(&query)),
        );

        let mut snapshot = LeagueSnapshot {
            players,
            standings,
            ..LeagueSnapshot::default()
        };
        snapshot.retain_scope(&self.organization_id, &scope);

        rank_leaderboard(
            &snapshot.standings,
            &snapshot.players,
            tournament_id,
            metric,
            tie_break,
        )
    }

    /// Refresh a leaderboard through a supersession slot.
    ///
    /// Returns the new board only when this refresh was still the latest one
    /// when it finished.
    pub async fn refresh_leaderboard(
        &self,
        view: &LatestView<Leaderboard>,
        tournament_id: &TournamentId,
        metric: LeaderboardMetric,
        tie_break: TieBreak,
    ) -> Option<Arc<Leaderboard>> {
        let ticket = view.begin();
        let board = self.leaderboard(tournament_id, metric, tie_break).await;
        view.commit(ticket, board)
    }

    pub async fn career(&self, player_id: &PlayerId) -> CareerStats {
        let snapshot = self.snapshot(&SnapshotScope::player(player_id.clone())).await;
        career_stats(&snapshot, player_id)
    }

    pub async fn history(
        &self,
        player_id: &PlayerId,
        tournament_id: Option<&TournamentId>,
    ) -> GameHistory {
        let scope = SnapshotScope::player(player_id.clone()).with_tournament(tournament_id.cloned());
        let snapshot = self.snapshot(&scope).await;
        game_history(&snapshot, player_id, tournament_id)
    }

    /// Career stats and history from a single snapshot.
    ///
    /// Career totals always span every tournament; `tournament_id` only
    /// narrows the history.
    pub async fn player_report(
        &self,
        player_id: &PlayerId,
        tournament_id: Option<&TournamentId>,
    ) -> PlayerReport {
        let snapshot = self.snapshot(&SnapshotScope::player(player_id.clone())).await;
        PlayerReport {
            career: career_stats(&snapshot, player_id),
            history: game_history(&snapshot, player_id, tournament_id),
        }
    }

    /// Results of one scheduled game.
    ///
    /// The schedule is looked up first to find its tournament, whose points
    /// table and prizes the results need.
    pub async fn game_results(&self, schedule_id: &ScheduleId) -> GameResults {
        let query = RecordQuery::organization(self.organization_id.clone())
            .with_schedule(Some(schedule_id.clone()));
        let schedules = fetch_or_empty("schedules", self.source.schedules(&query)).await;
        let tournament_id = schedules
            .into_iter()
            .find(|s| &s.id == schedule_id)
            .and_then(|s| s.tournament_id);

        let Some(tournament_id) = tournament_id else {
            info!(schedule = %schedule_id, "Schedule not found or not linked to a tournament");
            return resolve_game_results(&LeagueSnapshot::default(), schedule_id);
        };

        let snapshot = self.snapshot(&SnapshotScope::tournament(tournament_id)).await;
        resolve_game_results(&snapshot, schedule_id)
    }

    pub async fn schedule(&self, tournament_id: &TournamentId) -> Vec<ScheduleEntry> {
        let snapshot = self
            .snapshot(&SnapshotScope::tournament(tournament_id.clone()))
            .await;
        build_schedule(&snapshot, tournament_id)
    }

    pub async fn summary(&self, tournament_id: &TournamentId) -> TournamentSummary {
        let snapshot = self
            .snapshot(&SnapshotScope::tournament(tournament_id.clone()))
            .await;
        summarize_tournament(&snapshot, tournament_id)
    }

    /// Cumulative points series of one player in one tournament.
    pub async fn progression(
        &self,
        player_id: &PlayerId,
        tournament_id: &TournamentId,
    ) -> Vec<ProgressionPoint> {
        let history = self.history(player_id, Some(tournament_id)).await;
        points_progression(&history)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testkit::league::sample_league;
    use crate::testkit::records::{tournament, ORG};
    use rust_decimal_macros::dec;
    use std::time::Duration;

    use crate::testkit::source::InMemorySource;

    fn reports(source: &Arc<InMemorySource>) -> LeagueReports {
        LeagueReports::new(source.clone(), OrganizationId::from(ORG))
    }

    fn t1() -> TournamentId {
        TournamentId::from("t1")
    }

    #[tokio::test]
    async fn snapshot_narrows_to_tournament() {
        let source = Arc::new(InMemorySource::new(sample_league()));
        let snapshot = reports(&source)
            .snapshot(&SnapshotScope::tournament(t1()))
            .await;

        assert_eq!(snapshot.schedules.len(), 3);
        assert_eq!(snapshot.played_games.len(), 2);
        assert_eq!(snapshot.standings.len(), 3);
        assert_eq!(snapshot.prizes.len(), 4);
        assert_eq!(snapshot.point_levels.len(), 3);
    }

    #[tokio::test]
    async fn second_phase_queries_carry_fetched_ids() {
        let source = Arc::new(InMemorySource::new(sample_league()));
        reports(&source)
            .snapshot(&SnapshotScope::tournament(t1()))
            .await;

        let calls = source.calls();
        let (_, prizes) = calls
            .iter()
            .find(|(name, _)| *name == "game_prizes")
            .expect("prizes fetched");
        let ids: Vec<_> = prizes.played_game_ids.iter().map(|id| id.as_str()).collect();
        assert_eq!(ids, vec!["g1", "g2"]);

        let (_, levels) = calls
            .iter()
            .find(|(name, _)| *name == "point_levels")
            .expect("levels fetched");
        assert_eq!(levels.points_table_ids.len(), 1);
    }

    #[tokio::test]
    async fn failed_collection_degrades_to_empty() {
        let source = Arc::new(InMemorySource::new(sample_league()));
        source.fail("game_prizes");

        let results = reports(&source)
            .game_results(&ScheduleId::from("s1"))
            .await;

        assert_eq!(results.rows.len(), 3);
        assert_eq!(results.rows[0].points, 50);
        assert!(results.rows.iter().all(|r| r.prize.is_none()));
        assert_eq!(results.prize_pool, dec!(0));
    }

    #[tokio::test]
    async fn leaderboard_fetches_only_standings_and_players() {
        let source = Arc::new(InMemorySource::new(sample_league()));
        let board = reports(&source)
            .leaderboard(&t1(), LeaderboardMetric::Points, TieBreak::Source)
            .await;

        assert_eq!(board.entries.len(), 3);
        assert_eq!(source.call_count("tournament_players"), 1);
        assert_eq!(source.call_count("players"), 1);
        assert_eq!(source.call_count("game_players"), 0);
        assert_eq!(source.call_count("game_prizes"), 0);
    }

    #[tokio::test]
    async fn directory_drops_other_organizations() {
        let source = Arc::new(InMemorySource::new(sample_league()));
        source.update(|data| {
            let mut foreign = tournament("x", None);
            foreign.organization_id = OrganizationId::from("someone-else");
            data.tournaments.push(foreign);
        });

        let ids: Vec<_> = reports(&source)
            .tournaments()
            .await
            .into_iter()
            .map(|t| t.id)
            .collect();
        assert_eq!(ids, vec![t1(), TournamentId::from("t2")]);
    }

    #[tokio::test]
    async fn player_report_spans_every_tournament() {
        let source = Arc::new(InMemorySource::new(sample_league()));
        let report = reports(&source)
            .player_report(&PlayerId::from("p1"), Some(&t1()))
            .await;

        assert_eq!(report.career.tournaments.len(), 2);
        assert_eq!(report.career.total_points, 100);
        assert_eq!(report.history.len(), 2);
    }

    #[tokio::test]
    async fn progression_follows_history() {
        let source = Arc::new(InMemorySource::new(sample_league()));
        let series = reports(&source)
            .progression(&PlayerId::from("p1"), &t1())
            .await;

        let cumulative: Vec<_> = series.iter().map(|p| p.cumulative_points).collect();
        assert_eq!(cumulative, vec![50, 70]);
    }

    #[tokio::test]
    async fn unknown_schedule_yields_empty_results() {
        let source = Arc::new(InMemorySource::new(sample_league()));
        let results = reports(&source)
            .game_results(&ScheduleId::from("missing"))
            .await;

        assert!(results.rows.is_empty());
        assert_eq!(source.call_count("game_players"), 0);
    }

    #[tokio::test]
    async fn slower_superseded_refresh_is_dropped() {
        let source = Arc::new(InMemorySource::new(sample_league()));
        source.push_delay("tournament_players", Duration::from_millis(80));
        let reports = reports(&source);
        let view = LatestView::new();
        let tournament = t1();

        let (slow, fast) = tokio::join!(
            reports.refresh_leaderboard(&view, &tournament, LeaderboardMetric::Points, TieBreak::Source),
            reports.refresh_leaderboard(&view, &tournament, LeaderboardMetric::Knockouts, TieBreak::Source),
        );

        assert!(slow.is_none());
        let fast = fast.expect("latest refresh commits");
        assert_eq!(fast.metric, LeaderboardMetric::Knockouts);
        assert_eq!(
            view.latest().map(|b| b.metric),
            Some(LeaderboardMetric::Knockouts)
        );
    }

    #[tokio::test]
    async fn refresh_returns_the_board_it_committed() {
        let source = Arc::new(InMemorySource::new(sample_league()));
        let reports = reports(&source);
        let view = LatestView::new();

        let first = reports
            .refresh_leaderboard(&view, &t1(), LeaderboardMetric::Points, TieBreak::Source)
            .await
            .expect("first refresh commits");
        let second = reports
            .refresh_leaderboard(&view, &t1(), LeaderboardMetric::Winnings, TieBreak::Source)
            .await
            .expect("second refresh commits");

        assert_eq!(first.metric, LeaderboardMetric::Points);
        assert_eq!(second.metric, LeaderboardMetric::Winnings);
        assert!(Arc::ptr_eq(&second, &view.latest().expect("committed")));
    }
}
