//! Consistent set of raw collections for one view.

use std::collections::HashSet;

use serde::Serialize;

use crate::domain::{
    GameConfig, GameId, OrganizationId, Participation, PlayedGame, Player, PlayerId, PointLevel,
    PointsTableId, PrizeRecord, ScheduledGame, Standing, Tournament, TournamentId,
};

/// Which slice of the league a snapshot covers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SnapshotScope {
    pub tournament_id: Option<TournamentId>,
    pub player_id: Option<PlayerId>,
}

impl SnapshotScope {
    #[must_use]
    pub fn tournament(tournament_id: TournamentId) -> Self {
        Self {
            tournament_id: Some(tournament_id),
            player_id: None,
        }
    }

    #[must_use]
    pub fn player(player_id: PlayerId) -> Self {
        Self {
            tournament_id: None,
            player_id: Some(player_id),
        }
    }

    #[must_use]
    pub fn with_tournament(mut self, tournament_id: Option<TournamentId>) -> Self {
        self.tournament_id = tournament_id;
        self
    }
}

/// Every collection the engine joins, fetched for one request.
///
/// Owned and never shared between requests; the engine only borrows it.
#[derive(Debug, Clone, Default, Serialize)]
pub struct LeagueSnapshot {
    pub tournaments: Vec<Tournament>,
    pub schedules: Vec<ScheduledGame>,
    pub game_configs: Vec<GameConfig>,
    pub point_levels: Vec<PointLevel>,
    pub played_games: Vec<PlayedGame>,
    pub participations: Vec<Participation>,
    pub players: Vec<Player>,
    pub standings: Vec<Standing>,
    pub prizes: Vec<PrizeRecord>,
}

impl LeagueSnapshot {
    /// Points tables referenced by the snapshot's tournaments, deduplicated in order.
    #[must_use]
    pub fn points_table_ids(&self) -> Vec<PointsTableId> {
        let mut seen = HashSet::new();
        self.tournaments
            .iter()
            .filter_map(|t| t.points_table_id.clone())
            .filter(|id| seen.insert(id.clone()))
            .collect()
    }

    /// Played games whose prizes the scope needs, deduplicated in order.
    ///
    /// Tournament scopes need every game of the tournament; player scopes only
    /// the games the player took part in.
    #[must_use]
    pub fn prize_game_ids(&self, scope: &SnapshotScope) -> Vec<GameId> {
        let mut seen = HashSet::new();
        let ids: Vec<GameId> = if scope.tournament_id.is_some() && scope.player_id.is_none() {
            self.played_games.iter().map(|g| g.id.clone()).collect()
        } else {
            self.participations
                .iter()
                .filter_map(|p| p.played_game_id.clone())
                .collect()
        };
        ids.into_iter().filter(|id| seen.insert(id.clone())).collect()
    }

    /// Re-apply the scope filters client-side.
    ///
    /// Sources may ignore filters they have no column for, so every
    /// collection is narrowed here before the engine sees it. Rows whose
    /// optional link is missing are kept; the engine degrades them itself.
    pub fn retain_scope(&mut self, organization_id: &OrganizationId, scope: &SnapshotScope) {
        self.tournaments
            .retain(|t| &t.organization_id == organization_id);
        self.players.retain(|p| {
            p.organization_id
                .as_ref()
                .map_or(true, |org| org == organization_id)
        });

        if let Some(tournament_id) = &scope.tournament_id {
            let matches = |id: &Option<TournamentId>| id.as_ref().map_or(true, |t| t == tournament_id);
            self.schedules.retain(|s| matches(&s.tournament_id));
            self.played_games.retain(|g| matches(&g.tournament_id));
            self.participations.retain(|p| matches(&p.tournament_id));
            self.standings.retain(|s| &s.tournament_id == tournament_id);
        }

        if let Some(player_id) = &scope.player_id {
            self.participations.retain(|p| &p.player_id == player_id);
            self.standings.retain(|s| &s.player_id == player_id);
        }
    }
}
