//! Record source port for league data.
//!
//! The league data service is an opaque fetch-by-query capability. One method
//! per collection; each takes the same [`RecordQuery`] and applies whichever
//! filters the collection supports.

use async_trait::async_trait;

use crate::domain::{
    GameConfig, GameId, OrganizationId, Participation, PlayedGame, Player, PlayerId, PointLevel,
    PointsTableId, PrizeRecord, ScheduleId, ScheduledGame, Standing, Tournament, TournamentId,
};
use crate::error::Result;

/// Equality and membership filters for a collection fetch.
///
/// Filters a collection has no column for are ignored by the source. Callers
/// must not assume a filter was applied server-side.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordQuery {
    pub organization_id: Option<OrganizationId>,
    pub tournament_id: Option<TournamentId>,
    pub player_id: Option<PlayerId>,
    pub schedule_id: Option<ScheduleId>,
    pub points_table_ids: Vec<PointsTableId>,
    pub played_game_ids: Vec<GameId>,
}

impl RecordQuery {
    /// Query scoped to one organization.
    #[must_use]
    pub fn organization(organization_id: OrganizationId) -> Self {
        Self {
            organization_id: Some(organization_id),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_tournament(mut self, tournament_id: Option<TournamentId>) -> Self {
        self.tournament_id = tournament_id;
        self
    }

    #[must_use]
    pub fn with_player(mut self, player_id: Option<PlayerId>) -> Self {
        self.player_id = player_id;
        self
    }

    #[must_use]
    pub fn with_schedule(mut self, schedule_id: Option<ScheduleId>) -> Self {
        self.schedule_id = schedule_id;
        self
    }

    #[must_use]
    pub fn with_points_tables(mut self, ids: Vec<PointsTableId>) -> Self {
        self.points_table_ids = ids;
        self
    }

    #[must_use]
    pub fn with_played_games(mut self, ids: Vec<GameId>) -> Self {
        self.played_game_ids = ids;
        self
    }
}

/// Read-only access to the league's raw collections.
///
/// Implementations report transport and status failures as errors; degrading
/// a failed fetch to an empty collection is the caller's decision.
#[async_trait]
pub trait RecordSource: Send + Sync {
    async fn tournaments(&self, query: &RecordQuery) -> Result<Vec<Tournament>>;

    async fn schedules(&self, query: &RecordQuery) -> Result<Vec<ScheduledGame>>;

    async fn game_configs(&self, query: &RecordQuery) -> Result<Vec<GameConfig>>;

    async fn point_levels(&self, query: &RecordQuery) -> Result<Vec<PointLevel>>;

    async fn played_games(&self, query: &RecordQuery) -> Result<Vec<PlayedGame>>;

    async fn participations(&self, query: &RecordQuery) -> Result<Vec<Participation>>;

    async fn players(&self, query: &RecordQuery) -> Result<Vec<Player>>;

    async fn standings(&self, query: &RecordQuery) -> Result<Vec<Standing>>;

    async fn prizes(&self, query: &RecordQuery) -> Result<Vec<PrizeRecord>>;

    /// Source name for logging.
    fn source_name(&self) -> &'static str;
}
