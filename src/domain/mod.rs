//! League domain: identifiers, records and view models.

pub mod id;
pub mod metric;
pub mod money;
pub mod record;
pub mod view;

pub use id::{
    GameConfigId, GameId, OrganizationId, ParticipationId, PlayerId, PointsTableId, ScheduleId,
    TournamentId,
};
pub use metric::{LeaderboardMetric, TieBreak};
pub use money::{Money, Points};
pub use record::{
    GameConfig, Participation, PlayedGame, Player, PointLevel, PrizeRecord, ScheduledGame,
    Standing, Tournament,
};
pub use view::{
    CareerStats, GameHistory, GameHistoryEntry, GameResultRow, GameResults, Leaderboard,
    LeaderboardEntry, ProgressionPoint, ScheduleEntry, TournamentStats, TournamentSummary,
};
