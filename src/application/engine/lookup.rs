//! O(1) indices over a snapshot's flat collections.
//!
//! Every index keeps the last record seen for a duplicate key and silently
//! skips records that lack the key field. Lookups that miss return the
//! documented default (0 points, no prize, no record) rather than an error.

use std::collections::HashMap;
use std::hash::Hash;

use crate::application::snapshot::LeagueSnapshot;
use crate::domain::{
    GameConfig, GameConfigId, GameId, Money, PlayedGame, Player, PlayerId, PointLevel, Points,
    PointsTableId, PrizeRecord, ScheduleId, ScheduledGame, Tournament, TournamentId,
};

/// Name rendered for a player id that has no directory entry.
pub const UNKNOWN_PLAYER: &str = "Unknown player";

/// Index records by a key, last write wins.
pub fn index_by<'a, T, K>(
    records: &'a [T],
    key: impl Fn(&'a T) -> Option<K>,
) -> HashMap<K, &'a T>
where
    K: Eq + Hash,
{
    let mut index = HashMap::with_capacity(records.len());
    for record in records {
        if let Some(k) = key(record) {
            index.insert(k, record);
        }
    }
    index
}

/// Composite prize key: `playedGameId_position`.
#[must_use]
pub fn prize_key(game_id: &GameId, position: u32) -> String {
    format!("{game_id}_{position}")
}

/// Points awarded per (points table, position).
#[derive(Debug, Default)]
pub struct PointsLookup<'a> {
    tables: HashMap<&'a PointsTableId, HashMap<u32, Points>>,
}

impl<'a> PointsLookup<'a> {
    pub fn build(levels: &'a [PointLevel]) -> Self {
        let mut tables: HashMap<&'a PointsTableId, HashMap<u32, Points>> = HashMap::new();
        for level in levels {
            tables
                .entry(&level.points_table_id)
                .or_default()
                .insert(level.position, level.points);
        }
        Self { tables }
    }

    /// Points for a position, 0 when the table or the position is unmapped.
    #[must_use]
    pub fn points(&self, table: Option<&PointsTableId>, position: u32) -> Points {
        table
            .and_then(|t| self.tables.get(t))
            .and_then(|levels| levels.get(&position))
            .copied()
            .unwrap_or(0)
    }
}

/// Prize money per (played game, position).
#[derive(Debug, Default)]
pub struct PrizeLookup {
    amounts: HashMap<String, Money>,
}

impl PrizeLookup {
    pub fn build(prizes: &[PrizeRecord]) -> Self {
        let amounts = prizes
            .iter()
            .map(|p| (prize_key(&p.played_game_id, p.place), p.amount))
            .collect();
        Self { amounts }
    }

    /// Prize for a finishing position, `None` when no record exists.
    #[must_use]
    pub fn prize(&self, game_id: &GameId, position: u32) -> Option<Money> {
        self.amounts.get(&prize_key(game_id, position)).copied()
    }
}

/// Every index a join step needs, built once per aggregation call.
#[derive(Debug)]
pub struct LookupMaps<'a> {
    pub tournaments: HashMap<&'a TournamentId, &'a Tournament>,
    pub schedules: HashMap<&'a ScheduleId, &'a ScheduledGame>,
    pub game_configs: HashMap<&'a GameConfigId, &'a GameConfig>,
    pub played_games: HashMap<&'a GameId, &'a PlayedGame>,
    pub played_by_schedule: HashMap<&'a ScheduleId, &'a PlayedGame>,
    pub players: HashMap<&'a PlayerId, &'a Player>,
    pub points: PointsLookup<'a>,
    pub prizes: PrizeLookup,
}

impl<'a> LookupMaps<'a> {
    pub fn build(snapshot: &'a LeagueSnapshot) -> Self {
        Self {
            tournaments: index_by(&snapshot.tournaments, |t| Some(&t.id)),
            schedules: index_by(&snapshot.schedules, |s| Some(&s.id)),
            game_configs: index_by(&snapshot.game_configs, |c| Some(&c.id)),
            played_games: index_by(&snapshot.played_games, |g| Some(&g.id)),
            played_by_schedule: index_by(&snapshot.played_games, |g| g.schedule_id.as_ref()),
            players: index_by(&snapshot.players, |p| Some(&p.id)),
            points: PointsLookup::build(&snapshot.point_levels),
            prizes: PrizeLookup::build(&snapshot.prizes),
        }
    }

    /// Points table of a tournament, if both resolve.
    #[must_use]
    pub fn points_table(&self, tournament_id: Option<&TournamentId>) -> Option<&'a PointsTableId> {
        tournament_id
            .and_then(|id| self.tournaments.get(id).copied())
            .and_then(|t| t.points_table_id.as_ref())
    }

    /// Tournament of a played game: its own link, else its schedule's.
    #[must_use]
    pub fn game_tournament<'g>(&'g self, game: &'g PlayedGame) -> Option<&'g TournamentId> {
        game.tournament_id.as_ref().or_else(|| {
            game.schedule_id
                .as_ref()
                .and_then(|id| self.schedules.get(id).copied())
                .and_then(|s| s.tournament_id.as_ref())
        })
    }

    /// Points for a position in a tournament, 0 when anything fails to resolve.
    #[must_use]
    pub fn points_for(&self, tournament_id: Option<&TournamentId>, position: u32) -> Points {
        self.points.points(self.points_table(tournament_id), position)
    }

    /// Display identity of a player: name and whether the player is known.
    #[must_use]
    pub fn player_identity(&self, player_id: &PlayerId) -> (String, Option<String>, bool) {
        match self.players.get(player_id) {
            Some(player) => (player.display_name(), player.nickname.clone(), true),
            None => (UNKNOWN_PLAYER.to_string(), None, false),
        }
    }

    #[must_use]
    pub fn tournament_name(&self, tournament_id: &TournamentId) -> Option<String> {
        self.tournaments.get(tournament_id).map(|t| t.name.clone())
    }
}
