//! In-memory [`RecordSource`] for tests.
//!
//! Serves collections from a [`LeagueSnapshot`] and ignores query filters,
//! which is allowed by the port contract and forces callers to filter
//! client-side. Individual resources can be made to fail, and calls can be
//! delayed to script overlapping refreshes.

use std::collections::{HashMap, HashSet, VecDeque};
use std::time::Duration;

use async_trait::async_trait;
use parking_lot::{Mutex, RwLock};

use crate::application::snapshot::LeagueSnapshot;
use crate::domain::{
    GameConfig, Participation, PlayedGame, Player, PointLevel, PrizeRecord, ScheduledGame,
    Standing, Tournament,
};
use crate::error::{Error, Result};
use crate::port::outbound::record_source::{RecordQuery, RecordSource};

pub struct InMemorySource {
    data: RwLock<LeagueSnapshot>,
    failing: Mutex<HashSet<&'static str>>,
    delays: Mutex<HashMap<&'static str, VecDeque<Duration>>>,
    calls: Mutex<Vec<(&'static str, RecordQuery)>>,
}

impl InMemorySource {
    pub fn new(data: LeagueSnapshot) -> Self {
        Self {
            data: RwLock::new(data),
            failing: Mutex::new(HashSet::new()),
            delays: Mutex::new(HashMap::new()),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Make every fetch of `resource` fail with a 503.
    pub fn fail(&self, resource: &'static str) {
        self.failing.lock().insert(resource);
    }

    /// Delay the next fetch of `resource` by `delay`. Queued per resource.
    pub fn push_delay(&self, resource: &'static str, delay: Duration) {
        self.delays
            .lock()
            .entry(resource)
            .or_default()
            .push_back(delay);
    }

    /// Replace the served data.
    pub fn update(&self, f: impl FnOnce(&mut LeagueSnapshot)) {
        f(&mut self.data.write());
    }

    /// Queries received so far, in call order.
    pub fn calls(&self) -> Vec<(&'static str, RecordQuery)> {
        self.calls.lock().clone()
    }

    /// Number of fetches of `resource` so far.
    pub fn call_count(&self, resource: &str) -> usize {
        self.calls
            .lock()
            .iter()
            .filter(|(name, _)| *name == resource)
            .count()
    }

    async fn serve<T: Clone>(
        &self,
        resource: &'static str,
        query: &RecordQuery,
        select: impl FnOnce(&LeagueSnapshot) -> &Vec<T>,
    ) -> Result<Vec<T>> {
        self.calls.lock().push((resource, query.clone()));

        let delay = self
            .delays
            .lock()
            .get_mut(resource)
            .and_then(VecDeque::pop_front);
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        if self.failing.lock().contains(resource) {
            return Err(Error::Status {
                resource,
                status: 503,
            });
        }

        Ok(select(&self.data.read()).clone())
    }
}

#[async_trait]
impl RecordSource for InMemorySource {
    async fn tournaments(&self, query: &RecordQuery) -> Result<Vec<Tournament>> {
        self.serve("tournaments", query, |d| &d.tournaments).await
    }

    async fn schedules(&self, query: &RecordQuery) -> Result<Vec<ScheduledGame>> {
        self.serve("schedules", query, |d| &d.schedules).await
    }

    async fn game_configs(&self, query: &RecordQuery) -> Result<Vec<GameConfig>> {
        self.serve("game_configs", query, |d| &d.game_configs).await
    }

    async fn point_levels(&self, query: &RecordQuery) -> Result<Vec<PointLevel>> {
        self.serve("point_levels", query, |d| &d.point_levels).await
    }

    async fn played_games(&self, query: &RecordQuery) -> Result<Vec<PlayedGame>> {
        self.serve("games", query, |d| &d.played_games).await
    }

    async fn participations(&self, query: &RecordQuery) -> Result<Vec<Participation>> {
        self.serve("game_players", query, |d| &d.participations).await
    }

    async fn players(&self, query: &RecordQuery) -> Result<Vec<Player>> {
        self.serve("players", query, |d| &d.players).await
    }

    async fn standings(&self, query: &RecordQuery) -> Result<Vec<Standing>> {
        self.serve("tournament_players", query, |d| &d.standings).await
    }

    async fn prizes(&self, query: &RecordQuery) -> Result<Vec<PrizeRecord>> {
        self.serve("game_prizes", query, |d| &d.prizes).await
    }

    fn source_name(&self) -> &'static str {
        "in-memory"
    }
}
