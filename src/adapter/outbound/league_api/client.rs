//! HTTP client for the league REST API.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use reqwest::Client as HttpClient;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tokio::time::sleep;
use tracing::{debug, warn};

use super::dto::{
    decode_rows, GameConfigRow, GamePlayerRow, GamePrizeRow, GameRow, PlayerRow, PointLevelRow, ScheduleRow,
    TournamentPlayerRow, TournamentRow,
};
use super::query::{resource_url, Resource};
use super::settings::ApiConfig;
use crate::domain::{
    GameConfig, Participation, PlayedGame, Player, PointLevel, PrizeRecord, ScheduledGame,
    Standing, Tournament,
};
use crate::error::{ConfigError, Error, Result};
use crate::port::outbound::record_source::{RecordQuery, RecordSource};

/// Read-only client over the league's PostgREST endpoint.
pub struct LeagueApiClient {
    http: HttpClient,
    base_url: String,
    retry_max_attempts: u32,
    retry_backoff_ms: u64,
}

impl LeagueApiClient {
    /// Build a client from the `[api]` settings.
    ///
    /// When an API key is configured it is sent both as `apikey` and as a
    /// bearer token on every request.
    pub fn from_config(config: &ApiConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        if let Some(key) = config.api_key.as_deref() {
            let invalid = |_| ConfigError::InvalidValue {
                field: "CHIPLEAD_API_KEY",
                reason: "contains characters not allowed in a header".to_string(),
            };
            let mut apikey = HeaderValue::from_str(key).map_err(invalid)?;
            apikey.set_sensitive(true);
            let mut bearer = HeaderValue::from_str(&format!("Bearer {key}")).map_err(invalid)?;
            bearer.set_sensitive(true);
            headers.insert("apikey", apikey);
            headers.insert(AUTHORIZATION, bearer);
        }

        let http = HttpClient::builder()
            .timeout(Duration::from_millis(config.http.timeout_ms))
            .connect_timeout(Duration::from_millis(config.http.connect_timeout_ms))
            .default_headers(headers)
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.clone(),
            retry_max_attempts: config.http.retry_max_attempts,
            retry_backoff_ms: config.http.retry_backoff_ms,
        })
    }

    /// GET a collection as raw JSON rows, retrying transient failures.
    async fn get_with_retry(&self, resource: Resource, query: &RecordQuery) -> Result<Vec<Value>> {
        let url = resource_url(&self.base_url, resource, query)?;
        let mut attempt = 0;
        let max_attempts = self.retry_max_attempts.max(1);

        loop {
            attempt += 1;
            debug!(resource = resource.path(), attempt, "Fetching");
            let response = match self.http.get(url.clone()).send().await {
                Ok(response) => response,
                Err(err) => {
                    if attempt >= max_attempts || !Self::should_retry(&err) {
                        return Err(err.into());
                    }
                    self.backoff(resource, attempt, max_attempts, &err).await;
                    continue;
                }
            };

            let status = response.status();
            if !status.is_success() {
                return Err(Error::Status {
                    resource: resource.path(),
                    status: status.as_u16(),
                });
            }

            match response.json::<Vec<Value>>().await {
                Ok(rows) => return Ok(rows),
                Err(err) => {
                    if attempt >= max_attempts || !Self::should_retry(&err) {
                        return Err(err.into());
                    }
                    self.backoff(resource, attempt, max_attempts, &err).await;
                }
            }
        }
    }

    fn should_retry(err: &reqwest::Error) -> bool {
        err.is_timeout() || err.is_connect()
    }

    async fn backoff(&self, resource: Resource, attempt: u32, max_attempts: u32, err: &reqwest::Error) {
        warn!(
            resource = resource.path(),
            attempt,
            max_attempts,
            error = %err,
            "HTTP request failed, retrying"
        );
        if self.retry_backoff_ms > 0 {
            sleep(Duration::from_millis(self.retry_backoff_ms)).await;
        }
    }

    async fn fetch<R, T>(&self, resource: Resource, query: &RecordQuery) -> Result<Vec<T>>
    where
        R: DeserializeOwned,
        T: From<R>,
    {
        let rows = self.get_with_retry(resource, query).await?;
        Ok(decode_rows::<R, T>(resource.path(), rows))
    }
}

#[async_trait]
impl RecordSource for LeagueApiClient {
    async fn tournaments(&self, query: &RecordQuery) -> Result<Vec<Tournament>> {
        self.fetch::<TournamentRow, _>(Resource::Tournaments, query).await
    }

    async fn schedules(&self, query: &RecordQuery) -> Result<Vec<ScheduledGame>> {
        self.fetch::<ScheduleRow, _>(Resource::Schedules, query).await
    }

    async fn game_configs(&self, query: &RecordQuery) -> Result<Vec<GameConfig>> {
        self.fetch::<GameConfigRow, _>(Resource::GameConfigs, query).await
    }

    async fn point_levels(&self, query: &RecordQuery) -> Result<Vec<PointLevel>> {
        self.fetch::<PointLevelRow, _>(Resource::PointLevels, query).await
    }

    async fn played_games(&self, query: &RecordQuery) -> Result<Vec<PlayedGame>> {
        self.fetch::<GameRow, _>(Resource::Games, query).await
    }

    async fn participations(&self, query: &RecordQuery) -> Result<Vec<Participation>> {
        self.fetch::<GamePlayerRow, _>(Resource::GamePlayers, query).await
    }

    async fn players(&self, query: &RecordQuery) -> Result<Vec<Player>> {
        self.fetch::<PlayerRow, _>(Resource::Players, query).await
    }

    async fn standings(&self, query: &RecordQuery) -> Result<Vec<Standing>> {
        self.fetch::<TournamentPlayerRow, _>(Resource::TournamentPlayers, query)
            .await
    }

    async fn prizes(&self, query: &RecordQuery) -> Result<Vec<PrizeRecord>> {
        self.fetch::<GamePrizeRow, _>(Resource::GamePrizes, query).await
    }

    fn source_name(&self) -> &'static str {
        "league-api"
    }
}
