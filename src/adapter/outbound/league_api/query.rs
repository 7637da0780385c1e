//! PostgREST-style request URLs for each league resource.

use url::Url;

use crate::error::Result;
use crate::port::outbound::record_source::RecordQuery;

/// REST collections exposed by the league API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Tournaments,
    Schedules,
    GameConfigs,
    PointLevels,
    Games,
    GamePlayers,
    Players,
    TournamentPlayers,
    GamePrizes,
}

impl Resource {
    /// Path segment of the collection.
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Tournaments => "tournaments",
            Self::Schedules => "schedules",
            Self::GameConfigs => "game_configs",
            Self::PointLevels => "point_levels",
            Self::Games => "games",
            Self::GamePlayers => "game_players",
            Self::Players => "players",
            Self::TournamentPlayers => "tournament_players",
            Self::GamePrizes => "game_prizes",
        }
    }

    /// Server-side ordering, where the collection has a natural one.
    const fn order(self) -> Option<&'static str> {
        match self {
            Self::Tournaments => Some("start_date.desc"),
            Self::Schedules => Some("game_date.asc,game_time.asc"),
            Self::PointLevels => Some("position.asc"),
            Self::GamePrizes => Some("position.asc"),
            _ => None,
        }
    }

    /// `(column, operator expression)` filters this collection supports.
    ///
    /// Tournament filters on collections whose link is optional also match a
    /// null link, the same rows the snapshot keeps when it re-applies scope.
    fn filters(self, query: &RecordQuery) -> Vec<(&'static str, String)> {
        let organization = query.organization_id.as_ref().map(|id| id.as_str());
        let tournament = query.tournament_id.as_ref().map(|id| id.as_str());
        let player = query.player_id.as_ref().map(|id| id.as_str());
        let schedule = query.schedule_id.as_ref().map(|id| id.as_str());

        let candidates = match self {
            Self::Tournaments => vec![
                ("organization_id", equals(organization)),
                ("id", equals(tournament)),
            ],
            Self::Schedules => vec![
                ("or", schedule_tournament(tournament)),
                ("id", equals(schedule)),
            ],
            Self::GameConfigs | Self::Players => vec![("organization_id", equals(organization))],
            Self::Games => vec![("or", equals_or_null("tournament_id", tournament))],
            Self::GamePlayers => vec![
                ("or", equals_or_null("tournament_id", tournament)),
                ("player_id", equals(player)),
            ],
            Self::TournamentPlayers => vec![
                ("tournament_id", equals(tournament)),
                ("player_id", equals(player)),
            ],
            Self::PointLevels => vec![(
                "points_table_id",
                membership(query.points_table_ids.iter().map(|id| id.as_str())),
            )],
            Self::GamePrizes => vec![(
                "game_id",
                membership(query.played_game_ids.iter().map(|id| id.as_str())),
            )],
        };

        candidates
            .into_iter()
            .filter_map(|(column, expression)| Some((column, expression?)))
            .collect()
    }
}

/// `eq.value` expression.
fn equals(value: Option<&str>) -> Option<String> {
    value.map(|v| format!("eq.{v}"))
}

/// `(col.eq.value,col.is.null)` group for an `or` filter.
fn equals_or_null(column: &str, value: Option<&str>) -> Option<String> {
    value.map(|v| format!("({column}.eq.{v},{column}.is.null)"))
}

/// Schedules carry their tournament under either spelling of the column.
fn schedule_tournament(value: Option<&str>) -> Option<String> {
    value.map(|v| {
        format!(
            "(tournament_id.eq.{v},tournamnet_id.eq.{v},\
             and(tournament_id.is.null,tournamnet_id.is.null))"
        )
    })
}

/// `in.(a,b,c)` membership expression, `None` for an empty set.
fn membership<'a>(values: impl Iterator<Item = &'a str>) -> Option<String> {
    let values: Vec<&str> = values.collect();
    (!values.is_empty()).then(|| format!("in.({})", values.join(",")))
}

/// Build the GET URL for `resource` under `base_url`.
pub fn resource_url(base_url: &str, resource: Resource, query: &RecordQuery) -> Result<Url> {
    let mut url = Url::parse(&format!("{}/{}", base_url.trim_end_matches('/'), resource.path()))?;
    {
        let mut pairs = url.query_pairs_mut();
        pairs.append_pair("select", "*");
        for (column, expression) in resource.filters(query) {
            pairs.append_pair(column, &expression);
        }
        if let Some(order) = resource.order() {
            pairs.append_pair("order", order);
        }
    }
    Ok(url)
}
