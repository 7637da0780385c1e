//! Handler for the `progression` command.

use serde_json::json;
use tabled::{Table, Tabled};

use super::command::ProgressionArgs;
use super::{format, output};
use crate::application::LeagueReports;
use crate::domain::{PlayerId, ProgressionPoint, TournamentId};
use crate::error::Result;

#[derive(Tabled)]
struct ProgressionRow {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Week")]
    week: String,
    #[tabled(rename = "Points")]
    points: i64,
    #[tabled(rename = "Total")]
    total: i64,
}

impl From<&ProgressionPoint> for ProgressionRow {
    fn from(point: &ProgressionPoint) -> Self {
        Self {
            date: format::date(Some(point.game_date)),
            week: format::week(point.week_number),
            points: point.points,
            total: point.cumulative_points,
        }
    }
}

/// Execute `progression`.
pub async fn execute(reports: &LeagueReports, args: &ProgressionArgs) -> Result<()> {
    let player_id = PlayerId::new(args.player.trim());
    let tournament_id = TournamentId::new(args.tournament.trim());

    let spinner = output::spinner("Loading games...");
    let series = reports.progression(&player_id, &tournament_id).await;
    output::spinner_done(&spinner);

    if output::is_json() {
        output::json_output(json!({
            "command": "progression",
            "player_id": player_id,
            "tournament_id": tournament_id,
            "points": serde_json::to_value(&series)?,
        }));
        return Ok(());
    }

    output::header(
        &format!("Progression {player_id}"),
        &format!("tournament {tournament_id}"),
    );
    if series.is_empty() {
        output::note("No finished games in this tournament.");
        return Ok(());
    }

    let rows: Vec<ProgressionRow> = series.iter().map(ProgressionRow::from).collect();
    output::lines(&Table::new(rows).to_string());
    Ok(())
}
