//! Handler for the `game` command.

use serde_json::json;
use tabled::{Table, Tabled};

use super::command::GameArgs;
use super::{format, output};
use crate::application::LeagueReports;
use crate::domain::{GameResultRow, GameResults, ScheduleId};
use crate::error::Result;

#[derive(Tabled)]
struct ResultRow {
    #[tabled(rename = "Place")]
    place: String,
    #[tabled(rename = "Player")]
    player: String,
    #[tabled(rename = "Points")]
    points: i64,
    #[tabled(rename = "Prize")]
    prize: String,
    #[tabled(rename = "KOs")]
    knockouts: u32,
}

impl From<&GameResultRow> for ResultRow {
    fn from(row: &GameResultRow) -> Self {
        Self {
            place: format::ordinal(row.position),
            player: row.display_name.clone(),
            points: row.points,
            prize: format::optional_money(row.prize),
            knockouts: row.knockouts,
        }
    }
}

fn print_results(results: &GameResults) {
    let title = results
        .config_name
        .clone()
        .unwrap_or_else(|| format!("Game {}", results.schedule_id));
    output::header(&title, &format::date(results.game_date));

    if let Some(tournament) = &results.tournament_id {
        output::field("Tournament", tournament);
    }
    output::field("Week", format::week(results.week_number));
    if let Some(count) = results.player_count {
        output::field("Entrants", count);
    }

    if results.game_id.is_none() {
        output::note("This game has not been played yet.");
        return;
    }
    if results.rows.is_empty() {
        output::note("No finishing positions recorded.");
        return;
    }

    output::section("Results");
    let rows: Vec<ResultRow> = results.rows.iter().map(ResultRow::from).collect();
    output::lines(&Table::new(rows).to_string());
    output::field("Prize pool", format::money(results.prize_pool));
}

/// Execute `game`.
pub async fn execute(reports: &LeagueReports, args: &GameArgs) -> Result<()> {
    let schedule_id = ScheduleId::new(args.schedule.trim());

    let spinner = output::spinner("Loading results...");
    let results = reports.game_results(&schedule_id).await;
    output::spinner_done(&spinner);

    if output::is_json() {
        output::json_output(json!({
            "command": "game",
            "results": serde_json::to_value(&results)?,
        }));
        return Ok(());
    }

    print_results(&results);
    Ok(())
}
