//! Handler for the `tournaments` command.

use serde_json::json;
use tabled::{Table, Tabled};

use super::{format, output};
use crate::application::LeagueReports;
use crate::domain::Tournament;
use crate::error::Result;

#[derive(Tabled)]
struct TournamentRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Started")]
    started: String,
    #[tabled(rename = "Status")]
    status: &'static str,
}

impl From<&Tournament> for TournamentRow {
    fn from(t: &Tournament) -> Self {
        Self {
            id: t.id.to_string(),
            name: t.name.clone(),
            started: format::date(t.start_date),
            status: if t.active { "active" } else { "finished" },
        }
    }
}

/// Execute `tournaments`.
pub async fn execute(reports: &LeagueReports) -> Result<()> {
    let spinner = output::spinner("Loading tournaments...");
    let tournaments = reports.tournaments().await;
    output::spinner_done(&spinner);

    if output::is_json() {
        output::json_output(json!({
            "command": "tournaments",
            "organization_id": reports.organization_id(),
            "tournaments": serde_json::to_value(&tournaments)?,
        }));
        return Ok(());
    }

    output::header("Tournaments", &format!("organization {}", reports.organization_id()));
    if tournaments.is_empty() {
        output::note("No tournaments found.");
        return Ok(());
    }

    let rows: Vec<TournamentRow> = tournaments.iter().map(TournamentRow::from).collect();
    output::lines(&Table::new(rows).to_string());
    output::hint(&format!(
        "run {} for standings",
        output::highlight("chiplead leaderboard <id>")
    ));
    Ok(())
}
