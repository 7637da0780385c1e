//! Handler for the `summary` command.

use serde_json::json;

use super::command::TournamentArg;
use super::{format, output};
use crate::application::LeagueReports;
use crate::domain::TournamentId;
use crate::error::Result;

/// Execute `summary`.
pub async fn execute(reports: &LeagueReports, args: &TournamentArg) -> Result<()> {
    let tournament_id = TournamentId::new(args.tournament.trim());

    let spinner = output::spinner("Loading tournament...");
    let summary = reports.summary(&tournament_id).await;
    output::spinner_done(&spinner);

    if output::is_json() {
        output::json_output(json!({
            "command": "summary",
            "summary": serde_json::to_value(&summary)?,
        }));
        return Ok(());
    }

    let title = summary
        .name
        .clone()
        .unwrap_or_else(|| format!("Tournament {tournament_id}"));
    output::header(&title, &format!("tournament {tournament_id}"));

    output::section("Games");
    output::field("Scheduled", summary.scheduled_games);
    output::field("Played", summary.played_games);
    output::field("Avg field", format::average(summary.average_field_size));

    output::section("Players");
    output::field("Unique", summary.unique_players);
    output::field("Prize money", format::money(summary.total_prize_money));

    output::section("Points Leader");
    match &summary.points_leader {
        Some(leader) => {
            output::field("Player", output::highlight(&leader.display_name));
            output::field("Points", leader.points);
            output::field("Games", leader.games_played);
            output::field("Winnings", format::money(leader.winnings));
        }
        None => output::note("No standings yet."),
    }

    Ok(())
}
