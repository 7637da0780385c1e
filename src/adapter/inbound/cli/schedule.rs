//! Handler for the `schedule` command.

use serde_json::json;
use tabled::{Table, Tabled};

use super::command::TournamentArg;
use super::{format, output};
use crate::application::LeagueReports;
use crate::domain::{ScheduleEntry, TournamentId};
use crate::error::Result;

#[derive(Tabled)]
struct ScheduleRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Time")]
    time: String,
    #[tabled(rename = "Week")]
    week: String,
    #[tabled(rename = "Game")]
    config: String,
    #[tabled(rename = "Max Buy-in")]
    max_buy_in: String,
    #[tabled(rename = "Bounty")]
    bounty: String,
    #[tabled(rename = "Status")]
    status: String,
}

impl From<&ScheduleEntry> for ScheduleRow {
    fn from(entry: &ScheduleEntry) -> Self {
        let status = if entry.is_played() {
            match entry.player_count {
                Some(count) => format!("played ({count})"),
                None => "played".to_string(),
            }
        } else {
            format::text(entry.status.as_deref())
        };
        Self {
            id: entry.schedule_id.to_string(),
            date: format::date(entry.date),
            time: format::time(entry.time),
            week: format::week(entry.week_number),
            config: format::text(entry.config_name.as_deref()),
            max_buy_in: format::optional_money(entry.max_buy_in),
            bounty: format::optional_money(entry.bounty),
            status,
        }
    }
}

/// Execute `schedule`.
pub async fn execute(reports: &LeagueReports, args: &TournamentArg) -> Result<()> {
    let tournament_id = TournamentId::new(args.tournament.trim());

    let spinner = output::spinner("Loading schedule...");
    let entries = reports.schedule(&tournament_id).await;
    output::spinner_done(&spinner);

    if output::is_json() {
        output::json_output(json!({
            "command": "schedule",
            "tournament_id": tournament_id,
            "games": serde_json::to_value(&entries)?,
        }));
        return Ok(());
    }

    let played = entries.iter().filter(|e| e.is_played()).count();
    output::header(
        &format!("Schedule {tournament_id}"),
        &format!("{played} of {} played", entries.len()),
    );
    if entries.is_empty() {
        output::note("Nothing scheduled for this tournament.");
        return Ok(());
    }

    let rows: Vec<ScheduleRow> = entries.iter().map(ScheduleRow::from).collect();
    output::lines(&Table::new(rows).to_string());
    output::hint(&format!(
        "run {} for a played game's results",
        output::highlight("chiplead game <id>")
    ));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{GameId, ScheduleId};
    use rust_decimal_macros::dec;

    fn entry() -> ScheduleEntry {
        ScheduleEntry {
            schedule_id: ScheduleId::from("s1"),
            date: None,
            time: None,
            week_number: Some(1),
            status: Some("scheduled".to_string()),
            config_name: Some("Deepstack".to_string()),
            max_buy_in: Some(dec!(40)),
            bounty: None,
            game_id: None,
            player_count: None,
        }
    }

    #[test]
    fn unplayed_row_shows_source_status() {
        let row = ScheduleRow::from(&entry());
        assert_eq!(row.status, "scheduled");
        assert_eq!(row.max_buy_in, "$40.00");
        assert_eq!(row.bounty, "-");
        assert_eq!(row.date, "-");
    }

    #[test]
    fn played_row_shows_field_size() {
        let mut played = entry();
        played.game_id = Some(GameId::from("g1"));
        played.player_count = Some(9);
        assert_eq!(ScheduleRow::from(&played).status, "played (9)");
    }
}
