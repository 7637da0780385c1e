//! Handler for the `player` command.

use serde_json::json;
use tabled::{Table, Tabled};

use super::command::PlayerArgs;
use super::{format, output};
use crate::application::{LeagueReports, PlayerReport};
use crate::domain::{GameHistoryEntry, PlayerId, TournamentId, TournamentStats};
use crate::error::Result;

#[derive(Tabled)]
struct TournamentStatsRow {
    #[tabled(rename = "Tournament")]
    tournament: String,
    #[tabled(rename = "Games")]
    games: u32,
    #[tabled(rename = "Points")]
    points: i64,
    #[tabled(rename = "Earnings")]
    earnings: String,
    #[tabled(rename = "KOs")]
    knockouts: u32,
    #[tabled(rename = "Best")]
    best: String,
    #[tabled(rename = "Avg Pts")]
    average: String,
}

impl From<&TournamentStats> for TournamentStatsRow {
    fn from(stats: &TournamentStats) -> Self {
        Self {
            tournament: stats
                .tournament_name
                .clone()
                .unwrap_or_else(|| stats.tournament_id.to_string()),
            games: stats.games_played,
            points: stats.total_points,
            earnings: format::money(stats.total_earnings),
            knockouts: stats.knockouts,
            best: format::position(stats.best_position),
            average: format::average(stats.average_points),
        }
    }
}

#[derive(Tabled)]
struct HistoryRow {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Week")]
    week: String,
    #[tabled(rename = "Place")]
    place: String,
    #[tabled(rename = "Points")]
    points: i64,
    #[tabled(rename = "Prize")]
    prize: String,
    #[tabled(rename = "KOs")]
    knockouts: u32,
}

impl From<&GameHistoryEntry> for HistoryRow {
    fn from(entry: &GameHistoryEntry) -> Self {
        Self {
            date: format::date(Some(entry.game_date)),
            week: format::week(entry.week_number),
            place: format::ordinal(entry.position),
            points: entry.points,
            prize: format::optional_money(entry.prize),
            knockouts: entry.knockouts,
        }
    }
}

fn print_career(report: &PlayerReport) {
    let career = &report.career;
    output::header(&career.display_name, &format!("player {}", career.player_id));

    output::section("Career");
    output::field("Tournaments", career.tournaments.len());
    output::field("Games", career.games_played);
    output::field("Points", career.total_points);
    output::field("Earnings", format::money(career.total_earnings));
    output::field("Knockouts", career.knockouts);
    output::field("Bounties", format::money(career.bounties));
    output::field("Best finish", format::position(career.best_position));
    output::field("Worst finish", format::position(career.worst_position));
    output::field(
        "Avg finish",
        career
            .average_position
            .map_or_else(|| format::EMPTY.to_string(), format::average),
    );
}

/// Execute `player`.
pub async fn execute(reports: &LeagueReports, args: &PlayerArgs) -> Result<()> {
    let player_id = PlayerId::new(args.player.trim());
    let tournament_id = args
        .tournament
        .as_deref()
        .map(|t| TournamentId::new(t.trim()));

    let spinner = output::spinner("Loading player...");
    let report = reports
        .player_report(&player_id, tournament_id.as_ref())
        .await;
    output::spinner_done(&spinner);

    if output::is_json() {
        let history = if args.history {
            serde_json::to_value(&report.history)?
        } else {
            serde_json::Value::Null
        };
        output::json_output(json!({
            "command": "player",
            "career": serde_json::to_value(&report.career)?,
            "history": history,
        }));
        return Ok(());
    }

    print_career(&report);

    if report.career.tournaments.is_empty() {
        output::note("No tournament standings for this player.");
    } else {
        output::section("By Tournament");
        let rows: Vec<TournamentStatsRow> = report
            .career
            .tournaments
            .iter()
            .map(TournamentStatsRow::from)
            .collect();
        output::lines(&Table::new(rows).to_string());
    }

    if args.history {
        let title = match &tournament_id {
            Some(t) => format!("Games in {t}"),
            None => "Games".to_string(),
        };
        output::section(&title);
        if report.history.is_empty() {
            output::note("No finished games.");
        } else {
            let rows: Vec<HistoryRow> = report.history.iter().map(HistoryRow::from).collect();
            output::lines(&Table::new(rows).to_string());
        }
    } else if !report.history.is_empty() {
        output::hint(&format!(
            "add {} to list every game",
            output::highlight("--history")
        ));
    }

    Ok(())
}
