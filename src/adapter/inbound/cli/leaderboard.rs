//! Handler for the `leaderboard` command, including `--watch`.

use std::sync::Arc;
use std::time::Duration;

use chrono::Local;
use serde_json::json;
use tabled::{Table, Tabled};
use tokio::task::JoinSet;
use tokio::time::MissedTickBehavior;
use tracing::{debug, info, warn};

use super::command::LeaderboardArgs;
use super::{format, output};
use crate::application::{LatestView, LeagueReports};
use crate::domain::{Leaderboard, LeaderboardEntry, TournamentId};
use crate::error::Result;

#[derive(Tabled)]
struct LeaderboardRow {
    #[tabled(rename = "#")]
    rank: usize,
    #[tabled(rename = "Player")]
    player: String,
    #[tabled(rename = "Games")]
    games: u32,
    #[tabled(rename = "Points")]
    points: i64,
    #[tabled(rename = "Winnings")]
    winnings: String,
    #[tabled(rename = "KOs")]
    knockouts: u32,
    #[tabled(rename = "Bounties")]
    bounties: String,
    #[tabled(rename = "Avg Pts")]
    average: String,
}

impl From<&LeaderboardEntry> for LeaderboardRow {
    fn from(entry: &LeaderboardEntry) -> Self {
        let player = match &entry.nickname {
            Some(nick) if !nick.trim().is_empty() && nick != &entry.display_name => {
                format!("{} ({nick})", entry.display_name)
            }
            _ => entry.display_name.clone(),
        };
        Self {
            rank: entry.rank,
            player,
            games: entry.games_played,
            points: entry.points,
            winnings: format::money(entry.winnings),
            knockouts: entry.knockouts,
            bounties: format::money(entry.bounties),
            average: format::average(entry.average_points),
        }
    }
}

fn render(board: &Leaderboard) -> Result<()> {
    if output::is_json() {
        output::json_output(json!({
            "command": "leaderboard",
            "leaderboard": serde_json::to_value(board)?,
        }));
        return Ok(());
    }

    output::header(
        &format!("Leaderboard {}", board.tournament_id),
        &format!("by {}", board.metric),
    );
    if board.entries.is_empty() {
        output::note("No standings recorded for this tournament.");
        return Ok(());
    }

    let rows: Vec<LeaderboardRow> = board.entries.iter().map(LeaderboardRow::from).collect();
    output::lines(&Table::new(rows).to_string());

    let unknown = board.entries.iter().filter(|e| !e.known_player).count();
    if unknown > 0 {
        output::warning(&format!(
            "{unknown} standing(s) reference players missing from the directory"
        ));
    }
    Ok(())
}

/// Execute `leaderboard`.
pub async fn execute(reports: Arc<LeagueReports>, args: &LeaderboardArgs) -> Result<()> {
    let tournament_id = TournamentId::new(args.tournament.trim());

    if let Some(secs) = args.watch {
        return watch(reports, tournament_id, args, Duration::from_secs(secs)).await;
    }

    let spinner = output::spinner("Loading standings...");
    let board = reports
        .leaderboard(&tournament_id, args.by, args.tie_break)
        .await;
    output::spinner_done(&spinner);

    render(&board)
}

/// Refresh on a fixed interval until Ctrl-C.
///
/// Refreshes are spawned rather than awaited in turn, so a slow fetch can
/// still be running when the next tick fires. Only the refresh that is still
/// the latest when it finishes gets rendered.
async fn watch(
    reports: Arc<LeagueReports>,
    tournament_id: TournamentId,
    args: &LeaderboardArgs,
    period: Duration,
) -> Result<()> {
    let view: Arc<LatestView<Leaderboard>> = Arc::new(LatestView::new());
    let mut ticker = tokio::time::interval(period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    let mut inflight = JoinSet::new();

    let shutdown = tokio::signal::ctrl_c();
    tokio::pin!(shutdown);

    info!(tournament = %tournament_id, period_secs = period.as_secs(), "Watching leaderboard");
    output::note(&format!(
        "Refreshing every {}s, press Ctrl-C to stop",
        period.as_secs()
    ));

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                let reports = Arc::clone(&reports);
                let view = Arc::clone(&view);
                let tournament_id = tournament_id.clone();
                let (metric, tie_break) = (args.by, args.tie_break);
                inflight.spawn(async move {
                    reports
                        .refresh_leaderboard(&view, &tournament_id, metric, tie_break)
                        .await
                });
            }
            Some(joined) = inflight.join_next() => match joined {
                Ok(Some(board)) => {
                    if !output::is_json() {
                        output::section(&format!("Updated {}", Local::now().format("%H:%M:%S")));
                    }
                    render(&board)?;
                }
                Ok(None) => debug!("Superseded refresh dropped"),
                Err(e) => warn!(error = %e, "Leaderboard refresh task failed"),
            },
            result = &mut shutdown => {
                if let Err(e) = result {
                    warn!(error = %e, "Failed to listen for Ctrl-C");
                }
                break;
            }
        }
    }

    inflight.abort_all();
    info!("Stopped watching leaderboard");
    Ok(())
}
