//! Tournament schedule with configs and played games joined in.

use std::cmp::Ordering;

use super::lookup::LookupMaps;
use crate::application::snapshot::LeagueSnapshot;
use crate::domain::{ScheduleEntry, ScheduledGame, TournamentId};

/// Undated schedules sort last; the rest by date, then time.
fn chronological(a: &ScheduledGame, b: &ScheduledGame) -> Ordering {
    match (a.date, b.date) {
        (Some(x), Some(y)) => x.cmp(&y).then_with(|| a.time.cmp(&b.time)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Every scheduled game of a tournament in calendar order.
pub fn build_schedule(snapshot: &LeagueSnapshot, tournament_id: &TournamentId) -> Vec<ScheduleEntry> {
    let maps = LookupMaps::build(snapshot);

    let mut schedules: Vec<&ScheduledGame> = snapshot
        .schedules
        .iter()
        .filter(|s| s.tournament_id.as_ref() == Some(tournament_id))
        .collect();
    schedules.sort_by(|a, b| chronological(a, b));

    schedules
        .into_iter()
        .map(|schedule| {
            let config = schedule
                .game_config_id
                .as_ref()
                .and_then(|id| maps.game_configs.get(id).copied());
            let game = maps.played_by_schedule.get(&schedule.id).copied();
            ScheduleEntry {
                schedule_id: schedule.id.clone(),
                date: schedule.date,
                time: schedule.time,
                week_number: schedule.week_number,
                status: schedule.status.clone(),
                config_name: config.map(|c| c.name.clone()),
                max_buy_in: config.map(|c| c.max_buy_in()),
                bounty: config.map(|c| c.bounty_amount),
                game_id: game.map(|g| g.id.clone()),
                player_count: game.and_then(|g| g.player_count),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ScheduleId;
    use crate::testkit::league::sample_league;
    use crate::testkit::records::schedule;
    use rust_decimal_macros::dec;

    #[test]
    fn schedule_joins_config_and_game() {
        let league = sample_league();
        let entries = build_schedule(&league, &TournamentId::from("t1"));

        assert_eq!(entries.len(), 3);
        let first = &entries[0];
        assert_eq!(first.config_name.as_deref(), Some("Weekly $20"));
        assert_eq!(first.max_buy_in, Some(dec!(40)));
        assert_eq!(first.bounty, Some(dec!(5)));
        assert_eq!(first.player_count, Some(3));
        assert!(first.is_played());
        assert!(!entries[2].is_played());
        assert_eq!(entries[2].status.as_deref(), Some("scheduled"));
    }

    #[test]
    fn undated_schedules_sort_last() {
        let snapshot = LeagueSnapshot {
            schedules: vec![
                schedule("none", Some("t1"), None),
                schedule("late", Some("t1"), Some("2024-03-01")),
                schedule("early", Some("t1"), Some("2024-01-01")),
                schedule("other", Some("t2"), Some("2023-01-01")),
            ],
            ..Default::default()
        };

        let ids: Vec<ScheduleId> = build_schedule(&snapshot, &TournamentId::from("t1"))
            .into_iter()
            .map(|e| e.schedule_id)
            .collect();
        assert_eq!(
            ids,
            vec![
                ScheduleId::from("early"),
                ScheduleId::from("late"),
                ScheduleId::from("none")
            ]
        );
    }

    #[test]
    fn missing_config_leaves_buy_in_empty() {
        let snapshot = LeagueSnapshot {
            schedules: vec![schedule("s1", Some("t1"), Some("2024-01-01"))],
            ..Default::default()
        };

        let entries = build_schedule(&snapshot, &TournamentId::from("t1"));
        assert!(entries[0].config_name.is_none());
        assert!(entries[0].max_buy_in.is_none());
        assert!(!entries[0].is_played());
    }
}
