//! A small, fully linked league.
//!
//! Two tournaments sharing the points table `pts` (`{1→50, 2→30, 3→20}`):
//!
//! | Tournament | Schedule | Date       | Game | Finishers (player → place)   |
//! |------------|----------|------------|------|------------------------------|
//! | t1 Spring  | s1       | 2024-01-05 | g1   | p1 → 1, p2 → 2, p3 → 3       |
//! | t1 Spring  | s2       | 2024-01-12 | g2   | p2 → 1, p1 → 3, p3 → (none)  |
//! | t1 Spring  | s3       | 2024-01-19 | -    | unplayed                     |
//! | t2 Fall    | s4       | 2024-06-07 | g4   | p2 → 1, p1 → 2               |
//!
//! Prizes: g1 pays 100/50 for places 1/2, g2 pays 120 for first and an
//! explicit 0 for second, g4 pays 80 for first.

use chrono::NaiveTime;
use rust_decimal_macros::dec;

use super::records::{
    date, game_config, participation, played_game, player, prize, schedule, standard_points,
    standing, tournament,
};
use crate::application::snapshot::LeagueSnapshot;
use crate::domain::{GameConfigId, Standing};

/// Build the league described in the module docs.
pub fn sample_league() -> LeagueSnapshot {
    let mut spring = tournament("t1", Some("pts"));
    spring.name = "Spring League".into();
    spring.start_date = Some(date("2024-01-01"));
    let mut fall = tournament("t2", Some("pts"));
    fall.name = "Fall League".into();
    fall.active = false;
    fall.start_date = Some(date("2024-06-01"));

    let mut schedules = vec![
        schedule("s1", Some("t1"), Some("2024-01-05")),
        schedule("s2", Some("t1"), Some("2024-01-12")),
        schedule("s3", Some("t1"), Some("2024-01-19")),
        schedule("s4", Some("t2"), Some("2024-06-07")),
    ];
    for (week, s) in schedules.iter_mut().enumerate() {
        s.week_number = Some(week as u32 + 1);
        s.game_config_id = Some(GameConfigId::from("c1"));
        s.time = NaiveTime::from_hms_opt(19, 0, 0);
    }
    schedules[2].status = Some("scheduled".into());

    let mut weekly = game_config("c1", "Weekly $20", dec!(20));
    weekly.rebuy_count = 1;
    weekly.rebuy_amount = dec!(20);
    weekly.bounty_amount = dec!(5);

    let mut games = vec![
        played_game("g1", Some("t1"), Some("s1")),
        played_game("g2", Some("t1"), Some("s2")),
        played_game("g4", Some("t2"), Some("s4")),
    ];
    games[0].player_count = Some(3);
    games[1].player_count = Some(3);
    games[2].player_count = Some(2);

    let mut participations = vec![
        participation("r1", "t1", "g1", "p1", Some(1)),
        participation("r2", "t1", "g1", "p2", Some(2)),
        participation("r3", "t1", "g1", "p3", Some(3)),
        participation("r4", "t1", "g2", "p1", Some(3)),
        participation("r5", "t1", "g2", "p2", Some(1)),
        participation("r6", "t1", "g2", "p3", None),
        participation("r7", "t2", "g4", "p1", Some(2)),
        participation("r8", "t2", "g4", "p2", Some(1)),
    ];
    participations[0].knockouts = 2;
    participations[4].knockouts = 1;

    let standings = vec![
        Standing {
            total_earnings: dec!(100),
            knockouts: 2,
            ..standing("t1", "p1", 2, 70)
        },
        Standing {
            total_earnings: dec!(170),
            knockouts: 1,
            bounties: dec!(5),
            ..standing("t1", "p2", 2, 80)
        },
        standing("t1", "p3", 2, 20),
        standing("t2", "p1", 1, 30),
        Standing {
            total_earnings: dec!(80),
            ..standing("t2", "p2", 1, 50)
        },
    ];

    LeagueSnapshot {
        tournaments: vec![spring, fall],
        schedules,
        game_configs: vec![weekly],
        point_levels: standard_points("pts"),
        played_games: games,
        participations,
        players: vec![
            player("p1", "Ada", "Lovelace"),
            player("p2", "Alan", "Turing"),
            player("p3", "Grace", "Hopper"),
        ],
        standings,
        prizes: vec![
            prize("g1", 1, dec!(100)),
            prize("g1", 2, dec!(50)),
            prize("g2", 1, dec!(120)),
            prize("g2", 2, dec!(0)),
            prize("g4", 1, dec!(80)),
        ],
    }
}
