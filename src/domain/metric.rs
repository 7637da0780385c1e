//! Leaderboard sort criteria.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Metric a leaderboard is ranked by. Always descending.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LeaderboardMetric {
    #[default]
    Points,
    Winnings,
    Knockouts,
    Bounties,
}

impl LeaderboardMetric {
    pub const ALL: [Self; 4] = [Self::Points, Self::Winnings, Self::Knockouts, Self::Bounties];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Points => "points",
            Self::Winnings => "winnings",
            Self::Knockouts => "knockouts",
            Self::Bounties => "bounties",
        }
    }
}

impl fmt::Display for LeaderboardMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LeaderboardMetric {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "points" | "pts" => Ok(Self::Points),
            "winnings" | "earnings" | "money" => Ok(Self::Winnings),
            "knockouts" | "kos" => Ok(Self::Knockouts),
            "bounties" => Ok(Self::Bounties),
            other => Err(format!(
                "unknown metric '{other}' (expected points, winnings, knockouts or bounties)"
            )),
        }
    }
}

/// How players level on the chosen metric are ordered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TieBreak {
    /// Keep the order the standings arrived in.
    #[default]
    Source,
    /// Order level players by display name, case-insensitively.
    Name,
}

impl FromStr for TieBreak {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "source" => Ok(Self::Source),
            "name" => Ok(Self::Name),
            other => Err(format!("unknown tie-break '{other}' (expected source or name)")),
        }
    }
}
