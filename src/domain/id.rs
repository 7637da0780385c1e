//! Domain identifier types with proper encapsulation.
//!
//! The league API is loosely typed: the same key may arrive as a JSON number
//! in one collection and as a string in another. Every identifier is
//! normalized to its string form at the ingestion boundary so that joins
//! compare like with like.

use std::fmt;

use serde::{Deserialize, Serialize};

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create a new identifier from a string.
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Get the identifier as a string slice.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self::new(s)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self::new(s)
            }
        }
    };
}

string_id!(
    /// Organization (league operator) identifier.
    OrganizationId
);

string_id!(
    /// Tournament identifier.
    TournamentId
);

string_id!(
    /// Scheduled game (calendar slot) identifier.
    ScheduleId
);

string_id!(
    /// Game configuration (buy-in structure) identifier.
    GameConfigId
);

string_id!(
    /// Played game instance identifier.
    GameId
);

string_id!(
    /// Participation row identifier.
    ParticipationId
);

string_id!(
    /// Player identifier, stable across tournaments.
    PlayerId
);

string_id!(
    /// Points table identifier.
    PointsTableId
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_compare_by_string_form() {
        assert_eq!(PlayerId::from("42"), PlayerId::new(String::from("42")));
        assert_ne!(GameId::from("1"), GameId::from("01"));
    }

    #[test]
    fn ids_serialize_transparently() {
        let json = serde_json::to_string(&TournamentId::from("t-7")).unwrap();
        assert_eq!(json, "\"t-7\"");
    }

    #[test]
    fn display_matches_inner_value() {
        assert_eq!(ScheduleId::from("s1").to_string(), "s1");
        assert_eq!(PointsTableId::from("p").as_str(), "p");
    }
}
