//! Shared test utilities available to both unit and integration tests.
//!
//! Enabled via `#[cfg(test)]` (unit tests) or the `testkit` feature
//! (integration tests).
//!
//! # Modules
//!
//! - [`records`] - Builders for league records: tournaments, schedules,
//!   participations, standings, points tables and prizes.
//! - [`source`] - [`InMemorySource`](source::InMemorySource), a scriptable
//!   [`RecordSource`](crate::port::RecordSource).
//! - [`league`] - A small, fully linked league used by end-to-end tests.

pub mod league;
pub mod records;
pub mod source;
