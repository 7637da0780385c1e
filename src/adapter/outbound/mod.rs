//! Outbound adapters (driven side).

pub mod league_api;
