//! League REST API integration.

pub mod client;
pub mod dto;
pub mod query;
pub mod settings;

pub use client::LeagueApiClient;
pub use settings::{ApiConfig, HttpConfig, API_KEY_ENV};
