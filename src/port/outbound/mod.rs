//! Outbound ports (driven side): interfaces implemented by outbound adapters.
//!
//! The only infrastructure dependency of the reporting core is the league
//! record source.

pub mod record_source;
