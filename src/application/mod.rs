//! Application services (use cases).
//!
//! The report service fetches snapshots through the record source port and
//! hands them to the pure aggregation engine.

pub mod engine;
pub mod report;
pub mod snapshot;
pub mod supersession;

pub use report::{LeagueReports, PlayerReport};
pub use snapshot::{LeagueSnapshot, SnapshotScope};
pub use supersession::{LatestView, RequestSequence, RequestTicket};
