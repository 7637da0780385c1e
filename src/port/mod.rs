//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! ```text
//!      ┌──────────────┐      ┌──────────────────────┐      ┌──────────────┐
//!      │ CLI adapter  │ ───▶ │ Application (engine) │ ───▶ │ RecordSource │
//!      └──────────────┘      └──────────────────────┘      └──────┬───────┘
//!                                                                  │
//!                                                          ┌──────▼───────┐
//!                                                          │ League REST  │
//!                                                          │   adapter    │
//!                                                          └──────────────┘
//! ```

pub mod outbound;

pub use outbound::record_source::{RecordQuery, RecordSource};
