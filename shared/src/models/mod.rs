//! Data models
//!
//! Shared between the survey server and its clients (via API).
//! DB row types use `#[cfg_attr(feature = "db", derive(sqlx::FromRow))]`.
//! All IDs are `i64` (Postgres BIGINT).

pub mod area_report;

// Re-exports
pub use area_report::*;
