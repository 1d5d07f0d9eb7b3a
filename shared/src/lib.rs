//! Shared types for the library survey service
//!
//! Wire types used by the survey server and its clients: error codes,
//! the unified API response, survey report models and typed requests.

pub mod error;
pub mod models;
pub mod request;

// Re-exports
pub use axum::Json;
pub use http;
pub use serde::{Deserialize, Serialize};

pub use models::{AreaUsage, AreaUtilization, AreaUtilizationReport};
pub use request::AreaReportRequest;
