//! Staff authentication and per-request context

pub mod context;
pub mod staff_auth;

pub use context::RequestContext;
pub use staff_auth::StaffIdentity;
