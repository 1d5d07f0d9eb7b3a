//! Per-request context extractor
//!
//! Handlers receive the authenticated staff member explicitly instead of
//! reading ambient session state.

use axum::{extract::FromRequestParts, http::request::Parts};
use shared::error::AppError;

use super::StaffIdentity;
use crate::middleware::logging::RequestId;

/// Identity and trace id of the request being served
#[derive(Debug, Clone)]
pub struct RequestContext {
    pub staff: StaffIdentity,
    pub request_id: String,
}

impl<S: Send + Sync> FromRequestParts<S> for RequestContext {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        // Inserted by staff_auth_middleware
        let staff = parts
            .extensions
            .get::<StaffIdentity>()
            .cloned()
            .ok_or_else(AppError::not_authenticated)?;

        let request_id = parts
            .extensions
            .get::<RequestId>()
            .map(|id| id.0.clone())
            .unwrap_or_else(|| uuid::Uuid::new_v4().to_string());

        Ok(Self { staff, request_id })
    }
}
