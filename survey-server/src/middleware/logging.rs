//! Request logging middleware
//!
//! Records every incoming HTTP request with its request id, the
//! authenticated staff member and the response status.

use axum::{
    extract::{MatchedPath, Request},
    middleware::Next,
    response::Response,
};
use std::time::Instant;
use tracing::{info, warn};

use crate::auth::StaffIdentity;

/// Request id as set by `SetRequestIdLayer`, made available to handlers
#[derive(Debug, Clone)]
pub struct RequestId(pub String);

/// Request logging middleware
///
/// Logs on completion:
/// - request id (x-request-id)
/// - HTTP method and matched path
/// - authenticated staff user (if any)
/// - response status
/// - latency (ms)
pub async fn logging_middleware(mut req: Request, next: Next) -> Response {
    let start = Instant::now();

    let request_id = req
        .headers()
        .get("x-request-id")
        .and_then(|v| v.to_str().ok())
        .map(|s| s.to_string())
        .unwrap_or_else(|| uuid::Uuid::new_v4().to_string());
    req.extensions_mut().insert(RequestId(request_id.clone()));

    let method = req.method().clone();
    let path = req
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_string())
        .unwrap_or_else(|| req.uri().path().to_string());

    let response = next.run(req).await;

    let latency = start.elapsed();
    let status = response.status();

    // Copied onto the response by staff_auth_middleware
    let user = response
        .extensions()
        .get::<StaffIdentity>()
        .map(|s| s.username.clone());

    if status.is_server_error() {
        warn!(
            request_id = %request_id,
            method = %method,
            path = %path,
            status = %status.as_u16(),
            latency_ms = %latency.as_millis(),
            user = ?user,
            "Request completed with server error"
        );
    } else if status.is_client_error() {
        warn!(
            request_id = %request_id,
            method = %method,
            path = %path,
            status = %status.as_u16(),
            latency_ms = %latency.as_millis(),
            user = ?user,
            "Request completed with client error"
        );
    } else {
        info!(
            request_id = %request_id,
            method = %method,
            path = %path,
            status = %status.as_u16(),
            latency_ms = %latency.as_millis(),
            user = ?user,
            "Request completed successfully"
        );
    }

    response
}
