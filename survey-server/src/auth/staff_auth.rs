//! Staff JWT authentication for the report API

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use shared::error::AppError;

use crate::state::AppState;

/// JWT claims issued by the login workflow
#[derive(Debug, Serialize, Deserialize)]
pub struct StaffClaims {
    /// Staff username
    pub sub: String,
    /// Expiration (Unix timestamp seconds)
    pub exp: usize,
    /// Issued at (Unix timestamp seconds)
    pub iat: usize,
}

/// Authenticated staff member extracted from JWT
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaffIdentity {
    pub username: String,
}

const JWT_EXPIRY_HOURS: i64 = 12;

/// Create a JWT token for a staff member
#[allow(dead_code)]
pub fn create_token(username: &str, secret: &str) -> Result<String, jsonwebtoken::errors::Error> {
    let now = chrono::Utc::now();
    let claims = StaffClaims {
        sub: username.to_string(),
        exp: (now + chrono::Duration::hours(JWT_EXPIRY_HOURS)).timestamp() as usize,
        iat: now.timestamp() as usize,
    };

    jsonwebtoken::encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
}

/// Verify a bearer token and return the staff identity it carries
pub fn verify_token(token: &str, secret: &str) -> Result<StaffIdentity, AppError> {
    let token_data = jsonwebtoken::decode::<StaffClaims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map_err(|e| {
        tracing::debug!("JWT validation failed: {e}");
        match e.kind() {
            jsonwebtoken::errors::ErrorKind::ExpiredSignature => AppError::token_expired(),
            _ => AppError::invalid_token("Invalid token"),
        }
    })?;

    if token_data.claims.sub.is_empty() {
        return Err(AppError::invalid_token("Token has no subject"));
    }

    Ok(StaffIdentity {
        username: token_data.claims.sub,
    })
}

/// Middleware that verifies the staff JWT from the Authorization header
pub async fn staff_auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, Response> {
    let auth_header = request
        .headers()
        .get(http::header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| AppError::not_authenticated().into_response())?;

    let token = auth_header
        .strip_prefix("Bearer ")
        .ok_or_else(|| AppError::invalid_token("Invalid Authorization format").into_response())?;

    let identity = verify_token(token, &state.jwt_secret).map_err(IntoResponse::into_response)?;

    request.extensions_mut().insert(identity.clone());

    let mut response = next.run(request).await;
    // Lets the logging middleware attribute the request
    response.extensions_mut().insert(identity);
    Ok(response)
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::error::ErrorCode;

    const SECRET: &str = "test-secret";

    #[test]
    fn test_token_roundtrip() {
        let token = create_token("librarian", SECRET).unwrap();
        let identity = verify_token(&token, SECRET).unwrap();
        assert_eq!(identity.username, "librarian");
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let token = create_token("librarian", SECRET).unwrap();
        let err = verify_token(&token, "other-secret").unwrap_err();
        assert_eq!(err.code, ErrorCode::TokenInvalid);
    }

    #[test]
    fn test_expired_token_rejected() {
        let claims = StaffClaims {
            sub: "librarian".to_string(),
            exp: 1_000,
            iat: 0,
        };
        let token = jsonwebtoken::encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(SECRET.as_bytes()),
        )
        .unwrap();

        let err = verify_token(&token, SECRET).unwrap_err();
        assert_eq!(err.code, ErrorCode::TokenExpired);
    }

    #[test]
    fn test_garbage_token_rejected() {
        let err = verify_token("not.a.jwt", SECRET).unwrap_err();
        assert_eq!(err.code, ErrorCode::TokenInvalid);
    }
}
