//! Unified service-layer error type for survey-server
//!
//! `ServiceError` bridges the gap between DB-layer errors (`sqlx::Error`) and the
//! API-layer error (`AppError`). It enables `?` propagation without manual
//! `.map_err(|e| { tracing::error!(...); AppError::new(...) })` boilerplate.

use axum::response::IntoResponse;
use shared::error::{AppError, ErrorCode};

use crate::report::ReportError;

/// Service-layer error
///
/// - `Db`: Datastore errors (auto-logged, mapped to DatabaseError / DatabaseUnavailable)
/// - `App`: Business-rule errors (transparent pass-through to client)
#[derive(Debug)]
pub enum ServiceError {
    /// Datastore unreachable or query failure
    Db(sqlx::Error),
    /// Business-rule error (already an AppError with the correct ErrorCode)
    App(AppError),
}

impl From<sqlx::Error> for ServiceError {
    fn from(e: sqlx::Error) -> Self {
        ServiceError::Db(e)
    }
}

impl From<AppError> for ServiceError {
    fn from(e: AppError) -> Self {
        ServiceError::App(e)
    }
}

impl From<ReportError> for ServiceError {
    fn from(e: ReportError) -> Self {
        match e {
            ReportError::SurveyNotFound(survey_id) => {
                ServiceError::App(AppError::survey_not_found(survey_id))
            }
            ReportError::LayoutUnresolved(survey_id) => ServiceError::App(
                AppError::with_message(
                    ErrorCode::LayoutNotFound,
                    format!("Survey {survey_id} has no layout"),
                )
                .with_detail("survey_id", survey_id),
            ),
            ReportError::Store(db_err) => ServiceError::Db(db_err),
        }
    }
}

/// True when the pool could not hand out a working connection
fn is_unavailable(e: &sqlx::Error) -> bool {
    matches!(
        e,
        sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed
            | sqlx::Error::Io(_)
            | sqlx::Error::Tls(_)
    )
}

impl From<ServiceError> for AppError {
    fn from(e: ServiceError) -> Self {
        match e {
            ServiceError::App(app_err) => app_err,
            ServiceError::Db(db_err) if is_unavailable(&db_err) => {
                tracing::error!(error = %db_err, "Datastore unavailable");
                AppError::new(ErrorCode::DatabaseUnavailable)
            }
            ServiceError::Db(db_err) => {
                tracing::error!(error = %db_err, "Service database error");
                AppError::new(ErrorCode::DatabaseError)
            }
        }
    }
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> axum::response::Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

/// Convenience type alias for service-layer results
pub type ServiceResult<T> = Result<T, ServiceError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_survey_not_found_maps_to_404() {
        let err: AppError = ServiceError::from(ReportError::SurveyNotFound(9)).into();
        assert_eq!(err.code, ErrorCode::SurveyNotFound);
        assert_eq!(err.http_status(), http::StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_layout_unresolved_maps_to_404() {
        let err: AppError = ServiceError::from(ReportError::LayoutUnresolved(3)).into();
        assert_eq!(err.code, ErrorCode::LayoutNotFound);
        assert_eq!(err.message, "Survey 3 has no layout");
    }

    #[test]
    fn test_pool_timeout_is_unavailable() {
        let err: AppError = ServiceError::from(sqlx::Error::PoolTimedOut).into();
        assert_eq!(err.code, ErrorCode::DatabaseUnavailable);
        assert_eq!(err.http_status(), http::StatusCode::SERVICE_UNAVAILABLE);
    }

    #[test]
    fn test_query_failure_is_internal() {
        let err: AppError = ServiceError::from(sqlx::Error::RowNotFound).into();
        assert_eq!(err.code, ErrorCode::DatabaseError);
        assert_eq!(err.http_status(), http::StatusCode::INTERNAL_SERVER_ERROR);
    }
}
