//! Area utilization report endpoints

use axum::{
    extract::{
        Path, Query, State,
        rejection::{PathRejection, QueryRejection},
    },
    http::header,
    response::{IntoResponse, Response},
};
use shared::error::{ApiResponse, AppError};
use shared::models::AreaUtilizationReport;
use shared::request::{AreaReportQuery, AreaReportRequest};

use crate::auth::RequestContext;
use crate::db::survey_queries::PgSurveyStore;
use crate::error::ServiceResult;
use crate::report::AreaUtilizationReporter;
use crate::state::AppState;

/// GET /api/report/area-use?survey_id=N
///
/// One line per area, `text/plain`.
pub async fn area_use_text(
    State(state): State<AppState>,
    ctx: RequestContext,
    query: Result<Query<AreaReportQuery>, QueryRejection>,
) -> ServiceResult<Response> {
    let Query(query) = query.map_err(|e| AppError::validation(e.body_text()))?;
    let request = AreaReportRequest::try_from(query)?;
    let report = build_report(&state, &ctx, request).await?;

    Ok((
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        report.render(),
    )
        .into_response())
}

/// GET /api/surveys/{survey_id}/area-use
pub async fn area_use_json(
    State(state): State<AppState>,
    ctx: RequestContext,
    survey_id: Result<Path<String>, PathRejection>,
) -> ServiceResult<ApiResponse<AreaUtilizationReport>> {
    let Path(survey_id) = survey_id.map_err(|e| AppError::validation(e.body_text()))?;
    let request = AreaReportRequest::parse(&survey_id)?;
    let report = build_report(&state, &ctx, request).await?;
    Ok(ApiResponse::success(report))
}

/// Run the reporter on a connection held for this request only.
///
/// The connection goes back to the pool when it drops, whichever way the
/// report ends.
async fn build_report(
    state: &AppState,
    ctx: &RequestContext,
    request: AreaReportRequest,
) -> ServiceResult<AreaUtilizationReport> {
    let mut conn = state.pool.acquire().await?;
    let mut reporter = AreaUtilizationReporter::new(PgSurveyStore::new(&mut *conn));
    let report = reporter.report(request.survey_id).await?;

    tracing::info!(
        request_id = %ctx.request_id,
        user = %ctx.staff.username,
        survey_id = request.survey_id,
        layout_id = report.layout_id,
        areas = report.areas.len(),
        "Area utilization report built"
    );

    Ok(report)
}
