use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    error::Error,
    model::{
        api::ErrorDto,
        app::AppState,
        report::{OneTimeReportDto, RecurringReportDto},
    },
    service::report::ReportService,
};

pub static REPORT_TAG: &str = "report";

/// Get the one-time compliance report payload for a drone
#[utoipa::path(
    get,
    path = "/api/drones/{id}/reports/one-time",
    tag = REPORT_TAG,
    params(
        ("id" = i32, Path, description = "Drone ID")
    ),
    responses(
        (status = 200, description = "Success when building the report", body = OneTimeReportDto),
        (status = 404, description = "Drone not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_one_time_report(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let report_service = ReportService::new(&state.db);

    let report = report_service.one_time(id).await?;

    Ok((StatusCode::OK, Json(report)))
}

/// Get the recurring compliance report payload for a drone
#[utoipa::path(
    get,
    path = "/api/drones/{id}/reports/recurring",
    tag = REPORT_TAG,
    params(
        ("id" = i32, Path, description = "Drone ID")
    ),
    responses(
        (status = 200, description = "Success when building the report", body = RecurringReportDto),
        (status = 404, description = "Drone not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_recurring_report(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let report_service = ReportService::new(&state.db);

    let report = report_service.recurring(id).await?;

    Ok((StatusCode::OK, Json(report)))
}
