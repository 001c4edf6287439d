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
        battery::{BatteryDto, CreateBatteryDto},
    },
    service::battery::BatteryService,
};

pub static BATTERY_TAG: &str = "battery";

/// Register a battery unit for an organization
#[utoipa::path(
    post,
    path = "/api/orgs/{org_id}/batteries",
    tag = BATTERY_TAG,
    params(
        ("org_id" = i32, Path, description = "Owning organization ID")
    ),
    request_body = CreateBatteryDto,
    responses(
        (status = 201, description = "Battery registered", body = BatteryDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_battery(
    State(state): State<AppState>,
    Path(org_id): Path<i32>,
    Json(dto): Json<CreateBatteryDto>,
) -> Result<impl IntoResponse, Error> {
    let battery_service = BatteryService::new(&state.db);

    let battery = battery_service.create(org_id, dto).await?;

    Ok((StatusCode::CREATED, Json(battery)))
}

/// Get all batteries of an organization
#[utoipa::path(
    get,
    path = "/api/orgs/{org_id}/batteries",
    tag = BATTERY_TAG,
    params(
        ("org_id" = i32, Path, description = "Owning organization ID")
    ),
    responses(
        (status = 200, description = "Success when retrieving batteries", body = Vec<BatteryDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_batteries(
    State(state): State<AppState>,
    Path(org_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let battery_service = BatteryService::new(&state.db);

    let batteries = battery_service.list(org_id).await?;

    Ok((StatusCode::OK, Json(batteries)))
}

/// Remove a battery unit
#[utoipa::path(
    delete,
    path = "/api/batteries/{id}",
    tag = BATTERY_TAG,
    params(
        ("id" = i32, Path, description = "Battery ID")
    ),
    responses(
        (status = 204, description = "Battery removed"),
        (status = 404, description = "Battery not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_battery(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let battery_service = BatteryService::new(&state.db);

    battery_service.delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
