use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    error::Error,
    model::{
        api::ErrorDto,
        app::AppState,
        checklist::RecurringCategory,
        drone::{
            AppendRecurringDto, AssignManagerDto, CreateDroneDto, DroneChecklistDto, DroneDto,
            UpdateUnitsDto, UpdateUploadsDto, UpdateWebPortalDto, VersionDto,
        },
    },
    service::drone::DroneService,
};

pub static DRONE_TAG: &str = "drone";

/// Register a new drone model
#[utoipa::path(
    post,
    path = "/api/orgs/{org_id}/drones",
    tag = DRONE_TAG,
    params(
        ("org_id" = i32, Path, description = "Owning organization ID")
    ),
    request_body = CreateDroneDto,
    responses(
        (status = 201, description = "Drone registered", body = DroneChecklistDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_drone(
    State(state): State<AppState>,
    Path(org_id): Path<i32>,
    Json(dto): Json<CreateDroneDto>,
) -> Result<impl IntoResponse, Error> {
    let drone_service = DroneService::new(&state.db);

    let drone = drone_service.create(org_id, dto).await?;

    Ok((StatusCode::CREATED, Json(drone)))
}

/// Get all drones of an organization
#[utoipa::path(
    get,
    path = "/api/orgs/{org_id}/drones",
    tag = DRONE_TAG,
    params(
        ("org_id" = i32, Path, description = "Owning organization ID")
    ),
    responses(
        (status = 200, description = "Success when retrieving drones", body = Vec<DroneDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_drones(
    State(state): State<AppState>,
    Path(org_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let drone_service = DroneService::new(&state.db);

    let drones = drone_service.list(org_id).await?;

    Ok((StatusCode::OK, Json(drones)))
}

/// Get a drone snapshot with its derived checklist state
#[utoipa::path(
    get,
    path = "/api/drones/{id}",
    tag = DRONE_TAG,
    params(
        ("id" = i32, Path, description = "Drone ID")
    ),
    responses(
        (status = 200, description = "Success when retrieving the drone", body = DroneChecklistDto),
        (status = 404, description = "Drone not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_drone_checklist(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let drone_service = DroneService::new(&state.db);

    let drone = drone_service.get_checklist(id).await?;

    Ok((StatusCode::OK, Json(drone)))
}

/// Delete a drone
#[utoipa::path(
    delete,
    path = "/api/drones/{id}",
    tag = DRONE_TAG,
    params(
        ("id" = i32, Path, description = "Drone ID")
    ),
    responses(
        (status = 204, description = "Drone deleted"),
        (status = 404, description = "Drone not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_drone(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let drone_service = DroneService::new(&state.db);

    drone_service.delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Nominate the accountable manager for a drone
#[utoipa::path(
    put,
    path = "/api/drones/{id}/manager",
    tag = DRONE_TAG,
    params(
        ("id" = i32, Path, description = "Drone ID")
    ),
    request_body = AssignManagerDto,
    responses(
        (status = 200, description = "Manager assigned", body = DroneChecklistDto),
        (status = 404, description = "Drone not found", body = ErrorDto),
        (status = 409, description = "Version token is stale", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn assign_manager(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(dto): Json<AssignManagerDto>,
) -> Result<impl IntoResponse, Error> {
    let drone_service = DroneService::new(&state.db);

    let drone = drone_service.assign_manager(id, dto).await?;

    Ok((StatusCode::OK, Json(drone)))
}

/// Save uploaded file references into one of the drone's upload slots
#[utoipa::path(
    put,
    path = "/api/drones/{id}/uploads",
    tag = DRONE_TAG,
    params(
        ("id" = i32, Path, description = "Drone ID")
    ),
    request_body = UpdateUploadsDto,
    responses(
        (status = 200, description = "Upload slot updated", body = DroneChecklistDto),
        (status = 400, description = "Empty upload batch", body = ErrorDto),
        (status = 404, description = "Drone not found", body = ErrorDto),
        (status = 409, description = "Version token is stale", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_uploads(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(dto): Json<UpdateUploadsDto>,
) -> Result<impl IntoResponse, Error> {
    let drone_service = DroneService::new(&state.db);

    let drone = drone_service.update_uploads(id, dto).await?;

    Ok((StatusCode::OK, Json(drone)))
}

/// Replace the drone's web portal link
#[utoipa::path(
    put,
    path = "/api/drones/{id}/web-portal",
    tag = DRONE_TAG,
    params(
        ("id" = i32, Path, description = "Drone ID")
    ),
    request_body = UpdateWebPortalDto,
    responses(
        (status = 200, description = "Web portal link updated", body = DroneChecklistDto),
        (status = 404, description = "Drone not found", body = ErrorDto),
        (status = 409, description = "Version token is stale", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_web_portal(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(dto): Json<UpdateWebPortalDto>,
) -> Result<impl IntoResponse, Error> {
    let drone_service = DroneService::new(&state.db);

    let drone = drone_service.update_web_portal(id, dto).await?;

    Ok((StatusCode::OK, Json(drone)))
}

/// Replace the drone's manufactured-unit list
#[utoipa::path(
    put,
    path = "/api/drones/{id}/units",
    tag = DRONE_TAG,
    params(
        ("id" = i32, Path, description = "Drone ID")
    ),
    request_body = UpdateUnitsDto,
    responses(
        (status = 200, description = "Unit list replaced", body = DroneChecklistDto),
        (status = 400, description = "A unit has an empty serial number or UIN", body = ErrorDto),
        (status = 404, description = "Drone not found", body = ErrorDto),
        (status = 409, description = "Version token is stale", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_units(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(dto): Json<UpdateUnitsDto>,
) -> Result<impl IntoResponse, Error> {
    let drone_service = DroneService::new(&state.db);

    let drone = drone_service.update_units(id, dto).await?;

    Ok((StatusCode::OK, Json(drone)))
}

/// Append one recurring compliance record
#[utoipa::path(
    post,
    path = "/api/drones/{id}/recurring",
    tag = DRONE_TAG,
    params(
        ("id" = i32, Path, description = "Drone ID")
    ),
    request_body = AppendRecurringDto,
    responses(
        (status = 200, description = "Record appended", body = DroneChecklistDto),
        (status = 400, description = "A required record field is missing", body = ErrorDto),
        (status = 404, description = "Drone not found", body = ErrorDto),
        (status = 409, description = "Version token is stale", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn append_recurring_record(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(dto): Json<AppendRecurringDto>,
) -> Result<impl IntoResponse, Error> {
    let drone_service = DroneService::new(&state.db);

    let drone = drone_service.append_recurring(id, dto).await?;

    Ok((StatusCode::OK, Json(drone)))
}

/// Delete the recurring record at a display index
#[utoipa::path(
    delete,
    path = "/api/drones/{id}/recurring/{category}/{index}",
    tag = DRONE_TAG,
    params(
        ("id" = i32, Path, description = "Drone ID"),
        ("category" = RecurringCategory, Path, description = "Recurring category"),
        ("index" = usize, Path, description = "0-based record index"),
        ("version" = i32, Query, description = "Version token from the caller's snapshot")
    ),
    responses(
        (status = 200, description = "Record deleted", body = DroneChecklistDto),
        (status = 400, description = "Index out of bounds or category keeps an immutable audit trail", body = ErrorDto),
        (status = 404, description = "Drone not found", body = ErrorDto),
        (status = 409, description = "Version token is stale", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_recurring_record(
    State(state): State<AppState>,
    Path((id, category, index)): Path<(i32, RecurringCategory, usize)>,
    Query(query): Query<VersionDto>,
) -> Result<impl IntoResponse, Error> {
    let drone_service = DroneService::new(&state.db);

    let drone = drone_service
        .delete_recurring(id, category, index, query.version)
        .await?;

    Ok((StatusCode::OK, Json(drone)))
}

/// Mark pending personnel changes as reported to the DGCA
#[utoipa::path(
    post,
    path = "/api/drones/{id}/recurring/personnel/reported",
    tag = DRONE_TAG,
    params(
        ("id" = i32, Path, description = "Drone ID")
    ),
    request_body = VersionDto,
    responses(
        (status = 200, description = "Personnel changes marked reported", body = DroneChecklistDto),
        (status = 404, description = "Drone not found", body = ErrorDto),
        (status = 409, description = "Version token is stale", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn mark_personnel_reported(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(dto): Json<VersionDto>,
) -> Result<impl IntoResponse, Error> {
    let drone_service = DroneService::new(&state.db);

    let drone = drone_service.mark_personnel_reported(id, dto.version).await?;

    Ok((StatusCode::OK, Json(drone)))
}
