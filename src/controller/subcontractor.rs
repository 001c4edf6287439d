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
        subcontractor::{CreateSubcontractorDto, SubcontractorDto},
    },
    service::subcontractor::SubcontractorService,
};

pub static SUBCONTRACTOR_TAG: &str = "subcontractor";

/// Record a subcontractor agreement for an organization
#[utoipa::path(
    post,
    path = "/api/orgs/{org_id}/subcontractors",
    tag = SUBCONTRACTOR_TAG,
    params(
        ("org_id" = i32, Path, description = "Owning organization ID")
    ),
    request_body = CreateSubcontractorDto,
    responses(
        (status = 201, description = "Subcontractor recorded", body = SubcontractorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_subcontractor(
    State(state): State<AppState>,
    Path(org_id): Path<i32>,
    Json(dto): Json<CreateSubcontractorDto>,
) -> Result<impl IntoResponse, Error> {
    let subcontractor_service = SubcontractorService::new(&state.db);

    let subcontractor = subcontractor_service.create(org_id, dto).await?;

    Ok((StatusCode::CREATED, Json(subcontractor)))
}

/// Get all subcontractors of an organization
#[utoipa::path(
    get,
    path = "/api/orgs/{org_id}/subcontractors",
    tag = SUBCONTRACTOR_TAG,
    params(
        ("org_id" = i32, Path, description = "Owning organization ID")
    ),
    responses(
        (status = 200, description = "Success when retrieving subcontractors", body = Vec<SubcontractorDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_subcontractors(
    State(state): State<AppState>,
    Path(org_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let subcontractor_service = SubcontractorService::new(&state.db);

    let subcontractors = subcontractor_service.list(org_id).await?;

    Ok((StatusCode::OK, Json(subcontractors)))
}

/// Replace a subcontractor's agreement details
#[utoipa::path(
    put,
    path = "/api/subcontractors/{id}",
    tag = SUBCONTRACTOR_TAG,
    params(
        ("id" = i32, Path, description = "Subcontractor ID")
    ),
    request_body = CreateSubcontractorDto,
    responses(
        (status = 200, description = "Subcontractor updated", body = SubcontractorDto),
        (status = 404, description = "Subcontractor not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_subcontractor(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(dto): Json<CreateSubcontractorDto>,
) -> Result<impl IntoResponse, Error> {
    let subcontractor_service = SubcontractorService::new(&state.db);

    let subcontractor = subcontractor_service.update(id, dto).await?;

    Ok((StatusCode::OK, Json(subcontractor)))
}

/// Remove a subcontractor agreement
#[utoipa::path(
    delete,
    path = "/api/subcontractors/{id}",
    tag = SUBCONTRACTOR_TAG,
    params(
        ("id" = i32, Path, description = "Subcontractor ID")
    ),
    responses(
        (status = 204, description = "Subcontractor removed"),
        (status = 404, description = "Subcontractor not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_subcontractor(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let subcontractor_service = SubcontractorService::new(&state.db);

    subcontractor_service.delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
