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
        team::{CreateTeamMemberDto, TeamMemberDto, UpdateTeamMemberDto},
    },
    service::team::TeamService,
};

pub static TEAM_TAG: &str = "team";

/// Add a roster member to an organization
#[utoipa::path(
    post,
    path = "/api/orgs/{org_id}/team-members",
    tag = TEAM_TAG,
    params(
        ("org_id" = i32, Path, description = "Owning organization ID")
    ),
    request_body = CreateTeamMemberDto,
    responses(
        (status = 201, description = "Team member added", body = TeamMemberDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_team_member(
    State(state): State<AppState>,
    Path(org_id): Path<i32>,
    Json(dto): Json<CreateTeamMemberDto>,
) -> Result<impl IntoResponse, Error> {
    let team_service = TeamService::new(&state.db);

    let member = team_service.create(org_id, dto).await?;

    Ok((StatusCode::CREATED, Json(member)))
}

/// Get all roster members of an organization
#[utoipa::path(
    get,
    path = "/api/orgs/{org_id}/team-members",
    tag = TEAM_TAG,
    params(
        ("org_id" = i32, Path, description = "Owning organization ID")
    ),
    responses(
        (status = 200, description = "Success when retrieving team members", body = Vec<TeamMemberDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_team_members(
    State(state): State<AppState>,
    Path(org_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let team_service = TeamService::new(&state.db);

    let members = team_service.list(org_id).await?;

    Ok((StatusCode::OK, Json(members)))
}

/// Update a roster member's contact fields
#[utoipa::path(
    put,
    path = "/api/team-members/{id}",
    tag = TEAM_TAG,
    params(
        ("id" = i32, Path, description = "Team member ID")
    ),
    request_body = UpdateTeamMemberDto,
    responses(
        (status = 200, description = "Team member updated", body = TeamMemberDto),
        (status = 404, description = "Team member not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_team_member(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(dto): Json<UpdateTeamMemberDto>,
) -> Result<impl IntoResponse, Error> {
    let team_service = TeamService::new(&state.db);

    let member = team_service.update(id, dto).await?;

    Ok((StatusCode::OK, Json(member)))
}

/// Remove a roster member
#[utoipa::path(
    delete,
    path = "/api/team-members/{id}",
    tag = TEAM_TAG,
    params(
        ("id" = i32, Path, description = "Team member ID")
    ),
    responses(
        (status = 204, description = "Team member removed"),
        (status = 404, description = "Team member not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_team_member(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let team_service = TeamService::new(&state.db);

    team_service.delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
