use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::club::{AddTeamMemberRequest, CreateClubRequest, CreateTeamRequest},
    models::{Athlete, Club, Team},
};
use uuid::Uuid;
use validator::Validate;

use crate::error::WebResult;

use super::services;

#[utoipa::path(
    get,
    path = "/api/clubs",
    responses(
        (status = 200, description = "List all clubs", body = Vec<Club>)
    ),
    tag = "clubs"
)]
pub async fn list_clubs(State(db): State<Database>) -> WebResult<Response> {
    let clubs = services::list_clubs(db.pool()).await?;

    Ok(Json(clubs).into_response())
}

#[utoipa::path(
    get,
    path = "/api/clubs/{id}",
    params(
        ("id" = Uuid, Path, description = "Club ID")
    ),
    responses(
        (status = 200, description = "Club found", body = Club),
        (status = 404, description = "Club not found")
    ),
    tag = "clubs"
)]
pub async fn get_club(
    State(db): State<Database>,
    Path(id): Path<Uuid>,
) -> WebResult<Response> {
    let club = services::get_club(db.pool(), id).await?;

    Ok(Json(club).into_response())
}

#[utoipa::path(
    post,
    path = "/api/clubs",
    request_body = CreateClubRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 201, description = "Club created successfully", body = Club),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized")
    ),
    tag = "clubs"
)]
pub async fn create_club(
    State(db): State<Database>,
    Json(request): Json<CreateClubRequest>,
) -> WebResult<Response> {
    request.validate()?;

    let club = services::create_club(db.pool(), &request).await?;

    Ok((StatusCode::CREATED, Json(club)).into_response())
}

#[utoipa::path(
    delete,
    path = "/api/clubs/{id}",
    params(
        ("id" = Uuid, Path, description = "Club ID")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 204, description = "Club deleted"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Club not found")
    ),
    tag = "clubs"
)]
pub async fn delete_club(
    State(db): State<Database>,
    Path(id): Path<Uuid>,
) -> WebResult<Response> {
    services::delete_club(db.pool(), id).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}

#[utoipa::path(
    get,
    path = "/api/clubs/teams",
    responses(
        (status = 200, description = "List all teams", body = Vec<Team>)
    ),
    tag = "clubs"
)]
pub async fn list_teams(State(db): State<Database>) -> WebResult<Response> {
    let teams = services::list_teams(db.pool()).await?;

    Ok(Json(teams).into_response())
}

#[utoipa::path(
    post,
    path = "/api/clubs/teams",
    request_body = CreateTeamRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 201, description = "Team created successfully", body = Team),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized")
    ),
    tag = "clubs"
)]
pub async fn create_team(
    State(db): State<Database>,
    Json(request): Json<CreateTeamRequest>,
) -> WebResult<Response> {
    request.validate()?;

    let team = services::create_team(db.pool(), &request).await?;

    Ok((StatusCode::CREATED, Json(team)).into_response())
}

#[utoipa::path(
    delete,
    path = "/api/clubs/teams/{id}",
    params(
        ("id" = Uuid, Path, description = "Team ID")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 204, description = "Team deleted"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Team not found")
    ),
    tag = "clubs"
)]
pub async fn delete_team(
    State(db): State<Database>,
    Path(id): Path<Uuid>,
) -> WebResult<Response> {
    services::delete_team(db.pool(), id).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}

#[utoipa::path(
    post,
    path = "/api/clubs/teams/{id}/members",
    params(
        ("id" = Uuid, Path, description = "Team ID")
    ),
    request_body = AddTeamMemberRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 204, description = "Athlete registered on team"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Team or athlete not found"),
        (status = 409, description = "Athlete is already on this team")
    ),
    tag = "clubs"
)]
pub async fn add_team_member(
    State(db): State<Database>,
    Path(id): Path<Uuid>,
    Json(request): Json<AddTeamMemberRequest>,
) -> WebResult<Response> {
    services::add_team_member(db.pool(), id, request.athlete_id).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}

#[utoipa::path(
    get,
    path = "/api/clubs/teams/{id}/members",
    params(
        ("id" = Uuid, Path, description = "Team ID")
    ),
    responses(
        (status = 200, description = "Athletes registered on the team", body = Vec<Athlete>),
        (status = 404, description = "Team not found")
    ),
    tag = "clubs"
)]
pub async fn list_team_members(
    State(db): State<Database>,
    Path(id): Path<Uuid>,
) -> WebResult<Response> {
    let members = services::list_team_members(db.pool(), id).await?;

    Ok(Json(members).into_response())
}
