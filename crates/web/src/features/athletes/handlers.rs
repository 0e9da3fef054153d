use axum::{
    Json,
    extract::{Path, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use chrono::Utc;
use storage::{
    Database,
    dto::athlete::{AthleteResponse, CreateAthleteRequest, RosterEntry, UpdateAthleteRequest},
};
use uuid::Uuid;
use validator::Validate;

use crate::error::WebResult;

use super::services;

#[utoipa::path(
    get,
    path = "/api/athletes",
    responses(
        (status = 200, description = "List all athletes with derived age and weight division", body = Vec<AthleteResponse>)
    ),
    tag = "athletes"
)]
pub async fn list_athletes(State(db): State<Database>) -> WebResult<Response> {
    let today = Utc::now().date_naive();
    let athletes = services::list_athletes(db.pool(), today).await?;

    Ok(Json(athletes).into_response())
}

#[utoipa::path(
    get,
    path = "/api/athletes/{id}",
    params(
        ("id" = Uuid, Path, description = "Athlete ID")
    ),
    responses(
        (status = 200, description = "Athlete found", body = AthleteResponse),
        (status = 404, description = "Athlete not found")
    ),
    tag = "athletes"
)]
pub async fn get_athlete(
    State(db): State<Database>,
    Path(id): Path<Uuid>,
) -> WebResult<Response> {
    let today = Utc::now().date_naive();
    let athlete = services::get_athlete(db.pool(), id, today).await?;

    Ok(Json(athlete).into_response())
}

#[utoipa::path(
    get,
    path = "/api/athletes/roster",
    responses(
        (status = 200, description = "Combined roster of athletes and competing coaches", body = Vec<RosterEntry>)
    ),
    tag = "athletes"
)]
pub async fn get_roster(State(db): State<Database>) -> WebResult<Response> {
    let today = Utc::now().date_naive();
    let entries = services::roster(db.pool(), today).await?;

    Ok(Json(entries).into_response())
}

#[utoipa::path(
    get,
    path = "/api/athletes/export",
    responses(
        (status = 200, description = "Roster as CSV", content_type = "text/csv")
    ),
    tag = "athletes"
)]
pub async fn export_roster(State(db): State<Database>) -> WebResult<Response> {
    let today = Utc::now().date_naive();
    let csv = services::roster_csv(db.pool(), today).await?;

    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"roster.csv\"",
            ),
        ],
        csv,
    )
        .into_response())
}

#[utoipa::path(
    post,
    path = "/api/athletes",
    request_body = CreateAthleteRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 201, description = "Athlete created successfully", body = AthleteResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized")
    ),
    tag = "athletes"
)]
pub async fn create_athlete(
    State(db): State<Database>,
    Json(request): Json<CreateAthleteRequest>,
) -> WebResult<Response> {
    request.validate()?;

    let today = Utc::now().date_naive();
    let athlete = services::create_athlete(db.pool(), &request, today).await?;

    Ok((StatusCode::CREATED, Json(athlete)).into_response())
}

#[utoipa::path(
    put,
    path = "/api/athletes/{id}",
    params(
        ("id" = Uuid, Path, description = "Athlete ID")
    ),
    request_body = UpdateAthleteRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Athlete updated successfully", body = AthleteResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Athlete not found")
    ),
    tag = "athletes"
)]
pub async fn update_athlete(
    State(db): State<Database>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateAthleteRequest>,
) -> WebResult<Response> {
    request.validate()?;

    let today = Utc::now().date_naive();
    let athlete = services::update_athlete(db.pool(), id, &request, today).await?;

    Ok(Json(athlete).into_response())
}

#[utoipa::path(
    delete,
    path = "/api/athletes/{id}",
    params(
        ("id" = Uuid, Path, description = "Athlete ID")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 204, description = "Athlete deleted"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Athlete not found")
    ),
    tag = "athletes"
)]
pub async fn delete_athlete(
    State(db): State<Database>,
    Path(id): Path<Uuid>,
) -> WebResult<Response> {
    services::delete_athlete(db.pool(), id).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}
