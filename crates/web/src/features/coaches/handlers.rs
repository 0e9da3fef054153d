use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::Utc;
use storage::{
    Database,
    dto::coach::{CoachResponse, CreateCoachRequest, UpdateCoachRequest},
};
use uuid::Uuid;
use validator::Validate;

use crate::error::WebResult;

use super::services;

#[utoipa::path(
    get,
    path = "/api/coaches",
    responses(
        (status = 200, description = "List all coaches", body = Vec<CoachResponse>)
    ),
    tag = "coaches"
)]
pub async fn list_coaches(State(db): State<Database>) -> WebResult<Response> {
    let today = Utc::now().date_naive();
    let coaches = services::list_coaches(db.pool(), today).await?;

    Ok(Json(coaches).into_response())
}

#[utoipa::path(
    get,
    path = "/api/coaches/{id}",
    params(
        ("id" = Uuid, Path, description = "Coach ID")
    ),
    responses(
        (status = 200, description = "Coach found", body = CoachResponse),
        (status = 404, description = "Coach not found")
    ),
    tag = "coaches"
)]
pub async fn get_coach(
    State(db): State<Database>,
    Path(id): Path<Uuid>,
) -> WebResult<Response> {
    let today = Utc::now().date_naive();
    let coach = services::get_coach(db.pool(), id, today).await?;

    Ok(Json(coach).into_response())
}

#[utoipa::path(
    post,
    path = "/api/coaches",
    request_body = CreateCoachRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 201, description = "Coach created successfully", body = CoachResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized")
    ),
    tag = "coaches"
)]
pub async fn create_coach(
    State(db): State<Database>,
    Json(request): Json<CreateCoachRequest>,
) -> WebResult<Response> {
    request.validate()?;

    let today = Utc::now().date_naive();
    let coach = services::create_coach(db.pool(), &request, today).await?;

    Ok((StatusCode::CREATED, Json(coach)).into_response())
}

#[utoipa::path(
    put,
    path = "/api/coaches/{id}",
    params(
        ("id" = Uuid, Path, description = "Coach ID")
    ),
    request_body = UpdateCoachRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Coach updated successfully", body = CoachResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Coach not found")
    ),
    tag = "coaches"
)]
pub async fn update_coach(
    State(db): State<Database>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateCoachRequest>,
) -> WebResult<Response> {
    request.validate()?;

    let today = Utc::now().date_naive();
    let coach = services::update_coach(db.pool(), id, &request, today).await?;

    Ok(Json(coach).into_response())
}

#[utoipa::path(
    delete,
    path = "/api/coaches/{id}",
    params(
        ("id" = Uuid, Path, description = "Coach ID")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 204, description = "Coach deleted"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Coach not found")
    ),
    tag = "coaches"
)]
pub async fn delete_coach(
    State(db): State<Database>,
    Path(id): Path<Uuid>,
) -> WebResult<Response> {
    services::delete_coach(db.pool(), id).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}
